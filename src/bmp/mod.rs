//! BMP reader: file header, DIB header and on-demand 24-bit rows.

mod decode;
mod dib;
mod header;
mod utils;

pub use decode::RowOrder;
pub use dib::{ChannelMasks, ColorSpace, CompressionType, DibHeader, DibVariant, ProfileInfo};
pub use header::{FILE_HEADER_SIZE, FileHeader, HeaderType};
pub use utils::row_stride;

use alloc::vec;
use alloc::vec::Vec;
use enough::Stop;

use crate::error::BmpError;
use crate::log::trace;
use crate::options::DecoderOptions;
use crate::pixel::Color;
use crate::stream::ByteStream;
use decode::{RowLayout, decode_bgr_row};

/// Header state for one reader. Failed parses leave it `Unparsed`.
#[derive(Clone, Copy, Debug)]
enum Cached<T> {
    Unparsed,
    Parsed(T),
}

/// Summary of a BMP image, from its headers alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct ImageInfo {
    pub header_type: HeaderType,
    pub variant: DibVariant,
    pub width: u32,
    /// Absolute row count, whatever the storage order.
    pub height: u32,
    pub row_order: RowOrder,
    pub bits_per_pixel: u16,
    pub compression: CompressionType,
}

impl ImageInfo {
    /// Whether [`BmpReader::row`] can decode this image.
    pub fn is_decodable(&self) -> bool {
        self.bits_per_pixel == 24 && self.compression == CompressionType::Rgb
    }
}

/// Reads a BMP image one row at a time from a seekable stream.
///
/// Headers are parsed on first use and kept for the life of the reader.
/// Rows are never cached: every call seeks and reads the stored row again,
/// so memory use stays at one row regardless of image size.
///
/// ```
/// use bmprows::{BmpReader, SliceStream};
///
/// # fn run(bytes: &[u8]) -> Result<(), bmprows::BmpError> {
/// let mut reader = BmpReader::new(SliceStream::new(bytes));
/// for y in 0..reader.height()? {
///     let row = reader.row(y as i32)?;
///     assert_eq!(row.len(), reader.width()? as usize);
/// }
/// # Ok(())
/// # }
/// ```
///
/// The reader owns `S`. Pass `&mut File` (or any `&mut` to a `Read + Seek`)
/// to keep using the stream afterwards, or take it back with
/// [`into_inner`](Self::into_inner).
#[derive(Debug)]
pub struct BmpReader<S> {
    stream: S,
    options: DecoderOptions,
    file_header: Cached<FileHeader>,
    dib_header: Cached<DibHeader>,
}

impl<S: ByteStream> BmpReader<S> {
    pub fn new(stream: S) -> Self {
        Self::with_options(stream, DecoderOptions::default())
    }

    pub fn with_options(stream: S, options: DecoderOptions) -> Self {
        Self {
            stream,
            options,
            file_header: Cached::Unparsed,
            dib_header: Cached::Unparsed,
        }
    }

    /// The 14-byte file header, parsed on first call.
    pub fn read_file_header(&mut self) -> Result<FileHeader, BmpError> {
        if let Cached::Parsed(h) = self.file_header {
            return Ok(h);
        }
        let h = header::parse_file_header(&mut self.stream)?;
        trace!(
            "file header: type {}, size {}, pixel data at {}",
            h.header_type, h.file_size, h.pixel_data_offset
        );
        self.file_header = Cached::Parsed(h);
        Ok(h)
    }

    /// The DIB header, parsed on first call.
    ///
    /// Configured [`Limits`](crate::Limits) are checked here; a violation is
    /// returned like any other parse failure and nothing is cached.
    pub fn read_dib_header(&mut self) -> Result<DibHeader, BmpError> {
        if let Cached::Parsed(h) = self.dib_header {
            return Ok(h);
        }
        let h = dib::parse_dib_header(&mut self.stream, self.options.max_header_size())?;
        if let Some(limits) = self.options.limits() {
            limits.check_header(&h)?;
        }
        self.dib_header = Cached::Parsed(h);
        Ok(h)
    }

    /// Image width in pixels.
    pub fn width(&mut self) -> Result<u32, BmpError> {
        let dib = self.read_dib_header()?;
        u32::try_from(dib.width)
            .map_err(|_| BmpError::InvalidFormat(alloc::format!("negative width {}", dib.width)))
    }

    /// Image height in pixels. Top-down images report the absolute value.
    pub fn height(&mut self) -> Result<u32, BmpError> {
        Ok(self.read_dib_header()?.height.unsigned_abs())
    }

    /// Probe both headers without touching pixel data.
    pub fn info(&mut self) -> Result<ImageInfo, BmpError> {
        let file = self.read_file_header()?;
        let dib = self.read_dib_header()?;
        Ok(ImageInfo {
            header_type: file.header_type,
            variant: dib.variant(),
            width: self.width()?,
            height: dib.height.unsigned_abs(),
            row_order: RowOrder::from_height(dib.height),
            bits_per_pixel: dib.bits_per_pixel,
            compression: dib.compression,
        })
    }

    /// Decode display row `row` (0 is the top of the image).
    ///
    /// Fails without any pixel I/O if the image is not uncompressed 24-bit
    /// or if `row` is outside `0..height`.
    pub fn row(&mut self, row: i32) -> Result<Vec<Color>, BmpError> {
        let layout = self.layout()?;
        layout.on_disk_row(i64::from(row))?;
        let mut out = vec![Color::default(); layout.width as usize];
        let mut raw = vec![0u8; layout.stride_bytes()?];
        self.read_row_with(&layout, i64::from(row), &mut raw, &mut out)?;
        Ok(out)
    }

    /// Decode display row `row` into `out`, which must hold at least
    /// `width` pixels. Pixels past `width` are left untouched.
    pub fn read_row_into(&mut self, row: i32, out: &mut [Color]) -> Result<(), BmpError> {
        let layout = self.layout()?;
        layout.on_disk_row(i64::from(row))?;
        let width = layout.width as usize;
        if out.len() < width {
            return Err(BmpError::BufferTooSmall {
                needed: width,
                actual: out.len(),
            });
        }
        let mut raw = vec![0u8; layout.stride_bytes()?];
        self.read_row_with(&layout, i64::from(row), &mut raw, &mut out[..width])
    }

    /// Decode every row from top to bottom, handing each to `f` with its
    /// display index. One row buffer is reused for the whole scan.
    ///
    /// `stop` is checked every 16 rows.
    pub fn for_each_row<F>(&mut self, stop: impl Stop, mut f: F) -> Result<(), BmpError>
    where
        F: FnMut(u32, &[Color]),
    {
        let layout = self.layout()?;
        let mut out = vec![Color::default(); layout.width as usize];
        let mut raw = vec![0u8; layout.stride_bytes()?];
        for y in 0..layout.height {
            if y % 16 == 0 {
                stop.check()?;
            }
            self.read_row_with(&layout, i64::from(y), &mut raw, &mut out)?;
            f(y, &out);
        }
        Ok(())
    }

    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    pub fn get_ref(&self) -> &S {
        &self.stream
    }

    /// Give the stream back. Cached headers are dropped with the reader.
    pub fn into_inner(self) -> S {
        self.stream
    }

    fn layout(&mut self) -> Result<RowLayout, BmpError> {
        let file = self.read_file_header()?;
        let dib = self.read_dib_header()?;
        RowLayout::new(&file, &dib, self.options.limits())
    }

    fn read_row_with(
        &mut self,
        layout: &RowLayout,
        row: i64,
        raw: &mut [u8],
        out: &mut [Color],
    ) -> Result<(), BmpError> {
        let offset = layout.row_offset(row)?;
        trace!("row {row}: {} bytes at offset {offset}", raw.len());
        self.stream.seek_to(offset)?;
        self.stream.read_exact_bytes(raw)?;
        decode_bgr_row(raw, out);
        Ok(())
    }
}
