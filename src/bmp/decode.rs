//! Scanline addressing and 24-bit BGR row decoding.

use super::dib::{CompressionType, DibHeader};
use super::header::FileHeader;
use super::utils::row_stride;
use crate::error::BmpError;
use crate::limits::Limits;
use crate::pixel::Color;

/// Storage order of rows in the pixel array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowOrder {
    /// Positive DIB height: the last image row is stored first.
    BottomUp,
    /// Negative DIB height: rows are stored in display order.
    TopDown,
}

impl RowOrder {
    pub(crate) fn from_height(height: i32) -> Self {
        if height < 0 { Self::TopDown } else { Self::BottomUp }
    }
}

/// Where each row of a decodable image lives in the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RowLayout {
    pub width: u32,
    pub height: u32,
    pub order: RowOrder,
    /// Padded on-disk row length in bytes.
    pub stride: u64,
    pub pixel_data_offset: u64,
}

impl RowLayout {
    /// Validate that the headers describe something this reader can decode.
    ///
    /// Checks run in a fixed order: bit depth, compression, then geometry.
    pub(crate) fn new(
        file: &FileHeader,
        dib: &DibHeader,
        limits: Option<&Limits>,
    ) -> Result<Self, BmpError> {
        if dib.bits_per_pixel != 24 {
            return Err(BmpError::UnsupportedPixelFormat {
                bits_per_pixel: dib.bits_per_pixel,
            });
        }
        if dib.compression != CompressionType::Rgb {
            return Err(BmpError::UnsupportedCompression(dib.compression));
        }
        if dib.width < 0 {
            return Err(BmpError::InvalidFormat(alloc::format!(
                "negative width {}",
                dib.width
            )));
        }

        let width = dib.width as u32;
        let height = dib.height.unsigned_abs();
        let stride = row_stride(width).ok_or(BmpError::DimensionsTooLarge { width, height })?;
        if let Some(limits) = limits {
            limits.check_row(stride)?;
        }

        Ok(Self {
            width,
            height,
            order: RowOrder::from_height(dib.height),
            stride,
            pixel_data_offset: u64::from(file.pixel_data_offset),
        })
    }

    /// Index of the stored row holding display row `row`.
    pub(crate) fn on_disk_row(&self, row: i64) -> Result<u64, BmpError> {
        if row < 0 || row >= i64::from(self.height) {
            return Err(BmpError::RowIndexOutOfRange {
                row,
                height: self.height,
            });
        }
        let row = row as u64;
        Ok(match self.order {
            RowOrder::BottomUp => (u64::from(self.height) - row) - 1,
            RowOrder::TopDown => row,
        })
    }

    /// Absolute stream offset of display row `row`.
    pub(crate) fn row_offset(&self, row: i64) -> Result<u64, BmpError> {
        let disk_row = self.on_disk_row(row)?;
        self.stride
            .checked_mul(disk_row)
            .and_then(|off| off.checked_add(self.pixel_data_offset))
            .ok_or(BmpError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            })
    }

    /// Row buffer length as `usize`.
    pub(crate) fn stride_bytes(&self) -> Result<usize, BmpError> {
        usize::try_from(self.stride).map_err(|_| BmpError::DimensionsTooLarge {
            width: self.width,
            height: self.height,
        })
    }
}

/// Convert the BGR triples at the start of `raw` into `out`.
///
/// `raw` holds one stored row; trailing padding is ignored. Only
/// `out.len()` pixels are written.
pub(crate) fn decode_bgr_row(raw: &[u8], out: &mut [Color]) {
    for (px, bgr) in out.iter_mut().zip(raw.chunks_exact(3)) {
        *px = Color::from_bgr([bgr[0], bgr[1], bgr[2]]);
    }
}
