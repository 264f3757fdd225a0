//! Seekable byte sources the reader pulls headers and rows from.

use crate::error::BmpError;

/// A seekable, readable byte source.
///
/// The reader only ever seeks to absolute offsets and then reads an exact
/// number of bytes, so this is all an implementation has to provide.
///
/// With the `std` feature every `Read + Seek` type implements this, which
/// covers `File`, `&mut File`, `BufReader<File>` and `io::Cursor`. Without
/// `std`, use [`SliceStream`] or implement the trait for your storage.
pub trait ByteStream {
    /// Move to `offset` bytes from the start of the stream.
    fn seek_to(&mut self, offset: u64) -> Result<(), BmpError>;

    /// Fill `buf` completely or fail with [`BmpError::TruncatedInput`].
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), BmpError>;
}

/// In-memory [`ByteStream`] over a borrowed slice.
///
/// Seeking past the end is allowed; the next read fails.
#[derive(Clone, Debug)]
pub struct SliceStream<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceStream<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The whole underlying slice.
    pub fn get_ref(&self) -> &'a [u8] {
        self.data
    }
}

impl ByteStream for SliceStream<'_> {
    fn seek_to(&mut self, offset: u64) -> Result<(), BmpError> {
        // Positions that don't fit usize are past the end of any slice.
        self.pos = usize::try_from(offset).unwrap_or(usize::MAX);
        Ok(())
    }

    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), BmpError> {
        let end = self
            .pos
            .checked_add(buf.len())
            .ok_or(BmpError::TruncatedInput)?;
        let src = self.data.get(self.pos..end).ok_or(BmpError::TruncatedInput)?;
        buf.copy_from_slice(src);
        self.pos = end;
        Ok(())
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read + std::io::Seek> ByteStream for R {
    fn seek_to(&mut self, offset: u64) -> Result<(), BmpError> {
        self.seek(std::io::SeekFrom::Start(offset))?;
        Ok(())
    }

    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), BmpError> {
        self.read_exact(buf)?;
        Ok(())
    }
}
