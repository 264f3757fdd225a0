//! The fixed 14-byte BMP file header.

use core::fmt;

use super::utils::u32_le;
use crate::error::BmpError;
use crate::stream::ByteStream;

/// Size of the file header on disk.
pub const FILE_HEADER_SIZE: usize = 14;

/// Two-byte type tag at the start of every BMP file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeaderType {
    /// Windows bitmap. The only tag with pixel data this crate decodes.
    Bm,
    /// OS/2 struct bitmap array.
    Ba,
    /// OS/2 struct color icon.
    Ci,
    /// OS/2 const color pointer.
    Cp,
    /// OS/2 struct icon.
    Ic,
    /// OS/2 pointer.
    Pt,
}

impl HeaderType {
    pub fn from_bytes(tag: [u8; 2]) -> Option<Self> {
        match &tag {
            b"BM" => Some(Self::Bm),
            b"BA" => Some(Self::Ba),
            b"CI" => Some(Self::Ci),
            b"CP" => Some(Self::Cp),
            b"IC" => Some(Self::Ic),
            b"PT" => Some(Self::Pt),
            _ => None,
        }
    }

    pub fn as_bytes(self) -> [u8; 2] {
        *match self {
            Self::Bm => b"BM",
            Self::Ba => b"BA",
            Self::Ci => b"CI",
            Self::Cp => b"CP",
            Self::Ic => b"IC",
            Self::Pt => b"PT",
        }
    }
}

impl fmt::Display for HeaderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.as_bytes();
        write!(f, "{}{}", char::from(a), char::from(b))
    }
}

/// Decoded BMP file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FileHeader {
    pub header_type: HeaderType,
    /// Total file size as recorded in the header (not verified).
    pub file_size: u32,
    /// Application-defined; kept verbatim.
    pub reserved1: [u8; 2],
    pub reserved2: [u8; 2],
    /// Byte offset from the start of the file to the first pixel byte.
    pub pixel_data_offset: u32,
}

impl FileHeader {
    /// Decode from the 14 raw header bytes.
    pub fn from_bytes(bytes: &[u8; FILE_HEADER_SIZE]) -> Result<Self, BmpError> {
        let tag = [bytes[0], bytes[1]];
        let header_type = HeaderType::from_bytes(tag).ok_or_else(|| {
            BmpError::InvalidFormat(alloc::format!(
                "unrecognized BMP type tag {:02x} {:02x}",
                tag[0],
                tag[1]
            ))
        })?;

        let pixel_data_offset = u32_le(bytes, 10);
        if (pixel_data_offset as usize) < FILE_HEADER_SIZE {
            return Err(BmpError::InvalidFormat(alloc::format!(
                "pixel data offset {pixel_data_offset} lies inside the file header"
            )));
        }

        Ok(Self {
            header_type,
            file_size: u32_le(bytes, 2),
            reserved1: [bytes[6], bytes[7]],
            reserved2: [bytes[8], bytes[9]],
            pixel_data_offset,
        })
    }
}

/// Seek to offset 0 and decode the file header.
pub(crate) fn parse_file_header<S: ByteStream>(stream: &mut S) -> Result<FileHeader, BmpError> {
    let mut bytes = [0u8; FILE_HEADER_SIZE];
    stream.seek_to(0)?;
    stream.read_exact_bytes(&mut bytes)?;
    FileHeader::from_bytes(&bytes)
}
