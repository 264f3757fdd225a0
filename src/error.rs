use alloc::string::String;
use enough::StopReason;

use crate::bmp::CompressionType;

/// Errors from BMP header parsing and row decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("unexpected end of input")]
    TruncatedInput,

    #[error("invalid BMP: {0}")]
    InvalidFormat(String),

    #[error("DIB header size {size} exceeds limit {limit}")]
    HeaderTooLarge { size: u32, limit: u32 },

    #[error("unsupported DIB header variant ({0} bytes)")]
    UnsupportedHeaderVariant(u32),

    #[error("unsupported pixel format: {bits_per_pixel} bits per pixel")]
    UnsupportedPixelFormat { bits_per_pixel: u16 },

    #[error("unsupported compression: {0}")]
    UnsupportedCompression(CompressionType),

    #[error("row index {row} out of range for height {height}")]
    RowIndexOutOfRange { row: i64, height: u32 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("buffer too small: need {needed} pixels, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(std::io::Error),
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for BmpError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => BmpError::TruncatedInput,
            _ => BmpError::Io(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn pixel_format_message_names_depth() {
        let err = BmpError::UnsupportedPixelFormat { bits_per_pixel: 16 };
        assert!(err.to_string().contains("16 bits per pixel"));
    }

    #[cfg(feature = "std")]
    #[test]
    fn eof_maps_to_truncated() {
        let io = std::io::Error::from(std::io::ErrorKind::UnexpectedEof);
        assert!(matches!(BmpError::from(io), BmpError::TruncatedInput));

        let io = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        assert!(matches!(BmpError::from(io), BmpError::Io(_)));
    }
}
