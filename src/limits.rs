use crate::bmp::DibHeader;
use crate::error::BmpError;

/// Resource limits applied to the parsed DIB header and to each row buffer.
///
/// All fields default to `None` (no limit). The default
/// [`DecoderOptions`](crate::DecoderOptions) fill in width, height and row
/// caps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_width: Option<u64>,
    /// Compared against the absolute DIB height, so top-down images count
    /// the same as bottom-up ones.
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for a single row buffer (the padded row stride).
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check the geometry a DIB header declares.
    pub(crate) fn check_header(&self, dib: &DibHeader) -> Result<(), BmpError> {
        let width = u64::from(dib.width.unsigned_abs());
        let height = u64::from(dib.height.unsigned_abs());
        within("width", width, self.max_width)?;
        within("height", height, self.max_height)?;
        within("pixel count", width * height, self.max_pixels)
    }

    /// Check one stored row of `stride` bytes.
    pub(crate) fn check_row(&self, stride: u64) -> Result<(), BmpError> {
        within("row stride in bytes", stride, self.max_memory_bytes)
    }
}

fn within(what: &str, value: u64, limit: Option<u64>) -> Result<(), BmpError> {
    match limit {
        Some(max) if value > max => Err(BmpError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}
