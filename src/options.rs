//! Reader options.

use crate::limits::Limits;

/// Default ceiling for the DIB header size field.
///
/// Real headers top out at 124 bytes; anything near this value is corrupt
/// input asking for a large allocation.
pub const DEFAULT_MAX_HEADER_SIZE: u32 = 100_000;

/// Default cap on width and height, 16384 pixels each.
pub const DEFAULT_MAX_DIMENSION: u64 = 1 << 14;

/// Default cap on one stored row, which bounds the per-row allocations.
///
/// 16 MiB is a little over five million 24-bit pixels per row.
pub const DEFAULT_MAX_ROW_BYTES: u64 = 16 * 1024 * 1024;

/// Options for a [`BmpReader`](crate::BmpReader).
///
/// ```
/// use bmprows::{DecoderOptions, Limits};
///
/// let opts = DecoderOptions::default()
///     .with_max_header_size(4096)
///     .with_limits(Limits {
///         max_width: Some(1920),
///         ..Limits::default()
///     });
/// assert_eq!(opts.max_header_size(), 4096);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoderOptions {
    max_header_size: u32,
    limits: Option<Limits>,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_header_size: DEFAULT_MAX_HEADER_SIZE,
            limits: Some(Limits {
                max_width: Some(DEFAULT_MAX_DIMENSION),
                max_height: Some(DEFAULT_MAX_DIMENSION),
                max_pixels: None,
                max_memory_bytes: Some(DEFAULT_MAX_ROW_BYTES),
            }),
        }
    }
}

impl DecoderOptions {
    /// Set the largest DIB header size accepted before failing with
    /// [`BmpError::HeaderTooLarge`](crate::BmpError::HeaderTooLarge).
    #[must_use]
    pub fn with_max_header_size(mut self, size: u32) -> Self {
        self.max_header_size = size;
        self
    }

    /// Set resource limits checked against the parsed DIB header.
    ///
    /// Replaces the default dimension and row-size caps; pass
    /// `Limits::default()` to read without any limits.
    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn max_header_size(&self) -> u32 {
        self.max_header_size
    }

    pub fn limits(&self) -> Option<&Limits> {
        self.limits.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = DecoderOptions::default();
        assert_eq!(opts.max_header_size(), 100_000);
        let limits = opts.limits().unwrap();
        assert_eq!(limits.max_memory_bytes, Some(DEFAULT_MAX_ROW_BYTES));
        assert_eq!(limits.max_width, Some(16384));
        assert_eq!(limits.max_height, Some(16384));
        assert_eq!(limits.max_pixels, None);
    }

    #[test]
    fn with_limits_replaces_default_cap() {
        let opts = DecoderOptions::default().with_limits(Limits::default());
        assert_eq!(opts.limits(), Some(&Limits::default()));
    }
}
