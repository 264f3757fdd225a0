//! Little-endian field access and row geometry.

/// Read a `u16` at `off`. Callers guarantee `off + 2 <= buf.len()`.
#[inline]
pub(crate) fn u16_le(buf: &[u8], off: usize) -> u16 {
    u16::from_le_bytes([buf[off], buf[off + 1]])
}

#[inline]
pub(crate) fn u32_le(buf: &[u8], off: usize) -> u32 {
    u32::from_le_bytes([buf[off], buf[off + 1], buf[off + 2], buf[off + 3]])
}

#[inline]
pub(crate) fn i32_le(buf: &[u8], off: usize) -> i32 {
    u32_le(buf, off) as i32
}

/// Byte length of one stored 24-bit row, padded to a 4-byte boundary.
///
/// `ceil(3 * width / 4) * 4`. Returns `None` only if the result overflows.
///
/// ```
/// assert_eq!(bmprows::row_stride(1), Some(4));
/// assert_eq!(bmprows::row_stride(4), Some(12));
/// assert_eq!(bmprows::row_stride(30), Some(92));
/// ```
pub fn row_stride(width: u32) -> Option<u64> {
    u64::from(width)
        .checked_mul(3)
        .map(|bytes| bytes.div_ceil(4) * 4)
}
