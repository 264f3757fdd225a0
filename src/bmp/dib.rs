//! The variable-length DIB (bitmap information) header.
//!
//! Only the BITMAPINFOHEADER family is decoded: 40, 52, 56, 108 and 124
//! byte headers, plus anything larger, which is read as a superset of the
//! 40-byte layout. The 12-byte core header and OS/2 variants are rejected.

use alloc::vec;
use core::fmt;

use super::header::FILE_HEADER_SIZE;
use super::utils::{i32_le, u16_le, u32_le};
use crate::error::BmpError;
use crate::log::{debug, trace};
use crate::stream::ByteStream;

/// Compression code from the DIB header.
///
/// Unknown codes are kept in [`Other`](Self::Other) so the header still
/// parses; only the row reader rejects them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompressionType {
    Rgb,
    Rle8,
    Rle4,
    Bitfields,
    Jpeg,
    Png,
    AlphaBitfields,
    Cmyk,
    CmykRle8,
    CmykRle4,
    Other(u32),
}

impl CompressionType {
    pub fn from_u32(code: u32) -> Self {
        match code {
            0 => Self::Rgb,
            1 => Self::Rle8,
            2 => Self::Rle4,
            3 => Self::Bitfields,
            4 => Self::Jpeg,
            5 => Self::Png,
            6 => Self::AlphaBitfields,
            11 => Self::Cmyk,
            12 => Self::CmykRle8,
            13 => Self::CmykRle4,
            other => Self::Other(other),
        }
    }

    /// The on-disk code.
    pub fn code(self) -> u32 {
        match self {
            Self::Rgb => 0,
            Self::Rle8 => 1,
            Self::Rle4 => 2,
            Self::Bitfields => 3,
            Self::Jpeg => 4,
            Self::Png => 5,
            Self::AlphaBitfields => 6,
            Self::Cmyk => 11,
            Self::CmykRle8 => 12,
            Self::CmykRle4 => 13,
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for CompressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb => f.write_str("BI_RGB"),
            Self::Rle8 => f.write_str("BI_RLE8"),
            Self::Rle4 => f.write_str("BI_RLE4"),
            Self::Bitfields => f.write_str("BI_BITFIELDS"),
            Self::Jpeg => f.write_str("BI_JPEG"),
            Self::Png => f.write_str("BI_PNG"),
            Self::AlphaBitfields => f.write_str("BI_ALPHABITFIELDS"),
            Self::Cmyk => f.write_str("BI_CMYK"),
            Self::CmykRle8 => f.write_str("BI_CMYKRLE8"),
            Self::CmykRle4 => f.write_str("BI_CMYKRLE4"),
            Self::Other(code) => write!(f, "unknown ({code})"),
        }
    }
}

/// Which member of the BITMAPINFOHEADER family the header size names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DibVariant {
    /// BITMAPINFOHEADER, 40 bytes.
    Info,
    /// BITMAPV2INFOHEADER, 52 bytes (adds RGB masks).
    V2,
    /// BITMAPV3INFOHEADER, 56 bytes (adds alpha mask).
    V3,
    /// BITMAPV4HEADER, 108 bytes (adds color space).
    V4,
    /// BITMAPV5HEADER, 124 bytes (adds ICC profile info).
    V5,
    /// Larger than any known header; the known prefix is decoded.
    Extended(u32),
}

impl DibVariant {
    /// Map a header size to a supported variant.
    pub fn from_size(size: u32) -> Option<Self> {
        match size {
            40 => Some(Self::Info),
            52 => Some(Self::V2),
            56 => Some(Self::V3),
            108 => Some(Self::V4),
            124 => Some(Self::V5),
            n if n > 124 => Some(Self::Extended(n)),
            _ => None,
        }
    }

    pub fn size(self) -> u32 {
        match self {
            Self::Info => 40,
            Self::V2 => 52,
            Self::V3 => 56,
            Self::V4 => 108,
            Self::V5 => 124,
            Self::Extended(n) => n,
        }
    }
}

/// Channel bit masks (V2 headers and later).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelMasks {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
    /// Only present from the 56-byte header on.
    pub alpha: Option<u32>,
}

/// Color space block (V4 headers and later).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorSpace {
    /// `LCS_CALIBRATED_RGB`, `sRGB`, `Win ` and so on, as a raw tag.
    pub cs_type: u32,
    /// CIEXYZ endpoints for red, green and blue, in 2.30 fixed point.
    pub endpoints: [[i32; 3]; 3],
    /// Red, green, blue gamma, 16.16 fixed point.
    pub gamma: [u32; 3],
}

/// ICC profile location and rendering intent (V5 headers and later).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProfileInfo {
    pub intent: u32,
    /// Offset from the start of the DIB header to the profile data.
    pub data_offset: u32,
    pub size: u32,
}

/// Decoded DIB header.
///
/// The ten BITMAPINFOHEADER fields are always present. The extended
/// records are `Some` only when the on-disk header is large enough to
/// contain them, so "absent" and "zero" stay distinguishable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DibHeader {
    /// Size field as stored, including its own 4 bytes.
    pub header_size: u32,
    pub width: i32,
    /// Positive for bottom-up rows, negative for top-down.
    pub height: i32,
    pub color_planes: u16,
    pub bits_per_pixel: u16,
    pub compression: CompressionType,
    /// May be 0 for uncompressed images.
    pub bitmap_size: u32,
    pub h_resolution_ppm: i32,
    pub v_resolution_ppm: i32,
    pub palette_colors: u32,
    pub important_colors: u32,
    pub masks: Option<ChannelMasks>,
    pub color_space: Option<ColorSpace>,
    pub profile: Option<ProfileInfo>,
}

impl DibHeader {
    pub fn variant(&self) -> DibVariant {
        // Hand-built headers may carry a size the parser would reject.
        DibVariant::from_size(self.header_size).unwrap_or(DibVariant::Extended(self.header_size))
    }

    /// Decode the header body, i.e. the `header_size - 4` bytes after the
    /// size field.
    pub fn from_body(header_size: u32, body: &[u8]) -> Result<Self, BmpError> {
        if DibVariant::from_size(header_size).is_none() {
            return Err(BmpError::UnsupportedHeaderVariant(header_size));
        }
        if body.len() + 4 < header_size as usize {
            return Err(BmpError::TruncatedInput);
        }
        // Offsets below are relative to the byte after the size field.
        let covers = |end: usize| header_size as usize >= end + 4;

        let masks = covers(48).then(|| ChannelMasks {
            red: u32_le(body, 36),
            green: u32_le(body, 40),
            blue: u32_le(body, 44),
            alpha: covers(52).then(|| u32_le(body, 48)),
        });

        let color_space = covers(104).then(|| {
            let mut endpoints = [[0i32; 3]; 3];
            for (i, xyz) in endpoints.iter_mut().enumerate() {
                for (j, v) in xyz.iter_mut().enumerate() {
                    *v = i32_le(body, 56 + (i * 3 + j) * 4);
                }
            }
            ColorSpace {
                cs_type: u32_le(body, 52),
                endpoints,
                gamma: [u32_le(body, 92), u32_le(body, 96), u32_le(body, 100)],
            }
        });

        let profile = covers(120).then(|| ProfileInfo {
            intent: u32_le(body, 104),
            data_offset: u32_le(body, 108),
            size: u32_le(body, 112),
        });

        Ok(Self {
            header_size,
            width: i32_le(body, 0),
            height: i32_le(body, 4),
            color_planes: u16_le(body, 8),
            bits_per_pixel: u16_le(body, 10),
            compression: CompressionType::from_u32(u32_le(body, 12)),
            bitmap_size: u32_le(body, 16),
            h_resolution_ppm: i32_le(body, 20),
            v_resolution_ppm: i32_le(body, 24),
            palette_colors: u32_le(body, 28),
            important_colors: u32_le(body, 32),
            masks,
            color_space,
            profile,
        })
    }
}

/// Seek past the file header and decode the DIB header.
pub(crate) fn parse_dib_header<S: ByteStream>(
    stream: &mut S,
    max_header_size: u32,
) -> Result<DibHeader, BmpError> {
    let mut size_bytes = [0u8; 4];
    stream.seek_to(FILE_HEADER_SIZE as u64)?;
    stream.read_exact_bytes(&mut size_bytes)?;

    let raw_size = i32::from_le_bytes(size_bytes);
    if raw_size <= 0 {
        return Err(BmpError::InvalidFormat(alloc::format!(
            "DIB header size {raw_size} is not positive"
        )));
    }
    let header_size = raw_size as u32;
    if header_size > max_header_size {
        return Err(BmpError::HeaderTooLarge {
            size: header_size,
            limit: max_header_size,
        });
    }
    let variant =
        DibVariant::from_size(header_size).ok_or(BmpError::UnsupportedHeaderVariant(header_size))?;
    trace!("DIB header variant {:?}", variant);

    let mut body = vec![0u8; header_size as usize - 4];
    stream.read_exact_bytes(&mut body)?;
    let header = DibHeader::from_body(header_size, &body)?;

    debug!(
        "DIB header: {} bytes, {}x{}, {} bpp, {}",
        header.header_size,
        header.width,
        header.height,
        header.bits_per_pixel,
        header.compression
    );
    Ok(header)
}
