//! # bmprows
//!
//! Row-at-a-time reader for BMP (Windows bitmap) images.
//!
//! The reader parses the 14-byte file header and the DIB header straight
//! from a seekable stream, then decodes individual scanlines on demand. The
//! whole image is never held in memory: each [`BmpReader::row`] call seeks to
//! the stored row and reads just that row, which suits microcontrollers
//! driving small displays as well as random access into large files.
//!
//! ## Supported input
//!
//! - File type tags `BM`, `BA`, `CI`, `CP`, `IC`, `PT` (only `BM` carries
//!   pixel data in practice)
//! - DIB headers of 40, 52, 56, 108 and 124 bytes, and larger headers read
//!   as a superset of the 40-byte layout
//! - Uncompressed 24-bit BGR pixel data, bottom-up or top-down
//!
//! ## Non-Goals
//!
//! - Encoding BMP files
//! - RLE, bitfield, JPEG or PNG compressed pixel data
//! - Palette images and bit depths other than 24
//! - The 12-byte BITMAPCOREHEADER and OS/2 header variants
//!
//! ## Usage
//!
//! ```no_run
//! use bmprows::{BmpReader, Color};
//! use std::fs::File;
//!
//! let mut file = File::open("image.bmp")?;
//! let mut reader = BmpReader::new(&mut file);
//!
//! let (w, h) = (reader.width()?, reader.height()?);
//! println!("{w}x{h}");
//!
//! let top: Vec<Color> = reader.row(0)?;
//! println!("first pixel: {:?}", top[0]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): any `Read + Seek` is a [`ByteStream`]
//! - `log`: trace/debug records through the `log` crate
//! - `rgb`: conversions between [`Color`] and `rgb::RGB8`

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod limits;
mod log;
mod options;
mod pixel;
mod stream;

pub mod bmp;

// Re-exports
pub use bmp::{
    BmpReader, CompressionType, DibHeader, DibVariant, FileHeader, HeaderType, ImageInfo,
    RowOrder, row_stride,
};
pub use enough::{Stop, Unstoppable};
pub use error::BmpError;
pub use limits::Limits;
pub use options::{
    DEFAULT_MAX_DIMENSION, DEFAULT_MAX_HEADER_SIZE, DEFAULT_MAX_ROW_BYTES, DecoderOptions,
};
pub use pixel::Color;
pub use stream::{ByteStream, SliceStream};
