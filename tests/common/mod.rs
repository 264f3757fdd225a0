//! In-memory BMP fixtures.

#![allow(dead_code)]

use bmprows::Color;

/// Builds BMP byte streams field by field, the way image editors write them.
#[derive(Clone, Debug)]
pub struct BmpBuilder {
    pub tag: [u8; 2],
    pub reserved: [u8; 4],
    pub dib_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bpp: u16,
    pub compression: u32,
    pub resolution: (i32, i32),
    /// Pixels in display order, top row first.
    pub rows: Vec<Vec<Color>>,
}

impl BmpBuilder {
    pub fn new(width: usize, height: usize, fill: Color) -> Self {
        Self {
            tag: *b"BM",
            reserved: [0; 4],
            dib_size: 40,
            width: width as i32,
            height: height as i32,
            planes: 1,
            bpp: 24,
            compression: 0,
            resolution: (2835, 2835),
            rows: vec![vec![fill; width]; height],
        }
    }

    pub fn from_rows(rows: Vec<Vec<Color>>) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut b = Self::new(width, height, Color::BLACK);
        b.rows = rows;
        b
    }

    pub fn dib_size(mut self, size: u32) -> Self {
        self.dib_size = size;
        self
    }

    pub fn bpp(mut self, bpp: u16) -> Self {
        self.bpp = bpp;
        self
    }

    pub fn compression(mut self, code: u32) -> Self {
        self.compression = code;
        self
    }

    /// Store rows top-down (negative height).
    pub fn top_down(mut self) -> Self {
        self.height = -self.height.abs();
        self
    }

    pub fn set(mut self, x: usize, y: usize, c: Color) -> Self {
        self.rows[y][x] = c;
        self
    }

    pub fn stride(&self) -> usize {
        (self.width as usize * 3).div_ceil(4) * 4
    }

    pub fn pixel_offset(&self) -> u32 {
        14 + self.dib_size
    }

    pub fn file_header_bytes(&self) -> [u8; 14] {
        let file_size = self.pixel_offset() + (self.stride() * self.rows.len()) as u32;
        let mut out = [0u8; 14];
        out[0..2].copy_from_slice(&self.tag);
        out[2..6].copy_from_slice(&file_size.to_le_bytes());
        out[6..10].copy_from_slice(&self.reserved);
        out[10..14].copy_from_slice(&self.pixel_offset().to_le_bytes());
        out
    }

    /// The DIB header including its size field.
    pub fn dib_header_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.dib_size as usize);
        out.extend_from_slice(&self.dib_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bpp.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&((self.stride() * self.rows.len()) as u32).to_le_bytes());
        out.extend_from_slice(&self.resolution.0.to_le_bytes());
        out.extend_from_slice(&self.resolution.1.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        if self.dib_size >= 52 {
            out.extend_from_slice(&0x00ff_0000u32.to_le_bytes());
            out.extend_from_slice(&0x0000_ff00u32.to_le_bytes());
            out.extend_from_slice(&0x0000_00ffu32.to_le_bytes());
        }
        if self.dib_size >= 56 {
            out.extend_from_slice(&0u32.to_le_bytes());
        }
        if self.dib_size >= 108 {
            out.extend_from_slice(b"BGRs");
        }
        out.resize(self.dib_size as usize, 0);
        out
    }

    pub fn build(&self) -> Vec<u8> {
        let stride = self.stride();
        let mut out = Vec::new();
        out.extend_from_slice(&self.file_header_bytes());
        out.extend_from_slice(&self.dib_header_bytes());

        let stored: Vec<&Vec<Color>> = if self.height < 0 {
            self.rows.iter().collect()
        } else {
            self.rows.iter().rev().collect()
        };
        for row in stored {
            let start = out.len();
            for c in row {
                out.extend_from_slice(&[c.blue, c.green, c.red]);
            }
            out.resize(start + stride, 0);
        }
        out
    }
}

/// Deterministic xorshift colors.
pub fn noise_rows(w: usize, h: usize) -> Vec<Vec<Color>> {
    let mut state: u32 = 0xDEAD_BEEF;
    let mut bytes = vec![0u8; w * h * 3];
    for p in bytes.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *p = state as u8;
    }
    bytes
        .chunks_exact(3)
        .map(|c| Color::new(c[0], c[1], c[2]))
        .collect::<Vec<_>>()
        .chunks(w.max(1))
        .map(<[Color]>::to_vec)
        .collect()
}

pub fn checkerboard_rows(w: usize, h: usize) -> Vec<Vec<Color>> {
    (0..h)
        .map(|y| {
            (0..w)
                .map(|x| {
                    if (x + y) % 2 == 0 {
                        Color::new(200, 220, 240)
                    } else {
                        Color::new(10, 40, 70)
                    }
                })
                .collect()
        })
        .collect()
}
