/// One decoded 24-bit pixel.
///
/// BMP stores channels as blue, green, red; this is already reordered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Build from an on-disk B, G, R triple.
    #[inline]
    pub const fn from_bgr([blue, green, red]: [u8; 3]) -> Self {
        Self { red, green, blue }
    }

    /// Channels in R, G, B order.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Color {
    /// Interprets the array as R, G, B.
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self { red, green, blue }
    }
}

#[cfg(feature = "rgb")]
impl From<Color> for rgb::RGB8 {
    fn from(c: Color) -> Self {
        rgb::RGB8::new(c.red, c.green, c.blue)
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGB8> for Color {
    fn from(c: rgb::RGB8) -> Self {
        Self::new(c.r, c.g, c.b)
    }
}
