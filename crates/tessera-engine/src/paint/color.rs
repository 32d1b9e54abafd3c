use core::fmt;

/// Straight-alpha 8-bit ARGB color, as carried by command records.
///
/// The wire form is a hex literal of the packed 32-bit value, e.g.
/// `"0xffff0000"` for opaque red.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_argb(0xffff_ffff);
    pub const BLACK: Color = Color::from_argb(0xff00_0000);

    #[inline]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Unpacks a `0xAARRGGBB` value.
    #[inline]
    pub const fn from_argb(v: u32) -> Self {
        Self {
            a: (v >> 24) as u8,
            r: (v >> 16) as u8,
            g: (v >> 8) as u8,
            b: v as u8,
        }
    }

    /// Packs into `0xAARRGGBB`.
    #[inline]
    pub const fn argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Parses the textual form `0xAARRGGBB` (prefix `0x` or `0X`, 1 to 8 hex digits).
    ///
    /// Short literals are zero-extended the way an integer parse would, so
    /// `"0xff"` is a fully transparent blue. Anything else yields `None`.
    pub fn parse_hex(s: &str) -> Option<Color> {
        let s = s.trim();
        let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))?;
        if digits.is_empty() || digits.len() > 8 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Color::from_argb)
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.argb())
    }
}
