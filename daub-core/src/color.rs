//! # Colors and the fixed palette

/// Position of a color within a [`Palette`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
pub struct PaletteIndex(pub usize);

/// A straight-alpha sRGB color, 8 bits per channel.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Color([u8; 4]);
impl Color {
    pub const TRANSPARENT: Self = Self([0; 4]);
    pub const WHITE: Self = Self([255; 4]);
    pub const BLACK: Self = Self([0, 0, 0, 255]);
    #[must_use]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }
    /// Opaque color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self([
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
            255,
        ])
    }
    #[must_use]
    pub const fn as_array(self) -> [u8; 4] {
        self.0
    }
    #[must_use]
    pub const fn alpha(self) -> u8 {
        self.0[3]
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color must start with '#'")]
    MissingHash,
    #[error("expected 6 or 8 hex digits, found {0}")]
    BadLength(usize),
    #[error(transparent)]
    Digit(#[from] std::num::ParseIntError),
}
/// Parse from `#RRGGBB` or `#RRGGBBAA`, case insensitive.
impl std::str::FromStr for Color {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().strip_prefix('#').ok_or(ColorParseError::MissingHash)?;
        if !digits.is_ascii() || !(digits.len() == 6 || digits.len() == 8) {
            return Err(ColorParseError::BadLength(digits.len()));
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16);
        let alpha = if digits.len() == 8 { channel(3)? } else { 255 };
        Ok(Self([channel(0)?, channel(1)?, channel(2)?, alpha]))
    }
}
impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}")?;
        if a != 255 {
            write!(f, "{a:02X}")?;
        }
        Ok(())
    }
}

/// The swatches offered to the user, left to right. Purple appears twice.
pub const DEFAULT_COLORS: [Color; 20] = [
    Color::from_rgb_u32(0xFF_0000),
    Color::from_rgb_u32(0x00_FF00),
    Color::from_rgb_u32(0x00_00FF),
    Color::from_rgb_u32(0xFF_FF00),
    Color::from_rgb_u32(0xFF_00FF),
    Color::from_rgb_u32(0x00_FFFF),
    Color::from_rgb_u32(0x80_0080),
    Color::from_rgb_u32(0xFF_A500),
    Color::from_rgb_u32(0x00_8000),
    Color::from_rgb_u32(0xFF_4500),
    Color::from_rgb_u32(0x00_0000),
    Color::from_rgb_u32(0xC0_C0C0),
    Color::from_rgb_u32(0x80_8080),
    Color::from_rgb_u32(0x80_0000),
    Color::from_rgb_u32(0x00_8080),
    Color::from_rgb_u32(0x80_0080),
    Color::from_rgb_u32(0x80_8000),
    Color::from_rgb_u32(0x00_FF80),
    Color::from_rgb_u32(0xFF_0080),
    Color::from_rgb_u32(0xFF_FFFF),
];

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette index {index} out of range for {len} colors")]
    OutOfRange { index: usize, len: usize },
}

/// A fixed, ordered list of selectable colors.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    colors: &'static [Color],
}
impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: &DEFAULT_COLORS,
        }
    }
}
impl Palette {
    /// Get a color from it's index.
    #[must_use]
    pub fn get(&self, idx: PaletteIndex) -> Option<Color> {
        self.colors.get(idx.0).copied()
    }
    /// Like [`Self::get`], but reports why the lookup failed.
    pub fn try_get(&self, idx: PaletteIndex) -> Result<Color, PaletteError> {
        self.get(idx).ok_or(PaletteError::OutOfRange {
            index: idx.0,
            len: self.len(),
        })
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (PaletteIndex, Color)> + '_ {
        self.colors
            .iter()
            .enumerate()
            .map(|(idx, color)| (PaletteIndex(idx), *color))
    }
    /// Find the swatch under a position along the strip, measured in swatch widths from its left edge.
    #[must_use]
    pub fn index_at(&self, slot: f32) -> Option<PaletteIndex> {
        if !slot.is_finite() || slot < 0.0 {
            return None;
        }
        // Truncation is the floor for non-negative values.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let idx = slot as usize;
        (idx < self.len()).then_some(PaletteIndex(idx))
    }
}
