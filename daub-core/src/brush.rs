//! # Brush
//!
//! Brush sizes are measured in screen points, so that a brush looks the same no matter how large
//! the window is. Converting into logical canvas units needs the display scale *at the time of
//! drawing*, see [`crate::surface::Surface::dots_per_unit`].

/// Current brush size. Always within `[MIN, MAX]`, and only ever changed in steps of [`Self::STEP`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct BrushSize(u8);
impl Default for BrushSize {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}
impl BrushSize {
    pub const MIN: u8 = 4;
    pub const MAX: u8 = 29;
    pub const STEP: u8 = 2;
    pub const DEFAULT: u8 = 10;

    /// Wrap a size, None if out of bounds.
    #[must_use]
    pub fn new(size: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&size).then_some(Self(size))
    }
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
    /// Step the size by `delta`. A step that would leave the bounds is refused as a whole rather
    /// than clamped, keeping the size on the same even grid. Returns true if the size changed.
    pub fn adjust(&mut self, delta: i8) -> bool {
        let Some(next) = self.0.checked_add_signed(delta).and_then(Self::new) else {
            return false;
        };
        let changed = next != *self;
        *self = next;
        changed
    }
    #[allow(clippy::cast_possible_wrap)]
    pub fn larger(&mut self) -> bool {
        self.adjust(Self::STEP as i8)
    }
    #[allow(clippy::cast_possible_wrap)]
    pub fn smaller(&mut self) -> bool {
        self.adjust(-(Self::STEP as i8))
    }
    /// Width of a stroke, in logical units.
    #[must_use]
    pub fn stroke_width(self, dots_per_unit: f32) -> f32 {
        f32::from(self.0) / dots_per_unit
    }
    /// Radius of a tapped dot, in logical units. Matches the stroke width.
    #[must_use]
    pub fn dot_radius(self, dots_per_unit: f32) -> f32 {
        f32::from(self.0) / 2.0 / dots_per_unit
    }
    /// Radius of the hover ring, in logical units. Sits just inside the dot it previews.
    #[must_use]
    pub fn crosshair_radius(self, dots_per_unit: f32) -> f32 {
        f32::from(self.0 - 2) / 2.0 / dots_per_unit
    }
}
impl std::fmt::Display for BrushSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
