//! Logical canvas coordinates and their mapping onto the screen.
//!
//! The canvas is a fixed logical square with y pointing up. The window shows it letterboxed at a
//! 1:1 aspect ratio, so a single scale factor relates screen points and logical units.

use ultraviolet::Vec2;

/// An axis aligned rectangle in logical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min: Vec2,
    pub max: Vec2,
}
impl Extent {
    /// The drawing area, `[-5, 5]` on both axes.
    pub const CANVAS: Self = Self {
        min: Vec2 { x: -5.0, y: -5.0 },
        max: Vec2 { x: 5.0, y: 5.0 },
    };
    #[must_use]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }
    #[must_use]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        (self.min.x..=self.max.x).contains(&point.x) && (self.min.y..=self.max.y).contains(&point.y)
    }
}

/// Where the canvas currently sits on screen.
///
/// Screen positions are in points (logical pixels), top-left origin, y down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Top-left corner of the canvas square.
    pub origin: Vec2,
    /// Side length of the canvas square.
    pub side: f32,
    /// Physical pixels per point. Only matters when capturing pixels.
    pub pixels_per_point: f32,
    pub extent: Extent,
}
impl ViewTransform {
    /// Fit the largest square showing `extent` centered within the given screen rectangle.
    #[must_use]
    pub fn fit(min: Vec2, size: Vec2, pixels_per_point: f32, extent: Extent) -> Self {
        let side = size.x.min(size.y).max(1.0);
        let origin = min + (size - Vec2::broadcast(side)) * 0.5;
        Self {
            origin,
            side,
            pixels_per_point,
            extent,
        }
    }
    /// Screen points per logical unit.
    #[must_use]
    pub fn dots_per_unit(&self) -> f32 {
        self.side / self.extent.width()
    }
    #[must_use]
    pub fn to_screen(&self, logical: Vec2) -> Vec2 {
        let scale = self.dots_per_unit();
        Vec2::new(
            self.origin.x + (logical.x - self.extent.min.x) * scale,
            self.origin.y + (self.extent.max.y - logical.y) * scale,
        )
    }
    #[must_use]
    pub fn to_logical(&self, screen: Vec2) -> Vec2 {
        let scale = self.dots_per_unit();
        Vec2::new(
            self.extent.min.x + (screen.x - self.origin.x) / scale,
            self.extent.max.y - (screen.y - self.origin.y) / scale,
        )
    }
    /// Is the screen position over the canvas square?
    #[must_use]
    pub fn contains_screen(&self, screen: Vec2) -> bool {
        self.extent.contains(self.to_logical(screen))
    }
    /// Side length of the canvas in physical pixels.
    #[must_use]
    pub fn pixel_side(&self) -> u32 {
        // Saturating float->int cast; the side is at least one point.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let side = (self.side * self.pixels_per_point).round().max(1.0) as u32;
        side
    }
}
impl Default for ViewTransform {
    fn default() -> Self {
        Self::fit(Vec2::zero(), Vec2::broadcast(700.0), 1.0, Extent::CANVAS)
    }
}

#[cfg(test)]
mod test {
    use super::{Extent, ViewTransform};
    use ultraviolet::Vec2;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).mag() < 1e-4
    }
    #[test]
    fn letterbox_wide() {
        let view = ViewTransform::fit(
            Vec2::new(10.0, 20.0),
            Vec2::new(600.0, 400.0),
            1.0,
            Extent::CANVAS,
        );
        assert!((view.side - 400.0).abs() < 1e-6);
        assert!(close(view.origin, Vec2::new(110.0, 20.0)));
        assert!((view.dots_per_unit() - 40.0).abs() < 1e-6);
    }
    #[test]
    fn corners_and_axis_direction() {
        let view = ViewTransform::fit(Vec2::zero(), Vec2::broadcast(100.0), 1.0, Extent::CANVAS);
        // Logical top-left is (-5, 5).
        assert!(close(view.to_screen(Vec2::new(-5.0, 5.0)), Vec2::zero()));
        assert!(close(view.to_screen(Vec2::new(5.0, -5.0)), Vec2::broadcast(100.0)));
        assert!(close(view.to_screen(Vec2::zero()), Vec2::broadcast(50.0)));
    }
    #[test]
    fn round_trip() {
        let view = ViewTransform::fit(
            Vec2::new(3.0, 7.0),
            Vec2::new(321.0, 456.0),
            2.0,
            Extent::CANVAS,
        );
        let p = Vec2::new(1.25, -3.5);
        assert!(close(view.to_logical(view.to_screen(p)), p));
        assert!(view.contains_screen(view.to_screen(p)));
        assert!(!view.contains_screen(Vec2::new(0.0, 0.0)));
        assert_eq!(view.pixel_side(), 642);
    }
}
