//! Visual objects placed on the canvas. All positions and sizes are in logical units.

use crate::color::Color;
use ultraviolet::Vec2;

pub type ShapeID = crate::id::Id<Shape>;

/// A filled circle, left behind by a tap with no motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// A freehand path of uniform width with round caps and joins.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Invariant: at least two points.
    points: Vec<Vec2>,
    pub width: f32,
    pub color: Color,
}
impl Stroke {
    /// Create a stroke through the given points. None if there are fewer than two.
    #[must_use]
    pub fn new(points: Vec<Vec2>, width: f32, color: Color) -> Option<Self> {
        (points.len() >= 2).then_some(Self {
            points,
            width,
            color,
        })
    }
    #[must_use]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }
    /// Lengthen the path by one point.
    pub fn push(&mut self, point: Vec2) {
        self.points.push(point);
    }
    /// Number of points. Never less than two.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    /// Always false, strokes have at least two points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Dot(Dot),
    Stroke(Stroke),
}
impl Shape {
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Self::Dot(Dot { color, .. }) | Self::Stroke(Stroke { color, .. }) => *color,
        }
    }
    #[must_use]
    pub fn dot(&self) -> Option<&Dot> {
        match self {
            Self::Dot(dot) => Some(dot),
            Self::Stroke(_) => None,
        }
    }
    #[must_use]
    pub fn stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Stroke(stroke) => Some(stroke),
            Self::Dot(_) => None,
        }
    }
    pub fn stroke_mut(&mut self) -> Option<&mut Stroke> {
        match self {
            Self::Stroke(stroke) => Some(stroke),
            Self::Dot(_) => None,
        }
    }
}
impl From<Dot> for Shape {
    fn from(value: Dot) -> Self {
        Self::Dot(value)
    }
}
impl From<Stroke> for Shape {
    fn from(value: Stroke) -> Self {
        Self::Stroke(value)
    }
}

/// Hollow ring previewing the brush under the pointer. Never recorded for undo, never captured.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crosshair {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}
