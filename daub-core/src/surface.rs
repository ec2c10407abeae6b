//! # Rendering surface
//!
//! The controller never draws pixels itself. It places, extends and removes retained shapes on a
//! [`Surface`], which is responsible for displaying them and for capturing what is shown.

use crate::shape::{Crosshair, Shape, ShapeID};
use ultraviolet::Vec2;

pub trait Surface {
    /// Screen points per logical unit, *right now*. Brush sizes are converted through this at
    /// every draw, as it changes with window size and monitor scale.
    fn dots_per_unit(&self) -> f32;
    /// Place a shape on top of everything else.
    fn insert(&mut self, id: ShapeID, shape: Shape);
    /// Lengthen the path of a stroke already on the surface.
    /// Returns false if `id` is unknown or not a stroke.
    fn extend_stroke(&mut self, id: ShapeID, point: Vec2) -> bool;
    /// Take a shape off the surface, returning it if it was present.
    fn remove(&mut self, id: ShapeID) -> Option<Shape>;
    /// Remove every shape. The background and crosshair are untouched.
    fn clear_shapes(&mut self);
    /// Show, move, or (with `None`) hide the hover ring.
    fn set_crosshair(&mut self, crosshair: Option<Crosshair>);
    /// Replace the raster shown underneath all shapes, stretched over the whole canvas.
    fn set_background(&mut self, image: Option<image::RgbaImage>);
    /// Pixels of the canvas region as currently shown, excluding the crosshair.
    fn capture(&self) -> image::RgbaImage;
}
