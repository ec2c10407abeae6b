//! The retained [`Surface`] used by the app. It keeps shapes in drawing order for the frontend to
//! paint each frame, and rasterizes them in software when pixels are captured.

use crate::{
    shape::{Crosshair, Shape, ShapeID},
    surface::Surface,
    units::ViewTransform,
};
use ultraviolet::Vec2;

/// A raster shown underneath all shapes.
#[derive(Clone, Debug)]
pub struct Background {
    image: image::RgbaImage,
    /// Changes every time a new background is set, so frontends know when to re-upload.
    revision: u64,
}
impl Background {
    #[must_use]
    pub fn image(&self) -> &image::RgbaImage {
        &self.image
    }
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[derive(Default, Debug)]
pub struct Scene {
    // Bottom to top.
    shapes: Vec<(ShapeID, Shape)>,
    background: Option<Background>,
    crosshair: Option<Crosshair>,
    view: ViewTransform,
    next_revision: u64,
}
impl Scene {
    #[must_use]
    pub fn new(view: ViewTransform) -> Self {
        Self {
            view,
            ..Default::default()
        }
    }
    /// Update where the canvas sits on screen. Called by the frontend whenever layout happens.
    pub fn set_view(&mut self, view: ViewTransform) {
        self.view = view;
    }
    #[must_use]
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }
    /// Iterate shapes bottom to top.
    pub fn shapes(&self) -> impl DoubleEndedIterator<Item = (ShapeID, &Shape)> + '_ {
        self.shapes.iter().map(|(id, shape)| (*id, shape))
    }
    #[must_use]
    pub fn get(&self, id: ShapeID) -> Option<&Shape> {
        self.shapes
            .iter()
            .find_map(|(other, shape)| (*other == id).then_some(shape))
    }
    #[must_use]
    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }
    #[must_use]
    pub fn crosshair(&self) -> Option<&Crosshair> {
        self.crosshair.as_ref()
    }
    /// True if nothing but the plain canvas would be shown.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.shapes.is_empty() && self.background.is_none()
    }
}
impl Surface for Scene {
    fn dots_per_unit(&self) -> f32 {
        self.view.dots_per_unit()
    }
    fn insert(&mut self, id: ShapeID, shape: Shape) {
        self.shapes.push((id, shape));
    }
    fn extend_stroke(&mut self, id: ShapeID, point: Vec2) -> bool {
        let Some(stroke) = self
            .shapes
            .iter_mut()
            .rev()
            .find(|(other, _)| *other == id)
            .and_then(|(_, shape)| shape.stroke_mut())
        else {
            return false;
        };
        stroke.push(point);
        true
    }
    fn remove(&mut self, id: ShapeID) -> Option<Shape> {
        // Usually the top, search from there.
        let idx = self.shapes.iter().rposition(|(other, _)| *other == id)?;
        Some(self.shapes.remove(idx).1)
    }
    fn clear_shapes(&mut self) {
        self.shapes.clear();
    }
    fn set_crosshair(&mut self, crosshair: Option<Crosshair>) {
        self.crosshair = crosshair;
    }
    fn set_background(&mut self, image: Option<image::RgbaImage>) {
        self.background = image.map(|image| {
            self.next_revision += 1;
            Background {
                image,
                revision: self.next_revision,
            }
        });
    }
    fn capture(&self) -> image::RgbaImage {
        crate::raster::render(
            &self.view,
            self.background.as_ref().map(Background::image),
            self.shapes.iter().map(|(_, shape)| shape),
        )
    }
}
