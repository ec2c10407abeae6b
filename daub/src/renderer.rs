//! Paints a [`Scene`] with egui's painter. Shapes are tessellated by egui each frame, so nothing
//! is cached except the background texture.

use daub_core::{color::Color, scene::Scene, shape::Shape, units::ViewTransform};

pub fn to_color32(color: Color) -> egui::Color32 {
    let [r, g, b, a] = color.as_array();
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}
pub fn to_pos2(v: ultraviolet::Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}
pub fn to_vec2(p: egui::Pos2) -> ultraviolet::Vec2 {
    ultraviolet::Vec2::new(p.x, p.y)
}
/// Screen rectangle covered by the canvas.
pub fn canvas_rect(view: &ViewTransform) -> egui::Rect {
    egui::Rect::from_min_size(to_pos2(view.origin), egui::Vec2::splat(view.side))
}

#[derive(Default)]
pub struct SceneRenderer {
    /// Uploaded background, and the revision it was uploaded from.
    background: Option<(u64, egui::TextureHandle)>,
}
impl SceneRenderer {
    fn background_texture(
        &mut self,
        ctx: &egui::Context,
        revision: u64,
        image: &image::RgbaImage,
    ) -> egui::TextureId {
        match &self.background {
            Some((uploaded, texture)) if *uploaded == revision => texture.id(),
            _ => {
                log::debug!(
                    "Uploading background revision {revision} ({}x{})",
                    image.width(),
                    image.height()
                );
                let color_image = egui::ColorImage::from_rgba_unmultiplied(
                    [image.width() as usize, image.height() as usize],
                    image.as_raw(),
                );
                let texture =
                    ctx.load_texture("background", color_image, egui::TextureOptions::LINEAR);
                let id = texture.id();
                self.background = Some((revision, texture));
                id
            }
        }
    }
    pub fn paint(&mut self, ui: &egui::Ui, scene: &Scene) {
        let view = scene.view();
        let rect = canvas_rect(view);
        let painter = ui.painter_at(rect);
        let dpu = view.dots_per_unit();
        let to_screen = |p: ultraviolet::Vec2| to_pos2(view.to_screen(p));

        painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
        match scene.background() {
            Some(background) => {
                let texture = self.background_texture(
                    ui.ctx(),
                    background.revision(),
                    background.image(),
                );
                painter.image(
                    texture,
                    rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
            // Free it.
            None => self.background = None,
        }

        for (_, shape) in scene.shapes() {
            match shape {
                Shape::Dot(dot) => {
                    painter.circle_filled(
                        to_screen(dot.center),
                        dot.radius * dpu,
                        to_color32(dot.color),
                    );
                }
                Shape::Stroke(stroke) => {
                    let color = to_color32(stroke.color);
                    let width = stroke.width * dpu;
                    let points: Vec<egui::Pos2> =
                        stroke.points().iter().copied().map(to_screen).collect();
                    // Round caps and joins.
                    for point in &points {
                        painter.circle_filled(*point, width / 2.0, color);
                    }
                    painter.add(egui::Shape::line(points, egui::Stroke::new(width, color)));
                }
            }
        }

        if let Some(crosshair) = scene.crosshair() {
            painter.circle_stroke(
                to_screen(crosshair.center),
                crosshair.radius * dpu,
                egui::Stroke::new(1.0, to_color32(crosshair.color)),
            );
        }
    }
}

#[cfg(test)]
mod test {
    use super::{canvas_rect, to_color32, to_vec2};
    use daub_core::{color::Color, units::ViewTransform};

    #[test]
    fn colors_are_straight_alpha() {
        let color = Color::from_rgba(255, 0, 0, 128);
        assert_eq!(
            to_color32(color),
            egui::Color32::from_rgba_unmultiplied(255, 0, 0, 128)
        );
        assert_eq!(to_color32(Color::WHITE), egui::Color32::WHITE);
    }
    #[test]
    fn rect_matches_view() {
        let view = ViewTransform::default();
        let rect = canvas_rect(&view);
        assert_eq!(to_vec2(rect.min), view.origin);
        assert!((rect.width() - view.side).abs() < f32::EPSILON);
        assert!((rect.height() - view.side).abs() < f32::EPSILON);
    }
}
