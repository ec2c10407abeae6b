use daub_core::color::{Color, Palette, PaletteIndex};
use egui::Color32;

const GROW_FACTOR: f32 = 1.25;
/// Marks the selected swatch.
const SELECTED_ICON: char = '★';

fn grayscale_contrasting(
    foreground: impl Into<egui::Rgba>,
    background: impl Into<egui::Rgba>,
) -> egui::Color32 {
    let color: egui::Rgba = foreground.into();
    let background: egui::Rgba = background.into();
    let color = background.multiply(1.0 - color.a()) + color;

    let intensity = color.intensity();
    let contrasting = (intensity + 0.5) % 1.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let gray = (contrasting * 255.999) as u8;
    egui::Color32::from_gray(gray)
}

/// Square element with a solid color that grows on hover. Presses are not handled here, the
/// strip as a whole is hit-tested by [`PaletteStrip::index_at`].
#[derive(Copy, Clone)]
pub struct ColorSquare {
    pub color: Color,
    /// Display with a marker. Hover also highlights.
    pub selected: bool,
}
impl egui::Widget for ColorSquare {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let size = ui.style().spacing.interact_size.y;
        let (rect, this) = ui.allocate_exact_size(egui::Vec2::splat(size), egui::Sense::hover());
        this.widget_info(|| egui::WidgetInfo {
            typ: egui::WidgetType::SelectableLabel,
            enabled: ui.is_enabled(),
            label: Some(self.color.to_string()),
            current_text_value: None,
            prev_text_value: None,
            selected: Some(self.selected),
            value: None,
            text_selection: None,
        });

        let color = super::super::renderer::to_color32(self.color);
        let backdrop = ui.style().visuals.extreme_bg_color;
        let hovered = this.hovered();
        let stroke_color = if hovered {
            grayscale_contrasting(color, backdrop)
        } else {
            ui.style().visuals.widgets.noninteractive.bg_stroke.color
        };
        // Increase in size and show ontop when hovered.
        let (expansion, layer) = if hovered {
            // Additive expansion, not multiplicative - subtract one
            (
                size * (GROW_FACTOR - 1.0) / 2.0,
                egui::LayerId {
                    order: egui::Order::Foreground,
                    ..ui.layer_id()
                },
            )
        } else {
            (0.0, ui.layer_id())
        };
        let expansion =
            ui.ctx()
                .animate_value_with_time(this.id, expansion, ui.style().animation_time);
        let painter = ui.painter().clone().with_layer_id(layer);
        painter.rect(
            rect.expand(expansion),
            0.0,
            color,
            egui::Stroke {
                color: stroke_color,
                width: 1.0,
            },
        );
        if self.selected {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                SELECTED_ICON,
                egui::FontId::default(),
                grayscale_contrasting(color, backdrop),
            );
        }

        this
    }
}

/// Every palette color in a row, touching, so a screen position maps onto a slot.
pub struct PaletteStrip<'a> {
    pub palette: &'a Palette,
    pub selected: PaletteIndex,
}
impl PaletteStrip<'_> {
    /// Which swatch of a strip occupying `rect` is under `pos`.
    #[must_use]
    pub fn index_at(palette: &Palette, rect: egui::Rect, pos: egui::Pos2) -> Option<PaletteIndex> {
        if !rect.contains(pos) || palette.is_empty() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let swatch = rect.width() / palette.len() as f32;
        palette.index_at((pos.x - rect.min.x) / swatch)
    }
}
impl egui::Widget for PaletteStrip<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        ui.scope(|ui| {
            ui.spacing_mut().item_spacing = egui::Vec2::ZERO;
            ui.horizontal(|ui| {
                for (index, color) in self.palette.iter() {
                    ui.add(ColorSquare {
                        color,
                        selected: index == self.selected,
                    });
                }
            })
            .response
        })
        .inner
    }
}

#[cfg(test)]
mod test {
    use super::{grayscale_contrasting, PaletteStrip};
    use daub_core::color::{Palette, PaletteIndex};
    use egui::{pos2, Color32, Rect};

    #[test]
    fn strip_hit_test() {
        let palette = Palette::default();
        let rect = Rect::from_min_max(pos2(100.0, 10.0), pos2(300.0, 20.0));
        let at = |x, y| PaletteStrip::index_at(&palette, rect, pos2(x, y));
        assert_eq!(at(100.0, 15.0), Some(PaletteIndex(0)));
        assert_eq!(at(115.0, 15.0), Some(PaletteIndex(1)));
        assert_eq!(at(299.0, 15.0), Some(PaletteIndex(19)));
        assert_eq!(at(99.0, 15.0), None);
        assert_eq!(at(150.0, 25.0), None);
    }
    #[test]
    fn marker_contrasts() {
        let on_black = grayscale_contrasting(Color32::BLACK, Color32::WHITE);
        let on_white = grayscale_contrasting(Color32::WHITE, Color32::WHITE);
        assert!(on_black.r() > 100);
        assert!(on_white.r() < 155);
    }
}
