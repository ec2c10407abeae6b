//! The toolbar along the bottom of the window.

pub mod brush_ui;
pub mod color_palette;

use crate::actions::{hotkeys::ActionsToKeys, Action};
use daub_core::{dialog::FileDialogs, Controller, Surface};

pub struct ToolbarOutput {
    /// Requested by buttons this frame, in order.
    pub actions: smallvec::SmallVec<[Action; 2]>,
    /// Where the palette strip was laid out, for hit-testing presses.
    pub palette_rect: egui::Rect,
}

pub fn toolbar<S: Surface, D: FileDialogs>(
    ui: &mut egui::Ui,
    controller: &Controller<S, D>,
    hotkeys: &ActionsToKeys,
) -> ToolbarOutput {
    // Button hover text, listing the keys bound to its action.
    let hint = |action: Action| {
        let keys = hotkeys.keys_of(action);
        if keys.is_empty() {
            "No hotkey".to_owned()
        } else {
            keys.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        }
    };

    let mut actions = smallvec::SmallVec::new();
    let mut palette_rect = egui::Rect::NOTHING;

    ui.horizontal_wrapped(|ui| {
        palette_rect = ui
            .add(color_palette::PaletteStrip {
                palette: controller.palette(),
                selected: controller.selected_index(),
            })
            .rect;
        ui.separator();

        actions.extend(brush_ui::size_stepper(ui, controller.brush_size()));
        ui.separator();

        if ui
            .add_enabled(!controller.history().is_empty(), egui::Button::new("undo(z)"))
            .on_hover_text(hint(Action::Undo))
            .clicked()
        {
            actions.push(Action::Undo);
        }
        if ui.button("save").on_hover_text(hint(Action::Save)).clicked() {
            actions.push(Action::Save);
        }
        if ui.button("load").on_hover_text(hint(Action::Load)).clicked() {
            actions.push(Action::Load);
        }
    });

    match controller.status() {
        Some(status) if status.is_error() => {
            ui.colored_label(ui.visuals().error_fg_color, status.to_string());
        }
        Some(status) => {
            ui.label(status.to_string());
        }
        // Keep the panel height steady.
        None => {
            ui.label("");
        }
    }

    ToolbarOutput {
        actions,
        palette_rect,
    }
}
