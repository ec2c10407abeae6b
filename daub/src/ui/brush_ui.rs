use crate::actions::Action;
use daub_core::brush::BrushSize;

/// `size < 10 >`. Each arrow is disabled when stepping would leave the allowed range.
pub fn size_stepper(ui: &mut egui::Ui, size: BrushSize) -> Option<Action> {
    let (mut smaller, mut larger) = (size, size);
    let can_shrink = smaller.smaller();
    let can_grow = larger.larger();

    ui.label("size");
    let mut action = None;
    if ui
        .add_enabled(can_shrink, egui::Button::new("<"))
        .on_hover_text("Smaller brush")
        .clicked()
    {
        action = Some(Action::BrushSmaller);
    }
    // Fixed width so the arrows don't jump between one and two digits.
    ui.add_sized(
        [ui.spacing().interact_size.y * 1.5, ui.spacing().interact_size.y],
        egui::Label::new(egui::RichText::new(size.to_string()).monospace()),
    );
    if ui
        .add_enabled(can_grow, egui::Button::new(">"))
        .on_hover_text("Larger brush")
        .clicked()
    {
        action = Some(Action::BrushLarger);
    }
    action
}
