//! The application window: a letterboxed square canvas above a toolbar.

use crate::{
    actions::{
        hotkeys::KeyboardHotkey,
        Action,
    },
    dialog::NativeDialogs,
    global::hotkeys::Hotkeys,
    renderer::{self, SceneRenderer},
    ui,
};
use daub_core::{
    scene::Scene,
    units::{Extent, ViewTransform},
    CanvasEvents, Controller, PointerEvent, Region,
};

pub const TITLE: &str = "Paint";
const INITIAL_SIZE: [f32; 2] = [800.0, 800.0];
/// Top-left corner of the screen.
const INITIAL_POSITION: [f32; 2] = [0.0, 0.0];

pub fn run() -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size(INITIAL_SIZE)
            .with_position(INITIAL_POSITION),
        ..Default::default()
    };
    eframe::run_native(
        TITLE,
        options,
        Box::new(|_| Box::new(PaintApp::new(Hotkeys::get()))),
    )
    .map_err(|e| anyhow::anyhow!("Event loop exited with error: {e}"))
}

pub struct PaintApp {
    controller: Controller<Scene, NativeDialogs>,
    renderer: SceneRenderer,
    hotkeys: &'static Hotkeys,
    /// Laid out last frame. Input is hit-tested against what the user saw.
    palette_rect: egui::Rect,
    last_pointer: Option<egui::Pos2>,
}
impl PaintApp {
    #[must_use]
    pub fn new(hotkeys: &'static Hotkeys) -> Self {
        Self {
            controller: Controller::new(Scene::default(), NativeDialogs::default()),
            renderer: SceneRenderer::default(),
            hotkeys,
            palette_rect: egui::Rect::NOTHING,
            last_pointer: None,
        }
    }
    fn pointer_event(&self, pos: egui::Pos2) -> PointerEvent {
        let view = self.controller.surface().view();
        let screen = renderer::to_vec2(pos);
        let region = if view.contains_screen(screen) {
            Region::Canvas
        } else if let Some(index) = ui::color_palette::PaletteStrip::index_at(
            self.controller.palette(),
            self.palette_rect,
            pos,
        ) {
            Region::Palette(index)
        } else {
            Region::Elsewhere
        };
        PointerEvent {
            position: view.to_logical(screen),
            region,
        }
    }
    fn key_pressed(&mut self, key: egui::Key, modifiers: egui::Modifiers, repeat: bool) {
        let pressed = KeyboardHotkey::from_event(key, modifiers);
        let Some(action) = self.hotkeys.keys_to_actions.action_of_press(&pressed) else {
            return;
        };
        // Held keys shouldn't stack up dialogs.
        if repeat && matches!(action, Action::Save | Action::Load) {
            return;
        }
        log::trace!("{pressed} -> {}", action.as_ref());
        self.controller.action(action);
    }
    fn dispatch(&mut self, events: &[egui::Event]) {
        for event in events {
            match event {
                egui::Event::PointerMoved(pos) => {
                    self.last_pointer = Some(*pos);
                    let event = self.pointer_event(*pos);
                    self.controller.pointer_moved(event);
                }
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    if *pressed {
                        let event = self.pointer_event(*pos);
                        self.controller.pointer_pressed(event);
                    } else {
                        self.controller.pointer_released();
                    }
                }
                // Left the window. A stroke in progress continues if the pointer comes back
                // with the button still held.
                egui::Event::PointerGone => {
                    if let Some(pos) = self.last_pointer.take() {
                        let mut event = self.pointer_event(pos);
                        event.region = Region::Elsewhere;
                        self.controller.update_crosshair(&event);
                    }
                }
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat,
                    modifiers,
                    ..
                } => self.key_pressed(*key, *modifiers, *repeat),
                _ => (),
            }
        }
    }
}
impl eframe::App for PaintApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = ctx.input(|i| i.events.clone());
        self.dispatch(&events);

        let toolbar = egui::TopBottomPanel::bottom("toolbar")
            .show(ctx, |ui| ui::toolbar(ui, &self.controller, &self.hotkeys.actions_to_keys))
            .inner;
        self.palette_rect = toolbar.palette_rect;
        for action in toolbar.actions {
            self.controller.action(action);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_rect_before_wrap();
            let view = ViewTransform::fit(
                renderer::to_vec2(available.min),
                ultraviolet::Vec2::new(available.width(), available.height()),
                ctx.pixels_per_point(),
                Extent::CANVAS,
            );
            if *self.controller.surface().view() != view {
                log::trace!("Canvas now {} points at {}x", view.side, view.pixels_per_point);
                self.controller.surface_mut().set_view(view);
            }
            ui.allocate_rect(available, egui::Sense::hover());
            self.renderer.paint(ui, self.controller.surface());
        });

        if self.controller.take_redraw() {
            ctx.request_repaint();
        }
    }
}
