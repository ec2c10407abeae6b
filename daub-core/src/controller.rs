//! # Canvas controller
//!
//! Turns pointer, keyboard and button events into changes on a [`Surface`]. Implemented as a small
//! state machine over the pointer gesture:
//!
//! * `Idle` -> press on the canvas -> `Drawing`. A dot is placed immediately, as we don't yet know
//!   if this is a tap or the start of a stroke.
//! * `Drawing` -> first move: the dot is taken back and replaced by a stroke through every point
//!   so far. Later moves lengthen that stroke.
//! * `Drawing` -> release -> `Idle`. Whatever was drawn last stays.
//!
//! A press on the palette selects a color instead and never starts a gesture.

use crate::{
    action::Action,
    brush::BrushSize,
    color::{Color, Palette, PaletteError, PaletteIndex},
    dialog::{FileDialogs, DEFAULT_EXTENSION, OPEN_FILTERS, SAVE_FILTERS},
    history::UndoStack,
    io::{self, CodecError},
    shape::{Crosshair, Dot, Shape, ShapeID, Stroke},
    surface::Surface,
};
use std::path::{Path, PathBuf};
use ultraviolet::Vec2;

/// What is under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Canvas,
    /// Over the swatch at this index.
    Palette(PaletteIndex),
    /// Anywhere else, including outside the window.
    Elsewhere,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Position in logical canvas units. Meaningful even when off the canvas.
    pub position: Vec2,
    pub region: Region,
}
impl PointerEvent {
    #[must_use]
    pub fn canvas(position: Vec2) -> Self {
        Self {
            position,
            region: Region::Canvas,
        }
    }
}

/// One handler per kind of input the frontend delivers. Events arrive serially, on one thread.
pub trait CanvasEvents {
    fn pointer_pressed(&mut self, event: PointerEvent);
    fn pointer_moved(&mut self, event: PointerEvent);
    fn pointer_released(&mut self);
    fn action(&mut self, action: Action);
}

enum Gesture {
    Idle,
    Drawing {
        /// Every position seen since the press, including it.
        points: Vec<Vec2>,
        /// The dot, or once the pointer has moved, the stroke replacing it.
        current: ShapeID,
        is_stroke: bool,
    },
}

/// Last user-facing outcome of a save or load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Saved(PathBuf),
    Loaded(PathBuf),
    SaveFailed(String),
    LoadFailed(String),
}
impl Status {
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::SaveFailed(_) | Self::LoadFailed(_))
    }
}
impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Saved(path) => write!(f, "Image saved as {}", path.display()),
            Self::Loaded(path) => write!(f, "Image loaded from {}", path.display()),
            Self::SaveFailed(e) => write!(f, "Error saving the image: {e}"),
            Self::LoadFailed(e) => write!(f, "Error loading the image: {e}"),
        }
    }
}

/// Result of a dialog-driven save or load.
#[derive(Debug)]
pub enum FileOutcome {
    /// The user closed the dialog. Nothing changed.
    Cancelled,
    Completed(PathBuf),
    Failed(PathBuf, CodecError),
}

pub struct Controller<S, D> {
    surface: S,
    dialogs: D,
    palette: Palette,
    selected: PaletteIndex,
    brush: BrushSize,
    history: UndoStack,
    gesture: Gesture,
    /// Last known pointer position over the canvas, for keeping the crosshair current.
    hover: Option<Vec2>,
    status: Option<Status>,
    needs_redraw: bool,
}

impl<S: Surface, D: FileDialogs> Controller<S, D> {
    pub fn new(surface: S, dialogs: D) -> Self {
        Self {
            surface,
            dialogs,
            palette: Palette::default(),
            selected: PaletteIndex::default(),
            brush: BrushSize::default(),
            history: UndoStack::default(),
            gesture: Gesture::Idle,
            hover: None,
            status: None,
            needs_redraw: true,
        }
    }
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
    pub fn dialogs_mut(&mut self) -> &mut D {
        &mut self.dialogs
    }
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
    #[must_use]
    pub fn selected_index(&self) -> PaletteIndex {
        self.selected
    }
    #[must_use]
    pub fn selected_color(&self) -> Color {
        // Selection is only ever set from a successful lookup.
        self.palette.get(self.selected).unwrap_or(Color::BLACK)
    }
    #[must_use]
    pub fn brush_size(&self) -> BrushSize {
        self.brush
    }
    #[must_use]
    pub fn history(&self) -> &UndoStack {
        &self.history
    }
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self.gesture, Gesture::Drawing { .. })
    }
    #[must_use]
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }
    /// Returns whether anything visible changed since the last call, clearing the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Select a palette color by position. Existing shapes keep their colors.
    pub fn select_color(&mut self, index: PaletteIndex) -> Result<(), PaletteError> {
        self.palette.try_get(index)?;
        self.selected = index;
        self.refresh_crosshair();
        self.needs_redraw = true;
        Ok(())
    }
    /// Step the brush size. Applies from the next drawn object on.
    pub fn adjust_brush_size(&mut self, delta: i8) -> bool {
        let changed = self.brush.adjust(delta);
        if changed {
            log::trace!("Brush size now {}", self.brush);
            self.refresh_crosshair();
            self.needs_redraw = true;
        }
        changed
    }
    /// Erase the most recently drawn object. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.end_gesture();
        let Some(id) = self.history.pop() else {
            return false;
        };
        if self.surface.remove(id).is_none() {
            log::warn!("Undo of {id} found nothing on the surface");
        }
        self.needs_redraw = true;
        true
    }

    /// Ask the user where to save, then save there.
    pub fn save(&mut self) -> FileOutcome {
        let Some(path) = self
            .dialogs
            .choose_save_target(DEFAULT_EXTENSION, SAVE_FILTERS)
        else {
            log::debug!("Save cancelled");
            return FileOutcome::Cancelled;
        };
        let path = io::with_default_extension(path, DEFAULT_EXTENSION);
        match self.save_to(&path) {
            Ok(()) => FileOutcome::Completed(path),
            Err(e) => FileOutcome::Failed(path, e),
        }
    }
    /// Capture the canvas as shown and write it to `path`. Failure is recorded in [`Self::status`].
    pub fn save_to(&mut self, path: &Path) -> Result<(), CodecError> {
        let start = std::time::Instant::now();
        let result = io::encode(&self.surface.capture(), path);
        self.needs_redraw = true;
        match &result {
            Ok(()) => {
                log::info!(
                    "Image saved as {} in {}us",
                    path.display(),
                    start.elapsed().as_micros()
                );
                self.status = Some(Status::Saved(path.to_owned()));
            }
            Err(e) => {
                log::error!("Error saving the image to {}: {e:#}", path.display());
                self.status = Some(Status::SaveFailed(e.to_string()));
            }
        }
        result
    }
    /// Ask the user for an image, then load it.
    pub fn load(&mut self) -> FileOutcome {
        let Some(path) = self.dialogs.choose_open_target(OPEN_FILTERS) else {
            log::debug!("Load cancelled");
            return FileOutcome::Cancelled;
        };
        match self.load_from(&path) {
            Ok(()) => FileOutcome::Completed(path),
            Err(e) => FileOutcome::Failed(path, e),
        }
    }
    /// Replace everything shown with the image at `path`, stretched over the whole canvas.
    ///
    /// Drawn objects are removed and the undo stack is cleared along with them, so a later undo
    /// can't resurrect strokes on top of the loaded image. On failure nothing changes except
    /// [`Self::status`].
    pub fn load_from(&mut self, path: &Path) -> Result<(), CodecError> {
        self.needs_redraw = true;
        let image = match io::decode(path) {
            Ok(image) => image,
            Err(e) => {
                log::error!("Error loading the image from {}: {e:#}", path.display());
                self.status = Some(Status::LoadFailed(e.to_string()));
                return Err(e);
            }
        };
        self.end_gesture();
        self.surface.clear_shapes();
        self.history.clear();
        log::info!(
            "Image loaded from {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        self.surface.set_background(Some(image));
        self.status = Some(Status::Loaded(path.to_owned()));
        Ok(())
    }

    /// Move, create, or remove the hover ring for a pointer at `event`.
    pub fn update_crosshair(&mut self, event: &PointerEvent) {
        self.hover = (event.region == Region::Canvas).then_some(event.position);
        self.refresh_crosshair();
        self.needs_redraw = true;
    }
    fn refresh_crosshair(&mut self) {
        let crosshair = self.hover.map(|center| Crosshair {
            center,
            radius: self.brush.crosshair_radius(self.surface.dots_per_unit()),
            color: self.selected_color(),
        });
        self.surface.set_crosshair(crosshair);
    }

    fn begin_gesture(&mut self, position: Vec2) {
        self.end_gesture();
        let dot = Dot {
            center: position,
            radius: self.brush.dot_radius(self.surface.dots_per_unit()),
            color: self.selected_color(),
        };
        let id = ShapeID::default();
        self.surface.insert(id, dot.into());
        self.history.push(id);
        self.gesture = Gesture::Drawing {
            points: vec![position],
            current: id,
            is_stroke: false,
        };
        self.needs_redraw = true;
        log::trace!("Gesture began with {id}");
    }
    fn continue_gesture(&mut self, position: Vec2) {
        // Resolved before borrowing the gesture, at the current display scale.
        let width = self.brush.stroke_width(self.surface.dots_per_unit());
        let color = self.selected_color();
        let Gesture::Drawing {
            points,
            current,
            is_stroke,
        } = &mut self.gesture
        else {
            return;
        };
        points.push(position);
        self.needs_redraw = true;

        if *is_stroke {
            if !self.surface.extend_stroke(*current, position) {
                log::warn!("Stroke {current} vanished mid-gesture");
            }
            return;
        }

        // First motion, the tap becomes a stroke.
        if self.history.top() == Some(*current) {
            self.history.pop();
        }
        self.surface.remove(*current);
        let Some(stroke) = Stroke::new(points.clone(), width, color) else {
            return;
        };
        let id = ShapeID::default();
        self.surface.insert(id, Shape::Stroke(stroke));
        self.history.push(id);
        log::trace!("Gesture {current} became stroke {id}");
        *current = id;
        *is_stroke = true;
    }
    fn end_gesture(&mut self) {
        if let Gesture::Drawing { points, current, .. } =
            std::mem::replace(&mut self.gesture, Gesture::Idle)
        {
            log::trace!("Gesture ended as {current} with {} points", points.len());
        }
    }
}

impl<S: Surface, D: FileDialogs> CanvasEvents for Controller<S, D> {
    fn pointer_pressed(&mut self, event: PointerEvent) {
        match event.region {
            Region::Canvas => self.begin_gesture(event.position),
            Region::Palette(index) => {
                if let Err(e) = self.select_color(index) {
                    log::warn!("Ignoring palette press: {e}");
                }
            }
            Region::Elsewhere => (),
        }
    }
    fn pointer_moved(&mut self, event: PointerEvent) {
        self.continue_gesture(event.position);
        self.update_crosshair(&event);
    }
    fn pointer_released(&mut self) {
        self.end_gesture();
    }
    fn action(&mut self, action: Action) {
        #[allow(clippy::cast_possible_wrap)]
        const STEP: i8 = BrushSize::STEP as i8;
        match action {
            Action::Undo => {
                self.undo();
            }
            Action::BrushSmaller => {
                self.adjust_brush_size(-STEP);
            }
            Action::BrushLarger => {
                self.adjust_brush_size(STEP);
            }
            Action::Save => {
                let _ = self.save();
            }
            Action::Load => {
                let _ = self.load();
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{CanvasEvents, Controller, PointerEvent, Region, Status};
    use crate::{
        color::PaletteIndex,
        dialog::{FileDialogs, FileFilter},
        scene::Scene,
        surface::Surface,
    };
    use std::path::PathBuf;
    use ultraviolet::Vec2;

    struct NoDialogs;
    impl FileDialogs for NoDialogs {
        fn choose_save_target(&mut self, _: &str, _: &[FileFilter]) -> Option<PathBuf> {
            None
        }
        fn choose_open_target(&mut self, _: &[FileFilter]) -> Option<PathBuf> {
            None
        }
    }
    fn controller() -> Controller<Scene, NoDialogs> {
        Controller::new(Scene::default(), NoDialogs)
    }

    #[test]
    fn radius_follows_display_scale() {
        let mut c = controller();
        c.pointer_pressed(PointerEvent::canvas(Vec2::zero()));
        c.pointer_released();
        let small = c.surface().shapes().next().unwrap().1.dot().unwrap().radius;

        // Double the window, same brush: half the logical radius.
        let mut view = *c.surface().view();
        view.side *= 2.0;
        c.surface_mut().set_view(view);
        c.pointer_pressed(PointerEvent::canvas(Vec2::zero()));
        c.pointer_released();
        let large = c.surface().shapes().nth(1).unwrap().1.dot().unwrap().radius;
        assert!((small - large * 2.0).abs() < 1e-6);
    }
    #[test]
    fn crosshair_tracks_canvas_only() {
        let mut c = controller();
        c.pointer_moved(PointerEvent::canvas(Vec2::new(1.0, 2.0)));
        let crosshair = *c.surface().crosshair().unwrap();
        assert_eq!(crosshair.center, Vec2::new(1.0, 2.0));
        assert_eq!(crosshair.color, c.selected_color());

        // Color changes show up without waiting for the next move.
        c.select_color(PaletteIndex(2)).unwrap();
        assert_eq!(c.surface().crosshair().unwrap().color, c.selected_color());

        c.pointer_moved(PointerEvent {
            position: Vec2::new(9.0, 9.0),
            region: Region::Elsewhere,
        });
        assert!(c.surface().crosshair().is_none());
        // Never undoable.
        assert!(c.history().is_empty());
    }
    #[test]
    fn undo_mid_gesture_ends_it() {
        let mut c = controller();
        c.pointer_pressed(PointerEvent::canvas(Vec2::zero()));
        c.pointer_moved(PointerEvent::canvas(Vec2::one()));
        assert!(c.undo());
        assert!(!c.is_drawing());
        // Further motion draws nothing new.
        c.pointer_moved(PointerEvent::canvas(Vec2::zero()));
        assert_eq!(c.surface().shapes().count(), 0);
    }
    #[test]
    fn cancelled_dialogs_change_nothing() {
        let mut c = controller();
        c.pointer_pressed(PointerEvent::canvas(Vec2::zero()));
        c.pointer_released();
        assert!(matches!(c.save(), super::FileOutcome::Cancelled));
        assert!(matches!(c.load(), super::FileOutcome::Cancelled));
        assert_eq!(c.history().len(), 1);
        assert_eq!(c.surface().shapes().count(), 1);
        assert_eq!(c.status(), None);
    }
    #[test]
    fn status_messages() {
        assert_eq!(
            Status::Saved(PathBuf::from("a.png")).to_string(),
            "Image saved as a.png"
        );
        assert!(Status::LoadFailed("nope".into()).is_error());
        assert!(!Status::Loaded(PathBuf::from("a.png")).is_error());
    }
    #[test]
    fn redraw_flag() {
        let mut c = controller();
        assert!(c.take_redraw());
        assert!(!c.take_redraw());
        c.pointer_released();
        assert!(!c.take_redraw());
        c.pointer_pressed(PointerEvent::canvas(Vec2::zero()));
        assert!(c.take_redraw());
        assert!(c.surface().dots_per_unit() > 0.0);
    }
}
