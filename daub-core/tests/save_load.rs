mod common;

use daub_core::{
    color::Color,
    controller::{FileOutcome, Status},
    dialog::{OPEN_FILTERS, SAVE_FILTERS},
    scene::Scene,
    CanvasEvents, PointerEvent, Surface,
};
use image::Rgba;
use ultraviolet::Vec2;

fn scribble(c: &mut impl CanvasEvents) {
    c.pointer_pressed(PointerEvent::canvas(Vec2::new(-2.0, 0.0)));
    c.pointer_moved(PointerEvent::canvas(Vec2::new(2.0, 0.0)));
    c.pointer_released();
}

#[test]
fn save_then_load_shows_the_same_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let mut c = common::controller();
    scribble(&mut c);
    let before = c.surface().capture();

    // No extension given, png is assumed.
    c.dialogs_mut().answer(Some(dir.path().join("drawing")));
    let FileOutcome::Completed(saved) = c.save() else {
        panic!("save failed: {:?}", c.status());
    };
    assert_eq!(saved, dir.path().join("drawing.png"));
    assert_eq!(c.status(), Some(&Status::Saved(saved.clone())));

    let mut other = common::controller();
    other.dialogs_mut().answer(Some(saved.clone()));
    assert!(matches!(other.load(), FileOutcome::Completed(_)));
    assert!(other.surface().background().is_some());
    assert_eq!(other.surface().capture(), before);

    assert_eq!(
        other.dialogs_mut().offered,
        vec![OPEN_FILTERS.to_vec()]
    );
    assert_eq!(c.dialogs_mut().offered, vec![SAVE_FILTERS.to_vec()]);
}

#[test]
fn capture_omits_crosshair() {
    let mut c = common::controller();
    let blank = c.surface().capture();
    c.pointer_moved(PointerEvent::canvas(Vec2::zero()));
    assert!(c.surface().crosshair().is_some());
    assert_eq!(c.surface().capture(), blank);
    assert!(blank.pixels().all(|p| *p == Rgba([255; 4])));
}

#[test]
fn load_replaces_everything() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("red.bmp");
    image::RgbaImage::from_pixel(5, 9, Rgba([255, 0, 0, 255]))
        .save(&path)
        .unwrap();

    let mut c = common::controller();
    scribble(&mut c);
    c.load_from(&path).unwrap();

    assert!(c.surface().shapes().next().is_none());
    assert!(c.history().is_empty());
    // Undo can't bring old strokes back over the image.
    assert!(!c.undo());
    assert_eq!(c.status(), Some(&Status::Loaded(path.clone())));

    let capture = c.surface().capture();
    assert!(capture.pixels().all(|p| *p == Rgba([255, 0, 0, 255])));

    // Drawing continues on top.
    scribble(&mut c);
    assert_eq!(c.history().len(), 1);
}

#[test]
fn failed_load_keeps_the_drawing() {
    let dir = tempfile::tempdir().unwrap();
    let garbage = dir.path().join("garbage.png");
    std::fs::write(&garbage, b"not a png").unwrap();

    let mut c = common::controller();
    scribble(&mut c);
    c.dialogs_mut().answer(Some(garbage));
    assert!(matches!(c.load(), FileOutcome::Failed(..)));

    assert_eq!(c.history().len(), 1);
    assert_eq!(c.surface().shapes().count(), 1);
    assert!(c.surface().background().is_none());
    let status = c.status().unwrap();
    assert!(status.is_error());
    assert!(status.to_string().starts_with("Error loading the image"));
}

#[test]
fn failed_save_reports() {
    let dir = tempfile::tempdir().unwrap();
    let mut c = common::controller();
    scribble(&mut c);

    assert!(c.save_to(&dir.path().join("drawing.unknown")).is_err());
    assert!(c.save_to(&dir.path().join("no/such/dir.png")).is_err());
    assert!(c
        .status()
        .unwrap()
        .to_string()
        .starts_with("Error saving the image"));
    assert_eq!(c.surface().shapes().count(), 1);
}

#[test]
fn cancel_is_silent() {
    let mut c = common::controller();
    scribble(&mut c);
    c.dialogs_mut().answer(None);
    assert!(matches!(c.save(), FileOutcome::Cancelled));
    assert!(matches!(c.load(), FileOutcome::Cancelled));
    assert_eq!(c.status(), None);
    assert_eq!(c.history().len(), 1);
}

#[test]
fn capture_matches_view_pixels() {
    let mut scene = Scene::default();
    let mut view = *scene.view();
    view.pixels_per_point = 1.5;
    scene.set_view(view);
    let side = view.pixel_side();
    scene.insert(
        Default::default(),
        daub_core::shape::Dot {
            center: Vec2::zero(),
            radius: 1.0,
            color: Color::BLACK,
        }
        .into(),
    );
    let capture = scene.capture();
    assert_eq!(capture.dimensions(), (side, side));
    assert_eq!(*capture.get_pixel(side / 2, side / 2), Rgba([0, 0, 0, 255]));
}
