mod common;

use daub_core::{
    brush::BrushSize,
    color::{PaletteIndex, DEFAULT_COLORS},
    shape::Shape,
    Action, CanvasEvents, PointerEvent, Region,
};
use pretty_assertions::assert_eq;
use ultraviolet::Vec2;

fn tap(c: &mut impl CanvasEvents, at: Vec2) {
    c.pointer_pressed(PointerEvent::canvas(at));
    c.pointer_released();
}
fn drag(c: &mut impl CanvasEvents, path: &[Vec2]) {
    let (first, rest) = path.split_first().unwrap();
    c.pointer_pressed(PointerEvent::canvas(*first));
    for point in rest {
        c.pointer_moved(PointerEvent::canvas(*point));
    }
    c.pointer_released();
}

#[test]
fn tap_places_one_dot() {
    let mut c = common::controller();
    tap(&mut c, Vec2::new(1.0, -1.0));

    let shapes: Vec<_> = c.surface().shapes().map(|(_, s)| s.clone()).collect();
    assert_eq!(shapes.len(), 1);
    let dot = shapes[0].dot().unwrap();
    assert_eq!(dot.center, Vec2::new(1.0, -1.0));
    assert_eq!(dot.color, DEFAULT_COLORS[0]);
    let dpu = c.surface().view().dots_per_unit();
    assert!((dot.radius - 5.0 / dpu).abs() < 1e-6);
    assert_eq!(c.history().len(), 1);
    assert!(!c.is_drawing());
}

#[test]
fn drag_becomes_one_stroke() {
    let mut c = common::controller();
    let path = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(2.0, 1.0),
    ];
    drag(&mut c, &path);

    let shapes: Vec<_> = c.surface().shapes().map(|(_, s)| s.clone()).collect();
    assert_eq!(shapes.len(), 1);
    let Shape::Stroke(stroke) = &shapes[0] else {
        panic!("expected a stroke, got {:?}", shapes[0]);
    };
    assert_eq!(stroke.points(), &path);
    let dpu = c.surface().view().dots_per_unit();
    assert!((stroke.width - 10.0 / dpu).abs() < 1e-6);
    // The dot it replaced is gone from history too.
    assert_eq!(c.history().len(), 1);
    assert_eq!(
        c.history().top(),
        c.surface().shapes().next().map(|(id, _)| id)
    );
}

#[test]
fn stroke_continues_off_canvas() {
    let mut c = common::controller();
    c.pointer_pressed(PointerEvent::canvas(Vec2::zero()));
    c.pointer_moved(PointerEvent {
        position: Vec2::new(7.0, 0.0),
        region: Region::Elsewhere,
    });
    c.pointer_released();

    let (_, shape) = c.surface().shapes().next().unwrap();
    assert_eq!(shape.stroke().unwrap().len(), 2);
    assert!(c.surface().crosshair().is_none());
}

#[test]
fn moves_without_press_draw_nothing() {
    let mut c = common::controller();
    c.pointer_moved(PointerEvent::canvas(Vec2::zero()));
    c.pointer_moved(PointerEvent::canvas(Vec2::one()));
    c.pointer_released();
    assert_eq!(c.surface().shapes().count(), 0);
    assert!(c.history().is_empty());
}

#[test]
fn undo_returns_to_blank() {
    let mut c = common::controller();
    tap(&mut c, Vec2::zero());
    drag(&mut c, &[Vec2::zero(), Vec2::one()]);
    tap(&mut c, Vec2::one());
    assert_eq!(c.surface().shapes().count(), 3);

    // Newest first.
    c.action(Action::Undo);
    assert_eq!(c.surface().shapes().count(), 2);
    assert!(c.surface().shapes().last().unwrap().1.stroke().is_some());
    c.action(Action::Undo);
    c.action(Action::Undo);
    assert!(c.surface().is_blank());

    // Nothing left, nothing happens.
    assert!(!c.undo());
    c.action(Action::Undo);
    assert!(c.surface().is_blank());
}

#[test]
fn palette_press_selects_without_drawing() {
    let mut c = common::controller();
    c.pointer_pressed(PointerEvent {
        position: Vec2::zero(),
        region: Region::Palette(PaletteIndex(4)),
    });
    assert!(!c.is_drawing());
    c.pointer_released();
    assert_eq!(c.selected_index(), PaletteIndex(4));
    assert!(c.surface().is_blank());

    tap(&mut c, Vec2::zero());
    // Old shapes keep their color.
    c.select_color(PaletteIndex(7)).unwrap();
    let (_, shape) = c.surface().shapes().next().unwrap();
    assert_eq!(shape.color(), DEFAULT_COLORS[4]);

    assert!(c.select_color(PaletteIndex(20)).is_err());
    assert_eq!(c.selected_index(), PaletteIndex(7));
}

#[test]
fn brush_size_stays_in_bounds() {
    let mut c = common::controller();
    for _ in 0..20 {
        c.action(Action::BrushLarger);
    }
    assert_eq!(c.brush_size().get(), 28);
    for _ in 0..20 {
        c.action(Action::BrushSmaller);
    }
    assert_eq!(c.brush_size().get(), BrushSize::MIN);

    // Only later shapes use the new size.
    tap(&mut c, Vec2::zero());
    c.action(Action::BrushLarger);
    let (_, shape) = c.surface().shapes().next().unwrap();
    let dpu = c.surface().view().dots_per_unit();
    assert!((shape.dot().unwrap().radius - 2.0 / dpu).abs() < 1e-6);
}

#[test]
fn press_while_drawing_starts_fresh() {
    let mut c = common::controller();
    c.pointer_pressed(PointerEvent::canvas(Vec2::zero()));
    c.pointer_moved(PointerEvent::canvas(Vec2::one()));
    // Release was lost.
    c.pointer_pressed(PointerEvent::canvas(Vec2::new(-1.0, -1.0)));
    c.pointer_released();

    let kinds: Vec<bool> = c.surface().shapes().map(|(_, s)| s.stroke().is_some()).collect();
    assert_eq!(kinds, vec![true, false]);
    assert_eq!(c.history().len(), 2);
}
