//! # Software rasterizer
//!
//! Renders the canvas into an image at its physical pixel size. This backs
//! [`Surface::capture`](crate::surface::Surface::capture), so it follows the same rules as the
//! on-screen painter: white canvas, stretched background, then shapes in drawing order, each
//! anti-aliased by distance to its edge and composited source-over.

use crate::{
    color::Color,
    shape::{Dot, Shape},
    units::ViewTransform,
};
use image::{Rgba, RgbaImage};
use ultraviolet::Vec2;

/// Render the canvas region into a fresh square image.
#[must_use]
pub fn render<'a>(
    view: &ViewTransform,
    background: Option<&RgbaImage>,
    shapes: impl IntoIterator<Item = &'a Shape>,
) -> RgbaImage {
    let side = view.pixel_side();
    let mut target = RgbaImage::from_pixel(side, side, Rgba([255; 4]));

    if let Some(background) = background {
        if background.dimensions() == (side, side) {
            image::imageops::overlay(&mut target, background, 0, 0);
        } else {
            let stretched = image::imageops::resize(
                background,
                side,
                side,
                image::imageops::FilterType::Triangle,
            );
            image::imageops::overlay(&mut target, &stretched, 0, 0);
        }
    }

    // Physical pixels per logical unit, and the matching projection.
    #[allow(clippy::cast_precision_loss)]
    let scale = side as f32 / view.extent.width();
    let extent = view.extent;
    let project = |p: Vec2| Vec2::new((p.x - extent.min.x) * scale, (extent.max.y - p.y) * scale);

    for shape in shapes {
        match shape {
            Shape::Dot(Dot {
                center,
                radius,
                color,
            }) => fill_dot(&mut target, project(*center), radius * scale, *color),
            Shape::Stroke(stroke) => {
                let points: Vec<Vec2> = stroke.points().iter().copied().map(project).collect();
                fill_polyline(&mut target, &points, stroke.width * scale / 2.0, stroke.color);
            }
        }
    }
    target
}

/// Clip a float bounding box to the image, as pixel index ranges. None if empty.
fn pixel_bounds(target: &RgbaImage, min: Vec2, max: Vec2) -> Option<(u32, u32, u32, u32)> {
    let (width, height) = target.dimensions();
    // Float to int casts saturate, so huge or negative bounds clip cleanly.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (x0, y0, x1, y1) = (
        min.x.floor().max(0.0) as u32,
        min.y.floor().max(0.0) as u32,
        (max.x.ceil().max(0.0) as u32).min(width),
        (max.y.ceil().max(0.0) as u32).min(height),
    );
    (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
}

#[allow(clippy::cast_precision_loss)]
fn pixel_center(x: u32, y: u32) -> Vec2 {
    Vec2::new(x as f32 + 0.5, y as f32 + 0.5)
}

/// Coverage of a pixel whose center is `distance` inside an edge, with a one pixel ramp.
fn coverage(distance: f32) -> f32 {
    (distance + 0.5).clamp(0.0, 1.0)
}

fn fill_dot(target: &mut RgbaImage, center: Vec2, radius: f32, color: Color) {
    let reach = Vec2::broadcast(radius + 1.0);
    let Some((x0, y0, x1, y1)) = pixel_bounds(target, center - reach, center + reach) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            let amount = coverage(radius - (pixel_center(x, y) - center).mag());
            if amount > 0.0 {
                blend(target.get_pixel_mut(x, y), color, amount);
            }
        }
    }
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.mag_sq();
    let t = if len_sq > 0.0 {
        ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (p - (a + ab * t)).mag()
}

/// Round-capped, round-joined polyline. Coverage is accumulated per pixel before compositing so
/// overlapping segments do not darken translucent colors.
fn fill_polyline(target: &mut RgbaImage, points: &[Vec2], half_width: f32, color: Color) {
    let Some(first) = points.first() else {
        return;
    };
    // Anything thinner than a pixel would vanish entirely.
    let half_width = half_width.max(0.5);
    let (min, max) = points.iter().fold((*first, *first), |(min, max), p| {
        (min.min_by_component(*p), max.max_by_component(*p))
    });
    let reach = Vec2::broadcast(half_width + 1.0);
    let Some((x0, y0, x1, y1)) = pixel_bounds(target, min - reach, max + reach) else {
        return;
    };
    let stride = (x1 - x0) as usize;
    let mut covered = vec![0.0f32; stride * (y1 - y0) as usize];

    let segments = points
        .windows(2)
        .map(|pair| (pair[0], pair[1]))
        // A lone point still draws as a cap.
        .chain((points.len() == 1).then_some((*first, *first)));
    for (a, b) in segments {
        let Some((sx0, sy0, sx1, sy1)) = pixel_bounds(
            target,
            a.min_by_component(b) - reach,
            a.max_by_component(b) + reach,
        ) else {
            continue;
        };
        for y in sy0.max(y0)..sy1.min(y1) {
            for x in sx0.max(x0)..sx1.min(x1) {
                let amount = coverage(half_width - distance_to_segment(pixel_center(x, y), a, b));
                let slot = &mut covered[(y - y0) as usize * stride + (x - x0) as usize];
                *slot = slot.max(amount);
            }
        }
    }

    for y in y0..y1 {
        for x in x0..x1 {
            let amount = covered[(y - y0) as usize * stride + (x - x0) as usize];
            if amount > 0.0 {
                blend(target.get_pixel_mut(x, y), color, amount);
            }
        }
    }
}

/// Straight-alpha source-over.
fn blend(dst: &mut Rgba<u8>, color: Color, amount: f32) {
    let src = color.as_array();
    let src_a = f32::from(src[3]) / 255.0 * amount;
    let dst_a = f32::from(dst.0[3]) / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        *dst = Rgba([0; 4]);
        return;
    }
    let to_u8 = |v: f32| {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = (v * 255.0).round().clamp(0.0, 255.0) as u8;
        v
    };
    for c in 0..3 {
        let s = f32::from(src[c]) / 255.0;
        let d = f32::from(dst.0[c]) / 255.0;
        dst.0[c] = to_u8((s * src_a + d * dst_a * (1.0 - src_a)) / out_a);
    }
    dst.0[3] = to_u8(out_a);
}
