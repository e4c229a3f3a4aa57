//! Software rasterization of stamp primitives onto an RGBA image.
//!
//! Shapes are evaluated as signed distance fields at pixel centers, with a one
//! pixel coverage ramp for anti-aliasing, and composited source-over.

use std::f32::consts::TAU;

use egui::{Pos2, Vec2, pos2, vec2};
use image::{Rgba, RgbaImage};

use crate::color::PaintColor;
use crate::primitive::{Primitive, arc_endpoints};

/// Fill every pixel with `color`.
pub fn fill(image: &mut RgbaImage, color: PaintColor) {
    let px = color.to_rgba8();
    for pixel in image.pixels_mut() {
        *pixel = px;
    }
}

pub fn draw_all(image: &mut RgbaImage, primitives: &[Primitive]) {
    for primitive in primitives {
        draw(image, primitive);
    }
}

/// Composite one primitive onto `image`. Pixels outside the image are clipped.
pub fn draw(image: &mut RgbaImage, primitive: &Primitive) {
    if !primitive.is_finite() {
        log::warn!("Skipping non-finite {}: {:?}", primitive.kind(), primitive);
        return;
    }
    let color = primitive.color();
    if color.a == 0 || !primitive.has_extent() {
        return;
    }

    let bounds = primitive.bounds().expand(1.0);
    let (width, height) = (image.width() as f32, image.height() as f32);
    let x0 = bounds.min.x.floor().clamp(0.0, width) as u32;
    let x1 = bounds.max.x.ceil().clamp(0.0, width) as u32;
    let y0 = bounds.min.y.floor().clamp(0.0, height) as u32;
    let y1 = bounds.max.y.ceil().clamp(0.0, height) as u32;

    for y in y0..y1 {
        for x in x0..x1 {
            let center = pos2(x as f32 + 0.5, y as f32 + 0.5);
            let coverage = (0.5 - signed_distance(primitive, center)).clamp(0.0, 1.0);
            if coverage > 0.0 {
                blend(image.get_pixel_mut(x, y), color, coverage);
            }
        }
    }
}

/// Distance from `p` to the primitive's edge; negative inside.
pub fn signed_distance(primitive: &Primitive, p: Pos2) -> f32 {
    match *primitive {
        Primitive::Line { from, to, width, .. } => distance_to_segment(p, from, to) - width * 0.5,
        Primitive::Circle { center, diameter, .. } => (p - center).length() - diameter * 0.5,
        Primitive::Point { position, weight, .. } => (p - position).length() - weight * 0.5,
        Primitive::Ellipse {
            center,
            major,
            minor,
            rotation,
            ..
        } => ellipse_distance(p - center, major * 0.5, minor * 0.5, rotation),
        Primitive::Arc {
            center,
            diameter,
            start,
            stop,
            width,
            ..
        } => arc_distance(p, center, diameter * 0.5, start, stop) - width * 0.5,
    }
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq == 0.0 {
        return (p - a).length();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).length()
}

/// First-order distance estimate `f / |∇f|` for the implicit ellipse.
fn ellipse_distance(offset: Vec2, a: f32, b: f32, rotation: f32) -> f32 {
    if a <= 0.0 || b <= 0.0 {
        return f32::INFINITY;
    }
    let (sin, cos) = rotation.sin_cos();
    let local = vec2(offset.x * cos + offset.y * sin, -offset.x * sin + offset.y * cos);

    let f = (local.x / a).powi(2) + (local.y / b).powi(2) - 1.0;
    let grad = vec2(2.0 * local.x / (a * a), 2.0 * local.y / (b * b)).length();
    if grad < 1e-6 { -a.min(b) } else { f / grad }
}

/// Unsigned distance to the circular arc from `start` sweeping to `stop`.
fn arc_distance(p: Pos2, center: Pos2, radius: f32, start: f32, stop: f32) -> f32 {
    let v = p - center;
    let sweep = (stop - start).clamp(0.0, TAU);
    let along = (v.angle() - start).rem_euclid(TAU);
    if along <= sweep {
        (v.length() - radius).abs()
    } else {
        let (first, last) = arc_endpoints(center, radius * 2.0, start, stop);
        (p - first).length().min((p - last).length())
    }
}

fn blend(dst: &mut Rgba<u8>, src: PaintColor, coverage: f32) {
    let sa = src.a as f32 / 255.0 * coverage;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return;
    }
    let mix = |s: u8, d: u8| {
        let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        v.round().clamp(0.0, 255.0) as u8
    };
    *dst = Rgba([
        mix(src.r, dst[0]),
        mix(src.g, dst[1]),
        mix(src.b, dst[2]),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ]);
}
