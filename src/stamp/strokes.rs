use std::f32::consts::PI;

use egui::{Vec2, vec2};

use crate::pointer::PointerSample;
use crate::primitive::Primitive;
use crate::style::Brush;

pub const FOUNTAIN_PEN_LERPS: usize = 16;
/// Half-extent of each slanted fountain pen nib mark, on both axes.
pub const FOUNTAIN_PEN_OFFSET: f32 = 5.0;
pub const HATCHING_LERPS: usize = 3;

pub(super) fn pen(sample: &PointerSample, brush: &Brush) -> Vec<Primitive> {
    vec![Primitive::Line {
        from: sample.previous,
        to: sample.current,
        width: brush.size,
        color: brush.color,
    }]
}

/// Half-circle across the movement, flipped to the other side on odd frames.
pub(super) fn wiggle(sample: &PointerSample, brush: &Brush) -> Vec<Primitive> {
    let angle = sample.heading();
    let flip = (sample.frame % 2) as f32 * PI;

    vec![Primitive::Arc {
        center: sample.midpoint(),
        diameter: sample.distance(),
        start: angle + flip,
        stop: angle + PI + flip,
        width: brush.size,
        color: brush.color,
    }]
}

pub(super) fn fountain_pen(sample: &PointerSample, brush: &Brush) -> Vec<Primitive> {
    let nib = Vec2::splat(FOUNTAIN_PEN_OFFSET);

    (0..FOUNTAIN_PEN_LERPS)
        .map(|i| {
            let at = sample.lerp(i as f32 / FOUNTAIN_PEN_LERPS as f32);
            Primitive::Line {
                from: at - nib,
                to: at + nib,
                width: brush.size,
                color: brush.color,
            }
        })
        .collect()
}

/// Short strokes across the path, longer the faster the pointer moves.
pub(super) fn hatching(sample: &PointerSample, brush: &Brush) -> Vec<Primitive> {
    let delta = sample.delta();
    let half = hatch_vector(delta, sample.speed() / 2.0);

    (0..HATCHING_LERPS)
        .map(|i| {
            let at = sample.lerp(i as f32 / HATCHING_LERPS as f32);
            Primitive::Line {
                from: at - half,
                to: at + half,
                width: brush.size,
                color: brush.color,
            }
        })
        .collect()
}

/// Perpendicular to `delta` with the given length; zero when there is no movement.
///
/// This is the rotated vector `(-dy, dx)`, not the component swap `(dy, dx)`,
/// which only happens to be perpendicular for diagonal strokes.
fn hatch_vector(delta: Vec2, length: f32) -> Vec2 {
    let normal = vec2(-delta.y, delta.x);
    let len = normal.length();
    if len > 0.0 {
        normal * (length / len)
    } else {
        Vec2::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PaintColor;
    use egui::pos2;

    fn brush(size: f32) -> Brush {
        Brush {
            color: PaintColor::BLACK,
            size,
        }
    }

    #[test]
    fn test_fountain_pen_marks_are_diagonal() {
        let sample = PointerSample::new(pos2(32.0, 0.0), pos2(0.0, 0.0), 0);
        let marks = fountain_pen(&sample, &brush(2.0));
        assert_eq!(marks.len(), FOUNTAIN_PEN_LERPS);
        for (i, mark) in marks.iter().enumerate() {
            let Primitive::Line { from, to, width, .. } = *mark else {
                panic!("expected a line, got {mark:?}");
            };
            let center = from.lerp(to, 0.5);
            assert!((center.x - (32.0 - 2.0 * i as f32)).abs() < 1e-4);
            assert_eq!(to - from, vec2(10.0, 10.0));
            assert_eq!(width, 2.0);
        }
    }

    #[test]
    fn test_hatching_is_perpendicular_and_speed_sized() {
        let sample = PointerSample::new(pos2(6.0, 8.0), pos2(0.0, 0.0), 0);
        let lines = hatching(&sample, &brush(1.0));
        assert_eq!(lines.len(), HATCHING_LERPS);
        for line in lines {
            let Primitive::Line { from, to, .. } = line else {
                panic!("expected a line, got {line:?}");
            };
            let dir = to - from;
            assert!(dir.dot(sample.delta()).abs() < 1e-3);
            assert!((dir.length() - sample.speed()).abs() < 1e-3);
        }
    }

    #[test]
    fn test_horizontal_stroke_hatches_vertically() {
        let sample = PointerSample::new(pos2(10.0, 0.0), pos2(0.0, 0.0), 0);
        let Primitive::Line { from, to, .. } = hatching(&sample, &brush(1.0))[0] else {
            panic!("expected a line");
        };
        assert_eq!(from.x, to.x);
        assert!(((to.y - from.y).abs() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_hatching_without_movement_is_degenerate() {
        let sample = PointerSample::new(pos2(3.0, 3.0), pos2(3.0, 3.0), 0);
        for line in hatching(&sample, &brush(1.0)) {
            let Primitive::Line { from, to, .. } = line else {
                panic!("expected a line, got {line:?}");
            };
            assert_eq!(from, to);
        }
    }
}
