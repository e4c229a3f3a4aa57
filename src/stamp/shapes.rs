use crate::pointer::PointerSample;
use crate::primitive::Primitive;
use crate::style::Brush;

/// Marker disc diameter per unit of brush size.
pub const MARKER_SCALE: f32 = 20.0;
/// Minor axis of the toothpick, and the floor added to its major axis.
pub const TOOTHPICK_MIN_SIZE: f32 = 4.0;

pub(super) fn marker(sample: &PointerSample, brush: &Brush) -> Vec<Primitive> {
    vec![Primitive::Circle {
        center: sample.current,
        diameter: brush.size * MARKER_SCALE,
        color: brush.color,
    }]
}

/// A disc spanning the gap between the two samples.
pub(super) fn beads(sample: &PointerSample, brush: &Brush) -> Vec<Primitive> {
    vec![Primitive::Circle {
        center: sample.midpoint(),
        diameter: sample.distance(),
        color: brush.color,
    }]
}

pub(super) fn toothpick(sample: &PointerSample, brush: &Brush) -> Vec<Primitive> {
    vec![Primitive::Ellipse {
        center: sample.current,
        major: sample.distance() * 2.0 * brush.size + TOOTHPICK_MIN_SIZE,
        minor: TOOTHPICK_MIN_SIZE,
        rotation: sample.heading(),
        color: brush.color,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PaintColor;
    use egui::pos2;

    #[test]
    fn test_toothpick_follows_heading() {
        let sample = PointerSample::new(pos2(0.0, 5.0), pos2(0.0, 0.0), 0);
        let brush = Brush {
            color: PaintColor::BLACK,
            size: 3.0,
        };
        let [Primitive::Ellipse { center, major, minor, rotation, .. }] = toothpick(&sample, &brush)[..] else {
            panic!("expected a single ellipse");
        };
        assert_eq!(center, pos2(0.0, 5.0));
        assert_eq!(major, 34.0);
        assert_eq!(minor, 4.0);
        assert!((rotation - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_beads_without_movement_is_empty_disc() {
        let sample = PointerSample::new(pos2(2.0, 2.0), pos2(2.0, 2.0), 0);
        let brush = Brush {
            color: PaintColor::BLACK,
            size: 1.0,
        };
        let [Primitive::Circle { diameter, .. }] = beads(&sample, &brush)[..] else {
            panic!("expected a single circle");
        };
        assert_eq!(diameter, 0.0);
    }
}
