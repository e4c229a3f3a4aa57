use egui::vec2;

use super::StampRng;
use crate::pointer::PointerSample;
use crate::primitive::Primitive;
use crate::style::Brush;

pub const SPLATTER_LERPS: usize = 8;
pub const SPRAY_LERPS: usize = 10;
/// Dots per spray center.
pub const SPRAY_DENSITY: usize = 80;
pub const SPRAY_MIN_RADIUS: f32 = 10.0;

/// Dots along the path, but at fractions `i / 8 + 8`, which lands them well
/// beyond the previous sample rather than between the two samples.
pub(super) fn splatter(sample: &PointerSample, brush: &Brush) -> Vec<Primitive> {
    let lerps = SPLATTER_LERPS as f32;

    (0..SPLATTER_LERPS)
        .map(|i| Primitive::Point {
            position: sample.lerp(i as f32 / lerps + lerps),
            weight: brush.size * 2.0,
            color: brush.color,
        })
        .collect()
}

/// Radius of the spray cloud for a sample.
pub fn spray_radius(sample: &PointerSample) -> f32 {
    sample.speed() + SPRAY_MIN_RADIUS
}

/// Clouds of random dots inside a circle, repeated along the path.
///
/// `x` is uniform across the diameter and `y` is scaled into the chord at
/// that `x`, so dots bunch toward the left and right edges.
pub(super) fn spray_paint(sample: &PointerSample, brush: &Brush, rng: &mut StampRng) -> Vec<Primitive> {
    let r = spray_radius(sample);
    let r_squared = r * r;
    let weight = brush.size * 0.1;

    let mut dots = Vec::with_capacity(SPRAY_LERPS * SPRAY_DENSITY);
    for i in 0..SPRAY_LERPS {
        let center = sample.lerp(i as f32 / SPRAY_LERPS as f32);
        for _ in 0..SPRAY_DENSITY {
            let x = rng.range(-r, r);
            let y = rng.range(-1.0, 1.0) * (r_squared - x * x).max(0.0).sqrt();
            dots.push(Primitive::Point {
                position: center + vec2(x, y),
                weight,
                color: brush.color,
            });
        }
    }
    dots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PaintColor;
    use egui::pos2;

    #[test]
    fn test_splatter_extrapolates_past_previous() {
        let sample = PointerSample::new(pos2(1.0, 0.0), pos2(0.0, 0.0), 0);
        let brush = Brush {
            color: PaintColor::BLACK,
            size: 2.0,
        };
        let dots = splatter(&sample, &brush);
        assert_eq!(dots.len(), SPLATTER_LERPS);
        for (i, dot) in dots.iter().enumerate() {
            let Primitive::Point { position, weight, .. } = *dot else {
                panic!("expected a point, got {dot:?}");
            };
            let t = i as f32 / 8.0 + 8.0;
            assert!((position.x - (1.0 - t)).abs() < 1e-5);
            assert!(position.x < 0.0);
            assert_eq!(weight, 4.0);
        }
    }

    #[test]
    fn test_spray_dot_count_and_weight() {
        let sample = PointerSample::new(pos2(50.0, 50.0), pos2(40.0, 45.0), 3);
        let brush = Brush {
            color: PaintColor::BLACK,
            size: 5.0,
        };
        let dots = spray_paint(&sample, &brush, &mut StampRng::new(1));
        assert_eq!(dots.len(), SPRAY_LERPS * SPRAY_DENSITY);
        assert!(dots.iter().all(|d| matches!(d, Primitive::Point { weight, .. } if (*weight - 0.5).abs() < 1e-6)));
        assert_eq!(spray_radius(&sample), 25.0);
    }
}
