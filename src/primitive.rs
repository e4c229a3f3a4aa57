use egui::{Pos2, Rect, Vec2, pos2, vec2};

use crate::color::PaintColor;

/// A single drawing call emitted by a stamp.
///
/// Positions are in canvas coordinates. Angles are radians, measured from +x
/// toward +y (clockwise on screen, since y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Stroked segment with round caps
    Line {
        from: Pos2,
        to: Pos2,
        width: f32,
        color: PaintColor,
    },
    /// Filled disc without outline
    Circle {
        center: Pos2,
        diameter: f32,
        color: PaintColor,
    },
    /// Open stroked arc from `start` to `stop`, no fill
    Arc {
        center: Pos2,
        diameter: f32,
        start: f32,
        stop: f32,
        width: f32,
        color: PaintColor,
    },
    /// Filled ellipse without outline; `major` lies along the rotated x axis
    Ellipse {
        center: Pos2,
        major: f32,
        minor: f32,
        rotation: f32,
        color: PaintColor,
    },
    /// Dot of diameter `weight`
    Point {
        position: Pos2,
        weight: f32,
        color: PaintColor,
    },
}

impl Primitive {
    pub fn color(&self) -> PaintColor {
        match self {
            Self::Line { color, .. }
            | Self::Circle { color, .. }
            | Self::Arc { color, .. }
            | Self::Ellipse { color, .. }
            | Self::Point { color, .. } => *color,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Line { .. } => "line",
            Self::Circle { .. } => "circle",
            Self::Arc { .. } => "arc",
            Self::Ellipse { .. } => "ellipse",
            Self::Point { .. } => "point",
        }
    }

    /// True when every coordinate and size is a finite number.
    pub fn is_finite(&self) -> bool {
        let pos_ok = |p: &Pos2| p.x.is_finite() && p.y.is_finite();
        match self {
            Self::Line { from, to, width, .. } => pos_ok(from) && pos_ok(to) && width.is_finite(),
            Self::Circle { center, diameter, .. } => pos_ok(center) && diameter.is_finite(),
            Self::Arc {
                center,
                diameter,
                start,
                stop,
                width,
                ..
            } => {
                pos_ok(center)
                    && diameter.is_finite()
                    && start.is_finite()
                    && stop.is_finite()
                    && width.is_finite()
            }
            Self::Ellipse {
                center,
                major,
                minor,
                rotation,
                ..
            } => pos_ok(center) && major.is_finite() && minor.is_finite() && rotation.is_finite(),
            Self::Point { position, weight, .. } => pos_ok(position) && weight.is_finite(),
        }
    }

    /// False for fills and arcs with no size, which cover no pixels at all.
    ///
    /// Lines are kept regardless of length: a zero-length line still has round caps.
    pub fn has_extent(&self) -> bool {
        match *self {
            Self::Line { width, .. } => width > 0.0,
            Self::Circle { diameter, .. } => diameter > 0.0,
            Self::Arc { diameter, width, .. } => diameter > 0.0 && width > 0.0,
            Self::Ellipse { major, minor, .. } => major > 0.0 && minor > 0.0,
            Self::Point { weight, .. } => weight > 0.0,
        }
    }

    /// Axis-aligned box that contains every pixel the primitive can touch.
    pub fn bounds(&self) -> Rect {
        match *self {
            Self::Line { from, to, width, .. } => {
                Rect::from_two_pos(from, to).expand(width.abs() * 0.5)
            }
            Self::Circle { center, diameter, .. } => {
                Rect::from_center_size(center, Vec2::splat(diameter.abs()))
            }
            Self::Arc {
                center,
                diameter,
                width,
                ..
            } => Rect::from_center_size(center, Vec2::splat(diameter.abs() + width.abs())),
            Self::Ellipse {
                center,
                major,
                minor,
                rotation,
                ..
            } => {
                let (sin, cos) = rotation.sin_cos();
                let a = major.abs() * 0.5;
                let b = minor.abs() * 0.5;
                let half = vec2(
                    ((a * cos).powi(2) + (b * sin).powi(2)).sqrt(),
                    ((a * sin).powi(2) + (b * cos).powi(2)).sqrt(),
                );
                Rect::from_center_size(center, half * 2.0)
            }
            Self::Point { position, weight, .. } => {
                Rect::from_center_size(position, Vec2::splat(weight.abs()))
            }
        }
    }
}

/// Start and stop points of an arc.
pub fn arc_endpoints(center: Pos2, diameter: f32, start: f32, stop: f32) -> (Pos2, Pos2) {
    let r = diameter * 0.5;
    let at = |angle: f32| pos2(center.x + r * angle.cos(), center.y + r * angle.sin());
    (at(start), at(stop))
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: PaintColor = PaintColor::BLACK;

    #[test]
    fn test_line_bounds_include_width() {
        let line = Primitive::Line {
            from: pos2(0.0, 0.0),
            to: pos2(10.0, 0.0),
            width: 4.0,
            color: INK,
        };
        let bounds = line.bounds();
        assert_eq!(bounds.min, pos2(-2.0, -2.0));
        assert_eq!(bounds.max, pos2(12.0, 2.0));
    }

    #[test]
    fn test_rotated_ellipse_bounds() {
        let ellipse = Primitive::Ellipse {
            center: pos2(0.0, 0.0),
            major: 20.0,
            minor: 4.0,
            rotation: std::f32::consts::FRAC_PI_2,
            color: INK,
        };
        let bounds = ellipse.bounds();
        assert!((bounds.width() - 4.0).abs() < 1e-4);
        assert!((bounds.height() - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_non_finite_detected() {
        let point = Primitive::Point {
            position: pos2(f32::NAN, 0.0),
            weight: 1.0,
            color: INK,
        };
        assert!(!point.is_finite());
        assert_eq!(point.kind(), "point");
    }

    #[test]
    fn test_zero_sized_shapes_have_no_extent() {
        let color = INK;
        let center = pos2(3.0, 3.0);
        assert!(!Primitive::Circle { center, diameter: 0.0, color }.has_extent());
        assert!(!Primitive::Point { position: center, weight: 0.0, color }.has_extent());
        assert!(
            !Primitive::Arc {
                center,
                diameter: 0.0,
                start: 0.0,
                stop: std::f32::consts::PI,
                width: 4.0,
                color,
            }
            .has_extent()
        );
        assert!(
            Primitive::Line {
                from: center,
                to: center,
                width: 2.0,
                color,
            }
            .has_extent()
        );
    }

    #[test]
    fn test_arc_endpoints() {
        let (a, b) = arc_endpoints(pos2(0.0, 0.0), 10.0, 0.0, std::f32::consts::PI);
        assert!((a - pos2(5.0, 0.0)).length() < 1e-5);
        assert!((b - pos2(-5.0, 0.0)).length() < 1e-5);
    }
}
