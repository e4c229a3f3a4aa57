use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::color::{PaintColor, resolve_color};
use crate::stamp::Stamp;

pub const BRUSH_SIZE_RANGE: RangeInclusive<f32> = 1.0..=16.0;
pub const BRUSH_SIZE_STEP: f64 = 0.1;
pub const DEFAULT_OPACITY: u8 = 220;

/// Style knobs the toolbox edits and every stamp reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleState {
    /// Configured paint color; its alpha is ignored in favor of `opacity`
    pub paint_color: PaintColor,
    pub brush_size: f32,
    pub opacity: u8,
    pub rainbow: bool,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            paint_color: PaintColor::BLACK,
            brush_size: *BRUSH_SIZE_RANGE.start(),
            opacity: DEFAULT_OPACITY,
            rainbow: false,
        }
    }
}

impl StyleState {
    /// Set the brush size, clamped into [`BRUSH_SIZE_RANGE`]. NaN falls back to the minimum.
    pub fn set_brush_size(&mut self, size: f32) {
        self.brush_size = if size.is_nan() {
            *BRUSH_SIZE_RANGE.start()
        } else {
            size.clamp(*BRUSH_SIZE_RANGE.start(), *BRUSH_SIZE_RANGE.end())
        };
    }

    /// Picking an explicit color leaves rainbow mode.
    pub fn set_paint_color(&mut self, color: PaintColor) {
        self.paint_color = color;
        self.rainbow = false;
    }

    pub fn toggle_rainbow(&mut self) {
        self.rainbow = !self.rainbow;
    }

    /// Resolve the brush used for one frame.
    pub fn brush_at(&self, frame: u64) -> Brush {
        Brush {
            color: resolve_color(self, frame),
            size: self.brush_size,
        }
    }
}

/// Per-frame drawing parameters handed to a stamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    /// Used as both stroke and fill
    pub color: PaintColor,
    pub size: f32,
}

/// Everything the UI can change between frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintState {
    pub stamp: Stamp,
    pub style: StyleState,
    pub background: PaintColor,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            stamp: Stamp::default(),
            style: StyleState::default(),
            background: PaintColor::PAPER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brush_size_clamped() {
        let mut style = StyleState::default();
        style.set_brush_size(40.0);
        assert_eq!(style.brush_size, 16.0);
        style.set_brush_size(0.2);
        assert_eq!(style.brush_size, 1.0);
        style.set_brush_size(f32::NAN);
        assert_eq!(style.brush_size, 1.0);
        style.set_brush_size(7.5);
        assert_eq!(style.brush_size, 7.5);
    }

    #[test]
    fn test_picking_color_turns_rainbow_off() {
        let mut style = StyleState::default();
        style.toggle_rainbow();
        assert!(style.rainbow);
        style.set_paint_color(PaintColor::rgb(10, 20, 30));
        assert!(!style.rainbow);
        assert_eq!(style.paint_color, PaintColor::rgb(10, 20, 30));
    }

    #[test]
    fn test_state_deserializes_with_missing_fields() {
        let state: PaintState = serde_json::from_str(r#"{"stamp":"beads"}"#).unwrap();
        assert_eq!(state.stamp, Stamp::Beads);
        assert_eq!(state.style, StyleState::default());
        assert_eq!(state.background, PaintColor::PAPER);
    }
}
