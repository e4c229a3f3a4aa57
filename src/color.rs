use serde::{Deserialize, Serialize};

use crate::error::PaintError;
use crate::style::StyleState;

/// Base alpha of the rainbow color before the opacity override.
pub const RAINBOW_BASE_ALPHA: u8 = 153;

/// Hue advance per frame in rainbow mode, in degrees. Divides 360.
pub const RAINBOW_HUE_STEP: u64 = 2;

/// Straight (non-premultiplied) 8-bit RGBA color.
///
/// egui's `Color32` is premultiplied, which makes "replace the alpha" lossy,
/// so paint colors are kept in this form and converted at the edges.
///
/// Serializes as a hex string, `#rrggbb` when opaque and `#rrggbbaa` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PaintColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl PaintColor {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Warm paper tone used as the default canvas background.
    pub const PAPER: Self = Self::rgb(0xfb, 0xf8, 0xf3);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn to_srgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_srgb([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }

    pub fn to_rgba8(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }

    /// Build a color from hue (degrees), saturation and brightness in `[0, 1]`.
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32, alpha: u8) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = saturation.clamp(0.0, 1.0);
        let v = brightness.clamp(0.0, 1.0);

        let chroma = v * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let m = v - chroma;

        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let to_u8 = |c: f32| ((c + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::rgba(to_u8(r), to_u8(g), to_u8(b), alpha)
    }

    /// Hue in degrees in `[0, 360)`; 0 for grays.
    pub fn hue(self) -> f32 {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        if delta <= f32::EPSILON {
            return 0.0;
        }
        let sector = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        (sector * 60.0).rem_euclid(360.0)
    }
}

impl PaintColor {
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the `#` is optional).
    pub fn from_hex(text: &str) -> Result<Self, PaintError> {
        let invalid = || PaintError::InvalidColor(text.to_owned());
        let digits = text.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                let nibble = |i: usize| {
                    u8::from_str_radix(&digits[i..=i], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for PaintColor {
    type Error = PaintError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::from_hex(&text)
    }
}

impl From<PaintColor> for String {
    fn from(color: PaintColor) -> Self {
        color.to_hex()
    }
}

impl Default for PaintColor {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Hue of the rainbow cycle at `frame`, in whole degrees.
pub fn rainbow_hue(frame: u64) -> u64 {
    (frame % (360 / RAINBOW_HUE_STEP)) * RAINBOW_HUE_STEP
}

/// The stroke and fill color for one frame.
pub fn resolve_color(style: &StyleState, frame: u64) -> PaintColor {
    let base = if style.rainbow {
        PaintColor::from_hsb(rainbow_hue(frame) as f32, 1.0, 1.0, RAINBOW_BASE_ALPHA)
    } else {
        style.paint_color
    };
    base.with_alpha(style.opacity)
}
