//! Brush stamps: the fixed set of patterns a drag can paint.
//!
//! Every stamp is a pure function of the pointer sample and the resolved
//! [`Brush`]. `sprayPaint` additionally draws from a caller-supplied
//! [`StampRng`], which keeps it reproducible under a fixed seed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PaintError;
use crate::pointer::PointerSample;
use crate::primitive::Primitive;
use crate::style::Brush;

mod rng;
mod scatter;
mod shapes;
mod strokes;

pub use rng::StampRng;
pub use scatter::{SPLATTER_LERPS, SPRAY_DENSITY, SPRAY_LERPS, SPRAY_MIN_RADIUS, spray_radius};
pub use shapes::{MARKER_SCALE, TOOTHPICK_MIN_SIZE};
pub use strokes::{FOUNTAIN_PEN_LERPS, FOUNTAIN_PEN_OFFSET, HATCHING_LERPS};

/// The closed set of brush stamps.
///
/// Identifiers (`Stamp::id`) are the camelCase names used by the UI and in
/// saved settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stamp {
    #[default]
    Pen,
    Marker,
    Beads,
    Wiggle,
    Toothpick,
    FountainPen,
    Splatter,
    Hatching,
    SprayPaint,
}

impl Stamp {
    /// Every stamp, in toolbox order.
    pub const ALL: [Stamp; 9] = [
        Stamp::Pen,
        Stamp::Marker,
        Stamp::Beads,
        Stamp::Wiggle,
        Stamp::Toothpick,
        Stamp::FountainPen,
        Stamp::Splatter,
        Stamp::Hatching,
        Stamp::SprayPaint,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Pen => "pen",
            Self::Marker => "marker",
            Self::Beads => "beads",
            Self::Wiggle => "wiggle",
            Self::Toothpick => "toothpick",
            Self::FountainPen => "fountainPen",
            Self::Splatter => "splatter",
            Self::Hatching => "hatching",
            Self::SprayPaint => "sprayPaint",
        }
    }

    /// Look a stamp up by its identifier.
    pub fn from_id(id: &str) -> Result<Self, PaintError> {
        Self::ALL
            .into_iter()
            .find(|stamp| stamp.id() == id)
            .ok_or_else(|| PaintError::UnknownStamp(id.to_owned()))
    }

    pub(crate) fn id_list() -> String {
        Self::ALL.map(Stamp::id).join(", ")
    }

    /// Human-readable name for the toolbox.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pen => "Pen",
            Self::Marker => "Marker",
            Self::Beads => "Beads",
            Self::Wiggle => "Wiggle",
            Self::Toothpick => "Toothpick",
            Self::FountainPen => "Fountain pen",
            Self::Splatter => "Splatter",
            Self::Hatching => "Hatching",
            Self::SprayPaint => "Spray paint",
        }
    }

    /// Emit this stamp's primitives for one frame.
    pub fn draw(self, sample: &PointerSample, brush: &Brush, rng: &mut StampRng) -> Vec<Primitive> {
        match self {
            Self::Pen => strokes::pen(sample, brush),
            Self::Marker => shapes::marker(sample, brush),
            Self::Beads => shapes::beads(sample, brush),
            Self::Wiggle => strokes::wiggle(sample, brush),
            Self::Toothpick => shapes::toothpick(sample, brush),
            Self::FountainPen => strokes::fountain_pen(sample, brush),
            Self::Splatter => scatter::splatter(sample, brush),
            Self::Hatching => strokes::hatching(sample, brush),
            Self::SprayPaint => scatter::spray_paint(sample, brush, rng),
        }
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Stamp {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s)
    }
}
