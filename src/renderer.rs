use crate::pointer::PointerSample;
use crate::primitive::Primitive;
use crate::stamp::StampRng;
use crate::style::PaintState;

/// Resolve the frame's color and run the active stamp once.
pub fn render_frame(state: &PaintState, sample: &PointerSample, rng: &mut StampRng) -> Vec<Primitive> {
    let brush = state.style.brush_at(sample.frame);
    state.stamp.draw(sample, &brush, rng)
}

/// Owns the randomness the stamps draw from and counts frames rendered.
#[derive(Debug)]
pub struct Renderer {
    rng: StampRng,
    stamps_drawn: u64,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Creates a renderer seeded from the clock
    pub fn new() -> Self {
        Self::with_rng(StampRng::from_clock())
    }

    /// Creates a renderer with a fixed seed, for reproducible output
    pub fn with_seed(seed: u32) -> Self {
        Self::with_rng(StampRng::new(seed))
    }

    fn with_rng(rng: StampRng) -> Self {
        Self {
            rng,
            stamps_drawn: 0,
        }
    }

    /// Renders one stamp for the current frame
    ///
    /// Args:
    ///     state (PaintState): The style and stamp selected in the toolbox
    ///     sample (PointerSample): Pointer positions for this frame
    ///
    /// Returns:
    ///     Vec<Primitive>: The primitives to rasterize onto the canvas
    pub fn render(&mut self, state: &PaintState, sample: &PointerSample) -> Vec<Primitive> {
        self.stamps_drawn += 1;
        render_frame(state, sample, &mut self.rng)
    }

    /// Number of stamps rendered so far
    pub fn stamps_drawn(&self) -> u64 {
        self.stamps_drawn
    }
}
