use egui::{Context, PointerButton, Pos2, Rect, Response};

use crate::pointer::{PointerSample, PointerTracker};

mod shortcuts;
pub use shortcuts::{Action, action_for_key, shortcut_actions};

/// Converts raw egui pointer input into per-frame [`PointerSample`]s.
///
/// Samples are in canvas coordinates (origin at the canvas' top-left corner).
#[derive(Debug, Default)]
pub struct InputHandler {
    tracker: PointerTracker,
    canvas_rect: Option<Rect>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the canvas rectangle in screen coordinates
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = Some(rect);
    }

    /// Frames seen so far
    pub fn frame(&self) -> u64 {
        self.tracker.frame()
    }

    /// Read this frame's pointer state from egui. Call exactly once per frame.
    ///
    /// `canvas` is the canvas widget's response; painting requires the press
    /// to have started on it, so dragging a slider across the canvas does not paint.
    pub fn process_input(&mut self, ctx: &Context, canvas: &Response) -> Option<PointerSample> {
        let pos = ctx.input(|input| input.pointer.latest_pos());
        let primary_down = canvas.is_pointer_button_down_on()
            && ctx.input(|input| input.pointer.button_down(PointerButton::Primary));
        self.advance(pos, primary_down)
    }

    /// Advance one frame with an explicit pointer state.
    ///
    /// The pointer is tracked even when it is outside the canvas, so the first
    /// stamp after entering the canvas still connects to where it came from.
    /// Returns a sample only while the primary button is held over the canvas.
    pub fn advance(&mut self, screen_pos: Option<Pos2>, primary_down: bool) -> Option<PointerSample> {
        let origin = self.canvas_rect.map_or(Pos2::ZERO, |rect| rect.min);
        let sample = self
            .tracker
            .advance(screen_pos.map(|pos| (pos - origin).to_pos2()))?;

        let over_canvas = match (self.canvas_rect, screen_pos) {
            (Some(rect), Some(pos)) => rect.contains(pos),
            _ => false,
        };
        (primary_down && over_canvas).then_some(sample)
    }
}
