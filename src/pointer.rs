use egui::{Pos2, Vec2};

/// One frame's worth of pointer input, as seen by a stamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Pointer position this frame, in canvas coordinates
    pub current: Pos2,
    /// Pointer position on the previous frame
    pub previous: Pos2,
    /// Frames elapsed since the app started
    pub frame: u64,
}

impl PointerSample {
    pub fn new(current: Pos2, previous: Pos2, frame: u64) -> Self {
        Self {
            current,
            previous,
            frame,
        }
    }

    /// Movement since the previous frame.
    pub fn delta(&self) -> Vec2 {
        self.current - self.previous
    }

    pub fn midpoint(&self) -> Pos2 {
        self.current.lerp(self.previous, 0.5)
    }

    /// Euclidean distance between the two samples.
    pub fn distance(&self) -> f32 {
        self.current.distance(self.previous)
    }

    /// Manhattan length of the movement, used as a cheap speed estimate.
    pub fn speed(&self) -> f32 {
        let d = self.delta();
        d.x.abs() + d.y.abs()
    }

    /// Direction of movement in radians, `atan2(dy, dx)`.
    pub fn heading(&self) -> f32 {
        self.delta().angle()
    }

    /// Point at fraction `t` from the current position toward the previous one.
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate.
    pub fn lerp(&self, t: f32) -> Pos2 {
        self.current.lerp(self.previous, t)
    }

    pub fn is_even_frame(&self) -> bool {
        self.frame % 2 == 0
    }
}

/// Turns the host's per-frame pointer position into [`PointerSample`]s.
///
/// Keeps the last seen position so the previous sample is always defined,
/// even across frames where nothing was drawn.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    last_pos: Option<Pos2>,
    frame: u64,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame. Must be called exactly once per rendered frame.
    ///
    /// Returns `None` when the pointer position is unknown this frame.
    pub fn advance(&mut self, pos: Option<Pos2>) -> Option<PointerSample> {
        self.frame += 1;
        let current = pos?;
        let previous = self.last_pos.replace(current).unwrap_or(current);
        Some(PointerSample::new(current, previous, self.frame))
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}
