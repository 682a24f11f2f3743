//! Rendered frames and frame sequences.

use std::time::Duration;

use crate::Grid;

/// One fully rendered animation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Grid snapshot for this step.
    pub grid: Grid,
    /// How long the caller should keep this frame on screen.
    pub hold: Duration,
}

impl Frame {
    /// Create a frame from a grid snapshot and its hold duration.
    pub fn new(grid: Grid, hold: Duration) -> Self {
        Self { grid, hold }
    }

    /// Frame text, rows joined by `\n`.
    pub fn text(&self) -> String {
        self.grid.render()
    }
}

/// A lazy, finite sequence of frames.
///
/// Sequences are not restartable: to replay an animation, ask its
/// generator for a fresh sequence.
pub type FrameSequence = Box<dyn Iterator<Item = Frame> + Send>;
