//! Core types shared by the asciimate crates.
//!
//! Every animation produces [`Frame`]s: a [`Grid`] snapshot paired with a
//! hold duration telling the caller how long to keep it on screen. The
//! core never sleeps; pacing is left to whoever consumes the sequence.

mod frame;
mod grid;
mod theme;

pub use frame::{Frame, FrameSequence};
pub use grid::Grid;
pub use theme::{AnimationSpeed, ColorTheme};
