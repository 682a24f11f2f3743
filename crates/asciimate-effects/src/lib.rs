//! Animations for asciimate.
//!
//! Every animation is a lazy [`Iterator`] of [`Frame`]s with its randomness
//! injected through a [`rand::Rng`]. Seeding the RNG makes a sequence
//! reproducible. The [`Registry`] numbers the animations for the front end
//! and the [`Player`] paces a running sequence without blocking.
//!
//! [`Frame`]: asciimate_core::Frame

mod animations;
mod chars;
mod error;
mod player;
mod registry;

pub use animations::fire::{DevilFromLava, Fire};
pub use animations::matrix::MatrixRain;
pub use animations::motion::{BouncingBall, DnaHelix, Wave};
pub use animations::orbital::{BinaryStars, Orbit, SpiralGalaxy};
pub use animations::reveal::{RevealOptions, RevealSequence, reveal_sequence};
pub use chars::NOISE_CHARS;
pub use error::{EffectError, RevealError};
pub use player::Player;
pub use registry::{Entry, Generator, Registry, seed_rng};
