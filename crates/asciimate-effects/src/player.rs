//! Non-blocking playback of a frame sequence.

use std::time::{Duration, Instant};

use asciimate_core::{AnimationSpeed, Frame, FrameSequence};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, warn};

use crate::Generator;

/// Regenerates the sequence when a looping run reaches its end.
struct Repeat {
    generator: Generator,
    rng: StdRng,
}

/// Playback state for one run of one animation.
///
/// The caller drives it from its own loop with [`Player::tick`]; dropping
/// the player stops the animation.
pub struct Player {
    name: String,
    frames: FrameSequence,
    current: Option<Frame>,
    next_at: Instant,
    speed: AnimationSpeed,
    repeat: Option<Repeat>,
    finished: bool,
    frames_shown: usize,
}

impl Player {
    /// Start playing `frames`, showing the first frame immediately.
    pub fn new(
        name: impl Into<String>,
        frames: FrameSequence,
        speed: AnimationSpeed,
        now: Instant,
    ) -> Self {
        let mut player = Self {
            name: name.into(),
            frames,
            current: None,
            next_at: now,
            speed,
            repeat: None,
            finished: false,
            frames_shown: 0,
        };
        player.advance(now);
        player
    }

    /// Restart from `generator` whenever the sequence runs out.
    ///
    /// Each restart draws a fresh seed from `rng`.
    pub fn looping(mut self, generator: Generator, rng: StdRng) -> Self {
        self.repeat = Some(Repeat { generator, rng });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Frame currently on screen.
    pub fn current(&self) -> Option<&Frame> {
        self.current.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_looping(&self) -> bool {
        self.repeat.is_some()
    }

    /// Frames shown so far, across restarts.
    pub fn frames_shown(&self) -> usize {
        self.frames_shown
    }

    pub fn speed(&self) -> AnimationSpeed {
        self.speed
    }

    /// Change speed; applies from the next frame.
    pub fn set_speed(&mut self, speed: AnimationSpeed) {
        self.speed = speed;
    }

    /// Time left before the next frame is due.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        if self.finished {
            None
        } else {
            Some(self.next_at.saturating_duration_since(now))
        }
    }

    /// Advance when the current frame's hold has elapsed. Returns `true`
    /// when the visible frame changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.finished || now < self.next_at {
            return false;
        }
        self.advance(now)
    }

    fn advance(&mut self, now: Instant) -> bool {
        let next = match self.frames.next() {
            Some(frame) => Some(frame),
            None => self.restart(),
        };

        match next {
            Some(frame) => {
                self.next_at = now + self.speed.scale(frame.hold);
                self.current = Some(frame);
                self.frames_shown += 1;
                true
            }
            None => {
                debug!(name = %self.name, frames = self.frames_shown, "animation finished");
                self.finished = true;
                false
            }
        }
    }

    fn restart(&mut self) -> Option<Frame> {
        let repeat = self.repeat.as_mut()?;
        let rng = StdRng::seed_from_u64(repeat.rng.r#gen());
        match (repeat.generator)(rng) {
            Ok(mut frames) => {
                let first = frames.next();
                self.frames = frames;
                debug!(name = %self.name, "animation restarted");
                first
            }
            Err(err) => {
                warn!(name = %self.name, %err, "failed to restart animation");
                None
            }
        }
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("speed", &self.speed)
            .field("finished", &self.finished)
            .field("frames_shown", &self.frames_shown)
            .finish_non_exhaustive()
    }
}
