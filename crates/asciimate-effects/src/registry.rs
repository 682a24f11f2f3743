//! Numbered list of every animation the front end can start.

use std::fmt;
use std::sync::Arc;

use asciimate_art::{ArtBlock, ArtLibrary};
use asciimate_core::FrameSequence;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::{
    BinaryStars, BouncingBall, DevilFromLava, DnaHelix, EffectError, Fire, MatrixRain, Orbit,
    RevealOptions, SpiralGalaxy, Wave, reveal_sequence,
};

/// Builds a fresh frame sequence from an RNG.
pub type Generator = Arc<dyn Fn(StdRng) -> Result<FrameSequence, EffectError> + Send + Sync>;

/// RNG for one run: seeded when `seed` is given, from OS entropy otherwise.
pub fn seed_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// A registered animation.
#[derive(Clone)]
pub struct Entry {
    /// Menu key, starting at 1.
    pub key: u32,
    /// Display name.
    pub name: String,
    generator: Generator,
}

impl Entry {
    /// Build a new frame sequence.
    pub fn start(&self, rng: StdRng) -> Result<FrameSequence, EffectError> {
        (self.generator)(rng)
    }

    /// Shared handle to the generator, for replaying in a loop.
    pub fn generator(&self) -> Generator {
        Arc::clone(&self.generator)
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("key", &self.key)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Animations keyed by consecutive numbers.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<Entry>,
}

fn orbit(_: StdRng) -> Result<FrameSequence, EffectError> {
    Ok(Box::new(Orbit::new()))
}

fn binary_stars(_: StdRng) -> Result<FrameSequence, EffectError> {
    Ok(Box::new(BinaryStars::new()))
}

fn devil_from_lava(rng: StdRng) -> Result<FrameSequence, EffectError> {
    Ok(Box::new(DevilFromLava::new(rng)))
}

fn matrix_rain(rng: StdRng) -> Result<FrameSequence, EffectError> {
    Ok(Box::new(MatrixRain::new(rng)))
}

fn bouncing_ball(_: StdRng) -> Result<FrameSequence, EffectError> {
    Ok(Box::new(BouncingBall::new()))
}

fn wave(rng: StdRng) -> Result<FrameSequence, EffectError> {
    Ok(Box::new(Wave::new(rng)))
}

fn dna_helix(_: StdRng) -> Result<FrameSequence, EffectError> {
    Ok(Box::new(DnaHelix::new()))
}

fn spiral_galaxy(rng: StdRng) -> Result<FrameSequence, EffectError> {
    Ok(Box::new(SpiralGalaxy::new(rng)))
}

fn fire(rng: StdRng) -> Result<FrameSequence, EffectError> {
    Ok(Box::new(Fire::new(rng)))
}

/// Math effects in menu order.
const MATH_EFFECTS: [(&str, fn(StdRng) -> Result<FrameSequence, EffectError>); 9] = [
    ("Orbital Motion", orbit),
    ("Binary Stars", binary_stars),
    ("Devil from Lava", devil_from_lava),
    ("Matrix Rain", matrix_rain),
    ("Bouncing Ball", bouncing_ball),
    ("Wave Pattern", wave),
    ("DNA Helix", dna_helix),
    ("Spiral Galaxy", spiral_galaxy),
    ("Fire Effect", fire),
];

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The math effects followed by a reveal animation for every art block.
    pub fn builtin(library: &ArtLibrary, options: &RevealOptions) -> Self {
        let mut registry = Self::new();
        for (name, generator) in MATH_EFFECTS {
            registry.register(name, Arc::new(generator));
        }
        for block in library.iter() {
            registry.register_art(block, options.clone());
        }
        debug!(entries = registry.len(), "registry built");
        registry
    }

    /// Add an animation under the next free key and return that key.
    pub fn register(&mut self, name: impl Into<String>, generator: Generator) -> u32 {
        let key = self.entries.last().map_or(1, |e| e.key + 1);
        self.entries.push(Entry {
            key,
            name: name.into(),
            generator,
        });
        key
    }

    /// Add a reveal animation for an art block.
    pub fn register_art(&mut self, block: &ArtBlock, options: RevealOptions) -> u32 {
        let lines = Arc::new(block.lines.clone());
        let generator: Generator =
            Arc::new(move |rng: StdRng| -> Result<FrameSequence, EffectError> {
                let sequence = reveal_sequence(lines.as_slice(), options.clone(), rng)?;
                Ok(Box::new(sequence))
            });
        self.register(format!("Animate {}", block.title()), generator)
    }

    pub fn get(&self, key: u32) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Look up user input such as `"3"` or the shortcut `"-3"`.
    pub fn resolve(&self, input: &str) -> Option<&Entry> {
        let digits = input.trim().trim_start_matches('-');
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.get(digits.parse().ok()?)
    }

    /// Start the animation with the given key.
    pub fn start(&self, key: u32, seed: Option<u64>) -> Result<FrameSequence, EffectError> {
        let entry = self.get(key).ok_or(EffectError::UnknownKey(key))?;
        debug!(key, name = %entry.name, ?seed, "starting animation");
        entry.start(seed_rng(seed))
    }

    /// Uniformly random entry, or `None` when the registry is empty.
    pub fn random_entry<R: Rng>(&self, rng: &mut R) -> Option<&Entry> {
        if self.entries.is_empty() {
            return None;
        }
        self.entries.get(rng.gen_range(0..self.entries.len()))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use asciimate_art::parse;

    use super::*;

    fn registry() -> Registry {
        let library = parse("Fox\n /\\_/\\\n( o.o )\n\nbig bar\n---");
        Registry::builtin(&library, &RevealOptions::default())
    }

    #[test]
    fn test_builtin_layout() {
        let registry = registry();
        assert_eq!(registry.len(), 11);
        let names: Vec<(u32, &str)> = registry
            .entries()
            .iter()
            .map(|e| (e.key, e.name.as_str()))
            .collect();
        assert_eq!(names[0], (1, "Orbital Motion"));
        assert_eq!(names[8], (9, "Fire Effect"));
        assert_eq!(names[9], (10, "Animate Fox"));
        assert_eq!(names[10], (11, "Animate Big Bar"));
    }

    #[test]
    fn test_resolve_negative_shortcut() {
        let registry = registry();
        assert_eq!(registry.resolve("-2").map(|e| e.key), Some(2));
        assert_eq!(registry.resolve(" 10 ").map(|e| e.key), Some(10));
        assert!(registry.resolve("0").is_none());
        assert!(registry.resolve("12").is_none());
        assert!(registry.resolve("fox").is_none());
        assert!(registry.resolve("+3").is_none());
        assert!(registry.resolve("-+3").is_none());
        assert!(registry.resolve("3 1").is_none());
    }

    #[test]
    fn test_start_art_reveal() {
        let registry = registry();
        let frames: Vec<_> = registry.start(10, Some(5)).unwrap().collect();
        let last_reveal = frames
            .iter()
            .find(|f| f.text() == " /\\_/\\\n( o.o )")
            .map(|f| f.hold);
        assert_eq!(last_reveal, Some(RevealOptions::default().pause_hold));
    }

    #[test]
    fn test_start_unknown_key() {
        let registry = registry();
        assert_eq!(
            registry.start(99, None).err(),
            Some(EffectError::UnknownKey(99))
        );
    }

    #[test]
    fn test_seeded_start_is_reproducible() {
        let registry = registry();
        for entry in registry.entries() {
            let a: Vec<_> = registry.start(entry.key, Some(17)).unwrap().collect();
            let b: Vec<_> = registry.start(entry.key, Some(17)).unwrap().collect();
            assert!(!a.is_empty(), "{} produced no frames", entry.name);
            assert_eq!(a, b, "{} is not reproducible", entry.name);
        }
    }

    #[test]
    fn test_random_entry() {
        let registry = registry();
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..20 {
            let entry = registry.random_entry(&mut rng).unwrap();
            assert!(registry.get(entry.key).is_some());
        }
        assert!(Registry::new().random_entry(&mut rng).is_none());
    }
}
