pub mod fire;
pub mod matrix;
pub mod motion;
pub mod orbital;
pub mod reveal;

use rand::Rng;

/// Uniform pick from a non-empty glyph set.
fn pick<R: Rng>(chars: &[char], rng: &mut R) -> char {
    chars[rng.gen_range(0..chars.len())]
}
