//! Fire animations: a flickering bonfire and a devil rising from lava.

use std::time::Duration;

use asciimate_core::{Frame, Grid};
use rand::Rng;

use super::pick;
use crate::chars::{EMBER_CHARS, FIRE_FLICKER_CHARS, FIRE_GRADIENT, LAVA_CHARS};

/// Flame columns of random height with flicker along the bottom half.
#[derive(Debug)]
pub struct Fire<R> {
    frame: usize,
    rng: R,
}

impl<R: Rng> Fire<R> {
    const WIDTH: usize = 40;
    const HEIGHT: usize = 20;
    const FRAMES: usize = 100;
    const HOLD: Duration = Duration::from_millis(100);

    pub fn new(rng: R) -> Self {
        Self { frame: 0, rng }
    }
}

impl<R: Rng> Iterator for Fire<R> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.frame >= Self::FRAMES {
            return None;
        }
        let (w, h) = (Self::WIDTH, Self::HEIGHT);
        let mut grid = Grid::blank(w, h);

        for x in 0..w {
            let intensity: f64 = self.rng.gen_range(0.5..=1.0);
            let flame = (h as f64 * intensity) as usize;
            for y in h - flame..h {
                let from_base = h - y;
                let level = (from_base * FIRE_GRADIENT.len() / flame).min(FIRE_GRADIENT.len() - 1);
                grid.set(y, x, FIRE_GRADIENT[level]);
            }
        }

        for _ in 0..w / 2 {
            let x = self.rng.gen_range(0..w);
            let y = self.rng.gen_range(h / 2..h);
            grid.set(y, x, pick(FIRE_FLICKER_CHARS, &mut self.rng));
        }

        self.frame += 1;
        Some(Frame::new(grid, Self::HOLD))
    }
}

const DEVIL: [&str; 10] = [
    "  ▄████▄  ",
    " ██▀  ▀██ ",
    " ██    ██ ",
    "  ▀█▄▄█▀  ",
    "   ▄██▄   ",
    "  ▄▀  ▀▄  ",
    " █  ▄▄  █ ",
    " █ ████ █ ",
    "  █    █  ",
    "  ▀▀▀▀▀▀  ",
];

/// Base heights of the lava surface, repeated across the width.
const LAVA_WAVE: [f64; 20] = [
    3.0, 5.0, 4.0, 6.0, 5.0, 7.0, 6.0, 5.0, 4.0, 5.0, 6.0, 5.0, 4.0, 3.0, 4.0, 5.0, 6.0, 7.0, 6.0,
    5.0,
];

/// A devil sprite climbing out of a churning lava lake.
#[derive(Debug)]
pub struct DevilFromLava<R> {
    sprite: Vec<Vec<char>>,
    frame: usize,
    rng: R,
}

impl<R: Rng> DevilFromLava<R> {
    const WIDTH: usize = 40;
    const HEIGHT: usize = 12;
    const FRAMES: usize = 30;
    const EMBERS: usize = 5;
    const HOLD: Duration = Duration::from_millis(150);

    pub fn new(rng: R) -> Self {
        Self {
            sprite: DEVIL.iter().map(|row| row.chars().collect()).collect(),
            frame: 0,
            rng,
        }
    }

    fn draw_lava(&mut self, grid: &mut Grid) {
        let (w, h) = (Self::WIDTH, Self::HEIGHT);
        let t = self.frame as f64;
        for x in 0..w {
            let swell = LAVA_WAVE[x % LAVA_WAVE.len()] + (t * 0.3 + x as f64 * 0.2).sin() * 1.5;
            let surface = ((10.0 - swell) as i64).clamp(0, h as i64 - 1) as usize;
            for y in surface..h {
                grid.set(y, x, pick(LAVA_CHARS, &mut self.rng));
            }
        }
    }

    fn draw_devil(&self, grid: &mut Grid) {
        let h = Self::HEIGHT as f64;
        let sprite_width = self.sprite.first().map_or(0, Vec::len);
        let left = (Self::WIDTH / 2 - sprite_width / 2) as i64;
        let top = h + 10.0 - self.frame as f64 * 1.5;
        if top >= h {
            return;
        }
        for (dr, row) in self.sprite.iter().enumerate() {
            let gr = top + dr as f64;
            if !(0.0..h).contains(&gr) {
                continue;
            }
            for (dc, &ch) in row.iter().enumerate() {
                if ch != ' ' {
                    grid.plot(left + dc as i64, gr as i64, ch);
                }
            }
        }
    }
}

impl<R: Rng> Iterator for DevilFromLava<R> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.frame >= Self::FRAMES {
            return None;
        }
        let mut grid = Grid::blank(Self::WIDTH, Self::HEIGHT);
        self.draw_lava(&mut grid);
        self.draw_devil(&mut grid);

        for _ in 0..Self::EMBERS {
            let x = self.rng.gen_range(0..Self::WIDTH);
            let y = self.rng.gen_range(0..=Self::HEIGHT / 2);
            grid.set(y, x, pick(EMBER_CHARS, &mut self.rng));
        }

        self.frame += 1;
        Some(Frame::new(grid, Self::HOLD))
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_fire_fills_lower_half() {
        let frames: Vec<Frame> = Fire::new(StdRng::seed_from_u64(8)).collect();
        assert_eq!(frames.len(), 100);
        for frame in &frames {
            let middle = frame.grid.rows().nth(10).unwrap();
            assert!(middle.iter().all(|c| *c != ' '));
            // flicker never reaches the upper half
            for row in frame.grid.rows().take(10) {
                assert!(row.iter().all(|c| FIRE_GRADIENT.contains(c)));
            }
        }
    }

    #[test]
    fn test_devil_rises() {
        let frames: Vec<Frame> = DevilFromLava::new(StdRng::seed_from_u64(3)).collect();
        assert_eq!(frames.len(), 30);
        let has_horns = |frame: &Frame| frame.grid.rows().any(|row| {
            let text: String = row.iter().collect();
            text.contains("▄████▄")
        });
        assert!(!has_horns(&frames[0]));
        // top of the sprite sits on row 7 at frame 10
        assert!(has_horns(&frames[10]));
        for frame in &frames {
            assert_eq!(frame.grid.width(), 40);
            assert_eq!(frame.grid.height(), 12);
        }
    }
}
