//! Orbital animations: a planet around its star, a binary pair and a
//! spiral galaxy.

use std::f64::consts::PI;
use std::time::Duration;

use asciimate_core::{Frame, Grid};
use rand::Rng;

use super::pick;
use crate::chars::{DUST_CHARS, GALAXY_CHARS};

/// A planet `◉` circling a star `★` on an ellipse.
#[derive(Debug, Default)]
pub struct Orbit {
    frame: usize,
}

impl Orbit {
    const WIDTH: usize = 20;
    const HEIGHT: usize = 10;
    const FRAMES: usize = 40;
    const HOLD: Duration = Duration::from_millis(150);

    pub fn new() -> Self {
        Self::default()
    }
}

impl Iterator for Orbit {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.frame >= Self::FRAMES {
            return None;
        }
        let (w, h) = (Self::WIDTH, Self::HEIGHT);
        let mut grid = Grid::blank(w, h);

        let angle = self.frame as f64 * 0.3;
        let x = ((w / 2) as f64 + 7.0 * angle.cos()) as i64;
        let y = ((h / 2) as f64 + 4.0 * angle.sin()) as i64;
        grid.plot(x, y, '◉');
        grid.set(h / 2, w / 2, '★');

        self.frame += 1;
        Some(Frame::new(grid, Self::HOLD))
    }
}

/// Two stars `⊛` and `⊗` orbiting a shared center `●`.
#[derive(Debug, Default)]
pub struct BinaryStars {
    frame: usize,
}

impl BinaryStars {
    const WIDTH: usize = 25;
    const HEIGHT: usize = 12;
    const FRAMES: usize = 40;
    const RADIUS: f64 = 6.0;
    const HOLD: Duration = Duration::from_millis(120);

    pub fn new() -> Self {
        Self::default()
    }
}

impl Iterator for BinaryStars {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.frame >= Self::FRAMES {
            return None;
        }
        let (w, h) = (Self::WIDTH, Self::HEIGHT);
        let (cx, cy) = ((w / 2) as f64, (h / 2) as f64);
        let mut grid = Grid::blank(w, h);

        let angle = self.frame as f64 * 0.2;
        for (offset, star) in [(0.0, '⊛'), (PI, '⊗')] {
            let x = (cx + Self::RADIUS * (angle + offset).cos()) as i64;
            let y = (cy + Self::RADIUS * (angle + offset).sin()) as i64;
            grid.plot(x, y, star);
        }
        grid.set(h / 2, w / 2, '●');

        self.frame += 1;
        Some(Frame::new(grid, Self::HOLD))
    }
}

/// A four-armed rotating galaxy with twinkling dust.
#[derive(Debug)]
pub struct SpiralGalaxy<R> {
    frame: usize,
    rng: R,
}

impl<R: Rng> SpiralGalaxy<R> {
    const WIDTH: usize = 50;
    const HEIGHT: usize = 20;
    const FRAMES: usize = 100;
    const ARMS: usize = 4;
    const DUST: usize = 20;
    const HOLD: Duration = Duration::from_millis(100);

    pub fn new(rng: R) -> Self {
        Self { frame: 0, rng }
    }
}

impl<R: Rng> Iterator for SpiralGalaxy<R> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.frame >= Self::FRAMES {
            return None;
        }
        let (w, h) = (Self::WIDTH, Self::HEIGHT);
        let (cx, cy) = (w / 2, h / 2);
        let mut grid = Grid::blank(w, h);

        for arm in 0..Self::ARMS {
            let offset = arm as f64 * PI / 2.0;
            for r in 1..(w / 2).min(h) {
                let r = r as f64;
                let angle = offset + self.frame as f64 * 0.1 + r * 0.3;
                let x = (cx as f64 + r * angle.cos()) as i64;
                let y = (cy as f64 + r * angle.sin() * 0.5) as i64;
                // One draw per arm point, on-grid or not
                let glyph = pick(GALAXY_CHARS, &mut self.rng);
                grid.plot(x, y, glyph);
            }
        }
        grid.set(cy, cx, '◯');

        for _ in 0..Self::DUST {
            let x = self.rng.gen_range(0..w);
            let y = self.rng.gen_range(0..h);
            if grid.get(y, x) == Some(' ') {
                grid.set(y, x, pick(DUST_CHARS, &mut self.rng));
            }
        }

        self.frame += 1;
        Some(Frame::new(grid, Self::HOLD))
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn count_char(frame: &Frame, ch: char) -> usize {
        frame
            .grid
            .rows()
            .map(|row| row.iter().filter(|&&c| c == ch).count())
            .sum()
    }

    #[test]
    fn test_orbit_frames() {
        let frames: Vec<Frame> = Orbit::new().collect();
        assert_eq!(frames.len(), 40);
        for frame in &frames {
            assert_eq!(frame.grid.width(), 20);
            assert_eq!(frame.grid.height(), 10);
            assert_eq!(frame.grid.get(5, 10), Some('★'));
            assert_eq!(frame.hold, Duration::from_millis(150));
        }
        // angle 0: planet at (17, 5)
        assert_eq!(frames[0].grid.get(5, 17), Some('◉'));
    }

    #[test]
    fn test_binary_stars_opposite() {
        let first = BinaryStars::new().next().unwrap();
        assert_eq!(first.grid.get(6, 18), Some('⊛'));
        assert_eq!(first.grid.get(6, 6), Some('⊗'));
        assert_eq!(first.grid.get(6, 12), Some('●'));
        assert_eq!(BinaryStars::new().count(), 40);
    }

    #[test]
    fn test_spiral_galaxy_core() {
        let frames: Vec<Frame> = SpiralGalaxy::new(StdRng::seed_from_u64(9)).collect();
        assert_eq!(frames.len(), 100);
        for frame in &frames {
            assert_eq!(frame.grid.get(10, 25), Some('◯'));
            assert_eq!(count_char(frame, '◯'), 1);
        }
    }
}
