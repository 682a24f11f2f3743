//! Simple motion animations: bouncing ball, waves and a DNA helix.

use std::f64::consts::PI;
use std::time::Duration;

use asciimate_core::{Frame, Grid};
use rand::Rng;

use super::pick;
use crate::chars::WAVE_CHARS;

/// A ball `●` bouncing inside a box-drawn frame.
#[derive(Debug)]
pub struct BouncingBall {
    frame: usize,
    x: i64,
    y: i64,
    dx: i64,
    dy: i64,
}

impl Default for BouncingBall {
    fn default() -> Self {
        Self::new()
    }
}

impl BouncingBall {
    const WIDTH: usize = 30;
    const HEIGHT: usize = 12;
    const FRAMES: usize = 80;
    const HOLD: Duration = Duration::from_millis(80);

    pub fn new() -> Self {
        Self {
            frame: 0,
            x: (Self::WIDTH / 2) as i64,
            y: (Self::HEIGHT / 2) as i64,
            dx: 1,
            dy: 1,
        }
    }

    fn draw_border(grid: &mut Grid) {
        let (w, h) = (Self::WIDTH, Self::HEIGHT);
        for x in 0..w {
            grid.set(0, x, '─');
            grid.set(h - 1, x, '─');
        }
        for y in 0..h {
            grid.set(y, 0, '│');
            grid.set(y, w - 1, '│');
        }
        grid.set(0, 0, '┌');
        grid.set(0, w - 1, '┐');
        grid.set(h - 1, 0, '└');
        grid.set(h - 1, w - 1, '┘');
    }
}

impl Iterator for BouncingBall {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.frame >= Self::FRAMES {
            return None;
        }
        let (w, h) = (Self::WIDTH as i64, Self::HEIGHT as i64);
        let mut grid = Grid::blank(Self::WIDTH, Self::HEIGHT);
        Self::draw_border(&mut grid);

        self.x += self.dx;
        self.y += self.dy;
        if self.x <= 1 || self.x >= w - 2 {
            self.dx = -self.dx;
        }
        if self.y <= 1 || self.y >= h - 2 {
            self.dy = -self.dy;
        }
        grid.plot(self.x, self.y, '●');

        self.frame += 1;
        Some(Frame::new(grid, Self::HOLD))
    }
}

/// Three superposed sine waves.
#[derive(Debug)]
pub struct Wave<R> {
    frame: usize,
    rng: R,
}

impl<R: Rng> Wave<R> {
    const WIDTH: usize = 60;
    const HEIGHT: usize = 15;
    const FRAMES: usize = 80;
    const HOLD: Duration = Duration::from_millis(80);

    pub fn new(rng: R) -> Self {
        Self { frame: 0, rng }
    }
}

impl<R: Rng> Iterator for Wave<R> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.frame >= Self::FRAMES {
            return None;
        }
        let mid = (Self::HEIGHT / 2) as f64;
        let t = self.frame as f64;
        let mut grid = Grid::blank(Self::WIDTH, Self::HEIGHT);

        for x in 0..Self::WIDTH {
            let xf = x as f64;
            let crests = [
                mid + (t * 0.1 + xf * 0.1).sin() * 3.0,
                mid + (t * 0.15 + xf * 0.05).sin() * 2.0,
                mid + (t * 0.2 + xf * 0.15).sin() * 1.5,
            ];
            for y in crests {
                let glyph = pick(WAVE_CHARS, &mut self.rng);
                grid.plot(x as i64, y as i64, glyph);
            }
        }

        self.frame += 1;
        Some(Frame::new(grid, Self::HOLD))
    }
}

/// A rotating double helix with rungs every third row.
#[derive(Debug, Default)]
pub struct DnaHelix {
    frame: usize,
}

impl DnaHelix {
    const WIDTH: usize = 30;
    const HEIGHT: usize = 15;
    const FRAMES: usize = 60;
    const RADIUS: f64 = 8.0;
    const HOLD: Duration = Duration::from_millis(120);

    pub fn new() -> Self {
        Self::default()
    }
}

impl Iterator for DnaHelix {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.frame >= Self::FRAMES {
            return None;
        }
        let w = Self::WIDTH as i64;
        let cx = (Self::WIDTH / 2) as f64;
        let mut grid = Grid::blank(Self::WIDTH, Self::HEIGHT);

        for y in 0..Self::HEIGHT {
            let a1 = self.frame as f64 * 0.2 + y as f64 * 0.5;
            let a2 = a1 + PI;
            let x1 = (cx + Self::RADIUS * a1.cos()) as i64;
            let x2 = (cx + Self::RADIUS * a2.cos()) as i64;
            grid.plot(x1, y as i64, 'O');
            grid.plot(x2, y as i64, 'O');

            let on_screen = |x: i64| (0..w).contains(&x);
            if y % 3 == 0 && on_screen(x1) && on_screen(x2) {
                for x in x1.min(x2) + 1..x1.max(x2) {
                    grid.plot(x, y as i64, '─');
                }
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

    #[test]
    fn test_ball_stays_inside_border() {
        let frames: Vec<Frame> = BouncingBall::new().collect();
        assert_eq!(frames.len(), 80);
        for frame in &frames {
            assert_eq!(frame.grid.get(0, 0), Some('┌'));
            assert_eq!(frame.grid.get(11, 29), Some('┘'));
            let ball = frame
                .grid
                .rows()
                .enumerate()
                .find_map(|(y, row)| row.iter().position(|&c| c == '●').map(|x| (x, y)));
            let (x, y) = ball.expect("ball drawn");
            assert!((1..29).contains(&x) && (1..11).contains(&y));
        }
    }

    #[test]
    fn test_wave_uses_wave_glyphs() {
        let frames: Vec<Frame> = Wave::new(StdRng::seed_from_u64(2)).collect();
        assert_eq!(frames.len(), 80);
        for row in frames[0].grid.rows() {
            assert!(row.iter().all(|c| *c == ' ' || WAVE_CHARS.contains(c)));
        }
    }

    #[test]
    fn test_dna_rungs_on_first_row() {
        let first = DnaHelix::new().next().unwrap();
        // angle 0: strands at columns 23 and 7
        assert_eq!(first.grid.get(0, 23), Some('O'));
        assert_eq!(first.grid.get(0, 7), Some('O'));
        assert!((8..23).all(|x| first.grid.get(0, x) == Some('─')));
        assert_eq!(DnaHelix::new().count(), 60);
    }
}
