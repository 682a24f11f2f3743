//! Matrix rain animation (stateful).

use std::time::Duration;

use asciimate_core::{Frame, Grid};
use rand::Rng;

use super::pick;
use crate::chars::MATRIX_CHARS;

const WIDTH: usize = 50;
const HEIGHT: usize = 15;
const FRAMES: usize = 80;
const HOLD: Duration = Duration::from_millis(80);

/// State for a single matrix rain column.
#[derive(Debug, Clone)]
struct MatrixColumn {
    /// Row of the top of the trail (negative while above the screen).
    y: i64,
    /// Rows fallen per frame (1-3).
    speed: i64,
    /// Characters of the trail, top to bottom.
    trail: Vec<char>,
}

impl MatrixColumn {
    /// Spawn a column starting somewhere in `top..=bottom`.
    fn spawn<R: Rng>(rng: &mut R, top: i64, bottom: i64) -> Self {
        let speed = rng.gen_range(1..=3);
        let y = rng.gen_range(top..=bottom);
        let len = rng.gen_range(5..=15);
        let trail = (0..len).map(|_| pick(MATRIX_CHARS, rng)).collect();
        Self { y, speed, trail }
    }
}

/// Falling katakana and digit trails.
#[derive(Debug)]
pub struct MatrixRain<R> {
    columns: Vec<MatrixColumn>,
    frame: usize,
    rng: R,
}

impl<R: Rng> MatrixRain<R> {
    pub fn new(mut rng: R) -> Self {
        let columns = init_columns(WIDTH, HEIGHT, &mut rng);
        Self {
            columns,
            frame: 0,
            rng,
        }
    }
}

/// Initialize matrix columns, staggered above and on the screen.
fn init_columns<R: Rng>(width: usize, height: usize, rng: &mut R) -> Vec<MatrixColumn> {
    (0..width)
        .map(|_| MatrixColumn::spawn(rng, -(height as i64), 0))
        .collect()
}

/// Move every column down; columns that left the screen respawn above it.
fn update<R: Rng>(columns: &mut [MatrixColumn], height: usize, rng: &mut R) {
    let height = height as i64;
    for col in columns {
        col.y += col.speed;
        if col.y > height + col.trail.len() as i64 {
            *col = MatrixColumn::spawn(rng, -height, -5);
        }
    }
}

impl<R: Rng> Iterator for MatrixRain<R> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.frame >= FRAMES {
            return None;
        }
        let mut grid = Grid::blank(WIDTH, HEIGHT);
        for (x, col) in self.columns.iter().enumerate() {
            for (i, &ch) in col.trail.iter().enumerate() {
                grid.plot(x as i64, col.y + i as i64, ch);
            }
        }
        update(&mut self.columns, HEIGHT, &mut self.rng);

        self.frame += 1;
        Some(Frame::new(grid, HOLD))
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_matrix_rain_frames() {
        let frames: Vec<Frame> = MatrixRain::new(StdRng::seed_from_u64(4)).collect();
        assert_eq!(frames.len(), FRAMES);
        for frame in &frames {
            assert_eq!(frame.grid.width(), WIDTH);
            assert_eq!(frame.grid.height(), HEIGHT);
            for row in frame.grid.rows() {
                assert!(row.iter().all(|c| *c == ' ' || MATRIX_CHARS.contains(c)));
            }
        }
    }

    #[test]
    fn test_columns_respawn_above_screen() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut columns = init_columns(3, 10, &mut rng);
        for col in &mut columns {
            col.y = 100;
        }
        update(&mut columns, 10, &mut rng);
        for col in &columns {
            assert!((-10..=-5).contains(&col.y));
            assert!((5..=15).contains(&col.trail.len()));
            assert!((1..=3).contains(&col.speed));
        }
    }
}
