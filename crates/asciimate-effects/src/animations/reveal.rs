//! Reveal and dissolve of a piece of ASCII art.
//!
//! The art starts as random noise, is revealed a few cells per frame in a
//! random order, and optionally dissolves back into noise. Only cells that
//! exist in the art are touched: a short row never grows past its length.

use std::time::Duration;

use asciimate_core::{Frame, Grid};
use rand::{Rng, seq::SliceRandom};

use super::pick;
use crate::RevealError;
use crate::chars::NOISE_CHARS;

/// Settings for [`reveal_sequence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealOptions {
    /// Glyphs used for scrambled cells.
    pub noise_charset: Vec<char>,
    /// Cells revealed per frame.
    pub reveal_chunk_size: usize,
    /// Cells scrambled per frame while dissolving.
    pub dissolve_chunk_size: usize,
    /// Hold for each reveal frame.
    pub reveal_delay: Duration,
    /// Hold for each dissolve frame.
    pub dissolve_delay: Duration,
    /// Hold for the initial noise frame.
    pub intro_hold: Duration,
    /// Hold for the fully revealed frame when a dissolve follows.
    pub pause_hold: Duration,
    /// Scramble the art again after revealing it.
    pub include_dissolve: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            noise_charset: NOISE_CHARS.to_vec(),
            reveal_chunk_size: 5,
            dissolve_chunk_size: 5,
            reveal_delay: Duration::from_millis(50),
            dissolve_delay: Duration::from_millis(40),
            intro_hold: Duration::from_secs(1),
            pause_hold: Duration::from_secs(2),
            include_dissolve: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Intro,
    Reveal,
    Dissolve,
    Done,
}

/// Lazy reveal/dissolve frame sequence. Built by [`reveal_sequence`].
#[derive(Debug)]
pub struct RevealSequence<R> {
    art: Grid,
    grid: Grid,
    positions: Vec<(usize, usize)>,
    cursor: usize,
    phase: Phase,
    options: RevealOptions,
    rng: R,
}

/// Start a reveal of `art_lines`.
///
/// The first frame is pure noise, every following reveal frame uncovers
/// `reveal_chunk_size` more cells, and the last reveal frame shows the art
/// exactly. Spaces count as cells, so the reveal takes
/// `ceil(cells / reveal_chunk_size) + 1` frames.
pub fn reveal_sequence<S, R>(
    art_lines: &[S],
    options: RevealOptions,
    mut rng: R,
) -> Result<RevealSequence<R>, RevealError>
where
    S: AsRef<str>,
    R: Rng,
{
    if options.noise_charset.is_empty() {
        return Err(RevealError::EmptyCharset);
    }
    if options.reveal_chunk_size == 0 || options.dissolve_chunk_size == 0 {
        return Err(RevealError::ZeroChunkSize);
    }

    let art = Grid::from_lines(art_lines);
    if art.width() == 0 {
        return Err(RevealError::EmptyInput);
    }

    let lengths: Vec<usize> = (0..art.height()).map(|row| art.row_len(row)).collect();
    let grid = Grid::with_shape(&lengths, |_, _| pick(&options.noise_charset, &mut rng));

    let mut positions: Vec<(usize, usize)> = lengths
        .iter()
        .enumerate()
        .flat_map(|(row, &len)| (0..len).map(move |col| (row, col)))
        .collect();
    positions.shuffle(&mut rng);

    Ok(RevealSequence {
        art,
        grid,
        positions,
        cursor: 0,
        phase: Phase::Intro,
        options,
        rng,
    })
}

impl<R: Rng> RevealSequence<R> {
    /// Number of cells in the art, spaces included.
    pub fn cell_count(&self) -> usize {
        self.positions.len()
    }

    /// Frames in the reveal phase, including the initial noise frame.
    pub fn reveal_frame_count(&self) -> usize {
        self.cell_count().div_ceil(self.options.reveal_chunk_size) + 1
    }

    fn snapshot(&self, hold: Duration) -> Frame {
        Frame::new(self.grid.clone(), hold)
    }

    fn next_chunk(&mut self, size: usize) -> std::ops::Range<usize> {
        let start = self.cursor;
        let end = (start + size).min(self.positions.len());
        self.cursor = end;
        start..end
    }
}

impl<R: Rng> Iterator for RevealSequence<R> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        loop {
            match self.phase {
                Phase::Intro => {
                    self.phase = Phase::Reveal;
                    return Some(self.snapshot(self.options.intro_hold));
                }
                Phase::Reveal if self.cursor < self.positions.len() => {
                    let chunk = self.next_chunk(self.options.reveal_chunk_size);
                    for &(row, col) in &self.positions[chunk] {
                        if let Some(ch) = self.art.get(row, col) {
                            self.grid.set(row, col, ch);
                        }
                    }
                    let last = self.cursor == self.positions.len();
                    let hold = if last && self.options.include_dissolve {
                        self.options.pause_hold
                    } else {
                        self.options.reveal_delay
                    };
                    return Some(self.snapshot(hold));
                }
                Phase::Reveal => {
                    if self.options.include_dissolve {
                        self.positions.shuffle(&mut self.rng);
                        self.cursor = 0;
                        self.phase = Phase::Dissolve;
                    } else {
                        self.phase = Phase::Done;
                    }
                }
                Phase::Dissolve if self.cursor < self.positions.len() => {
                    let chunk = self.next_chunk(self.options.dissolve_chunk_size);
                    for &(row, col) in &self.positions[chunk] {
                        let glyph = pick(&self.options.noise_charset, &mut self.rng);
                        self.grid.set(row, col, glyph);
                    }
                    return Some(self.snapshot(self.options.dissolve_delay));
                }
                Phase::Dissolve => self.phase = Phase::Done,
                Phase::Done => return None,
            }
        }
    }
}
