//! Character grid owned by a single animation run.

use std::fmt;

/// A 2D grid of characters, stored row-major.
///
/// Rows may have different lengths. Cells past the end of a row do not
/// exist: they are never drawn and never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Create a rectangular grid with every cell set to `fill`.
    pub fn filled(width: usize, height: usize, fill: char) -> Self {
        Self {
            rows: vec![vec![fill; width]; height],
        }
    }

    /// Create a blank (space-filled) rectangular grid.
    pub fn blank(width: usize, height: usize) -> Self {
        Self::filled(width, height, ' ')
    }

    /// Create a ragged grid with the given row lengths, drawing every cell
    /// from `cell(row, col)`.
    pub fn with_shape<F>(row_lengths: &[usize], mut cell: F) -> Self
    where
        F: FnMut(usize, usize) -> char,
    {
        let rows = row_lengths
            .iter()
            .enumerate()
            .map(|(row, &len)| (0..len).map(|col| cell(row, col)).collect())
            .collect();
        Self { rows }
    }

    /// Build a grid from text lines, one row per line.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        Self {
            rows: lines.iter().map(|l| l.as_ref().chars().collect()).collect(),
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Length of a single row, or 0 when the row does not exist.
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// Character at `(row, col)`, if that cell exists.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Overwrite an existing cell. Returns `false` (and does nothing) when
    /// the cell is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, ch: char) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = ch;
                true
            }
            None => false,
        }
    }

    /// Plot at signed screen coordinates, ignoring anything off-grid.
    pub fn plot(&mut self, x: i64, y: i64, ch: char) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.set(y as usize, x as usize, ch)
    }

    /// Iterate over rows as character slices.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Rows rendered as owned strings.
    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.iter().collect()).collect()
    }

    /// Serialize row-major with `\n` separators.
    pub fn render(&self) -> String {
        self.lines().join("\n")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_grid_dimensions() {
        let grid = Grid::blank(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.render(), "    \n    \n    ");
    }

    #[test]
    fn test_ragged_rows_render_without_padding() {
        let grid = Grid::from_lines(&["AB", " C", ""]);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.row_len(2), 0);
        assert_eq!(grid.render(), "AB\n C\n");
    }

    #[test]
    fn test_set_outside_row_is_ignored() {
        let mut grid = Grid::from_lines(&["ABC", "D"]);
        assert!(!grid.set(1, 2, 'x'));
        assert!(!grid.set(5, 0, 'x'));
        assert!(grid.set(1, 0, 'x'));
        assert_eq!(grid.render(), "ABC\nx");
    }

    #[test]
    fn test_plot_negative_coordinates() {
        let mut grid = Grid::blank(3, 3);
        assert!(!grid.plot(-1, 0, '*'));
        assert!(!grid.plot(0, -4, '*'));
        assert!(grid.plot(2, 2, '*'));
        assert_eq!(grid.get(2, 2), Some('*'));
    }

    #[test]
    fn test_with_shape_counts_chars() {
        let grid = Grid::with_shape(&[2, 0, 1], |row, col| {
            char::from(b'a' + (row * 2 + col) as u8)
        });
        assert_eq!(grid.lines(), vec!["ab".to_string(), String::new(), "e".to_string()]);
    }

    #[test]
    fn test_width_counts_unicode_scalars() {
        let grid = Grid::from_lines(&["░▒▓", "█"]);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.get(0, 2), Some('▓'));
    }
}
