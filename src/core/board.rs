//! Board state and the neighbor-toggle transition.
//!
//! ## Board
//!
//! An R×C grid of boolean cells (`true` = lit), stored row-major. The puzzle
//! is solved when every cell is off.
//!
//! ```text
//!    .  .  .
//!    O  O  .     (. is off, O is on)
//!    .  .  .
//! ```
//!
//! ## Toggle transition
//!
//! Toggling a cell also toggles its up-to-four orthogonal neighbors. Each of
//! the five candidate positions is bounds-checked independently; positions
//! off the board are skipped silently. There is no wraparound and no
//! diagonal adjacency. Toggles are their own inverse, so every
//! toggle-reachable configuration stays solvable.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::{BoardError, InitMode};
use super::rng::BoardRng;

/// The cells flipped by a single toggle, in candidate order (at most five:
/// the target, then up/down/left/right neighbors that were in range).
pub type FlippedCells = SmallVec<[(usize, usize); 5]>;

/// Relative offsets of a toggled cell and its orthogonal neighbors.
const TOGGLE_OFFSETS: [(isize, isize); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// A Lights Out board.
///
/// Dimensions are fixed for the lifetime of the instance; the only mutation
/// is [`Board::toggle_at`]. Win state is never stored - it is derived on
/// demand by [`Board::is_solved`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major cell storage: `cells[row * cols + col]`, true = lit.
    cells: Vec<bool>,
}

impl Board {
    /// Create an all-off board.
    ///
    /// ## Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    #[must_use]
    pub fn dark(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1, "Board must have at least 1 row");
        assert!(cols >= 1, "Board must have at least 1 column");

        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Create a board from a fixed seed grid.
    ///
    /// The seed is deep-copied: mutating it afterwards does not affect the
    /// board. Fails with [`BoardError::DimensionMismatch`] if the seed's row
    /// count or any row's length disagrees with `rows`/`cols`.
    ///
    /// ## Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    pub fn from_seed(rows: usize, cols: usize, seed: &[Vec<bool>]) -> Result<Self, BoardError> {
        let mut board = Self::dark(rows, cols);

        if seed.len() != rows {
            return Err(BoardError::DimensionMismatch {
                expected_rows: rows,
                expected_cols: cols,
                actual_rows: seed.len(),
                actual_cols: seed.first().map_or(0, Vec::len),
            });
        }
        for (r, seed_row) in seed.iter().enumerate() {
            if seed_row.len() != cols {
                return Err(BoardError::DimensionMismatch {
                    expected_rows: rows,
                    expected_cols: cols,
                    actual_rows: seed.len(),
                    actual_cols: seed_row.len(),
                });
            }
            board.cells[r * cols..(r + 1) * cols].copy_from_slice(seed_row);
        }

        Ok(board)
    }

    /// Create a board with each cell lit independently with probability
    /// `probability` (clamped to [0, 1]).
    ///
    /// Probability 0 deals an all-off board, 1 an all-on board; no two
    /// cells' outcomes are correlated.
    ///
    /// ## Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    #[must_use]
    pub fn random(rows: usize, cols: usize, probability: f64, rng: &mut BoardRng) -> Self {
        let mut board = Self::dark(rows, cols);
        for cell in &mut board.cells {
            *cell = rng.gen_bool(probability);
        }
        board
    }

    /// Create a board per the given construction mode.
    ///
    /// `Deterministic` delegates to [`Board::from_seed`], `Random` to
    /// [`Board::random`]. Only the deterministic path can fail.
    pub fn initialize(
        rows: usize,
        cols: usize,
        mode: &InitMode,
        rng: &mut BoardRng,
    ) -> Result<Self, BoardError> {
        match mode {
            InitMode::Deterministic(seed) => Self::from_seed(rows, cols, seed),
            InitMode::Random(probability) => Ok(Self::random(rows, cols, *probability, rng)),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cell at `(row, col)`, or `None` if the position is off the board.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    /// Row-major storage index for a signed coordinate pair, or `None` if
    /// the position is off the board.
    fn index(&self, row: isize, col: isize) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Flip the cell at `(row, col)` and its orthogonal neighbors.
    ///
    /// Every one of the five candidate positions is independently
    /// bounds-checked; out-of-range candidates are skipped without error.
    /// A corner flips 3 cells, an edge cell 4, an interior cell 5, and a
    /// target entirely off the board flips whichever candidates happen to
    /// land in range (normally none).
    ///
    /// Returns the positions that were actually flipped, so an embedder can
    /// redraw only those cells.
    pub fn toggle_at(&mut self, row: isize, col: isize) -> FlippedCells {
        let mut flipped = FlippedCells::new();
        for (dr, dc) in TOGGLE_OFFSETS {
            // Saturating keeps far-out coordinates far out instead of
            // wrapping them back onto the board.
            let (r, c) = (row.saturating_add(dr), col.saturating_add(dc));
            if let Some(idx) = self.index(r, c) {
                self.cells[idx] = !self.cells[idx];
                flipped.push((r as usize, c as usize));
            }
        }
        flipped
    }

    /// Whether the puzzle is solved: true iff every cell is off.
    ///
    /// Derived on demand; never cached alongside the grid.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Number of lit cells.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Iterate over the board's rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.cols)
    }

    /// An owned row-by-row snapshot of the grid, for the presentation layer.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.row_slices().map(<[bool]>::to_vec).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_slices() {
            for (i, &cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if cell { "O" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_board_is_solved() {
        let board = Board::dark(4, 6);

        assert_eq!(board.rows(), 4);
        assert_eq!(board.cols(), 6);
        assert!(board.is_solved());
        assert_eq!(board.lit_count(), 0);
    }

    #[test]
    #[should_panic(expected = "at least 1 row")]
    fn test_zero_rows_rejected() {
        let _ = Board::dark(0, 3);
    }

    #[test]
    #[should_panic(expected = "at least 1 column")]
    fn test_zero_cols_rejected() {
        let _ = Board::dark(3, 0);
    }

    #[test]
    fn test_get_bounds() {
        let board = Board::dark(2, 3);

        assert_eq!(board.get(0, 0), Some(false));
        assert_eq!(board.get(1, 2), Some(false));
        assert_eq!(board.get(2, 0), None);
        assert_eq!(board.get(0, 3), None);
    }

    #[test]
    fn test_toggle_interior_flips_five() {
        let mut board = Board::dark(3, 3);

        let flipped = board.toggle_at(1, 1);

        assert_eq!(flipped.len(), 5);
        assert_eq!(board.lit_count(), 5);
        assert_eq!(board.get(1, 1), Some(true));
        assert_eq!(board.get(0, 0), Some(false));
    }

    #[test]
    fn test_toggle_far_coordinates_never_wrap() {
        let mut board = Board::dark(3, 3);

        assert!(board.toggle_at(isize::MAX, isize::MAX).is_empty());
        assert!(board.toggle_at(isize::MIN, 0).is_empty());
        assert!(board.is_solved());
    }

    #[test]
    fn test_toggle_just_off_board_still_checks_candidates() {
        let mut board = Board::dark(3, 3);

        // Target (-1, 0) is off the board, but its "down" neighbor (0, 0)
        // is in range and must still flip.
        let flipped = board.toggle_at(-1, 0);

        assert_eq!(flipped.as_slice(), &[(0, 0)]);
        assert_eq!(board.get(0, 0), Some(true));
        assert_eq!(board.lit_count(), 1);
    }

    #[test]
    fn test_single_cell_board() {
        let mut board = Board::dark(1, 1);

        let flipped = board.toggle_at(0, 0);

        assert_eq!(flipped.as_slice(), &[(0, 0)]);
        assert!(!board.is_solved());

        board.toggle_at(0, 0);
        assert!(board.is_solved());
    }

    #[test]
    fn test_display_renders_lit_and_unlit() {
        let seed = vec![
            vec![false, false, false],
            vec![true, true, false],
            vec![false, false, false],
        ];
        let board = Board::from_seed(3, 3, &seed).unwrap();

        assert_eq!(board.to_string(), ". . .\nO O .\n. . .\n");
    }

    #[test]
    fn test_board_serde_round_trip() {
        let seed = vec![vec![true, false], vec![false, true]];
        let board = Board::from_seed(2, 2, &seed).unwrap();

        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(board, back);
    }

    #[test]
    fn test_initialize_dispatches_by_mode() {
        let mut rng = BoardRng::new(42);

        let det = Board::initialize(
            2,
            2,
            &InitMode::Deterministic(vec![vec![true, true], vec![true, true]]),
            &mut rng,
        )
        .unwrap();
        assert_eq!(det.lit_count(), 4);

        let random = Board::initialize(2, 2, &InitMode::Random(0.0), &mut rng).unwrap();
        assert!(random.is_solved());
    }
}
