//! Game session: the external interface around the board engine.
//!
//! A [`Game`] owns one board, the construction mode it was dealt with, and
//! the session RNG. The embedding presentation layer drives it through four
//! entry points: the board snapshot, the solved query, the toggle command,
//! and reset. Reset replaces the board wholesale - deterministic games get
//! the identical starting grid back, random games get a fresh deal from the
//! session's RNG stream.

use crate::core::{
    Board, BoardError, BoardRng, FlippedCells, InitMode, DEFAULT_COLS, DEFAULT_ROWS,
};

/// How reset reconstructs the board. Deterministic setups keep the already
/// validated starting board as a template so reset cannot fail.
#[derive(Clone, Debug)]
enum Setup {
    Template(Board),
    Random(f64),
}

/// A single Lights Out game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    setup: Setup,
    rng: BoardRng,
}

/// Builder for creating a [`Game`].
#[derive(Clone, Debug)]
pub struct GameBuilder {
    rows: usize,
    cols: usize,
    mode: InitMode,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            mode: InitMode::default(),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rows.
    #[must_use]
    pub fn rows(mut self, rows: usize) -> Self {
        assert!(rows >= 1, "Board must have at least 1 row");
        self.rows = rows;
        self
    }

    /// Set the number of columns.
    #[must_use]
    pub fn cols(mut self, cols: usize) -> Self {
        assert!(cols >= 1, "Board must have at least 1 column");
        self.cols = cols;
        self
    }

    /// Set the construction mode.
    #[must_use]
    pub fn mode(mut self, mode: InitMode) -> Self {
        self.mode = mode;
        self
    }

    /// Build the game, dealing the starting board.
    ///
    /// A deterministic seed grid is validated here, once; after a successful
    /// build, [`Game::reset`] cannot fail. Fails with
    /// [`BoardError::DimensionMismatch`] if the grid's shape disagrees with
    /// the configured dimensions.
    pub fn build(self, seed: u64) -> Result<Game, BoardError> {
        let mut rng = BoardRng::new(seed);

        let (board, setup) = match self.mode {
            InitMode::Deterministic(grid) => {
                let template = Board::from_seed(self.rows, self.cols, &grid)?;
                (template.clone(), Setup::Template(template))
            }
            InitMode::Random(probability) => (
                Board::random(self.rows, self.cols, probability, &mut rng),
                Setup::Random(probability),
            ),
        };

        Ok(Game { board, setup, rng })
    }
}

impl Game {
    /// The current board, for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether the puzzle is solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Toggle the cell at `(row, col)` and its orthogonal neighbors.
    ///
    /// Out-of-range positions are skipped silently; the presentation layer
    /// does not need to pre-validate coordinates. Returns the cells that
    /// actually flipped.
    pub fn toggle(&mut self, row: isize, col: isize) -> FlippedCells {
        self.board.toggle_at(row, col)
    }

    /// Discard the current board and start a new game.
    ///
    /// Deterministic games restore the exact starting grid; random games
    /// re-draw from the session RNG stream.
    pub fn reset(&mut self) {
        match &self.setup {
            Setup::Template(template) => self.board = template.clone(),
            Setup::Random(probability) => {
                self.board = Board::random(
                    self.board.rows(),
                    self.board.cols(),
                    *probability,
                    &mut self.rng,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let game = GameBuilder::new().build(42).unwrap();

        assert_eq!(game.board().rows(), 5);
        assert_eq!(game.board().cols(), 5);
    }

    #[test]
    fn test_builder_rejects_mismatched_grid() {
        let result = GameBuilder::new()
            .rows(3)
            .cols(3)
            .mode(InitMode::Deterministic(vec![
                vec![false, false, false],
                vec![false, false, false],
            ]))
            .build(42);

        assert_eq!(
            result.unwrap_err(),
            BoardError::DimensionMismatch {
                expected_rows: 3,
                expected_cols: 3,
                actual_rows: 2,
                actual_cols: 3,
            }
        );
    }

    #[test]
    fn test_same_seed_same_deal() {
        let game1 = GameBuilder::new().build(123).unwrap();
        let game2 = GameBuilder::new().build(123).unwrap();

        assert_eq!(game1.board(), game2.board());
    }
}
