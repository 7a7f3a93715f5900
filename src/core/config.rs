//! Board construction modes and errors.
//!
//! A board is built either from a fixed seed grid (reproducible tests,
//! puzzle-of-the-day style setups) or by independent per-cell randomization.
//! The mode is kept by the game session so "reset" can reconstruct the board
//! the same way it was first built.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of rows for a new game.
pub const DEFAULT_ROWS: usize = 5;

/// Default number of columns for a new game.
pub const DEFAULT_COLS: usize = 5;

/// Default chance that any cell starts lit.
pub const DEFAULT_LIT_CHANCE: f64 = 0.25;

/// How a board's starting configuration is produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum InitMode {
    /// A fixed starting grid. The board deep-copies it; the caller may
    /// reuse or mutate the grid afterwards without affecting the board.
    Deterministic(Vec<Vec<bool>>),

    /// Each cell is lit independently with the given probability.
    ///
    /// 0.0 deals an all-off board, 1.0 an all-on board. Values outside
    /// [0, 1] are clamped.
    Random(f64),
}

impl Default for InitMode {
    fn default() -> Self {
        Self::Random(DEFAULT_LIT_CHANCE)
    }
}

/// Errors raised during board construction.
///
/// Construction is the only fallible operation in the engine. Toggling
/// out-of-range coordinates is a defined no-op, not an error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A deterministic seed grid's shape disagrees with the requested
    /// dimensions. Reported for a wrong row count or for any row whose
    /// length differs from the requested column count.
    #[error(
        "seed grid is {actual_rows}x{actual_cols}, expected {expected_rows}x{expected_cols}"
    )]
    DimensionMismatch {
        /// Requested row count.
        expected_rows: usize,
        /// Requested column count.
        expected_cols: usize,
        /// Rows actually present in the seed grid.
        actual_rows: usize,
        /// Length of the first offending row (or of the grid's first row
        /// when the row count itself is wrong).
        actual_cols: usize,
    },
}
