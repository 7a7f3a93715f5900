//! # lights-out
//!
//! The core logic of the "Lights Out" puzzle: a rectangular grid of
//! binary-state cells where toggling one cell also toggles its orthogonal
//! neighbors, won by driving every cell to the off state.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: the engine is a data-and-function state machine.
//!    Rendering, click wiring, and the application shell live in the
//!    embedder, which maps its own interaction events to `(row, col)`.
//!
//! 2. **Derived win state**: "solved" is always recomputed from the grid.
//!    There is no cached flag that could desynchronize from the board.
//!
//! 3. **Injected randomness**: random deals draw from a seeded [`BoardRng`]
//!    passed in by the caller, so tests reproduce boards exactly.
//!
//! ## Modules
//!
//! - `core`: board state, the toggle transition, construction modes, RNG
//! - `game`: session wrapper with snapshot/solved/toggle/reset
//!
//! ## Example
//!
//! ```
//! use lights_out::{Board, BoardRng};
//!
//! let mut board = Board::random(5, 5, 0.25, &mut BoardRng::new(42));
//! board.toggle_at(2, 2);
//! if board.is_solved() {
//!     println!("all lights out!");
//! }
//! ```

pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardError, BoardRng, FlippedCells, InitMode,
    DEFAULT_COLS, DEFAULT_LIT_CHANCE, DEFAULT_ROWS,
};

pub use crate::game::{Game, GameBuilder};
