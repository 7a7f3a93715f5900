//! Core engine types: board state, construction modes, RNG.
//!
//! This module contains the puzzle logic itself. Everything presentational
//! (rendering cells, wiring clicks, menus) lives in the embedding
//! application and talks to these types through [`Board`] and the `game`
//! session wrapper.

pub mod board;
pub mod config;
pub mod rng;

pub use board::{Board, FlippedCells};
pub use config::{BoardError, InitMode, DEFAULT_COLS, DEFAULT_LIT_CHANCE, DEFAULT_ROWS};
pub use rng::BoardRng;
