//! **gridway-core** — board state and geometry for the gridway pathfinder.
//!
//! This crate provides the data layer the rest of the workspace operates on:
//! the [`Point`] geometry primitive, the [`CellState`] enum, and the
//! [`Board`] container that owns cell states, the cached start/end markers,
//! and the path/diagonal mode flags. No algorithm lives here; the board
//! enforces its own invariants and everything else is a caller.

pub mod board;
pub mod geom;

pub use board::{Board, CellState, EraseError, PaintError};
pub use geom::Point;
