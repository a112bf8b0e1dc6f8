//! A* search for the gridway board.
//!
//! [`search`] runs A* between the board's start and end markers and writes
//! the winning path back onto the board; [`search_with`] does the same with
//! a caller-supplied heuristic ([`euclidean`] is the default).
//!
//! The cost model is deliberately lopsided: every move costs 1 whether it
//! is cardinal or diagonal, while the heuristic is the continuous Euclidean
//! distance. With diagonal movement enabled the heuristic can therefore
//! overestimate (a diagonal step covers √2 of straight-line distance for a
//! cost of 1), so the search is not admissible in that mode and may return
//! a path slightly longer than optimal. Orthogonal mode is admissible.

mod astar;
mod distance;

pub use astar::{SearchError, search, search_with};
pub use distance::euclidean;
