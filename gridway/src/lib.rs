//! Gridway — an interactive A* pathfinder for the terminal.
#![allow(dead_code)]

pub mod session;
pub mod ui;

pub use session::{Session, SessionError};
pub use ui::{BOARD_HEIGHT, BOARD_WIDTH};
