//! Gridway — an interactive A* pathfinder for the terminal.
#![allow(dead_code)]

mod session;
mod ui;

use session::Session;
use ui::{BOARD_HEIGHT, BOARD_WIDTH};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::new(BOARD_WIDTH, BOARD_HEIGHT);
    ui::run(session)?;
    Ok(())
}
