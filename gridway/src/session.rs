//! Session orchestration: placing modes, paint/erase intents, search runs.

use std::fmt;

use gridway_core::{Board, CellState, EraseError, PaintError, Point};
use gridway_paths::SearchError;
use log::info;

/// Everything a session intent can fail with. All variants are recoverable
/// status values; the caller reports them and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The position lies outside the board.
    OutOfBounds,
    /// The paint target is not empty.
    Occupied,
    /// A run was requested without both markers placed.
    MissingEndpoint,
    /// The search exhausted its frontier.
    NoPath,
    /// The requested marker is already on the board.
    AlreadyPlaced,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => write!(f, "position is outside the board"),
            Self::Occupied => write!(f, "cell is already occupied"),
            Self::MissingEndpoint => write!(f, "place both a start and an end first"),
            Self::NoPath => write!(f, "no path found"),
            Self::AlreadyPlaced => write!(f, "start or end already placed"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<PaintError> for SessionError {
    fn from(err: PaintError) -> Self {
        match err {
            PaintError::OutOfBounds => Self::OutOfBounds,
            PaintError::Occupied => Self::Occupied,
            PaintError::DuplicateMarker => Self::AlreadyPlaced,
        }
    }
}

impl From<EraseError> for SessionError {
    fn from(err: EraseError) -> Self {
        match err {
            EraseError::OutOfBounds => Self::OutOfBounds,
        }
    }
}

impl From<SearchError> for SessionError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::MissingEndpoint => Self::MissingEndpoint,
            SearchError::NoPath => Self::NoPath,
        }
    }
}

/// One interactive session: the board plus the placing-mode flags.
///
/// The board is owned here and mutated only through session intents; the
/// front-end reads it back between steps for rendering.
pub struct Session {
    board: Board,
    placing_start: bool,
    placing_end: bool,
}

impl Session {
    /// Create a session over an empty board of the given dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            board: Board::new(width, height),
            placing_start: false,
            placing_end: false,
        }
    }

    // -------------------------------------------------------------------
    // Placing modes
    // -------------------------------------------------------------------

    /// Arm start placement: the next primary action paints the start.
    ///
    /// Rejected while a start is on the board. Arming one mode always
    /// disarms the other.
    pub fn place_start_mode(&mut self) -> Result<(), SessionError> {
        if self.board.start().is_some() {
            info!("start already placed");
            return Err(SessionError::AlreadyPlaced);
        }
        info!("placing start");
        self.placing_end = false;
        self.placing_start = true;
        Ok(())
    }

    /// Arm end placement; see [`Session::place_start_mode`].
    pub fn place_end_mode(&mut self) -> Result<(), SessionError> {
        if self.board.end().is_some() {
            info!("end already placed");
            return Err(SessionError::AlreadyPlaced);
        }
        info!("placing end");
        self.placing_start = false;
        self.placing_end = true;
        Ok(())
    }

    // -------------------------------------------------------------------
    // Intents
    // -------------------------------------------------------------------

    /// Paint at `p`: the armed marker if a placing mode is active, a wall
    /// otherwise. A successful paint disarms both modes; a rejected one
    /// leaves them armed so the user can try another cell.
    pub fn primary_action(&mut self, p: Point) -> Result<(), SessionError> {
        let state = if self.placing_start {
            CellState::Start
        } else if self.placing_end {
            CellState::End
        } else {
            CellState::Blocked
        };
        self.board.paint(p, state)?;
        self.placing_start = false;
        self.placing_end = false;
        Ok(())
    }

    /// Erase the cell at `p`.
    pub fn secondary_action(&mut self, p: Point) -> Result<(), SessionError> {
        self.board.erase(p)?;
        Ok(())
    }

    /// Run the search and draw the path. Returns the start-to-end chain.
    pub fn run(&mut self) -> Result<Vec<Point>, SessionError> {
        info!("running pathfinding");
        let path = gridway_paths::search(&mut self.board)?;
        Ok(path)
    }

    /// Clear the whole board and disarm both placing modes. Diagonal mode
    /// survives, as it does on the board itself.
    pub fn reset(&mut self) {
        info!("resetting board");
        self.board.reset();
        self.placing_start = false;
        self.placing_end = false;
    }

    /// Remove a drawn path, leaving walls and markers in place.
    pub fn clear_path(&mut self) {
        info!("removing paths");
        self.board.clear_path();
    }

    /// Flip diagonal movement and return the new mode.
    pub fn toggle_diagonal(&mut self) -> bool {
        let on = self.board.toggle_diagonal();
        info!("diagonal movement {}", if on { "on" } else { "off" });
        on
    }

    /// Set diagonal movement directly.
    pub fn set_diagonal(&mut self, enabled: bool) {
        self.board.set_diagonal(enabled);
    }

    // -------------------------------------------------------------------
    // Queries for renderers
    // -------------------------------------------------------------------

    /// The board, for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether the next primary action paints the start.
    pub fn is_placing_start(&self) -> bool {
        self.placing_start
    }

    /// Whether the next primary action paints the end.
    pub fn is_placing_end(&self) -> bool {
        self.placing_end
    }

    /// Whether diagonal movement is enabled.
    pub fn is_diagonal_enabled(&self) -> bool {
        self.board.diagonal()
    }
}
