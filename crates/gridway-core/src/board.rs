//! The pathfinding board: cell states, markers, and mutation rules.
//!
//! [`Board`] is pure data plus invariant enforcement. At most one [`Start`]
//! and one [`End`] cell exist at any time, and [`Path`] cells are transient:
//! any paint or erase clears them before taking effect. The search engine
//! writes results back through [`Board::mark_path`], which never relabels
//! the endpoint cells.
//!
//! [`Start`]: CellState::Start
//! [`End`]: CellState::End
//! [`Path`]: CellState::Path

use std::fmt;

use crate::geom::Point;

// ---------------------------------------------------------------------------
// CellState
// ---------------------------------------------------------------------------

/// The state of a single board cell. States are mutually exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Nothing here; traversable and paintable.
    #[default]
    Empty,
    /// An obstacle painted by the user.
    Blocked,
    /// The search origin. At most one per board.
    Start,
    /// The search goal. At most one per board.
    End,
    /// A cell on the most recently drawn path.
    Path,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a paint request was rejected. All variants are recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintError {
    /// The position lies outside the board.
    OutOfBounds,
    /// The target cell is not empty; painting never overwrites.
    Occupied,
    /// A start or end marker is already placed elsewhere.
    DuplicateMarker,
}

impl fmt::Display for PaintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => write!(f, "position is outside the board"),
            Self::Occupied => write!(f, "cell is already occupied"),
            Self::DuplicateMarker => write!(f, "a start or end marker is already placed"),
        }
    }
}

impl std::error::Error for PaintError {}

/// Why an erase request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseError {
    /// The position lies outside the board.
    OutOfBounds,
}

impl fmt::Display for EraseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => write!(f, "position is outside the board"),
        }
    }
}

impl std::error::Error for EraseError {}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A fixed-size grid of [`CellState`] values with cached start/end markers.
///
/// Created once at fixed dimensions and mutated for the rest of the
/// session; never resized. Two boards compare equal when their cells,
/// markers, and mode flags all match.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Vec<CellState>,
    width: i32,
    height: i32,
    start: Option<Point>,
    end: Option<Point>,
    path_drawn: bool,
    diagonal: bool,
}

impl Board {
    /// Create an empty board. Diagonal movement starts enabled.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            cells: vec![CellState::Empty; (width * height) as usize],
            width,
            height,
            start: None,
            end: None,
            path_drawn: false,
            diagonal: true,
        }
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.x >= self.width || p.y < 0 || p.y >= self.height {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Paint `state` at `p`.
    ///
    /// A previously drawn path is cleared first, even when the request is
    /// then rejected. Painting never overwrites an occupied cell, and a
    /// second `Start` or `End` is rejected while the first remains. On
    /// success the marker cache is updated for `Start`/`End`.
    pub fn paint(&mut self, p: Point, state: CellState) -> Result<(), PaintError> {
        let Some(i) = self.idx(p) else {
            return Err(PaintError::OutOfBounds);
        };
        if self.path_drawn {
            self.clear_path();
        }
        if self.cells[i] != CellState::Empty {
            return Err(PaintError::Occupied);
        }
        match state {
            CellState::Start if self.start.is_some() => return Err(PaintError::DuplicateMarker),
            CellState::End if self.end.is_some() => return Err(PaintError::DuplicateMarker),
            CellState::Start => self.start = Some(p),
            CellState::End => self.end = Some(p),
            _ => {}
        }
        self.cells[i] = state;
        Ok(())
    }

    /// Erase the cell at `p` back to empty.
    ///
    /// Clears any drawn path first and drops the cached start/end marker
    /// if the erased cell held one. Out-of-bounds requests leave the board
    /// fully unchanged.
    pub fn erase(&mut self, p: Point) -> Result<(), EraseError> {
        let Some(i) = self.idx(p) else {
            return Err(EraseError::OutOfBounds);
        };
        if self.path_drawn {
            self.clear_path();
        }
        match self.cells[i] {
            CellState::Start => self.start = None,
            CellState::End => self.end = None,
            _ => {}
        }
        self.cells[i] = CellState::Empty;
        Ok(())
    }

    /// Clear every path cell back to empty.
    pub fn clear_path(&mut self) {
        for cell in &mut self.cells {
            if *cell == CellState::Path {
                *cell = CellState::Empty;
            }
        }
        self.path_drawn = false;
    }

    /// Materialize a search result: every listed position that is currently
    /// empty becomes a path cell. Start and end cells are never relabeled.
    pub fn mark_path<I>(&mut self, chain: I)
    where
        I: IntoIterator<Item = Point>,
    {
        for p in chain {
            if let Some(i) = self.idx(p) {
                if self.cells[i] == CellState::Empty {
                    self.cells[i] = CellState::Path;
                }
            }
        }
        self.path_drawn = true;
    }

    /// Clear the whole board and both markers. Diagonal mode survives.
    pub fn reset(&mut self) {
        self.cells.fill(CellState::Empty);
        self.start = None;
        self.end = None;
        self.path_drawn = false;
    }

    /// Flip diagonal movement and return the new mode.
    pub fn toggle_diagonal(&mut self) -> bool {
        self.diagonal = !self.diagonal;
        self.diagonal
    }

    /// Set diagonal movement directly.
    pub fn set_diagonal(&mut self, enabled: bool) {
        self.diagonal = enabled;
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Cell state at `p`, or `None` outside the board.
    #[inline]
    pub fn state_at(&self, p: Point) -> Option<CellState> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// Whether `p` holds an obstacle.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.state_at(p) == Some(CellState::Blocked)
    }

    /// Whether `p` lies inside the board.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.idx(p).is_some()
    }

    /// Board width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Board height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Position of the start marker, if placed.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Position of the end marker, if placed.
    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Whether a path is currently drawn on the board.
    #[inline]
    pub fn path_drawn(&self) -> bool {
        self.path_drawn
    }

    /// Whether diagonal movement is enabled.
    #[inline]
    pub fn diagonal(&self) -> bool {
        self.diagonal
    }

    /// Row-major iterator over every cell with its position.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Point::new(i as i32 % width, i as i32 / width), cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_paint_and_erase_change_nothing() {
        let mut board = Board::new(4, 3);
        board.paint(Point::new(1, 1), CellState::Blocked).unwrap();
        let before = board.clone();

        for p in [
            Point::new(-1, 0),
            Point::new(0, -1),
            Point::new(4, 0),
            Point::new(0, 3),
        ] {
            assert_eq!(
                board.paint(p, CellState::Blocked),
                Err(PaintError::OutOfBounds)
            );
            assert_eq!(board.erase(p), Err(EraseError::OutOfBounds));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn painting_an_occupied_cell_is_rejected() {
        let mut board = Board::new(4, 4);
        let p = Point::new(2, 2);
        board.paint(p, CellState::Blocked).unwrap();
        assert_eq!(board.paint(p, CellState::Start), Err(PaintError::Occupied));
        assert_eq!(board.state_at(p), Some(CellState::Blocked));
        assert_eq!(board.start(), None);
    }

    #[test]
    fn at_most_one_start_marker() {
        let mut board = Board::new(4, 4);
        let p = Point::new(0, 0);
        let q = Point::new(3, 3);
        board.paint(p, CellState::Start).unwrap();
        assert_eq!(
            board.paint(q, CellState::Start),
            Err(PaintError::DuplicateMarker)
        );
        assert_eq!(board.state_at(p), Some(CellState::Start));
        assert_eq!(board.state_at(q), Some(CellState::Empty));
        assert_eq!(board.start(), Some(p));
    }

    #[test]
    fn at_most_one_end_marker() {
        let mut board = Board::new(4, 4);
        board.paint(Point::new(1, 0), CellState::End).unwrap();
        assert_eq!(
            board.paint(Point::new(2, 0), CellState::End),
            Err(PaintError::DuplicateMarker)
        );
        assert_eq!(board.end(), Some(Point::new(1, 0)));
    }

    #[test]
    fn erasing_a_marker_clears_its_cache() {
        let mut board = Board::new(4, 4);
        let p = Point::new(1, 2);
        board.paint(p, CellState::Start).unwrap();
        assert_eq!(board.start(), Some(p));

        board.erase(p).unwrap();
        assert_eq!(board.start(), None);
        assert_eq!(board.state_at(p), Some(CellState::Empty));

        // The slot is free for a new start.
        board.paint(Point::new(0, 0), CellState::Start).unwrap();
        assert_eq!(board.start(), Some(Point::new(0, 0)));
    }

    #[test]
    fn paint_clears_a_drawn_path() {
        let mut board = Board::new(5, 1);
        board.mark_path([Point::new(1, 0), Point::new(2, 0)]);
        assert!(board.path_drawn());

        board.paint(Point::new(4, 0), CellState::Blocked).unwrap();
        assert!(!board.path_drawn());
        assert_eq!(board.state_at(Point::new(1, 0)), Some(CellState::Empty));
        assert_eq!(board.state_at(Point::new(2, 0)), Some(CellState::Empty));
    }

    #[test]
    fn rejected_paint_still_clears_the_path() {
        let mut board = Board::new(5, 1);
        board.paint(Point::new(0, 0), CellState::Blocked).unwrap();
        board.mark_path([Point::new(2, 0)]);
        assert!(board.path_drawn());

        // Occupied target, but the path invalidation has already happened.
        assert_eq!(
            board.paint(Point::new(0, 0), CellState::Blocked),
            Err(PaintError::Occupied)
        );
        assert!(!board.path_drawn());
        assert_eq!(board.state_at(Point::new(2, 0)), Some(CellState::Empty));
    }

    #[test]
    fn erase_clears_a_drawn_path() {
        let mut board = Board::new(5, 1);
        board.paint(Point::new(0, 0), CellState::Blocked).unwrap();
        board.mark_path([Point::new(3, 0)]);

        board.erase(Point::new(0, 0)).unwrap();
        assert!(!board.path_drawn());
        assert_eq!(board.state_at(Point::new(3, 0)), Some(CellState::Empty));
    }

    #[test]
    fn mark_path_never_relabels_markers() {
        let mut board = Board::new(3, 1);
        board.paint(Point::new(0, 0), CellState::Start).unwrap();
        board.paint(Point::new(2, 0), CellState::End).unwrap();

        board.mark_path([Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]);
        assert_eq!(board.state_at(Point::new(0, 0)), Some(CellState::Start));
        assert_eq!(board.state_at(Point::new(1, 0)), Some(CellState::Path));
        assert_eq!(board.state_at(Point::new(2, 0)), Some(CellState::End));
        assert!(board.path_drawn());
    }

    #[test]
    fn clear_path_only_touches_path_cells() {
        let mut board = Board::new(3, 1);
        board.paint(Point::new(0, 0), CellState::Blocked).unwrap();
        board.mark_path([Point::new(1, 0)]);

        board.clear_path();
        assert_eq!(board.state_at(Point::new(0, 0)), Some(CellState::Blocked));
        assert_eq!(board.state_at(Point::new(1, 0)), Some(CellState::Empty));
        assert!(!board.path_drawn());
    }

    #[test]
    fn reset_round_trip_reproduces_the_same_board() {
        let cells = [
            (Point::new(0, 0), CellState::Start),
            (Point::new(3, 3), CellState::End),
            (Point::new(1, 2), CellState::Blocked),
            (Point::new(2, 1), CellState::Blocked),
        ];

        let mut fresh = Board::new(4, 4);
        let mut reused = Board::new(4, 4);
        for &(p, s) in &cells {
            fresh.paint(p, s).unwrap();
            // Scribble on the reused board first, then reset and repaint.
            reused.paint(p, s).unwrap();
        }
        reused.mark_path([Point::new(2, 2)]);
        reused.reset();
        for &(p, s) in &cells {
            reused.paint(p, s).unwrap();
        }
        assert_eq!(fresh, reused);
    }

    #[test]
    fn reset_preserves_diagonal_mode() {
        let mut board = Board::new(4, 4);
        assert!(board.diagonal());
        assert!(!board.toggle_diagonal());
        board.reset();
        assert!(!board.diagonal());
        assert!(board.toggle_diagonal());
    }

    #[test]
    fn queries() {
        let mut board = Board::new(3, 2);
        board.paint(Point::new(1, 1), CellState::Blocked).unwrap();

        assert!(board.contains(Point::new(2, 1)));
        assert!(!board.contains(Point::new(3, 0)));
        assert_eq!(board.state_at(Point::new(5, 5)), None);
        assert!(board.is_blocked(Point::new(1, 1)));
        assert!(!board.is_blocked(Point::new(0, 0)));
        assert!(!board.is_blocked(Point::new(-1, 0)));
        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 2);
    }

    #[test]
    fn iter_is_row_major() {
        let board = Board::new(3, 2);
        let cells: Vec<_> = board.iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0].0, Point::new(0, 0));
        assert_eq!(cells[2].0, Point::new(2, 0));
        assert_eq!(cells[3].0, Point::new(0, 1));
        assert_eq!(cells[5].0, Point::new(2, 1));
        assert!(cells.iter().all(|&(_, s)| s == CellState::Empty));
    }
}
