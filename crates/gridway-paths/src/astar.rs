use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use gridway_core::{Board, CellState, Point};
use log::{debug, trace};

use crate::distance::euclidean;

/// Why a search run produced no path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The board has no start or no end marker; nothing was computed.
    MissingEndpoint,
    /// The frontier emptied before the end was reached.
    NoPath,
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEndpoint => write!(f, "start and end must both be placed"),
            Self::NoPath => write!(f, "no path exists between start and end"),
        }
    }
}

impl std::error::Error for SearchError {}

/// One generated search node. Nodes live in an arena for the duration of a
/// single run; `parent` indexes into it. Identity is the position alone.
struct Node {
    pos: Point,
    cost: i32,
    parent: Option<usize>,
}

/// Frontier entry: arena index plus the F estimate it was pushed with.
#[derive(Clone, Copy)]
struct OpenEntry {
    node: usize,
    total: f64,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so the max-heap pops the smallest F first.
        other
            .total
            .partial_cmp(&self.total)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Run A* between the board's markers with the default [`euclidean`]
/// heuristic and draw the result onto the board.
pub fn search(board: &mut Board) -> Result<Vec<Point>, SearchError> {
    search_with(board, euclidean)
}

/// Run A* between the board's start and end markers.
///
/// `estimate` supplies the remaining-distance heuristic H; the step cost G
/// is always +1 per move, diagonal or not. On success the start-to-end
/// position chain is returned and drawn onto the board via
/// [`Board::mark_path`] (endpoint cells keep their states). A previously
/// drawn path is cleared once the precondition passes. On failure the
/// board is left as it was, apart from that initial clearing.
///
/// Frontier policy: a candidate is discarded when the frontier already
/// holds an entry for the same position with an F no worse than the
/// candidate's; a strictly better candidate is pushed *alongside* the worse
/// entry rather than replacing it. Stale entries popped later are
/// re-expanded; their children all fall to the explored check, so the extra
/// work never changes the result.
pub fn search_with<F>(board: &mut Board, estimate: F) -> Result<Vec<Point>, SearchError>
where
    F: Fn(Point, Point) -> f64,
{
    let (Some(start), Some(end)) = (board.start(), board.end()) else {
        debug!("[astar] failed: start or end marker not placed");
        return Err(SearchError::MissingEndpoint);
    };

    if board.path_drawn() {
        board.clear_path();
    }

    trace!(
        "[astar] start={start} end={end} diagonal={}",
        board.diagonal()
    );

    let mut nodes = vec![Node {
        pos: start,
        cost: 1,
        parent: None,
    }];
    let mut open = BinaryHeap::new();
    open.push(OpenEntry {
        node: 0,
        total: 1.0 + estimate(start, end),
    });
    let mut closed: HashSet<Point> = HashSet::new();

    let mut expanded = 0usize;
    while let Some(current) = open.pop() {
        expanded += 1;
        let ci = current.node;
        let cpos = nodes[ci].pos;
        closed.insert(cpos);

        if cpos == end {
            let mut chain = Vec::new();
            let mut at = Some(ci);
            while let Some(i) = at {
                chain.push(nodes[i].pos);
                at = nodes[i].parent;
            }
            chain.reverse();
            board.mark_path(chain.iter().copied());
            debug!(
                "[astar] done: {} cells, {expanded} nodes expanded",
                chain.len()
            );
            return Ok(chain);
        }

        let neighbors = if board.diagonal() {
            cpos.neighbors_8().to_vec()
        } else {
            cpos.neighbors_4().to_vec()
        };

        let cost = nodes[ci].cost + 1;
        for np in neighbors {
            // Off-board and wall cells are not expandable; start, end and
            // leftover path cells all are.
            match board.state_at(np) {
                None | Some(CellState::Blocked) => continue,
                Some(_) => {}
            }
            if closed.contains(&np) {
                continue;
            }
            let total = f64::from(cost) + estimate(np, end);
            if open
                .iter()
                .any(|e| nodes[e.node].pos == np && e.total <= total)
            {
                continue;
            }
            nodes.push(Node {
                pos: np,
                cost,
                parent: Some(ci),
            });
            open.push(OpenEntry {
                node: nodes.len() - 1,
                total,
            });
        }
    }

    debug!("[astar] failed: no path after {expanded} nodes expanded");
    Err(SearchError::NoPath)
}
