use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use crate::puzzle::Board;
use crate::SearchError;

/// Breadth-first search from `start` to the goal board.
///
/// Unit edge costs and level-order expansion make the first path found a
/// shortest one. The returned path excludes the start and ends at the goal,
/// so its length is the move count; a start that already is the goal yields
/// an empty path.
///
/// Runs until the frontier is exhausted, which on an unsolvable board means
/// visiting all 181440 states of its parity class before reporting
/// [`SearchError::NoSolution`].
pub fn solve(start: Board) -> Result<Vec<Board>, SearchError> {
    solve_bounded(start, None)
}

/// Same as [`solve`], with an optional ceiling on the number of expanded
/// nodes. Below the ceiling the behavior is identical; reaching it aborts
/// with [`SearchError::ExpansionLimit`].
pub fn solve_bounded(
    start: Board,
    max_expansions: Option<usize>,
) -> Result<Vec<Board>, SearchError> {
    let mut frontier = VecDeque::new();
    // Visited set and parent pointers in one map: key -> predecessor board,
    // `None` marking the start. The full path is rebuilt once, at the end,
    // instead of being carried through every frontier entry.
    let mut parents: HashMap<u64, Option<Board>> = HashMap::new();

    frontier.push_back(start);
    parents.insert(start.key(), None);

    let mut expanded = 0usize;

    while let Some(board) = frontier.pop_front() {
        if board.is_goal() {
            tracing::debug!(expanded, "breadth-first search reached the goal");
            return Ok(reconstruct(&parents, board));
        }

        if let Some(limit) = max_expansions {
            if expanded >= limit {
                return Err(SearchError::ExpansionLimit(limit));
            }
        }
        expanded += 1;

        for successor in board.successors() {
            if let Entry::Vacant(slot) = parents.entry(successor.key()) {
                slot.insert(Some(board));
                frontier.push_back(successor);
            }
        }
    }

    tracing::debug!(expanded, "breadth-first frontier exhausted");
    Err(SearchError::NoSolution)
}

/// Walks the parent map backward from the goal; the start (the one entry
/// with no parent) is deliberately left out of the result.
fn reconstruct(parents: &HashMap<u64, Option<Board>>, goal: Board) -> Vec<Board> {
    let mut path = Vec::new();
    let mut current = goal;
    while let Some(Some(parent)) = parents.get(&current.key()) {
        path.push(current);
        current = *parent;
    }
    path.reverse();
    path
}
