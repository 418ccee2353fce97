use std::collections::{HashMap, VecDeque};

use crate::puzzle::Board;
use crate::SearchError;

type Frontier = VecDeque<(Board, Vec<Board>)>;
type Seen = HashMap<u64, Vec<Board>>;

/// Bidirectional breadth-first search: one frontier grows from `start`, the
/// other from the goal, and a path is assembled as soon as a board dequeued
/// on one side has already been reached by the other.
///
/// The two frontiers alternate exactly one expansion per iteration with no
/// depth balancing, so the meeting point is not necessarily on a shortest
/// path: the result is always edge-valid and goal-terminated, but its length
/// may exceed the minimum. That is this algorithm's contract; callers who
/// need optimality should use [`crate::bfs`].
///
/// Path convention matches [`crate::bfs::solve`]: the start is excluded and
/// the final element is the goal.
pub fn solve(start: Board) -> Result<Vec<Board>, SearchError> {
    solve_bounded(start, None)
}

/// Same as [`solve`], with an optional ceiling on the total number of nodes
/// expanded across both frontiers.
pub fn solve_bounded(
    start: Board,
    max_expansions: Option<usize>,
) -> Result<Vec<Board>, SearchError> {
    let goal = Board::goal();

    let mut forward_frontier: Frontier = VecDeque::from([(start, Vec::new())]);
    let mut backward_frontier: Frontier = VecDeque::from([(goal, Vec::new())]);

    // Each side's visited map records the path from its own seed (seed
    // excluded, reached board included) so the meeting point can be stitched
    // without re-searching.
    let mut forward_seen: Seen = HashMap::from([(start.key(), Vec::new())]);
    let mut backward_seen: Seen = HashMap::from([(goal.key(), Vec::new())]);

    let mut expanded = 0usize;

    loop {
        // Forward step.
        let Some((board, path)) = forward_frontier.pop_front() else {
            break;
        };
        if let Some(tail) = backward_seen.get(&board.key()) {
            tracing::debug!(expanded, "frontiers met on the forward side");
            return Ok(join_paths(path, tail));
        }
        if let Some(limit) = max_expansions {
            if expanded >= limit {
                return Err(SearchError::ExpansionLimit(limit));
            }
        }
        expanded += 1;
        expand(&board, &path, &mut forward_seen, &mut forward_frontier);

        // Backward step, symmetric against the forward visited map.
        let Some((board, path)) = backward_frontier.pop_front() else {
            break;
        };
        if let Some(head) = forward_seen.get(&board.key()) {
            tracing::debug!(expanded, "frontiers met on the backward side");
            return Ok(join_paths(head.clone(), &path));
        }
        if let Some(limit) = max_expansions {
            if expanded >= limit {
                return Err(SearchError::ExpansionLimit(limit));
            }
        }
        expanded += 1;
        expand(&board, &path, &mut backward_seen, &mut backward_frontier);
    }

    tracing::debug!(expanded, "a bidirectional frontier emptied without meeting");
    Err(SearchError::NoSolution)
}

fn expand(board: &Board, path: &[Board], seen: &mut Seen, frontier: &mut Frontier) {
    for successor in board.successors() {
        if !seen.contains_key(&successor.key()) {
            let mut extended = path.to_vec();
            extended.push(successor);
            seen.insert(successor.key(), extended.clone());
            frontier.push_back((successor, extended));
        }
    }
}

/// Stitches the two half-paths at their shared meeting point. `forward` runs
/// from the start to the meeting board; `backward` lists the boards reached
/// walking out from the goal, also ending at the meeting board. Replaying
/// `backward` in reverse (skipping the duplicated meeting board) and landing
/// on the goal yields one contiguous move sequence.
fn join_paths(mut forward: Vec<Board>, backward: &[Board]) -> Vec<Board> {
    // An empty backward half means the meeting point is the goal itself.
    if backward.is_empty() {
        return forward;
    }
    forward.extend(backward.iter().rev().skip(1));
    forward.push(Board::goal());
    forward
}
