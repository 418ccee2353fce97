//! 8-puzzle solving by three search strategies over one state model.
//!
//! [`puzzle::Board`] is the immutable state type: it generates successors,
//! tests the goal, packs itself into a canonical `u64` key and computes the
//! Manhattan-distance heuristic. On top of it sit three independent solvers:
//!
//! - [`bfs`] — level-order search, guaranteed shortest solution;
//! - [`bidirectional`] — two meeting frontiers, valid but not necessarily
//!   shortest;
//! - [`annealing`] — simulated annealing guided by the heuristic, returning
//!   a trace that may or may not end at the goal.
//!
//! [`EightPuzzle`] bundles a starting board with the three strategies.

use thiserror::Error;

pub mod annealing;
pub mod bfs;
pub mod bidirectional;
pub mod puzzle;
pub mod solver;

pub use annealing::AnnealingConfig;
pub use puzzle::{Board, BoardError, Move};
pub use solver::EightPuzzle;

/// Terminal outcomes of the breadth-first strategies that yield no path.
/// `NoSolution` is a domain answer (the frontier genuinely emptied), not a
/// fault; `ExpansionLimit` only occurs when a caller opts into a node cap.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("the puzzle has no solution")]
    NoSolution,
    #[error("expansion limit of {0} nodes reached before a solution was found")]
    ExpansionLimit(usize),
}
