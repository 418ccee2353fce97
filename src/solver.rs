use rand::Rng;

use crate::annealing::{self, AnnealingConfig};
use crate::bfs;
use crate::bidirectional;
use crate::puzzle::Board;
use crate::SearchError;

/// A problem instance: a starting board plus the three solving strategies.
///
/// Construction never inspects solvability — an instance built from a
/// random board (or a deliberately odd-parity one) is valid, and the
/// breadth-first strategies will report [`SearchError::NoSolution`] for it
/// after exhausting its parity class.
#[derive(Debug, Clone, Copy)]
pub struct EightPuzzle {
    start: Board,
}

impl EightPuzzle {
    pub fn new(start: Board) -> Self {
        Self { start }
    }

    /// An instance with a uniformly random starting board (which may be
    /// unsolvable; see [`Board::random`]).
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            start: Board::random(rng),
        }
    }

    pub fn start(&self) -> Board {
        self.start
    }

    /// Shortest solution by breadth-first search.
    pub fn solve_bfs(&self) -> Result<Vec<Board>, SearchError> {
        bfs::solve(self.start)
    }

    /// [`Self::solve_bfs`] with a node-expansion ceiling.
    pub fn solve_bfs_bounded(&self, max_expansions: usize) -> Result<Vec<Board>, SearchError> {
        bfs::solve_bounded(self.start, Some(max_expansions))
    }

    /// Solution by two meeting frontiers; valid but not necessarily
    /// shortest (see [`crate::bidirectional`]).
    pub fn solve_bidirectional(&self) -> Result<Vec<Board>, SearchError> {
        bidirectional::solve(self.start)
    }

    /// [`Self::solve_bidirectional`] with a node-expansion ceiling shared
    /// by both frontiers.
    pub fn solve_bidirectional_bounded(
        &self,
        max_expansions: usize,
    ) -> Result<Vec<Board>, SearchError> {
        bidirectional::solve_bounded(self.start, Some(max_expansions))
    }

    /// Simulated-annealing trace; inspect the final board to learn whether
    /// the goal was reached (see [`crate::annealing::solve`]).
    pub fn solve_annealing(&self, config: &AnnealingConfig) -> Vec<Board> {
        annealing::solve(self.start, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::SIZE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board(rows: [[u8; SIZE]; SIZE]) -> Board {
        Board::new(rows).unwrap()
    }

    #[test]
    fn facade_routes_to_all_three_strategies() {
        let puzzle = EightPuzzle::new(board([[1, 2, 3], [4, 5, 6], [7, 0, 8]]));

        assert_eq!(puzzle.solve_bfs().unwrap().len(), 1);
        assert!(puzzle
            .solve_bidirectional()
            .unwrap()
            .last()
            .unwrap()
            .is_goal());

        let trace = puzzle.solve_annealing(&AnnealingConfig {
            seed: Some(5),
            ..AnnealingConfig::default()
        });
        assert_eq!(trace[0], puzzle.start());
    }

    #[test]
    fn random_instances_follow_the_injected_rng() {
        let a = EightPuzzle::random(&mut StdRng::seed_from_u64(21));
        let b = EightPuzzle::random(&mut StdRng::seed_from_u64(21));
        assert_eq!(a.start(), b.start());
    }
}
