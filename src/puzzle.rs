use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Side length of the board. The move set below is specific to the 3x3
/// sliding-tile graph, so this is a fixed constant rather than a parameter.
pub const SIZE: usize = 3;
const CELLS: usize = SIZE * SIZE;

/// The solved arrangement, row-major. 0 is the blank.
const GOAL_CELLS: [u8; CELLS] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    /// Fixed successor-generation order. Search results depend on this only
    /// for tie-breaking among equal-cost paths, never for correctness.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Offset applied to the blank's (row, col) when a tile slides in this
    /// direction; `Up` means a tile moves up, so the blank moves down.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (1, 0),
            Move::Left => (0, 1),
            Move::Down => (-1, 0),
            Move::Right => (0, -1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// Rejected starting grids. Construction is the only place a malformed
/// arrangement can enter the system; every operation after that point is
/// total over valid boards.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell value {0} is outside 0..=8")]
    ValueOutOfRange(u8),
    #[error("cell value {0} appears more than once")]
    DuplicateValue(u8),
}

/// One arrangement of the nine cells, 0 denoting the blank.
///
/// Boards are immutable values: every transition produces a new `Board`, so
/// configurations queued in a search frontier never alias each other. The
/// blank index is cached alongside the cells to avoid rescanning on every
/// move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; CELLS],
    blank: usize,
}

impl Board {
    /// Builds a board from rows, rejecting anything that is not a
    /// permutation of 0..=8.
    pub fn new(rows: [[u8; SIZE]; SIZE]) -> Result<Self, BoardError> {
        let mut cells = [0u8; CELLS];
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                cells[i * SIZE + j] = value;
            }
        }

        let mut seen = [false; CELLS];
        for &value in &cells {
            let slot = usize::from(value);
            if slot >= CELLS {
                return Err(BoardError::ValueOutOfRange(value));
            }
            if seen[slot] {
                return Err(BoardError::DuplicateValue(value));
            }
            seen[slot] = true;
        }

        Ok(Self::from_cells(cells))
    }

    /// The canonical solved board.
    pub fn goal() -> Self {
        Self {
            cells: GOAL_CELLS,
            blank: CELLS - 1,
        }
    }

    /// A uniformly random arrangement. No parity filtering is applied, so
    /// roughly half of the boards this produces are unsolvable; callers who
    /// care can check [`Board::is_solvable`].
    pub fn random(rng: &mut impl Rng) -> Self {
        let mut cells: [u8; CELLS] = core::array::from_fn(|i| i as u8);
        cells.shuffle(rng);
        Self::from_cells(cells)
    }

    fn from_cells(cells: [u8; CELLS]) -> Self {
        let blank = cells
            .iter()
            .position(|&value| value == 0)
            .expect("board invariant violated: no blank cell");
        Self { cells, blank }
    }

    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / SIZE, self.blank % SIZE)
    }

    pub fn cell(&self, row: usize, col: usize) -> u8 {
        self.cells[row * SIZE + col]
    }

    /// Slides a tile into the blank, returning the resulting board, or
    /// `None` when the move would reach outside the grid.
    pub fn apply_move(&self, movement: Move) -> Option<Self> {
        let (dx, dy) = movement.as_offset();

        let new_x = (self.blank / SIZE) as isize + dx;
        let new_y = (self.blank % SIZE) as isize + dy;

        if new_x >= 0 && new_x < SIZE as isize && new_y >= 0 && new_y < SIZE as isize {
            let target = new_x as usize * SIZE + new_y as usize;
            let mut cells = self.cells;
            cells.swap(self.blank, target);
            Some(Self {
                cells,
                blank: target,
            })
        } else {
            None
        }
    }

    /// Every board one blank-swap away, in [`Move::ALL`] order: 2 results
    /// when the blank is in a corner, 3 on an edge, 4 in the center.
    pub fn successors(&self) -> Vec<Self> {
        Move::ALL
            .iter()
            .filter_map(|&movement| self.apply_move(movement))
            .collect()
    }

    pub fn is_goal(&self) -> bool {
        self.cells == GOAL_CELLS
    }

    /// Canonical key: 4 bits per cell in row-major order (36 significant
    /// bits). Two boards are equal iff their keys are equal.
    pub fn key(&self) -> u64 {
        self.cells
            .iter()
            .fold(0u64, |acc, &value| (acc << 4) | u64::from(value))
    }

    /// Sum of Manhattan distances of the non-blank tiles to their solved
    /// positions. Zero exactly at the goal; admissible and consistent for
    /// the unit-cost move metric.
    pub fn manhattan_distance(&self) -> u32 {
        let mut distance = 0u32;
        for (index, &value) in self.cells.iter().enumerate() {
            if value == 0 {
                continue;
            }
            let target = usize::from(value) - 1;
            distance += (index / SIZE).abs_diff(target / SIZE) as u32;
            distance += (index % SIZE).abs_diff(target % SIZE) as u32;
        }
        distance
    }

    /// Inversion-parity solvability test (odd-width rule: solvable iff the
    /// inversion count is even). The searches never consult this; it exists
    /// so callers can recognize boards on which they would exhaust the whole
    /// reachable half of the permutation group.
    pub fn is_solvable(&self) -> bool {
        self.count_inversions() % 2 == 0
    }

    fn count_inversions(&self) -> usize {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(i, &value)| {
                self.cells[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < value)
                    .count()
            })
            .sum()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                write!(f, "{:2} ", self.cell(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board(rows: [[u8; SIZE]; SIZE]) -> Board {
        Board::new(rows).unwrap()
    }

    #[test]
    fn construction_rejects_out_of_range_values() {
        let result = Board::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(result, Err(BoardError::ValueOutOfRange(9)));
    }

    #[test]
    fn construction_rejects_duplicates() {
        let result = Board::new([[1, 2, 3], [4, 5, 6], [7, 8, 8]]);
        assert_eq!(result, Err(BoardError::DuplicateValue(8)));
    }

    #[test]
    fn goal_is_goal() {
        assert!(Board::goal().is_goal());
        assert_eq!(Board::goal().blank_position(), (2, 2));
    }

    #[test]
    fn successor_count_matches_blank_position() {
        // Blank in a corner.
        assert_eq!(board([[0, 1, 2], [3, 4, 5], [6, 7, 8]]).successors().len(), 2);
        // Blank on an edge.
        assert_eq!(board([[1, 0, 2], [3, 4, 5], [6, 7, 8]]).successors().len(), 3);
        // Blank in the center.
        assert_eq!(board([[1, 2, 3], [4, 0, 5], [6, 7, 8]]).successors().len(), 4);
    }

    #[test]
    fn successors_differ_by_one_adjacent_swap() {
        let start = board([[1, 2, 3], [4, 0, 5], [6, 7, 8]]);
        for successor in start.successors() {
            let differing: Vec<usize> = (0..CELLS)
                .filter(|&i| start.cells[i] != successor.cells[i])
                .collect();
            assert_eq!(differing.len(), 2);
            // One of the two changed cells is the blank on each side.
            assert!(differing.contains(&start.blank));
            assert!(differing.contains(&successor.blank));

            let mut sorted = successor.cells;
            sorted.sort_unstable();
            assert_eq!(sorted, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
        }
    }

    #[test]
    fn moves_out_of_bounds_are_rejected() {
        let goal = Board::goal();
        // Blank is bottom-right; no tile can slide up or leftwards into it.
        assert!(goal.apply_move(Move::Up).is_none());
        assert!(goal.apply_move(Move::Left).is_none());
        assert!(goal.apply_move(Move::Down).is_some());
        assert!(goal.apply_move(Move::Right).is_some());
    }

    #[test]
    fn opposite_moves_cancel() {
        let start = board([[1, 2, 3], [4, 0, 5], [6, 7, 8]]);
        for movement in Move::ALL {
            let there = start.apply_move(movement).unwrap();
            let back = there.apply_move(movement.opposite()).unwrap();
            assert_eq!(back, start);
        }
    }

    #[test]
    fn heuristic_is_zero_only_at_goal() {
        assert_eq!(Board::goal().manhattan_distance(), 0);

        let one_off = board([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        assert_eq!(one_off.manhattan_distance(), 1);

        let far = board([[8, 7, 6], [5, 4, 3], [2, 1, 0]]);
        assert!(far.manhattan_distance() > 0);
    }

    #[test]
    fn keys_agree_with_board_equality() {
        let a = board([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        let b = board([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        let c = board([[1, 2, 3], [4, 5, 6], [0, 7, 8]]);
        assert_eq!(a.key(), b.key());
        assert_ne!(a.key(), c.key());
        assert_eq!(Board::goal().key(), 0x0001_2345_6780);
    }

    #[test]
    fn solvability_parity() {
        assert!(Board::goal().is_solvable());
        // Swapping two adjacent tiles (blank fixed) flips the parity class.
        assert!(!board([[2, 1, 3], [4, 5, 6], [7, 8, 0]]).is_solvable());
    }

    #[test]
    fn random_boards_are_permutations() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let b = Board::random(&mut rng);
            let mut sorted = b.cells;
            sorted.sort_unstable();
            assert_eq!(sorted, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
            assert_eq!(b.cells[b.blank], 0);
        }
    }

    #[test]
    fn seeded_random_boards_are_reproducible() {
        let a = Board::random(&mut StdRng::seed_from_u64(11));
        let b = Board::random(&mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }
}
