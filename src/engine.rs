//! Core state model for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Board`: An immutable 3x3 tile configuration, a permutation of the
//!   values 0 through 8 where 0 denotes the empty cell.
//! - `Move`: The four slide directions, in the fixed order used by move
//!   generation. The order matters for reproducible tie-breaking.
//! - Move generation (`successors`), scramble helpers for producing
//!   reachable instances, and an inversion-parity solvability test.

use crate::error::BoardError;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Width and height of the board. The puzzle is always 3x3.
pub const GRID_SIZE: usize = 3;

/// Number of cells on the board, including the empty cell.
pub const TILE_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A slide direction, expressed as the displacement of the empty cell.
///
/// `ALL` lists the variants in the order move generation visits them:
/// Right, Left, Down, Up. Equal-priority frontier entries and the child
/// ordering of the depth-limited search both inherit this order, so it is
/// part of the engine's observable behavior, not a cosmetic choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    /// Empty cell moves one column right: delta (0, 1).
    Right,
    /// Empty cell moves one column left: delta (0, -1).
    Left,
    /// Empty cell moves one row down: delta (1, 0).
    Down,
    /// Empty cell moves one row up: delta (-1, 0).
    Up,
}

impl Move {
    /// All four moves in generation order.
    pub const ALL: [Move; 4] = [Move::Right, Move::Left, Move::Down, Move::Up];

    /// Returns the (row, column) displacement of the empty cell for this move.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Move::Right => (0, 1),
            Move::Left => (0, -1),
            Move::Down => (1, 0),
            Move::Up => (-1, 0),
        }
    }
}

/// An immutable 3x3 tile configuration.
///
/// Every `Board` holds each value 0 through 8 exactly once; 0 is the empty
/// cell. The invariant is enforced at construction (`from_grid` and the
/// parser in `utils`) and preserved by `shifted`/`successors`, which only
/// perform legal slides. There is no way to mutate an existing board;
/// every transition produces a new value.
///
/// Two boards are equal iff every cell matches, and boards hash
/// accordingly, so they can be stored directly in closed/visited sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Returns the solved configuration, `[[0,1,2],[3,4,5],[6,7,8]]`.
    ///
    /// This is the goal state used throughout the binaries and tests.
    pub fn solved() -> Self {
        Board {
            grid: [[0, 1, 2], [3, 4, 5], [6, 7, 8]],
        }
    }

    /// Returns the classic benchmark start, `[[7,2,4],[5,0,6],[8,3,1]]`.
    ///
    /// Paired with [`Board::solved`] this is the fixed instance the
    /// strategies are compared on. Its Manhattan distance to the solved
    /// board is 18.
    pub fn classic_start() -> Self {
        Board {
            grid: [[7, 2, 4], [5, 0, 6], [8, 3, 1]],
        }
    }

    /// Creates a board from a raw grid, validating the permutation invariant.
    ///
    /// # Arguments
    /// * `grid`: A 3x3 array of tile values, 0 denoting the empty cell.
    ///
    /// # Returns
    /// * `Ok(Board)` if every value 0 through 8 appears exactly once.
    /// * `Err(BoardError::TileOutOfRange)` if a value exceeds 8.
    /// * `Err(BoardError::DuplicateTile)` if a value repeats. (With nine
    ///   in-range, duplicate-free cells, every value is necessarily
    ///   present, so a missing-tile case cannot arise separately.)
    pub fn from_grid(grid: [[u8; GRID_SIZE]; GRID_SIZE]) -> Result<Self, BoardError> {
        let mut seen = [false; TILE_COUNT];
        for row in &grid {
            for &value in row {
                if usize::from(value) >= TILE_COUNT {
                    return Err(BoardError::TileOutOfRange { value });
                }
                if seen[usize::from(value)] {
                    return Err(BoardError::DuplicateTile { value });
                }
                seen[usize::from(value)] = true;
            }
        }
        Ok(Board { grid })
    }

    /// Returns the tile at the specified row (`r`) and column (`c`).
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board dimensions.
    pub fn get_tile(&self, r: usize, c: usize) -> u8 {
        self.grid[r][c]
    }

    /// Locates the empty cell.
    ///
    /// # Returns
    /// The (row, column) of the cell holding 0.
    ///
    /// # Panics
    /// Panics if no cell holds 0. That would mean the permutation
    /// invariant was violated, which is a programming error; boards built
    /// through the public constructors cannot trigger it.
    pub fn empty_position(&self) -> (usize, usize) {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                if self.grid[r][c] == 0 {
                    return (r, c);
                }
            }
        }
        panic!("board invariant violated: no empty cell present");
    }

    /// Applies a single slide, if it stays in bounds.
    ///
    /// # Arguments
    /// * `mv`: The direction to move the empty cell.
    ///
    /// # Returns
    /// * `Some(Board)` with the empty cell swapped with its neighbor in the
    ///   given direction.
    /// * `None` if the move would take the empty cell off the board.
    pub fn shifted(&self, mv: Move) -> Option<Board> {
        let (r, c) = self.empty_position();
        let (dr, dc) = mv.offset();
        let nr = r as isize + dr;
        let nc = c as isize + dc;

        if nr < 0 || nr >= GRID_SIZE as isize || nc < 0 || nc >= GRID_SIZE as isize {
            return None;
        }
        let (nr, nc) = (nr as usize, nc as usize);

        let mut next = *self;
        next.grid[r][c] = next.grid[nr][nc];
        next.grid[nr][nc] = 0;
        Some(next)
    }

    /// Generates every board reachable by one legal slide.
    ///
    /// The results follow the fixed order of [`Move::ALL`]. A corner empty
    /// cell yields 2 boards, an edge 3, the center 4. Pure function of the
    /// input; the receiver is never modified.
    pub fn successors(&self) -> Vec<Board> {
        Move::ALL
            .iter()
            .filter_map(|&mv| self.shifted(mv))
            .collect()
    }

    /// Creates a reachable board by walking random legal moves from the
    /// solved configuration.
    ///
    /// Because only legal slides are applied, the result is always solvable
    /// back to [`Board::solved`]. The same seed always produces the same
    /// board, which keeps evaluation runs reproducible.
    ///
    /// # Arguments
    /// * `seed`: Seed for the random walk.
    /// * `steps`: Number of slides to apply. Note that random walks revisit
    ///   states, so the optimal solution depth is usually well below `steps`.
    pub fn scrambled(seed: u64, steps: usize) -> Self {
        let mut board = Board::solved();
        let mut rng = SmallRng::seed_from_u64(seed);

        let mut applied = 0;
        while applied < steps {
            let mv = Move::ALL[rng.gen_range(0..Move::ALL.len())];
            if let Some(next) = board.shifted(mv) {
                board = next;
                applied += 1;
            }
        }
        board
    }

    /// Counts inversions among the non-empty tiles in row-major order.
    ///
    /// An inversion is a pair of tiles where the higher value precedes the
    /// lower one. The empty cell is skipped.
    pub fn inversions(&self) -> usize {
        let flat: Vec<u8> = self
            .grid
            .iter()
            .flat_map(|row| row.iter().copied())
            .filter(|&v| v != 0)
            .collect();

        flat.iter()
            .enumerate()
            .map(|(i, &val)| flat[i + 1..].iter().filter(|&&next| next < val).count())
            .sum()
    }

    /// Tests whether `goal` is reachable from this board.
    ///
    /// Each slide preserves the inversion parity of the non-empty tiles on
    /// an odd-width board, and the 3x3 state space splits into exactly two
    /// orbits, so two boards are mutually reachable iff their parities
    /// match. The solvers themselves never call this; callers that want to
    /// reject hopeless instances up front can.
    pub fn solvable_to(&self, goal: &Board) -> bool {
        self.inversions() % 2 == goal.inversions() % 2
    }
}

impl fmt::Display for Board {
    /// Formats the board as three rows of tiles, the empty cell as '.'.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            for &value in row {
                if value == 0 {
                    write!(f, " .")?;
                } else {
                    write!(f, " {}", value)?;
                }
            }
            if r < GRID_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_board_layout() {
        let board = Board::solved();
        assert_eq!(board.get_tile(0, 0), 0);
        assert_eq!(board.get_tile(0, 1), 1);
        assert_eq!(board.get_tile(2, 2), 8);
        assert_eq!(board.empty_position(), (0, 0));
    }

    #[test]
    fn test_classic_start_layout() {
        let board = Board::classic_start();
        assert_eq!(board.get_tile(0, 0), 7);
        assert_eq!(board.empty_position(), (1, 1));
    }

    #[test]
    fn test_from_grid_valid() {
        let board = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]).unwrap();
        assert_eq!(board.empty_position(), (2, 2));
    }

    #[test]
    fn test_from_grid_rejects_out_of_range() {
        let result = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(result.unwrap_err(), BoardError::TileOutOfRange { value: 9 });
    }

    #[test]
    fn test_from_grid_rejects_duplicate() {
        let result = Board::from_grid([[0, 1, 2], [3, 4, 5], [6, 7, 7]]);
        assert_eq!(result.unwrap_err(), BoardError::DuplicateTile { value: 7 });
    }

    #[test]
    fn test_shifted_bounds() {
        // Solved board has the empty cell in the top-left corner.
        let board = Board::solved();
        assert!(board.shifted(Move::Left).is_none());
        assert!(board.shifted(Move::Up).is_none());
        assert!(board.shifted(Move::Right).is_some());
        assert!(board.shifted(Move::Down).is_some());
    }

    #[test]
    fn test_shifted_swaps_with_neighbor() {
        let board = Board::solved();
        let next = board.shifted(Move::Right).unwrap();
        assert_eq!(next.get_tile(0, 0), 1);
        assert_eq!(next.get_tile(0, 1), 0);
        assert_eq!(next.empty_position(), (0, 1));
        // The receiver is untouched.
        assert_eq!(board.empty_position(), (0, 0));
    }

    /// Counts cells that differ between two boards.
    fn diff_count(a: &Board, b: &Board) -> usize {
        let mut diffs = 0;
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                if a.get_tile(r, c) != b.get_tile(r, c) {
                    diffs += 1;
                }
            }
        }
        diffs
    }

    #[test]
    fn test_successors_corner_edge_center_counts() {
        let corner = Board::solved(); // empty at (0,0)
        assert_eq!(corner.successors().len(), 2);

        let edge = Board::from_grid([[1, 0, 2], [3, 4, 5], [6, 7, 8]]).unwrap();
        assert_eq!(edge.successors().len(), 3);

        let center = Board::from_grid([[1, 2, 3], [4, 0, 5], [6, 7, 8]]).unwrap();
        assert_eq!(center.successors().len(), 4);
    }

    #[test]
    fn test_successors_are_single_transpositions() {
        let board = Board::classic_start();
        for child in board.successors() {
            // Exactly the empty cell and one neighbor changed.
            assert_eq!(diff_count(&board, &child), 2);
            // The move carried the empty cell to a cell the parent's tile
            // vacated, so the swapped pair involves 0 on both sides.
            let (r, c) = board.empty_position();
            assert_ne!(child.get_tile(r, c), 0);
        }
    }

    #[test]
    fn test_successors_follow_move_order() {
        let center = Board::from_grid([[1, 2, 3], [4, 0, 5], [6, 7, 8]]).unwrap();
        let children = center.successors();
        let expected: Vec<Board> = Move::ALL
            .iter()
            .map(|&mv| center.shifted(mv).unwrap())
            .collect();
        assert_eq!(children, expected);
    }

    #[test]
    fn test_scrambled_is_deterministic_and_solvable() {
        let a = Board::scrambled(7, 40);
        let b = Board::scrambled(7, 40);
        assert_eq!(a, b, "same seed must produce the same board");

        let c = Board::scrambled(8, 40);
        assert_ne!(a, c, "different seeds should produce different boards");

        assert!(a.solvable_to(&Board::solved()));
    }

    #[test]
    fn test_inversion_parity_solvability() {
        let goal = Board::solved();
        assert_eq!(goal.inversions(), 0);

        // Classic start: 16 inversions, same (even) parity as the goal.
        let start = Board::classic_start();
        assert_eq!(start.inversions(), 16);
        assert!(start.solvable_to(&goal));

        // Swapping two tiles flips the parity and leaves the other orbit.
        let twisted = Board::from_grid([[0, 2, 1], [3, 4, 5], [6, 7, 8]]).unwrap();
        assert!(!twisted.solvable_to(&goal));
    }

    #[test]
    fn test_display_formatting() {
        let board = Board::solved();
        assert_eq!(format!("{}", board), " . 1 2\n 3 4 5\n 6 7 8");
    }
}
