//! Distance-to-goal estimators for the 8-puzzle.
//!
//! Both heuristics sum a per-tile distance between each tile's current cell
//! and its cell in the goal board, skipping the empty cell, which follows
//! the standard 8-puzzle convention: the blank contributes no penalty.
//! Manhattan distance is integer-valued, admissible, and consistent (each
//! slide changes it by at most 1, matching the unit move cost). Euclidean
//! distance is also admissible but never tighter than Manhattan; it exists
//! as an alternative tie-breaking profile for A*.

use crate::engine::{Board, GRID_SIZE, TILE_COUNT};

/// Selects which distance estimator A* uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// Sum of |delta row| + |delta col| per non-empty tile.
    Manhattan,
    /// Sum of straight-line distances per non-empty tile.
    Euclidean,
}

impl Heuristic {
    /// Evaluates this heuristic for `state` against a goal position table.
    ///
    /// Manhattan values are exact integers widened to `f64` so both
    /// heuristics share one priority type in the frontier.
    pub fn evaluate(&self, state: &Board, goal: &GoalPositions) -> f64 {
        match self {
            Heuristic::Manhattan => f64::from(manhattan(state, goal)),
            Heuristic::Euclidean => euclidean(state, goal),
        }
    }
}

/// Per-tile goal cell lookup, built once per solve.
///
/// The reference lookup searched the goal board for each tile value on
/// every evaluation; besides the wasted work, an absent value would have
/// slipped through as an empty search result. Building the table up front
/// makes the lookup O(1) and turns the absent-value case into an immediate,
/// loud failure instead of a silent default.
pub struct GoalPositions {
    by_tile: [(usize, usize); TILE_COUNT],
}

impl GoalPositions {
    /// Builds the lookup table for `goal`.
    ///
    /// # Panics
    /// Panics if some value in 0..=8 has no cell in `goal`. Boards built
    /// through the public constructors are permutations, so this cannot
    /// happen for them; the guard exists so that a violated invariant
    /// fails fast rather than scoring a tile as already placed.
    pub fn new(goal: &Board) -> Self {
        let mut found: [Option<(usize, usize)>; TILE_COUNT] = [None; TILE_COUNT];
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                found[usize::from(goal.get_tile(r, c))] = Some((r, c));
            }
        }

        let mut by_tile = [(0usize, 0usize); TILE_COUNT];
        for (tile, pos) in found.iter().enumerate() {
            match pos {
                Some(p) => by_tile[tile] = *p,
                None => panic!("tile value {} has no position in the goal board", tile),
            }
        }
        GoalPositions { by_tile }
    }

    /// Returns the goal cell of `tile`.
    pub fn position_of(&self, tile: u8) -> (usize, usize) {
        self.by_tile[usize::from(tile)]
    }
}

/// Manhattan distance from `state` to the goal described by `goal`.
///
/// Zero exactly when every non-empty tile sits on its goal cell, which for
/// permutations of the same tile set means `state` equals the goal board.
pub fn manhattan(state: &Board, goal: &GoalPositions) -> u32 {
    let mut distance = 0u32;
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let value = state.get_tile(r, c);
            if value != 0 {
                let (gr, gc) = goal.position_of(value);
                distance += r.abs_diff(gr) as u32 + c.abs_diff(gc) as u32;
            }
        }
    }
    distance
}

/// Euclidean distance from `state` to the goal described by `goal`.
///
/// Per tile this is sqrt(dr^2 + dc^2), which never exceeds |dr| + |dc|, so
/// the total never exceeds the Manhattan distance.
pub fn euclidean(state: &Board, goal: &GoalPositions) -> f64 {
    let mut distance = 0.0f64;
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let value = state.get_tile(r, c);
            if value != 0 {
                let (gr, gc) = goal.position_of(value);
                let dr = r.abs_diff(gr) as f64;
                let dc = c.abs_diff(gc) as f64;
                distance += (dr * dr + dc * dc).sqrt();
            }
        }
    }
    distance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_positions_lookup() {
        let goal = Board::solved();
        let table = GoalPositions::new(&goal);
        assert_eq!(table.position_of(0), (0, 0));
        assert_eq!(table.position_of(5), (1, 2));
        assert_eq!(table.position_of(8), (2, 2));
    }

    #[test]
    fn test_manhattan_classic_start_is_18() {
        let table = GoalPositions::new(&Board::solved());
        assert_eq!(manhattan(&Board::classic_start(), &table), 18);
    }

    #[test]
    fn test_heuristics_zero_exactly_at_goal() {
        let goal = Board::solved();
        let table = GoalPositions::new(&goal);
        assert_eq!(manhattan(&goal, &table), 0);
        assert_eq!(euclidean(&goal, &table), 0.0);

        let off_by_one = goal.shifted(crate::engine::Move::Right).unwrap();
        assert!(manhattan(&off_by_one, &table) > 0);
        assert!(euclidean(&off_by_one, &table) > 0.0);
    }

    #[test]
    fn test_euclidean_classic_start_value() {
        let table = GoalPositions::new(&Board::solved());
        // Tiles 7, 6, 1 are a knight's-move away (sqrt 5), tiles 4 and 3 a
        // diagonal step (sqrt 2), and tiles 2, 5, 8 move in a straight line
        // for a combined 5.
        let expected = 3.0 * 5.0f64.sqrt() + 2.0 * 2.0f64.sqrt() + 5.0;
        let actual = euclidean(&Board::classic_start(), &table);
        assert!((actual - expected).abs() < 1e-9);
    }

    #[test]
    fn test_euclidean_never_exceeds_manhattan() {
        let table = GoalPositions::new(&Board::solved());
        for seed in 0..10 {
            let board = Board::scrambled(seed, 30);
            let m = f64::from(manhattan(&board, &table));
            let e = euclidean(&board, &table);
            assert!(e <= m + 1e-9, "euclidean {} exceeded manhattan {}", e, m);
            assert!(e >= 0.0);
        }
    }

    #[test]
    fn test_heuristic_evaluate_dispatch() {
        let table = GoalPositions::new(&Board::solved());
        let start = Board::classic_start();
        assert_eq!(Heuristic::Manhattan.evaluate(&start, &table), 18.0);
        assert!(Heuristic::Euclidean.evaluate(&start, &table) < 18.0);
    }
}
