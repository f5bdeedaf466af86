//! The three search strategies over the 8-puzzle state graph.
//!
//! A* and Greedy Best-First share a frontier/closed-set structure: a
//! priority queue of discovered-but-unexpanded nodes and a set of already
//! expanded states. Depth-Limited Search is a recursive bounded DFS with a
//! visited set that grows monotonically for the whole search (see
//! `solve_depth_limited` for the exact semantics).
//!
//! Every solve call owns its frontier and visited structures, runs to
//! completion synchronously, and performs no I/O, so concurrent solves
//! over the same boards need no synchronization.

use crate::engine::Board;
use crate::heuristics::{manhattan, GoalPositions, Heuristic};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

/// Selects which search algorithm `solve` runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Strategy {
    /// A* with the given heuristic; optimal for admissible heuristics.
    AStar(Heuristic),
    /// Greedy Best-First Search ordered by Manhattan distance alone;
    /// returns valid but not necessarily minimal paths.
    GreedyBestFirst,
    /// Depth-Limited Search with the given depth limit.
    DepthLimited(u32),
}

/// A solution path found by one of the strategies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Ordered states from the start to the goal, both inclusive. Each
    /// consecutive pair differs by exactly one legal slide. A start equal
    /// to the goal yields a single-element path.
    pub path: Vec<Board>,
    /// Number of nodes the search expanded (popped and opened, or recursed
    /// into). The main cost figure for comparing strategies.
    pub expanded: usize,
}

impl Solution {
    /// Number of slides in the path.
    pub fn moves(&self) -> usize {
        self.path.len() - 1
    }
}

/// Solves the puzzle from `start` to `goal` with the chosen strategy.
///
/// # Returns
/// * `Some(Solution)` with a path from `start` to `goal`.
/// * `None` if no solution was found: for A*/Greedy the reachable state
///   space was exhausted, for Depth-Limited Search no path was found
///   within the depth limit. Both are normal outcomes, not faults.
pub fn solve(strategy: Strategy, start: &Board, goal: &Board) -> Option<Solution> {
    match strategy {
        Strategy::AStar(heuristic) => solve_astar(start, goal, heuristic),
        Strategy::GreedyBestFirst => solve_greedy(start, goal),
        Strategy::DepthLimited(limit) => solve_depth_limited(start, goal, limit),
    }
}

/// A frontier node: priority key, path cost, insertion number, state, and
/// the path from the start up to but not including `state`.
///
/// Ordering is ascending `(f, g, seq)`. The insertion sequence number makes
/// the tie-break among equal-priority entries explicit and deterministic
/// instead of leaning on any incidental ordering of the state encoding.
struct FrontierEntry {
    f: f64,
    g: u32,
    seq: u64,
    state: Board,
    path: Vec<Board>,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // f values are finite sums of tile distances; NaN cannot occur.
        self.f
            .partial_cmp(&other.f)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.g.cmp(&other.g))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A* search: frontier ordered by f = g + h with the chosen heuristic.
///
/// The goal test happens on pop, so the first goal popped carries a
/// minimal-f path. Entries whose state was already closed are skipped on
/// pop; pushing duplicates instead of re-prioritizing in place is expected
/// and harmless. With an admissible heuristic the returned path is optimal.
/// Exhausting the frontier (unsolvable instance) terminates with `None`;
/// the closed-set check guarantees no state is expanded twice, so
/// termination is unconditional on the finite state space.
pub fn solve_astar(start: &Board, goal: &Board, heuristic: Heuristic) -> Option<Solution> {
    let goals = GoalPositions::new(goal);
    let mut frontier = BinaryHeap::new();
    let mut closed: HashSet<Board> = HashSet::new();
    let mut seq = 0u64;
    let mut expanded = 0usize;

    frontier.push(Reverse(FrontierEntry {
        f: heuristic.evaluate(start, &goals),
        g: 0,
        seq,
        state: *start,
        path: Vec::new(),
    }));

    while let Some(Reverse(entry)) = frontier.pop() {
        if entry.state == *goal {
            let mut path = entry.path;
            path.push(entry.state);
            return Some(Solution { path, expanded });
        }

        if !closed.insert(entry.state) {
            continue; // duplicate frontier entry, already expanded
        }
        expanded += 1;

        for child in entry.state.successors() {
            if closed.contains(&child) {
                continue;
            }
            let g = entry.g + 1;
            let mut path = entry.path.clone();
            path.push(entry.state);
            seq += 1;
            frontier.push(Reverse(FrontierEntry {
                f: f64::from(g) + heuristic.evaluate(&child, &goals),
                g,
                seq,
                state: child,
                path,
            }));
        }
    }

    None
}

/// Greedy Best-First Search: frontier ordered by Manhattan distance alone.
///
/// Identical frontier/closed-set structure to A* but without the path-cost
/// term, trading optimality for faster convergence. The returned path is
/// valid (every step a legal slide, final state the goal) but its length
/// carries no guarantee. The heuristic is fixed to Manhattan.
pub fn solve_greedy(start: &Board, goal: &Board) -> Option<Solution> {
    let goals = GoalPositions::new(goal);
    let mut frontier = BinaryHeap::new();
    let mut closed: HashSet<Board> = HashSet::new();
    let mut seq = 0u64;
    let mut expanded = 0usize;

    frontier.push(Reverse(FrontierEntry {
        f: f64::from(manhattan(start, &goals)),
        g: 0,
        seq,
        state: *start,
        path: Vec::new(),
    }));

    while let Some(Reverse(entry)) = frontier.pop() {
        if entry.state == *goal {
            let mut path = entry.path;
            path.push(entry.state);
            return Some(Solution { path, expanded });
        }

        if !closed.insert(entry.state) {
            continue;
        }
        expanded += 1;

        for child in entry.state.successors() {
            if closed.contains(&child) {
                continue;
            }
            let mut path = entry.path.clone();
            path.push(entry.state);
            seq += 1;
            frontier.push(Reverse(FrontierEntry {
                f: f64::from(manhattan(&child, &goals)),
                g: entry.g + 1,
                seq,
                state: child,
                path,
            }));
        }
    }

    None
}

/// Depth-Limited Search with a monotonic visited set.
///
/// The goal test runs before the depth test, so a start equal to the goal
/// succeeds at any limit, including 0. A branch whose remaining depth hits
/// 0 fails locally, not globally.
///
/// The visited set is shared across the whole search and never shrinks on
/// backtrack: a state entered by one branch stays pruned for all later
/// sibling branches. This makes the search a cycle-avoiding bounded DFS
/// rather than a classical depth-limited search with branch-local visited
/// sets, and it can miss paths the branch-local variant would find. The
/// upside is that no state is ever entered twice, so the search always
/// terminates even with a depth limit far beyond the state-space diameter.
pub fn solve_depth_limited(start: &Board, goal: &Board, depth_limit: u32) -> Option<Solution> {
    let mut visited: HashSet<Board> = HashSet::new();
    let mut expanded = 0usize;
    let path = depth_limited_recursive(
        start,
        goal,
        depth_limit,
        Vec::new(),
        &mut visited,
        &mut expanded,
    )?;
    Some(Solution { path, expanded })
}

fn depth_limited_recursive(
    state: &Board,
    goal: &Board,
    depth: u32,
    path: Vec<Board>,
    visited: &mut HashSet<Board>,
    expanded: &mut usize,
) -> Option<Vec<Board>> {
    if state == goal {
        let mut full_path = path;
        full_path.push(*state);
        return Some(full_path);
    }

    if depth == 0 {
        return None;
    }

    visited.insert(*state);
    *expanded += 1;

    for child in state.successors() {
        if visited.contains(&child) {
            continue;
        }
        let mut child_path = path.clone();
        child_path.push(*state);
        if let Some(solution) =
            depth_limited_recursive(&child, goal, depth - 1, child_path, visited, expanded)
        {
            return Some(solution);
        }
    }

    None
}
