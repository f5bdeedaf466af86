//! # Eight Puzzle Solver Library
//!
//! This library provides the core search engine for the classic 8-puzzle
//! (a 3x3 sliding-tile puzzle) together with three interchangeable search
//! strategies: A* (with a choice of heuristic), Greedy Best-First Search,
//! and Depth-Limited Search.
//!
//! It is used by two binaries:
//! - `puzzle_solver`: Solves a single board with a chosen strategy and
//!   prints the solution path step by step.
//! - `strategy_evaluator`: Runs every strategy head-to-head over a set of
//!   boards and reports path length, node expansions, and wall time.
//!
//! ## Modules
//! - `engine`: Contains the board representation (`Board`), the `Move` type
//!   with its fixed generation order, move generation, and scramble helpers.
//! - `solver`: Provides the `Strategy` selector, the `solve` entry point,
//!   and the three search implementations.
//! - `heuristics`: Defines the Manhattan and Euclidean distance estimators
//!   and the goal position lookup table they share.
//! - `utils`: Provides utility functions, such as parsing board
//!   configurations from strings.
//! - `error`: Defines the error type for malformed board input.

pub mod engine;
pub mod error;
pub mod heuristics;
pub mod solver;
pub mod utils;

// Items from sub-modules, if public, should be accessed via their full
// path, e.g., `eight_puzzle_solver::solver::solve`. This keeps the
// top-level library namespace cleaner.
