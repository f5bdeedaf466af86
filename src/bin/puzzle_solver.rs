use clap::{Parser, ValueEnum};
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::heuristics::Heuristic;
use eight_puzzle_solver::solver::{solve, Strategy};
use eight_puzzle_solver::utils::board_from_str_array;
use std::fs;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    /// A* with the chosen heuristic
    Astar,
    /// Greedy Best-First Search (Manhattan)
    Greedy,
    /// Depth-Limited Search
    Dls,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HeuristicArg {
    Manhattan,
    Euclidean,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Search strategy to run
    #[clap(short, long, value_enum, default_value = "astar")]
    strategy: StrategyArg,

    /// Heuristic for A* (greedy always uses manhattan)
    #[clap(long, value_enum, default_value = "manhattan")]
    heuristic: HeuristicArg,

    /// Depth limit for depth-limited search
    #[clap(short, long, default_value_t = 50)]
    depth: u32,

    /// Path to a board file (3 lines of 3 digits, 0 for the empty cell).
    /// Defaults to the classic start configuration.
    board_file: Option<PathBuf>,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    board_from_str_array(&lines).map_err(|e| format!("Invalid board format: {}", e))
}

fn main() {
    let args = Args::parse();

    let start = match &args.board_file {
        Some(path) => read_board_file(path)
            .unwrap_or_else(|e| panic!("Failed to load board from {}: {}", path.display(), e)),
        None => Board::classic_start(),
    };
    let goal = Board::solved();

    let heuristic = match args.heuristic {
        HeuristicArg::Manhattan => Heuristic::Manhattan,
        HeuristicArg::Euclidean => Heuristic::Euclidean,
    };
    let (strategy, label) = match args.strategy {
        StrategyArg::Astar => (
            Strategy::AStar(heuristic),
            format!("A* ({:?})", heuristic),
        ),
        StrategyArg::Greedy => (Strategy::GreedyBestFirst, "Greedy Best-First".to_string()),
        StrategyArg::Dls => (
            Strategy::DepthLimited(args.depth),
            format!("Depth-Limited (limit {})", args.depth),
        ),
    };

    println!("Start state:\n{}\n", start);
    println!("Goal state:\n{}\n", goal);
    if !start.solvable_to(&goal) {
        println!("Warning: start and goal are in different orbits; no solution can exist.\n");
    }
    println!("Searching with {}...\n", label);

    if let Some(solution) = solve(strategy, &start, &goal) {
        println!("Solution found: {} moves, {} nodes expanded\n", solution.moves(), solution.expanded);
        for (i, state) in solution.path.iter().enumerate() {
            println!("Step {}:\n{}\n", i, state);
        }
    } else {
        println!("No solution found.\n");
    }
}
