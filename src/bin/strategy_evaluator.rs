use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::heuristics::Heuristic;
use eight_puzzle_solver::solver::{solve, Strategy};
use std::time::Instant;

const NUM_SCRAMBLED_BOARDS: usize = 5;
const START_SEED: u64 = 0;
const SCRAMBLE_STEPS: usize = 40;
const DLS_DEPTH_LIMIT: u32 = 60;

fn strategies() -> Vec<(&'static str, Strategy)> {
    vec![
        ("A*/Manhattan", Strategy::AStar(Heuristic::Manhattan)),
        ("A*/Euclidean", Strategy::AStar(Heuristic::Euclidean)),
        ("Greedy", Strategy::GreedyBestFirst),
        ("DLS", Strategy::DepthLimited(DLS_DEPTH_LIMIT)),
    ]
}

fn evaluate(label: &str, start: &Board, goal: &Board) {
    println!("\nEvaluating {}:\n{}\n", label, start);

    for (name, strategy) in strategies() {
        let timer = Instant::now();
        let result = solve(strategy, start, goal);
        let elapsed_ms = timer.elapsed().as_secs_f64() * 1000.0;

        match result {
            Some(solution) => println!(
                "  {:<14} moves: {:<4} expanded: {:<7} time: {:.2} ms",
                name,
                solution.moves(),
                solution.expanded,
                elapsed_ms
            ),
            None => println!(
                "  {:<14} no solution (DLS limit {}), time: {:.2} ms",
                name, DLS_DEPTH_LIMIT, elapsed_ms
            ),
        }
    }
}

fn main() {
    let goal = Board::solved();

    println!(
        "Comparing {} strategies on the classic instance and {} scrambles...",
        strategies().len(),
        NUM_SCRAMBLED_BOARDS
    );

    evaluate("classic start", &Board::classic_start(), &goal);

    for i in 0..NUM_SCRAMBLED_BOARDS {
        let seed = START_SEED + i as u64;
        let start = Board::scrambled(seed, SCRAMBLE_STEPS);
        evaluate(&format!("scramble (seed {})", seed), &start, &goal);
    }

    println!("\n--- Evaluation complete ---");
}
