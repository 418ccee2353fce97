use crossterm::style::Stylize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use eight_puzzle::{AnnealingConfig, Board, EightPuzzle, SearchError};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::from_entropy();

    // Redraw until the shuffle lands in the solvable parity class, so the
    // demo always has something to show. The library itself never filters.
    let puzzle = loop {
        let candidate = EightPuzzle::random(&mut rng);
        if candidate.start().is_solvable() {
            break candidate;
        }
    };

    println!("Initial state:\n{}", puzzle.start());
    println!("Goal state:\n{}", Board::goal());

    println!("{}", "Solving with breadth-first search...".bold());
    report(puzzle.solve_bfs());

    println!("{}", "Solving with bidirectional search...".bold());
    report(puzzle.solve_bidirectional());

    println!("{}", "Solving with simulated annealing...".bold());
    let trace = puzzle.solve_annealing(&AnnealingConfig::default());
    match trace.last() {
        Some(last) if last.is_goal() => {
            let line = format!("Reached the goal after {} accepted moves", trace.len() - 1);
            println!("{}", line.green());
        }
        Some(last) => {
            let line = format!(
                "Stopped {} tile moves short of the goal after {} accepted moves",
                last.manhattan_distance(),
                trace.len() - 1
            );
            println!("{}", line.yellow());
        }
        None => unreachable!("the trace always contains the start board"),
    }
}

fn report(result: Result<Vec<Board>, SearchError>) {
    match result {
        Ok(path) => {
            let line = format!("Found a solution in {} moves", path.len());
            println!("{}", line.green());
        }
        Err(err) => println!("{}", err.to_string().red()),
    }
}
