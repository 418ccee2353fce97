use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::puzzle::Board;

/// Once the temperature decays below this, the walk restarts from the best
/// board seen so far instead of freezing into a local optimum.
const RESTART_THRESHOLD: f64 = 0.01;

/// Tunables for [`solve`]. The defaults match the classic schedule: 10000
/// iterations, unit starting temperature, 0.995 multiplicative cooling.
#[derive(Debug, Clone)]
pub struct AnnealingConfig {
    pub max_iterations: usize,
    pub initial_temperature: f64,
    pub cooling_rate: f64,
    /// Seed for the walk's RNG; `None` draws one from entropy. Fixing the
    /// seed makes a run fully reproducible.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            initial_temperature: 1.0,
            cooling_rate: 0.995,
            seed: None,
        }
    }
}

/// Simulated annealing over the sliding-tile graph, with the Manhattan
/// distance as the energy function.
///
/// The return value is a trace, not a solution certificate: it starts at
/// `start`, records every accepted move (improving or not), and is returned
/// as-is either the moment the energy hits zero or when the iteration
/// budget runs out. Unlike the breadth-first searches this never fails —
/// callers must check whether the final board is the goal. With
/// `max_iterations == 0` the trace is just the start board.
pub fn solve(start: Board, config: &AnnealingConfig) -> Vec<Board> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    solve_with_rng(start, config, &mut rng)
}

/// [`solve`] with a caller-provided RNG, for tests that want to drive the
/// walk with a generator they control.
pub fn solve_with_rng(start: Board, config: &AnnealingConfig, rng: &mut impl Rng) -> Vec<Board> {
    let mut current = start;
    let mut current_energy = current.manhattan_distance();
    let mut best = current;
    let mut best_energy = current_energy;
    let mut temperature = config.initial_temperature;

    let mut path = vec![current];

    for iteration in 0..config.max_iterations {
        if current_energy == 0 {
            tracing::debug!(iteration, "annealing reached the goal");
            return path;
        }

        let successors = current.successors();
        let Some(&next) = successors.choose(rng) else {
            // Unreachable: every board has at least two successors.
            break;
        };
        let next_energy = next.manhattan_distance();

        if next_energy < current_energy {
            current = next;
            current_energy = next_energy;
            path.push(current);

            if current_energy < best_energy {
                best = current;
                best_energy = current_energy;
            }
        } else {
            // Metropolis rule: uphill moves pass with probability
            // exp(-delta / T). Accepted uphill moves do not touch `best`.
            let delta = f64::from(next_energy - current_energy);
            let acceptance = (-delta / temperature).exp();
            if rng.gen::<f64>() < acceptance {
                current = next;
                current_energy = next_energy;
                path.push(current);
            }
        }

        temperature *= config.cooling_rate;

        if temperature < RESTART_THRESHOLD {
            tracing::trace!(iteration, best_energy, "restarting from best board");
            current = best;
            current_energy = best_energy;
            temperature = config.initial_temperature * 0.5;
        }
    }

    tracing::debug!(
        best_energy,
        final_energy = current_energy,
        "annealing budget exhausted"
    );
    path
}
