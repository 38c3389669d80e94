//! Genetic-algorithm maze solvers.
//!
//! A genome is a fixed-length sequence of moves ([`Move`]). Walking it from
//! the start of the maze yields a fitness: reaching the goal scores
//! [`SUCCESS_FITNESS`] minus the path cost, anything else scores the negated
//! squared distance to the goal. Two solvers share the operators and differ
//! only in how the population is laid out in memory:
//!
//! - [`PopulationGa`] keeps one genome buffer per individual and sorts the
//!   whole population every generation.
//! - [`FlatGa`] stores every genome in one contiguous buffer with parallel
//!   fitness arrays, and only partially orders the population to pick elites.
//!
//! Both evaluate and breed in parallel with rayon. With a fixed seed
//! ([`GeneticParams::with_seed`]) a run is reproducible regardless of the
//! number of worker threads.

mod config;
mod flat;
mod incumbent;
mod maze;
mod ops;
mod population;
mod reconstruct;

pub use config::{
    DEFAULT_ELITISM, DEFAULT_GENERATIONS, DEFAULT_MUTATION_RATE, GUIDED_SHARE, GeneticParams,
    MAX_DEFAULT_GENOME, MAX_DEFAULT_POPULATION, MIN_DEFAULT_POPULATION, ResolvedParams,
    STAGNATION_LIMIT, SUCCESS_FITNESS, TOURNAMENT_SIZE,
};
pub use flat::FlatGa;
pub use maze::Move;
pub use population::PopulationGa;

use mazerun_core::{Grid, Path};

/// Everything a genetic run produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaOutcome {
    /// Loop-free path of the best genome. Empty when the goal is unreachable.
    pub path: Path,
    /// Generations actually evaluated.
    pub generations: usize,
    pub best_fitness: f64,
    pub reached_goal: bool,
}

/// The outcome for a grid whose goal cannot be reached from its start.
///
/// No genome can succeed there, so evolving would only burn the generation
/// budget before returning a path that ends short of the goal.
pub(crate) fn unreachable_outcome(grid: &Grid) -> Option<GaOutcome> {
    if mazerun_paths::connected(grid, grid.start(), grid.goal()) {
        return None;
    }
    log::debug!("goal {} is not reachable from {}", grid.goal(), grid.start());
    Some(GaOutcome {
        path: Path::empty(),
        generations: 0,
        best_fitness: f64::NEG_INFINITY,
        reached_goal: false,
    })
}
