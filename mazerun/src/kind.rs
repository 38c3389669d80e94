use std::str::FromStr;

use mazerun_core::{Grid, Path, Solver};
use mazerun_genetic::{FlatGa, GeneticParams, PopulationGa};
use mazerun_paths::{AStar, Dijkstra};

/// The solvers the runner knows about.
#[derive(Debug, Clone)]
pub enum SolverKind {
    Dijkstra(Dijkstra),
    AStar(AStar),
    /// Object-population genetic algorithm.
    Genetic(PopulationGa),
    /// Structure-of-arrays genetic algorithm.
    GeneticSoa(FlatGa),
}

/// A solver name that [`SolverKind::from_str`] does not recognise.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown solver `{0}` (expected dijkstra, astar, ga or ga-soa)")]
pub struct UnknownSolver(pub String);

impl SolverKind {
    /// One of each solver, genetic ones configured with `params`.
    pub fn all(params: GeneticParams) -> Vec<SolverKind> {
        vec![
            SolverKind::Dijkstra(Dijkstra::new()),
            SolverKind::AStar(AStar::new()),
            SolverKind::Genetic(PopulationGa::with_params(params)),
            SolverKind::GeneticSoa(FlatGa::with_params(params)),
        ]
    }

    /// Replace the parameters of a genetic solver. Other solvers are
    /// returned unchanged.
    pub fn with_genetic_params(self, params: GeneticParams) -> Self {
        match self {
            SolverKind::Genetic(_) => SolverKind::Genetic(PopulationGa::with_params(params)),
            SolverKind::GeneticSoa(_) => SolverKind::GeneticSoa(FlatGa::with_params(params)),
            other => other,
        }
    }

    pub fn genetic_params(&self) -> Option<&GeneticParams> {
        match self {
            SolverKind::Genetic(ga) => Some(ga.params()),
            SolverKind::GeneticSoa(ga) => Some(ga.params()),
            SolverKind::Dijkstra(_) | SolverKind::AStar(_) => None,
        }
    }

    /// Whether the solver always returns a cheapest path when one exists.
    pub fn is_optimal(&self) -> bool {
        matches!(self, SolverKind::Dijkstra(_) | SolverKind::AStar(_))
    }
}

impl FromStr for SolverKind {
    type Err = UnknownSolver;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(SolverKind::Dijkstra(Dijkstra::new())),
            "astar" | "a*" => Ok(SolverKind::AStar(AStar::new())),
            "ga" | "genetic" => Ok(SolverKind::Genetic(PopulationGa::new())),
            "ga-soa" | "soa" => Ok(SolverKind::GeneticSoa(FlatGa::new())),
            _ => Err(UnknownSolver(s.to_string())),
        }
    }
}

impl Solver for SolverKind {
    fn name(&self) -> String {
        match self {
            SolverKind::Dijkstra(s) => s.name(),
            SolverKind::AStar(s) => s.name(),
            SolverKind::Genetic(s) => s.name(),
            SolverKind::GeneticSoa(s) => s.name(),
        }
    }

    fn solve(&self, grid: &Grid) -> Path {
        match self {
            SolverKind::Dijkstra(s) => s.solve(grid),
            SolverKind::AStar(s) => s.solve(grid),
            SolverKind::Genetic(s) => s.solve(grid),
            SolverKind::GeneticSoa(s) => s.solve(grid),
        }
    }
}
