//! **mazerun**: load a weighted maze and run solvers on it.
//!
//! This is the facade of the workspace. It re-exports the maze model from
//! [`mazerun_core`], the optimal solvers from [`mazerun_paths`] and the
//! genetic solvers from [`mazerun_genetic`], and adds what the `mazerun`
//! binary needs on top: a closed set of solver choices ([`SolverKind`]),
//! timed runs ([`run`] / [`RunReport`]) and the TOML configuration file
//! ([`Config`]).
//!
//! ```
//! use mazerun::{AStar, SolverKind, parse_maze};
//!
//! let grid = parse_maze("S \"1\" \"1\"\n# # G").unwrap();
//! let report = mazerun::run(&SolverKind::AStar(AStar::new()), &grid);
//! assert!(report.success);
//! assert_eq!(report.cost, 2);
//! assert_eq!(report.path.len(), 4);
//! ```

mod config;
mod kind;
mod report;

pub use config::Config;
pub use kind::{SolverKind, UnknownSolver};
pub use report::{RunReport, run};

pub use mazerun_core::{
    Cell, Grid, GridBuilder, GridError, ParseError, Path, Pos, Solver, load_maze, parse_maze,
};
pub use mazerun_genetic::{FlatGa, GaOutcome, GeneticParams, PopulationGa};
pub use mazerun_paths::{AStar, Dijkstra, SearchOutcome};
