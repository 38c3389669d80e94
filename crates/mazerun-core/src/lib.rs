//! **mazerun-core**: the maze model shared by every solver.
//!
//! This crate provides the foundational types of the *mazerun* workspace:
//! grid coordinates, weighted cells, an immutable [`Grid`] with exactly one
//! start and one goal, the [`Path`] result, the [`Solver`] contract, and a
//! parser for the maze text format.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod parse;
pub mod path;
pub mod solver;

pub use cell::Cell;
pub use geom::Pos;
pub use grid::{Grid, GridBuilder, GridError};
pub use parse::{ParseError, load_maze, parse_maze};
pub use path::Path;
pub use solver::Solver;
