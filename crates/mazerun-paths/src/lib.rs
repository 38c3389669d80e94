//! Optimal solvers for weighted mazes.
//!
//! Both solvers share one best-first relaxation skeleton with lazy deletion
//! of stale heap entries:
//!
//! - **Dijkstra** ([`Dijkstra`]) orders the frontier by cost so far.
//! - **A\*** ([`AStar`]) adds a Manhattan estimate scaled to the grid's
//!   cheapest step, which keeps it optimal when some cells weigh 0.
//!
//! [`component`] and [`connected`] answer flood-fill reachability queries.
//!
//! Scratch arrays are allocated per call and dropped on return.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod cc;
mod dijkstra;
mod distance;
mod search;
mod traits;

pub use astar::AStar;
pub use cc::{component, connected};
pub use dijkstra::Dijkstra;
pub use distance::{ManhattanPather, manhattan};
pub use search::{SearchOutcome, UNREACHABLE};
pub use traits::{AstarPather, Pather, WeightedPather};
