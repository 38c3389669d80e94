use mazerun_core::{Grid, Path, Solver};

use crate::search::{Frontier, SearchOutcome, cells_of};

/// Uniform-cost search: optimal for any non-negative weights.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dijkstra;

impl Dijkstra {
    pub fn new() -> Self {
        Self
    }

    /// Compute the cheapest path from the grid's start to its goal.
    ///
    /// Returns `None` when the goal cannot be reached.
    pub fn search(&self, grid: &Grid) -> Option<SearchOutcome> {
        let mut frontier = Frontier::for_grid(grid);
        let found = frontier.search(grid, grid.start(), grid.goal(), |_| 0);
        let expanded = frontier.expanded();

        let Some((positions, cost)) = found else {
            log::debug!("dijkstra: goal unreachable after {expanded} expansions");
            return None;
        };
        log::debug!(
            "dijkstra: cost {cost}, {} cells, {expanded} expansions",
            positions.len()
        );
        Some(SearchOutcome {
            path: cells_of(grid, &positions),
            cost,
            expanded,
        })
    }
}

impl Solver for Dijkstra {
    fn name(&self) -> String {
        "Dijkstra's Algorithm".to_string()
    }

    fn solve(&self, grid: &Grid) -> Path {
        self.search(grid).map(|o| o.path).unwrap_or_default()
    }
}
