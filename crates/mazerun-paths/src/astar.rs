use mazerun_core::{Grid, Path, Solver};

use crate::distance::ManhattanPather;
use crate::search::{Frontier, SearchOutcome, cells_of};
use crate::traits::AstarPather;

/// Heuristic-guided search using [`ManhattanPather`]'s estimate.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AStar;

impl AStar {
    pub fn new() -> Self {
        Self
    }

    /// Compute the cheapest path from the grid's start to its goal.
    ///
    /// Returns `None` when the goal cannot be reached. The returned cost is
    /// the one the goal had when it was popped, which equals Dijkstra's.
    pub fn search(&self, grid: &Grid) -> Option<SearchOutcome> {
        let pather = ManhattanPather::new(grid);
        let goal = grid.goal();
        let mut frontier = Frontier::for_grid(grid);
        let found = frontier.search(&pather, grid.start(), goal, |p| {
            pather.estimate(p, goal)
        });
        let expanded = frontier.expanded();

        let Some((positions, cost)) = found else {
            log::debug!("astar: goal unreachable after {expanded} expansions");
            return None;
        };
        log::debug!(
            "astar: cost {cost}, {} cells, {expanded} expansions (step {})",
            positions.len(),
            pather.step()
        );
        Some(SearchOutcome {
            path: cells_of(grid, &positions),
            cost,
            expanded,
        })
    }
}

impl Solver for AStar {
    fn name(&self) -> String {
        "A* Search".to_string()
    }

    fn solve(&self, grid: &Grid) -> Path {
        self.search(grid).map(|o| o.path).unwrap_or_default()
    }
}
