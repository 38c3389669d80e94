use mazerun_core::{Grid, Pos};

use crate::traits::{AstarPather, Pather, WeightedPather};

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// A grid pather whose heuristic is the Manhattan distance measured in units
/// of the cheapest step the grid offers.
///
/// For a target `d > 0` steps away at least `d - 1` intermediate cells are
/// entered, each costing at least `step`, and the target itself costs its own
/// weight. The estimate `step * (d - 1) + min(step, weight(target))` is
/// therefore admissible and consistent even when some cells weigh 0. With
/// every weight equal to 1 it is exactly the Manhattan distance.
///
/// `step` ignores the start and goal cells, so the estimate is meant for
/// searches toward the grid's own goal.
#[derive(Debug, Clone, Copy)]
pub struct ManhattanPather<'a> {
    grid: &'a Grid,
    step: u64,
}

impl<'a> ManhattanPather<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        let (start, goal) = (grid.start(), grid.goal());
        let step = grid
            .cells()
            .iter()
            .filter(|c| c.is_passable() && c.pos != start && c.pos != goal)
            .map(|c| u64::from(c.weight))
            .min()
            .unwrap_or_else(|| grid.at(goal).map_or(0, |c| u64::from(c.weight)));
        Self { grid, step }
    }

    /// The cheapest intermediate step of the grid.
    #[inline]
    pub fn step(&self) -> u64 {
        self.step
    }
}

impl Pather for ManhattanPather<'_> {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        self.grid.neighbors(p, buf);
    }
}

impl WeightedPather for ManhattanPather<'_> {
    fn cost(&self, from: Pos, to: Pos) -> u64 {
        self.grid.cost(from, to)
    }
}

impl AstarPather for ManhattanPather<'_> {
    fn estimate(&self, from: Pos, to: Pos) -> u64 {
        let d = manhattan(from, to) as u64;
        if d == 0 {
            return 0;
        }
        let last = self.grid.at(to).map_or(0, |c| u64::from(c.weight));
        self.step * (d - 1) + self.step.min(last)
    }
}
