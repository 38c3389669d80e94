//! The [`Path`] result returned by every solver.

use crate::cell::Cell;
use crate::grid::Grid;

/// An ordered walk of cells from the start toward the goal.
///
/// An empty path means "no path found". A non-empty path always begins at
/// the start cell; it reached the goal iff its last cell is the goal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    /// Wrap a cell sequence.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// The "no path found" result.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the last cell is the goal.
    pub fn reached_goal(&self) -> bool {
        self.cells.last().is_some_and(|c| c.is_goal)
    }

    /// Sum of the weights of every cell entered after the start.
    pub fn total_cost(&self) -> u64 {
        self.cells.iter().skip(1).map(|c| u64::from(c.weight)).sum()
    }

    /// No cell appears twice.
    pub fn is_simple(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.cells.len());
        self.cells.iter().all(|c| seen.insert(c.pos))
    }

    /// Every step moves to a 4-adjacent, passable cell of `grid`.
    pub fn is_connected(&self, grid: &Grid) -> bool {
        self.cells.iter().all(|c| grid.is_valid(c.pos))
            && self
                .cells
                .windows(2)
                .all(|w| w[0].pos.is_adjacent(w[1].pos))
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Pos;
    use crate::grid::GridBuilder;

    fn line() -> Grid {
        GridBuilder::new(1, 4)
            .fill_weight(2)
            .start(Pos::new(0, 0))
            .goal(Pos::new(0, 3))
            .build()
            .unwrap()
    }

    fn cells(g: &Grid, cols: &[i32]) -> Path {
        Path::new(cols.iter().map(|&c| *g.at(Pos::new(0, c)).unwrap()).collect())
    }

    #[test]
    fn empty_path_is_not_found() {
        let p = Path::empty();
        assert!(p.is_empty());
        assert!(!p.reached_goal());
        assert_eq!(p.total_cost(), 0);
    }

    #[test]
    fn cost_skips_the_start_cell() {
        let g = line();
        let p = cells(&g, &[0, 1, 2, 3]);
        assert!(p.reached_goal());
        assert_eq!(p.total_cost(), 6);
    }

    #[test]
    fn simple_and_connected() {
        let g = line();
        assert!(cells(&g, &[0, 1, 2]).is_simple());
        assert!(!cells(&g, &[0, 1, 0]).is_simple());
        assert!(cells(&g, &[0, 1, 2]).is_connected(&g));
        assert!(!cells(&g, &[0, 2]).is_connected(&g));
    }
}
