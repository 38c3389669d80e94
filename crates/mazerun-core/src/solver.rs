use crate::grid::Grid;
use crate::path::Path;

/// The capability every maze solver exposes.
///
/// `solve` borrows the grid read-only for the duration of the call and keeps
/// no reference to it afterwards. Failing to reach the goal is not an error:
/// it is reported as an empty [`Path`], or, for approximate solvers, a
/// best-effort path whose last cell is not the goal.
pub trait Solver {
    /// Human-readable name, possibly embedding tunable parameters.
    fn name(&self) -> String;

    /// Search `grid` for a path from its start to its goal.
    fn solve(&self, grid: &Grid) -> Path;
}

impl<S: Solver + ?Sized> Solver for &S {
    fn name(&self) -> String {
        (**self).name()
    }

    fn solve(&self, grid: &Grid) -> Path {
        (**self).solve(grid)
    }
}

impl<S: Solver + ?Sized> Solver for Box<S> {
    fn name(&self) -> String {
        (**self).name()
    }

    fn solve(&self, grid: &Grid) -> Path {
        (**self).solve(grid)
    }
}
