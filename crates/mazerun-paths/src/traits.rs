use mazerun_core::{Grid, Pos};

/// Minimal pathfinding interface: provides neighbor enumeration.
pub trait Pather {
    /// Append the cells reachable in one step from `p` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>);
}

/// Pather with weighted (non-negative) steps.
pub trait WeightedPather: Pather {
    /// Cost of stepping from `from` into the adjacent cell `to`.
    fn cost(&self, from: Pos, to: Pos) -> u64;
}

/// Full A* pather with a consistent heuristic.
pub trait AstarPather: WeightedPather {
    /// Estimate of the cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Pos, to: Pos) -> u64;
}

impl Pather for Grid {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.is_valid(n)));
    }
}

/// Entering a cell costs its weight.
impl WeightedPather for Grid {
    fn cost(&self, _from: Pos, to: Pos) -> u64 {
        self.at(to).map_or(0, |c| u64::from(c.weight))
    }
}
