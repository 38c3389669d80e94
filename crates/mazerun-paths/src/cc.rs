//! Connectivity queries.

use mazerun_core::{Grid, Pos};

use crate::traits::Pather;

/// Flood-fill from `from` and return every cell reachable from it, `from`
/// included. Returns an empty vector when `from` is not a passable cell.
pub fn component(grid: &Grid, from: Pos) -> Vec<Pos> {
    let Some(start) = grid.index(from) else {
        return Vec::new();
    };
    if !grid.is_valid(from) {
        return Vec::new();
    }

    let mut seen = vec![false; grid.area()];
    let mut stack = vec![start];
    let mut out = Vec::new();
    let mut nbuf = Vec::with_capacity(4);
    seen[start] = true;

    // Iterative DFS from `start`.
    while let Some(ci) = stack.pop() {
        let cp = grid.pos(ci);
        out.push(cp);
        nbuf.clear();
        grid.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            if let Some(ni) = grid.index(np) {
                if !seen[ni] {
                    seen[ni] = true;
                    stack.push(ni);
                }
            }
        }
    }
    out
}

/// Whether a walk of passable cells links `a` and `b`.
pub fn connected(grid: &Grid, a: Pos, b: Pos) -> bool {
    component(grid, a).contains(&b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazerun_core::GridBuilder;

    fn split() -> Grid {
        // S # .
        // . # G
        GridBuilder::new(2, 3)
            .start(Pos::new(0, 0))
            .goal(Pos::new(1, 2))
            .wall(Pos::new(0, 1))
            .wall(Pos::new(1, 1))
            .build()
            .unwrap()
    }

    #[test]
    fn component_stops_at_walls() {
        let g = split();
        let mut c = component(&g, g.start());
        c.sort();
        assert_eq!(c, vec![Pos::new(0, 0), Pos::new(1, 0)]);
        assert!(!connected(&g, g.start(), g.goal()));
        assert!(connected(&g, g.goal(), Pos::new(0, 2)));
    }

    #[test]
    fn walls_and_outside_have_no_component() {
        let g = split();
        assert!(component(&g, Pos::new(0, 1)).is_empty());
        assert!(component(&g, Pos::new(9, 9)).is_empty());
    }
}
