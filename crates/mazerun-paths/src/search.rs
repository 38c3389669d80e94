use std::collections::BinaryHeap;

use mazerun_core::{Grid, Path, Pos};

use crate::traits::WeightedPather;

/// Sentinel cost meaning "not reached".
pub const UNREACHABLE: u64 = u64::MAX;

/// Result of a successful Dijkstra or A* search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Start to goal, inclusive.
    pub path: Path,
    /// Cost at which the goal was popped from the frontier.
    pub cost: u64,
    /// Number of nodes settled before the goal was popped.
    pub expanded: usize,
}

// ---------------------------------------------------------------------------
// Internal node for priority-queue searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct Node {
    g: u64,
    parent: usize,
    closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: usize::MAX,
            closed: false,
        }
    }
}

/// Heap entry. Carries the `g` it was pushed with so stale entries can be
/// recognised on pop.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    f: u64,
    g: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first. Among equal
        // f prefer the deeper node, then the lower index.
        other
            .f
            .cmp(&self.f)
            .then(self.g.cmp(&other.g))
            .then(other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// Scratch space for one best-first search over a `rows × cols` grid.
///
/// A `Frontier` is created by a single solve call and dropped when it
/// returns; nothing is shared between calls.
pub(crate) struct Frontier {
    rows: i32,
    cols: i32,
    nodes: Vec<Node>,
    nbuf: Vec<Pos>,
    expanded: usize,
}

impl Frontier {
    pub(crate) fn new(rows: i32, cols: i32) -> Self {
        let len = rows.max(0) as usize * cols.max(0) as usize;
        Self {
            rows,
            cols,
            nodes: vec![Node::default(); len],
            nbuf: Vec::with_capacity(4),
            expanded: 0,
        }
    }

    pub(crate) fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.rows(), grid.cols())
    }

    #[inline]
    fn idx(&self, p: Pos) -> Option<usize> {
        if p.row < 0 || p.col < 0 || p.row >= self.rows || p.col >= self.cols {
            return None;
        }
        Some(p.row as usize * self.cols as usize + p.col as usize)
    }

    #[inline]
    fn point(&self, idx: usize) -> Pos {
        let cols = self.cols as usize;
        Pos::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Number of nodes settled by the last search.
    pub(crate) fn expanded(&self) -> usize {
        self.expanded
    }

    /// Best-first search from `from` to `to`, ordered by `g + estimate(p)`.
    ///
    /// With `estimate` returning 0 this is Dijkstra; with a consistent
    /// estimate it is A*. The search stops when the goal is popped, never
    /// merely when it is first reached. Returns the positions from `from` to
    /// `to` inclusive together with the goal cost.
    pub(crate) fn search<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Pos,
        to: Pos,
        estimate: impl Fn(Pos) -> u64,
    ) -> Option<(Vec<Pos>, u64)> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        self.expanded = 0;
        self.nodes[start_idx].g = 0;

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: estimate(from),
            g: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].closed || current.g != self.nodes[ci].g {
                continue;
            }

            self.nodes[ci].closed = true;
            self.expanded += 1;

            if ci == goal_idx {
                break 'search true;
            }

            let current_g = current.g;
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + pather.cost(current_point, np);

                let n = &mut self.nodes[ni];
                if tentative_g >= n.g {
                    continue;
                }

                n.g = tentative_g;
                n.parent = ci;

                open.push(NodeRef {
                    idx: ni,
                    f: tentative_g + estimate(np),
                    g: tentative_g,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        // Reconstruct path.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some((path, self.nodes[goal_idx].g))
    }
}

/// Resolve positions to the grid's cells.
pub(crate) fn cells_of(grid: &Grid, positions: &[Pos]) -> Path {
    Path::new(
        positions
            .iter()
            .filter_map(|&p| grid.at(p).copied())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazerun_core::GridBuilder;

    #[test]
    fn heap_pops_smallest_f_then_deepest() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 0, f: 5, g: 1 });
        heap.push(NodeRef { idx: 1, f: 3, g: 0 });
        heap.push(NodeRef { idx: 2, f: 3, g: 2 });
        heap.push(NodeRef { idx: 3, f: 9, g: 9 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![2, 1, 0, 3]);
    }

    #[test]
    fn cheaper_detour_beats_direct_route() {
        let g = GridBuilder::new(2, 3)
            .fill_weight(1)
            .weight(Pos::new(0, 1), 10)
            .start(Pos::new(0, 0))
            .goal(Pos::new(0, 2))
            .build()
            .unwrap();
        let mut f = Frontier::for_grid(&g);
        let (path, cost) = f.search(&g, g.start(), g.goal(), |_| 0).unwrap();
        assert_eq!(cost, 4);
        assert_eq!(
            path,
            vec![
                Pos::new(0, 0),
                Pos::new(1, 0),
                Pos::new(1, 1),
                Pos::new(1, 2),
                Pos::new(0, 2)
            ]
        );
        assert!(f.expanded() <= g.area());
    }

    #[test]
    fn out_of_range_endpoints_find_nothing() {
        let g = GridBuilder::new(1, 2)
            .start(Pos::new(0, 0))
            .goal(Pos::new(0, 1))
            .build()
            .unwrap();
        let mut f = Frontier::for_grid(&g);
        assert!(f.search(&g, Pos::new(5, 5), g.goal(), |_| 0).is_none());
    }
}
