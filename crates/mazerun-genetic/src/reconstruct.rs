//! Turning the best genome back into a displayable path.

use std::collections::HashMap;

use mazerun_core::{Grid, Path, Pos};

use crate::maze::Move;

/// Replay the first `used_genes` genes from the start, stopping at the goal,
/// and erase the loops of the resulting walk.
pub(crate) fn reconstruct_path(grid: &Grid, genes: &[u8], used_genes: usize) -> Path {
    let mut walk = vec![grid.start()];
    let mut pos = grid.start();
    for &gene in genes.iter().take(used_genes) {
        let next = Move::from_gene(gene).apply(pos);
        if !grid.is_valid(next) {
            continue;
        }
        pos = next;
        walk.push(pos);
        if pos == grid.goal() {
            break;
        }
    }

    Path::new(
        erase_loops(&walk)
            .into_iter()
            .filter_map(|p| grid.at(p).copied())
            .collect(),
    )
}

/// Loop-erased walk: on revisiting a cell, cut the path back to its earlier
/// visit instead of appending it again.
pub(crate) fn erase_loops(walk: &[Pos]) -> Vec<Pos> {
    let mut clean: Vec<Pos> = Vec::with_capacity(walk.len());
    let mut at: HashMap<Pos, usize> = HashMap::with_capacity(walk.len());

    for &p in walk {
        if let Some(&k) = at.get(&p) {
            for dropped in clean.drain(k + 1..) {
                at.remove(&dropped);
            }
        } else {
            at.insert(p, clean.len());
            clean.push(p);
        }
    }
    clean
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazerun_core::GridBuilder;

    fn p(row: i32, col: i32) -> Pos {
        Pos::new(row, col)
    }

    #[test]
    fn loops_are_cut_back_to_the_first_visit() {
        let walk = [p(0, 0), p(0, 1), p(1, 1), p(1, 0), p(0, 0), p(0, 1), p(0, 2)];
        assert_eq!(erase_loops(&walk), vec![p(0, 0), p(0, 1), p(0, 2)]);
    }

    #[test]
    fn back_and_forth_collapses() {
        let walk = [p(0, 0), p(0, 1), p(0, 0), p(0, 1), p(0, 2), p(0, 1), p(0, 2)];
        assert_eq!(erase_loops(&walk), vec![p(0, 0), p(0, 1), p(0, 2)]);
    }

    #[test]
    fn replay_ignores_blocked_moves_and_stops_at_goal() {
        // S . G
        // . # .
        let g = GridBuilder::new(2, 3)
            .fill_weight(1)
            .start(p(0, 0))
            .goal(p(0, 2))
            .wall(p(1, 1))
            .build()
            .unwrap();
        use Move::*;
        let genes: Vec<u8> = [Up, Down, Right, Up, Right, Up, Right, Left, Down]
            .iter()
            .map(|m| m.gene())
            .collect();
        let path = reconstruct_path(&g, &genes, genes.len());
        let cells: Vec<Pos> = path.cells().iter().map(|c| c.pos).collect();
        // Down, blocked Right, Up erased back to the start, Right, Right.
        assert_eq!(cells, vec![p(0, 0), p(0, 1), p(0, 2)]);
        assert!(path.reached_goal());
        assert!(path.is_simple());
        assert!(path.is_connected(&g));
    }

    #[test]
    fn used_gene_limit_truncates_the_replay() {
        let g = GridBuilder::new(1, 4)
            .start(p(0, 0))
            .goal(p(0, 3))
            .build()
            .unwrap();
        let genes = vec![Move::Right.gene(); 3];
        let path = reconstruct_path(&g, &genes, 2);
        assert_eq!(path.len(), 3);
        assert!(!path.reached_goal());
    }
}
