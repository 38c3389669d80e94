//! The maze flattened for fast genome walks.

use mazerun_core::{Grid, Pos};

use crate::config::SUCCESS_FITNESS;

/// One gene: a move direction. Stored in genomes as its `u8` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Move {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    #[inline]
    pub fn from_gene(gene: u8) -> Move {
        Self::ALL[(gene & 3) as usize]
    }

    #[inline]
    pub fn gene(self) -> u8 {
        self as u8
    }

    /// (drow, dcol) of the move.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    /// The position reached by applying this move to `p`.
    #[inline]
    pub fn apply(self, p: Pos) -> Pos {
        let (dr, dc) = self.delta();
        p.shift(dr, dc)
    }
}

/// The outcome of walking one genome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Evaluation {
    pub(crate) fitness: f64,
    /// Genes consumed up to and including the last move that changed position.
    pub(crate) used_genes: usize,
    pub(crate) reached_goal: bool,
}

impl Default for Evaluation {
    fn default() -> Self {
        Self {
            fitness: f64::NEG_INFINITY,
            used_genes: 0,
            reached_goal: false,
        }
    }
}

/// Wall and weight arrays padded with a one-cell wall border, so a walk can
/// never leave the array and needs no bounds checks.
#[derive(Debug, Clone)]
pub(crate) struct FlatMaze {
    width: usize,
    walls: Vec<bool>,
    weights: Vec<u32>,
    start: usize,
    goal: usize,
    offsets: [isize; 4],
}

impl FlatMaze {
    pub(crate) fn new(grid: &Grid) -> Self {
        let width = grid.cols() as usize + 2;
        let height = grid.rows() as usize + 2;
        let mut walls = vec![true; width * height];
        let mut weights = vec![0u32; width * height];

        for cell in grid.cells() {
            if cell.is_wall {
                continue;
            }
            let i = Self::padded(width, cell.pos);
            walls[i] = false;
            // Every step costs at least 1 so free cells are no free detour.
            weights[i] = cell.weight.max(1);
        }

        let w = width as isize;
        Self {
            width,
            walls,
            weights,
            start: Self::padded(width, grid.start()),
            goal: Self::padded(width, grid.goal()),
            offsets: [-w, w, -1, 1],
        }
    }

    #[inline]
    fn padded(width: usize, p: Pos) -> usize {
        (p.row as usize + 1) * width + (p.col as usize + 1)
    }

    /// Grid coordinates of the start and goal, for goal-biased seeding.
    pub(crate) fn endpoints(&self) -> (Pos, Pos) {
        (self.unpad(self.start), self.unpad(self.goal))
    }

    #[inline]
    fn unpad(&self, idx: usize) -> Pos {
        Pos::new(
            (idx / self.width) as i32 - 1,
            (idx % self.width) as i32 - 1,
        )
    }

    /// Walk `genes` from the start. Moves into walls are consumed without
    /// moving; the walk ends as soon as the goal is entered.
    pub(crate) fn walk(&self, genes: &[u8]) -> Evaluation {
        let mut curr = self.start;
        let mut cost: u64 = 0;
        let mut used_genes = 0;

        for (i, &gene) in genes.iter().enumerate() {
            let next = curr.wrapping_add_signed(self.offsets[(gene & 3) as usize]);
            if self.walls[next] {
                continue;
            }
            curr = next;
            cost += u64::from(self.weights[next]);
            used_genes = i + 1;
            if curr == self.goal {
                return Evaluation {
                    fitness: SUCCESS_FITNESS - cost as f64,
                    used_genes,
                    reached_goal: true,
                };
            }
        }

        let (r, c) = ((curr / self.width) as f64, (curr % self.width) as f64);
        let (gr, gc) = ((self.goal / self.width) as f64, (self.goal % self.width) as f64);
        Evaluation {
            fitness: -((r - gr) * (r - gr) + (c - gc) * (c - gc)),
            used_genes,
            reached_goal: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazerun_core::GridBuilder;

    fn corridor() -> Grid {
        // S . . G
        // . # . .
        GridBuilder::new(2, 4)
            .fill_weight(2)
            .start(Pos::new(0, 0))
            .goal(Pos::new(0, 3))
            .wall(Pos::new(1, 1))
            .weight(Pos::new(0, 2), 0)
            .build()
            .unwrap()
    }

    fn genes(moves: &[Move]) -> Vec<u8> {
        moves.iter().map(|m| m.gene()).collect()
    }

    #[test]
    fn moves_follow_neighbor_order() {
        let p = Pos::new(3, 3);
        let via_moves: Vec<Pos> = Move::ALL.iter().map(|m| m.apply(p)).collect();
        assert_eq!(via_moves, p.neighbors_4().to_vec());
        assert_eq!(Move::from_gene(2), Move::Left);
    }

    #[test]
    fn reaching_the_goal_stops_the_walk() {
        let maze = FlatMaze::new(&corridor());
        use Move::*;
        let e = maze.walk(&genes(&[Right, Right, Right, Down, Down]));
        assert!(e.reached_goal);
        assert_eq!(e.used_genes, 3);
        // 2 + max(1, 0) + 2
        assert_eq!(e.fitness, SUCCESS_FITNESS - 5.0);
    }

    #[test]
    fn blocked_moves_are_consumed_in_place() {
        let maze = FlatMaze::new(&corridor());
        use Move::*;
        // Up leaves the grid, Left leaves the grid, Down then Right hits the wall.
        let e = maze.walk(&genes(&[Up, Left, Down, Right, Up]));
        assert!(!e.reached_goal);
        assert_eq!(e.used_genes, 5);
        // Back at the start, three columns from the goal.
        assert_eq!(e.fitness, -9.0);

        let e = maze.walk(&genes(&[Up, Left]));
        assert_eq!(e.used_genes, 0);
    }

    #[test]
    fn success_always_outranks_failure() {
        let maze = FlatMaze::new(&corridor());
        use Move::*;
        let near_miss = maze.walk(&genes(&[Right, Right]));
        let expensive = maze.walk(&genes(&[Down, Up, Down, Up, Right, Right, Right]));
        assert!(expensive.reached_goal);
        assert!(!near_miss.reached_goal);
        assert!(expensive.fitness > near_miss.fitness);
        assert_eq!(near_miss.fitness, -1.0);
    }

    #[test]
    fn endpoints_are_unpadded() {
        let g = corridor();
        let maze = FlatMaze::new(&g);
        assert_eq!(maze.endpoints(), (g.start(), g.goal()));
    }
}
