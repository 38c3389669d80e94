//! The [`Cell`] type: one square of a maze.

use crate::geom::Pos;

/// A maze cell.
///
/// `weight` is the cost of stepping *into* the cell. A weight of 0 is a free
/// but passable step. Walls are never entered, so their weight is irrelevant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Pos,
    pub weight: u32,
    pub is_wall: bool,
    pub is_start: bool,
    pub is_goal: bool,
}

impl Cell {
    /// An open cell with weight 0 at `pos`.
    #[inline]
    pub const fn new(pos: Pos) -> Self {
        Self {
            pos,
            weight: 0,
            is_wall: false,
            is_start: false,
            is_goal: false,
        }
    }

    /// Set the traversal weight (builder).
    #[inline]
    pub const fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Mark the cell as a wall (builder).
    #[inline]
    pub const fn with_wall(mut self, wall: bool) -> Self {
        self.is_wall = wall;
        self
    }

    /// Whether a walker may stand on this cell.
    #[inline]
    pub const fn is_passable(&self) -> bool {
        !self.is_wall
    }

    /// The token this cell is written as in the maze text format.
    pub fn token(&self) -> String {
        if self.is_wall {
            "#".to_string()
        } else if self.is_start {
            "S".to_string()
        } else if self.is_goal {
            "G".to_string()
        } else {
            format!("\"{}\"", self.weight)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_set_fields() {
        let c = Cell::new(Pos::new(1, 2)).with_weight(7);
        assert_eq!(c.weight, 7);
        assert!(c.is_passable());
        assert!(!c.with_wall(true).is_passable());
    }

    #[test]
    fn tokens() {
        let base = Cell::new(Pos::new(0, 0));
        assert_eq!(base.with_weight(12).token(), "\"12\"");
        assert_eq!(base.with_wall(true).token(), "#");
        assert_eq!(Cell { is_start: true, ..base }.token(), "S");
        assert_eq!(Cell { is_goal: true, ..base }.token(), "G");
    }
}
