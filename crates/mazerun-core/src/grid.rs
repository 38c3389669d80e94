//! The [`Grid`] type: an immutable rectangular maze of [`Cell`]s.
//!
//! A `Grid` is built once (by [`GridBuilder`], [`Grid::from_cells`] or the
//! text parser) and is read-only afterwards. Solvers borrow it for the
//! duration of one solve call.

use std::fmt;

use thiserror::Error;

use crate::cell::Cell;
use crate::geom::Pos;
use crate::path::Path;

/// Reasons a grid cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    Empty { rows: i32, cols: i32 },
    #[error("expected {expected} cells, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("cell at index {index} claims position {pos}")]
    MisplacedCell { index: usize, pos: Pos },
    #[error("position {0} is outside the grid")]
    OutOfBounds(Pos),
    #[error("maze has no start cell")]
    MissingStart,
    #[error("maze has no goal cell")]
    MissingGoal,
    #[error("maze has a second start cell at {second} (first at {first})")]
    DuplicateStart { first: Pos, second: Pos },
    #[error("maze has a second goal cell at {second} (first at {first})")]
    DuplicateGoal { first: Pos, second: Pos },
    #[error("cell {0} is marked as both start and goal")]
    StartIsGoal(Pos),
    #[error("start or goal cell {0} is a wall")]
    BlockedEndpoint(Pos),
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular `rows × cols` maze with exactly one start and one goal.
///
/// Deserialized grids go through [`Grid::from_cells`]; the serialized
/// `start` and `goal` fields are recomputed from the cell flags.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGrid")
)]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
    start: Pos,
    goal: Pos,
}

/// Unvalidated wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        Grid::from_cells(raw.rows, raw.cols, raw.cells)
    }
}

impl Grid {
    /// Build a grid from row-major cells, validating every invariant.
    pub fn from_cells(rows: i32, cols: i32, cells: Vec<Cell>) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::Empty { rows, cols });
        }
        let expected = rows as usize * cols as usize;
        if cells.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: cells.len(),
            });
        }

        let mut start: Option<Pos> = None;
        let mut goal: Option<Pos> = None;
        for (index, cell) in cells.iter().enumerate() {
            let pos = Pos::new(index as i32 / cols, index as i32 % cols);
            if cell.pos != pos {
                return Err(GridError::MisplacedCell {
                    index,
                    pos: cell.pos,
                });
            }
            if cell.is_start && cell.is_goal {
                return Err(GridError::StartIsGoal(pos));
            }
            if (cell.is_start || cell.is_goal) && cell.is_wall {
                return Err(GridError::BlockedEndpoint(pos));
            }
            if cell.is_start {
                if let Some(first) = start {
                    return Err(GridError::DuplicateStart { first, second: pos });
                }
                start = Some(pos);
            }
            if cell.is_goal {
                if let Some(first) = goal {
                    return Err(GridError::DuplicateGoal { first, second: pos });
                }
                goal = Some(pos);
            }
        }

        Ok(Self {
            rows,
            cols,
            cells,
            start: start.ok_or(GridError::MissingStart)?,
            goal: goal.ok_or(GridError::MissingGoal)?,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Position of the start cell.
    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    /// Position of the goal cell.
    #[inline]
    pub fn goal(&self) -> Pos {
        self.goal
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.rows && p.col < self.cols
    }

    /// Row-major flat index of `p`, or `None` when out of bounds.
    #[inline]
    pub fn index(&self, p: Pos) -> Option<usize> {
        if self.contains(p) {
            Some(p.row as usize * self.cols as usize + p.col as usize)
        } else {
            None
        }
    }

    /// Position of a flat index.
    #[inline]
    pub fn pos(&self, idx: usize) -> Pos {
        let cols = self.cols as usize;
        Pos::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// The cell at `p`, or `None` when out of bounds.
    #[inline]
    pub fn at(&self, p: Pos) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// In bounds and not a wall.
    #[inline]
    pub fn is_valid(&self, p: Pos) -> bool {
        self.at(p).is_some_and(Cell::is_passable)
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of cells.
    pub fn row(&self, r: i32) -> &[Cell] {
        let cols = self.cols as usize;
        let start = r as usize * cols;
        &self.cells[start..start + cols]
    }

    /// Draw the grid as ASCII with the cells of `path` marked `*`.
    ///
    /// Walls are `#`, start `S`, goal `G`, other open cells `.`.
    pub fn render_path(&self, path: &Path) -> String {
        let mut on_path = vec![false; self.area()];
        for cell in path.cells() {
            if let Some(i) = self.index(cell.pos) {
                on_path[i] = true;
            }
        }

        let mut out = String::with_capacity(self.area() + self.rows as usize);
        for (i, cell) in self.cells.iter().enumerate() {
            let ch = if cell.is_wall {
                '#'
            } else if cell.is_start {
                'S'
            } else if cell.is_goal {
                'G'
            } else if on_path[i] {
                '*'
            } else {
                '.'
            };
            out.push(ch);
            if (i + 1) % self.cols as usize == 0 {
                out.push('\n');
            }
        }
        out
    }
}

/// Writes the grid in the maze text format, one row per line.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            let tokens: Vec<String> = self.row(r).iter().map(Cell::token).collect();
            writeln!(f, "{}", tokens.join(" "))?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridBuilder
// ---------------------------------------------------------------------------

/// Programmatic grid construction.
///
/// ```
/// use mazerun_core::{GridBuilder, Pos};
///
/// let grid = GridBuilder::new(2, 3)
///     .fill_weight(1)
///     .start(Pos::new(0, 0))
///     .goal(Pos::new(1, 2))
///     .wall(Pos::new(0, 1))
///     .build()
///     .unwrap();
/// assert!(!grid.is_valid(Pos::new(0, 1)));
/// ```
#[derive(Debug, Clone)]
pub struct GridBuilder {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
    error: Option<GridError>,
}

impl GridBuilder {
    /// A builder for an all-open grid with weight 0 everywhere.
    pub fn new(rows: i32, cols: i32) -> Self {
        let r = rows.max(0);
        let c = cols.max(0);
        let cells = (0..r * c).map(|i| Cell::new(Pos::new(i / c, i % c))).collect();
        Self {
            rows,
            cols,
            cells,
            error: None,
        }
    }

    fn with_cell(mut self, p: Pos, f: impl FnOnce(&mut Cell)) -> Self {
        if self.error.is_some() {
            return self;
        }
        if p.row < 0 || p.col < 0 || p.row >= self.rows || p.col >= self.cols {
            self.error = Some(GridError::OutOfBounds(p));
            return self;
        }
        let i = (p.row * self.cols + p.col) as usize;
        f(&mut self.cells[i]);
        self
    }

    /// Set the weight of every cell.
    pub fn fill_weight(mut self, weight: u32) -> Self {
        for cell in self.cells.iter_mut() {
            cell.weight = weight;
        }
        self
    }

    /// Set the weight of one cell.
    pub fn weight(self, p: Pos, weight: u32) -> Self {
        self.with_cell(p, |c| c.weight = weight)
    }

    /// Turn one cell into a wall.
    pub fn wall(self, p: Pos) -> Self {
        self.with_cell(p, |c| c.is_wall = true)
    }

    /// Mark the start cell.
    pub fn start(self, p: Pos) -> Self {
        self.with_cell(p, |c| c.is_start = true)
    }

    /// Mark the goal cell.
    pub fn goal(self, p: Pos) -> Self {
        self.with_cell(p, |c| c.is_goal = true)
    }

    /// Validate and produce the grid.
    pub fn build(self) -> Result<Grid, GridError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Grid::from_cells(self.rows, self.cols, self.cells)
    }
}
