//! The [`Grid`] type: a fixed-size 2D array of role-tagged [`Cell`]s.
//!
//! A `Grid` exclusively owns its cells. Cells are stored row-major and are
//! addressed by [`Point`]; out-of-bounds reads return `None` and out-of-bounds
//! writes are ignored.

#[cfg(feature = "serde")]
use std::fmt;

use crate::cell::{Cell, Role};
use crate::geom::{Point, Range};

/// A rectangular grid of cells.
///
/// With the `serde` feature a deserialized grid is checked against its
/// bounds (see [`SnapshotError`]).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridData"))]
pub struct Grid {
    bounds: Range,
    cells: Vec<Cell>,
}

/// Wire form of a [`Grid`], validated before it becomes one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridData {
    bounds: Range,
    cells: Vec<Cell>,
}

/// A grid snapshot whose cells do not match its bounds.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// Bounds must be `[0, rows) × [0, cols)`.
    Bounds { bounds: Range },
    /// One cell per point of the bounds.
    CellCount { expected: usize, found: usize },
    /// Cells are stored row-major; the cell at `index` claims another point.
    Misplaced {
        index: usize,
        expected: Point,
        found: Point,
    },
}

#[cfg(feature = "serde")]
impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounds { bounds } => write!(f, "grid: bounds {bounds} do not start at the origin"),
            Self::CellCount { expected, found } => {
                write!(f, "grid: {found} cells, expected {expected}")
            }
            Self::Misplaced {
                index,
                expected,
                found,
            } => write!(f, "grid: cell {index} is at {found}, expected {expected}"),
        }
    }
}

#[cfg(feature = "serde")]
impl std::error::Error for SnapshotError {}

#[cfg(feature = "serde")]
impl TryFrom<GridData> for Grid {
    type Error = SnapshotError;

    fn try_from(data: GridData) -> Result<Self, Self::Error> {
        let GridData { bounds, cells } = data;
        if bounds != Range::with_size(bounds.rows(), bounds.cols()) {
            return Err(SnapshotError::Bounds { bounds });
        }
        if cells.len() != bounds.len() {
            return Err(SnapshotError::CellCount {
                expected: bounds.len(),
                found: cells.len(),
            });
        }
        for (index, cell) in cells.iter().enumerate() {
            let expected = bounds.point(index);
            if cell.pos != expected {
                return Err(SnapshotError::Misplaced {
                    index,
                    expected,
                    found: cell.pos,
                });
            }
        }
        Ok(Self { bounds, cells })
    }
}

impl Grid {
    /// Create a grid of `rows × cols` blank, passable cells.
    ///
    /// Negative dimensions clamp to zero, giving an empty grid.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Range::with_size(rows, cols);
        let cells = bounds.iter().map(Cell::new).collect();
        Self { bounds, cells }
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat row-major index of `p`.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        self.bounds.index(p)
    }

    /// Point at a flat row-major index.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        self.bounds.point(idx)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// The role at `p`, or `None` if out of bounds.
    #[inline]
    pub fn role(&self, p: Point) -> Option<Role> {
        self.cell(p).map(|c| c.role)
    }

    /// Whether `p` is in bounds and not a barrier.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.cell(p).is_some_and(Cell::is_passable)
    }

    /// Set the role at `p`. No-op if `p` is outside the grid.
    ///
    /// Only the stored role changes; neighbor lists computed earlier are not
    /// updated.
    pub fn set_role(&mut self, p: Point, role: Role) {
        if let Some(i) = self.index(p) {
            self.cells[i].role = role;
        }
    }

    /// Reset the cell at `p` to [`Role::None`].
    pub fn reset(&mut self, p: Point) {
        self.set_role(p, Role::None);
    }

    /// Reset every cell to [`Role::None`].
    pub fn reset_all(&mut self) {
        for c in &mut self.cells {
            c.role = Role::None;
        }
    }

    /// Clear the marks left by a search (Open, Closed, Path), keeping
    /// barriers and endpoints.
    pub fn clear_search(&mut self) {
        for c in &mut self.cells {
            if c.role.is_search_mark() {
                c.role = Role::None;
            }
        }
    }

    /// Append the passable orthogonal neighbours of `p` to `buf`, in the
    /// order down, up, right, left. The caller clears `buf`.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.is_passable(n) {
                buf.push(n);
            }
        }
    }

    /// First cell with `role` in row-major order.
    pub fn find(&self, role: Role) -> Option<Point> {
        self.cells.iter().find(|c| c.role == role).map(|c| c.pos)
    }

    /// Number of cells with `role`.
    pub fn count(&self, role: Role) -> usize {
        self.cells.iter().filter(|c| c.role == role).count()
    }

    /// Row-major iterator over the cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Iterator over the cells of one row.
    pub fn row(&self, row: i32) -> std::slice::Iter<'_, Cell> {
        if row < 0 || row >= self.rows() {
            return self.cells[..0].iter();
        }
        let cols = self.cols() as usize;
        let start = row as usize * cols;
        self.cells[start..start + cols].iter()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
