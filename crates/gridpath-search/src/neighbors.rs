use gridpath_core::{Grid, Point, Range};

use crate::traits::Pather;

/// Adjacency snapshot of a [`Grid`].
///
/// Holds, for every cell, the flat indices of its passable orthogonal
/// neighbours in the order down, up, right, left. The table reflects the
/// barriers at the time [`compute`](NeighborTable::compute) was called;
/// later edits to the grid are not seen. A* builds a fresh table at the
/// start of every run.
#[derive(Debug, Clone)]
pub struct NeighborTable {
    bounds: Range,
    // links[offsets[i]..offsets[i + 1]] are the neighbours of cell i.
    offsets: Vec<usize>,
    links: Vec<usize>,
}

impl NeighborTable {
    /// Compute the neighbours of every cell of `grid`.
    pub fn compute(grid: &Grid) -> Self {
        let bounds = grid.bounds();
        let mut offsets = Vec::with_capacity(grid.len() + 1);
        let mut links = Vec::with_capacity(grid.len() * 4);
        let mut buf = Vec::with_capacity(4);
        offsets.push(0);
        for cell in grid {
            buf.clear();
            grid.neighbors(cell.pos, &mut buf);
            links.extend(buf.iter().filter_map(|&n| bounds.index(n)));
            offsets.push(links.len());
        }
        Self {
            bounds,
            offsets,
            links,
        }
    }

    /// Neighbour indices of the cell at flat index `idx`.
    #[inline]
    pub fn of(&self, idx: usize) -> &[usize] {
        match (self.offsets.get(idx), self.offsets.get(idx + 1)) {
            (Some(&a), Some(&b)) => &self.links[a..b],
            _ => &[],
        }
    }

    /// Number of cells covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Pather for NeighborTable {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        if let Some(i) = self.bounds.index(p) {
            buf.extend(self.of(i).iter().map(|&n| self.bounds.point(n)));
        }
    }
}
