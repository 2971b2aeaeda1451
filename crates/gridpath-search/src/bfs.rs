use std::collections::VecDeque;

use gridpath_core::{Grid, Point, Range};

use crate::traits::Pather;

/// Step distances from a single source, computed by breadth-first search.
///
/// Each step has cost 1, so the distance of a cell is the length of a
/// shortest orthogonal path to it. This is the exact answer A* must agree
/// with on unweighted grids.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    bounds: Range,
    source: Point,
    dist: Vec<Option<u32>>,
}

impl DistanceMap {
    /// Run a BFS from `source` over the cells of `bounds`.
    ///
    /// A source outside `bounds` reaches nothing.
    pub fn compute_in<P: Pather + ?Sized>(pather: &P, bounds: Range, source: Point) -> Self {
        let mut dist = vec![None; bounds.len()];
        let mut queue: VecDeque<usize> = VecDeque::new();

        if let Some(si) = bounds.index(source) {
            dist[si] = Some(0);
            queue.push_back(si);
        }

        let mut nbuf = Vec::with_capacity(4);

        while let Some(ci) = queue.pop_front() {
            let Some(current_dist) = dist[ci] else {
                continue;
            };
            nbuf.clear();
            pather.neighbors(bounds.point(ci), &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = bounds.index(np) else {
                    continue;
                };
                if dist[ni].is_some() {
                    continue;
                }
                dist[ni] = Some(current_dist + 1);
                queue.push_back(ni);
            }
        }

        Self {
            bounds,
            source,
            dist,
        }
    }

    /// Run a BFS from `source` over the passable cells of `grid`.
    pub fn compute(grid: &Grid, source: Point) -> Self {
        Self::compute_in(grid, grid.bounds(), source)
    }

    #[inline]
    pub fn source(&self) -> Point {
        self.source
    }

    /// Steps from the source to `p`, or `None` if `p` is unreachable or
    /// outside the map.
    pub fn get(&self, p: Point) -> Option<u32> {
        self.bounds.index(p).and_then(|i| self.dist[i])
    }

    /// Number of cells reached, the source included.
    pub fn reached(&self) -> usize {
        self.dist.iter().filter(|d| d.is_some()).count()
    }
}
