use gridpath_core::{CancelToken, Grid, Point, Role};
use log::debug;

use crate::astar;
use crate::distance::Heuristic;
use crate::error::{PathResult, SearchError};
use crate::traits::StepObserver;

/// A grid together with its designated endpoints and a cancel token.
///
/// `Session` is the context a front-end threads through its input and
/// search code. It enforces at most one start and one end, and keeps its
/// record of them in sync with the grid's roles.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    start: Option<Point>,
    end: Option<Point>,
    cancel: CancelToken,
}

impl Session {
    /// A session over a blank `rows × cols` grid.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            grid: Grid::new(rows, cols),
            start: None,
            end: None,
            cancel: CancelToken::new(),
        }
    }

    /// A session over an existing grid. The first Start and End roles found
    /// (row-major) become the endpoints; further ones are reset.
    pub fn from_grid(mut grid: Grid) -> Self {
        let start = grid.find(Role::Start);
        let end = grid.find(Role::End);
        for p in grid.bounds() {
            let role = grid.role(p);
            if (role == Some(Role::Start) && Some(p) != start)
                || (role == Some(Role::End) && Some(p) != end)
            {
                grid.reset(p);
            }
        }
        Self {
            grid,
            start,
            end,
            cancel: CancelToken::new(),
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Token polled by [`run`](Session::run). Clone it to cancel from
    /// elsewhere.
    #[inline]
    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Primary edit: the first painted cell becomes the start, the second
    /// the end, and later ones barriers. Painting over an endpoint does
    /// nothing. Out-of-bounds points are ignored.
    pub fn paint(&mut self, p: Point) {
        if !self.grid.contains(p) {
            return;
        }
        let is_start = self.start == Some(p);
        let is_end = self.end == Some(p);
        if self.start.is_none() && !is_end {
            self.set_start(p);
        } else if self.end.is_none() && !is_start {
            self.set_end(p);
        } else if !is_start && !is_end {
            self.grid.set_role(p, Role::Barrier);
        }
    }

    /// Secondary edit: reset the cell, forgetting it if it was an endpoint.
    pub fn erase(&mut self, p: Point) {
        if !self.grid.contains(p) {
            return;
        }
        self.grid.reset(p);
        if self.start == Some(p) {
            self.start = None;
        } else if self.end == Some(p) {
            self.end = None;
        }
    }

    /// Designate `p` as the start, replacing any previous one.
    pub fn set_start(&mut self, p: Point) {
        if !self.grid.contains(p) {
            return;
        }
        if let Some(old) = self.start.take() {
            self.grid.reset(old);
        }
        if self.end == Some(p) {
            self.end = None;
        }
        self.grid.set_role(p, Role::Start);
        self.start = Some(p);
    }

    /// Designate `p` as the end, replacing any previous one.
    pub fn set_end(&mut self, p: Point) {
        if !self.grid.contains(p) {
            return;
        }
        if let Some(old) = self.end.take() {
            self.grid.reset(old);
        }
        if self.start == Some(p) {
            self.start = None;
        }
        self.grid.set_role(p, Role::End);
        self.end = Some(p);
    }

    /// Mark `p` as a barrier unless it is an endpoint.
    pub fn set_barrier(&mut self, p: Point) {
        if self.start != Some(p) && self.end != Some(p) {
            self.grid.set_role(p, Role::Barrier);
        }
    }

    /// Replace the grid with a blank one of the same size.
    pub fn clear(&mut self) {
        self.grid = Grid::new(self.grid.rows(), self.grid.cols());
        self.start = None;
        self.end = None;
    }

    /// Remove the marks of the last search and restore the endpoint roles.
    pub fn clear_search(&mut self) {
        self.grid.clear_search();
        if let Some(p) = self.start {
            self.grid.set_role(p, Role::Start);
        }
        if let Some(p) = self.end {
            self.grid.set_role(p, Role::End);
        }
    }

    /// Search from the start to the end.
    ///
    /// Fails with [`SearchError::MissingStart`] or
    /// [`SearchError::MissingEnd`] before touching the grid if an endpoint is
    /// missing. Otherwise the marks of any earlier run are cleared, the
    /// cancel token is lowered, and the search runs until it finishes or the
    /// token is raised.
    pub fn run<H, O>(&mut self, heuristic: &H, observer: &mut O) -> Result<PathResult, SearchError>
    where
        H: Heuristic + ?Sized,
        O: StepObserver + ?Sized,
    {
        let start = self.start.ok_or(SearchError::MissingStart)?;
        let end = self.end.ok_or(SearchError::MissingEnd)?;
        self.clear_search();
        self.cancel.reset();
        let result = astar::run(&mut self.grid, start, end, heuristic, observer, &self.cancel)?;
        debug!("session: {result}");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Chebyshev;
    use crate::traits::NoopObserver;

    #[test]
    fn paint_follows_start_end_barrier_order() {
        let mut s = Session::new(4, 4);
        s.paint(Point::new(0, 0));
        s.paint(Point::new(3, 3));
        s.paint(Point::new(1, 1));
        assert_eq!(s.start(), Some(Point::new(0, 0)));
        assert_eq!(s.end(), Some(Point::new(3, 3)));
        assert_eq!(s.grid().role(Point::new(1, 1)), Some(Role::Barrier));

        // Painting endpoints again is a no-op.
        s.paint(Point::new(0, 0));
        s.paint(Point::new(3, 3));
        assert_eq!(s.grid().role(Point::new(0, 0)), Some(Role::Start));
        assert_eq!(s.grid().role(Point::new(3, 3)), Some(Role::End));
        assert_eq!(s.grid().count(Role::Barrier), 1);

        s.paint(Point::new(9, 9));
        assert_eq!(s.grid().count(Role::Barrier), 1);
    }

    #[test]
    fn erase_forgets_endpoints() {
        let mut s = Session::new(3, 3);
        s.paint(Point::new(0, 0));
        s.paint(Point::new(2, 2));
        s.erase(Point::new(0, 0));
        assert_eq!(s.start(), None);
        assert_eq!(s.grid().role(Point::new(0, 0)), Some(Role::None));

        // The next paint fills the missing start, not the end.
        s.paint(Point::new(1, 0));
        assert_eq!(s.start(), Some(Point::new(1, 0)));
        assert_eq!(s.end(), Some(Point::new(2, 2)));
    }

    #[test]
    fn endpoints_stay_unique() {
        let mut s = Session::new(3, 3);
        s.set_start(Point::new(0, 0));
        s.set_start(Point::new(0, 1));
        s.set_end(Point::new(0, 1));
        assert_eq!(s.grid().count(Role::Start), 0);
        assert_eq!(s.grid().count(Role::End), 1);
        assert_eq!(s.start(), None);
        s.set_barrier(Point::new(0, 1));
        assert_eq!(s.end(), Some(Point::new(0, 1)));
    }

    #[test]
    fn run_requires_both_endpoints() {
        let mut s = Session::new(3, 3);
        assert_eq!(
            s.run(&Chebyshev, &mut NoopObserver),
            Err(SearchError::MissingStart)
        );
        s.paint(Point::new(0, 0));
        assert_eq!(
            s.run(&Chebyshev, &mut NoopObserver),
            Err(SearchError::MissingEnd)
        );
        assert_eq!(s.grid().count(Role::Open), 0);
    }

    #[test]
    fn rerun_after_cancel() {
        let mut s = Session::new(6, 6);
        s.paint(Point::new(0, 0));
        s.paint(Point::new(5, 5));
        let token = s.cancel_token().clone();
        let result = s.run(&Chebyshev, &mut |_: &Grid| token.cancel()).unwrap();
        assert_eq!(result, PathResult::Cancelled);
        assert!(s.grid().count(Role::Open) > 0);

        // A new run lowers the token and starts from a clean grid.
        let result = s.run(&Chebyshev, &mut NoopObserver).unwrap();
        assert_eq!(result.path().map(<[Point]>::len), Some(10));
        assert_eq!(s.grid().role(Point::new(5, 5)), Some(Role::End));
        assert_eq!(s.grid().role(Point::new(0, 0)), Some(Role::Start));

        let first = s.grid().clone();
        let again = s.run(&Chebyshev, &mut NoopObserver).unwrap();
        assert_eq!(again, result);
        assert_eq!(s.grid(), &first);
    }

    #[test]
    fn clear_and_from_grid() {
        let mut g = Grid::new(2, 3);
        g.set_role(Point::new(0, 0), Role::Start);
        g.set_role(Point::new(0, 2), Role::Start);
        g.set_role(Point::new(1, 2), Role::End);
        g.set_role(Point::new(1, 1), Role::Barrier);
        let mut s = Session::from_grid(g);
        assert_eq!(s.start(), Some(Point::new(0, 0)));
        assert_eq!(s.end(), Some(Point::new(1, 2)));
        assert_eq!(s.grid().count(Role::Start), 1);

        s.clear();
        assert_eq!(s.start(), None);
        assert_eq!(s.grid().count(Role::None), 6);
        assert_eq!(s.grid().rows(), 2);
    }
}
