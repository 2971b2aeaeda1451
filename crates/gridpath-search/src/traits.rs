use std::sync::atomic::{AtomicBool, Ordering};

use gridpath_core::{CancelToken, Grid, Point};

/// Neighbor enumeration for the searches in this crate.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

impl Pather for Grid {
    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        Grid::neighbors(self, p, buf);
    }
}

/// Receives the grid after every search step so that it can be rendered.
///
/// Called once per expansion and once per reconstructed path cell. The grid
/// is borrowed immutably: observers look, they do not edit.
pub trait StepObserver {
    fn on_step(&mut self, grid: &Grid);
}

impl<F: FnMut(&Grid)> StepObserver for F {
    #[inline]
    fn on_step(&mut self, grid: &Grid) {
        self(grid)
    }
}

/// Observer that ignores every step.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    #[inline]
    fn on_step(&mut self, _grid: &Grid) {}
}

/// Externally raised request to stop a search, polled once per step.
pub trait CancelSignal {
    fn is_requested(&self) -> bool;
}

impl CancelSignal for CancelToken {
    #[inline]
    fn is_requested(&self) -> bool {
        CancelToken::is_requested(self)
    }
}

impl CancelSignal for AtomicBool {
    #[inline]
    fn is_requested(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// A signal that is never raised.
#[derive(Debug, Default, Clone, Copy)]
pub struct Never;

impl CancelSignal for Never {
    #[inline]
    fn is_requested(&self) -> bool {
        false
    }
}
