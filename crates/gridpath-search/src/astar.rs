use gridpath_core::{Grid, Point, Role};
use log::{debug, trace};

use crate::distance::Heuristic;
use crate::error::{PathResult, SearchError};
use crate::frontier::Frontier;
use crate::neighbors::NeighborTable;
use crate::traits::{CancelSignal, StepObserver};

/// Per-cell bookkeeping for one run.
#[derive(Clone)]
struct Node {
    g: u32,
    f: f64,
    parent: Option<usize>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: u32::MAX,
            f: f64::INFINITY,
            parent: None,
        }
    }
}

/// Check that an endpoint can take part in a search.
fn check_endpoint(grid: &Grid, p: Point) -> Result<usize, SearchError> {
    let idx = grid.index(p).ok_or(SearchError::OutOfBounds { point: p })?;
    if !grid.is_passable(p) {
        return Err(SearchError::Blocked { point: p });
    }
    Ok(idx)
}

/// Find a shortest orthogonal path from `start` to `end` with A*.
///
/// Every step costs 1. The frontier is ordered by `g + h`, ties going to the
/// cell discovered first, so a given grid and heuristic always expand cells
/// in the same order.
///
/// The run leaves its trace in the grid: discovered cells become
/// [`Role::Open`], expanded cells (other than the start) [`Role::Closed`],
/// and on success the cells between start and end [`Role::Path`], with the
/// end re-marked [`Role::End`]. `observer` sees the grid after every
/// expansion and once for every cell walked back from the end, down to and
/// including the start, so a one-step path still gets one frame. `cancel` is polled before
/// each expansion; when raised the run stops with [`PathResult::Cancelled`]
/// and the marks made so far stay in place.
///
/// Neighbours are recomputed for the whole grid when the run starts.
/// Callers clear the marks of a previous run (see [`Grid::clear_search`])
/// before searching again.
pub fn run<H, O, C>(
    grid: &mut Grid,
    start: Point,
    end: Point,
    heuristic: &H,
    observer: &mut O,
    cancel: &C,
) -> Result<PathResult, SearchError>
where
    H: Heuristic + ?Sized,
    O: StepObserver + ?Sized,
    C: CancelSignal + ?Sized,
{
    let start_idx = check_endpoint(grid, start)?;
    let goal_idx = check_endpoint(grid, end)?;

    debug!(
        "astar: {}x{} grid, {} -> {}",
        grid.rows(),
        grid.cols(),
        start,
        end
    );

    if start_idx == goal_idx {
        debug!("astar: start is the goal");
        return Ok(PathResult::Found(Vec::new()));
    }

    let table = NeighborTable::compute(grid);
    let mut nodes = vec![Node::default(); grid.len()];
    let mut frontier = Frontier::new(grid.len());

    nodes[start_idx].g = 0;
    nodes[start_idx].f = heuristic.estimate(start, end);
    frontier.push(start_idx, nodes[start_idx].f);

    let mut expanded = 0usize;

    let outcome = 'search: loop {
        if cancel.is_requested() {
            break 'search PathResult::Cancelled;
        }

        let Some(ci) = frontier.pop() else {
            break 'search PathResult::NotFound;
        };

        if ci == goal_idx {
            let path = reconstruct(grid, &nodes, start_idx, goal_idx, observer);
            grid.set_role(end, Role::End);
            break 'search PathResult::Found(path);
        }

        expanded += 1;
        let current_g = nodes[ci].g;
        let current = grid.point(ci);
        trace!(
            "astar: expand {} g={} f={} frontier={}",
            current,
            current_g,
            nodes[ci].f,
            frontier.len()
        );

        for &ni in table.of(ci) {
            let tentative_g = current_g + 1;
            if tentative_g >= nodes[ni].g {
                continue;
            }
            let np = grid.point(ni);
            let n = &mut nodes[ni];
            n.g = tentative_g;
            n.f = f64::from(tentative_g) + heuristic.estimate(np, end);
            n.parent = Some(ci);

            let discovered = !frontier.contains(ni);
            frontier.push(ni, n.f);
            if discovered {
                grid.set_role(np, Role::Open);
            }
        }

        observer.on_step(grid);

        if ci != start_idx {
            grid.set_role(current, Role::Closed);
        }
    };

    debug!(
        "astar: {} after {} expansions, {} frontier insertions",
        outcome,
        expanded,
        frontier.pushed()
    );
    Ok(outcome)
}

/// Walk the parent links back from the goal, marking the cells in between.
/// The observer sees one frame per predecessor walked, the start included.
fn reconstruct<O: StepObserver + ?Sized>(
    grid: &mut Grid,
    nodes: &[Node],
    start_idx: usize,
    goal_idx: usize,
    observer: &mut O,
) -> Vec<Point> {
    let mut path = vec![grid.point(goal_idx)];
    let mut ci = goal_idx;
    while let Some(pi) = nodes[ci].parent {
        if pi != start_idx {
            let p = grid.point(pi);
            path.push(p);
            grid.set_role(p, Role::Path);
        }
        observer.on_step(grid);
        if pi == start_idx {
            break;
        }
        ci = pi;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::DistanceMap;
    use crate::distance::{Chebyshev, HeuristicKind, Manhattan, Zero, manhattan};
    use crate::traits::{Never, NoopObserver};
    use gridpath_core::CancelToken;
    use rand::{RngExt, SeedableRng};

    fn search(grid: &mut Grid, start: Point, end: Point) -> PathResult {
        grid.set_role(start, Role::Start);
        grid.set_role(end, Role::End);
        run(grid, start, end, &Chebyshev, &mut NoopObserver, &Never).unwrap()
    }

    fn assert_walk(path: &[Point], start: Point, end: Point) {
        let mut prev = start;
        for &p in path {
            assert_eq!(manhattan(prev, p), 1, "{prev} -> {p} is not one step");
            prev = p;
        }
        assert_eq!(prev, end);
    }

    /// 5x5 with a wall in column 2 covering rows 0-3.
    fn walled() -> Grid {
        let mut g = Grid::new(5, 5);
        for row in 0..4 {
            g.set_role(Point::new(row, 2), Role::Barrier);
        }
        g
    }

    #[test]
    fn open_grid_path_is_manhattan() {
        for (start, end) in [
            (Point::new(0, 0), Point::new(6, 6)),
            (Point::new(3, 1), Point::new(0, 5)),
            (Point::new(6, 2), Point::new(6, 3)),
        ] {
            let mut g = Grid::new(7, 7);
            let path = search(&mut g, start, end).path().unwrap().to_vec();
            assert_eq!(path.len() as i32, manhattan(start, end));
            assert_walk(&path, start, end);
        }
    }

    #[test]
    fn routes_through_the_gap() {
        let mut g = walled();
        let start = Point::new(0, 0);
        let end = Point::new(4, 4);
        let result = search(&mut g, start, end);
        let path = result.path().unwrap();
        assert_eq!(path.len(), 8);
        assert!(path.contains(&Point::new(4, 2)));
        assert_walk(path, start, end);

        assert_eq!(g.count(Role::Path), 7);
        assert_eq!(g.role(start), Some(Role::Start));
        assert_eq!(g.role(end), Some(Role::End));
        for &p in &path[..path.len() - 1] {
            assert_eq!(g.role(p), Some(Role::Path));
        }
    }

    #[test]
    fn start_equals_end() {
        let mut g = Grid::new(3, 3);
        let center = Point::new(1, 1);
        g.set_role(center, Role::Start);
        let mut steps = 0;
        let result = run(
            &mut g,
            center,
            center,
            &Chebyshev,
            &mut |_: &Grid| steps += 1,
            &Never,
        )
        .unwrap();
        assert_eq!(result, PathResult::Found(Vec::new()));
        assert_eq!(steps, 0);
        assert_eq!(g.count(Role::Closed), 0);
        assert_eq!(g.count(Role::Open), 0);
        assert_eq!(g.role(center), Some(Role::Start));
    }

    #[test]
    fn enclosed_goal_is_not_found() {
        let mut g = Grid::new(5, 5);
        let end = Point::new(2, 2);
        for n in end.neighbors_4() {
            g.set_role(n, Role::Barrier);
        }
        let start = Point::new(0, 0);
        assert_eq!(search(&mut g, start, end), PathResult::NotFound);
        // Everything reachable was expanded; the goal never was.
        assert_eq!(g.role(end), Some(Role::End));
        assert_eq!(g.count(Role::Open), 0);
        assert_eq!(g.count(Role::Closed), 25 - 4 - 2);
    }

    #[test]
    fn zero_reachable_cells_is_not_found() {
        let mut g = Grid::new(1, 3);
        g.set_role(Point::new(0, 1), Role::Barrier);
        assert_eq!(
            search(&mut g, Point::new(0, 0), Point::new(0, 2)),
            PathResult::NotFound
        );
    }

    #[test]
    fn invalid_endpoints_fail_fast() {
        let mut g = Grid::new(3, 3);
        g.set_role(Point::new(1, 1), Role::Barrier);
        let mut steps = 0;
        let mut count = |_: &Grid| steps += 1;

        let err = run(&mut g, Point::new(0, 0), Point::new(3, 0), &Chebyshev, &mut count, &Never);
        assert_eq!(err, Err(SearchError::OutOfBounds { point: Point::new(3, 0) }));
        let err = run(&mut g, Point::new(-1, 0), Point::new(2, 2), &Chebyshev, &mut count, &Never);
        assert_eq!(err, Err(SearchError::OutOfBounds { point: Point::new(-1, 0) }));
        let err = run(&mut g, Point::new(1, 1), Point::new(2, 2), &Chebyshev, &mut count, &Never);
        assert_eq!(err, Err(SearchError::Blocked { point: Point::new(1, 1) }));

        let mut empty = Grid::new(0, 0);
        let err = run(&mut empty, Point::ZERO, Point::ZERO, &Chebyshev, &mut count, &Never);
        assert_eq!(err, Err(SearchError::OutOfBounds { point: Point::ZERO }));

        assert_eq!(steps, 0);
        assert_eq!(g.count(Role::Open), 0);
    }

    #[test]
    fn ties_favor_first_discovered_and_equal_cost_never_relinks() {
        // From (0,0) the neighbour below is discovered before the one to the
        // right; both reach (1,1) in two steps, and only the first link holds.
        let mut g = Grid::new(2, 2);
        let result = search(&mut g, Point::new(0, 0), Point::new(1, 1));
        assert_eq!(
            result,
            PathResult::Found(vec![Point::new(1, 0), Point::new(1, 1)])
        );
    }

    #[test]
    fn observer_sees_every_expansion_and_path_cell() {
        let mut g = walled();
        let start = Point::new(0, 0);
        let end = Point::new(4, 4);
        g.set_role(start, Role::Start);
        g.set_role(end, Role::End);
        let mut frames: Vec<(usize, usize)> = Vec::new();
        let result = run(
            &mut g,
            start,
            end,
            &Manhattan,
            &mut |grid: &Grid| frames.push((grid.count(Role::Closed), grid.count(Role::Path))),
            &Never,
        )
        .unwrap();
        let path_len = result.path().unwrap().len();
        // Path cells were closed before being re-marked; the start never is.
        let expansions = g.count(Role::Closed) + g.count(Role::Path) + 1;
        assert_eq!(frames.len(), expansions + path_len);
        // Path frames come last: one per cell walked back, the start included.
        let tail: Vec<_> = frames[expansions..].iter().map(|f| f.1).collect();
        let mut expected: Vec<_> = (1..path_len).collect();
        expected.push(path_len - 1);
        assert_eq!(tail, expected);
        // The observer runs before the current cell is closed.
        assert_eq!(frames[0], (0, 0));
    }

    #[test]
    fn one_step_path_still_notifies() {
        let mut g = Grid::new(1, 2);
        let start = Point::new(0, 0);
        let end = Point::new(0, 1);
        g.set_role(start, Role::Start);
        g.set_role(end, Role::End);
        let mut frames = 0;
        let result = run(&mut g, start, end, &Manhattan, &mut |_: &Grid| frames += 1, &Never).unwrap();
        assert_eq!(result, PathResult::Found(vec![end]));
        // One expansion of the start, then one frame for the walk back to it.
        assert_eq!(frames, 2);
        assert_eq!(g.count(Role::Path), 0);
        assert_eq!(g.role(end), Some(Role::End));
    }

    #[test]
    fn cancelled_after_first_step() {
        let mut g = Grid::new(40, 40);
        let start = Point::new(20, 20);
        let end = Point::new(0, 0);
        g.set_role(start, Role::Start);
        g.set_role(end, Role::End);

        let token = CancelToken::new();
        let remote = token.clone();
        let mut steps = 0;
        let result = run(
            &mut g,
            start,
            end,
            &Chebyshev,
            &mut |_: &Grid| {
                steps += 1;
                remote.cancel();
            },
            &token,
        )
        .unwrap();

        assert_eq!(result, PathResult::Cancelled);
        assert_eq!(steps, 1);
        // Only the start was expanded.
        assert_eq!(g.count(Role::Closed), 0);
        assert_eq!(g.count(Role::Open), 4);
        for n in start.neighbors_4() {
            assert_eq!(g.role(n), Some(Role::Open));
        }
        assert_eq!(g.role(start), Some(Role::Start));
    }

    #[test]
    fn raised_before_start_expands_nothing() {
        let mut g = Grid::new(4, 4);
        let token = CancelToken::new();
        token.cancel();
        let result = run(
            &mut g,
            Point::ZERO,
            Point::new(3, 3),
            &Chebyshev,
            &mut NoopObserver,
            &token,
        );
        assert_eq!(result, Ok(PathResult::Cancelled));
        assert_eq!(g.count(Role::None), 16);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let mut g = walled();
        g.set_role(Point::new(2, 4), Role::Barrier);
        g.set_role(Point::new(3, 1), Role::Barrier);
        let start = Point::new(0, 0);
        let end = Point::new(1, 4);
        g.set_role(start, Role::Start);
        g.set_role(end, Role::End);

        let trace = |g: &mut Grid| {
            let mut frames: Vec<Vec<Role>> = Vec::new();
            let result = run(
                g,
                start,
                end,
                &Chebyshev,
                &mut |grid: &Grid| frames.push(grid.iter().map(|c| c.role).collect()),
                &Never,
            )
            .unwrap();
            (result, frames)
        };

        let (first, first_frames) = trace(&mut g);
        let marked = g.clone();
        g.clear_search();
        let (second, second_frames) = trace(&mut g);

        assert!(first.is_found());
        assert_eq!(first, second);
        assert_eq!(first_frames, second_frames);
        assert_eq!(g, marked);
    }

    #[test]
    fn path_is_shortest_on_random_grids() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..150 {
            let rows = rng.random_range(2..10);
            let cols = rng.random_range(2..10);
            let mut base = Grid::new(rows, cols);
            for cell in base.bounds() {
                if rng.random_range(0..10) < 3 {
                    base.set_role(cell, Role::Barrier);
                }
            }
            let start = Point::new(rng.random_range(0..rows), rng.random_range(0..cols));
            let end = Point::new(rng.random_range(0..rows), rng.random_range(0..cols));
            base.reset(start);
            base.reset(end);

            let expected = DistanceMap::compute(&base, start).get(end);
            for kind in HeuristicKind::ALL {
                let mut g = base.clone();
                let result = run(&mut g, start, end, &kind, &mut NoopObserver, &Never).unwrap();
                match (expected, &result) {
                    (Some(d), PathResult::Found(path)) => {
                        assert_eq!(path.len() as u32, d, "{kind} from {start} to {end}");
                        assert_walk(path, start, end);
                        assert!(path.iter().all(|&p| base.is_passable(p)));
                    }
                    (None, PathResult::NotFound) => {}
                    _ => panic!("{kind}: expected {expected:?}, got {result:?}"),
                }
            }
        }
    }

    #[test]
    fn inadmissible_closures_are_accepted() {
        // An overestimating heuristic still produces a valid walk, just not
        // necessarily a shortest one.
        let mut g = walled();
        let start = Point::new(0, 0);
        let end = Point::new(0, 4);
        let greedy = |a: Point, b: Point| 10.0 * f64::from(manhattan(a, b));
        let result = run(&mut g, start, end, &greedy, &mut NoopObserver, &Never).unwrap();
        assert_walk(result.path().unwrap(), start, end);
    }

    #[test]
    fn informed_search_expands_less() {
        let start = Point::new(0, 0);
        let end = Point::new(0, 9);
        let expanded = |g: &Grid| g.count(Role::Closed) + g.count(Role::Path);
        let mut informed = Grid::new(10, 10);
        let mut blind = Grid::new(10, 10);
        run(&mut informed, start, end, &Manhattan, &mut NoopObserver, &Never).unwrap();
        run(&mut blind, start, end, &Zero, &mut NoopObserver, &Never).unwrap();
        // Manhattan is exact here: only the straight corridor is expanded.
        assert_eq!(expanded(&informed), 8);
        assert!(expanded(&blind) > expanded(&informed));
    }
}
