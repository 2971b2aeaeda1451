use std::fmt;
use std::str::FromStr;

use gridpath_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

/// Straight-line (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    dr.hypot(dc)
}

/// Estimate of the remaining cost from `from` to `to`.
///
/// Implementations must be non-negative and must never overestimate the
/// number of orthogonal steps between the two points, otherwise the path
/// returned by A* is no longer guaranteed to be shortest.
pub trait Heuristic {
    fn estimate(&self, from: Point, to: Point) -> f64;
}

impl<F: Fn(Point, Point) -> f64> Heuristic for F {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        self(from, to)
    }
}

/// `max(|Δrow|, |Δcol|)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Chebyshev;

impl Heuristic for Chebyshev {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        f64::from(chebyshev(from, to))
    }
}

/// `|Δrow| + |Δcol|`, exact on an open grid.
#[derive(Debug, Default, Clone, Copy)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        f64::from(manhattan(from, to))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Euclidean;

impl Heuristic for Euclidean {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        euclidean(from, to)
    }
}

/// `|Δrow|` only.
#[derive(Debug, Default, Clone, Copy)]
pub struct Vertical;

impl Heuristic for Vertical {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        f64::from((from.row - to.row).abs())
    }
}

/// `|Δcol|` only.
#[derive(Debug, Default, Clone, Copy)]
pub struct Horizontal;

impl Heuristic for Horizontal {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        f64::from((from.col - to.col).abs())
    }
}

/// Always zero: A* degenerates into Dijkstra's algorithm.
#[derive(Debug, Default, Clone, Copy)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _from: Point, _to: Point) -> f64 {
        0.0
    }
}

/// The built-in heuristics, selectable at runtime by name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HeuristicKind {
    #[default]
    Chebyshev,
    Manhattan,
    Euclidean,
    Vertical,
    Horizontal,
    Zero,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 6] = [
        HeuristicKind::Chebyshev,
        HeuristicKind::Manhattan,
        HeuristicKind::Euclidean,
        HeuristicKind::Vertical,
        HeuristicKind::Horizontal,
        HeuristicKind::Zero,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            HeuristicKind::Chebyshev => "chebyshev",
            HeuristicKind::Manhattan => "manhattan",
            HeuristicKind::Euclidean => "euclidean",
            HeuristicKind::Vertical => "vertical",
            HeuristicKind::Horizontal => "horizontal",
            HeuristicKind::Zero => "zero",
        }
    }
}

impl Heuristic for HeuristicKind {
    fn estimate(&self, from: Point, to: Point) -> f64 {
        match self {
            HeuristicKind::Chebyshev => Chebyshev.estimate(from, to),
            HeuristicKind::Manhattan => Manhattan.estimate(from, to),
            HeuristicKind::Euclidean => Euclidean.estimate(from, to),
            HeuristicKind::Vertical => Vertical.estimate(from, to),
            HeuristicKind::Horizontal => Horizontal.estimate(from, to),
            HeuristicKind::Zero => Zero.estimate(from, to),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown heuristic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHeuristic(pub String);

impl fmt::Display for UnknownHeuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown heuristic \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for UnknownHeuristic {}

impl FromStr for HeuristicKind {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let alias = match wanted.as_str() {
            "dijkstra" | "none" => "zero",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|k| k.name() == alias)
            .ok_or_else(|| UnknownHeuristic(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Range;

    #[test]
    fn distances() {
        let a = Point::new(1, 2);
        let b = Point::new(4, 6);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(chebyshev(a, b), 4);
        assert!((euclidean(a, b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn every_builtin_is_admissible_on_an_open_grid() {
        // On an open 4-connected grid the true cost is the Manhattan distance.
        let rng = Range::with_size(7, 7);
        let goal = Point::new(2, 5);
        for kind in HeuristicKind::ALL {
            for p in rng {
                let h = kind.estimate(p, goal);
                assert!(h >= 0.0, "{kind} negative at {p}");
                assert!(h <= f64::from(manhattan(p, goal)), "{kind} overestimates at {p}");
            }
            assert_eq!(kind.estimate(goal, goal), 0.0);
        }
    }

    #[test]
    fn closures_are_heuristics() {
        let half = |a: Point, b: Point| f64::from(manhattan(a, b)) / 2.0;
        assert_eq!(half.estimate(Point::ZERO, Point::new(2, 2)), 2.0);
    }

    #[test]
    fn parse_names() {
        for kind in HeuristicKind::ALL {
            assert_eq!(kind.name().parse::<HeuristicKind>(), Ok(kind));
        }
        assert_eq!(" Manhattan ".parse::<HeuristicKind>(), Ok(HeuristicKind::Manhattan));
        assert_eq!("dijkstra".parse::<HeuristicKind>(), Ok(HeuristicKind::Zero));
        assert_eq!(
            "octile".parse::<HeuristicKind>(),
            Err(UnknownHeuristic("octile".into()))
        );
        assert_eq!(HeuristicKind::default(), HeuristicKind::Chebyshev);
    }
}
