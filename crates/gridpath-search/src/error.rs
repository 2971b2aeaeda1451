use std::fmt;

use gridpath_core::Point;

/// Outcome of a search that was allowed to run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathResult {
    /// A shortest path: every cell after the start, up to and including the
    /// end. Its length is the number of steps; empty when start == end.
    Found(Vec<Point>),
    /// The frontier ran dry before reaching the end.
    NotFound,
    /// The cancel signal was raised before the search finished.
    Cancelled,
}

impl PathResult {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            PathResult::Found(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathResult::Found(p) => write!(f, "path found ({} steps)", p.len()),
            PathResult::NotFound => f.write_str("no path exists"),
            PathResult::Cancelled => f.write_str("search cancelled"),
        }
    }
}

/// A search that could not be started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// No start cell has been designated.
    MissingStart,
    /// No end cell has been designated.
    MissingEnd,
    /// An endpoint lies outside the grid.
    OutOfBounds { point: Point },
    /// An endpoint is a barrier.
    Blocked { point: Point },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => f.write_str("search: no start cell designated"),
            Self::MissingEnd => f.write_str("search: no end cell designated"),
            Self::OutOfBounds { point } => write!(f, "search: endpoint {point} is outside the grid"),
            Self::Blocked { point } => write!(f, "search: endpoint {point} is a barrier"),
        }
    }
}

impl std::error::Error for SearchError {}
