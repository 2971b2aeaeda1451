//! Observable shortest-path search on role-tagged grids.
//!
//! The centrepiece is [`astar::run`], an A* search over the orthogonal moves
//! of a [`gridpath_core::Grid`] that writes its progress back into the grid
//! (open, closed and path roles) and hands the grid to a [`StepObserver`]
//! after every step, so that a front-end can animate it. Alongside it:
//!
//! - **Heuristics** ([`Chebyshev`], [`Manhattan`], [`Euclidean`],
//!   [`Vertical`], [`Horizontal`], [`Zero`], or any closure)
//! - **BFS** step-distance maps ([`DistanceMap`])
//! - **Dijkstra** over labelled weighted graphs ([`WeightedGraph`])
//! - **Session**, the grid plus endpoints plus cancel token that front-ends
//!   edit and search through ([`Session`])
//!
//! # Seams
//!
//! | Trait | Role |
//! |---|---|
//! | [`Heuristic`] | remaining-cost estimate, swappable per run |
//! | [`StepObserver`] | sees the grid after each step |
//! | [`CancelSignal`] | polled once per step |
//! | [`Pather`] | neighbour enumeration for BFS |

pub mod astar;
mod bfs;
mod distance;
mod error;
mod frontier;
pub mod graph;
mod neighbors;
mod session;
mod traits;

pub use bfs::DistanceMap;
pub use distance::{
    Chebyshev, Euclidean, Heuristic, HeuristicKind, Horizontal, Manhattan, UnknownHeuristic,
    Vertical, Zero, chebyshev, euclidean, manhattan,
};
pub use error::{PathResult, SearchError};
pub use graph::{GraphError, WeightedGraph};
pub use neighbors::NeighborTable;
pub use session::Session;
pub use traits::{CancelSignal, Never, NoopObserver, Pather, StepObserver};
