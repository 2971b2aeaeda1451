//! **gridpath-core** — data model for step-by-step grid path search.
//!
//! This crate provides the types shared by the search engine and its
//! front-ends: `(row, col)` geometry primitives, role-tagged cells, the
//! [`Grid`] that owns them, and a cooperative [`CancelToken`].

pub mod cancel;
pub mod cell;
pub mod geom;
pub mod grid;

pub use cancel::CancelToken;
pub use cell::{Cell, Role};
pub use geom::{Point, Range};
pub use grid::Grid;
#[cfg(feature = "serde")]
pub use grid::SnapshotError;
