//! The [`Cell`] type and its [`Role`] tag.

use std::fmt;

use crate::geom::Point;

/// What a cell currently represents.
///
/// Roles carry algorithmic state only. Mapping roles to colors or glyphs is
/// left to front-ends.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[default]
    None,
    Start,
    End,
    Barrier,
    /// Discovered and waiting in the frontier.
    Open,
    /// Expanded by the search.
    Closed,
    /// Part of the reconstructed path.
    Path,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Role; 7] = [
        Role::None,
        Role::Start,
        Role::End,
        Role::Barrier,
        Role::Open,
        Role::Closed,
        Role::Path,
    ];

    /// Only barriers block movement.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Role::Barrier)
    }

    /// Whether the role was written by a search run (Open, Closed, Path).
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Role::Open | Role::Closed | Role::Path)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::None => "none",
            Role::Start => "start",
            Role::End => "end",
            Role::Barrier => "barrier",
            Role::Open => "open",
            Role::Closed => "closed",
            Role::Path => "path",
        };
        f.write_str(s)
    }
}

/// One addressable grid position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub role: Role,
}

impl Cell {
    /// A fresh cell at `pos` with [`Role::None`].
    #[inline]
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            role: Role::None,
        }
    }

    #[inline]
    pub const fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub const fn col(&self) -> i32 {
        self.pos.col
    }

    #[inline]
    pub const fn is_passable(&self) -> bool {
        self.role.is_passable()
    }

    /// Set the role (builder).
    #[inline]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}
