//! Text layouts: parse ASCII maps into sessions, print grids back, and
//! scatter random barriers.
//!
//! Map format: one line per row, `#` barrier, `S` start, `E` end, `.` or
//! space empty. The search marks written by [`render`] (`o`, `x`, `*`) read
//! back as empty cells.

use std::fmt;

use gridpath_core::{Grid, Point, Role};
use gridpath_search::Session;
use rand::{Rng, RngExt};

use crate::palette::glyph;

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Lines have different widths.
    InconsistentSize { line: usize, expected: usize, found: usize },
    /// A character outside the map alphabet.
    InvalidChar { ch: char, pos: Point },
    /// More than one `S` or more than one `E`.
    DuplicateEndpoint { ch: char, pos: Point },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout: line {line} is {found} wide, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "layout: invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateEndpoint { ch, pos } => {
                write!(f, "layout: second \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Build a session from an ASCII map.
pub fn parse(text: &str) -> Result<Session, LayoutError> {
    let lines: Vec<Vec<char>> = text
        .lines()
        .map(|l| l.trim_end_matches('\r').chars().collect())
        .collect();
    let cols = lines.first().map_or(0, Vec::len);
    for (i, line) in lines.iter().enumerate() {
        if line.len() != cols {
            return Err(LayoutError::InconsistentSize {
                line: i + 1,
                expected: cols,
                found: line.len(),
            });
        }
    }

    let mut session = Session::new(lines.len() as i32, cols as i32);
    for (row, line) in lines.iter().enumerate() {
        for (col, &ch) in line.iter().enumerate() {
            let pos = Point::new(row as i32, col as i32);
            match ch {
                '#' => session.set_barrier(pos),
                'S' if session.start().is_some() => {
                    return Err(LayoutError::DuplicateEndpoint { ch, pos });
                }
                'S' => session.set_start(pos),
                'E' if session.end().is_some() => {
                    return Err(LayoutError::DuplicateEndpoint { ch, pos });
                }
                'E' => session.set_end(pos),
                '.' | ' ' | 'o' | 'x' | '*' => {}
                _ => return Err(LayoutError::InvalidChar { ch, pos }),
            }
        }
    }
    Ok(session)
}

/// One line of glyphs per row.
pub fn render(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.len() + grid.rows().max(0) as usize);
    for row in 0..grid.rows() {
        out.extend(grid.row(row).map(|c| glyph(c.role)));
        out.push('\n');
    }
    out
}

/// Turn roughly `density` of the blank cells into barriers, leaving the
/// endpoints alone. Returns the number of barriers placed.
pub fn scatter_barriers<R: Rng>(session: &mut Session, density: f64, rng: &mut R) -> usize {
    let density = density.clamp(0.0, 1.0);
    let blank: Vec<Point> = session
        .grid()
        .iter()
        .filter(|c| c.role == Role::None)
        .map(|c| c.pos)
        .collect();
    let mut placed = 0;
    for p in blank {
        if rng.random::<f64>() < density {
            session.set_barrier(p);
            placed += 1;
        }
    }
    placed
}
