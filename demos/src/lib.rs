//! Front-end pieces shared by the `gridpath` binary.
//!
//! Demonstrates: painting endpoints and barriers with the mouse, animated
//! A* searches that can be cancelled from the keyboard, ASCII map loading,
//! and random barrier scattering.

pub mod config;
pub mod layout;
pub mod palette;
pub mod terminal;

pub use config::DemoConfig;
pub use layout::{LayoutError, parse, render, scatter_barriers};
pub use palette::{Palette, glyph};
pub use terminal::{TerminalView, run_interactive};
