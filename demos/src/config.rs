//! Command-line configuration for the `gridpath` demo.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use gridpath_search::HeuristicKind;

/// Rows and columns of the default square grid.
pub const DEFAULT_SIZE: i32 = 50;

/// Paint a grid and watch A* search it.
///
/// Interactive keys: left click paints (start, then end, then barriers),
/// right click erases, space runs the search, `r` scatters random barriers,
/// `c` clears the grid, `q` or Esc quits (or cancels a running search).
#[derive(Parser, Debug, Clone)]
#[command(name = "gridpath", version, about, long_about = None)]
pub struct DemoConfig {
    /// Number of rows
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    pub rows: i32,

    /// Number of columns
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    pub cols: i32,

    /// Heuristic: chebyshev, manhattan, euclidean, vertical, horizontal or zero
    #[arg(long, default_value_t = HeuristicKind::Chebyshev)]
    pub heuristic: HeuristicKind,

    /// Share of cells turned into barriers when scattering (0.0 - 1.0)
    #[arg(long, default_value_t = 0.25)]
    pub density: f64,

    /// Seed for barrier scattering; random if not given
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause after every search step, in milliseconds
    #[arg(long, default_value_t = 10)]
    pub delay_ms: u64,

    /// Load the grid from an ASCII map (`#` barrier, `S` start, `E` end)
    #[arg(long)]
    pub map: Option<PathBuf>,

    /// Search once and print the result as text instead of opening the
    /// terminal UI
    #[arg(long)]
    pub headless: bool,
}

impl DemoConfig {
    #[inline]
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Barrier density clamped to `[0, 1]`.
    #[inline]
    pub fn density(&self) -> f64 {
        self.density.clamp(0.0, 1.0)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SIZE,
            cols: DEFAULT_SIZE,
            heuristic: HeuristicKind::default(),
            density: 0.25,
            seed: None,
            delay_ms: 10,
            map: None,
            headless: false,
        }
    }
}
