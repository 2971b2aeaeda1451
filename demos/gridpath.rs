//! Paint a grid in the terminal and watch A* search it.
//!
//! Run: cargo run --bin gridpath -- --help

use std::error::Error;

use clap::Parser;
use gridpath_core::{Grid, Point};
use gridpath_demos::{DemoConfig, Palette, TerminalView, layout, run_interactive};
use gridpath_search::Session;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let config = DemoConfig::parse();

    if let Err(e) = run(&config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(config: &DemoConfig) -> Result<(), Box<dyn Error>> {
    let seed = config.seed.unwrap_or_else(rand::random);
    info!("barrier seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut session = match &config.map {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let session = layout::parse(&text)?;
            info!("loaded {} from {}", session.grid().bounds(), path.display());
            session
        }
        None => {
            let mut session = Session::new(config.rows.max(1), config.cols.max(1));
            if config.headless {
                place_corners(&mut session);
            }
            layout::scatter_barriers(&mut session, config.density(), &mut rng);
            session
        }
    };

    if config.headless {
        return headless(&mut session, config);
    }

    let mut view = TerminalView::new(
        Palette::default(),
        config.step_delay(),
        session.cancel_token().clone(),
    );
    view.init()?;
    let res = run_interactive(
        &mut session,
        &config.heuristic,
        &mut view,
        config.density(),
        &mut rng,
    );
    view.close();
    res
}

/// Put the endpoints in opposite corners if the layout lacks them.
fn place_corners(session: &mut Session) {
    let grid = session.grid();
    let far = Point::new(grid.rows() - 1, grid.cols() - 1);
    if session.start().is_none() && session.end() != Some(Point::ZERO) {
        session.set_start(Point::ZERO);
    }
    if session.end().is_none() && session.start() != Some(far) {
        session.set_end(far);
    }
}

fn headless(session: &mut Session, config: &DemoConfig) -> Result<(), Box<dyn Error>> {
    place_corners(session);
    let mut steps = 0usize;
    let result = session.run(&config.heuristic, &mut |_: &Grid| steps += 1)?;
    print!("{}", layout::render(session.grid()));
    println!("{result} using {} after {steps} steps", config.heuristic);
    Ok(())
}
