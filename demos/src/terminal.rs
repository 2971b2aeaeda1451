//! Crossterm front-end: draws grids, reads the mouse and keyboard, and
//! animates searches.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind},
    execute, queue,
    style::{self, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use gridpath_core::{CancelToken, Grid, Point};
use gridpath_search::{Heuristic, PathResult, Session, StepObserver};
use log::{info, warn};
use rand::Rng;

use crate::layout::scatter_barriers;
use crate::palette::Palette;

/// Terminal columns used per grid cell, so that cells look square.
const CELL_WIDTH: u16 = 2;

/// Translate a terminal position into a grid cell.
pub fn cell_at(column: u16, row: u16) -> Point {
    Point::new(i32::from(row), i32::from(column / CELL_WIDTH))
}

/// What the user asked for between searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Paint(Point),
    Erase(Point),
    Search,
    Scatter,
    Clear,
    Quit,
}

/// Map a terminal event to a [`Command`].
pub fn command_for(ev: &Event) -> Option<Command> {
    match ev {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char(' ') | KeyCode::Enter => Some(Command::Search),
            KeyCode::Char('r') => Some(Command::Scatter),
            KeyCode::Char('c') => Some(Command::Clear),
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        },
        Event::Mouse(me) => {
            let p = cell_at(me.column, me.row);
            match me.kind {
                MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                    Some(Command::Paint(p))
                }
                MouseEventKind::Down(MouseButton::Right)
                | MouseEventKind::Drag(MouseButton::Right) => Some(Command::Erase(p)),
                _ => None,
            }
        }
        _ => None,
    }
}

/// A terminal that renders grids with a [`Palette`].
///
/// While a search runs the view is also its [`StepObserver`]: every step is
/// drawn, followed by a pause during which `q` or Esc raise the cancel token.
pub struct TerminalView {
    palette: Palette,
    delay: Duration,
    cancel: CancelToken,
    status: String,
    // First I/O error hit inside `on_step`, which cannot return it.
    error: Option<io::Error>,
    active: bool,
}

impl TerminalView {
    /// Create a view. `cancel` is raised when the user interrupts a search.
    pub fn new(palette: Palette, delay: Duration, cancel: CancelToken) -> Self {
        Self {
            palette,
            delay,
            cancel,
            status: String::new(),
            error: None,
            active: false,
        }
    }

    /// Enter raw mode and the alternate screen, with mouse capture.
    pub fn init(&mut self) -> io::Result<()> {
        self.enter(terminal::enable_raw_mode, || {
            let mut stdout = io::stdout();
            execute!(
                stdout,
                terminal::EnterAlternateScreen,
                cursor::Hide,
                event::EnableMouseCapture,
                terminal::Clear(ClearType::All)
            )
        })
    }

    /// Once raw mode is on, `close` has something to undo even if the
    /// screen setup fails.
    fn enter<R, S>(&mut self, raw: R, screen: S) -> io::Result<()>
    where
        R: FnOnce() -> io::Result<()>,
        S: FnOnce() -> io::Result<()>,
    {
        raw()?;
        self.active = true;
        screen()
    }

    /// Leave the alternate screen and restore the terminal.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            event::DisableMouseCapture,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Draw every cell, then the status line below the grid.
    pub fn draw(&self, grid: &Grid) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        for row in 0..grid.rows() {
            queue!(stdout, cursor::MoveTo(0, row as u16))?;
            for cell in grid.row(row) {
                queue!(
                    stdout,
                    SetBackgroundColor(self.palette.color(cell.role)),
                    Print("  ")
                )?;
            }
        }
        queue!(
            stdout,
            style::ResetColor,
            cursor::MoveTo(0, grid.rows() as u16),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(style::Color::Grey),
            Print(&self.status),
            style::ResetColor
        )?;
        stdout.flush()
    }

    /// Wait up to `timeout` for an event.
    pub fn next_event(&self, timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            return event::read().map(Some);
        }
        Ok(None)
    }

    /// Pause for the step delay while watching for an interrupt.
    fn pause(&mut self) -> io::Result<()> {
        let deadline = Instant::now() + self.delay;
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            if let Some(ev) = self.next_event(left)? {
                if command_for(&ev) == Some(Command::Quit) {
                    info!("search interrupted");
                    self.cancel.cancel();
                    return Ok(());
                }
            }
            if left.is_zero() {
                return Ok(());
            }
        }
    }

    /// Take the I/O error recorded during the last search, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

impl StepObserver for TerminalView {
    fn on_step(&mut self, grid: &Grid) {
        if self.error.is_some() {
            return;
        }
        let res = self.draw(grid).and_then(|()| self.pause());
        if let Err(e) = res {
            warn!("render failed: {e}");
            self.cancel.cancel();
            self.error = Some(e);
        }
    }
}

impl Drop for TerminalView {
    fn drop(&mut self) {
        self.close();
    }
}

/// The paint / search loop.
///
/// Returns when the user quits. Search failures (no start, no end) are
/// shown on the status line rather than ending the loop.
pub fn run_interactive<H, R>(
    session: &mut Session,
    heuristic: &H,
    view: &mut TerminalView,
    density: f64,
    rng: &mut R,
) -> Result<(), Box<dyn std::error::Error>>
where
    H: Heuristic + ?Sized,
    R: Rng,
{
    view.set_status("click: paint  right click: erase  space: search  r: scatter  c: clear  q: quit");
    view.draw(session.grid())?;

    loop {
        let Some(ev) = view.next_event(Duration::from_millis(250))? else {
            continue;
        };
        if let Event::Resize(..) = ev {
            let mut stdout = io::stdout();
            execute!(stdout, terminal::Clear(ClearType::All))?;
        }
        match command_for(&ev) {
            Some(Command::Paint(p)) => session.paint(p),
            Some(Command::Erase(p)) => session.erase(p),
            Some(Command::Scatter) => {
                session.clear_search();
                let n = scatter_barriers(session, density, rng);
                view.set_status(format!("{n} barriers added"));
            }
            Some(Command::Clear) => {
                session.clear();
                view.set_status("grid cleared");
            }
            Some(Command::Search) => {
                view.set_status("searching (q to cancel)");
                let status = match session.run(heuristic, view) {
                    Ok(result) => describe(&result),
                    Err(e) => e.to_string(),
                };
                if let Some(e) = view.take_error() {
                    return Err(e.into());
                }
                view.set_status(status);
            }
            Some(Command::Quit) => return Ok(()),
            None => {}
        }
        view.draw(session.grid())?;
    }
}

/// One-line summary of a search result.
pub fn describe(result: &PathResult) -> String {
    match result {
        PathResult::Found(path) if path.is_empty() => "start is the end".to_string(),
        other => other.to_string(),
    }
}
