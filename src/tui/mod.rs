//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screens,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 250ms waiting for input and
//! only redraws after an event (key, mouse, resize). All pending events are
//! drained before the next draw.

pub mod art;
mod component;
pub mod components;
pub mod event;
pub mod theme;
pub mod ui;

use log::{debug, error, info};
use std::io::{self, Write, stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Route};
use crate::tui::component::EventHandler;
use crate::tui::components::{DogListState, ListEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Theme;

const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core navigation state)
pub struct TuiState {
    /// Highlight and scroll position of the list screen. Kept while a
    /// detail screen is open so Back returns to the same spot.
    pub list: DogListState,
}

impl TuiState {
    pub fn new(catalog_len: usize) -> Self {
        Self {
            list: DogListState::new(catalog_len),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        enable_terminal_modes(&mut stdout())?;
        info!("Terminal modes enabled (mouse, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

fn enable_terminal_modes(out: &mut impl Write) -> io::Result<()> {
    execute!(out, EnableMouseCapture, Hide)
}

/// Map a terminal event to a core action for the current route.
///
/// `frame_area` is the full terminal area, used to hit test mouse clicks.
pub fn handle_event(
    app: &App,
    tui: &mut TuiState,
    event: &TuiEvent,
    frame_area: Rect,
) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit | TuiEvent::Quit) {
        return Some(Action::Quit);
    }

    match app.route {
        Route::List => {
            if let TuiEvent::MouseClick(_col, row) = *event {
                let list_area = ui::list_areas(frame_area).list;
                let hit = tui.list.hit_test(row, list_area)?;
                tui.list.select(hit);
                return Some(Action::OpenDetail(hit));
            }
            match tui.list.handle_event(event)? {
                ListEvent::Open(position) => Some(Action::OpenDetail(position)),
            }
        }
        Route::Detail(_) => match event {
            TuiEvent::Back => Some(Action::Back),
            _ => None,
        },
    }
}

pub fn run(config: &ResolvedConfig, catalog: Catalog) -> io::Result<()> {
    let mut app = App::from_config(catalog, config);
    let mut tui = TuiState::new(app.catalog.len());
    let theme = Theme::new(config.truecolor);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui, &theme));
    ratatui::restore();

    match &result {
        Ok(()) => info!("Pati shutting down"),
        Err(e) => error!("Terminal failed: {}", e),
    }
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    theme: &Theme,
) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui, theme))?;
            needs_redraw = false;
        }

        let mut next = poll_event_timeout(IDLE_POLL)?;
        if next.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        while let Some(event) = next {
            // Resize just needs a redraw (already flagged above)
            if event != TuiEvent::Resize {
                let frame_area = terminal.get_frame().area();
                if let Some(action) = handle_event(app, tui, &event, frame_area) {
                    match update(app, action) {
                        Effect::Quit => return Ok(()),
                        Effect::Navigated => debug!("Route is now {:?}", app.route),
                        Effect::None => {}
                    }
                }
            }
            next = poll_event_immediate()?;
        }
    }
}
