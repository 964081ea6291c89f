//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop blocks on input (waking every
//! `IDLE_POLL` at most) and redraws only after an event was handled or the
//! terminal was resized. Every redraw is a full `draw_ui` of the current
//! `App`, so there is no partially updated frame.

mod component;
pub mod components;
pub mod event;
pub mod palette;
pub mod ui;

use log::info;
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::board::CELL_COUNT;
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{BoardCursor, BoardEvent, HistoryEvent, HistoryListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::Hit;

const IDLE_POLL: Duration = Duration::from_millis(250);

/// Which pane arrow keys and Enter talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Board,
    History,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// TUI-specific presentation state (not part of core game logic)
pub struct TuiState {
    pub focus: Focus,
    pub cursor: BoardCursor,
    pub history: HistoryListState,
    pub show_help: bool,
}

impl TuiState {
    pub fn new(show_help: bool) -> Self {
        Self {
            focus: Focus::Board, // Players expect to click/play immediately
            cursor: BoardCursor::default(),
            history: HistoryListState::new(),
            show_help,
        }
    }

    /// Re-align presentation state after `app` changed.
    ///
    /// While the board has focus the list follows the displayed step; while
    /// the list has focus its selection is only kept in range.
    fn sync(&mut self, app: &App) {
        match self.focus {
            Focus::Board => self.history.select(app.game.step()),
            Focus::History => self.history.clamp(app.game.len()),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(config.show_help);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));
    ratatui::restore();

    info!(
        "Session ended after {} recorded moves",
        app.game.len().saturating_sub(1)
    );
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &mut TuiState) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame
    let mut frame_area = Rect::default();

    loop {
        if needs_redraw {
            frame_area = terminal.draw(|f| ui::draw_ui(f, app, tui))?.area;
            needs_redraw = false;
        }

        // Process first event + drain everything pending before the next draw
        let mut pending = poll_event_timeout(IDLE_POLL)?;
        while let Some(event) = pending {
            needs_redraw = true;
            if handle_event(app, tui, event, frame_area) == Effect::Quit {
                info!("Quit requested");
                return Ok(());
            }
            pending = poll_event_immediate()?;
        }
    }
}

/// Route one event to the focused component or straight to `update`.
///
/// `frame_area` is the area of the last drawn frame, for mouse hit tests.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent, frame_area: Rect) -> Effect {
    let effect = match event {
        // Resize just needs a redraw
        TuiEvent::Resize => Effect::None,
        TuiEvent::Quit | TuiEvent::ForceQuit => update(app, Action::Quit),
        TuiEvent::Restart => update(app, Action::Restart),
        TuiEvent::ToggleTheme => update(app, Action::ToggleTheme),
        TuiEvent::StepBack => update(app, Action::StepBack),
        TuiEvent::Digit(n) => match usize::from(n).checked_sub(1) {
            Some(index) if index < CELL_COUNT => {
                tui.cursor.index = index;
                update(app, Action::Play(index))
            }
            _ => Effect::None,
        },
        TuiEvent::SwitchFocus => {
            tui.focus = tui.focus.toggle();
            if tui.focus == Focus::History {
                tui.history.select(app.game.step());
            }
            Effect::None
        }
        TuiEvent::MouseClick(column, row) => {
            match ui::hit_test(frame_area, app, tui, column, row) {
                Some(Hit::Cell(index)) => {
                    tui.focus = Focus::Board;
                    tui.cursor.index = index;
                    update(app, Action::Play(index))
                }
                Some(Hit::HistoryEntry(step)) => {
                    tui.focus = Focus::History;
                    tui.history.select(step);
                    update(app, Action::JumpTo(step))
                }
                Some(Hit::Restart) => update(app, Action::Restart),
                Some(Hit::ToggleTheme) => update(app, Action::ToggleTheme),
                None => Effect::None,
            }
        }
        TuiEvent::Up | TuiEvent::Down | TuiEvent::Left | TuiEvent::Right | TuiEvent::Select => {
            match tui.focus {
                Focus::Board => match tui.cursor.handle_event(&event) {
                    Some(BoardEvent::Play(index)) => update(app, Action::Play(index)),
                    None => Effect::None,
                },
                Focus::History => match tui.history.handle_event(&event, app.game.len()) {
                    Some(HistoryEvent::Jump(step)) => update(app, Action::JumpTo(step)),
                    None => Effect::None,
                },
            }
        }
    };
    tui.sync(app);
    effect
}
