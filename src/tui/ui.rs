//! Screen layout, the top-level draw function and mouse hit testing.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Tic Tac Toe                       ☾ Dark [t] │  title
//! ├─ Board ─────────────────┬─ Move History ─────┤
//! │        ┌─┐┌─┐┌─┐        │ ▶ Go to game start │
//! │        ...              │                    │  main
//! ├─────────────────────────┴────────────────────┤
//! │ Next Player: X             Restart Game [r]  │  status
//! ├──────────────────────────────────────────────┤
//! │ ←↑↓→ move  Enter play ...                    │  help (optional)
//! └──────────────────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::board::hit_test_cell;
use crate::tui::components::status_bar::restart_rect;
use crate::tui::components::{BoardView, HelpBar, HistoryList, StatusBar, TitleBar};
use crate::tui::palette::{PRIMARY, Palette};
use crate::tui::{Focus, TuiState};

pub const HISTORY_WIDTH: u16 = 26;

/// Screen areas for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub title: Rect,
    /// Bordered pane around the board.
    pub board_pane: Rect,
    /// Inside of `board_pane`; the grid is centered here.
    pub board: Rect,
    pub history: Rect,
    pub status: Rect,
    pub help: Option<Rect>,
}

pub fn layout(area: Rect, show_help: bool) -> AppLayout {
    use Constraint::{Fill, Length};
    let help_height = if show_help { 1 } else { 0 };
    let [title, main, status, help] =
        Layout::vertical([Length(1), Fill(1), Length(3), Length(help_height)]).areas(area);
    let [board_pane, history] =
        Layout::horizontal([Fill(1), Length(HISTORY_WIDTH)]).areas(main);

    AppLayout {
        title,
        board_pane,
        board: Block::bordered().inner(board_pane),
        history,
        status,
        help: show_help.then_some(help),
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let palette = Palette::for_theme(app.theme);
    let areas = layout(frame.area(), tui.show_help);

    // Theme background under everything
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    TitleBar::new(app.theme, palette).render(frame, areas.title);

    let board_border = if tui.focus == Focus::Board {
        PRIMARY
    } else {
        palette.border
    };
    frame.render_widget(
        Block::bordered()
            .title(" Board ")
            .border_style(Style::default().fg(board_border))
            .title_style(Style::default().fg(palette.foreground)),
        areas.board_pane,
    );
    let cursor = (tui.focus == Focus::Board).then_some(tui.cursor.index);
    BoardView::new(app.game.board(), app.winning_line(), cursor, palette)
        .render(frame, areas.board);

    HistoryList::new(
        &mut tui.history,
        app.game.history(),
        app.game.step(),
        tui.focus == Focus::History,
        palette,
    )
    .render(frame, areas.history);

    StatusBar::new(
        app.status(),
        &app.status_message,
        app.game.step(),
        app.game.len(),
        palette,
    )
    .render(frame, areas.status);

    if let Some(help_area) = areas.help {
        HelpBar::new(tui.focus, app.status().is_terminal(), palette).render(frame, help_area);
    }
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Cell(usize),
    HistoryEntry(usize),
    Restart,
    ToggleTheme,
}

/// Hit test: map a screen position to a board cell, history entry, or one
/// of the two controls.
///
/// Uses the same `layout()` and component geometry as `draw_ui`, so it must
/// be given the frame area of the last draw.
pub fn hit_test(frame_area: Rect, app: &App, tui: &TuiState, column: u16, row: u16) -> Option<Hit> {
    let areas = layout(frame_area, tui.show_help);
    let position = Position::new(column, row);
    if let Some(index) = hit_test_cell(areas.board, column, row) {
        return Some(Hit::Cell(index));
    }
    if let Some(step) = tui.history.hit_test(areas.history, app.game.len(), column, row) {
        return Some(Hit::HistoryEntry(step));
    }
    if restart_rect(areas.status).contains(position) {
        return Some(Hit::Restart);
    }
    let palette = Palette::for_theme(app.theme);
    TitleBar::new(app.theme, palette)
        .toggle_rect(areas.title)
        .contains(position)
        .then_some(Hit::ToggleTheme)
}
