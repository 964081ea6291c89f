//! # History List Component
//!
//! One row per recorded position, labelled with `move_label`. The row for
//! the displayed step carries a `▶` marker; the selection (only drawn while
//! the list has focus) is what Enter jumps to.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `HistoryListState` lives in `TuiState`
//! - `HistoryList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::core::game::HistoryEntry;
use crate::tui::event::TuiEvent;
use crate::tui::palette::{PRIMARY, Palette};

/// Persistent state for the history list.
pub struct HistoryListState {
    pub selected: usize,
    pub list_state: ListState,
}

impl Default for HistoryListState {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryListState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default().with_selected(Some(0)),
        }
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index;
        self.list_state.select(Some(index));
    }

    /// Keep the selection on a row that still exists after the history shrank.
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.select(len.saturating_sub(1));
        }
    }

    /// Handle a key event for a list of `len` entries.
    pub fn handle_event(&mut self, event: &TuiEvent, len: usize) -> Option<HistoryEvent> {
        match event {
            TuiEvent::Up => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::Down => {
                if len > 0 {
                    self.select((self.selected + 1).min(len - 1));
                }
                None
            }
            TuiEvent::Select => (self.selected < len).then_some(HistoryEvent::Jump(self.selected)),
            _ => None,
        }
    }

    /// Which entry (if any) is drawn at screen position (`column`, `row`),
    /// given the list's bordered `area` and `len` entries.
    pub fn hit_test(&self, area: Rect, len: usize, column: u16, row: u16) -> Option<usize> {
        let inner = Block::bordered().inner(area);
        if !inner.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.list_state.offset() + usize::from(row - inner.y);
        (index < len).then_some(index)
    }
}

/// Events emitted by the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEvent {
    Jump(usize),
}

/// Transient render wrapper for the history list.
pub struct HistoryList<'a> {
    state: &'a mut HistoryListState,
    entries: &'a [HistoryEntry],
    current_step: usize,
    focused: bool,
    palette: Palette,
}

impl<'a> HistoryList<'a> {
    pub fn new(
        state: &'a mut HistoryListState,
        entries: &'a [HistoryEntry],
        current_step: usize,
        focused: bool,
        palette: Palette,
    ) -> Self {
        Self {
            state,
            entries,
            current_step,
            focused,
            palette,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focused { PRIMARY } else { self.palette.border };
        let block = Block::bordered()
            .title(" Move History ")
            .border_style(Style::default().fg(border_color))
            .title_style(Style::default().fg(self.palette.foreground));

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .map(|(step, entry)| {
                let is_current = step == self.current_step;
                let marker = if is_current { "▶ " } else { "  " };
                let style = if is_current {
                    Style::default()
                        .fg(self.palette.foreground)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(self.palette.muted)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(PRIMARY)),
                    Span::styled(entry.label(step), style),
                ]))
            })
            .collect();

        let highlight = if self.focused {
            Style::default().bg(self.palette.cursor)
        } else {
            Style::default()
        };

        let list = List::new(items)
            .block(block)
            .style(self.palette.base())
            .highlight_style(highlight);

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
