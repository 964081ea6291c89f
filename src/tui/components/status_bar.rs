//! # StatusBar Component
//!
//! Bordered bar under the board: the game status on the left, the restart
//! control on the right, and the last transient message in the title.
//!
//! Status colouring:
//! - in progress: the next mark in its own colour
//! - won: the winner in the accent colour
//! - draw: plain foreground

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::status::Status;
use crate::tui::component::Component;
use crate::tui::palette::{ACCENT, Palette};

pub const RESTART_LABEL: &str = "Restart Game [r]";

/// Where the restart control sits in a status bar drawn at `area`: right
/// end of the first inner line, one column in from the border.
pub fn restart_rect(area: Rect) -> Rect {
    let inner = Block::bordered().inner(area);
    let width = (Line::from(RESTART_LABEL).width() as u16).min(inner.width.saturating_sub(1));
    Rect::new(
        inner.right().saturating_sub(width + 1),
        inner.y,
        width,
        inner.height.min(1),
    )
}

/// # Props
///
/// - `status`: derived from the displayed snapshot
/// - `message`: transient feedback from the last action, may be empty
/// - `step` / `len`: displayed step and history length, for the
///   "viewing move k of n" hint while time travelling
pub struct StatusBar<'a> {
    pub status: Status,
    pub message: &'a str,
    pub step: usize,
    pub len: usize,
    pub palette: Palette,
}

impl<'a> StatusBar<'a> {
    pub fn new(status: Status, message: &'a str, step: usize, len: usize, palette: Palette) -> Self {
        Self {
            status,
            message,
            step,
            len,
            palette,
        }
    }

    fn status_line(&self) -> Line<'static> {
        let bold = Modifier::BOLD;
        match self.status {
            Status::InProgress(mark) => Line::from(vec![
                Span::raw(" Next Player: "),
                Span::styled(
                    mark.to_string(),
                    Style::default().fg(self.palette.mark_color(mark)).add_modifier(bold),
                ),
            ]),
            Status::Won(mark) => Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    mark.to_string(),
                    Style::default().fg(ACCENT).add_modifier(bold),
                ),
                Span::styled(" wins!", Style::default().add_modifier(bold)),
            ]),
            Status::Draw => Line::from(Span::styled(
                format!(" {}", Status::Draw),
                Style::default().add_modifier(bold),
            )),
        }
    }

    fn time_travel_hint(&self) -> Option<String> {
        (self.step + 1 < self.len).then(|| format!(" viewing move {} of {} ", self.step, self.len - 1))
    }
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut block = Block::bordered()
            .border_style(Style::default().fg(self.palette.border))
            .style(self.palette.base());
        if !self.message.is_empty() {
            block = block.title(Span::styled(
                format!(" {} ", self.message),
                Style::default().fg(self.palette.muted),
            ));
        }
        if let Some(hint) = self.time_travel_hint() {
            block = block.title_bottom(
                Line::from(Span::styled(hint, Style::default().fg(self.palette.muted)))
                    .right_aligned(),
            );
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(self.status_line()), inner);
        frame.render_widget(
            Paragraph::new(Span::styled(
                RESTART_LABEL,
                Style::default().fg(self.palette.foreground).add_modifier(Modifier::BOLD),
            )),
            restart_rect(area),
        );
    }
}
