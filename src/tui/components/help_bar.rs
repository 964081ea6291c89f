//! # HelpBar Component
//!
//! One line of key hints at the bottom. Hidden with `show_help = false`.
//! The hints change with focus since arrows and Enter mean different things
//! on the board and in the history list. Once the game is over the board
//! takes no more moves, so its hints point at restart instead.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::Focus;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub struct HelpBar {
    pub focus: Focus,
    /// The displayed snapshot is won or drawn.
    pub game_over: bool,
    pub palette: Palette,
}

impl HelpBar {
    pub fn new(focus: Focus, game_over: bool, palette: Palette) -> Self {
        Self {
            focus,
            game_over,
            palette,
        }
    }

    /// (key, description) pairs for the current focus.
    pub fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = match self.focus {
            Focus::Board if self.game_over => vec![("r", "new game")],
            Focus::Board => vec![("←↑↓→", "move"), ("Enter", "play"), ("1-9", "play cell")],
            Focus::History => vec![("↑↓", "select"), ("Enter", "jump")],
        };
        hints.extend([
            ("Tab", "switch"),
            ("u", "undo view"),
            ("r", "restart"),
            ("t", "theme"),
            ("q", "quit"),
        ]);
        hints
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default()
            .fg(self.palette.foreground)
            .add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(self.palette.muted);

        let spans: Vec<Span> = self
            .hints()
            .into_iter()
            .flat_map(|(key, desc)| {
                [
                    Span::styled(format!(" {key}"), key_style),
                    Span::styled(format!(" {desc} "), text_style),
                ]
            })
            .collect();

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(self.palette.base()),
            area,
        );
    }
}
