//! # TitleBar Component
//!
//! Top line: the game title on the left, the theme toggle on the right.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.theme, palette);
//! title_bar.render(frame, title_area);
//! ```
//!
//! The toggle names the theme it switches *to*, so a light session shows
//! `☾ Dark [t]` and a dark one shows `☀ Light [t]`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::theme::Theme;
use crate::tui::component::Component;
use crate::tui::palette::{ACCENT, Palette};

pub const TITLE: &str = "Tic Tac Toe";

/// Top bar component showing the title and theme toggle.
///
/// # Props
///
/// - `theme`: active theme, decides the toggle text
/// - `palette`: colours for the active theme
pub struct TitleBar {
    pub theme: Theme,
    pub palette: Palette,
}

impl TitleBar {
    pub fn new(theme: Theme, palette: Palette) -> Self {
        Self { theme, palette }
    }

    /// Text of the theme toggle.
    pub fn toggle_text(&self) -> String {
        let icon = match self.theme.toggle() {
            Theme::Dark => "☾",
            Theme::Light => "☀",
        };
        format!("{} {} [t]", icon, self.theme.toggle_label())
    }

    /// Where the toggle sits in a title bar drawn at `area`: right end of
    /// the line, one column in from the edge.
    pub fn toggle_rect(&self, area: Rect) -> Rect {
        let width =
            (Line::from(self.toggle_text()).width() as u16).min(area.width.saturating_sub(1));
        Rect::new(
            area.right().saturating_sub(width + 1),
            area.y,
            width,
            area.height.min(1),
        )
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            format!(" {TITLE}"),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )))
        .style(self.palette.base());
        frame.render_widget(title, area);

        let toggle = Paragraph::new(Span::styled(
            self.toggle_text(),
            Style::default().fg(self.palette.muted),
        ));
        frame.render_widget(toggle, self.toggle_rect(area));
    }
}
