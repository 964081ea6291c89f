//! # Palette
//!
//! Terminal colours for each `Theme`. The core only knows which theme is
//! active; turning that into colours is the adapter's job.
//!
//! The three brand colours are shared by both themes:
//!
//! | Role      | Colour    | Used for                 |
//! |-----------|-----------|--------------------------|
//! | primary   | `#0070f3` | X, cursor, focus         |
//! | secondary | `#21c87a` | O                        |
//! | accent    | `#ff5722` | winner text, title       |
//!
//! `highlight` is the accent at ~18% over the theme's background, used
//! behind the cells of a winning line.

use ratatui::style::{Color, Style};

use crate::core::board::{Cell, Mark};
use crate::core::theme::Theme;

pub const PRIMARY: Color = Color::Rgb(0x00, 0x70, 0xf3);
pub const SECONDARY: Color = Color::Rgb(0x21, 0xc8, 0x7a);
pub const ACCENT: Color = Color::Rgb(0xff, 0x57, 0x22);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub highlight: Color,
    pub cursor: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::Rgb(0xfa, 0xfa, 0xfa),
                foreground: Color::Rgb(0x21, 0x21, 0x21),
                muted: Color::Rgb(0x75, 0x75, 0x75),
                border: Color::Rgb(0xc8, 0xc8, 0xc8),
                highlight: Color::Rgb(0xfb, 0xdd, 0xd3),
                cursor: Color::Rgb(0xe1, 0xeb, 0xfa),
            },
            Theme::Dark => Self {
                background: Color::Rgb(0x18, 0x18, 0x1b),
                foreground: Color::Rgb(0xeb, 0xeb, 0xeb),
                muted: Color::Rgb(0x9e, 0x9e, 0x9e),
                border: Color::Rgb(0x4a, 0x4a, 0x52),
                highlight: Color::Rgb(0x42, 0x23, 0x1c),
                cursor: Color::Rgb(0x2d, 0x37, 0x4b),
            },
        }
    }

    /// Base style for anything drawn on the background.
    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn mark_color(&self, mark: Mark) -> Color {
        match mark {
            Mark::X => PRIMARY,
            Mark::O => SECONDARY,
        }
    }

    pub fn cell_color(&self, cell: Cell) -> Color {
        cell.mark().map_or(self.muted, |mark| self.mark_color(mark))
    }
}
