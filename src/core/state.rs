//! # Application State
//!
//! Core session state. Domain data only; presentation state such as the
//! board cursor and list focus lives in the `tui` module.
//!
//! ```text
//! App
//! ├── game: Game                 // history + displayed step
//! ├── theme: Theme               // light / dark
//! └── status_message: String     // transient feedback line
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::game::Game;
use crate::core::rules::winning_line;
use crate::core::status::Status;
use crate::core::theme::Theme;

pub struct App {
    pub game: Game,
    pub theme: Theme,
    pub status_message: String,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            game: Game::new(),
            theme,
            status_message: String::new(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.theme)
    }

    /// Status of the displayed snapshot.
    pub fn status(&self) -> Status {
        Status::of(self.game.board(), self.game.step())
    }

    /// Line to highlight on the displayed snapshot.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        winning_line(self.game.board())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::Mark;

    #[test]
    fn test_app_new_defaults() {
        let app = App::default();
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(app.game.len(), 1);
        assert!(app.status_message.is_empty());
        assert_eq!(app.status(), Status::InProgress(Mark::X));
        assert_eq!(app.winning_line(), None);
    }

    #[test]
    fn test_app_from_config_uses_theme() {
        let config = ResolvedConfig {
            theme: Theme::Dark,
            show_help: true,
        };
        assert_eq!(App::from_config(&config).theme, Theme::Dark);
    }
}
