//! # Actions
//!
//! Everything that can happen in a session becomes an `Action`.
//! Player clicks a cell? That's `Action::Play(index)`.
//! Player picks a history entry? That's `Action::JumpTo(step)`.
//!
//! The `update()` function takes the current state and an action and
//! applies the transition. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect for the host loop)
//! ```

use log::{debug, info};

use crate::core::game::MoveOutcome;
use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the side-to-move's mark on a cell of the displayed board.
    Play(usize),
    /// Display an earlier (or later) recorded step.
    JumpTo(usize),
    /// Step back one entry, if there is one.
    StepBack,
    Restart,
    ToggleTheme,
    Quit,
}

/// What the host loop must do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Play(index) => {
            let from_past = !app.game.is_latest();
            if let MoveOutcome::Accepted { mark, step, .. } = app.game.apply_move(index) {
                debug!("{} played cell {} (step {})", mark, index, step);
                if from_past {
                    info!("Branched at move #{}, later moves discarded", step - 1);
                }
                app.status_message.clear();
            }
            Effect::None
        }
        Action::JumpTo(step) => {
            if app.game.jump_to(step) {
                app.status_message = if step == 0 {
                    "Back at game start".to_string()
                } else {
                    format!("Viewing move #{step}")
                };
            }
            Effect::None
        }
        Action::StepBack => {
            if let Some(step) = app.game.step().checked_sub(1) {
                return update(app, Action::JumpTo(step));
            }
            Effect::None
        }
        Action::Restart => {
            app.game.restart();
            app.status_message = "New game".to_string();
            info!("Game restarted");
            Effect::None
        }
        Action::ToggleTheme => {
            app.theme = app.theme.toggle();
            app.status_message = format!("Theme: {}", app.theme);
            info!("Theme switched to {}", app.theme);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
