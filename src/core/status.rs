//! Game status, derived purely from the displayed snapshot.
//!
//! ```text
//!            move accepted
//!   InProgress(X) ⇄ InProgress(O)
//!         │               │
//!         ├──► Won(mark) ◄┤        line completed
//!         └──► Draw ◄─────┘        board full, no line
//! ```
//!
//! `Won` and `Draw` ignore moves on the current snapshot. Jumping to an
//! earlier step recomputes the status from that board.

use std::fmt;

use crate::core::board::{Board, Mark};
use crate::core::rules::{is_draw, winner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress(Mark),
    Won(Mark),
    Draw,
}

impl Status {
    /// Status of `board` shown at history `step`.
    pub fn of(board: &Board, step: usize) -> Self {
        if let Some(mark) = winner(board) {
            Status::Won(mark)
        } else if is_draw(board) {
            Status::Draw
        } else {
            Status::InProgress(Mark::for_step(step))
        }
    }

    /// Won or drawn: clicks on the board are ignored.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::InProgress(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::InProgress(mark) => write!(f, "Next Player: {mark}"),
            Status::Won(mark) => write!(f, "{mark} wins!"),
            Status::Draw => write!(f, "Draw game!"),
        }
    }
}
