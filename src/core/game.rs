//! # Game History
//!
//! Every position the game has passed through, plus which one is on screen.
//!
//! ```text
//! history: [ empty ] → [ X@0 ] → [ O@4 ] → [ X@1 ]
//!                         ▲
//!                        step   (jumped back; later entries kept)
//! ```
//!
//! Jumping back keeps the later entries around. Playing a move from an
//! earlier position drops them and starts a new branch, so there is no redo
//! once the past has been changed.

use log::debug;

use crate::core::board::{Board, CELL_COUNT, Mark, col_of, row_of};
use crate::core::rules::winner;

/// One snapshot in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub board: Board,
    /// Cell played to reach this board; `None` for the opening position.
    pub played: Option<usize>,
}

impl HistoryEntry {
    pub fn initial() -> Self {
        Self {
            board: Board::empty(),
            played: None,
        }
    }

    /// Label for the history button of this entry at `step`.
    pub fn label(&self, step: usize) -> String {
        move_label(self.played, step)
    }
}

/// "Go to game start" for the opening entry, otherwise
/// `"Move #{step}: ({col}, {row})"` with 1-based column first.
pub fn move_label(played: Option<usize>, step: usize) -> String {
    match played {
        None => "Go to game start".to_string(),
        Some(index) => format!(
            "Move #{}: ({}, {})",
            step,
            col_of(index) + 1,
            row_of(index) + 1
        ),
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The displayed position already has a winner.
    GameOver,
    /// The target cell already holds a mark.
    Occupied,
    /// The index is not a cell on the board.
    OutOfRange,
}

/// Result of [`Game::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted { mark: Mark, index: usize, step: usize },
    Rejected(RejectReason),
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }
}

/// History plus the displayed step.
///
/// Invariants:
/// - `history[0]` is the empty board with no move recorded.
/// - `history` is never empty and `step < history.len()`.
/// - Each entry differs from the previous one in exactly one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: Vec<HistoryEntry>,
    step: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            step: 0,
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: the opening entry can't be removed.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// The entry on screen.
    pub fn current(&self) -> &HistoryEntry {
        // `step` is kept in range by every transition below.
        &self.history[self.step]
    }

    pub fn board(&self) -> &Board {
        &self.current().board
    }

    /// True when the displayed step is the last one recorded.
    pub fn is_latest(&self) -> bool {
        self.step + 1 == self.history.len()
    }

    /// Whose turn it is at the displayed step.
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.step)
    }

    /// Plays the side to move at `index` on the displayed position.
    ///
    /// Ignored (history and step unchanged) when the position is already won
    /// or the cell is taken. Otherwise entries after the displayed step are
    /// discarded and the new position becomes the latest.
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        let current = *self.current();

        if index >= CELL_COUNT {
            debug!("Move at {} rejected: off the board", index);
            return MoveOutcome::Rejected(RejectReason::OutOfRange);
        }
        if winner(&current.board).is_some() {
            debug!("Move at {} rejected: game already won", index);
            return MoveOutcome::Rejected(RejectReason::GameOver);
        }
        if !current.board.is_empty_at(index) {
            debug!("Move at {} rejected: cell occupied", index);
            return MoveOutcome::Rejected(RejectReason::Occupied);
        }

        let mark = self.next_mark();
        let discarded = self.history.len() - (self.step + 1);
        self.history.truncate(self.step + 1);
        if discarded > 0 {
            debug!("Discarding {} future entries", discarded);
        }

        self.history.push(HistoryEntry {
            board: current.board.with_mark(index, mark),
            played: Some(index),
        });
        self.step = self.history.len() - 1;

        MoveOutcome::Accepted {
            mark,
            index,
            step: self.step,
        }
    }

    /// Displays the entry at `step` without touching the history.
    ///
    /// Returns false, leaving the step as it was, when `step` is not a
    /// recorded entry.
    pub fn jump_to(&mut self, step: usize) -> bool {
        if step >= self.history.len() {
            debug!(
                "Jump to {} ignored: history has {} entries",
                step,
                self.history.len()
            );
            return false;
        }
        self.step = step;
        true
    }

    /// Back to a single empty board.
    pub fn restart(&mut self) {
        self.history.clear();
        self.history.push(HistoryEntry::initial());
        self.step = 0;
    }
}

/// By-value form of [`Game::apply_move`]: consumes a game and returns the
/// next one, identical to the input when the move is rejected.
pub fn apply_move(mut game: Game, index: usize) -> Game {
    game.apply_move(index);
    game
}
