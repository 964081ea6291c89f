//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};

use crate::core::game::Game;
use crate::core::state::App;

/// A game after playing `moves` in order from the empty board.
///
/// Panics if any move is rejected, so fixtures can't silently drift.
pub fn play(moves: &[usize]) -> Game {
    let mut game = Game::new();
    for &index in moves {
        assert!(
            game.apply_move(index).is_accepted(),
            "fixture move {index} rejected"
        );
    }
    game
}

/// An App whose game has `moves` played.
pub fn app_with_moves(moves: &[usize]) -> App {
    let mut app = App::default();
    app.game = play(moves);
    app
}

/// All cell symbols of `buffer`, row after row.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}

/// Draws one frame on a `width` x `height` test terminal and returns its text.
pub fn render_to_text(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(draw).unwrap();
    buffer_text(terminal.backend().buffer())
}
