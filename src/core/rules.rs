//! Win and draw detection.
//!
//! All three queries share one table and one scan, so `winner`,
//! `winning_line` and `is_draw` always agree about a given board.

use crate::core::board::{Board, Mark};

/// Every triple that wins: three rows, three columns, two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// First triple whose three cells hold the same mark.
fn find_line(board: &Board) -> Option<([usize; 3], Mark)> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = board.get(a)?.mark()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a)).then_some((line, mark))
    })
}

/// The mark that completed a line, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    find_line(board).map(|(_, mark)| mark)
}

/// Indices of the completed line, for highlighting.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    find_line(board).map(|(line, _)| line)
}

/// Every cell is filled and nobody has a line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}
