//! # Board Component
//!
//! The 3x3 grid. Stateless: the board snapshot, cursor and winning line all
//! arrive as props.
//!
//! ```text
//! ┌─────┐┌─────┐┌─────┐
//! │  X  ││     ││  O  │     each cell is CELL_WIDTH x CELL_HEIGHT,
//! └─────┘└─────┘└─────┘     the grid is centered in its area
//! ┌─────┐┌─────┐┌─────┐
//! │     ││  X  ││     │
//! └─────┘└─────┘└─────┘
//! ...
//! ```
//!
//! Geometry comes from [`cell_rects`], which the mouse hit test uses too, so
//! what is drawn and what is clickable can't drift apart.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::board::{BOARD_SIZE, Board, CELL_COUNT, col_of, row_of};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::{PRIMARY, Palette};

pub const CELL_WIDTH: u16 = 7;
pub const CELL_HEIGHT: u16 = 3;
pub const GRID_WIDTH: u16 = CELL_WIDTH * BOARD_SIZE as u16;
pub const GRID_HEIGHT: u16 = CELL_HEIGHT * BOARD_SIZE as u16;

/// Screen rectangles of the nine cells, row-major, centered in `area`.
pub fn cell_rects(area: Rect) -> [Rect; CELL_COUNT] {
    let [column] = Layout::horizontal([Constraint::Length(GRID_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    let [grid] = Layout::vertical([Constraint::Length(GRID_HEIGHT)])
        .flex(Flex::Center)
        .areas(column);

    let rows: [Rect; BOARD_SIZE] =
        Layout::vertical([Constraint::Length(CELL_HEIGHT); BOARD_SIZE]).areas(grid);

    let mut cells = [Rect::default(); CELL_COUNT];
    for (r, row) in rows.into_iter().enumerate() {
        let cols: [Rect; BOARD_SIZE] =
            Layout::horizontal([Constraint::Length(CELL_WIDTH); BOARD_SIZE]).areas(row);
        for (c, rect) in cols.into_iter().enumerate() {
            cells[r * BOARD_SIZE + c] = rect;
        }
    }
    cells
}

/// Which cell (if any) is under screen position (`column`, `row`).
pub fn hit_test_cell(area: Rect, column: u16, row: u16) -> Option<usize> {
    let position = Position::new(column, row);
    cell_rects(area)
        .iter()
        .position(|rect| rect.contains(position))
}

/// Keyboard cursor over the grid. Arrows move it (stopping at the edges),
/// Enter/Space plays the cell under it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardCursor {
    pub index: usize,
}

/// Events emitted by the board cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    Play(usize),
}

impl EventHandler for BoardCursor {
    type Event = BoardEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<BoardEvent> {
        let (row, col) = (row_of(self.index), col_of(self.index));
        match event {
            TuiEvent::Up if row > 0 => self.index -= BOARD_SIZE,
            TuiEvent::Down if row + 1 < BOARD_SIZE => self.index += BOARD_SIZE,
            TuiEvent::Left if col > 0 => self.index -= 1,
            TuiEvent::Right if col + 1 < BOARD_SIZE => self.index += 1,
            TuiEvent::Select => return Some(BoardEvent::Play(self.index)),
            _ => {}
        }
        None
    }
}

/// The board grid.
///
/// # Props
///
/// - `board`: the displayed snapshot
/// - `winning_line`: cells to paint with the highlight colour
/// - `cursor`: keyboard cursor, `None` when the board doesn't have focus
/// - `palette`: colours for the active theme
pub struct BoardView<'a> {
    pub board: &'a Board,
    pub winning_line: Option<[usize; 3]>,
    pub cursor: Option<usize>,
    pub palette: Palette,
}

impl<'a> BoardView<'a> {
    pub fn new(
        board: &'a Board,
        winning_line: Option<[usize; 3]>,
        cursor: Option<usize>,
        palette: Palette,
    ) -> Self {
        Self {
            board,
            winning_line,
            cursor,
            palette,
        }
    }

    fn is_highlighted(&self, index: usize) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&index))
    }
}

impl Component for BoardView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        for (index, rect) in cell_rects(area).into_iter().enumerate() {
            let cell = self.board.cells()[index];
            let is_cursor = self.cursor == Some(index);

            let background = if self.is_highlighted(index) {
                self.palette.highlight
            } else if is_cursor {
                self.palette.cursor
            } else {
                self.palette.background
            };

            let (border_style, border_type) = if is_cursor {
                (Style::default().fg(PRIMARY), BorderType::Thick)
            } else {
                (Style::default().fg(self.palette.border), BorderType::Rounded)
            };

            let block = Block::bordered()
                .border_type(border_type)
                .border_style(border_style);

            let glyph = Paragraph::new(cell.symbol())
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(self.palette.cell_color(cell))
                        .bg(background)
                        .add_modifier(Modifier::BOLD),
                )
                .block(block);

            frame.render_widget(glyph, rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::Theme;
    use crate::test_support::render_to_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_cell_rects_centered_and_row_major() {
        let area = Rect::new(0, 0, 41, 19);
        let cells = cell_rects(area);

        assert_eq!(cells[0], Rect::new(10, 5, CELL_WIDTH, CELL_HEIGHT));
        assert_eq!(cells[1].x, cells[0].x + CELL_WIDTH);
        assert_eq!(cells[3].y, cells[0].y + CELL_HEIGHT);
        assert_eq!(cells[8], Rect::new(24, 11, CELL_WIDTH, CELL_HEIGHT));
    }

    #[test]
    fn test_hit_test_cell() {
        let area = Rect::new(0, 0, 41, 19);
        // Center of the middle cell
        assert_eq!(hit_test_cell(area, 20, 9), Some(4));
        // Top-left corner of the grid
        assert_eq!(hit_test_cell(area, 10, 5), Some(0));
        // Outside the grid
        assert_eq!(hit_test_cell(area, 2, 2), None);
        assert_eq!(hit_test_cell(area, 31, 9), None);
    }

    #[test]
    fn test_cursor_moves_and_stops_at_edges() {
        let mut cursor = BoardCursor::default();
        assert_eq!(cursor.handle_event(&TuiEvent::Up), None);
        assert_eq!(cursor.handle_event(&TuiEvent::Left), None);
        assert_eq!(cursor.index, 0);

        cursor.handle_event(&TuiEvent::Right);
        cursor.handle_event(&TuiEvent::Down);
        assert_eq!(cursor.index, 4);

        cursor.handle_event(&TuiEvent::Right);
        cursor.handle_event(&TuiEvent::Right);
        cursor.handle_event(&TuiEvent::Down);
        cursor.handle_event(&TuiEvent::Down);
        assert_eq!(cursor.index, 8);
    }

    #[test]
    fn test_cursor_select_plays() {
        let mut cursor = BoardCursor { index: 7 };
        assert_eq!(
            cursor.handle_event(&TuiEvent::Select),
            Some(BoardEvent::Play(7))
        );
    }

    #[test]
    fn test_render_marks() {
        let board: Board = "X.O .X. ...".parse().unwrap();
        let palette = Palette::for_theme(Theme::Light);

        let text = render_to_text(GRID_WIDTH, GRID_HEIGHT, |f| {
            BoardView::new(&board, None, Some(4), palette).render(f, f.area())
        });
        assert_eq!(text.matches('X').count(), 2);
        assert_eq!(text.matches('O').count(), 1);
    }

    #[test]
    fn test_winning_line_highlighted() {
        let backend = TestBackend::new(GRID_WIDTH, GRID_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        let board: Board = "XXX OO. ...".parse().unwrap();
        let palette = Palette::for_theme(Theme::Dark);

        terminal
            .draw(|f| {
                BoardView::new(&board, Some([0, 1, 2]), None, palette).render(f, f.area())
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        // Glyph position of cell 0 (inside the border) and cell 4
        let center = |index: usize| {
            let rect = cell_rects(Rect::new(0, 0, GRID_WIDTH, GRID_HEIGHT))[index];
            (rect.x + CELL_WIDTH / 2, rect.y + 1)
        };
        let (x0, y0) = center(0);
        let (x4, y4) = center(4);
        assert_eq!(buffer[(x0, y0)].bg, palette.highlight);
        assert_eq!(buffer[(x0, y0)].symbol(), "X");
        assert_eq!(buffer[(x4, y4)].bg, palette.background);
    }
}
