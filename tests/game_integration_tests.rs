use std::collections::HashSet;

use tictactoe::core::action::{Action, Effect, update};
use tictactoe::core::board::{Board, CELL_COUNT, Cell, Mark};
use tictactoe::core::game::{Game, MoveOutcome, RejectReason, apply_move};
use tictactoe::core::rules::{LINES, is_draw, winner, winning_line};
use tictactoe::core::state::App;
use tictactoe::core::status::Status;
use tictactoe::Theme;

// ============================================================================
// Helper Functions
// ============================================================================

/// Plays `moves` through the reducer, as the UI would.
fn app_after(moves: &[usize]) -> App {
    let mut app = App::default();
    for &index in moves {
        assert_eq!(update(&mut app, Action::Play(index)), Effect::None);
    }
    app
}

/// Every board reachable from `board` with alternating play, stopping at wins.
fn reachable(board: Board, seen: &mut HashSet<Board>) {
    if !seen.insert(board) || winner(&board).is_some() {
        return;
    }
    let mark = Mark::for_step(board.filled_count());
    for index in 0..CELL_COUNT {
        if board.is_empty_at(index) {
            reachable(board.with_mark(index, mark), seen);
        }
    }
}

fn all_reachable_boards() -> HashSet<Board> {
    let mut boards = HashSet::new();
    reachable(Board::empty(), &mut boards);
    boards
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_top_row_win() {
    let app = app_after(&[0, 4, 1, 3, 2]);

    assert_eq!(winner(app.game.board()), Some(Mark::X));
    assert_eq!(winning_line(app.game.board()), Some([0, 1, 2]));
    assert_eq!(app.status(), Status::Won(Mark::X));
    assert_eq!(app.status().to_string(), "X wins!");
}

#[test]
fn test_full_board_draw() {
    let app = app_after(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert!(is_draw(app.game.board()));
    assert_eq!(winner(app.game.board()), None);
    assert_eq!(app.status(), Status::Draw);
}

#[test]
fn test_occupied_click_changes_nothing() {
    let mut app = app_after(&[4, 0]);
    let len = app.game.len();
    let step = app.game.step();

    update(&mut app, Action::Play(0));

    assert_eq!(app.game.len(), len);
    assert_eq!(app.game.step(), step);
}

#[test]
fn test_restart_after_any_sequence() {
    for moves in [&[][..], &[4][..], &[0, 4, 1, 3, 2][..], &[0, 1, 2, 4, 3, 5, 7, 6, 8][..]] {
        let mut app = app_after(moves);
        update(&mut app, Action::JumpTo(0));
        update(&mut app, Action::Restart);
        assert_eq!(app.game.len(), 1);
        assert_eq!(app.game.step(), 0);
        assert_eq!(app.game.history()[0].played, None);
        assert_eq!(app.game.history()[0].board, Board::empty());
    }
}

#[test]
fn test_time_travel_then_new_branch() {
    let mut app = app_after(&[0, 4, 1, 3, 2]);
    assert_eq!(app.status(), Status::Won(Mark::X));

    // Back to before X's winning move; O can't have won there
    update(&mut app, Action::JumpTo(3));
    assert_eq!(app.status(), Status::InProgress(Mark::O));
    assert_eq!(app.game.len(), 6);

    // O blocks; the old winning continuation is gone
    update(&mut app, Action::Play(2));
    assert_eq!(app.game.len(), 5);
    assert_eq!(app.game.board().get(2), Some(Cell::O));
    assert!(app.game.is_latest());
    assert_eq!(app.status(), Status::InProgress(Mark::X));
}

#[test]
fn test_jump_round_trip() {
    let mut app = app_after(&[0, 4, 1, 3]);
    let step = app.game.step();
    let board = *app.game.board();

    update(&mut app, Action::JumpTo(1));
    assert_ne!(*app.game.board(), board);
    update(&mut app, Action::JumpTo(step));
    assert_eq!(*app.game.board(), board);
}

#[test]
fn test_history_labels() {
    let app = app_after(&[0, 5, 7]);
    let labels: Vec<String> = app
        .game
        .history()
        .iter()
        .enumerate()
        .map(|(step, entry)| entry.label(step))
        .collect();

    assert_eq!(
        labels,
        vec![
            "Go to game start",
            "Move #1: (1, 1)",
            "Move #2: (3, 2)",
            "Move #3: (2, 3)",
        ]
    );
}

#[test]
fn test_theme_toggle_is_session_only() {
    let mut app = App::new(Theme::Dark);
    update(&mut app, Action::ToggleTheme);
    assert_eq!(app.theme, Theme::Light);
    assert_eq!(app.game.len(), 1);
}

#[test]
fn test_by_value_contract() {
    let game = [0, 4, 1].iter().fold(Game::new(), |g, &i| apply_move(g, i));
    assert_eq!(game.len(), 4);
    assert_eq!(game.next_mark(), Mark::O);

    let unchanged = apply_move(game.clone(), 4);
    assert_eq!(unchanged, game);
}

// ============================================================================
// Properties over every reachable position
// ============================================================================

#[test]
fn test_reachable_position_count() {
    // Well-known count of legal tic-tac-toe positions
    assert_eq!(all_reachable_boards().len(), 5478);
}

#[test]
fn test_winner_iff_some_line_complete() {
    for board in all_reachable_boards() {
        let complete = LINES.iter().any(|&[a, b, c]| {
            let cell = board.get(a);
            cell != Some(Cell::Empty) && cell == board.get(b) && cell == board.get(c)
        });
        assert_eq!(winner(&board).is_some(), complete, "board:\n{board}");
        assert_eq!(winning_line(&board).is_some(), complete);
    }
}

#[test]
fn test_winning_line_agrees_with_winner() {
    for board in all_reachable_boards() {
        if let Some(line) = winning_line(&board) {
            let mark = winner(&board).unwrap();
            for index in line {
                assert_eq!(board.get(index), Some(Cell::from(mark)));
            }
        }
    }
}

#[test]
fn test_draw_iff_full_and_no_winner() {
    for board in all_reachable_boards() {
        assert_eq!(
            is_draw(&board),
            board.is_full() && winner(&board).is_none(),
            "board:\n{board}"
        );
    }
}

#[test]
fn test_legal_moves_add_exactly_one_mark() {
    // A few branching games, checking each accepted move
    for opening in [[4, 0, 8], [0, 1, 2], [2, 4, 6]] {
        let mut game = Game::new();
        for index in opening.into_iter().chain(0..CELL_COUNT) {
            let before = *game.board();
            match game.apply_move(index) {
                MoveOutcome::Accepted { mark, .. } => {
                    let after = *game.board();
                    assert_eq!(after.filled_count(), before.filled_count() + 1);
                    assert_eq!(after.get(index), Some(Cell::from(mark)));
                    let changed = (0..CELL_COUNT)
                        .filter(|&i| before.get(i) != after.get(i))
                        .count();
                    assert_eq!(changed, 1);
                }
                MoveOutcome::Rejected(reason) => {
                    assert!(matches!(reason, RejectReason::Occupied | RejectReason::GameOver));
                    assert_eq!(*game.board(), before);
                }
            }
        }
    }
}
