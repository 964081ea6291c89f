//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: game title and theme toggle
//! - `BoardView`: the 3x3 grid with cursor and winning-line highlight
//! - `StatusBar`: next player / winner / draw, restart control, messages
//! - `HelpBar`: key hints for the focused pane
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `HistoryList`: move history with its own selection and scroll offset
//!
//! Components receive external data as "props", not by reaching into
//! global state:
//!
//! ```rust,ignore
//! // Dependencies are explicit
//! BoardView::new(app.game.board(), app.winning_line(), cursor, palette).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (top line)
//! ├── board.rs         (grid + geometry for hit testing)
//! ├── history_list.rs  (move history)
//! ├── status_bar.rs    (status + restart)
//! └── help_bar.rs      (key hints)
//! ```

pub mod board;
pub mod help_bar;
pub mod history_list;
pub mod status_bar;
mod title_bar;

pub use board::{BoardCursor, BoardEvent, BoardView};
pub use help_bar::HelpBar;
pub use history_list::{HistoryEvent, HistoryList, HistoryListState};
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
