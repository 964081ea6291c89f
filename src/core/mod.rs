//! # Core Game Logic
//!
//! The rules, the move history and the session state.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Board / rules        │
//!                    │  • Game (history)       │
//!                    │  • State + Action       │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! `config` is the one exception to "no I/O": it reads the config file
//! once at startup, before the session begins.
//!
//! ## Modules
//!
//! - [`board`]: `Board`, `Cell`, `Mark`
//! - [`rules`]: win/draw detection over the eight lines
//! - [`game`]: history, move application, time travel
//! - [`status`]: in-progress / won / draw, derived from a snapshot
//! - [`theme`]: the light/dark preference
//! - [`state`]: the `App` struct, all session state in one place
//! - [`action`]: the `Action` enum and the `update()` reducer

pub mod action;
pub mod board;
pub mod config;
pub mod game;
pub mod rules;
pub mod state;
pub mod status;
pub mod theme;
