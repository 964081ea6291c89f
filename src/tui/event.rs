use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::io;
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    ForceQuit, // Ctrl+C
    Restart,
    ToggleTheme,
    StepBack,
    /// Play cell 1-9 directly (1 = top-left, row-major)
    Digit(u8),

    // TUI-local events (handled directly in TUI)
    Up,
    Down,
    Left,
    Right,
    Select,      // Enter or Space
    SwitchFocus, // Tab
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event with timeout.
///
/// `Ok(None)` means nothing arrived, or what arrived has no meaning here.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if event::poll(timeout)? {
        Ok(translate(event::read()?))
    } else {
        Ok(None)
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Map a raw crossterm event to a `TuiEvent`.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Some terminals report releases too; act on presses only
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char(c @ '1'..='9')) => Some(TuiEvent::Digit(c as u8 - b'0')),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('r')) => Some(TuiEvent::Restart),
        (_, KeyCode::Char('t')) => Some(TuiEvent::ToggleTheme),
        (_, KeyCode::Char('u')) | (_, KeyCode::Backspace) => Some(TuiEvent::StepBack),
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::Up),
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::Down),
        (_, KeyCode::Left) | (_, KeyCode::Char('h')) => Some(TuiEvent::Left),
        (_, KeyCode::Right) | (_, KeyCode::Char('l')) => Some(TuiEvent::Right),
        (_, KeyCode::Enter) | (_, KeyCode::Char(' ')) => Some(TuiEvent::Select),
        (_, KeyCode::Tab) | (_, KeyCode::BackTab) => Some(TuiEvent::SwitchFocus),
        _ => None,
    }
}
