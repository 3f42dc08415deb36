use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use log::debug;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C, always quits.
    ForceQuit,
    /// `q`
    Quit,
    /// Enter, Right, `l`: open the highlighted dog.
    Submit,
    /// Esc, Backspace, Left, `h`: leave the detail screen.
    Back,
    CursorUp,
    CursorDown,
    CursorFirst,
    CursorLast,
    ScrollUp,
    ScrollDown,
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
///
/// Terminal errors are returned to the caller: a closed tty fails every
/// poll immediately, so retrying would spin.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    poll_with(timeout, event::poll, event::read)
}

fn poll_with(
    timeout: Duration,
    poll: impl FnOnce(Duration) -> io::Result<bool>,
    read: impl FnOnce() -> io::Result<Event>,
) -> io::Result<Option<TuiEvent>> {
    if !poll(timeout)? {
        return Ok(None);
    }
    Ok(map_event(read()?))
}

/// Translate a raw crossterm event into a `TuiEvent`.
pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => map_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Release/repeat events would double every keystroke on some terminals
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code, key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Enter | KeyCode::Right | KeyCode::Char('l')) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h')) => {
            Some(TuiEvent::Back)
        }
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Home | KeyCode::Char('g')) => Some(TuiEvent::CursorFirst),
        (_, KeyCode::End | KeyCode::Char('G')) => Some(TuiEvent::CursorLast),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::ScrollDown),
        _ => None,
    }
}
