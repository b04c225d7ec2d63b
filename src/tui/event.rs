use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Text editing (handled by the SearchBox)
    InputChar(char),
    Backspace,
    Paste(String),

    // Dropdown navigation
    CursorUp,
    CursorDown,
    Submit,
    Escape,

    // Mouse, in terminal cell coordinates
    MouseMove(u16, u16),
    MouseClick(u16, u16),

    // Window focus (drives the dropdown's show/hide grace logic)
    FocusGained,
    FocusLost,

    Resize,
    ForceQuit, // Ctrl+C
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap_or(false) {
        match event::read().ok()? {
            Event::Key(key_event) => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                    (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                    (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                    (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                    (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                    (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                    _ => None,
                }
            }
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::Moved => {
                    Some(TuiEvent::MouseMove(mouse_event.column, mouse_event.row))
                }
                MouseEventKind::Down(MouseButton::Left) => {
                    Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
                }
                // A scroll over the dropdown moves the highlight just like the arrows.
                MouseEventKind::ScrollUp => Some(TuiEvent::CursorUp),
                MouseEventKind::ScrollDown => Some(TuiEvent::CursorDown),
                _ => None,
            },
            Event::Paste(data) => Some(TuiEvent::Paste(data)),
            Event::FocusGained => Some(TuiEvent::FocusGained),
            Event::FocusLost => Some(TuiEvent::FocusLost),
            Event::Resize(_, _) => Some(TuiEvent::Resize),
        }
    } else {
        None
    }
}
