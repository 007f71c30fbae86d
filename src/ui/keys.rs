//! Key decoding for the service browser.
//!
//! | Keys | Action |
//! |------|--------|
//! | `q`, `Esc`, `Ctrl+c` | quit |
//! | `Down`, `j` | next service |
//! | `Up`, `k` | previous service |
//! | `PageDown`, `Ctrl+f` | page down |
//! | `PageUp`, `Ctrl+b` | page up |
//! | `Home`, `g` | first service |
//! | `End`, `G` | last service |
//! | `1`-`9` | jump to service by number |
//! | `?`, `h` | key binding help |
//! | `Space`, `Enter` | install the selected service |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Down,
    Up,
    PageDown,
    PageUp,
    First,
    Last,
    /// Jump to the service with this 1-based number.
    Jump(usize),
    Help,
    Confirm,
}

/// Decode a key event. Returns `None` for keys with no binding and for
/// release/repeat events.
pub fn action_for(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('f') => Some(Action::PageDown),
            KeyCode::Char('b') => Some(Action::PageUp),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::First),
        KeyCode::End | KeyCode::Char('G') => Some(Action::Last),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Action::Jump(d as usize)),
        KeyCode::Char('?') | KeyCode::Char('h') => Some(Action::Help),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Confirm),
        _ => None,
    }
}
