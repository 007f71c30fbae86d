//! Keyboard event handling tests
//!
//! Crossterm events fed through `Browser::handle_event`, the same path the
//! event loop uses.

use bootup::ui::entries::Entry;
use bootup::ui::{Browser, Mode};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseEvent,
    MouseEventKind,
};

/// Helper to create a key event
fn key_event(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn create_test_browser() -> Browser {
    let entries = ["nginx", "caddy", "postgresql", "mysql", "redis"]
        .iter()
        .enumerate()
        .map(|(i, id)| Entry {
            id: (*id).to_string(),
            name: (*id).to_string(),
            description: format!("{id} description"),
            category: if i < 2 { "Web Servers" } else { "Databases" }.to_string(),
            installed: i == 0,
        })
        .collect();
    Browser::new(entries, 80, 24)
}

#[test]
fn test_quit_with_q_key() {
    let mut browser = create_test_browser();
    browser.handle_event(&key_event(KeyCode::Char('q')));
    assert_eq!(browser.mode, Mode::QuitExit);
    assert!(browser.selected.is_none());
}

#[test]
fn test_quit_with_esc_and_ctrl_c() {
    let mut browser = create_test_browser();
    browser.handle_event(&key_event(KeyCode::Esc));
    assert_eq!(browser.mode, Mode::QuitExit);

    let mut browser = create_test_browser();
    browser.handle_event(&ctrl('c'));
    assert_eq!(browser.mode, Mode::QuitExit);
}

#[test]
fn test_vim_and_arrow_navigation() {
    let mut browser = create_test_browser();
    browser.handle_event(&key_event(KeyCode::Char('j')));
    browser.handle_event(&key_event(KeyCode::Down));
    assert_eq!(browser.cursor, 2);

    browser.handle_event(&key_event(KeyCode::Char('k')));
    assert_eq!(browser.cursor, 1);
    browser.handle_event(&key_event(KeyCode::Up));
    browser.handle_event(&key_event(KeyCode::Up));
    assert_eq!(browser.cursor, 0);
}

#[test]
fn test_first_and_last_keys() {
    let mut browser = create_test_browser();
    browser.handle_event(&key_event(KeyCode::Char('G')));
    assert_eq!(browser.cursor, 4);
    browser.handle_event(&key_event(KeyCode::Char('g')));
    assert_eq!(browser.cursor, 0);
    browser.handle_event(&key_event(KeyCode::End));
    assert_eq!(browser.cursor, 4);
    browser.handle_event(&key_event(KeyCode::Home));
    assert_eq!(browser.cursor, 0);
    assert_eq!(browser.viewport_top, 0);
}

#[test]
fn test_digit_keys_jump() {
    let mut browser = create_test_browser();
    browser.handle_event(&key_event(KeyCode::Char('4')));
    assert_eq!(browser.cursor, 3);
    browser.handle_event(&key_event(KeyCode::Char('9')));
    assert_eq!(browser.cursor, 3);
}

#[test]
fn test_ctrl_paging() {
    let mut browser = create_test_browser();
    browser.resize(80, 8);
    let height = browser.viewport_height();

    browser.handle_event(&ctrl('f'));
    assert_eq!(browser.cursor, height);
    browser.handle_event(&ctrl('b'));
    assert_eq!(browser.cursor, 0);
}

#[test]
fn test_enter_and_space_confirm() {
    let mut browser = create_test_browser();
    browser.handle_event(&key_event(KeyCode::Char('5')));
    browser.handle_event(&key_event(KeyCode::Enter));
    assert_eq!(browser.mode, Mode::ConfirmedExit);
    assert_eq!(browser.selected.as_deref(), Some("redis"));

    let mut browser = create_test_browser();
    browser.handle_event(&key_event(KeyCode::Char(' ')));
    assert_eq!(browser.selected.as_deref(), Some("nginx"));
}

#[test]
fn test_help_overlay_dismissed_by_any_key() {
    for dismiss in [KeyCode::Char('x'), KeyCode::Enter, KeyCode::Char('q'), KeyCode::F(5)] {
        let mut browser = create_test_browser();
        browser.handle_event(&key_event(KeyCode::Char('?')));
        assert_eq!(browser.mode, Mode::HelpOverlay);

        browser.handle_event(&key_event(dismiss));
        assert_eq!(browser.mode, Mode::Browsing, "{dismiss:?} should close help");
        assert!(browser.selected.is_none());
    }
}

#[test]
fn test_h_opens_help() {
    let mut browser = create_test_browser();
    browser.handle_event(&key_event(KeyCode::Char('h')));
    assert_eq!(browser.mode, Mode::HelpOverlay);
}

#[test]
fn test_release_events_ignored() {
    let mut browser = create_test_browser();
    let release = Event::Key(KeyEvent::new_with_kind_and_state(
        KeyCode::Char('q'),
        KeyModifiers::empty(),
        KeyEventKind::Release,
        KeyEventState::empty(),
    ));
    browser.handle_event(&release);
    assert_eq!(browser.mode, Mode::Browsing);
}

#[test]
fn test_unbound_keys_and_mouse_ignored() {
    let mut browser = create_test_browser();
    browser.handle_event(&key_event(KeyCode::Char('z')));
    browser.handle_event(&key_event(KeyCode::Tab));
    browser.handle_event(&Event::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::empty(),
    }));
    browser.handle_event(&Event::FocusLost);
    assert_eq!(browser.cursor, 0);
    assert_eq!(browser.mode, Mode::Browsing);
}

#[test]
fn test_resize_event_updates_size() {
    let mut browser = create_test_browser();
    browser.handle_event(&key_event(KeyCode::End));
    browser.handle_event(&Event::Resize(100, 7));
    assert_eq!(browser.width, 100);
    assert_eq!(browser.height, 7);

    let layout = browser.layout();
    let line = layout.line_of(browser.cursor).expect("cursor line");
    assert!(browser.viewport_top <= line);
    assert!(line < browser.viewport_top + browser.viewport_height());
}

#[test]
fn test_events_after_exit_ignored() {
    let mut browser = create_test_browser();
    browser.handle_event(&key_event(KeyCode::Char('q')));
    browser.handle_event(&key_event(KeyCode::Enter));
    browser.handle_event(&key_event(KeyCode::Down));
    assert_eq!(browser.mode, Mode::QuitExit);
    assert_eq!(browser.cursor, 0);
    assert!(browser.selected.is_none());
}
