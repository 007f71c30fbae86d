use super::entries::Entry;
use super::keys::{self, Action};
use super::layout::LineLayout;
use super::viewport;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    HelpOverlay,
    /// A service was picked; the browser is done.
    ConfirmedExit,
    /// The user left without picking anything; the browser is done.
    QuitExit,
}

impl Mode {
    pub fn is_terminal(self) -> bool {
        matches!(self, Mode::ConfirmedExit | Mode::QuitExit)
    }
}

/// State of the interactive service browser.
///
/// Owned by the event loop and mutated only by [`Browser::handle_event`] and
/// the methods it dispatches to. Once [`Mode::is_terminal`] holds, every
/// further event is ignored.
#[derive(Debug, Clone)]
pub struct Browser {
    pub entries: Vec<Entry>,
    /// Index into `entries`, not into the line layout.
    pub cursor: usize,
    /// First visible line of the layout.
    pub viewport_top: usize,
    pub width: u16,
    pub height: u16,
    pub mode: Mode,
    /// Identifier of the confirmed service.
    pub selected: Option<String>,
}

impl Browser {
    pub fn new(entries: Vec<Entry>, width: u16, height: u16) -> Self {
        Self {
            entries,
            cursor: 0,
            viewport_top: 0,
            width,
            height,
            mode: Mode::Browsing,
            selected: None,
        }
    }

    pub fn layout(&self) -> LineLayout {
        LineLayout::new(&self.entries)
    }

    pub fn viewport_height(&self) -> usize {
        viewport::viewport_height(self.height)
    }

    pub fn is_finished(&self) -> bool {
        self.mode.is_terminal()
    }

    /// Consume the browser and hand back the confirmed service id, if any.
    pub fn into_selection(self) -> Option<String> {
        self.selected
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(width, height) => self.resize(*width, *height),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) {
        if self.is_finished() {
            return;
        }

        // Help is dismissed by the next key press, whatever it is
        if self.mode == Mode::HelpOverlay {
            if key.kind == KeyEventKind::Press {
                self.mode = Mode::Browsing;
            }
            return;
        }

        if let Some(action) = keys::action_for(key) {
            self.apply(action);
        }
    }

    pub fn apply(&mut self, action: Action) {
        if self.mode != Mode::Browsing {
            return;
        }

        match action {
            Action::Quit => self.quit(),
            Action::Down => self.next(),
            Action::Up => self.previous(),
            Action::PageDown => self.page_down(),
            Action::PageUp => self.page_up(),
            Action::First => self.first(),
            Action::Last => self.last(),
            Action::Jump(number) => self.jump_to(number),
            Action::Help => self.mode = Mode::HelpOverlay,
            Action::Confirm => self.confirm(),
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.scroll_to_cursor();
    }

    pub fn quit(&mut self) {
        if self.is_finished() {
            return;
        }
        self.selected = None;
        self.mode = Mode::QuitExit;
        debug!("browser quit without a selection");
    }

    pub fn next(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            self.scroll_to_cursor();
        }
    }

    pub fn previous(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            if self.cursor == 0 {
                self.viewport_top = 0;
            } else {
                self.scroll_to_cursor();
            }
        }
    }

    pub fn page_down(&mut self) {
        if let Some(last) = self.last_index() {
            self.cursor = (self.cursor + self.viewport_height()).min(last);
            self.scroll_to_cursor();
        }
    }

    pub fn page_up(&mut self) {
        if !self.entries.is_empty() {
            self.cursor = self.cursor.saturating_sub(self.viewport_height());
            self.scroll_to_cursor();
        }
    }

    pub fn first(&mut self) {
        if !self.entries.is_empty() {
            self.cursor = 0;
            self.viewport_top = 0;
        }
    }

    pub fn last(&mut self) {
        if let Some(last) = self.last_index() {
            self.cursor = last;
            self.scroll_to_cursor();
        }
    }

    /// Jump to the 1-based service `number`; out of range is a no-op.
    pub fn jump_to(&mut self, number: usize) {
        if (1..=self.entries.len()).contains(&number) {
            self.cursor = number - 1;
            self.scroll_to_cursor();
        }
    }

    pub fn confirm(&mut self) {
        if self.mode != Mode::Browsing {
            return;
        }
        if let Some(entry) = self.entries.get(self.cursor) {
            info!(service = %entry.id, "service selected for installation");
            self.selected = Some(entry.id.clone());
            self.mode = Mode::ConfirmedExit;
        }
    }

    fn last_index(&self) -> Option<usize> {
        self.entries.len().checked_sub(1)
    }

    fn scroll_to_cursor(&mut self) {
        let layout = self.layout();
        self.viewport_top = viewport::scroll_to_cursor(
            self.viewport_top,
            self.cursor,
            &layout,
            self.viewport_height(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, category: &str) -> Entry {
        Entry {
            id: id.to_string(),
            name: id.to_string(),
            description: format!("{id} description"),
            category: category.to_string(),
            installed: false,
        }
    }

    fn abc_browser(height: u16) -> Browser {
        Browser::new(
            vec![entry("A", "cat1"), entry("B", "cat1"), entry("C", "cat2")],
            80,
            height,
        )
    }

    #[test]
    fn test_new_browser_starts_at_top() {
        let browser = abc_browser(24);
        assert_eq!(browser.cursor, 0);
        assert_eq!(browser.viewport_top, 0);
        assert_eq!(browser.mode, Mode::Browsing);
        assert!(browser.selected.is_none());
    }

    #[test]
    fn test_next_clamps_at_last() {
        let mut browser = abc_browser(24);
        browser.next();
        browser.next();
        browser.next();
        assert_eq!(browser.cursor, 2);
    }

    #[test]
    fn test_previous_to_first_resets_top() {
        // height 6 -> one visible row
        let mut browser = abc_browser(6);
        browser.next();
        browser.next();
        assert_eq!(browser.viewport_top, 5);
        browser.previous();
        browser.previous();
        assert_eq!(browser.cursor, 0);
        assert_eq!(browser.viewport_top, 0);
    }

    #[test]
    fn test_two_row_viewport_on_last_entry() {
        // Compact chrome at height 7 leaves 2 rows
        let mut browser = abc_browser(7);
        assert_eq!(browser.viewport_height(), 2);
        browser.last();
        assert_eq!(browser.cursor, 2);
        assert_eq!(browser.viewport_top, 4);
    }

    #[test]
    fn test_confirm_records_selection() {
        let mut browser = abc_browser(24);
        browser.next();
        browser.confirm();
        assert_eq!(browser.mode, Mode::ConfirmedExit);
        assert_eq!(browser.selected.as_deref(), Some("B"));
    }

    #[test]
    fn test_terminal_state_ignores_actions() {
        let mut browser = abc_browser(24);
        browser.confirm();
        browser.apply(Action::Down);
        browser.apply(Action::Quit);
        assert_eq!(browser.cursor, 0);
        assert_eq!(browser.mode, Mode::ConfirmedExit);
        assert_eq!(browser.into_selection().as_deref(), Some("A"));
    }

    #[test]
    fn test_empty_browser_cannot_confirm() {
        let mut browser = Browser::new(Vec::new(), 80, 24);
        browser.apply(Action::Down);
        browser.apply(Action::Last);
        browser.apply(Action::PageDown);
        browser.apply(Action::Confirm);
        assert_eq!(browser.mode, Mode::Browsing);
        assert_eq!(browser.cursor, 0);

        browser.apply(Action::Quit);
        assert_eq!(browser.mode, Mode::QuitExit);
        assert!(browser.selected.is_none());
    }

    #[test]
    fn test_resize_keeps_cursor_visible() {
        let mut browser = abc_browser(24);
        browser.last();
        assert_eq!(browser.viewport_top, 0);

        browser.resize(80, 7);
        assert_eq!(browser.viewport_top, 4);

        browser.resize(80, 40);
        assert_eq!(browser.viewport_top, 0);
    }
}
