//! Viewport sizing and the scroll rule that keeps the cursor on screen.

use super::layout::LineLayout;

/// Below this many rows the browser only shows a "too small" notice.
pub const MIN_TERMINAL_HEIGHT: u16 = 5;

/// Terminals shorter than this get the compact chrome.
pub const COMPACT_BREAKPOINT: u16 = 10;

const RESERVED_LINES_COMPACT: u16 = 5;
const RESERVED_LINES: u16 = 7;

/// Rows left for the line layout once title and footer chrome are drawn.
pub fn viewport_height(terminal_height: u16) -> usize {
    let reserved = if terminal_height < COMPACT_BREAKPOINT {
        RESERVED_LINES_COMPACT
    } else {
        RESERVED_LINES
    };
    usize::from(terminal_height.saturating_sub(reserved)).max(1)
}

/// Largest valid top offset for a layout of `total_lines`.
pub fn max_top(total_lines: usize, height: usize) -> usize {
    total_lines.saturating_sub(height)
}

/// New top offset so that the cursor's line is visible.
///
/// Scrolling up prefers to reveal the category header as well, unless the
/// header is so far above that the cursor would fall off the bottom.
pub fn scroll_to_cursor(top: usize, cursor: usize, layout: &LineLayout, height: usize) -> usize {
    let height = height.max(1);
    let Some(cursor_line) = layout.line_of(cursor) else {
        return 0;
    };

    let top = if cursor_line < top {
        let header = layout.header_line_of(cursor).unwrap_or(cursor_line);
        if cursor_line - header >= height {
            cursor_line + 1 - height
        } else {
            header
        }
    } else if cursor_line >= top + height {
        cursor_line + 1 - height
    } else {
        top
    };

    top.min(max_top(layout.len(), height))
}
