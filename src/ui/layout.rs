//! # Line Layout
//!
//! Maps the entry list to the flat sequence of lines the browser scrolls
//! through:
//!
//! ```text
//! 0  Web Servers:      <- header
//! 1    nginx
//! 2    caddy
//! 3                    <- blank separator (never before the first header)
//! 4  Databases:
//! 5    redis
//! ```
//!
//! A new group starts whenever an entry's category differs from the previous
//! entry's. The layout depends only on the entries, so it is rebuilt on demand
//! rather than stored alongside the browser state.

use super::entries::Entry;

/// One rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutLine {
    /// Category header, holding the category label.
    Header(String),
    /// The entry at this index of the entry list.
    Entry(usize),
    Blank,
}

#[derive(Debug, Clone, Default)]
pub struct LineLayout {
    lines: Vec<LayoutLine>,
    /// Line number of each entry's own line.
    entry_lines: Vec<usize>,
    /// Line number of the header owning each entry.
    header_lines: Vec<usize>,
}

impl LineLayout {
    pub fn new(entries: &[Entry]) -> Self {
        let mut lines = Vec::with_capacity(entries.len() * 2);
        let mut entry_lines = Vec::with_capacity(entries.len());
        let mut header_lines = Vec::with_capacity(entries.len());
        let mut current_header = 0;

        for (i, entry) in entries.iter().enumerate() {
            let starts_group = i == 0 || entries[i - 1].category != entry.category;
            if starts_group {
                if i > 0 {
                    lines.push(LayoutLine::Blank);
                }
                current_header = lines.len();
                lines.push(LayoutLine::Header(entry.category.clone()));
            }

            header_lines.push(current_header);
            entry_lines.push(lines.len());
            lines.push(LayoutLine::Entry(i));
        }

        Self {
            lines,
            entry_lines,
            header_lines,
        }
    }

    pub fn lines(&self) -> &[LayoutLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line number of the entry's own line.
    pub fn line_of(&self, entry_index: usize) -> Option<usize> {
        self.entry_lines.get(entry_index).copied()
    }

    /// Line number of the category header that owns the entry.
    pub fn header_line_of(&self, entry_index: usize) -> Option<usize> {
        self.header_lines.get(entry_index).copied()
    }
}
