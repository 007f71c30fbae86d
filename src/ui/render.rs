use crate::ui::app::{Browser, Mode};
use crate::ui::layout::LayoutLine;
use crate::ui::theme::Theme;
use crate::ui::viewport::{COMPACT_BREAKPOINT, MIN_TERMINAL_HEIGHT};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const TITLE: &str = "🚀 Bootup CLI - Interactive Service Installer";
const COMPACT_TITLE: &str = "🚀 Bootup";
const FOOTER: &str = "↑/↓ j/k: navigate • space/enter: install • ?: help • q: quit";
const CURSOR_MARK: &str = "▶ ";
const INSTALLED_MARK: &str = " ✓";

pub fn render(frame: &mut Frame, browser: &Browser, theme: &Theme) {
    let lines = frame_lines(browser, theme);
    frame.render_widget(Paragraph::new(lines), frame.area());
}

/// Build the full frame for `browser` as a list of lines, top to bottom.
pub fn frame_lines(browser: &Browser, theme: &Theme) -> Vec<Line<'static>> {
    match browser.mode {
        Mode::QuitExit => farewell_lines(theme),
        Mode::ConfirmedExit => handoff_lines(browser, theme),
        Mode::HelpOverlay => help_lines(theme),
        Mode::Browsing if browser.height < MIN_TERMINAL_HEIGHT => too_small_lines(theme),
        Mode::Browsing => browsing_lines(browser, theme),
    }
}

fn title_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.bg)
        .bg(theme.accent)
        .add_modifier(Modifier::BOLD)
}

fn dim(theme: &Theme) -> Style {
    Style::default().fg(theme.fg_dim)
}

fn farewell_lines(theme: &Theme) -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        "Thanks for using Bootup CLI! 👋",
        Style::default().fg(theme.fg),
    ))]
}

fn handoff_lines(browser: &Browser, theme: &Theme) -> Vec<Line<'static>> {
    let id = browser.selected.clone().unwrap_or_default();
    vec![
        Line::from(Span::styled(format!(" {TITLE} "), title_style(theme))),
        Line::from(""),
        Line::from(Span::styled(
            format!("Preparing to install {id}..."),
            Style::default().fg(theme.secondary),
        )),
        Line::from(Span::styled(
            "Leaving the browser to run the installation in the normal terminal.",
            dim(theme),
        )),
    ]
}

fn help_lines(theme: &Theme) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);
    let key = Style::default().fg(theme.secondary);
    let text = Style::default().fg(theme.fg);

    let bindings = [
        ("↑ / k", "Previous service"),
        ("↓ / j", "Next service"),
        ("PgUp / Ctrl+b", "Page up"),
        ("PgDn / Ctrl+f", "Page down"),
        ("Home / g", "First service"),
        ("End / G", "Last service"),
        ("1-9", "Jump to service by number"),
        ("Space / Enter", "Install selected service"),
        ("? / h", "Show this help"),
        ("q / Esc / Ctrl+c", "Quit"),
    ];

    let mut lines = vec![
        Line::from(Span::styled("Key Bindings", heading)),
        Line::from(""),
    ];
    lines.extend(bindings.iter().map(|(k, what)| {
        Line::from(vec![
            Span::styled(format!("  {k:<18}"), key),
            Span::styled((*what).to_string(), text),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to return",
        dim(theme),
    )));
    lines
}

fn too_small_lines(theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Terminal too small",
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Resize to continue", dim(theme))),
    ]
}

fn browsing_lines(browser: &Browser, theme: &Theme) -> Vec<Line<'static>> {
    let compact = browser.height < COMPACT_BREAKPOINT;
    let height = browser.viewport_height();
    let layout = browser.layout();
    let total = layout.len();

    // Chrome above the list: title + blank, plus a heading + blank when not compact
    let mut lines = Vec::with_capacity(usize::from(browser.height));
    if compact {
        lines.push(Line::from(Span::styled(
            format!(" {COMPACT_TITLE} "),
            title_style(theme),
        )));
        lines.push(Line::from(""));
    } else {
        lines.push(Line::from(Span::styled(
            format!(" {TITLE} "),
            title_style(theme),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Available Services:",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    if browser.entries.is_empty() {
        lines.push(Line::from(Span::styled("No services available", dim(theme))));
        lines.extend(std::iter::repeat(Line::from("")).take(height.saturating_sub(1)));
    } else {
        let end = (browser.viewport_top + height).min(total);
        let visible = layout.lines().get(browser.viewport_top..end).unwrap_or_default();
        for line in visible {
            lines.push(layout_line(line, browser, theme));
        }
        // Pad so the footer stays pinned to the bottom
        let padding = height.saturating_sub(visible.len());
        lines.extend(std::iter::repeat(Line::from("")).take(padding));
    }

    // At the minimum height the one-row viewport leaves no room for the spacer
    if lines.len() + 3 <= usize::from(browser.height) {
        lines.push(Line::from(""));
    }
    if total > height {
        let first = browser.viewport_top + 1;
        let last = (browser.viewport_top + height).min(total);
        lines.push(Line::from(Span::styled(
            format!("showing {first}–{last} of {total}"),
            dim(theme),
        )));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(FOOTER, dim(theme))));

    lines
}

fn layout_line(line: &LayoutLine, browser: &Browser, theme: &Theme) -> Line<'static> {
    match line {
        LayoutLine::Blank => Line::from(""),
        LayoutLine::Header(category) => Line::from(Span::styled(
            format!("{category}:"),
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        LayoutLine::Entry(index) => {
            let Some(entry) = browser.entries.get(*index) else {
                return Line::from("");
            };
            let is_cursor = *index == browser.cursor;
            let mark = if is_cursor { CURSOR_MARK } else { "  " };

            let text_style = if is_cursor {
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg)
            };

            let mut spans = vec![Span::styled(
                format!("{mark}  {} - {}", entry.name, entry.description),
                text_style,
            )];
            if entry.installed {
                spans.push(Span::styled(
                    INSTALLED_MARK,
                    Style::default().fg(theme.success),
                ));
            }
            Line::from(spans)
        }
    }
}
