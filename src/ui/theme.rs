//! # Theme System
//!
//! Colors for the service browser, grouped by the role they play on screen.
//!
//! The renderer never reaches for a `ratatui::style::Color` directly; it takes
//! a [`Theme`] by reference and reads its fields. The theme is picked once at
//! startup (config file, then `--theme`) and never changes while the browser
//! runs.
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default)
//! - **Catppuccin Macchiato**
//! - **Catppuccin Frappe**
//! - **Dracula**
//! - **Nord**
//! - **Gruvbox Dark**
//! - **Bootup Classic** - purple and orange, the classic bootup look

use ratatui::style::Color;

/// All colors used by the browser.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Name used in the config file and by `--theme`.
    pub name: &'static str,

    /// Text drawn on top of the accent color (title bar).
    pub bg: Color,
    /// Service names and descriptions.
    pub fg: Color,
    /// Footer hints, scroll indicator, help text.
    pub fg_dim: Color,

    /// Title bar background and section headings.
    pub accent: Color,
    /// Category headers.
    pub secondary: Color,
    /// The line under the cursor.
    pub highlight: Color,

    /// Installed marker.
    pub success: Color,
    /// "Too small" notice.
    pub error: Color,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }
}

static BUILT_IN_THEMES: [Theme; 7] = [
    // 0 - Catppuccin Mocha (default)
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),           // base
        fg: Color::Rgb(205, 214, 244),        // text
        fg_dim: Color::Rgb(108, 112, 134),    // overlay0
        accent: Color::Rgb(137, 180, 250),    // blue
        secondary: Color::Rgb(249, 226, 175), // yellow
        highlight: Color::Rgb(245, 194, 231), // pink
        success: Color::Rgb(166, 227, 161),   // green
        error: Color::Rgb(243, 139, 168),     // red
    },
    // 1 - Catppuccin Macchiato
    Theme {
        name: "Catppuccin Macchiato",
        bg: Color::Rgb(36, 39, 58),
        fg: Color::Rgb(202, 211, 245),
        fg_dim: Color::Rgb(110, 115, 141),
        accent: Color::Rgb(138, 173, 244),
        secondary: Color::Rgb(238, 212, 159),
        highlight: Color::Rgb(245, 189, 230),
        success: Color::Rgb(166, 218, 149),
        error: Color::Rgb(237, 135, 150),
    },
    // 2 - Catppuccin Frappe
    Theme {
        name: "Catppuccin Frappe",
        bg: Color::Rgb(48, 52, 70),
        fg: Color::Rgb(198, 208, 245),
        fg_dim: Color::Rgb(115, 121, 148),
        accent: Color::Rgb(140, 170, 238),
        secondary: Color::Rgb(229, 200, 144),
        highlight: Color::Rgb(244, 184, 228),
        success: Color::Rgb(166, 209, 137),
        error: Color::Rgb(231, 130, 132),
    },
    // 3 - Dracula
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(189, 147, 249),    // purple
        secondary: Color::Rgb(255, 184, 108), // orange
        highlight: Color::Rgb(255, 121, 198), // pink
        success: Color::Rgb(80, 250, 123),
        error: Color::Rgb(255, 85, 85),
    },
    // 4 - Nord
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),
        secondary: Color::Rgb(235, 203, 139),
        highlight: Color::Rgb(180, 142, 173),
        success: Color::Rgb(163, 190, 140),
        error: Color::Rgb(191, 97, 106),
    },
    // 5 - Gruvbox Dark
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152),
        secondary: Color::Rgb(250, 189, 47),
        highlight: Color::Rgb(211, 134, 155),
        success: Color::Rgb(184, 187, 38),
        error: Color::Rgb(251, 73, 52),
    },
    // 6 - Bootup Classic
    Theme {
        name: "Bootup Classic",
        bg: Color::Rgb(250, 250, 250),
        fg: Color::Rgb(220, 220, 220),
        fg_dim: Color::Rgb(98, 98, 98),
        accent: Color::Rgb(125, 86, 244),
        secondary: Color::Rgb(255, 165, 0),
        highlight: Color::Rgb(238, 111, 248),
        success: Color::Rgb(4, 181, 117),
        error: Color::Rgb(255, 0, 0),
    },
];
