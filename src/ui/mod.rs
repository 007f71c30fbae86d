//! # UI Module
//!
//! The interactive service browser.
//!
//! ## Components
//!
//! - [`entries`] - builds the category-grouped entry list from the catalog
//! - [`layout`] - maps entries to header / entry / blank lines
//! - [`viewport`] - viewport sizing and the keep-cursor-visible scroll rule
//! - [`keys`] - key event decoding
//! - [`app`] - the browser state machine ([`Browser`])
//! - [`render`](mod@render) - draws a [`Browser`] into a ratatui frame
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ 🚀 Bootup CLI - Interactive Service Installer │  title (compact below 10 rows)
//! │                                              │
//! │ Available Services:                          │
//! │                                              │
//! │ Web Servers:                                 │  ┐
//! │ ▶   nginx - High-performance web server ✓    │  │ viewport
//! │     caddy - Modern web server ...            │  ┘
//! │                                              │
//! │ showing 1–3 of 28                            │  scroll indicator
//! │ ↑/↓ j/k: navigate • space/enter: install ... │  footer
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The browser never installs anything itself. Confirming a service ends the
//! browser; the caller restores the terminal and only then runs the install.

pub mod app;
pub mod config;
pub mod entries;
pub mod keys;
pub mod layout;
pub mod render;
pub mod theme;
pub mod viewport;

pub use app::{Browser, Mode};
pub use render::render;
