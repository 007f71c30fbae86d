//! # Bootup CLI Entry Point
//!
//! Bootup is a terminal installer for common server software. It shows a
//! browsable list of services grouped by category, marks the ones already
//! present on this host, and installs the one you pick.
//!
//! ## Usage
//!
//! ```bash
//! # Browse and pick a service
//! bootup
//!
//! # Install directly, skipping the browser
//! bootup install redis
//!
//! # Print the catalog with installed markers
//! bootup list
//!
//! # List themes, or save one as the default
//! bootup theme
//! bootup theme "Gruvbox Dark"
//!
//! # Use a theme for one run
//! bootup --theme nord
//!
//! # Shell completion (service ids complete after `bootup install`)
//! bootup completions bash > ~/.local/share/bash-completion/completions/bootup
//! ```
//!
//! ## Flow
//!
//! 1. **Catalog**: build the entry list, running every installed check once
//! 2. **Browser**: alternate screen, raw mode, one redraw per event
//! 3. **Handoff**: restore the terminal, then run the selected install with
//!    inherited stdio
//!
//! ## Key Bindings
//!
//! - `j` / `Down`, `k` / `Up` - Move the cursor
//! - `PgDn` / `Ctrl+f`, `PgUp` / `Ctrl+b` - Page
//! - `g` / `Home`, `G` / `End` - First / last service
//! - `1`-`9` - Jump to a service by number
//! - `Space` / `Enter` - Install the selected service
//! - `?` / `h` - Key binding help
//! - `q` / `Esc` / `Ctrl+c` - Quit

use bootup::catalog::executor::{print_error, print_success};
use bootup::catalog::{BuiltinCatalog, Catalog};
use bootup::logging;
use bootup::ui::{self, config::Config, entries, theme::Theme, Browser};

use anyhow::{Context, Result};
use clap::builder::{PossibleValue, StringValueParser, TypedValueParser};
use clap::{Arg, Command, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::ffi::OsStr;
use std::io;
use std::panic;
use tracing::{info, warn};

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    /// Block until the next event. `None` means input is closed.
    fn read_event(&mut self) -> Result<Option<Event>>;
}

/// Production event reader backed by crossterm's blocking read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self) -> Result<Option<Event>> {
        Ok(Some(
            event::read().context("Failed to read terminal event")?,
        ))
    }
}

/// Bootup - an interactive installer for common server software
#[derive(Parser, Debug)]
#[command(name = "bootup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse and install common server software", long_about = None)]
struct Args {
    /// Theme to use for this run (see `bootup theme`)
    #[arg(long, global = true, value_name = "NAME")]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Install a service without opening the browser
    Install {
        /// Service identifier, e.g. `redis` or `node_exporter`
        #[arg(value_parser = ServiceIdParser, hide_possible_values = true)]
        service: String,
    },
    /// Print all services grouped by category
    List,
    /// List the built-in themes, or save NAME as the default
    Theme {
        name: Option<String>,
    },
    /// Print a shell completion script
    Completions {
        shell: Shell,
    },
}

/// Accepts any service id, so unknown ids still reach the "not supported"
/// message, but offers the catalog's ids to completion scripts.
#[derive(Clone, Debug)]
struct ServiceIdParser;

impl TypedValueParser for ServiceIdParser {
    type Value = String;

    fn parse_ref(
        &self,
        cmd: &Command,
        arg: Option<&Arg>,
        value: &OsStr,
    ) -> std::result::Result<String, clap::Error> {
        StringValueParser::new().parse_ref(cmd, arg, value)
    }

    fn possible_values(&self) -> Option<Box<dyn Iterator<Item = PossibleValue> + '_>> {
        Some(Box::new(
            BuiltinCatalog::new()
                .service_ids()
                .into_iter()
                .map(PossibleValue::new),
        ))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    let _ = panic::take_hook();

    match result {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => Err(e),
    }
}

/// Dispatch the CLI. Returns `Ok(false)` when the run failed in a way that
/// was already reported to the user and should only affect the exit code.
async fn run_application(args: Args) -> Result<bool> {
    let catalog = BuiltinCatalog::new();

    match args.command {
        Some(Commands::Install { service }) => Ok(install(&catalog, &service).await),
        Some(Commands::List) => {
            print!("{}", list_output(&catalog));
            Ok(true)
        }
        Some(Commands::Theme { name }) => theme_command(name.as_deref()),
        Some(Commands::Completions { shell }) => {
            print_completions(shell, &mut io::stdout());
            Ok(true)
        }
        None => {
            let theme = pick_theme(args.theme.as_deref());
            match run_browser(&catalog, theme)? {
                Some(id) => Ok(install(&catalog, &id).await),
                None => Ok(true),
            }
        }
    }
}

/// Config theme, overridden by `--theme`. Unknown names fall back to the
/// default theme.
fn pick_theme(override_name: Option<&str>) -> &'static Theme {
    let config = Config::load();
    match config.resolve_theme(override_name) {
        Some(theme) => theme,
        None => {
            let name = override_name.unwrap_or(&config.theme);
            eprintln!(
                "Warning: unknown theme '{}', using {}",
                name,
                Theme::default_theme().name
            );
            warn!(theme = name, "unknown theme, falling back to default");
            Theme::default_theme()
        }
    }
}

fn theme_command(name: Option<&str>) -> Result<bool> {
    let Some(name) = name else {
        let current = Config::load().theme;
        for theme in Theme::all() {
            let marker = if theme.name.eq_ignore_ascii_case(&current) {
                "*"
            } else {
                " "
            };
            println!("{marker} {}", theme.name);
        }
        return Ok(true);
    };

    let Some(theme) = Theme::by_name(name) else {
        print_error(&format!("Unknown theme: {name}"));
        return Ok(false);
    };

    let config = Config {
        theme: theme.name.to_string(),
    };
    config.save().context("Failed to save theme")?;
    println!("Theme set to {}", theme.name);
    Ok(true)
}

const LIST_HEADING: &str = "Available services:";
const LIST_HINT: &str = "To install a service, use the command: `bootup install [service]`";

fn print_completions(shell: Shell, out: &mut dyn io::Write) {
    clap_complete::generate(shell, &mut Args::command(), "bootup", out);
}

/// Render the `list` output: a heading and usage hint, then categories in
/// display order, one line per service, `✓` after installed ones.
fn list_output<C: Catalog + ?Sized>(catalog: &C) -> String {
    let entries = entries::build_entries(catalog);
    let mut out = format!("{LIST_HEADING}\n{LIST_HINT}\n");
    let mut current: Option<&str> = None;

    for entry in &entries {
        if current != Some(entry.category.as_str()) {
            out.push('\n');
            out.push_str(&format!("{}:\n", entry.category));
            current = Some(entry.category.as_str());
        }
        let mark = if entry.installed { " ✓" } else { "" };
        out.push_str(&format!(
            "  {:<14} {}{}\n",
            entry.id, entry.description, mark
        ));
    }

    out
}

/// Look up and run the install action for `id`, reporting the outcome.
async fn install<C: Catalog + ?Sized>(catalog: &C, id: &str) -> bool {
    let installer = match catalog.installer_for(id) {
        Ok(installer) => installer,
        Err(e) => {
            print_error(&e.to_string());
            return false;
        }
    };

    println!("🚀 Installing {id}...");
    info!(service = id, "install started");

    match installer.run().await {
        Ok(()) => {
            print_success(&format!("{id} installed successfully!"));
            info!(service = id, "install finished");
            true
        }
        Err(e) => {
            print_error(&format!("Failed to install {id}: {e}"));
            warn!(service = id, error = %e, "install failed");
            false
        }
    }
}

/// Run the interactive browser and return the confirmed service id.
///
/// The terminal is always restored before this returns, so the caller can
/// hand it straight to the installer.
fn run_browser<C: Catalog + ?Sized>(catalog: &C, theme: &'static Theme) -> Result<Option<String>> {
    // Installed checks run here, once, before the screen switches
    let entries = entries::build_entries(catalog);
    info!(count = entries.len(), "catalog loaded");

    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to setup terminal");
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(e).context("Failed to create terminal");
        }
    };

    let run_result = terminal
        .size()
        .context("Failed to read terminal size")
        .and_then(|size| {
            let browser = Browser::new(entries, size.width, size.height);
            let mut event_reader = CrosstermEventReader;
            run_loop(browser, &mut event_reader, |browser| {
                terminal
                    .draw(|f| ui::render(f, browser, theme))
                    .context("Failed to draw terminal UI")?;
                Ok(())
            })
        });

    // Restore terminal (always runs, even if the loop failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    let selection = run_result?;
    cleanup_result?;

    Ok(selection)
}

/// Draw, wait for an event, apply it, repeat. The closing frame (farewell
/// or handoff) is drawn once before returning.
fn run_loop<F>(
    mut browser: Browser,
    event_reader: &mut dyn EventReader,
    mut draw: F,
) -> Result<Option<String>>
where
    F: FnMut(&Browser) -> Result<()>,
{
    loop {
        draw(&browser)?;

        if browser.is_finished() {
            break;
        }

        match event_reader.read_event()? {
            Some(event) => browser.handle_event(&event),
            None => browser.quit(),
        }
    }

    Ok(browser.into_selection())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}
