//! # Recipe Executor
//!
//! Runs install recipes step by step with full terminal access.
//!
//! ## Full Terminal Access
//!
//! Every step inherits stdin, stdout and stderr from the parent process:
//!
//! ```ignore
//! Command::new("sudo")
//!     .stdin(Stdio::inherit())
//!     .stdout(Stdio::inherit())
//!     .stderr(Stdio::inherit())
//! ```
//!
//! so `sudo` can prompt for a password and package managers can draw their
//! own progress output. This is only safe once the browser has left the
//! alternate screen, which is why installs never start from inside the
//! event loop.
//!
//! ## Failure Handling
//!
//! A step that exits non-zero aborts the recipe with
//! [`CatalogError::StepFailed`], unless the step is optional, in which case a
//! warning is printed and the recipe continues. There are no retries.

use super::recipe::{Recipe, Step};
use super::CatalogError;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{info, warn};

pub fn print_info(msg: &str) {
    println!("ℹ️  {msg}");
}

pub fn print_success(msg: &str) {
    println!("✅ {msg}");
}

pub fn print_warning(msg: &str) {
    println!("⚠️  {msg}");
}

pub fn print_error(msg: &str) {
    eprintln!("❌ {msg}");
}

/// Run one step and return its exit code.
///
/// Spawn failures (program missing, permission denied) are errors; a
/// process that runs and exits non-zero is not.
pub async fn run_step(step: &Step) -> Result<i32, CatalogError> {
    let (program, args) = step.command_line();

    let status = Command::new(program)
        .args(&args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|source| CatalogError::Spawn {
            program: program.to_string(),
            source,
        })?;

    // Killed by a signal: no code, report as generic failure.
    Ok(status.code().unwrap_or(1))
}

/// Run every step of `recipe` in order, then print its notes.
pub async fn run_recipe(id: &str, recipe: &Recipe) -> Result<(), CatalogError> {
    info!(service = id, steps = recipe.steps.len(), "running install recipe");

    for step in recipe.steps {
        print_info(&format!("{}...", capitalize(step.info)));

        let outcome = run_step(step).await;
        let code = match outcome {
            Ok(0) => continue,
            Ok(code) => code,
            Err(e) if step.optional => {
                warn!(service = id, step = step.info, error = %e, "optional step could not run");
                print_warning(&format!("Skipped: {} ({e})", step.info));
                continue;
            }
            Err(e) => return Err(e),
        };

        if step.optional {
            warn!(service = id, step = step.info, code, "optional step failed");
            print_warning(&format!("Skipped: {} (exit status {code})", step.info));
            continue;
        }

        warn!(service = id, step = step.info, code, "install step failed");
        return Err(CatalogError::StepFailed {
            step: step.info.to_string(),
            code,
        });
    }

    for note in recipe.notes {
        print_info(note);
    }

    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
