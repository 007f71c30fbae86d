//! Installed checks for catalog services.

use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// How to tell whether a service is already installed.
#[derive(Debug, Clone, Copy)]
pub enum Probe {
    /// A command resolvable on `PATH`.
    Command(&'static str),
    /// A file or directory that the install leaves behind.
    Path(&'static str),
    /// Installed if any of the inner probes says so.
    AnyOf(&'static [Probe]),
}

impl Probe {
    /// Run the probe. Any failure to run the check reads as `false`.
    pub fn check(&self) -> bool {
        match self {
            Probe::Command(name) => command_available(name),
            Probe::Path(path) => Path::new(path).exists(),
            Probe::AnyOf(probes) => probes.iter().any(Probe::check),
        }
    }
}

fn command_available(name: &str) -> bool {
    Command::new("sh")
        .arg("-c")
        .arg(format!("command -v {name}"))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or_else(|e| {
            debug!(command = name, error = %e, "installed check could not run");
            false
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_probe_finds_shell() {
        assert!(Probe::Command("sh").check());
    }

    #[test]
    fn test_command_probe_missing_binary() {
        assert!(!Probe::Command("bootup-definitely-not-a-real-binary").check());
    }

    #[test]
    fn test_path_probe() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let marker = temp_dir.path().join("marker");
        std::fs::write(&marker, "").expect("write marker");

        // Probe::Path needs a 'static str; leak the test path.
        let leaked: &'static str = Box::leak(marker.display().to_string().into_boxed_str());
        assert!(Probe::Path(leaked).check());
        assert!(!Probe::Path("/nonexistent/bootup/marker").check());
    }

    #[test]
    fn test_any_of_probe() {
        static PROBES: [Probe; 2] = [
            Probe::Path("/nonexistent/bootup/marker"),
            Probe::Command("sh"),
        ];
        assert!(Probe::AnyOf(&PROBES).check());
        assert!(!Probe::AnyOf(&[]).check());
    }
}
