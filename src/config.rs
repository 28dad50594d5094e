//! Defines the `Config` struct that drives a run.
//!
//! There are no configuration files; a `Config` is derived from the process
//! environment (working directory, display availability) and the CLI flags.

use crate::cli::Cli;
use crate::selector::preferred_start_dir;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// How the user is asked for a file and told about errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Native file and message dialogs.
    Native,
    /// A stdin prompt and stderr messages.
    Terminal,
}

impl Interaction {
    /// Picks the native dialogs when they are compiled in, not disabled, and a
    /// display is available.
    pub fn detect(headless: bool) -> Self {
        if !headless && cfg!(feature = "gui") && display_available() {
            Interaction::Native
        } else {
            Interaction::Terminal
        }
    }
}

/// Settings for a single run.
#[derive(Debug, Clone)]
pub struct Config {
    /// The process's working directory when the run started.
    pub working_dir: PathBuf,
    /// Where the file picker opens: `working_dir/src` if present, else `working_dir`.
    pub start_dir: PathBuf,
    pub interaction: Interaction,
}

impl Config {
    /// Builds a `Config` from parsed CLI arguments and the current directory.
    ///
    /// # Errors
    /// Returns an error if the current working directory cannot be determined.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let working_dir =
            env::current_dir().context("Failed to determine the current working directory")?;
        Ok(Self::for_working_dir(
            working_dir,
            Interaction::detect(cli.headless),
        ))
    }

    /// Builds a `Config` for an explicit working directory.
    pub fn for_working_dir(working_dir: impl Into<PathBuf>, interaction: Interaction) -> Self {
        let working_dir = working_dir.into();
        let start_dir = preferred_start_dir(&working_dir);
        Self {
            working_dir,
            start_dir,
            interaction,
        }
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn display_available() -> bool {
    env::var_os("DISPLAY").is_some() || env::var_os("WAYLAND_DISPLAY").is_some()
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn display_available() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_headless_always_uses_terminal() {
        assert_eq!(Interaction::detect(true), Interaction::Terminal);
    }

    #[cfg(not(feature = "gui"))]
    #[test]
    fn test_without_gui_feature_uses_terminal() {
        assert_eq!(Interaction::detect(false), Interaction::Terminal);
    }

    #[test]
    fn test_for_working_dir_prefers_src() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::create_dir(temp.path().join("src"))?;

        let config = Config::for_working_dir(temp.path(), Interaction::Terminal);
        assert_eq!(config.working_dir, temp.path());
        assert_eq!(config.start_dir, temp.path().join("src"));
        assert_eq!(config.interaction, Interaction::Terminal);

        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_from_cli_uses_current_dir() -> anyhow::Result<()> {
        let cli = Cli { headless: true };
        let config = Config::from_cli(&cli)?;
        assert_eq!(config.working_dir, env::current_dir()?);
        assert_eq!(config.interaction, Interaction::Terminal);
        Ok(())
    }
}
