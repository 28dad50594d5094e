// src/main.rs

use anyhow::Result;
use clap::Parser;
use file_inspector::cli::Cli;
#[cfg(feature = "gui")]
use file_inspector::dialog::{NativeNotifier, NativePicker};
use file_inspector::dialog::{StderrNotifier, TerminalPicker};
#[cfg(feature = "gui")]
use file_inspector::Interaction;
use file_inspector::{run, Config};
use std::io;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "file_inspector=debug".parse()?
                } else {
                    "file_inspector=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting file-inspector v{}...", env!("CARGO_PKG_VERSION"));

    // --- Setup ---
    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;
    log::debug!("Configuration: {:?}", config);

    // --- Execution ---
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = match config.interaction {
        #[cfg(feature = "gui")]
        Interaction::Native => run(&config, &mut NativePicker, &NativeNotifier, &mut out)?,
        _ => run(
            &config,
            &mut TerminalPicker::stdio(),
            &StderrNotifier,
            &mut out,
        )?,
    };

    log::debug!("Run finished: {:?}", outcome);
    Ok(())
}
