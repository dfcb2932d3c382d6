//! Binary-local application wiring.
//!
//! `main.rs` stays a thin entrypoint; this module turns loaded config and CLI
//! flags into a running shell on the terminal.

pub(crate) mod commands;
pub(crate) mod logging;

use crate::cli::Args;
use std::cell::Cell;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::rc::Rc;
use tracing::info;
use vimshell::config::Config;
use vimshell::host::{self, CrosstermTarget, TerminalGuard};
use vimshell::{Shell, ShellError};

const DEFAULT_GREETING: &str = "Hello! Type :q to exit :)";

/// Fold CLI flags into the loaded configuration; flags win.
pub(crate) fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(path) = &args.log_file {
        config.logging.file = Some(PathBuf::from(path));
    }
    if let Some(prefix) = &args.prefix {
        config.shell.command_prefix = prefix.clone();
    }
}

/// Build the demo shell: config-driven setup plus the bundled commands.
pub(crate) fn build_shell(config: &Config, quit: Rc<Cell<bool>>) -> Result<Shell, ShellError> {
    let mut shell = Shell::from_config(config)?;
    commands::register(&mut shell, quit);
    if config.shell.greeting.is_none() {
        shell.set_message(DEFAULT_GREETING);
    }
    Ok(shell)
}

/// Take over the terminal and run until a quit command fires.
pub(crate) fn run(config: &Config) -> io::Result<()> {
    let quit = Rc::new(Cell::new(false));
    let mut shell = build_shell(config, Rc::clone(&quit))
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    let _guard = TerminalGuard::acquire()?;
    let mut target = CrosstermTarget::new(BufWriter::new(io::stdout()))?;
    info!(mode = shell.mode_name(), "shell started");
    host::run(&mut shell, &mut target, |_, _| {}, |_| quit.get())?;
    info!("shell stopped");
    Ok(())
}
