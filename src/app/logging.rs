//! File-backed tracing setup.
//!
//! The terminal belongs to the shell UI, so logs only go to a file, and only
//! when one is configured.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use vimshell::config::LoggingConfig;

/// Install the global subscriber. Returns `Ok(false)` when no log file is set.
pub(crate) fn init(config: &LoggingConfig) -> io::Result<bool> {
    let Some(path) = &config.file else {
        return Ok(false);
    };
    let filter = parse_filter(&config.filter)?;
    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)?;
    Ok(true)
}

fn parse_filter(spec: &str) -> io::Result<EnvFilter> {
    EnvFilter::try_new(spec).map_err(|err| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid log filter `{spec}`: {err}"),
        )
    })
}

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
