//! Configuration data model.
//!
//! This module holds struct definitions plus default values. Source discovery
//! and env overrides live beside it so precedence stays in one place.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults::{
    DEFAULT_COMMAND_PREFIX, DEFAULT_HISTORY_MAX_ENTRIES, DEFAULT_LOG_FILTER, DEFAULT_SHELL_MODE,
};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub shell: ShellConfig,
    pub history: HistoryConfig,
    pub logging: LoggingConfig,
}

/// Shell setup under `[shell]`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShellConfig {
    /// Name of the keymap mode the shell starts in.
    pub default_mode: String,
    pub command_prefix: String,
    /// Message shown before any command runs.
    pub greeting: Option<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            default_mode: DEFAULT_SHELL_MODE.to_string(),
            command_prefix: DEFAULT_COMMAND_PREFIX.to_string(),
            greeting: None,
        }
    }
}

/// In-memory command history under `[history]`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HistoryConfig {
    /// Append submitted command lines to history.
    pub record: bool,
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            record: true,
            max_entries: DEFAULT_HISTORY_MAX_ENTRIES,
        }
    }
}

/// Diagnostics logging under `[logging]`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing-subscriber` env-filter directive, e.g. `vimshell=debug`.
    pub filter: String,
    /// Log file; logging stays off when unset since the UI owns the terminal.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            file: None,
        }
    }
}

/// Where the loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Config loaded from explicit `--config` path.
    Explicit(PathBuf),
    /// Config loaded from `./vimshell.toml`.
    Local,
    /// Config loaded from the global config directory.
    Global(PathBuf),
    /// No file found; built-in defaults were used.
    BuiltInDefaults,
}

/// Configuration payload plus its source.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}
