//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`VIMSHELL_LOG`, `VIMSHELL_LOG_FILE`,
//!    `VIMSHELL_COMMAND_PREFIX`, `VIMSHELL_HISTORY_MAX`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./vimshell.toml in the current directory
//! 4. $XDG_CONFIG_HOME/vimshell/vimshell.toml (or ~/.config/vimshell/vimshell.toml)
//! 5. Built-in defaults

use crate::error::ConfigError;
use crate::settings::COMMAND_MODE_NAME;
use std::path::{Path, PathBuf};

mod defaults;
mod env;
mod sources;
mod types;

use env::apply_env_overrides;
pub use sources::config_root_dir;
use sources::read_config_text_with_sources;
pub use types::{Config, ConfigSource, HistoryConfig, LoadedConfig, LoggingConfig, ShellConfig};

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    Ok(load_config_with_source(path_override)?.config)
}

/// Load configuration and report which source it came from.
pub fn load_config_with_source(path_override: Option<&str>) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let mut config: Config = toml::from_str(&config_text)?;
    apply_env_overrides(&mut config, &env_lookup)?;
    validate(&config)?;
    Ok(LoadedConfig { config, source })
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let mode = config.shell.default_mode.trim();
    if mode.is_empty() {
        return Err(ConfigError::Invalid(
            "shell.default_mode must not be empty".to_string(),
        ));
    }
    if mode == COMMAND_MODE_NAME {
        return Err(ConfigError::Invalid(format!(
            "shell.default_mode cannot be `{COMMAND_MODE_NAME}`; that name is reserved"
        )));
    }
    if config.history.max_entries == 0 {
        return Err(ConfigError::Invalid(
            "history.max_entries must be positive".to_string(),
        ));
    }
    Ok(())
}
