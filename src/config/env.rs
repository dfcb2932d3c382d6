//! Environment overrides.

use std::path::PathBuf;

use crate::error::ConfigError;

use super::Config;

pub(super) const ENV_LOG_FILTER: &str = "VIMSHELL_LOG";
pub(super) const ENV_LOG_FILE: &str = "VIMSHELL_LOG_FILE";
pub(super) const ENV_COMMAND_PREFIX: &str = "VIMSHELL_COMMAND_PREFIX";
pub(super) const ENV_HISTORY_MAX: &str = "VIMSHELL_HISTORY_MAX";

pub(super) fn apply_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(filter) = non_empty(env_lookup, ENV_LOG_FILTER) {
        config.logging.filter = filter;
    }
    if let Some(file) = non_empty(env_lookup, ENV_LOG_FILE) {
        config.logging.file = Some(PathBuf::from(file));
    }
    // An empty prefix is a legitimate choice, so it is not filtered out.
    if let Some(prefix) = env_lookup(ENV_COMMAND_PREFIX) {
        config.shell.command_prefix = prefix;
    }
    if let Some(max) = non_empty(env_lookup, ENV_HISTORY_MAX) {
        config.history.max_entries = max.parse::<usize>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid {ENV_HISTORY_MAX} value `{max}`: expected a positive integer"
            ))
        })?;
    }
    Ok(())
}

fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
