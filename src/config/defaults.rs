//! Default configuration constants.
//!
//! Keeping defaults in one module lets the data model and the loader share the
//! same literals.

use crate::cmdline::DEFAULT_MAX_HISTORY;
use crate::settings::{COMMAND_PREFIX, DEFAULT_MODE_NAME};

/// Mode the shell starts in and command mode returns to.
pub(super) const DEFAULT_SHELL_MODE: &str = DEFAULT_MODE_NAME;
/// Prefix drawn before the command buffer.
pub(super) const DEFAULT_COMMAND_PREFIX: &str = COMMAND_PREFIX;
/// History cap applied when recording submitted lines.
pub(super) const DEFAULT_HISTORY_MAX_ENTRIES: usize = DEFAULT_MAX_HISTORY;
/// `tracing` filter directive used when none is configured.
pub(super) const DEFAULT_LOG_FILTER: &str = "info";

/// Config file name looked up locally and under the config root.
pub(super) const CONFIG_FILE_NAME: &str = "vimshell.toml";
/// Directory under the config root holding the global config file.
pub(super) const CONFIG_DIR_NAME: &str = "vimshell";
