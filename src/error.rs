//! Error types for the shell, command handlers, and configuration.

use std::fmt;

// ---------------------------------------------------------------------------
// ShellError
// ---------------------------------------------------------------------------

/// Errors produced by shell orchestration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// `set_mode` was given a name with no registered mode.
    InvalidMode(String),
    /// `run_command` was given a name with no registered handler.
    UnknownCommand(String),
    /// A host mode tried to take a name the shell reserves for itself.
    ReservedMode(String),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMode(name) => write!(f, "invalid mode: {name}"),
            Self::UnknownCommand(name) => write!(f, "unknown command: {name}"),
            Self::ReservedMode(name) => write!(f, "reserved mode name: {name}"),
        }
    }
}

impl std::error::Error for ShellError {}

// ---------------------------------------------------------------------------
// CommandError
// ---------------------------------------------------------------------------

/// Where a [`CommandError`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandErrorKind {
    /// Raised by the shell itself, e.g. [`ShellError::UnknownCommand`].
    Shell(ShellError),
    /// Returned by a registered command handler.
    Handler,
}

/// Error reported by a command handler, or by the shell on dispatch.
///
/// The text is shown verbatim on the message line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandError {
    kind: CommandErrorKind,
    message: String,
}

impl CommandError {
    /// A handler-reported failure.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            kind: CommandErrorKind::Handler,
            message: message.into(),
        }
    }

    /// Display text for the message line.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &CommandErrorKind {
        &self.kind
    }

    /// The shell error behind this failure, if the shell raised it.
    pub fn shell_error(&self) -> Option<&ShellError> {
        match &self.kind {
            CommandErrorKind::Shell(err) => Some(err),
            CommandErrorKind::Handler => None,
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CommandError {}

impl From<String> for CommandError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for CommandError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<ShellError> for CommandError {
    fn from(e: ShellError) -> Self {
        Self {
            message: e.to_string(),
            kind: CommandErrorKind::Shell(e),
        }
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}
