//! Input modes and key dispatch.
//!
//! Modes form a closed set of built-in kinds plus one open variant for hosts
//! that need their own behavior. Dispatch never holds a borrow of the mode
//! registry while a handler runs, so handlers are free to switch modes or
//! replace the very mode they belong to.

mod command;
mod configurable;

use crate::key::KeyEvent;
use crate::shell::Shell;
use crossterm::style::ContentStyle;
use std::fmt;
use std::rc::Rc;

pub use command::CommandMode;
pub use configurable::ConfigurableMode;

/// Handler invoked for a mapped key in a [`ConfigurableMode`].
pub type KeyHandler = Rc<dyn Fn(&mut Shell, &KeyEvent)>;

/// Capability a host-defined mode provides.
pub trait CustomMode {
    /// Registry name; unique within a shell.
    fn name(&self) -> &str;

    /// Style for the mode badge, derived from the status bar's base style.
    fn status_style(&self, base: ContentStyle) -> ContentStyle {
        base
    }

    fn handle_key(&self, shell: &mut Shell, event: &KeyEvent);
}

/// A named strategy for interpreting key events.
pub enum Mode {
    Configurable(ConfigurableMode),
    Command(CommandMode),
    Custom(Rc<dyn CustomMode>),
}

impl Mode {
    /// Wrap a host-defined mode.
    pub fn custom(mode: impl CustomMode + 'static) -> Self {
        Self::Custom(Rc::new(mode))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Configurable(mode) => mode.name(),
            Self::Command(mode) => mode.name(),
            Self::Custom(mode) => mode.name(),
        }
    }

    pub fn status_style(&self, base: ContentStyle) -> ContentStyle {
        match self {
            Self::Configurable(mode) => mode.status_style(base),
            Self::Command(mode) => mode.status_style(base),
            Self::Custom(mode) => mode.status_style(base),
        }
    }

    pub fn as_configurable_mut(&mut self) -> Option<&mut ConfigurableMode> {
        match self {
            Self::Configurable(mode) => Some(mode),
            _ => None,
        }
    }

    /// Resolve what should run for `event`, detached from the registry.
    pub(crate) fn dispatch_for(&self, event: &KeyEvent) -> Option<Dispatch> {
        match self {
            Self::Configurable(mode) => mode.handler(event.key()).map(Dispatch::Handler),
            Self::Command(mode) => Some(Dispatch::Command(mode.clone())),
            Self::Custom(mode) => Some(Dispatch::Custom(Rc::clone(mode))),
        }
    }
}

impl fmt::Debug for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configurable(mode) => f.debug_tuple("Configurable").field(mode).finish(),
            Self::Command(mode) => f.debug_tuple("Command").field(mode).finish(),
            Self::Custom(mode) => f.debug_tuple("Custom").field(&mode.name()).finish(),
        }
    }
}

impl From<ConfigurableMode> for Mode {
    fn from(mode: ConfigurableMode) -> Self {
        Self::Configurable(mode)
    }
}

impl From<CommandMode> for Mode {
    fn from(mode: CommandMode) -> Self {
        Self::Command(mode)
    }
}

/// Owned unit of work resolved from the active mode.
pub(crate) enum Dispatch {
    Handler(KeyHandler),
    Command(CommandMode),
    Custom(Rc<dyn CustomMode>),
}

impl Dispatch {
    pub(crate) fn run(self, shell: &mut Shell, event: &KeyEvent) {
        match self {
            Self::Handler(handler) => handler(shell, event),
            Self::Command(mode) => mode.handle_key(shell, event),
            Self::Custom(mode) => mode.handle_key(shell, event),
        }
    }
}
