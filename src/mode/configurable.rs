//! Declarative keymap-driven mode.

use super::KeyHandler;
use crate::key::{Key, KeyEvent};
use crate::settings;
use crate::shell::Shell;
use crossterm::style::ContentStyle;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A mode whose behavior is a keymap from key code to handler.
///
/// Unmapped keys are dropped silently.
#[derive(Clone)]
pub struct ConfigurableMode {
    name: String,
    keymap: HashMap<Key, KeyHandler>,
}

impl ConfigurableMode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keymap: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status_style(&self, base: ContentStyle) -> ContentStyle {
        settings::configurable_badge_style(base)
    }

    /// Bind `handler` to `key`, replacing any earlier binding.
    ///
    /// Printable characters all share [`Key::Rune`]; the handler reads the
    /// character from the event.
    pub fn map_key<F>(&mut self, key: Key, handler: F)
    where
        F: Fn(&mut Shell, &KeyEvent) + 'static,
    {
        self.keymap.insert(key, Rc::new(handler));
    }

    /// Builder form of [`map_key`](Self::map_key).
    pub fn with_key<F>(mut self, key: Key, handler: F) -> Self
    where
        F: Fn(&mut Shell, &KeyEvent) + 'static,
    {
        self.map_key(key, handler);
        self
    }

    pub fn unmap_key(&mut self, key: Key) {
        self.keymap.remove(&key);
    }

    /// The handler bound to `key`, if any.
    pub fn handler(&self, key: Key) -> Option<KeyHandler> {
        self.keymap.get(&key).cloned()
    }
}

impl fmt::Debug for ConfigurableMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.keymap.keys().collect();
        keys.sort_by_key(|key| format!("{key:?}"));
        f.debug_struct("ConfigurableMode")
            .field("name", &self.name)
            .field("keys", &keys)
            .finish()
    }
}
