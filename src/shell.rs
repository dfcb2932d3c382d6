//! Shell orchestration: mode registry, command table, and message state.

use crate::cmdline::CommandLine;
use crate::config::Config;
use crate::error::{CommandError, ShellError};
use crate::key::{Key, KeyEvent};
use crate::mode::{CommandMode, ConfigurableMode, Mode};
use crate::render::RenderTarget;
use crate::settings::{COMMAND_MODE_NAME, COMMAND_TRIGGER, DEFAULT_MODE_NAME};
use crate::statusbar::StatusBar;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Handler for a named command: receives the arguments, returns a message.
pub type CommandHandler = Box<dyn Fn(&[String]) -> Result<String, CommandError>>;

/// Owner of all modes, commands, and the command-line state.
///
/// The active mode name always refers to a registered mode.
pub struct Shell {
    mode: String,
    modes: HashMap<String, Mode>,
    commands: HashMap<String, CommandHandler>,
    message: String,
    error: Option<CommandError>,
    command_line: CommandLine,
    status_bar: StatusBar,
    record_history: bool,
}

impl Shell {
    /// Create a shell starting in `default_mode`, plus a command mode that
    /// returns to it.
    ///
    /// Fails with [`ShellError::ReservedMode`] when the default mode is named
    /// like the built-in command mode, since the two would share a registry
    /// slot and command mode could never be left.
    pub fn new(default_mode: impl Into<Mode>) -> Result<Self, ShellError> {
        let default_mode = default_mode.into();
        if default_mode.name() == COMMAND_MODE_NAME {
            return Err(ShellError::ReservedMode(COMMAND_MODE_NAME.to_string()));
        }
        Ok(Self::with_default_mode(default_mode))
    }

    /// Vim-like setup: a `normal` mode where `:` enters command mode, and the
    /// default status bar.
    pub fn with_defaults() -> Self {
        Self::vim_like(DEFAULT_MODE_NAME)
    }

    /// Build the vim-like setup from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, ShellError> {
        let name = config.shell.default_mode.as_str();
        if name == COMMAND_MODE_NAME {
            return Err(ShellError::ReservedMode(name.to_string()));
        }
        let mut shell = Self::vim_like(name);
        shell
            .status_bar
            .set_command_prefix(config.shell.command_prefix.clone());
        shell.set_record_history(config.history.record);
        shell
            .command_line
            .set_max_history(config.history.max_entries);
        if let Some(greeting) = &config.shell.greeting {
            shell.set_message(greeting.clone());
        }
        Ok(shell)
    }

    /// Callers guarantee `default_mode` is not named like command mode.
    fn with_default_mode(default_mode: Mode) -> Self {
        let name = default_mode.name().to_string();
        let mut shell = Self {
            mode: name.clone(),
            modes: HashMap::new(),
            commands: HashMap::new(),
            message: String::new(),
            error: None,
            command_line: CommandLine::new(),
            status_bar: StatusBar::new(),
            record_history: false,
        };
        shell.add_mode(default_mode);
        shell.add_mode(CommandMode::new(name));
        shell
    }

    fn vim_like(default_mode: &str) -> Self {
        let normal = ConfigurableMode::new(default_mode).with_key(Key::Rune, |shell, ev| {
            if ev.char() == Some(COMMAND_TRIGGER) {
                if let Err(err) = shell.set_mode(COMMAND_MODE_NAME) {
                    warn!(%err, "cannot enter command mode");
                }
            }
        });
        let mut shell = Self::with_default_mode(normal.into());
        shell.status_bar = StatusBar::vim_default();
        shell
    }

    /// Name of the active mode.
    pub fn mode_name(&self) -> &str {
        &self.mode
    }

    /// The active mode.
    pub fn current_mode(&self) -> &Mode {
        // Every path that changes `mode` checks registration first.
        &self.modes[&self.mode]
    }

    pub fn is_command_mode(&self) -> bool {
        matches!(self.current_mode(), Mode::Command(_))
    }

    pub fn mode(&self, name: &str) -> Option<&Mode> {
        self.modes.get(name)
    }

    pub fn mode_mut(&mut self, name: &str) -> Option<&mut Mode> {
        self.modes.get_mut(name)
    }

    /// Switch the active mode. Fails, leaving state unchanged, for unknown
    /// names.
    pub fn set_mode(&mut self, name: &str) -> Result<(), ShellError> {
        if !self.modes.contains_key(name) {
            return Err(ShellError::InvalidMode(name.to_string()));
        }
        debug!(from = %self.mode, to = name, "mode switch");
        self.mode = name.to_string();
        Ok(())
    }

    /// Register a mode under its own name, replacing any mode of that name.
    pub fn add_mode(&mut self, mode: impl Into<Mode>) {
        let mode = mode.into();
        self.modes.insert(mode.name().to_string(), mode);
    }

    /// Register a command handler, replacing any handler of that name.
    pub fn add_command<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&[String]) -> Result<String, CommandError> + 'static,
    {
        self.commands.insert(name.into(), Box::new(handler));
    }

    pub fn has_command(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Run a command and store its outcome for display.
    ///
    /// A success clears the error and a failure clears the message. Unknown
    /// names surface as [`ShellError::UnknownCommand`] on the message line.
    pub fn run_command(&mut self, name: &str, args: &[String]) {
        let outcome = match self.commands.get(name) {
            Some(handler) => {
                debug!(command = name, ?args, "running command");
                handler(args)
            }
            None => {
                warn!(command = name, "unknown command");
                Err(ShellError::UnknownCommand(name.to_string()).into())
            }
        };
        match outcome {
            Ok(message) => {
                self.message = message;
                self.error = None;
            }
            Err(err) => {
                self.message.clear();
                self.error = Some(err);
            }
        }
    }

    /// Route a key event to the active mode.
    pub fn handle_key(&mut self, event: &KeyEvent) {
        let dispatch = self.current_mode().dispatch_for(event);
        if let Some(dispatch) = dispatch {
            dispatch.run(self, event);
        }
    }

    /// Message from the last successful command.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Error from the last failed command.
    pub fn error(&self) -> Option<&CommandError> {
        self.error.as_ref()
    }

    /// Show `message` on the message line, clearing any error.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.error = None;
    }

    pub fn command_line(&self) -> &CommandLine {
        &self.command_line
    }

    pub fn command_line_mut(&mut self) -> &mut CommandLine {
        &mut self.command_line
    }

    /// Whether submitted command lines are appended to history.
    pub fn records_history(&self) -> bool {
        self.record_history
    }

    pub fn set_record_history(&mut self, record: bool) {
        self.record_history = record;
    }

    pub fn status_bar(&self) -> &StatusBar {
        &self.status_bar
    }

    pub fn status_bar_mut(&mut self) -> &mut StatusBar {
        &mut self.status_bar
    }

    pub fn set_status_bar(&mut self, status_bar: StatusBar) {
        self.status_bar = status_bar;
    }

    /// Render the status bar on the last two rows of `target`.
    pub fn render_status(&self, target: &mut dyn RenderTarget) {
        let (_, height) = target.size();
        self.status_bar.render(self, target, height.saturating_sub(2));
    }
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut commands: Vec<_> = self.commands.keys().collect();
        commands.sort();
        f.debug_struct("Shell")
            .field("mode", &self.mode)
            .field("modes", &self.modes)
            .field("commands", &commands)
            .field("message", &self.message)
            .field("error", &self.error)
            .field("command_line", &self.command_line)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandErrorKind;
    use crate::mode::CustomMode;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn new_shell_registers_default_and_command_modes() {
        let shell = Shell::new(ConfigurableMode::new("normal")).unwrap();
        assert_eq!(shell.mode_name(), "normal");
        assert!(shell.mode("normal").is_some());
        match shell.mode(COMMAND_MODE_NAME) {
            Some(Mode::Command(mode)) => assert_eq!(mode.return_mode(), "normal"),
            other => panic!("unexpected command mode: {other:?}"),
        }
    }

    #[test]
    fn set_mode_rejects_unknown_name() {
        let mut shell = Shell::with_defaults();
        let err = shell.set_mode("nonexistent").unwrap_err();
        assert_eq!(err, ShellError::InvalidMode("nonexistent".to_string()));
        assert_eq!(shell.mode_name(), "normal");
    }

    #[test]
    fn default_mode_named_like_command_mode_is_rejected() {
        let err = Shell::new(ConfigurableMode::new(COMMAND_MODE_NAME)).unwrap_err();
        assert_eq!(err, ShellError::ReservedMode("command".to_string()));
        assert_eq!(err.to_string(), "reserved mode name: command");
    }

    #[test]
    fn from_config_rejects_reserved_default_mode() {
        let mut config = Config::default();
        config.shell.default_mode = COMMAND_MODE_NAME.to_string();
        assert_eq!(
            Shell::from_config(&config).unwrap_err(),
            ShellError::ReservedMode("command".to_string())
        );
    }

    #[test]
    fn add_mode_replaces_by_name() {
        let mut shell = Shell::with_defaults();
        let tab = ConfigurableMode::new("normal").with_key(Key::Tab, |s, _| s.set_message("tab"));
        shell.add_mode(tab);
        shell.handle_key(&KeyEvent::rune(':'));
        assert_eq!(shell.mode_name(), "normal");
        shell.handle_key(&KeyEvent::new(Key::Tab));
        assert_eq!(shell.message(), "tab");
    }

    #[test]
    fn registered_mode_can_be_remapped_in_place() {
        let mut shell = Shell::with_defaults();
        let normal = shell
            .mode_mut(DEFAULT_MODE_NAME)
            .and_then(Mode::as_configurable_mut)
            .expect("normal is a keymap mode");
        normal.map_key(Key::Tab, |shell, _| shell.set_message("tabbed"));

        shell.handle_key(&Key::Tab.into());
        assert_eq!(shell.message(), "tabbed");
        shell.handle_key(&KeyEvent::rune(':'));
        assert!(shell.is_command_mode());
        let command = shell.mode_mut(COMMAND_MODE_NAME);
        assert!(command.and_then(Mode::as_configurable_mut).is_none());
    }

    #[test]
    fn has_command_tracks_registration() {
        let mut shell = Shell::with_defaults();
        assert!(!shell.has_command("w"));
        shell.add_command("w", |_: &[String]| Ok(String::new()));
        assert!(shell.has_command("w"));
    }

    #[test]
    fn colon_enters_command_mode_with_defaults() {
        let mut shell = Shell::with_defaults();
        shell.handle_key(&KeyEvent::rune(':'));
        assert!(shell.is_command_mode());
        assert_eq!(shell.command_line().text(), "");
    }

    #[test]
    fn run_command_unknown_sets_error_and_clears_message() {
        let mut shell = Shell::with_defaults();
        shell.set_message("stale");
        shell.run_command("q", &[]);
        assert_eq!(shell.message(), "");
        assert_eq!(
            shell.error().map(CommandError::message),
            Some("unknown command: q")
        );
        assert_eq!(
            shell.error().and_then(CommandError::shell_error),
            Some(&ShellError::UnknownCommand("q".to_string()))
        );
    }

    #[test]
    fn handler_error_is_distinct_from_unknown_command() {
        let mut shell = Shell::with_defaults();
        let text = "unknown command: q";
        shell.add_command("w", move |_: &[String]| Err(CommandError::new(text)));
        shell.run_command("w", &[]);
        let err = shell.error().expect("handler failed");
        assert_eq!(err.message(), "unknown command: q");
        assert_eq!(err.kind(), &CommandErrorKind::Handler);
        assert!(err.shell_error().is_none());
    }

    #[test]
    fn run_command_success_clears_error() {
        let mut shell = Shell::with_defaults();
        shell.run_command("q", &[]);
        shell.add_command("q", |_: &[String]| Ok("bye".to_string()));
        shell.run_command("q", &[]);
        assert_eq!(shell.message(), "bye");
        assert!(shell.error().is_none());
    }

    #[test]
    fn run_command_failure_is_displayed_verbatim() {
        let mut shell = Shell::with_defaults();
        shell.set_message("stale");
        shell.add_command("w", |_: &[String]| Err(CommandError::new("read-only")));
        shell.run_command("w", &[]);
        assert_eq!(shell.message(), "");
        assert_eq!(shell.error().map(CommandError::message), Some("read-only"));
    }

    #[test]
    fn later_command_registration_wins() {
        let mut shell = Shell::with_defaults();
        shell.add_command("x", |_: &[String]| Ok("one".to_string()));
        shell.add_command("x", |_: &[String]| Ok("two".to_string()));
        shell.run_command("x", &[]);
        assert_eq!(shell.message(), "two");
    }

    #[test]
    fn handler_receives_arguments() {
        let mut shell = Shell::with_defaults();
        shell.add_command("sum", |args: &[String]| {
            let mut total = 0i64;
            for arg in args {
                total += arg
                    .parse::<i64>()
                    .map_err(|_| CommandError::new(format!("not a number: {arg}")))?;
            }
            Ok(total.to_string())
        });
        shell.run_command("sum", &["2".to_string(), "3".to_string()]);
        assert_eq!(shell.message(), "5");
        shell.run_command("sum", &["x".to_string()]);
        assert_eq!(
            shell.error().map(CommandError::message),
            Some("not a number: x")
        );
    }

    struct Recorder {
        seen: Rc<RefCell<Vec<KeyEvent>>>,
    }

    impl CustomMode for Recorder {
        fn name(&self) -> &str {
            "record"
        }

        fn handle_key(&self, shell: &mut Shell, event: &KeyEvent) {
            self.seen.borrow_mut().push(*event);
            if event.is_cancel() {
                let _ = shell.set_mode("normal");
            }
        }
    }

    #[test]
    fn custom_modes_receive_every_key() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut shell = Shell::with_defaults();
        shell.add_mode(Mode::custom(Recorder {
            seen: Rc::clone(&seen),
        }));
        shell.set_mode("record").expect("registered");
        shell.handle_key(&KeyEvent::rune('a'));
        shell.handle_key(&KeyEvent::new(Key::Escape));
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(shell.mode_name(), "normal");
    }

    #[test]
    fn from_config_applies_shell_and_history_settings() {
        let mut config = Config::default();
        config.shell.default_mode = "browse".to_string();
        config.shell.command_prefix = "> ".to_string();
        config.shell.greeting = Some("hello".to_string());
        config.history.record = true;
        config.history.max_entries = 1;

        let mut shell = Shell::from_config(&config).unwrap();
        assert_eq!(shell.mode_name(), "browse");
        assert_eq!(shell.status_bar().command_prefix(), "> ");
        assert_eq!(shell.message(), "hello");

        for ch in ['a', 'b'] {
            shell.handle_key(&KeyEvent::rune(':'));
            shell.handle_key(&KeyEvent::rune(ch));
            shell.handle_key(&KeyEvent::new(Key::Enter));
        }
        assert_eq!(shell.command_line().history(), &["b".to_string()]);
        assert_eq!(shell.mode_name(), "browse");
    }
}
