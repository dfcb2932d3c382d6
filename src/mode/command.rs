//! Built-in command mode.
//!
//! Command mode holds no buffer of its own: it edits the shell's
//! [`CommandLine`](crate::cmdline::CommandLine) for the duration of each key
//! press. Leaving the mode always resets that buffer.

use crate::key::{Key, KeyEvent};
use crate::settings::{self, COMMAND_MODE_NAME};
use crate::shell::Shell;
use crossterm::style::ContentStyle;
use tracing::{debug, warn};

/// Mode that turns typed text into a dispatched command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMode {
    return_mode: String,
}

impl CommandMode {
    /// Create a command mode that hands control back to `return_mode`.
    pub fn new(return_mode: impl Into<String>) -> Self {
        Self {
            return_mode: return_mode.into(),
        }
    }

    pub fn name(&self) -> &str {
        COMMAND_MODE_NAME
    }

    /// Mode activated after a submit or cancel.
    pub fn return_mode(&self) -> &str {
        &self.return_mode
    }

    pub fn status_style(&self, base: ContentStyle) -> ContentStyle {
        settings::command_badge_style(base)
    }

    pub fn handle_key(&self, shell: &mut Shell, event: &KeyEvent) {
        match event.key() {
            Key::Rune => {
                if let Some(ch) = event.char() {
                    shell.command_line_mut().insert(ch);
                }
            }
            Key::Escape | Key::Ctrl('c') => self.leave(shell),
            Key::Ctrl('w') => shell.command_line_mut().delete_word(),
            Key::Backspace => {
                let line = shell.command_line_mut();
                line.backspace();
                if line.is_empty() {
                    self.leave(shell);
                }
            }
            Key::Enter => self.submit(shell),
            Key::Up => shell.command_line_mut().history_older(),
            Key::Down => shell.command_line_mut().history_newer(),
            Key::Left => shell.command_line_mut().cursor_left(),
            Key::Right => shell.command_line_mut().cursor_right(),
            _ => {}
        }
    }

    fn submit(&self, shell: &mut Shell) {
        let Some((name, args)) = shell.command_line().parse() else {
            return;
        };
        if shell.records_history() {
            let entry = shell.command_line().text().to_string();
            shell.command_line_mut().push_history(&entry);
        }
        shell.run_command(&name, &args);
        self.leave(shell);
    }

    fn leave(&self, shell: &mut Shell) {
        shell.command_line_mut().reset();
        match shell.set_mode(&self.return_mode) {
            Ok(()) => debug!(mode = %self.return_mode, "left command mode"),
            Err(err) => warn!(%err, "command mode could not return"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShellError;
    use crate::mode::ConfigurableMode;

    fn shell_in_command_mode() -> Shell {
        let mut shell = Shell::new(ConfigurableMode::new("normal")).unwrap();
        shell
            .set_mode(COMMAND_MODE_NAME)
            .expect("command mode registered");
        shell
    }

    fn type_text(shell: &mut Shell, text: &str) {
        for ch in text.chars() {
            shell.handle_key(&KeyEvent::rune(ch));
        }
    }

    #[test]
    fn typing_fills_buffer() {
        let mut shell = shell_in_command_mode();
        type_text(&mut shell, "echo hi");
        assert_eq!(shell.command_line().text(), "echo hi");
        assert_eq!(shell.command_line().cursor(), 7);
        assert_eq!(shell.mode_name(), COMMAND_MODE_NAME);
    }

    #[test]
    fn backspace_on_empty_buffer_returns_to_previous_mode() {
        let mut shell = shell_in_command_mode();
        shell.handle_key(&KeyEvent::new(Key::Backspace));
        assert_eq!(shell.mode_name(), "normal");
    }

    #[test]
    fn backspace_emptying_buffer_returns_to_previous_mode() {
        let mut shell = shell_in_command_mode();
        type_text(&mut shell, "ab");
        shell.handle_key(&KeyEvent::new(Key::Backspace));
        assert_eq!(shell.mode_name(), COMMAND_MODE_NAME);
        shell.handle_key(&KeyEvent::new(Key::Backspace));
        assert_eq!(shell.mode_name(), "normal");
    }

    #[test]
    fn backspace_at_start_of_non_empty_buffer_stays() {
        let mut shell = shell_in_command_mode();
        type_text(&mut shell, "a");
        shell.handle_key(&KeyEvent::new(Key::Left));
        shell.handle_key(&KeyEvent::new(Key::Backspace));
        assert_eq!(shell.command_line().text(), "a");
        assert_eq!(shell.mode_name(), COMMAND_MODE_NAME);
    }

    #[test]
    fn enter_on_empty_buffer_is_noop() {
        let mut shell = shell_in_command_mode();
        shell.handle_key(&KeyEvent::new(Key::Enter));
        assert_eq!(shell.mode_name(), COMMAND_MODE_NAME);
        assert!(shell.error().is_none());
    }

    #[test]
    fn enter_dispatches_and_returns() {
        let mut shell = shell_in_command_mode();
        shell.add_command("echo", |args: &[String]| Ok(args.join(",")));
        type_text(&mut shell, "echo a  b");
        shell.handle_key(&KeyEvent::new(Key::Enter));
        assert_eq!(shell.message(), "a,,b");
        assert_eq!(shell.mode_name(), "normal");
        assert_eq!(shell.command_line().text(), "");
        assert_eq!(shell.command_line().cursor(), 0);
    }

    #[test]
    fn submitting_unknown_command_sets_error() {
        let mut shell = shell_in_command_mode();
        type_text(&mut shell, "q");
        shell.handle_key(&KeyEvent::new(Key::Enter));
        let err = shell.error().expect("dispatch failed");
        assert_eq!(err.message(), "unknown command: q");
        assert_eq!(
            err.shell_error(),
            Some(&ShellError::UnknownCommand("q".to_string()))
        );
        assert_eq!(shell.message(), "");
        assert_eq!(shell.mode_name(), "normal");
    }

    #[test]
    fn cancel_resets_without_dispatch() {
        for cancel in [KeyEvent::new(Key::Escape), KeyEvent::ctrl('c')] {
            let mut shell = shell_in_command_mode();
            shell.add_command("q", |_: &[String]| Ok("ran".to_string()));
            type_text(&mut shell, "q");
            shell.handle_key(&cancel);
            assert_eq!(shell.mode_name(), "normal");
            assert_eq!(shell.command_line().text(), "");
            assert_eq!(shell.message(), "");
        }
    }

    #[test]
    fn ctrl_w_deletes_previous_word() {
        let mut shell = shell_in_command_mode();
        type_text(&mut shell, "foo bar ");
        shell.handle_key(&KeyEvent::ctrl('w'));
        assert_eq!(shell.command_line().text(), "foo ");
        assert_eq!(shell.mode_name(), COMMAND_MODE_NAME);
    }

    #[test]
    fn arrows_move_cursor_and_browse_history() {
        let mut shell = shell_in_command_mode();
        shell.command_line_mut().push_history("add 1");
        shell.command_line_mut().push_history("add 2");
        shell.command_line_mut().reset();

        shell.handle_key(&KeyEvent::new(Key::Up));
        assert_eq!(shell.command_line().text(), "add 2");
        shell.handle_key(&KeyEvent::new(Key::Left));
        assert_eq!(shell.command_line().cursor(), 4);
        shell.handle_key(&KeyEvent::new(Key::Right));
        assert_eq!(shell.command_line().cursor(), 5);
        shell.handle_key(&KeyEvent::new(Key::Down));
        assert_eq!(shell.command_line().text(), "");
    }

    #[test]
    fn submit_records_history_when_enabled() {
        let mut shell = shell_in_command_mode();
        shell.set_record_history(true);
        shell.add_command("w", |_: &[String]| Ok(String::new()));
        type_text(&mut shell, "w");
        shell.handle_key(&KeyEvent::new(Key::Enter));
        assert_eq!(shell.command_line().history(), &["w".to_string()]);
        assert_eq!(shell.command_line().history_index(), 1);
    }

    #[test]
    fn submit_leaves_history_alone_by_default() {
        let mut shell = shell_in_command_mode();
        type_text(&mut shell, "w");
        shell.handle_key(&KeyEvent::new(Key::Enter));
        assert!(shell.command_line().history().is_empty());
    }

    #[test]
    fn missing_return_mode_keeps_command_mode_active() {
        let mut shell = Shell::new(ConfigurableMode::new("normal")).unwrap();
        shell.add_mode(CommandMode::new("gone"));
        shell
            .set_mode(COMMAND_MODE_NAME)
            .expect("command mode registered");
        type_text(&mut shell, "x");
        shell.handle_key(&KeyEvent::new(Key::Escape));
        assert_eq!(shell.mode_name(), COMMAND_MODE_NAME);
        assert_eq!(shell.command_line().text(), "");
    }
}
