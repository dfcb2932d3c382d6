//! vimshell: a modal, vim-like input shell for terminal programs.
//!
//! A [`Shell`] owns a set of named modes and a table of named commands. Key
//! events go to the active mode; the built-in command mode collects a line of
//! text, parses it, and dispatches the matching command. A two-row
//! [`StatusBar`] shows the mode, the command buffer, and the last outcome.
//!
//! # Quick start
//!
//! ```no_run
//! use vimshell::{KeyEvent, Shell};
//!
//! let mut shell = Shell::with_defaults();
//! shell.add_command("greet", |args: &[String]| Ok(format!("hello {}", args.join(" "))));
//! for ch in ":greet you".chars() {
//!     shell.handle_key(&KeyEvent::rune(ch));
//! }
//! shell.handle_key(&KeyEvent::new(vimshell::Key::Enter));
//! assert_eq!(shell.message(), "hello you");
//! ```

pub mod cmdline;
pub mod config;
pub mod error;
pub mod host;
pub mod key;
pub mod mode;
pub mod render;
pub mod settings;
pub mod shell;
pub mod statusbar;

pub use cmdline::CommandLine;
pub use error::{CommandError, CommandErrorKind, ConfigError, ShellError};
pub use key::{Key, KeyEvent};
pub use mode::{CommandMode, ConfigurableMode, CustomMode, Mode};
pub use render::RenderTarget;
pub use shell::Shell;
pub use statusbar::StatusBar;
