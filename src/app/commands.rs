//! Commands bundled with the demo binary.

use std::cell::Cell;
use std::rc::Rc;
use vimshell::Shell;

const QUIT_COMMANDS: [&str; 2] = ["q", "quit"];

/// Register `q`/`quit`, `echo`, and `help` on `shell`.
///
/// Quitting only raises `quit`; the event loop checks it after each key.
pub(crate) fn register(shell: &mut Shell, quit: Rc<Cell<bool>>) {
    for name in QUIT_COMMANDS {
        let flag = Rc::clone(&quit);
        shell.add_command(name, move |_: &[String]| {
            flag.set(true);
            Ok(String::new())
        });
    }
    shell.add_command("echo", |args: &[String]| Ok(args.join(" ")));
    shell.add_command("help", |_: &[String]| Ok(help_text()));
}

fn help_text() -> String {
    format!("commands: echo <text>, help, {}", QUIT_COMMANDS.join(", "))
}
