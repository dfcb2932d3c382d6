//! Terminal host built on crossterm.
//!
//! The shell core only knows [`RenderTarget`]; this module supplies a real
//! terminal behind it and the blocking event loop that feeds it keys.

mod input;
mod target;

pub use input::{translate_key, TerminalGuard};
pub use target::CrosstermTarget;

use crate::render::RenderTarget;
use crate::shell::Shell;
use crossterm::event::{self, Event};
use crossterm::terminal;
use std::io::{self, Write};
use tracing::trace;

/// Drive `shell` until `quit` reports true.
///
/// Each iteration clears the frame, calls `draw` for the host's own content,
/// renders the status bar on the last two rows, flushes, and then blocks on
/// the next terminal event. Resizes only trigger a redraw.
pub fn run<W, D, Q>(
    shell: &mut Shell,
    target: &mut CrosstermTarget<W>,
    draw: D,
    quit: Q,
) -> io::Result<()>
where
    W: Write,
    D: FnMut(&Shell, &mut dyn RenderTarget),
    Q: Fn(&Shell) -> bool,
{
    drive(shell, target, draw, quit, event::read, terminal::size)
}

fn drive<W, D, Q, E, S>(
    shell: &mut Shell,
    target: &mut CrosstermTarget<W>,
    mut draw: D,
    quit: Q,
    mut next_event: E,
    mut size: S,
) -> io::Result<()>
where
    W: Write,
    D: FnMut(&Shell, &mut dyn RenderTarget),
    Q: Fn(&Shell) -> bool,
    E: FnMut() -> io::Result<Event>,
    S: FnMut() -> io::Result<(u16, u16)>,
{
    while !quit(&*shell) {
        target.begin_frame(size()?);
        let frame: &mut dyn RenderTarget = &mut *target;
        draw(&*shell, &mut *frame);
        shell.render_status(&mut *frame);
        target.present()?;

        match next_event()? {
            Event::Key(key) => {
                if let Some(event) = translate_key(&key) {
                    shell.handle_key(&event);
                }
            }
            Event::Resize(width, height) => trace!(width, height, "terminal resized"),
            _ => {}
        }
    }
    Ok(())
}
