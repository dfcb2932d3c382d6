//! Crossterm-backed render target.

use crate::render::RenderTarget;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{ContentStyle, PrintStyledContent};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, Write};

/// Queues styled cells on a writer and flushes them once per frame.
///
/// Write failures inside [`RenderTarget`] calls are held back and reported
/// by the next [`present`](Self::present).
pub struct CrosstermTarget<W: Write> {
    out: W,
    size: (u16, u16),
    cursor: Option<(u16, u16)>,
    error: Option<io::Error>,
}

impl<W: Write> CrosstermTarget<W> {
    /// Target sized to the current terminal.
    pub fn new(out: W) -> io::Result<Self> {
        Ok(Self::with_size(out, terminal::size()?))
    }

    pub fn with_size(out: W, size: (u16, u16)) -> Self {
        Self {
            out,
            size,
            cursor: None,
            error: None,
        }
    }

    /// Start a new frame: adopt `size`, forget the cursor, clear the screen.
    pub fn begin_frame(&mut self, size: (u16, u16)) {
        self.size = size;
        self.cursor = None;
        let result = self.out.queue(Clear(ClearType::All)).map(|_| ());
        self.hold(result);
    }

    /// Place or hide the cursor and flush the frame.
    pub fn present(&mut self) -> io::Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        match self.cursor {
            Some((x, y)) => self.out.queue(MoveTo(x, y))?.queue(Show)?,
            None => self.out.queue(Hide)?,
        };
        self.out.flush()
    }

    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn hold(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }
}

impl<W: Write> RenderTarget for CrosstermTarget<W> {
    fn set_cell(&mut self, x: u16, y: u16, glyph: char, style: ContentStyle) {
        let (width, height) = self.size;
        if x >= width || y >= height {
            return;
        }
        let result = self
            .out
            .queue(MoveTo(x, y))
            .and_then(|out| out.queue(PrintStyledContent(style.apply(glyph))))
            .map(|_| ());
        self.hold(result);
    }

    fn size(&self) -> (u16, u16) {
        self.size
    }

    fn show_cursor(&mut self, x: u16, y: u16) {
        self.cursor = Some((x, y));
    }

    fn hide_cursor(&mut self) {
        self.cursor = None;
    }
}
