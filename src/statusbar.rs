//! Declarative status-bar composition.
//!
//! A status bar is two rows: a summary row built from left and right section
//! functions, and a message row that shows the live command buffer, the last
//! error, or the last message. Sections are re-evaluated on every render and
//! must not have side effects.

use crate::render::{fill, to_cols, visible_width, write_str, RenderTarget};
use crate::settings::{self, BLANK_GLYPH, COMMAND_PREFIX};
use crate::shell::Shell;
use crossterm::style::ContentStyle;

/// Produces one status-bar section from shell state, target size, and the
/// bar's base style.
pub type SectionFn = Box<dyn Fn(&Shell, (u16, u16), ContentStyle) -> (String, ContentStyle)>;

/// Derives a style from the bar's base style.
pub type StyleFn = Box<dyn Fn(ContentStyle) -> ContentStyle>;

pub struct StatusBar {
    left: Vec<SectionFn>,
    right: Vec<SectionFn>,
    style: ContentStyle,
    command_prefix: String,
    error_style: StyleFn,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    /// An empty bar with no sections, no prefix, and errors in the base style.
    pub fn new() -> Self {
        Self {
            left: Vec::new(),
            right: Vec::new(),
            style: ContentStyle::new(),
            command_prefix: String::new(),
            error_style: Box::new(|style: ContentStyle| style),
        }
    }

    /// Vim-like bar: `:` prefix, bold red errors, and a mode badge on the left.
    pub fn vim_default() -> Self {
        let mut bar = Self::new();
        bar.set_command_prefix(COMMAND_PREFIX);
        bar.set_error_style(settings::error_style);
        bar.add_left_section(mode_section());
        bar
    }

    pub fn add_left_section(&mut self, section: SectionFn) {
        self.left.push(section);
    }

    pub fn add_right_section(&mut self, section: SectionFn) {
        self.right.push(section);
    }

    /// Prefix drawn before the command buffer; usually the key that enters
    /// command mode.
    pub fn set_command_prefix(&mut self, prefix: impl Into<String>) {
        self.command_prefix = prefix.into();
    }

    pub fn command_prefix(&self) -> &str {
        &self.command_prefix
    }

    pub fn set_error_style<F>(&mut self, style_fn: F)
    where
        F: Fn(ContentStyle) -> ContentStyle + 'static,
    {
        self.error_style = Box::new(style_fn);
    }

    /// Base style for blank cells, messages, and the command buffer.
    pub fn set_style(&mut self, style: ContentStyle) {
        self.style = style;
    }

    pub fn style(&self) -> ContentStyle {
        self.style
    }

    /// Render the summary row at `y` and the message row at `y + 1`.
    pub fn render(&self, shell: &Shell, target: &mut dyn RenderTarget, y: u16) {
        self.render_bar(shell, target, y);
        self.render_message_line(shell, target, y.saturating_add(1));
    }

    /// Render only the summary row.
    ///
    /// Left sections grow rightward from column 0, right sections grow
    /// leftward from the right edge, and the gap between them is blanked.
    /// Right sections never overwrite what the left sections drew.
    pub fn render_bar(&self, shell: &Shell, target: &mut dyn RenderTarget, y: u16) {
        let size = target.size();
        let (width, height) = size;
        if y >= height {
            return;
        }

        let mut xl = 0u16;
        for section in &self.left {
            let (text, style) = section(shell, size, self.style);
            xl += write_str(target, xl, y, &text, style, width);
        }

        let mut xr = width;
        for section in &self.right {
            let (text, style) = section(shell, size, self.style);
            let start = xr.saturating_sub(to_cols(visible_width(&text))).max(xl);
            write_str(target, start, y, &text, style, xr);
            xr = start;
        }

        fill(target, xl, xr, y, BLANK_GLYPH, self.style);
    }

    /// Render only the message row.
    ///
    /// In command mode this shows the prefix and buffer and places the
    /// cursor; otherwise it shows the error or message and hides the cursor.
    /// The rest of the row is blanked so shorter text erases longer text.
    pub fn render_message_line(&self, shell: &Shell, target: &mut dyn RenderTarget, y: u16) {
        let (width, height) = target.size();
        if y >= height {
            return;
        }

        let written = if shell.is_command_mode() {
            let line = shell.command_line();
            let text = format!("{}{}", self.command_prefix, line.text());
            let written = write_str(target, 0, y, &text, self.style, width);
            let cursor_x = to_cols(visible_width(&self.command_prefix) + line.cursor());
            target.show_cursor(cursor_x.min(width.saturating_sub(1)), y);
            written
        } else if let Some(err) = shell.error() {
            let style = (self.error_style)(self.style);
            target.hide_cursor();
            write_str(target, 0, y, err.message(), style, width)
        } else {
            target.hide_cursor();
            write_str(target, 0, y, shell.message(), self.style, width)
        };

        fill(target, written, width, y, BLANK_GLYPH, self.style);
    }
}

/// Section showing the active mode name in uppercase, padded by one space,
/// styled by the mode's badge style.
pub fn mode_section() -> SectionFn {
    Box::new(|shell: &Shell, _size: (u16, u16), style: ContentStyle| {
        let text = format!(" {} ", shell.mode_name().to_uppercase());
        (text, shell.current_mode().status_style(style))
    })
}

/// Section with fixed text in the bar's base style.
pub fn text_section(text: impl Into<String>) -> SectionFn {
    let text = text.into();
    Box::new(move |_: &Shell, _: (u16, u16), style: ContentStyle| (text.clone(), style))
}
