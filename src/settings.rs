//! Centralized, hardcoded names and styles for the shell chrome.
//!
//! This is the single place to tweak mode names, the command prefix, and the
//! colors of mode badges and error text.

use crossterm::style::{Color, ContentStyle, Stylize};

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

/// Registry name of the built-in command mode.
pub const COMMAND_MODE_NAME: &str = "command";
/// Name of the configurable mode created by the vim-like defaults.
pub const DEFAULT_MODE_NAME: &str = "normal";
/// Prefix shown before the command buffer.
pub const COMMAND_PREFIX: &str = ":";
/// Character that switches the default mode into command mode.
pub const COMMAND_TRIGGER: char = ':';

/// Glyph used to blank unused status-bar cells.
pub const BLANK_GLYPH: char = ' ';

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_BADGE_TEXT: Color = Color::Black;
pub const COLOR_BADGE_CONFIGURABLE: Color = Color::Green;
pub const COLOR_BADGE_COMMAND: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;

// ---------------------------------------------------------------------------
// Style helpers
// ---------------------------------------------------------------------------

pub fn configurable_badge_style(base: ContentStyle) -> ContentStyle {
    base.with(COLOR_BADGE_TEXT)
        .on(COLOR_BADGE_CONFIGURABLE)
        .bold()
}

pub fn command_badge_style(base: ContentStyle) -> ContentStyle {
    base.with(COLOR_BADGE_TEXT).on(COLOR_BADGE_COMMAND).bold()
}

pub fn error_style(base: ContentStyle) -> ContentStyle {
    base.with(COLOR_ERROR).bold()
}
