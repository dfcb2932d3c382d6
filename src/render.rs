//! Rendering capability consumed by the status bar.
//!
//! The core never talks to a terminal directly. Hosts hand it something that
//! can paint styled cells, report its size, and place the cursor.

use crossterm::style::ContentStyle;

/// A cell grid the status bar paints into.
pub trait RenderTarget {
    /// Paint one glyph at column `x`, row `y`.
    fn set_cell(&mut self, x: u16, y: u16, glyph: char, style: ContentStyle);

    /// `(width, height)` in cells.
    fn size(&self) -> (u16, u16);

    fn show_cursor(&mut self, x: u16, y: u16);

    fn hide_cursor(&mut self);
}

/// Write `text` starting at `x`, stopping before column `limit`.
///
/// Returns the number of cells written.
pub fn write_str(
    target: &mut dyn RenderTarget,
    x: u16,
    y: u16,
    text: &str,
    style: ContentStyle,
    limit: u16,
) -> u16 {
    let mut col = x;
    for ch in text.chars() {
        if col >= limit {
            break;
        }
        target.set_cell(col, y, ch, style);
        col += 1;
    }
    col - x
}

/// Paint `glyph` over columns `[from, to)` of row `y`.
pub fn fill(
    target: &mut dyn RenderTarget,
    from: u16,
    to: u16,
    y: u16,
    glyph: char,
    style: ContentStyle,
) {
    for x in from..to {
        target.set_cell(x, y, glyph, style);
    }
}

/// Count visible character width (single-cell approximation).
pub fn visible_width(s: &str) -> usize {
    s.chars().count()
}

/// Saturating conversion of a width into a column count.
pub(crate) fn to_cols(width: usize) -> u16 {
    u16::try_from(width).unwrap_or(u16::MAX)
}
