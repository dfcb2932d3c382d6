//! Editable command-line buffer and prefix-searchable history.
//!
//! The buffer is indexed by byte offset. Only ASCII input is accepted by
//! [`CommandLine::insert`], which keeps byte offsets and screen columns equal
//! and makes every cursor position a valid `str` boundary.

use tracing::trace;

/// Default cap applied by [`CommandLine::push_history`].
pub const DEFAULT_MAX_HISTORY: usize = 1000;

/// Single-line editor state plus command history.
#[derive(Debug, Clone)]
pub struct CommandLine {
    text: String,
    cursor: usize,
    history: Vec<String>,
    history_index: usize,
    search_prefix: String,
    max_history: usize,
}

impl Default for CommandLine {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLine {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_index: 0,
            search_prefix: String::new(),
            max_history: DEFAULT_MAX_HISTORY,
        }
    }

    /// Current buffer contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a byte offset into [`text`](Self::text).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Past submitted lines, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Index of the history entry being browsed; `history().len()` when idle.
    pub fn history_index(&self) -> usize {
        self.history_index
    }

    /// Prefix that history browsing filters on.
    pub fn search_prefix(&self) -> &str {
        &self.search_prefix
    }

    /// Cap the number of retained history entries (minimum one).
    pub fn set_max_history(&mut self, max: usize) {
        self.max_history = max.max(1);
        self.trim_history();
    }

    /// Append a submitted line to history.
    ///
    /// Blank lines and repeats of the newest entry are skipped. Oldest entries
    /// are dropped past the cap.
    pub fn push_history(&mut self, entry: &str) {
        if entry.trim().is_empty() {
            return;
        }
        if self.history.last().map(String::as_str) == Some(entry) {
            return;
        }
        let idle = self.history_index == self.history.len();
        self.history.push(entry.to_string());
        self.trim_history();
        if idle {
            self.history_index = self.history.len();
        }
    }

    /// Drop the oldest entries past the cap. A browse keeps pointing at the
    /// same entry, or ends if that entry was dropped.
    fn trim_history(&mut self) {
        if self.history.len() > self.max_history {
            let overflow = self.history.len() - self.max_history;
            self.history.drain(0..overflow);
            self.history_index = self
                .history_index
                .checked_sub(overflow)
                .unwrap_or(self.history.len());
        }
        self.history_index = self.history_index.min(self.history.len());
    }

    /// Insert one character at the cursor and advance past it.
    ///
    /// Non-ASCII and control characters are refused; returns whether the text
    /// changed.
    pub fn insert(&mut self, ch: char) -> bool {
        if !ch.is_ascii() || ch.is_ascii_control() {
            trace!(?ch, "refusing non-ascii input");
            return false;
        }
        self.text.insert(self.cursor, ch);
        self.cursor += 1;
        self.end_browse();
        true
    }

    /// Delete the byte immediately before the cursor. No-op at position 0.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.text.remove(self.cursor - 1);
        self.cursor -= 1;
        self.end_browse();
    }

    /// Delete backward from the cursor over trailing spaces and then one word.
    ///
    /// Only `' '` separates words. When the scan reaches the first byte of the
    /// buffer (or runs past it) the entire buffer is cleared, including any
    /// text after the cursor.
    pub fn delete_word(&mut self) {
        let bytes = self.text.as_bytes();
        let mut i = self.cursor as isize - 1;
        while i >= 0 && bytes[i as usize] == b' ' {
            i -= 1;
        }
        while i >= 0 && bytes[i as usize] != b' ' {
            i -= 1;
        }

        if i <= 0 {
            self.text.clear();
            self.cursor = 0;
        } else {
            let keep = i as usize + 1;
            self.text.replace_range(keep..self.cursor, "");
            self.cursor = keep;
        }
        self.end_browse();
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.len());
    }

    /// Replace the older-matching history entry into the buffer.
    ///
    /// Scans backward from just before the current browse position for an
    /// entry starting with the search prefix. Nothing changes when no entry
    /// matches.
    pub fn history_older(&mut self) {
        let found = (0..self.history_index)
            .rev()
            .find(|&i| self.history[i].starts_with(self.search_prefix.as_str()));
        if let Some(idx) = found {
            self.history_index = idx;
            self.text = self.history[idx].clone();
            self.cursor = self.text.len();
        }
    }

    /// Move to the next newer matching entry, or back to the typed prefix.
    pub fn history_newer(&mut self) {
        let found = (self.history_index + 1..self.history.len())
            .find(|&i| self.history[i].starts_with(self.search_prefix.as_str()));
        match found {
            Some(idx) => {
                self.history_index = idx;
                self.text = self.history[idx].clone();
            }
            None => {
                self.text = self.search_prefix.clone();
                self.history_index = self.history.len();
            }
        }
        self.cursor = self.text.len();
    }

    /// Split the buffer into a command name and its arguments.
    ///
    /// Returns `None` for an empty buffer. See [`parse_command_line`].
    pub fn parse(&self) -> Option<(String, Vec<String>)> {
        parse_command_line(&self.text)
    }

    /// Clear the buffer and leave any history browse.
    pub fn reset(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.search_prefix.clear();
        self.history_index = self.history.len();
    }

    /// Editing ends a history browse and re-anchors the search prefix.
    fn end_browse(&mut self) {
        self.search_prefix.clone_from(&self.text);
        self.history_index = self.history.len();
    }
}

/// Split a command line on its first space into name and arguments.
///
/// The remainder is split on every single space, so consecutive spaces yield
/// empty-string arguments and a trailing space yields one empty argument.
pub fn parse_command_line(line: &str) -> Option<(String, Vec<String>)> {
    if line.is_empty() {
        return None;
    }
    let (name, args) = match line.split_once(' ') {
        Some((name, rest)) => (name, rest.split(' ').map(str::to_string).collect()),
        None => (line, Vec::new()),
    };
    Some((name.to_string(), args))
}
