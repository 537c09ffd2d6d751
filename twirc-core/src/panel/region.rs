//! History/pending-input bookkeeping for the access panel

use super::error::PanelError;
use super::lines::{LineIndex, LineStart};
use super::normalize::{LineEnding, normalize_message};
use tracing::trace;

/// A single text buffer split into read-only history and editable input.
///
/// `[0, editing_pos)` is history, `[editing_pos, len)` is the pending input.
/// The caret may sit anywhere in `[0, len]`. All offsets count chars.
#[derive(Debug, Clone, Default)]
pub struct TextRegion {
    text: String,
    len: usize,
    editing_pos: usize,
    caret: usize,
    line_ending: LineEnding,
    lines: LineIndex,
}

impl TextRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Whole buffer, history followed by pending input
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Buffer length in chars
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn editing_pos(&self) -> usize {
        self.editing_pos
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn history(&self) -> &str {
        &self.text[..self.byte_offset(self.editing_pos)]
    }

    /// The text being edited, from the editing position to the end
    pub fn pending_input(&self) -> &str {
        &self.text[self.byte_offset(self.editing_pos)..]
    }

    /// Number of display lines; a trailing terminator opens an empty last line
    pub fn line_count(&self) -> usize {
        self.lines.count()
    }

    /// Text of line `line` without its terminator, or `None` past the end
    pub fn line(&self, line: usize) -> Option<&str> {
        if line >= self.lines.count() {
            return None;
        }
        let start = self.lines.start(line).byte;
        let end = self
            .lines
            .next_start(line)
            .map_or(self.text.len(), |next| next.byte - 1);
        let text = &self.text[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    /// Append a message to history, keeping the pending input after it.
    ///
    /// The caret keeps pointing at the same pending-input character when it
    /// was at or after the editing position; a caret inside history is left
    /// where it was. Returns the normalized length that was inserted.
    pub fn append_message(&mut self, message: &str) -> usize {
        let normalized = normalize_message(message, self.line_ending);
        let added = normalized.chars().count();
        let at = self.position(self.editing_pos);
        self.text.insert_str(at.byte, &normalized);
        self.lines.inserted(at, &normalized);

        if self.caret >= self.editing_pos {
            self.caret += added;
        }
        self.editing_pos += added;
        self.len += added;
        trace!(added, editing_pos = self.editing_pos, "Appended message to history");
        added
    }

    /// Whether `pos` lies in the history region.
    ///
    /// With `beyond_one`, the position is moved back one char first, so a
    /// caret sitting exactly on the editing position also reports history.
    pub fn is_editing_at(&self, pos: usize, beyond_one: bool) -> Result<bool, PanelError> {
        self.check_offset(pos)?;
        let pos = if beyond_one { pos.checked_sub(1) } else { Some(pos) };
        Ok(pos.is_none_or(|pos| pos < self.editing_pos))
    }

    /// Whether the caret is currently in history
    pub fn caret_in_history(&self) -> bool {
        self.caret < self.editing_pos
    }

    /// Remove the pending input and return it
    pub fn submit_and_clear(&mut self) -> String {
        let at = self.byte_offset(self.editing_pos);
        let submitted = self.text.split_off(at);
        self.len = self.editing_pos;
        self.lines.truncate(self.len);
        self.caret = self.caret.min(self.len);
        trace!(chars = submitted.chars().count(), "Submitted pending input");
        submitted
    }

    pub fn set_caret(&mut self, pos: usize) -> Result<(), PanelError> {
        self.check_offset(pos)?;
        self.caret = pos;
        Ok(())
    }

    pub fn move_left(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.caret -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.caret >= self.len {
            return false;
        }
        self.caret += 1;
        true
    }

    /// Move the caret to the start of the buffer
    pub fn move_to_start(&mut self) {
        self.caret = 0;
    }

    /// Move the caret to the end of the buffer
    pub fn move_to_end(&mut self) {
        self.caret = self.len;
    }

    /// Move the caret to the start of its line
    pub fn move_home(&mut self) {
        self.caret = self.lines.start(self.lines.line_of(self.caret)).char;
    }

    /// Move the caret to the end of its line
    pub fn move_end(&mut self) {
        self.caret = self.line_end(self.lines.line_of(self.caret));
    }

    /// Move the caret one line up, keeping the column where possible
    pub fn move_up(&mut self) -> bool {
        let line = self.lines.line_of(self.caret);
        if line == 0 {
            return false;
        }
        self.move_to_line(line, line - 1);
        true
    }

    /// Move the caret one line down, keeping the column where possible
    pub fn move_down(&mut self) -> bool {
        let line = self.lines.line_of(self.caret);
        if line + 1 >= self.lines.count() {
            return false;
        }
        self.move_to_line(line, line + 1);
        true
    }

    /// Insert a char at the caret. Refused inside history.
    pub fn insert_char(&mut self, c: char) -> bool {
        if self.caret_in_history() {
            return false;
        }
        let at = self.position(self.caret);
        self.text.insert(at.byte, c);
        self.lines.inserted(at, c.encode_utf8(&mut [0; 4]));
        self.caret += 1;
        self.len += 1;
        true
    }

    /// Delete the char before the caret. Refused when it belongs to history.
    pub fn delete_backward(&mut self) -> bool {
        if self.caret == 0 || self.caret - 1 < self.editing_pos {
            return false;
        }
        let at = self.position(self.caret - 1);
        let removed = self.text.remove(at.byte);
        self.lines.removed(at, removed);
        self.caret -= 1;
        self.len -= 1;
        true
    }

    /// Delete the char under the caret. Refused inside history.
    pub fn delete_forward(&mut self) -> bool {
        if self.caret_in_history() || self.caret >= self.len {
            return false;
        }
        let at = self.position(self.caret);
        let removed = self.text.remove(at.byte);
        self.lines.removed(at, removed);
        self.len -= 1;
        true
    }

    /// Line and column of the caret, counted in chars
    pub fn caret_line_column(&self) -> (usize, usize) {
        let line = self.lines.line_of(self.caret);
        (line, self.caret - self.lines.start(line).char)
    }

    fn check_offset(&self, offset: usize) -> Result<(), PanelError> {
        if offset > self.len {
            return Err(PanelError::OffsetOutOfRange {
                offset,
                len: self.len,
            });
        }
        Ok(())
    }

    fn move_to_line(&mut self, from: usize, to: usize) {
        let column = self.caret - self.lines.start(from).char;
        self.caret = (self.lines.start(to).char + column).min(self.line_end(to));
    }

    // Stops before a `\r` that is part of a `\r\n` terminator.
    fn line_end(&self, line: usize) -> usize {
        let Some(next) = self.lines.next_start(line) else {
            return self.len;
        };
        let newline = next.char - 1;
        let crlf = newline > self.lines.start(line).char
            && self.text.as_bytes()[next.byte - 2] == b'\r';
        if crlf { newline - 1 } else { newline }
    }

    /// Char and byte offset of `pos`, scanning from the start of its line
    fn position(&self, pos: usize) -> LineStart {
        let start = self.lines.start(self.lines.line_of(pos));
        let byte = self.text[start.byte..]
            .char_indices()
            .nth(pos - start.char)
            .map_or(self.text.len(), |(index, _)| start.byte + index);
        LineStart { char: pos, byte }
    }

    fn byte_offset(&self, pos: usize) -> usize {
        self.position(pos).byte
    }
}
