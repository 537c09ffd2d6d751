//! Line-start index kept alongside the panel buffer

/// Where a line begins, in chars and in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LineStart {
    pub char: usize,
    pub byte: usize,
}

/// Sorted starts of every line; the first line always starts at zero.
///
/// A buffer ending in `\n` has an empty last line starting at its end.
#[derive(Debug, Clone)]
pub(crate) struct LineIndex {
    starts: Vec<LineStart>,
}

impl Default for LineIndex {
    fn default() -> Self {
        Self {
            starts: vec![LineStart { char: 0, byte: 0 }],
        }
    }
}

impl LineIndex {
    pub fn count(&self) -> usize {
        self.starts.len()
    }

    pub fn start(&self, line: usize) -> LineStart {
        self.starts[line]
    }

    /// Start of the line after `line`, if there is one
    pub fn next_start(&self, line: usize) -> Option<LineStart> {
        self.starts.get(line + 1).copied()
    }

    /// Line containing char offset `pos`
    pub fn line_of(&self, pos: usize) -> usize {
        self.starts.partition_point(|start| start.char <= pos) - 1
    }

    /// Record `text` inserted at `at`
    pub fn inserted(&mut self, at: LineStart, text: &str) {
        let chars = text.chars().count();
        let line = self.line_of(at.char);
        for start in &mut self.starts[line + 1..] {
            start.char += chars;
            start.byte += text.len();
        }
        let new_starts = text
            .char_indices()
            .enumerate()
            .filter(|(_, (_, c))| *c == '\n')
            .map(|(offset, (byte, _))| LineStart {
                char: at.char + offset + 1,
                byte: at.byte + byte + 1,
            });
        self.starts.splice(line + 1..line + 1, new_starts);
    }

    /// Record the removal of `removed`, which sat at `at`
    pub fn removed(&mut self, at: LineStart, removed: char) {
        let line = self.line_of(at.char);
        if removed == '\n' {
            self.starts.remove(line + 1);
        }
        for start in &mut self.starts[line + 1..] {
            start.char -= 1;
            start.byte -= removed.len_utf8();
        }
    }

    /// Drop every line start past char offset `len`
    pub fn truncate(&mut self, len: usize) {
        let keep = self.starts.partition_point(|start| start.char <= len);
        self.starts.truncate(keep);
    }
}
