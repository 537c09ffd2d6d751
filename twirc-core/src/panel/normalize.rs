//! Line ending normalization for appended history

use serde::Deserialize;

/// Line terminator written into the history region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\r\n` on Windows, `\n` everywhere else
    #[default]
    Native,
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Native if cfg!(windows) => "\r\n",
            LineEnding::Native | LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Normalize a message before it is appended to history.
///
/// Carriage returns become newlines, doubled newlines collapse to one
/// (a single non-overlapping pass), every newline becomes the configured
/// terminator and the result always ends with exactly one terminator.
pub fn normalize_message(message: &str, ending: LineEnding) -> String {
    let collapsed = message.replace('\r', "\n").replace("\n\n", "\n");
    let mut normalized = collapsed.replace('\n', ending.as_str());
    if !normalized.ends_with('\n') {
        normalized.push_str(ending.as_str());
    }
    normalized
}
