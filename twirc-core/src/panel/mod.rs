//! Access panel: one text area holding both the output history and the
//! line being typed.
//!
//! - region.rs: history/pending-input bookkeeping and caret movement
//! - lines.rs: line-start index so caret movement and rendering stay local
//! - keys.rs: keystroke policy applied before default editing
//! - normalize.rs: line ending normalization of appended messages

mod error;
mod keys;
mod lines;
mod normalize;
mod region;

pub use error::PanelError;
pub use keys::{AccessPanel, InputHandler, Key, KeyOutcome, KeyPress, Modifiers};
pub use normalize::{LineEnding, normalize_message};
pub use region::TextRegion;
