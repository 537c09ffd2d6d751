//! Core of the twirc chat client.
//!
//! - [`panel`]: the split-region text buffer and the keystroke policy that
//!   keeps typing out of the history region
//! - [`feed`]: FIFO handoff of display lines from network tasks to the
//!   buffer owner
//! - [`session`]: IRC session task, message translation and reconnects
//! - [`config`]: file, environment and command line settings

pub mod config;
pub mod feed;
pub mod panel;
pub mod session;

pub use config::{AppConfig, ConfigError};
pub use feed::{FeedReceiver, FeedSender, message_feed};
pub use panel::{AccessPanel, Key, KeyOutcome, KeyPress, LineEnding, Modifiers, PanelError, TextRegion};
pub use session::{ReconnectPolicy, SessionError, SessionEvent, SessionHandle, spawn_session};
