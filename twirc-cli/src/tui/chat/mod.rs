//! TUI chat screen
//!
//! - state.rs: panel plus view state (scrolling, session status)
//! - input.rs: maps terminal keys to app actions or panel keys
//! - ui.rs: renders the panel as a single text area
//! - runner.rs: event loop tying feed, keys and drawing together

mod input;
mod runner;
mod state;
mod ui;

pub use input::{InputAction, handle_input, to_key_press};
pub use runner::run_chat;
pub use state::ChatState;
