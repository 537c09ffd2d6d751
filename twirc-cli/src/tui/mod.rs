//! TUI module for terminal user interface using Ratatui
//!
//! Renders the access panel full screen and forwards keys to it.

pub mod chat;
pub mod terminal;
mod theme;

pub use terminal::{Tui, restore_terminal};
