//! Chat screen state

use twirc_core::AccessPanel;
use twirc_core::config::ConnectionSettings;

/// Chat screen state
pub struct ChatState {
    /// Conversation history and the line being typed
    pub panel: AccessPanel,
    /// `server:port` shown in the status bar
    pub server: String,
    pub channel: String,
    pub nickname: String,
    pub tls: bool,
    /// Set once the session task has stopped
    pub session_ended: bool,
    /// First visible line when scrolled by hand; `None` follows the caret
    pub scroll: Option<usize>,
    /// First visible line when following the caret, updated on render
    pub follow_top: usize,
    /// Height of the text area, updated on render
    pub viewport_height: usize,
}

impl ChatState {
    pub fn new(panel: AccessPanel, settings: &ConnectionSettings) -> Self {
        Self {
            panel,
            server: format!("{}:{}", settings.server, settings.port),
            channel: settings.channel.clone(),
            nickname: settings.nickname.clone(),
            tls: settings.ssl,
            session_ended: false,
            scroll: None,
            follow_top: 0,
            viewport_height: 0,
        }
    }

    fn page(&self) -> usize {
        self.viewport_height.saturating_sub(1).max(1)
    }

    pub fn scroll_up(&mut self) {
        let top = self.scroll.unwrap_or(self.follow_top);
        self.scroll = Some(top.saturating_sub(self.page()));
    }

    pub fn scroll_down(&mut self) {
        let Some(top) = self.scroll else {
            return;
        };
        let top = top + self.page();
        self.scroll = (top < self.follow_top).then_some(top);
    }

    /// Go back to following the caret
    pub fn follow_caret(&mut self) {
        self.scroll = None;
    }
}
