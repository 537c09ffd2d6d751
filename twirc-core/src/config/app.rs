use super::DEFAULT_PORT;
use super::error::ConfigError;
use crate::panel::LineEnding;
use crate::session::ReconnectPolicy;
use std::path::Path;

/// Application configuration loaded from twirc.toml and the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub ssl: bool,
    pub username: Option<String>,
    pub password: Option<String>,
    pub line_ending: LineEnding,
    pub reconnect: ReconnectPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            ssl: false,
            username: None,
            password: None,
            line_ending: LineEnding::default(),
            reconnect: ReconnectPolicy::default(),
        }
    }
}

/// Values given on the command line, which win over everything else
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub port: Option<u16>,
    pub ssl: bool,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Everything the session needs to reach one channel on one server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub server: String,
    pub port: u16,
    pub ssl: bool,
    pub nickname: String,
    pub channel: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(port) = overrides.port {
            self.port = port;
        }
        self.ssl |= overrides.ssl;
        if overrides.username.is_some() {
            self.username = overrides.username;
        }
        if overrides.password.is_some() {
            self.password = overrides.password;
        }
    }

    pub fn connection(
        &self,
        server: impl Into<String>,
        nickname: impl Into<String>,
        channel: &str,
    ) -> ConnectionSettings {
        ConnectionSettings {
            server: server.into(),
            port: self.port,
            ssl: self.ssl,
            nickname: nickname.into(),
            channel: channel_name(channel),
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

/// Channel name with a `#` prefix unless it already names a channel
pub fn channel_name(channel: &str) -> String {
    let channel = channel.trim();
    if channel.starts_with(['#', '&', '+', '!']) {
        channel.to_string()
    } else {
        format!("#{channel}")
    }
}
