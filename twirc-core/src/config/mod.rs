pub mod app;
pub mod error;
pub mod loader;

/// Default config file path - can be overridden via CLI argument
pub const CONFIG_PATH: &str = "config/twirc.toml";

/// Environment file loaded once before reading the configuration
pub const ENV_PATH: &str = "config/.env";

/// Environment variable holding the server password
pub const PASSWORD_ENV: &str = "TWIRC_PASSWORD";

/// Port used when neither the file nor the command line sets one
pub const DEFAULT_PORT: u16 = 6667;

pub use app::{AppConfig, ConnectionSettings, Overrides, channel_name};
pub use error::ConfigError;
pub use loader::{expand_path, parse_config};
