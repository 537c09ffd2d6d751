use super::error::ConfigError;
use super::{AppConfig, CONFIG_PATH, DEFAULT_PORT, ENV_PATH, PASSWORD_ENV};
use crate::panel::LineEnding;
use crate::session::ReconnectPolicy;
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::Duration;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(super) struct RawConfig {
    pub port: Option<u16>,
    pub ssl: Option<bool>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub line_ending: Option<LineEnding>,
    pub reconnect: Option<RawReconnect>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(super) struct RawReconnect {
    pub policy: Option<String>,
    pub delay_ms: Option<u64>,
    pub max_delay_ms: Option<u64>,
    pub max_attempts: Option<u32>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Expand `~` and environment variables in a user supplied path
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match shellexpand::full(&raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(shellexpand::tilde(&raw).as_ref()),
    }
}

/// Load and validate configuration.
///
/// An explicit path must exist; the default path is optional.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    let raw = match path {
        Some(path) => read_config(&expand_path(path))?,
        None => match read_config(Path::new(CONFIG_PATH)) {
            Err(ConfigError::NotFound { .. }) => {
                debug!(path = CONFIG_PATH, "No configuration file, using defaults");
                RawConfig::default()
            }
            other => other?,
        },
    };
    let env_password = std::env::var(PASSWORD_ENV).ok().filter(|p| !p.is_empty());
    validate_and_build(raw, env_password)
}

/// Parse configuration from TOML text without touching the environment
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let raw: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: PathBuf::from("<inline>"),
        source,
    })?;
    validate_and_build(raw, None)
}

fn read_config(path: &Path) -> Result<RawConfig, ConfigError> {
    debug!(path = %path.display(), "Reading client configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn validate_and_build(
    parsed: RawConfig,
    env_password: Option<String>,
) -> Result<AppConfig, ConfigError> {
    let port = parsed.port.unwrap_or(DEFAULT_PORT);
    if port == 0 {
        return Err(ConfigError::InvalidPort);
    }

    let reconnect = match parsed.reconnect {
        Some(raw) => build_reconnect(raw)?,
        None => ReconnectPolicy::default(),
    };

    Ok(AppConfig {
        port,
        ssl: parsed.ssl.unwrap_or(false),
        username: parsed.username,
        password: env_password.or(parsed.password),
        line_ending: parsed.line_ending.unwrap_or_default(),
        reconnect,
    })
}

fn build_reconnect(raw: RawReconnect) -> Result<ReconnectPolicy, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidReconnect {
        reason: reason.to_string(),
    };
    let max_attempts = raw.max_attempts;
    let policy = raw.policy.as_deref().unwrap_or("exponential");

    match policy.to_ascii_lowercase().as_str() {
        "never" => Ok(ReconnectPolicy::Never),
        "immediate" => Ok(ReconnectPolicy::Immediate { max_attempts }),
        "fixed" => {
            let delay = raw
                .delay_ms
                .ok_or_else(|| invalid("policy 'fixed' requires delay_ms"))?;
            Ok(ReconnectPolicy::Fixed {
                delay: Duration::from_millis(delay),
                max_attempts,
            })
        }
        "exponential" => {
            let initial = Duration::from_millis(raw.delay_ms.unwrap_or(1_000));
            let max = Duration::from_millis(raw.max_delay_ms.unwrap_or(60_000));
            if initial.is_zero() {
                return Err(invalid("delay_ms must be positive for 'exponential'"));
            }
            if max < initial {
                return Err(invalid("max_delay_ms must not be below delay_ms"));
            }
            Ok(ReconnectPolicy::Exponential {
                initial,
                max,
                max_attempts,
            })
        }
        other => Err(invalid(&format!(
            "unknown policy '{other}' (expected never, immediate, fixed or exponential)"
        ))),
    }
}
