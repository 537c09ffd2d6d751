//! Config parsing, reconnect validation and override tests

use std::time::Duration;
use twirc_core::config::{AppConfig, ConfigError, Overrides, channel_name, parse_config};
use twirc_core::ReconnectPolicy;

#[test]
fn parses_never_policy() {
    let config = parse_config("[reconnect]\npolicy = \"never\"\n").expect("parses");
    assert_eq!(config.reconnect, ReconnectPolicy::Never);
}

#[test]
fn parses_immediate_policy_with_limit() {
    let config =
        parse_config("[reconnect]\npolicy = \"immediate\"\nmax_attempts = 5\n").expect("parses");
    assert_eq!(
        config.reconnect,
        ReconnectPolicy::Immediate {
            max_attempts: Some(5)
        }
    );
}

#[test]
fn parses_exponential_policy() {
    let config = parse_config(
        "[reconnect]\npolicy = \"Exponential\"\ndelay_ms = 500\nmax_delay_ms = 8000\n",
    )
    .expect("parses");
    assert_eq!(
        config.reconnect,
        ReconnectPolicy::Exponential {
            initial: Duration::from_millis(500),
            max: Duration::from_secs(8),
            max_attempts: None,
        }
    );
}

#[test]
fn fixed_policy_requires_delay() {
    let result = parse_config("[reconnect]\npolicy = \"fixed\"\n");
    assert!(matches!(result, Err(ConfigError::InvalidReconnect { .. })));
}

#[test]
fn exponential_cap_must_not_be_below_initial() {
    let result = parse_config("[reconnect]\ndelay_ms = 5000\nmax_delay_ms = 1000\n");
    assert!(matches!(result, Err(ConfigError::InvalidReconnect { .. })));
}

#[test]
fn unknown_policy_is_rejected() {
    let result = parse_config("[reconnect]\npolicy = \"sometimes\"\n");
    match result {
        Err(ConfigError::InvalidReconnect { reason }) => assert!(reason.contains("sometimes")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn unknown_line_ending_is_rejected() {
    let result = parse_config("line_ending = \"cr\"\n");
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn command_line_overrides_file_values() {
    let mut config = parse_config("port = 7000\nusername = \"file\"\npassword = \"secret\"\n")
        .expect("parses");

    config.apply_overrides(Overrides {
        port: Some(6697),
        ssl: true,
        username: Some("cli".into()),
        password: None,
    });

    assert_eq!(config.port, 6697);
    assert!(config.ssl);
    assert_eq!(config.username.as_deref(), Some("cli"));
    assert_eq!(config.password.as_deref(), Some("secret"));
}

#[test]
fn ssl_flag_cannot_disable_file_setting() {
    let mut config = parse_config("ssl = true\n").expect("parses");
    config.apply_overrides(Overrides::default());
    assert!(config.ssl);
}

#[test]
fn connection_settings_prefix_channel() {
    let config = AppConfig::default();

    let settings = config.connection("irc.example.org", "ada", "rust");

    assert_eq!(settings.server, "irc.example.org");
    assert_eq!(settings.nickname, "ada");
    assert_eq!(settings.channel, "#rust");
    assert_eq!(settings.port, 6667);
}

#[test]
fn channel_name_keeps_existing_prefix() {
    assert_eq!(channel_name("#rust"), "#rust");
    assert_eq!(channel_name("&local"), "&local");
    assert_eq!(channel_name(" cocomud "), "#cocomud");
}
