//! Session event display lines

use twirc_core::SessionEvent;
use twirc_core::config::ConnectionSettings;
use twirc_core::session::irc_config;

#[test]
fn test_connection_notices() {
    assert_eq!(
        SessionEvent::Connected.notice().as_deref(),
        Some("~~~ Connected to the server. ~~~")
    );
    assert_eq!(
        SessionEvent::Disconnected.notice().as_deref(),
        Some("~~~ Disconnected from the server. ~~~")
    );
}

#[test]
fn test_signed_on_is_silent() {
    assert_eq!(SessionEvent::SignedOn.notice(), None);
}

#[test]
fn test_motd_lines_are_indented() {
    let event = SessionEvent::Motd(vec!["Welcome".into(), "Be nice".into()]);
    assert_eq!(event.notice().as_deref(), Some("MOTD:\n  Welcome\n  Be nice"));
}

#[test]
fn test_joined_notice() {
    let event = SessionEvent::Joined("#rust".into());
    assert_eq!(event.notice().as_deref(), Some("~~~ Joined channel #rust. ~~~"));
}

#[test]
fn test_chat_lines() {
    let message = SessionEvent::Message {
        sender: "Ada Lovelace".into(),
        text: "hello".into(),
    };
    let action = SessionEvent::Action {
        nick: "ada".into(),
        text: "waves".into(),
    };
    let echo = SessionEvent::Echo {
        nick: "me".into(),
        text: "hi".into(),
    };

    assert_eq!(message.notice().as_deref(), Some("<Ada Lovelace> hello"));
    assert_eq!(action.notice().as_deref(), Some("ada waves"));
    assert_eq!(echo.notice().as_deref(), Some("<me> hi"));
}

#[test]
fn test_status_notice() {
    let event = SessionEvent::Status("Giving up on reconnecting.".into());
    assert_eq!(
        event.notice().as_deref(),
        Some("~~~ Giving up on reconnecting. ~~~")
    );
}

#[test]
fn test_irc_config_carries_connection_settings() {
    let settings = ConnectionSettings {
        server: "irc.example.org".into(),
        port: 6697,
        ssl: true,
        nickname: "ada".into(),
        channel: "#rust".into(),
        username: Some("ada_l".into()),
        password: None,
    };

    let config = irc_config(&settings);

    assert_eq!(config.server.as_deref(), Some("irc.example.org"));
    assert_eq!(config.port, Some(6697));
    assert_eq!(config.use_tls, Some(true));
    assert_eq!(config.nickname.as_deref(), Some("ada"));
    assert_eq!(config.username.as_deref(), Some("ada_l"));
    assert_eq!(config.password, None);
}
