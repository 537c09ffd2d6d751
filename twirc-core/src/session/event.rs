//! Session events and the lines they display

/// Something the session wants the user to know about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Connected,
    Disconnected,
    /// Registration finished; the channel can be joined now
    SignedOn,
    Motd(Vec<String>),
    Joined(String),
    /// A channel or private message; `sender` is the real name when known
    Message { sender: String, text: String },
    /// CTCP ACTION (`/me`)
    Action { nick: String, text: String },
    /// A line we sent ourselves
    Echo { nick: String, text: String },
    Status(String),
}

impl SessionEvent {
    /// Line to append to the panel, if the event is visible at all
    pub fn notice(&self) -> Option<String> {
        let line = match self {
            SessionEvent::Connected => "~~~ Connected to the server. ~~~".to_string(),
            SessionEvent::Disconnected => "~~~ Disconnected from the server. ~~~".to_string(),
            SessionEvent::SignedOn => return None,
            SessionEvent::Motd(lines) => format!("MOTD:\n  {}", lines.join("\n  ")),
            SessionEvent::Joined(channel) => format!("~~~ Joined channel {channel}. ~~~"),
            SessionEvent::Message { sender, text } => format!("<{sender}> {text}"),
            SessionEvent::Action { nick, text } => format!("{nick} {text}"),
            SessionEvent::Echo { nick, text } => format!("<{nick}> {text}"),
            SessionEvent::Status(text) => format!("~~~ {text} ~~~"),
        };
        Some(line)
    }
}
