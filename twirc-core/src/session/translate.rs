//! Turns parsed IRC messages into session events

use super::event::SessionEvent;
use irc::proto::{Command, Message, Response};
use std::collections::HashMap;
use tracing::{debug, trace};

const CTCP_DELIM: char = '\u{1}';

/// Stateful translator from protocol messages to [`SessionEvent`]s.
///
/// Remembers real names from WHO replies and collects MOTD lines until the
/// server signals the end of the MOTD.
#[derive(Debug, Clone)]
pub struct MessageTranslator {
    nickname: String,
    real_names: HashMap<String, String>,
    motd: Vec<String>,
}

impl MessageTranslator {
    pub fn new(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            real_names: HashMap::new(),
            motd: Vec::new(),
        }
    }

    /// Our current nickname, as last confirmed by the server
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Real name for `nick` when a WHO reply provided one
    pub fn display_name<'a>(&'a self, nick: &'a str) -> &'a str {
        self.real_names.get(nick).map_or(nick, String::as_str)
    }

    pub fn translate(&mut self, message: &Message) -> Option<SessionEvent> {
        let source = message.source_nickname();
        match &message.command {
            Command::PRIVMSG(_, text) => {
                let nick = source.unwrap_or("*");
                self.privmsg(nick, text)
            }
            Command::JOIN(channel, _, _) if source == Some(self.nickname.as_str()) => {
                Some(SessionEvent::Joined(channel.clone()))
            }
            Command::NICK(new_nick) if source == Some(self.nickname.as_str()) => {
                debug!(old = %self.nickname, new = %new_nick, "Nickname changed");
                self.nickname = new_nick.clone();
                None
            }
            Command::Response(response, args) => self.response(response, args),
            _ => None,
        }
    }

    fn privmsg(&self, nick: &str, text: &str) -> Option<SessionEvent> {
        if let Some(ctcp) = text.strip_prefix(CTCP_DELIM) {
            let ctcp = ctcp.strip_suffix(CTCP_DELIM).unwrap_or(ctcp);
            let action = ctcp.strip_prefix("ACTION ")?;
            return Some(SessionEvent::Action {
                nick: nick.to_string(),
                text: action.to_string(),
            });
        }
        Some(SessionEvent::Message {
            sender: self.display_name(nick).to_string(),
            text: text.to_string(),
        })
    }

    fn response(&mut self, response: &Response, args: &[String]) -> Option<SessionEvent> {
        match response {
            Response::RPL_WELCOME => {
                if let Some(nick) = args.first().filter(|nick| !nick.is_empty()) {
                    self.nickname = nick.clone();
                }
                Some(SessionEvent::SignedOn)
            }
            Response::RPL_MOTDSTART => {
                self.motd.clear();
                None
            }
            Response::RPL_MOTD => {
                let line = args.last().map(String::as_str).unwrap_or_default();
                let line = line.strip_prefix("- ").unwrap_or(line);
                self.motd.push(line.to_string());
                None
            }
            Response::RPL_ENDOFMOTD | Response::ERR_NOMOTD => {
                let motd = std::mem::take(&mut self.motd);
                (!motd.is_empty()).then_some(SessionEvent::Motd(motd))
            }
            Response::RPL_WHOREPLY => {
                self.who_reply(args);
                None
            }
            _ => None,
        }
    }

    // <me> <channel> <user> <host> <server> <nick> <flags> :<hops> <real name>
    fn who_reply(&mut self, args: &[String]) {
        let (Some(nick), Some(trailing)) = (args.get(5), args.last()) else {
            return;
        };
        if args.len() < 8 {
            return;
        }
        let real_name = trailing
            .split_once(' ')
            .map_or("", |(_, name)| name)
            .trim();
        if real_name.is_empty() {
            return;
        }
        trace!(nick = %nick, real_name, "Recorded WHO reply");
        self.real_names.insert(nick.clone(), real_name.to_string());
    }
}
