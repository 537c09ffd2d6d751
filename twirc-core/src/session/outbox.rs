//! Lines waiting to go out to the channel

use std::collections::VecDeque;

/// Split a submitted line into the texts sent as separate PRIVMSGs.
///
/// Trailing whitespace is trimmed and blank lines are dropped.
pub fn outbound_lines(line: &str) -> impl Iterator<Item = &str> {
    line.lines()
        .map(str::trim_end)
        .filter(|text| !text.is_empty())
}

/// Outgoing texts, held back while the channel is not joined.
///
/// A server rejects PRIVMSG to a channel we are not in, so anything submitted
/// while connecting, offline or waiting for the JOIN is kept in order and
/// released once the JOIN is confirmed.
#[derive(Debug, Default)]
pub struct Outbox {
    joined: bool,
    held: VecDeque<String>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_joined(&self) -> bool {
        self.joined
    }

    /// Number of texts waiting for the channel
    pub fn held(&self) -> usize {
        self.held.len()
    }

    /// Texts to send right away. Empty when they were held instead.
    pub fn submit(&mut self, line: &str) -> Vec<String> {
        if self.joined {
            outbound_lines(line).map(str::to_string).collect()
        } else {
            self.hold(line);
            Vec::new()
        }
    }

    /// Keep the texts of `line` for later. Returns how many were kept.
    pub fn hold(&mut self, line: &str) -> usize {
        let before = self.held.len();
        self.held.extend(outbound_lines(line).map(str::to_string));
        self.held.len() - before
    }

    /// The channel was joined: everything held goes out now, oldest first
    pub fn joined(&mut self) -> Vec<String> {
        self.joined = true;
        self.held.drain(..).collect()
    }

    /// The connection is gone; hold texts again until the next JOIN
    pub fn disconnected(&mut self) {
        self.joined = false;
    }
}
