//! Reconnect policy applied after a lost connection

use std::time::Duration;

/// How the session reconnects after losing the server.
///
/// `max_attempts` of `None` retries forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconnectPolicy {
    Never,
    Immediate {
        max_attempts: Option<u32>,
    },
    Fixed {
        delay: Duration,
        max_attempts: Option<u32>,
    },
    Exponential {
        initial: Duration,
        max: Duration,
        max_attempts: Option<u32>,
    },
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        ReconnectPolicy::Exponential {
            initial: Duration::from_secs(1),
            max: Duration::from_secs(60),
            max_attempts: None,
        }
    }
}

impl ReconnectPolicy {
    /// Delay before reconnect attempt number `attempt` (starting at 1),
    /// or `None` when no further attempt should be made.
    pub fn delay_for(&self, attempt: u32) -> Option<Duration> {
        if attempt == 0 || self.exhausted(attempt) {
            return None;
        }
        match *self {
            ReconnectPolicy::Never => None,
            ReconnectPolicy::Immediate { .. } => Some(Duration::ZERO),
            ReconnectPolicy::Fixed { delay, .. } => Some(delay),
            ReconnectPolicy::Exponential { initial, max, .. } => {
                let factor = 2u32.saturating_pow(attempt - 1);
                Some(initial.saturating_mul(factor).min(max))
            }
        }
    }

    fn exhausted(&self, attempt: u32) -> bool {
        match *self {
            ReconnectPolicy::Never => true,
            ReconnectPolicy::Immediate { max_attempts }
            | ReconnectPolicy::Fixed { max_attempts, .. }
            | ReconnectPolicy::Exponential { max_attempts, .. } => {
                max_attempts.is_some_and(|max| attempt > max)
            }
        }
    }
}

/// Attempt counter for one session, driven by a [`ReconnectPolicy`].
///
/// The count restarts after every successful connection, so the policy's
/// limit applies to each outage separately.
#[derive(Debug, Clone)]
pub struct ReconnectState {
    policy: ReconnectPolicy,
    attempt: u32,
}

impl ReconnectState {
    pub fn new(policy: ReconnectPolicy) -> Self {
        Self { policy, attempt: 0 }
    }

    /// Attempts made since the last successful connection
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn connected(&mut self) {
        self.attempt = 0;
    }

    /// Record a failed or lost connection and return the wait before the
    /// next attempt, or `None` to give up.
    pub fn next_delay(&mut self) -> Option<Duration> {
        self.attempt = self.attempt.saturating_add(1);
        self.policy.delay_for(self.attempt)
    }
}
