//! IRC session task
//!
//! Protocol work is delegated to the `irc` crate. This module connects,
//! joins the configured channel, turns incoming traffic into display lines
//! on the message feed and sends submitted lines to the channel. Lost
//! connections are retried according to a [`ReconnectPolicy`].

mod error;
mod event;
mod outbox;
mod reconnect;
mod translate;

pub use error::SessionError;
pub use event::SessionEvent;
pub use outbox::{Outbox, outbound_lines};
pub use reconnect::{ReconnectPolicy, ReconnectState};
pub use translate::MessageTranslator;

use crate::config::ConnectionSettings;
use crate::feed::FeedSender;
use futures::StreamExt;
use irc::client::ClientStream;
use irc::client::prelude::{Client, Command, Config, Message, Sender};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

const QUIT_MESSAGE: &str = "Leaving";

/// Time allowed for the server to acknowledge QUIT before the socket is dropped
const QUIT_GRACE: Duration = Duration::from_secs(2);

/// Handle to a running session task.
///
/// Dropping every outbound sender (including this handle) makes the
/// session send QUIT and stop.
#[derive(Debug)]
pub struct SessionHandle {
    outbound: mpsc::UnboundedSender<String>,
    task: JoinHandle<Result<(), SessionError>>,
}

impl SessionHandle {
    /// Queue a line for the channel. Returns false once the session ended.
    pub fn send(&self, line: impl Into<String>) -> bool {
        self.outbound.send(line.into()).is_ok()
    }

    /// A sender usable from a submit handler
    pub fn outbound(&self) -> mpsc::UnboundedSender<String> {
        self.outbound.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Ask the session to quit and wait for it.
    ///
    /// Other clones of the outbound sender must be dropped first.
    pub async fn shutdown(self) -> Result<(), SessionError> {
        drop(self.outbound);
        self.task
            .await
            .map_err(|err| SessionError::Task(err.to_string()))?
    }
}

/// Start the session on the current tokio runtime
pub fn spawn_session(
    settings: ConnectionSettings,
    policy: ReconnectPolicy,
    feed: FeedSender,
) -> SessionHandle {
    let (outbound, outbound_rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(run_session(settings, policy, feed, outbound_rx));
    SessionHandle { outbound, task }
}

enum Ending {
    /// The user closed the session
    Closed,
    /// The server went away
    Lost,
}

async fn run_session(
    settings: ConnectionSettings,
    policy: ReconnectPolicy,
    feed: FeedSender,
    mut outbound: mpsc::UnboundedReceiver<String>,
) -> Result<(), SessionError> {
    let mut translator = MessageTranslator::new(settings.nickname.clone());
    let mut reconnects = ReconnectState::new(policy);
    let mut outbox = Outbox::new();
    let mut connected_once = false;

    loop {
        info!(
            server = %settings.server,
            port = settings.port,
            tls = settings.ssl,
            attempt = reconnects.attempt(),
            "Connecting to IRC server"
        );
        let Some(connected) = connect_or_close(&settings, &feed, &mut outbox, &mut outbound).await
        else {
            info!("Session closed while connecting");
            return Ok(());
        };
        match connected {
            Ok(client) => {
                connected_once = true;
                reconnects.connected();
                post(&feed, &SessionEvent::Connected);
                let ending = drive(
                    client,
                    &settings,
                    &mut translator,
                    &mut outbox,
                    &feed,
                    &mut outbound,
                )
                .await;
                if let Ending::Closed = ending {
                    info!("Session closed");
                    return Ok(());
                }
                outbox.disconnected();
                post(&feed, &SessionEvent::Disconnected);
            }
            Err(err) if !connected_once => {
                warn!(error = %err, "Initial connection failed");
                post(&feed, &SessionEvent::Status(format!("Connection failed: {err}")));
                return Err(err);
            }
            Err(err) => {
                warn!(error = %err, attempt = reconnects.attempt(), "Reconnection failed");
                post(&feed, &SessionEvent::Status(format!("Reconnection failed: {err}")));
            }
        }

        let Some(delay) = reconnects.next_delay() else {
            info!(attempt = reconnects.attempt(), "Reconnect policy exhausted");
            post(&feed, &SessionEvent::Status("Giving up on reconnecting.".into()));
            return Ok(());
        };
        if !delay.is_zero() {
            post(
                &feed,
                &SessionEvent::Status(format!(
                    "Reconnecting in {} seconds (attempt {}).",
                    delay.as_secs_f32(),
                    reconnects.attempt()
                )),
            );
        }
        if !wait_offline(delay, &feed, &mut outbox, &mut outbound).await {
            info!("Session closed while offline");
            return Ok(());
        }
    }
}

/// Build the client configuration for one server and channel
pub fn irc_config(settings: &ConnectionSettings) -> Config {
    Config {
        nickname: Some(settings.nickname.clone()),
        username: settings.username.clone(),
        password: settings.password.clone(),
        server: Some(settings.server.clone()),
        port: Some(settings.port),
        use_tls: Some(settings.ssl),
        ..Config::default()
    }
}

async fn connect(settings: &ConnectionSettings) -> Result<Client, SessionError> {
    let client = Client::from_config(irc_config(settings)).await?;
    client.identify()?;
    debug!("Sent registration");
    Ok(client)
}

/// Connect unless the session is closed first; `None` means it was closed.
///
/// A stalled TCP or TLS handshake must not keep the user from quitting.
async fn connect_or_close(
    settings: &ConnectionSettings,
    feed: &FeedSender,
    outbox: &mut Outbox,
    outbound: &mut mpsc::UnboundedReceiver<String>,
) -> Option<Result<Client, SessionError>> {
    let connecting = connect(settings);
    tokio::pin!(connecting);
    loop {
        tokio::select! {
            connected = &mut connecting => return Some(connected),
            line = outbound.recv() => match line {
                Some(line) => hold_line(outbox, feed, &line),
                None => return None,
            },
        }
    }
}

async fn drive(
    mut client: Client,
    settings: &ConnectionSettings,
    translator: &mut MessageTranslator,
    outbox: &mut Outbox,
    feed: &FeedSender,
    outbound: &mut mpsc::UnboundedReceiver<String>,
) -> Ending {
    let mut stream = match client.stream() {
        Ok(stream) => stream,
        Err(err) => {
            warn!(error = %err, "Could not open message stream");
            return Ending::Lost;
        }
    };
    let sender = client.sender();

    loop {
        tokio::select! {
            incoming = stream.next() => match incoming {
                Some(Ok(message)) => {
                    handle_incoming(&message, &sender, settings, translator, outbox, feed);
                }
                Some(Err(err)) => {
                    warn!(error = %err, "Connection error");
                    return Ending::Lost;
                }
                None => {
                    debug!("Server closed the connection");
                    return Ending::Lost;
                }
            },
            line = outbound.recv() => match line {
                Some(line) if outbox.is_joined() => {
                    send_texts(&sender, settings, translator, feed, outbox.submit(&line));
                }
                Some(line) => hold_line(outbox, feed, &line),
                None => {
                    quit(&sender, &mut stream).await;
                    return Ending::Closed;
                }
            },
        }
    }
}

fn handle_incoming(
    message: &Message,
    sender: &Sender,
    settings: &ConnectionSettings,
    translator: &mut MessageTranslator,
    outbox: &mut Outbox,
    feed: &FeedSender,
) {
    let Some(event) = translator.translate(message) else {
        return;
    };
    post(feed, &event);
    match event {
        SessionEvent::SignedOn => {
            info!(channel = %settings.channel, nick = translator.nickname(), "Signed on");
            if let Err(err) = join_channel(sender, &settings.channel) {
                warn!(error = %err, channel = %settings.channel, "Could not join channel");
            }
        }
        SessionEvent::Joined(_) => {
            let held = outbox.joined();
            if !held.is_empty() {
                debug!(lines = held.len(), "Sending lines held until join");
            }
            send_texts(sender, settings, translator, feed, held);
        }
        _ => {}
    }
}

fn join_channel(sender: &Sender, channel: &str) -> Result<(), SessionError> {
    sender.send_join(channel)?;
    sender.send(Command::WHO(Some(channel.to_string()), None))?;
    Ok(())
}

/// Send texts to the channel, one PRIVMSG each, echoing what went out
fn send_texts(
    sender: &Sender,
    settings: &ConnectionSettings,
    translator: &MessageTranslator,
    feed: &FeedSender,
    texts: Vec<String>,
) {
    for text in texts {
        match sender.send_privmsg(&settings.channel, &text) {
            Ok(()) => post(
                feed,
                &SessionEvent::Echo {
                    nick: translator.nickname().to_string(),
                    text,
                },
            ),
            Err(err) => {
                warn!(error = %err, "Failed to send message");
                post(feed, &SessionEvent::Status(format!("Message not sent: {err}")));
            }
        }
    }
}

async fn quit(sender: &Sender, stream: &mut ClientStream) {
    if let Err(err) = sender.send_quit(QUIT_MESSAGE) {
        debug!(error = %err, "QUIT not sent");
        return;
    }
    // Keep polling so the QUIT is flushed; the server closes the link after it.
    let drained = tokio::time::timeout(QUIT_GRACE, async {
        while let Some(Ok(_)) = stream.next().await {}
    })
    .await;
    if drained.is_err() {
        debug!("Server did not close the connection after QUIT");
    }
}

/// Sit out a reconnect delay. Returns false if the session was closed meanwhile.
async fn wait_offline(
    delay: Duration,
    feed: &FeedSender,
    outbox: &mut Outbox,
    outbound: &mut mpsc::UnboundedReceiver<String>,
) -> bool {
    let sleep = tokio::time::sleep(delay);
    tokio::pin!(sleep);
    loop {
        tokio::select! {
            _ = &mut sleep => return true,
            line = outbound.recv() => match line {
                Some(line) => hold_line(outbox, feed, &line),
                None => return false,
            },
        }
    }
}

fn hold_line(outbox: &mut Outbox, feed: &FeedSender, line: &str) {
    if outbox.hold(line) > 0 {
        let notice = "Not in the channel yet, message will be sent after joining.";
        post(feed, &SessionEvent::Status(notice.into()));
    }
}

fn post(feed: &FeedSender, event: &SessionEvent) {
    let Some(line) = event.notice() else {
        return;
    };
    if !feed.post(line) {
        debug!("Message feed closed, dropping notice");
    }
}
