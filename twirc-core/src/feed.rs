//! Message feed: thread-safe FIFO handoff of display lines to the panel owner.
//!
//! Network tasks post lines from any thread; the UI loop drains them on its
//! own turn, so the text buffer only ever has a single writer.

use crate::panel::TextRegion;
use tokio::sync::mpsc;
use tracing::trace;

/// Create a connected sender/receiver pair
pub fn message_feed() -> (FeedSender, FeedReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (FeedSender { tx }, FeedReceiver { rx })
}

/// Posting side of the feed, cheap to clone
#[derive(Debug, Clone)]
pub struct FeedSender {
    tx: mpsc::UnboundedSender<String>,
}

impl FeedSender {
    /// Queue a line for display. Returns false once the receiver is gone.
    pub fn post(&self, message: impl Into<String>) -> bool {
        self.tx.send(message.into()).is_ok()
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Receiving side of the feed, owned by whoever owns the text buffer
#[derive(Debug)]
pub struct FeedReceiver {
    rx: mpsc::UnboundedReceiver<String>,
}

impl FeedReceiver {
    /// Append every queued line to `region`, oldest first
    pub fn drain_into(&mut self, region: &mut TextRegion) -> usize {
        let mut appended = 0;
        while let Ok(message) = self.rx.try_recv() {
            region.append_message(&message);
            appended += 1;
        }
        if appended > 0 {
            trace!(appended, "Drained message feed");
        }
        appended
    }

    /// Wait for the next line; `None` once every sender is dropped
    pub async fn recv(&mut self) -> Option<String> {
        self.rx.recv().await
    }

    pub fn try_recv(&mut self) -> Option<String> {
        self.rx.try_recv().ok()
    }
}
