//! In-process activity feed backed by a tokio broadcast channel.

use tokio::sync::broadcast;

use domo_domain::error::DomoError;
use domo_domain::log::LogEntry;

use crate::ports::ActivityLog;

/// In-process activity feed using a tokio [`broadcast`] channel.
///
/// Appending succeeds even when there are no active subscribers
/// (the entry is simply dropped).
pub struct InProcessActivityFeed {
    sender: broadcast::Sender<LogEntry>,
}

impl InProcessActivityFeed {
    /// Create a new feed with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to entries on this feed.
    ///
    /// Returns a receiver that will get all entries appended *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<LogEntry> {
        self.sender.subscribe()
    }
}

impl ActivityLog for InProcessActivityFeed {
    fn append(&self, entry: LogEntry) -> impl Future<Output = Result<(), DomoError>> + Send {
        // broadcast::send fails only when there are zero receivers,
        // which is fine — we simply ignore the error.
        let _ = self.sender.send(entry);
        async { Ok(()) }
    }
}

use std::future::Future;
