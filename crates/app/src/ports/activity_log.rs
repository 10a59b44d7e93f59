//! Activity log port — append-only human-readable event log.

use std::future::Future;

use domo_domain::error::DomoError;
use domo_domain::log::LogEntry;

/// Fire-and-forget sink for activity-log entries.
///
/// Callers never consume a return value beyond error propagation; a slow
/// or missing log must not change core behavior.
pub trait ActivityLog {
    /// Append an entry to the log.
    fn append(&self, entry: LogEntry) -> impl Future<Output = Result<(), DomoError>> + Send;
}

impl<T: ActivityLog + Send + Sync> ActivityLog for std::sync::Arc<T> {
    fn append(&self, entry: LogEntry) -> impl Future<Output = Result<(), DomoError>> + Send {
        (**self).append(entry)
    }
}
