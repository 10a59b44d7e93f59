//! User directory port — current-user lookup.
//!
//! The username only tags an inhabitant's display label ("you"); it is
//! never part of a core invariant.

use std::future::Future;

use domo_domain::error::DomoError;

/// Resolves the identity of the person driving the simulation.
pub trait UserDirectory {
    /// The current user's display name.
    fn current_username(&self) -> impl Future<Output = Result<String, DomoError>> + Send;
}

impl<T: UserDirectory + Send + Sync> UserDirectory for std::sync::Arc<T> {
    fn current_username(&self) -> impl Future<Output = Result<String, DomoError>> + Send {
        (**self).current_username()
    }
}
