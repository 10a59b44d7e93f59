//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`DomoError`]
//! via `#[from]`; adapters box their errors into [`DomoError::Storage`].

/// Top-level error for all domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum DomoError {
    /// A domain invariant failed at construction time.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A room or zone with the same name already exists.
    #[error("duplicate name")]
    Duplicate(#[from] DuplicateNameError),

    /// The operation is not allowed on this target (sentinel rooms, default zone).
    #[error("forbidden operation")]
    Forbidden(#[from] ForbiddenError),

    /// A lookup by name or id found nothing.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// An error raised by a storage adapter.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Construction-time invariant failures.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A name field was empty.
    #[error("name must not be empty")]
    EmptyName,
}

/// Adding a room or zone whose name is already taken.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("a {kind} named {name:?} already exists")]
pub struct DuplicateNameError {
    /// What kind of object clashed ("room", "heating zone", …).
    pub kind: &'static str,
    pub name: String,
}

/// A structurally-protected object was targeted by a mutation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("cannot {action} {kind} {name:?}")]
pub struct ForbiddenError {
    pub kind: &'static str,
    pub name: String,
    /// The rejected action ("remove", "remove devices from", …).
    pub action: &'static str,
}

/// Lookup with no match.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} not found: {name}")]
pub struct NotFoundError {
    pub kind: &'static str,
    pub name: String,
}
