//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They are defined here (in `app`) so that both the use-case layer
//! and the adapter layer can depend on them without creating circular
//! dependencies.

pub mod activity_log;
pub mod layout_store;
pub mod user_directory;

pub use activity_log::ActivityLog;
pub use layout_store::LayoutStore;
pub use user_directory::UserDirectory;
