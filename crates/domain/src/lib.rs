//! # domo-domain
//!
//! Pure domain model for the domo smart-home simulator.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the house graph: **layouts** → **heating zones** → **rooms** →
//!   **devices** and **inhabitants**
//! - Enforce the structural invariants of that graph (unique names, the
//!   permanent `Outdoors`/`Garage` rooms, default-zone membership,
//!   zone-membership exclusivity)
//! - Define **simulation parameters** (clock, season boundaries, away mode,
//!   auto-lighting window) consumed by the engine in `domo-app`
//! - Define the activity-log value types (`LogEntry`, `LogImportance`)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod device;
pub mod geometry;
pub mod heating_zone;
pub mod inhabitant;
pub mod layout;
pub mod log;
pub mod parameters;
pub mod room;
