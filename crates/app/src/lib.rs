//! # domo-app
//!
//! Application layer — the simulation engine, use-cases, and **port
//! definitions** (traits).
//!
//! ## Responsibilities
//! - The **simulation engine**: a pure derivation from a
//!   [`HouseLayout`](domo_domain::layout::HouseLayout) and a
//!   [`SimulationParameters`](domo_domain::parameters::SimulationParameters)
//!   snapshot to effective device and temperature state
//! - Define **port traits** that adapters implement (driven/outbound ports):
//!   - `LayoutStore` — persistence for layouts
//!   - `ActivityLog` — append-only human-readable event log
//!   - `UserDirectory` — current-user lookup
//! - Provide **in-process infrastructure** (the activity feed) that doesn't
//!   need IO
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `domo-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod activity_feed;
pub mod ports;
pub mod services;
pub mod simulation;
