//! Heating zone — a named group of rooms sharing a desired temperature.
//!
//! Zones reference their member rooms by name; the rooms themselves are
//! owned by the [`HouseLayout`](crate::layout::HouseLayout). Membership
//! exclusivity (a room in exactly one zone) is a layout invariant enforced
//! there, not here.

use serde::{Deserialize, Serialize};

use crate::error::{DomoError, ValidationError};

/// A group of rooms heated to the same desired temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatingZone {
    name: String,
    desired_temperature: f64,
    room_names: Vec<String>,
}

impl HeatingZone {
    /// Sentinel name of the always-present default zone.
    pub const DEFAULT: &'static str = "Default";

    /// Default desired temperature (°C) for new zones.
    pub const DEFAULT_TEMPERATURE: f64 = 20.0;

    /// Create an empty zone.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::Validation`] when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, DomoError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(Self {
            name,
            desired_temperature: Self::DEFAULT_TEMPERATURE,
            room_names: Vec::new(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is the layout's default zone.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.name == Self::DEFAULT
    }

    /// The zone's desired temperature (°C). Range clamping is the caller's
    /// job; the zone stores whatever it is given.
    #[must_use]
    pub fn desired_temperature(&self) -> f64 {
        self.desired_temperature
    }

    pub fn set_desired_temperature(&mut self, temperature: f64) {
        self.desired_temperature = temperature;
    }

    /// Append a room name, idempotently.
    pub fn add_room(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.contains(&name) {
            self.room_names.push(name);
        }
    }

    /// Remove a room name. No-op when absent.
    pub fn remove_room(&mut self, name: &str) {
        self.room_names.retain(|n| n != name);
    }

    /// Whether the zone holds the named room.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.room_names.iter().any(|n| n == name)
    }

    /// Member room names in insertion order.
    #[must_use]
    pub fn room_names(&self) -> &[String] {
        &self.room_names
    }
}
