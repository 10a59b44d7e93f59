//! Room — a named area holding devices and inhabitants.
//!
//! Rooms are created and removed through
//! [`HouseLayout`](crate::layout::HouseLayout), which owns the name-uniqueness
//! and zone-membership invariants. The only sentinel rule enforced here is
//! that the garage never loses devices.

use serde::{Deserialize, Serialize};

use crate::device::Device;
use crate::error::{DomoError, ForbiddenError, ValidationError};
use crate::geometry::Geometry;
use crate::inhabitant::Inhabitant;

/// Default desired temperature (°C) for freshly-built rooms.
pub const DEFAULT_ROOM_TEMPERATURE: f64 = 20.0;

/// A room in the house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    name: String,
    pub geometry: Geometry,
    devices: Vec<Device>,
    inhabitants: Vec<Inhabitant>,
    desired_temperature: f64,
    is_temperature_overridden: bool,
}

impl Room {
    /// Sentinel name of the always-present outdoors room.
    pub const OUTDOORS: &'static str = "Outdoors";
    /// Sentinel name of the always-present garage room.
    pub const GARAGE: &'static str = "Garage";

    /// Create a builder for constructing a [`Room`].
    #[must_use]
    pub fn builder() -> RoomBuilder {
        RoomBuilder::default()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this room can never be removed from its layout.
    #[must_use]
    pub fn is_permanent(&self) -> bool {
        self.name == Self::OUTDOORS || self.name == Self::GARAGE
    }

    /// Whether devices in this room are locked in place (garage rule).
    #[must_use]
    pub fn is_device_locked(&self) -> bool {
        self.name == Self::GARAGE
    }

    /// Append a device to the room.
    pub fn add_device(&mut self, device: Device) {
        self.devices.push(device);
    }

    /// Remove the first device equal to `device`.
    ///
    /// Removing from an absent device is a no-op, mirroring
    /// [`HeatingZone::remove_room`](crate::heating_zone::HeatingZone::remove_room).
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::Forbidden`] when the room is device-locked.
    pub fn remove_device(&mut self, device: &Device) -> Result<(), DomoError> {
        if self.is_device_locked() {
            return Err(ForbiddenError {
                kind: "room",
                name: self.name.clone(),
                action: "remove devices from",
            }
            .into());
        }
        if let Some(index) = self.devices.iter().position(|d| d == device) {
            self.devices.remove(index);
        }
        Ok(())
    }

    /// Devices in insertion order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Mutable access to the devices, for state changes (not list edits).
    pub fn devices_mut(&mut self) -> &mut [Device] {
        &mut self.devices
    }

    /// Append an inhabitant to the room.
    pub fn add_inhabitant(&mut self, inhabitant: Inhabitant) {
        self.inhabitants.push(inhabitant);
    }

    /// Remove the inhabitant with the given name. No-op when absent.
    pub fn remove_inhabitant(&mut self, name: &str) {
        self.inhabitants.retain(|i| i.name() != name);
    }

    /// Inhabitants in insertion order.
    #[must_use]
    pub fn inhabitants(&self) -> &[Inhabitant] {
        &self.inhabitants
    }

    /// Mutable access to the inhabitants.
    pub fn inhabitants_mut(&mut self) -> &mut [Inhabitant] {
        &mut self.inhabitants
    }

    /// The room's effective desired temperature (°C).
    #[must_use]
    pub fn desired_temperature(&self) -> f64 {
        self.desired_temperature
    }

    pub fn set_desired_temperature(&mut self, temperature: f64) {
        self.desired_temperature = temperature;
    }

    /// Whether the room pins its own temperature independently of its zone.
    #[must_use]
    pub fn is_temperature_overridden(&self) -> bool {
        self.is_temperature_overridden
    }

    /// Set or clear the temperature override. The flag is sticky: only an
    /// explicit call here changes it, never the simulation engine. Once
    /// cleared, the zone temperature flows back in on the next engine pass.
    pub fn set_temperature_overridden(&mut self, overridden: bool) {
        self.is_temperature_overridden = overridden;
    }
}

/// Step-by-step builder for [`Room`].
#[derive(Debug, Default)]
pub struct RoomBuilder {
    name: Option<String>,
    geometry: Option<Geometry>,
    desired_temperature: Option<f64>,
}

impl RoomBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    #[must_use]
    pub fn desired_temperature(mut self, temperature: f64) -> Self {
        self.desired_temperature = Some(temperature);
        self
    }

    /// Consume the builder, validate, and return a [`Room`].
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Room, DomoError> {
        let name = self.name.unwrap_or_default();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(Room {
            name,
            geometry: self.geometry.unwrap_or_default(),
            devices: Vec::new(),
            inhabitants: Vec::new(),
            desired_temperature: self
                .desired_temperature
                .unwrap_or(DEFAULT_ROOM_TEMPERATURE),
            is_temperature_overridden: false,
        })
    }
}
