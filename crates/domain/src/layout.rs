//! House layout — the aggregate root of the virtual house.
//!
//! Owns every room and heating zone and enforces the structural invariants:
//!
//! 1. Room names are unique within a layout.
//! 2. Zone names are unique; exactly one default zone exists, at index 0.
//! 3. Every room belongs to exactly one zone.
//! 4. `Outdoors` and `Garage` always exist and can never be removed.
//!
//! Multi-step mutations (room moves, zone removal) validate everything up
//! front and either apply fully or leave the layout untouched. Editing UIs
//! work on a [`Clone`] of the layout and commit by saving; structural
//! equality (`PartialEq`) is the change-detection primitive.

use serde::{Deserialize, Serialize};

use crate::error::{DomoError, DuplicateNameError, ForbiddenError, NotFoundError, ValidationError};
use crate::heating_zone::HeatingZone;
use crate::id::LayoutId;
use crate::inhabitant::Inhabitant;
use crate::room::Room;

/// The full virtual house: rooms, zones, devices, inhabitants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseLayout {
    id: LayoutId,
    name: String,
    rooms: Vec<Room>,
    zones: Vec<HeatingZone>,
}

impl HouseLayout {
    /// Create a layout with the permanent rooms and the default zone.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::Validation`] when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, DomoError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        let outdoors = Room::builder().name(Room::OUTDOORS).build()?;
        let garage = Room::builder().name(Room::GARAGE).build()?;

        let mut default_zone = HeatingZone::new(HeatingZone::DEFAULT)?;
        default_zone.add_room(Room::OUTDOORS);
        default_zone.add_room(Room::GARAGE);

        Ok(Self {
            id: LayoutId::new(),
            name,
            rooms: vec![outdoors, garage],
            zones: vec![default_zone],
        })
    }

    #[must_use]
    pub fn id(&self) -> LayoutId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    // ── Rooms ──────────────────────────────────────────────────────

    /// Add a room and place it in the default zone.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::Duplicate`] when a room with the same name
    /// already exists; the layout is left unchanged.
    pub fn add_room(&mut self, room: Room) -> Result<(), DomoError> {
        if self.room(room.name()).is_some() {
            return Err(DuplicateNameError {
                kind: "room",
                name: room.name().to_string(),
            }
            .into());
        }
        self.default_zone_mut().add_room(room.name());
        self.rooms.push(room);
        Ok(())
    }

    /// Remove a room, including its zone membership.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::Forbidden`] for the permanent rooms and
    /// [`DomoError::NotFound`] when no room has that name.
    pub fn remove_room(&mut self, name: &str) -> Result<(), DomoError> {
        let room = self.room(name).ok_or_else(|| NotFoundError {
            kind: "room",
            name: name.to_string(),
        })?;
        if room.is_permanent() {
            return Err(ForbiddenError {
                kind: "room",
                name: name.to_string(),
                action: "remove",
            }
            .into());
        }
        for zone in &mut self.zones {
            zone.remove_room(name);
        }
        self.rooms.retain(|r| r.name() != name);
        Ok(())
    }

    /// Look up a room by name.
    #[must_use]
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.name() == name)
    }

    /// Look up a room by name, mutably.
    pub fn room_mut(&mut self, name: &str) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.name() == name)
    }

    /// Rooms in insertion order (the permanent rooms come first).
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Mutable access to the rooms, for device/temperature edits.
    pub fn rooms_mut(&mut self) -> &mut [Room] {
        &mut self.rooms
    }

    // ── Heating zones ──────────────────────────────────────────────

    /// Add an empty heating zone.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::Duplicate`] when a zone with the same name
    /// already exists, and [`DomoError::Validation`] when `name` is empty.
    pub fn add_heating_zone(&mut self, name: impl Into<String>) -> Result<(), DomoError> {
        let name = name.into();
        if self.heating_zone(&name).is_some() {
            return Err(DuplicateNameError {
                kind: "heating zone",
                name,
            }
            .into());
        }
        self.zones.push(HeatingZone::new(name)?);
        Ok(())
    }

    /// Remove a zone, re-homing its member rooms into the default zone.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::Forbidden`] for the default zone and
    /// [`DomoError::NotFound`] when no zone has that name.
    pub fn remove_heating_zone(&mut self, name: &str) -> Result<(), DomoError> {
        if name == HeatingZone::DEFAULT {
            return Err(ForbiddenError {
                kind: "heating zone",
                name: name.to_string(),
                action: "remove",
            }
            .into());
        }
        let index = self
            .zones
            .iter()
            .position(|z| z.name() == name)
            .ok_or_else(|| NotFoundError {
                kind: "heating zone",
                name: name.to_string(),
            })?;

        let zone = self.zones.remove(index);
        for room_name in zone.room_names() {
            self.default_zone_mut().add_room(room_name.clone());
        }
        Ok(())
    }

    /// Look up a zone by name.
    #[must_use]
    pub fn heating_zone(&self, name: &str) -> Option<&HeatingZone> {
        self.zones.iter().find(|z| z.name() == name)
    }

    /// Look up a zone by name, mutably.
    pub fn heating_zone_mut(&mut self, name: &str) -> Option<&mut HeatingZone> {
        self.zones.iter_mut().find(|z| z.name() == name)
    }

    /// Zones in creation order; index 0 is always the default zone.
    #[must_use]
    pub fn heating_zones(&self) -> &[HeatingZone] {
        &self.zones
    }

    /// The always-present default zone.
    #[must_use]
    pub fn default_zone(&self) -> &HeatingZone {
        &self.zones[0]
    }

    fn default_zone_mut(&mut self) -> &mut HeatingZone {
        &mut self.zones[0]
    }

    /// The zone currently holding the named room.
    #[must_use]
    pub fn zone_of(&self, room_name: &str) -> Option<&HeatingZone> {
        self.zones.iter().find(|z| z.contains(room_name))
    }

    /// Move a room into another zone, atomically leaving its current one.
    ///
    /// `clear_override` additionally drops the room's temperature override
    /// so the destination zone's setpoint takes effect on the next engine
    /// pass; callers that want the pinned temperature to survive the move
    /// pass `false`.
    ///
    /// # Errors
    ///
    /// Returns [`DomoError::NotFound`] when either the room or the
    /// destination zone does not exist; nothing is mutated in that case.
    pub fn move_room(
        &mut self,
        room_name: &str,
        to_zone: &str,
        clear_override: bool,
    ) -> Result<(), DomoError> {
        if self.room(room_name).is_none() {
            return Err(NotFoundError {
                kind: "room",
                name: room_name.to_string(),
            }
            .into());
        }
        if self.heating_zone(to_zone).is_none() {
            return Err(NotFoundError {
                kind: "heating zone",
                name: to_zone.to_string(),
            }
            .into());
        }

        for zone in &mut self.zones {
            zone.remove_room(room_name);
        }
        if let Some(zone) = self.heating_zone_mut(to_zone) {
            zone.add_room(room_name);
        }
        if clear_override
            && let Some(room) = self.room_mut(room_name)
        {
            room.set_temperature_overridden(false);
        }
        Ok(())
    }

    // ── Inhabitants ────────────────────────────────────────────────

    /// Every inhabitant in the house, in room order then insertion order.
    #[must_use]
    pub fn all_inhabitants(&self) -> Vec<&Inhabitant> {
        self.rooms.iter().flat_map(Room::inhabitants).collect()
    }
}
