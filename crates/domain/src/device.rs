//! Device — polymorphic things placed inside rooms.
//!
//! Devices are a closed tagged union keyed by [`DeviceType`] rather than a
//! trait object: dispatch is an explicit `match`, deep clone comes from
//! `#[derive(Clone)]`, and structural equality (kind + opened state +
//! geometry + variant data) comes from `#[derive(PartialEq)]`. Comparing two
//! different variants is simply `false`.

use serde::{Deserialize, Serialize};

use crate::geometry::Geometry;

/// Discriminator for device variants, stable across clone and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Light,
    Door,
    Window,
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Door => f.write_str("door"),
            Self::Window => f.write_str("window"),
        }
    }
}

/// Placement orientation for doors and windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// A light. When `auto_on` is set the simulation engine may toggle
/// `is_opened` based on the time-of-day lighting window; when unset the
/// engine leaves the light alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub is_opened: bool,
    pub auto_on: bool,
    pub geometry: Geometry,
}

impl Light {
    /// Create a closed light at the given placement.
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        Self {
            is_opened: false,
            auto_on: false,
            geometry,
        }
    }
}

/// A door in a room wall.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Door {
    pub is_opened: bool,
    pub geometry: Geometry,
    pub orientation: Orientation,
}

impl Door {
    /// Create a closed door at the given placement.
    #[must_use]
    pub fn new(geometry: Geometry, orientation: Orientation) -> Self {
        Self {
            is_opened: false,
            geometry,
            orientation,
        }
    }
}

/// A window in a room wall.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub is_opened: bool,
    pub geometry: Geometry,
    pub orientation: Orientation,
}

impl Window {
    /// Create a closed window at the given placement.
    #[must_use]
    pub fn new(geometry: Geometry, orientation: Orientation) -> Self {
        Self {
            is_opened: false,
            geometry,
            orientation,
        }
    }
}

/// A device of any kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Device {
    Light(Light),
    Door(Door),
    Window(Window),
}

impl Device {
    /// The discriminator for this variant.
    #[must_use]
    pub fn device_type(&self) -> DeviceType {
        match self {
            Self::Light(_) => DeviceType::Light,
            Self::Door(_) => DeviceType::Door,
            Self::Window(_) => DeviceType::Window,
        }
    }

    /// On/off or open/closed state.
    #[must_use]
    pub fn is_opened(&self) -> bool {
        match self {
            Self::Light(d) => d.is_opened,
            Self::Door(d) => d.is_opened,
            Self::Window(d) => d.is_opened,
        }
    }

    /// Set the on/off or open/closed state. No validation.
    pub fn set_is_opened(&mut self, is_opened: bool) {
        match self {
            Self::Light(d) => d.is_opened = is_opened,
            Self::Door(d) => d.is_opened = is_opened,
            Self::Window(d) => d.is_opened = is_opened,
        }
    }

    /// Placement within the owning room.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        match self {
            Self::Light(d) => d.geometry,
            Self::Door(d) => d.geometry,
            Self::Window(d) => d.geometry,
        }
    }

    /// Move the device.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        match self {
            Self::Light(d) => d.geometry = geometry,
            Self::Door(d) => d.geometry = geometry,
            Self::Window(d) => d.geometry = geometry,
        }
    }

    /// Whether the simulation engine is allowed to drive this device.
    ///
    /// Only lights with the `auto_on` capability flag participate.
    #[must_use]
    pub fn is_auto_capable(&self) -> bool {
        matches!(self, Self::Light(light) if light.auto_on)
    }

    /// Borrow the light data, if this device is a light.
    #[must_use]
    pub fn as_light(&self) -> Option<&Light> {
        match self {
            Self::Light(light) => Some(light),
            _ => None,
        }
    }

    /// Mutably borrow the light data, if this device is a light.
    pub fn as_light_mut(&mut self) -> Option<&mut Light> {
        match self {
            Self::Light(light) => Some(light),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_device_type_per_variant() {
        assert_eq!(
            Device::Light(Light::default()).device_type(),
            DeviceType::Light
        );
        assert_eq!(
            Device::Door(Door::default()).device_type(),
            DeviceType::Door
        );
        assert_eq!(
            Device::Window(Window::default()).device_type(),
            DeviceType::Window
        );
    }

    #[test]
    fn should_toggle_opened_state() {
        let mut device = Device::Light(Light::new(Geometry::at(1, 1)));
        assert!(!device.is_opened());
        device.set_is_opened(true);
        assert!(device.is_opened());
    }

    #[test]
    fn should_compare_equal_when_same_variant_state_and_geometry() {
        let a = Device::Light(Light::new(Geometry::at(1, 1)));
        let b = Device::Light(Light::new(Geometry::at(1, 1)));
        assert_eq!(a, b);
    }

    #[test]
    fn should_compare_unequal_when_state_differs() {
        let a = Device::Light(Light::new(Geometry::at(1, 1)));
        let mut b = a.clone();
        b.set_is_opened(true);
        assert_ne!(a, b);
    }

    #[test]
    fn should_compare_unequal_across_variants() {
        let light = Device::Light(Light::new(Geometry::at(1, 1)));
        let door = Device::Door(Door::new(Geometry::at(1, 1), Orientation::Horizontal));
        assert_ne!(light, door);
    }

    #[test]
    fn should_clone_without_sharing_state() {
        let original = Device::Light(Light::new(Geometry::at(2, 2)));
        let mut copy = original.clone();
        copy.set_is_opened(true);
        copy.set_geometry(Geometry::at(9, 9));

        assert!(!original.is_opened());
        assert_eq!(original.geometry(), Geometry::at(2, 2));
    }

    #[test]
    fn should_mark_only_auto_on_lights_as_auto_capable() {
        let mut light = Light::new(Geometry::at(0, 0));
        assert!(!Device::Light(light.clone()).is_auto_capable());

        light.auto_on = true;
        assert!(Device::Light(light).is_auto_capable());

        let door = Device::Door(Door::default());
        assert!(!door.is_auto_capable());
    }

    #[test]
    fn should_roundtrip_through_serde_json_with_type_tag() {
        let device = Device::Window(Window::new(Geometry::at(3, 4), Orientation::Vertical));
        let json = serde_json::to_string(&device).unwrap();
        assert!(json.contains("\"type\":\"window\""));
        let parsed: Device = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, device);
    }
}
