//! Inhabitant — a person (or intruder) present in a room.

use serde::{Deserialize, Serialize};

use crate::error::{DomoError, ValidationError};

/// A person inside the house. Identity is the display name; the
/// `is_intruder` flag is consumed by security features outside the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inhabitant {
    name: String,
    pub is_intruder: bool,
}

impl Inhabitant {
    /// Create an inhabitant with the given name.
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
            is_intruder: false,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_inhabitant_when_name_provided() {
        let person = Inhabitant::new("Alex").unwrap();
        assert_eq!(person.name(), "Alex");
        assert!(!person.is_intruder);
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Inhabitant::new("");
        assert!(matches!(
            result,
            Err(DomoError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_flag_intruder() {
        let mut person = Inhabitant::new("Unknown").unwrap();
        person.is_intruder = true;
        assert!(person.is_intruder);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let person = Inhabitant::new("Sam").unwrap();
        let json = serde_json::to_string(&person).unwrap();
        let parsed: Inhabitant = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, person);
    }
}
