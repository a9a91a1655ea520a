//! Error types for registry operations

use std::fmt;

use thiserror::Error;

/// Reservation field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Space,
    Date,
    TimeSlot,
    VehicleType,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputField::Space => "space",
            InputField::Date => "date",
            InputField::TimeSlot => "time slot",
            InputField::VehicleType => "vehicle type",
        })
    }
}

/// Conditions reported by reserve and vacate
///
/// None of these leave the registry modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A reservation field is empty or the space is not registered
    #[error("Please enter valid date, time slot, vehicle type, and select a parking space.")]
    InvalidInput { field: InputField },

    /// The reservation target is already occupied
    #[error("Selected space is already occupied.")]
    SpaceOccupied { space: String },

    /// The vacate target is not a registered space
    #[error("Invalid parking space: {space}")]
    UnknownSpace { space: String },

    /// The vacate target is already free
    #[error("{space} is already available.")]
    AlreadyAvailable { space: String },
}

impl RegistryError {
    pub fn invalid(field: InputField) -> Self {
        Self::InvalidInput { field }
    }

    pub fn occupied(space: impl Into<String>) -> Self {
        Self::SpaceOccupied {
            space: space.into(),
        }
    }

    pub fn unknown(space: impl Into<String>) -> Self {
        Self::UnknownSpace {
            space: space.into(),
        }
    }

    pub fn already_available(space: impl Into<String>) -> Self {
        Self::AlreadyAvailable {
            space: space.into(),
        }
    }

    /// True for conditions that are reported but are not failures
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::AlreadyAvailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = RegistryError::invalid(InputField::Date);
        assert_eq!(
            err.to_string(),
            "Please enter valid date, time slot, vehicle type, and select a parking space."
        );
    }

    #[test]
    fn test_unknown_space_display() {
        let err = RegistryError::unknown("Space 42");
        assert_eq!(err.to_string(), "Invalid parking space: Space 42");
    }

    #[test]
    fn test_already_available_is_informational() {
        assert!(RegistryError::already_available("Space 1").is_informational());
        assert!(!RegistryError::occupied("Space 1").is_informational());
        assert!(!RegistryError::unknown("x").is_informational());
    }
}
