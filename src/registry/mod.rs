//! Reservation registry: the fixed set of parking spaces
//!
//! Every space is either available or occupied. `reserve` moves an
//! available space to occupied, `vacate` moves it back; calling either on a
//! space in the other state reports a [`RegistryError`] and changes nothing.

mod error;
mod pricing;
mod shared;
mod space;

use std::fmt;

pub use error::{InputField, RegistryError};
pub use pricing::{format_decimal, Price, PricingTable, VehicleType};
pub use shared::SharedRegistry;
pub use space::{Occupancy, ParkingSpace};

use crate::config::{ConfigError, LotConfig};

/// A confirmed reservation
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub space: String,
    pub date: String,
    pub time_slot: String,
    pub vehicle_type: String,
    pub price: Price,
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reserved {} for {} {} for a {} at ${}",
            self.space, self.date, self.time_slot, self.vehicle_type, self.price
        )
    }
}

/// A space returned to the available state
#[derive(Debug, Clone, PartialEq)]
pub struct Vacated {
    pub space: String,
    /// What was recorded on the space before it was cleared
    pub previous: Occupancy,
}

impl fmt::Display for Vacated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has been vacated.", self.space)
    }
}

/// Ordered collection of parking spaces
///
/// Spaces keep their creation order, which is also the order of
/// [`Registry::status_report`]. Spaces are never added or removed once the
/// registry is built.
#[derive(Debug, Clone)]
pub struct Registry {
    spaces: Vec<ParkingSpace>,
    pricing: PricingTable,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Build the reference lot: "Space 1".."Space 10", all available
    pub fn new() -> Self {
        Self::build(&LotConfig::default())
    }

    /// Build a lot from a configuration, rejecting layouts that would break
    /// the positive-price or vacatable-name rules
    pub fn from_config(config: &LotConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &LotConfig) -> Self {
        let spaces: Vec<_> = config
            .layout()
            .map(|(name, price)| ParkingSpace::new(name, price))
            .collect();
        tracing::debug!(spaces = spaces.len(), "registry initialized");
        Self {
            spaces,
            pricing: config.pricing.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    pub fn spaces(&self) -> &[ParkingSpace] {
        &self.spaces
    }

    pub fn pricing(&self) -> &PricingTable {
        &self.pricing
    }

    /// Space identifiers in creation order
    pub fn space_names(&self) -> impl Iterator<Item = &str> {
        self.spaces.iter().map(|s| s.name())
    }

    pub fn get(&self, name: &str) -> Option<&ParkingSpace> {
        self.spaces.iter().find(|s| s.name() == name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut ParkingSpace> {
        self.spaces.iter_mut().find(|s| s.name() == name)
    }

    pub fn available_count(&self) -> usize {
        self.spaces.iter().filter(|s| s.is_available()).count()
    }

    /// Reserve `space` for a date, time slot and vehicle
    ///
    /// `date` and `time_slot` are trimmed; beyond that they are free text.
    /// Vehicle labels outside [`VehicleType::ALL`] are accepted and priced
    /// like a car.
    pub fn reserve(
        &mut self,
        space: &str,
        date: &str,
        time_slot: &str,
        vehicle_type: &str,
    ) -> Result<Reservation, RegistryError> {
        let date = date.trim();
        let time_slot = time_slot.trim();
        let vehicle_type = vehicle_type.trim();

        let missing = if date.is_empty() {
            Some(InputField::Date)
        } else if time_slot.is_empty() {
            Some(InputField::TimeSlot)
        } else if vehicle_type.is_empty() {
            Some(InputField::VehicleType)
        } else if space.is_empty() {
            Some(InputField::Space)
        } else {
            None
        };
        if let Some(field) = missing {
            tracing::debug!(%field, "reservation rejected: missing field");
            return Err(RegistryError::invalid(field));
        }

        let Some(entry) = self.spaces.iter_mut().find(|s| s.name() == space) else {
            tracing::debug!(space, "reservation rejected: unknown space");
            return Err(RegistryError::invalid(InputField::Space));
        };
        if !entry.is_available() {
            tracing::debug!(space, "reservation rejected: space occupied");
            return Err(RegistryError::occupied(space));
        }

        let price = self.pricing.price(entry.base_price(), vehicle_type);
        entry.occupy(date, time_slot, vehicle_type);
        tracing::info!(space, date, time_slot, vehicle_type, %price, "space reserved");

        Ok(Reservation {
            space: space.to_string(),
            date: date.to_string(),
            time_slot: time_slot.to_string(),
            vehicle_type: vehicle_type.to_string(),
            price,
        })
    }

    /// Free an occupied space; the name is trimmed before lookup
    pub fn vacate(&mut self, space: &str) -> Result<Vacated, RegistryError> {
        let space = space.trim();
        let Some(entry) = self.get_mut(space) else {
            tracing::debug!(space, "vacate rejected: unknown space");
            return Err(RegistryError::unknown(space));
        };

        match entry.release() {
            Some(previous) => {
                tracing::info!(space, "space vacated");
                Ok(Vacated {
                    space: space.to_string(),
                    previous,
                })
            }
            None => Err(RegistryError::already_available(space)),
        }
    }

    /// One status line per space, in creation order
    pub fn status_report(&self) -> Vec<String> {
        self.spaces.iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_lot() {
        let registry = Registry::new();
        assert_eq!(registry.len(), 10);
        assert_eq!(registry.available_count(), 10);
        let names: Vec<_> = registry.space_names().collect();
        assert_eq!(names.first(), Some(&"Space 1"));
        assert_eq!(names.last(), Some(&"Space 10"));
        assert_eq!(registry.get("Space 3").map(|s| s.base_price()), Some(Price(65.0)));
    }

    #[test]
    fn test_reserve_prices_by_vehicle() {
        let mut registry = Registry::new();
        let r = registry
            .reserve("Space 1", "2024-01-01", "10:00-11:00", "Bus")
            .unwrap();
        assert_eq!(r.price, Price(137.5));
        assert_eq!(
            r.to_string(),
            "Reserved Space 1 for 2024-01-01 10:00-11:00 for a Bus at $137.5"
        );
    }

    #[test]
    fn test_reserve_trims_date_and_slot() {
        let mut registry = Registry::new();
        registry
            .reserve("Space 4", "  2024-03-03 ", " 08:00-09:00", "Auto")
            .unwrap();
        assert_eq!(
            registry.get("Space 4").unwrap().reserved_for(),
            "2024-03-03 08:00-09:00"
        );
    }

    #[test]
    fn test_reserve_reports_first_missing_field() {
        let mut registry = Registry::new();
        let err = registry.reserve("Space 1", "2024-01-01", "", "Car").unwrap_err();
        assert_eq!(err, RegistryError::invalid(InputField::TimeSlot));
        let err = registry.reserve("", "2024-01-01", "10:00", "Car").unwrap_err();
        assert_eq!(err, RegistryError::invalid(InputField::Space));
    }

    #[test]
    fn test_reserve_unknown_space_is_invalid_input() {
        let mut registry = Registry::new();
        let err = registry
            .reserve("Space 11", "2024-01-01", "10:00", "Car")
            .unwrap_err();
        assert_eq!(err, RegistryError::invalid(InputField::Space));
    }

    #[test]
    fn test_reserve_unknown_vehicle_uses_car_rate() {
        let mut registry = Registry::new();
        let r = registry
            .reserve("Space 2", "2024-01-01", "10:00", "Tractor")
            .unwrap();
        assert_eq!(r.price, Price(60.0));
        assert_eq!(registry.get("Space 2").unwrap().vehicle_type(), "Tractor");
    }

    #[test]
    fn test_vacate_trims_name() {
        let mut registry = Registry::new();
        registry.reserve("Space 5", "2024-01-01", "10:00", "Lorry").unwrap();
        let vacated = registry.vacate("  Space 5  ").unwrap();
        assert_eq!(vacated.to_string(), "Space 5 has been vacated.");
        assert_eq!(vacated.previous.vehicle_type, "Lorry");
    }

    #[test]
    fn test_vacate_empty_name_is_unknown() {
        let mut registry = Registry::new();
        assert_eq!(
            registry.vacate("   ").unwrap_err(),
            RegistryError::unknown("")
        );
    }

    #[test]
    fn test_status_report_lines() {
        let mut registry = Registry::new();
        registry
            .reserve("Space 2", "2024-01-01", "09:00-10:00", "Car")
            .unwrap();
        let report = registry.status_report();
        assert_eq!(report[0], "Space 1: Available ($55.0)");
        assert_eq!(report[1], "Space 2: Occupied (2024-01-01 09:00-10:00 by Car)");
        assert_eq!(report[9], "Space 10: Available ($100.0)");
    }

    #[test]
    fn test_custom_lot() {
        let config = LotConfig::default()
            .with_spaces(3)
            .with_name_prefix("Bay")
            .with_prices(10.0, 10.0);
        let registry = Registry::from_config(&config).expect("Should build");
        assert_eq!(
            registry.status_report(),
            vec![
                "Bay 1: Available ($20.0)",
                "Bay 2: Available ($30.0)",
                "Bay 3: Available ($40.0)",
            ]
        );
    }

    #[test]
    fn test_from_config_rejects_invalid_lot() {
        let negative = LotConfig::default().with_prices(-100.0, 5.0);
        assert!(matches!(
            Registry::from_config(&negative),
            Err(ConfigError::InvalidValue { .. })
        ));

        let empty = LotConfig::default().with_spaces(0);
        assert!(Registry::from_config(&empty).is_err());
    }

    #[test]
    fn test_configured_space_can_be_vacated() {
        let config = LotConfig::default().with_spaces(2).with_name_prefix("Bay");
        let mut registry = Registry::from_config(&config).expect("Should build");
        registry.reserve("Bay 1", "2024-01-01", "10:00", "Car").unwrap();
        assert!(registry.vacate("Bay 1").is_ok());
        assert!(registry.get("Bay 1").unwrap().is_available());
    }
}
