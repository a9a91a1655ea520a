//! A single parking space and its occupancy

use std::fmt;

use super::pricing::Price;

/// What is recorded on a space while it is occupied
#[derive(Debug, Clone, PartialEq)]
pub struct Occupancy {
    /// Date and time slot joined by a single space
    pub reserved_for: String,
    /// Vehicle label as given by the caller
    pub vehicle_type: String,
}

/// One named slot in the lot
///
/// Availability is the absence of an [`Occupancy`], so a space can never
/// be free while still carrying reservation details.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingSpace {
    name: String,
    base_price: Price,
    occupancy: Option<Occupancy>,
}

impl ParkingSpace {
    pub fn new(name: impl Into<String>, base_price: Price) -> Self {
        Self {
            name: name.into(),
            base_price,
            occupancy: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_price(&self) -> Price {
        self.base_price
    }

    pub fn is_available(&self) -> bool {
        self.occupancy.is_none()
    }

    pub fn occupancy(&self) -> Option<&Occupancy> {
        self.occupancy.as_ref()
    }

    /// Reservation text, empty while available
    pub fn reserved_for(&self) -> &str {
        self.occupancy
            .as_ref()
            .map(|o| o.reserved_for.as_str())
            .unwrap_or("")
    }

    /// Vehicle label, empty while available
    pub fn vehicle_type(&self) -> &str {
        self.occupancy
            .as_ref()
            .map(|o| o.vehicle_type.as_str())
            .unwrap_or("")
    }

    pub(crate) fn occupy(&mut self, date: &str, time_slot: &str, vehicle_type: &str) {
        self.occupancy = Some(Occupancy {
            reserved_for: format!("{} {}", date, time_slot),
            vehicle_type: vehicle_type.to_string(),
        });
    }

    pub(crate) fn release(&mut self) -> Option<Occupancy> {
        self.occupancy.take()
    }
}

/// Status line: `<name>: Available ($<price>)` or `<name>: Occupied (<when> by <vehicle>)`
impl fmt::Display for ParkingSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.occupancy {
            None => write!(f, "{}: Available (${})", self.name, self.base_price),
            Some(o) => write!(
                f,
                "{}: Occupied ({} by {})",
                self.name, o.reserved_for, o.vehicle_type
            ),
        }
    }
}
