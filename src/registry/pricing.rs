//! Vehicle categories and the price multiplier table

use std::collections::HashMap;
use std::fmt;

/// Vehicle categories offered by the lot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleType {
    Car,
    TwoWheeler,
    Lorry,
    Bus,
    Auto,
}

impl VehicleType {
    /// Every category, in the order selection UIs list them
    pub const ALL: [VehicleType; 5] = [
        VehicleType::Car,
        VehicleType::TwoWheeler,
        VehicleType::Lorry,
        VehicleType::Bus,
        VehicleType::Auto,
    ];

    /// Canonical label, as shown to users and recorded on a space
    pub fn label(self) -> &'static str {
        match self {
            VehicleType::Car => "Car",
            VehicleType::TwoWheeler => "Two-Wheeler",
            VehicleType::Lorry => "Lorry",
            VehicleType::Bus => "Bus",
            VehicleType::Auto => "Auto",
        }
    }

    /// Look up a category by its exact label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.label() == label)
    }

    /// Multiplier used when no table overrides it
    pub fn default_multiplier(self) -> f64 {
        match self {
            VehicleType::Car => 1.0,
            VehicleType::TwoWheeler => 0.5,
            VehicleType::Lorry => 2.0,
            VehicleType::Bus => 2.5,
            VehicleType::Auto => 0.75,
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-vehicle multipliers applied to a space's base price
#[derive(Debug, Clone, PartialEq)]
pub struct PricingTable {
    multipliers: HashMap<VehicleType, f64>,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            multipliers: VehicleType::ALL
                .into_iter()
                .map(|v| (v, v.default_multiplier()))
                .collect(),
        }
    }
}

impl PricingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the multiplier for one category
    pub fn with_multiplier(mut self, vehicle: VehicleType, multiplier: f64) -> Self {
        self.multipliers.insert(vehicle, multiplier);
        self
    }

    /// Multiplier for a known category
    pub fn multiplier_for(&self, vehicle: VehicleType) -> f64 {
        self.multipliers
            .get(&vehicle)
            .copied()
            .unwrap_or_else(|| vehicle.default_multiplier())
    }

    /// Multiplier for a free-text vehicle label
    ///
    /// Labels outside the known set are priced like a car.
    pub fn multiplier(&self, label: &str) -> f64 {
        let vehicle = VehicleType::from_label(label).unwrap_or(VehicleType::Car);
        self.multiplier_for(vehicle)
    }

    /// Final price for a space of `base_price` booked for `label`
    pub fn price(&self, base_price: Price, label: &str) -> Price {
        Price(base_price.0 * self.multiplier(label))
    }
}

/// A monetary amount in the lot's currency
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(pub f64);

impl Price {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_decimal(self.0))
    }
}

/// Decimal text as receipts show it
///
/// Whole amounts keep one decimal place ("55.0"), fractional amounts print
/// their shortest exact form ("137.5"). Magnitudes of 10^7 and above, or
/// below 10^-3, switch to scientific form ("1.0E7", "2.5E-4").
pub fn format_decimal(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-3..1e7).contains(&magnitude) {
        let sci = format!("{:e}", value);
        let (mantissa, exponent) = sci.split_once('e').unwrap_or((&sci, "0"));
        if mantissa.contains('.') {
            format!("{}E{}", mantissa, exponent)
        } else {
            format!("{}.0E{}", mantissa, exponent)
        }
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
