//! Lot configuration
//!
//! The default configuration is the reference lot: ten spaces named
//! "Space 1".."Space 10" priced `50 + 5 * i`, with the standard vehicle
//! multipliers. A TOML file can change the layout or override multipliers:
//!
//! ```toml
//! [lot]
//! spaces = 4
//! name_prefix = "Bay"
//! base_price = 20.0
//! price_step = 2.5
//!
//! [multipliers]
//! Bus = 3.0
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::registry::{Price, PricingTable, VehicleType};

/// Largest lot a configuration may describe
pub const MAX_SPACES: usize = 10_000;

/// Errors that can occur when loading or validating a lot configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
    #[error("unknown vehicle type '{0}' in [multipliers]")]
    UnknownVehicle(String),
}

impl ConfigError {
    fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Layout and pricing of the lot
#[derive(Debug, Clone, PartialEq)]
pub struct LotConfig {
    /// Number of spaces
    pub spaces: usize,
    /// Names are `<prefix> <n>` for n in 1..=spaces
    pub name_prefix: String,
    /// Space n costs `base_price + n * price_step`
    pub base_price: f64,
    pub price_step: f64,
    /// Vehicle multipliers
    pub pricing: PricingTable,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    lot: Option<TomlLot>,
    multipliers: Option<HashMap<String, f64>>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlLot {
    spaces: Option<usize>,
    name_prefix: Option<String>,
    base_price: Option<f64>,
    price_step: Option<f64>,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            spaces: 10,
            name_prefix: "Space".to_string(),
            base_price: 50.0,
            price_step: 5.0,
            pricing: PricingTable::default(),
        }
    }
}

impl FromStr for LotConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = LotConfig::default();

        if let Some(lot) = parsed.lot {
            if let Some(spaces) = lot.spaces {
                config.spaces = spaces;
            }
            if let Some(prefix) = lot.name_prefix {
                config.name_prefix = prefix;
            }
            if let Some(base) = lot.base_price {
                config.base_price = base;
            }
            if let Some(step) = lot.price_step {
                config.price_step = step;
            }
        }

        for (label, multiplier) in parsed.multipliers.unwrap_or_default() {
            let vehicle = VehicleType::from_label(&label)
                .ok_or_else(|| ConfigError::UnknownVehicle(label.clone()))?;
            if !(multiplier.is_finite() && multiplier > 0.0) {
                return Err(ConfigError::invalid(
                    format!("multipliers.{}", label),
                    "must be a positive number",
                ));
            }
            config.pricing = config.pricing.with_multiplier(vehicle, multiplier);
        }

        config.validate()?;
        Ok(config)
    }
}

impl LotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Set the number of spaces
    pub fn with_spaces(mut self, spaces: usize) -> Self {
        self.spaces = spaces;
        self
    }

    /// Set the name prefix
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    /// Set the base price and per-space step
    pub fn with_prices(mut self, base_price: f64, price_step: f64) -> Self {
        self.base_price = base_price;
        self.price_step = price_step;
        self
    }

    /// Set the multiplier table
    pub fn with_pricing(mut self, pricing: PricingTable) -> Self {
        self.pricing = pricing;
        self
    }

    /// Check the lot size, the name prefix and that every price is positive
    ///
    /// Space names must survive the trimming `vacate` applies, so the prefix
    /// may not start or end with whitespace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spaces == 0 {
            return Err(ConfigError::invalid("lot.spaces", "must be at least 1"));
        }
        if self.spaces > MAX_SPACES {
            return Err(ConfigError::invalid(
                "lot.spaces",
                format!("must be at most {}", MAX_SPACES),
            ));
        }
        if self.name_prefix.trim().is_empty() {
            return Err(ConfigError::invalid("lot.name_prefix", "must not be empty"));
        }
        if self.name_prefix != self.name_prefix.trim() {
            return Err(ConfigError::invalid(
                "lot.name_prefix",
                "must not start or end with whitespace",
            ));
        }
        if !(self.base_price.is_finite() && self.price_step.is_finite()) {
            return Err(ConfigError::invalid("lot.base_price", "must be finite"));
        }
        if let Some((name, price)) = self.layout().find(|(_, p)| p.value() <= 0.0) {
            return Err(ConfigError::invalid(
                "lot.base_price",
                format!("{} would cost {}", name, price),
            ));
        }
        Ok(())
    }

    /// Space names and base prices in creation order
    pub fn layout(&self) -> impl Iterator<Item = (String, Price)> + '_ {
        (1..=self.spaces).map(move |i| {
            (
                format!("{} {}", self.name_prefix, i),
                Price(self.base_price + i as f64 * self.price_step),
            )
        })
    }
}
