//! Parking Reserve - reservation registry for a fixed set of parking spaces
//!
//! The [`Registry`] holds the spaces and implements reserve, vacate and the
//! status report. A [`Session`] drives it from the small command language in
//! [`command`], which is what the command-line tool runs.
//!
//! # Example
//!
//! ```rust
//! use parking_reserve::{Registry, RegistryError};
//!
//! let mut registry = Registry::new();
//! let reservation = registry
//!     .reserve("Space 1", "2024-01-01", "10:00-11:00", "Bus")
//!     .unwrap();
//! assert_eq!(reservation.price.value(), 137.5);
//!
//! let again = registry.reserve("Space 1", "2024-01-02", "10:00-11:00", "Car");
//! assert!(matches!(again, Err(RegistryError::SpaceOccupied { .. })));
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod registry;
pub mod session;

pub use command::{parse, Command, Script};
pub use config::{ConfigError, LotConfig};
pub use error::ParseError;
pub use registry::{
    InputField, ParkingSpace, Price, PricingTable, Registry, RegistryError, Reservation,
    SharedRegistry, Vacated, VehicleType,
};
pub use session::{Outcome, Session, SessionConfig};

use thiserror::Error;

/// Errors that can occur while running a script
#[derive(Debug, Error)]
pub enum ScriptError {
    /// Error during parsing
    #[error("parse errors: {}", format_parse_errors(.0))]
    Parse(Vec<ParseError>),

    /// Invalid lot configuration
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl From<Vec<ParseError>> for ScriptError {
    fn from(errors: Vec<ParseError>) -> Self {
        ScriptError::Parse(errors)
    }
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Run a command script against a fresh reference lot
///
/// # Example
///
/// ```rust
/// use parking_reserve::run_script;
///
/// let transcript = run_script(r#"
///     reserve "Space 2" 2024-01-01 09:00-10:00 Car
///     vacate "Space 2"
/// "#).unwrap();
///
/// assert!(transcript.contains("Reserved Space 2"));
/// assert!(transcript.contains("Space 2 has been vacated."));
/// ```
pub fn run_script(source: &str) -> Result<String, ScriptError> {
    run_script_with_config(source, &SessionConfig::default())
}

/// Run a command script with a custom lot and session configuration
pub fn run_script_with_config(source: &str, config: &SessionConfig) -> Result<String, ScriptError> {
    let script = parse(source)?;
    let mut session = Session::with_config(config)?;
    Ok(session.run(&script).join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_script_transcript() {
        let out = run_script(r#"reserve "Space 1" 2024-01-01 10:00-11:00 Bus"#).unwrap();
        assert!(out.starts_with("Reserved Space 1"));
        assert!(out.contains("Current Parking Status:"));
        assert!(out.contains("Space 10: Available ($100.0)"));
    }

    #[test]
    fn test_run_script_parse_error() {
        let result = run_script("reserve");
        assert!(matches!(result, Err(ScriptError::Parse(_))));
    }

    #[test]
    fn test_run_script_config_error() {
        let config = SessionConfig::new().with_lot(LotConfig::default().with_spaces(0));
        let result = run_script_with_config("status", &config);
        assert!(matches!(result, Err(ScriptError::Config(_))));
    }

    #[test]
    fn test_empty_script_produces_nothing() {
        assert_eq!(run_script("").unwrap(), "");
    }
}
