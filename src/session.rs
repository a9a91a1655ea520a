//! Session: runs commands against a registry and renders the transcript

use crate::command::{Command, ReserveCommand, Script};
use crate::config::{ConfigError, LotConfig};
use crate::registry::{format_decimal, Registry, VehicleType};

/// Header of the status block
pub const STATUS_HEADER: &str = "Current Parking Status:";

/// Configuration for a session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Lot layout and pricing
    pub lot: LotConfig,
    /// Redisplay the full status after each successful reserve/vacate
    pub show_status: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            lot: LotConfig::default(),
            show_status: true,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lot configuration
    pub fn with_lot(mut self, lot: LotConfig) -> Self {
        self.lot = lot;
        self
    }

    /// Enable or disable the status redisplay
    pub fn with_show_status(mut self, show: bool) -> Self {
        self.show_status = show;
        self
    }
}

/// Result of executing one command
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub lines: Vec<String>,
    /// Set by `quit`
    pub quit: bool,
}

impl Outcome {
    fn text(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }
}

/// Owns a registry and turns commands into transcript lines
#[derive(Debug, Clone)]
pub struct Session {
    registry: Registry,
    show_status: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Session over the reference lot
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            show_status: true,
        }
    }

    pub fn with_config(config: &SessionConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            registry: Registry::from_config(&config.lot)?,
            show_status: config.show_status,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Status header, one line per space, then a blank line
    pub fn status_block(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.registry.len() + 2);
        lines.push(STATUS_HEADER.to_string());
        lines.extend(self.registry.status_report());
        lines.push(String::new());
        lines
    }

    pub fn execute(&mut self, command: &Command) -> Outcome {
        match command {
            Command::Reserve(reserve) => self.reserve(reserve),
            Command::Vacate { space } => self.vacate(&space.node),
            Command::Status => Outcome::text(self.status_block()),
            Command::Spaces => Outcome::text(vec![format!(
                "Spaces: {}",
                self.registry.space_names().collect::<Vec<_>>().join(", ")
            )]),
            Command::Vehicles => Outcome::text(self.vehicle_lines()),
            Command::Help => Outcome::text(help_lines()),
            Command::Quit => Outcome {
                lines: Vec::new(),
                quit: true,
            },
        }
    }

    /// Execute every command up to the end of the script or the first `quit`
    pub fn run(&mut self, script: &Script) -> Vec<String> {
        let mut transcript = Vec::new();
        for command in &script.commands {
            let outcome = self.execute(&command.node);
            transcript.extend(outcome.lines);
            if outcome.quit {
                break;
            }
        }
        transcript
    }

    fn reserve(&mut self, cmd: &ReserveCommand) -> Outcome {
        let result = self.registry.reserve(
            &cmd.space.node,
            &cmd.date.node,
            &cmd.time_slot.node,
            &cmd.vehicle.node,
        );
        match result {
            Ok(reservation) => self.confirm(reservation.to_string()),
            Err(e) => Outcome::text(vec![e.to_string()]),
        }
    }

    fn vacate(&mut self, space: &str) -> Outcome {
        match self.registry.vacate(space) {
            Ok(vacated) => self.confirm(vacated.to_string()),
            Err(e) => Outcome::text(vec![e.to_string()]),
        }
    }

    fn confirm(&self, message: String) -> Outcome {
        let mut lines = vec![message];
        if self.show_status {
            lines.extend(self.status_block());
        }
        Outcome::text(lines)
    }

    fn vehicle_lines(&self) -> Vec<String> {
        let pricing = self.registry.pricing();
        let mut lines = vec!["Vehicle types:".to_string()];
        lines.extend(
            VehicleType::ALL
                .into_iter()
                .map(|v| format!("  {} (x{})", v, format_decimal(pricing.multiplier_for(v)))),
        );
        lines
    }
}

fn help_lines() -> Vec<String> {
    [
        "Commands:",
        "  reserve <space> <date> <time-slot> <vehicle>   e.g. reserve \"Space 1\" 2024-01-01 10:00-11:00 Car",
        "  vacate <space>                                 e.g. vacate \"Space 1\"",
        "  status                                         show every space",
        "  spaces                                         list space names",
        "  vehicles                                       list vehicle types and multipliers",
        "  quit                                           stop",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
