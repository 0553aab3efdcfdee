//! Optional display peripheral and the pin buses it can occupy.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Physical pin behind the first analog slot: `A0` sits at pin 14.
pub const ANALOG_PIN_OFFSET: u8 = 14;

/// One of the three fixed seven-slot pin buses a display can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bus {
    /// Bus 1: digital slots 2..=8.
    Bus1,
    /// Bus 2: digital slots 10..=13 plus A0..=A2.
    Bus2,
    /// Bus 3: digital slots 10..=13 plus A4, A5 and 1.
    Bus3,
}

impl Bus {
    /// The seven slot labels this bus occupies.
    pub fn slots(self) -> [&'static str; 7] {
        match self {
            Self::Bus1 => ["2", "3", "4", "5", "6", "7", "8"],
            Self::Bus2 => ["10", "11", "12", "13", "A0", "A1", "A2"],
            Self::Bus3 => ["10", "11", "12", "13", "A4", "A5", "1"],
        }
    }

    /// Resolve a user-facing bus number (1..=3).
    pub fn from_number(number: u8) -> Result<Self, ConfigurationError> {
        match number {
            1 => Ok(Self::Bus1),
            2 => Ok(Self::Bus2),
            3 => Ok(Self::Bus3),
            _ => Err(ConfigurationError::InvalidBus { number }),
        }
    }

    /// The physical pin behind a slot label.
    ///
    /// Numeric labels map directly; analog `A<n>` labels sit at `14 + n`.
    pub fn slot_pin(label: &str) -> u8 {
        match label.strip_prefix('A') {
            Some(index) => ANALOG_PIN_OFFSET + index.parse::<u8>().unwrap_or(0),
            None => label.parse().unwrap_or(0),
        }
    }
}

impl std::fmt::Display for Bus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Bus1 => "bus1",
            Self::Bus2 => "bus2",
            Self::Bus3 => "bus3",
        };
        f.write_str(name)
    }
}

/// An auxiliary display wired to a pin bus.
///
/// The display shows the value of a host brick behind a label prefix. It
/// contributes nothing to generated code; it participates in validation
/// because its bus occupies seven physical pins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Display {
    /// Name of the brick whose value is shown.
    pub brick: String,
    /// Label printed before the value.
    pub prefix: String,
    /// The pin bus the display occupies.
    pub bus: Bus,
}
