//! Digital signal levels.

use serde::{Deserialize, Serialize};

/// A digital level read from a sensor or written to an actuator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    /// Logical high.
    High,
    /// Logical low.
    Low,
}

impl Signal {
    /// The Wiring token for this level.
    pub fn as_wiring(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Low => "LOW",
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wiring())
    }
}
