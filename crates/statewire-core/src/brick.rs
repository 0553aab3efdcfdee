//! Bricks: physical I/O devices attached to a pin.

use serde::{Deserialize, Serialize};

/// Lowest pin a brick may occupy.
pub const PIN_MIN: u8 = 1;

/// Highest pin a brick may occupy.
pub const PIN_MAX: u8 = 12;

/// A physical device wired to a single pin.
///
/// Declaration order within an [`App`](crate::App) is significant: the code
/// generator emits per-brick declarations and pin setup in this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Brick {
    /// A readable input device.
    Sensor {
        /// Brick name, unique across the app.
        name: String,
        /// Physical pin the sensor is wired to.
        pin: u8,
    },
    /// A writable output device.
    Actuator {
        /// Brick name, unique across the app.
        name: String,
        /// Physical pin the actuator is wired to.
        pin: u8,
    },
}

impl Brick {
    /// The brick's name.
    pub fn name(&self) -> &str {
        match self {
            Self::Sensor { name, .. } | Self::Actuator { name, .. } => name,
        }
    }

    /// The physical pin this brick occupies.
    pub fn pin(&self) -> u8 {
        match self {
            Self::Sensor { pin, .. } | Self::Actuator { pin, .. } => *pin,
        }
    }

    /// Whether this brick is readable.
    pub fn is_sensor(&self) -> bool {
        matches!(self, Self::Sensor { .. })
    }

    /// A name+pin snapshot usable as a non-owning reference.
    pub fn to_ref(&self) -> BrickRef {
        BrickRef {
            name: self.name().to_string(),
            pin: self.pin(),
        }
    }
}

/// A brick reference snapshotted at construction time.
///
/// Carries both the name (for generated identifiers) and the pin (so the
/// code generator never performs a lookup). Resolved once by the builder,
/// never re-resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickRef {
    /// Name of the referenced brick.
    pub name: String,
    /// Physical pin of the referenced brick.
    pub pin: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_across_variants() {
        let sensor = Brick::Sensor {
            name: "button".to_string(),
            pin: 9,
        };
        let actuator = Brick::Actuator {
            name: "led".to_string(),
            pin: 10,
        };

        assert_eq!(sensor.name(), "button");
        assert_eq!(sensor.pin(), 9);
        assert!(sensor.is_sensor());

        assert_eq!(actuator.name(), "led");
        assert_eq!(actuator.pin(), 10);
        assert!(!actuator.is_sensor());
    }

    #[test]
    fn test_as_ref_snapshots_name_and_pin() {
        let brick = Brick::Actuator {
            name: "buzzer".to_string(),
            pin: 11,
        };
        let r = brick.to_ref();
        assert_eq!(r.name, "buzzer");
        assert_eq!(r.pin, 11);
    }
}
