//! Physical pin-conflict validation.

use std::collections::HashSet;

use crate::app::App;
use crate::display::Bus;
use crate::error::{ConfigurationError, Result};

/// Check that no two physical pin consumers share a pin.
///
/// Every brick occupies its own pin; a display additionally occupies the
/// seven pins behind its bus slots. The first collision fails with an error
/// naming the offender. Generation must not proceed for an app that fails
/// here.
pub fn validate(app: &App) -> Result<()> {
    let mut used: HashSet<u8> = HashSet::new();

    for brick in app.bricks() {
        if !used.insert(brick.pin()) {
            return Err(ConfigurationError::PinConflict {
                brick: brick.name().to_string(),
                pin: brick.pin(),
            });
        }
    }

    if let Some(display) = app.display() {
        for slot in display.bus.slots() {
            let pin = Bus::slot_pin(slot);
            if !used.insert(pin) {
                return Err(ConfigurationError::DisplayPinConflict {
                    brick: display.brick.clone(),
                    bus: display.bus,
                    slot: slot.to_string(),
                    pin,
                });
            }
        }
    }

    tracing::debug!("'{}': {} occupied pins, no conflicts", app.name(), used.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::AppBuilder;
    use crate::signal::Signal;

    fn minimal(pin_a: u8, pin_b: u8) -> App {
        AppBuilder::new("pins")
            .sensor("button", pin_a)
            .unwrap()
            .actuator("led", pin_b)
            .unwrap()
            .state("idle")
            .initial()
            .set("led", Signal::Low)
            .done()
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_distinct_pins_pass() {
        assert!(validate(&minimal(9, 10)).is_ok());
    }

    #[test]
    fn test_conflicting_bricks_fail_with_offender() {
        let err = validate(&minimal(9, 9)).unwrap_err();
        match err {
            ConfigurationError::PinConflict { brick, pin } => {
                assert_eq!(brick, "led");
                assert_eq!(pin, 9);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_display_expands_bus_pins() {
        // bus1 occupies pins 2..=8; a brick on 5 collides with a slot
        let app = AppBuilder::new("lcd_clash")
            .sensor("moisture", 5)
            .unwrap()
            .actuator("pump", 9)
            .unwrap()
            .state("idle")
            .initial()
            .set("pump", Signal::Low)
            .done()
            .unwrap()
            .display("moisture", "moisture", 1)
            .unwrap()
            .build()
            .unwrap();

        let err = validate(&app).unwrap_err();
        match err {
            ConfigurationError::DisplayPinConflict {
                brick,
                bus,
                slot,
                pin,
            } => {
                assert_eq!(brick, "moisture");
                assert_eq!(bus, Bus::Bus1);
                assert_eq!(slot, "5");
                assert_eq!(pin, 5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_display_off_brick_pins_passes() {
        // bus2 occupies 10..=13 and 14..=16; bricks on 8 and 9 are clear
        let app = AppBuilder::new("lcd_ok")
            .sensor("moisture", 9)
            .unwrap()
            .actuator("pump", 8)
            .unwrap()
            .state("idle")
            .initial()
            .set("pump", Signal::Low)
            .done()
            .unwrap()
            .display("moisture", "moisture", 2)
            .unwrap()
            .build()
            .unwrap();

        assert!(validate(&app).is_ok());
    }
}
