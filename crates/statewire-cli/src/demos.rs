//! Built-in demo machines, constructed through the builder API.
//!
//! Each machine is a complete model: bricks, states with their actions,
//! the transition table, and (for one of them) a display.

use anyhow::{Result, bail};
use statewire_core::{App, AppBuilder, ConfigurationError, Signal};

/// Names of all built-in machines, in presentation order.
pub const MACHINES: [&str; 7] = [
    "very_simple_alarm",
    "dual_check_alarm",
    "state_based_alarm",
    "multi_state_alarm",
    "timed_alarm",
    "alarm_with_error",
    "monitored_greenhouse",
];

/// Construct a machine by name.
pub fn build(name: &str) -> Result<App> {
    let machine = match name {
        "very_simple_alarm" => very_simple_alarm(),
        "dual_check_alarm" => dual_check_alarm(),
        "state_based_alarm" => state_based_alarm(),
        "multi_state_alarm" => multi_state_alarm(),
        "timed_alarm" => timed_alarm(),
        "alarm_with_error" => alarm_with_error(),
        "monitored_greenhouse" => monitored_greenhouse(),
        _ => bail!("unknown machine '{name}' (try `statewire list`)"),
    };
    Ok(machine?)
}

/// A button arming a led and a buzzer.
fn very_simple_alarm() -> Result<App, ConfigurationError> {
    AppBuilder::new("very_simple_alarm")
        .sensor("button", 9)?
        .actuator("led", 10)?
        .actuator("buzzer", 11)?
        .state("idle")
        .initial()
        .set("led", Signal::Low)
        .set("buzzer", Signal::Low)
        .done()?
        .state("alarming")
        .set("led", Signal::High)
        .set("buzzer", Signal::High)
        .done()?
        .from("idle")
        .when("button", Signal::High)
        .go_to("alarming")?
        .from("alarming")
        .when("button", Signal::Low)
        .go_to("idle")?
        .build()
}

/// Both buttons must be pressed to arm, either released to disarm.
fn dual_check_alarm() -> Result<App, ConfigurationError> {
    AppBuilder::new("dual_check_alarm")
        .sensor("b1", 8)?
        .sensor("b2", 9)?
        .actuator("buzzer", 11)?
        .state("idle")
        .initial()
        .set("buzzer", Signal::Low)
        .done()?
        .state("on")
        .set("buzzer", Signal::High)
        .done()?
        .from("idle")
        .when("b1", Signal::High)
        .and("b2", Signal::High)
        .go_to("on")?
        .from("on")
        .when("b1", Signal::Low)
        .or("b2", Signal::Low)
        .go_to("idle")?
        .build()
}

/// A push-button toggle: each press flips the led.
fn state_based_alarm() -> Result<App, ConfigurationError> {
    AppBuilder::new("state_based_alarm")
        .sensor("button", 9)?
        .actuator("led", 12)?
        .state("on")
        .set("led", Signal::High)
        .done()?
        .state("off")
        .initial()
        .set("led", Signal::Low)
        .done()?
        .from("off")
        .when("button", Signal::High)
        .go_to("on")?
        .from("on")
        .when("button", Signal::High)
        .go_to("off")?
        .build()
}

/// A three-way cycle: ready, buzzing, lighting.
fn multi_state_alarm() -> Result<App, ConfigurationError> {
    AppBuilder::new("multi_state_alarm")
        .sensor("button", 9)?
        .actuator("led", 12)?
        .actuator("buzzer", 11)?
        .state("ready")
        .initial()
        .set("led", Signal::Low)
        .set("buzzer", Signal::Low)
        .done()?
        .state("buzzing")
        .set("led", Signal::Low)
        .set("buzzer", Signal::High)
        .done()?
        .state("lighting")
        .set("led", Signal::High)
        .set("buzzer", Signal::Low)
        .done()?
        .from("ready")
        .when("button", Signal::High)
        .go_to("buzzing")?
        .from("buzzing")
        .when("button", Signal::High)
        .go_to("lighting")?
        .from("lighting")
        .when("button", Signal::High)
        .go_to("ready")?
        .build()
}

/// The buzzer rings for three seconds, then rearms on its own.
fn timed_alarm() -> Result<App, ConfigurationError> {
    AppBuilder::new("timed_alarm")
        .sensor("button", 9)?
        .actuator("buzzer", 11)?
        .state("idle")
        .initial()
        .set("buzzer", Signal::Low)
        .done()?
        .state("ringing")
        .set("buzzer", Signal::High)
        .done()?
        .from("idle")
        .when("button", Signal::High)
        .go_to("ringing")?
        .from("ringing")
        .after(3000)
        .go_to("idle")?
        .build()
}

/// A toggle with a panic sensor routing to a blinking error state.
fn alarm_with_error() -> Result<App, ConfigurationError> {
    AppBuilder::new("alarm_with_error")
        .sensor("button", 9)?
        .sensor("panic", 8)?
        .actuator("led", 12)?
        .actuator("error_led", 11)?
        .state("off")
        .initial()
        .set("led", Signal::Low)
        .done()?
        .state("on")
        .set("led", Signal::High)
        .done()?
        .error_state("errButtons", "error_led", 4)
        .done()?
        .from("off")
        .when("button", Signal::High)
        .go_to("on")?
        .from("on")
        .when("button", Signal::Low)
        .go_to("off")?
        .from("off")
        .when("panic", Signal::High)
        .go_to("errButtons")?
        .from("on")
        .when("panic", Signal::High)
        .go_to("errButtons")?
        .build()
}

/// A moisture-driven pump with a display on the second bus.
fn monitored_greenhouse() -> Result<App, ConfigurationError> {
    AppBuilder::new("monitored_greenhouse")
        .sensor("moisture", 9)?
        .actuator("pump", 8)?
        .state("idle")
        .initial()
        .set("pump", Signal::Low)
        .done()?
        .state("watering")
        .set("pump", Signal::High)
        .done()?
        .from("idle")
        .when("moisture", Signal::Low)
        .go_to("watering")?
        .from("watering")
        .when("moisture", Signal::High)
        .go_to("idle")?
        .display("moisture", "moisture", 2)?
        .build()
}
