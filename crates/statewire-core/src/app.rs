//! The application, root of the entity model.

use serde::{Deserialize, Serialize};

use crate::brick::Brick;
use crate::display::Display;
use crate::state::State;

/// A complete state-machine application.
///
/// Owns its bricks, states and optional display; frozen once the builder
/// hands it over. Sequences preserve declaration order, which the code
/// generator reproduces exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    name: String,
    bricks: Vec<Brick>,
    states: Vec<State>,
    initial: Option<String>,
    display: Option<Display>,
}

impl App {
    pub(crate) fn new(
        name: String,
        bricks: Vec<Brick>,
        states: Vec<State>,
        initial: Option<String>,
        display: Option<Display>,
    ) -> Self {
        Self {
            name,
            bricks,
            states,
            initial,
            display,
        }
    }

    /// The application name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All bricks in declaration order.
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    /// All states in declaration order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Name of the initial state, when one was designated.
    pub fn initial(&self) -> Option<&str> {
        self.initial.as_deref()
    }

    /// The attached display, if any.
    pub fn display(&self) -> Option<&Display> {
        self.display.as_ref()
    }

    /// The sensors among the bricks, in declaration order.
    pub fn sensors(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.is_sensor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> App {
        App::new(
            "sample".to_string(),
            vec![
                Brick::Sensor {
                    name: "button".to_string(),
                    pin: 9,
                },
                Brick::Actuator {
                    name: "led".to_string(),
                    pin: 10,
                },
                Brick::Sensor {
                    name: "panic".to_string(),
                    pin: 8,
                },
            ],
            vec![State::Plain {
                name: "idle".to_string(),
                actions: Vec::new(),
                transitions: Vec::new(),
            }],
            Some("idle".to_string()),
            None,
        )
    }

    #[test]
    fn test_accessors() {
        let app = sample();
        assert_eq!(app.name(), "sample");
        assert_eq!(app.bricks().len(), 3);
        assert_eq!(app.states().len(), 1);
        assert_eq!(app.initial(), Some("idle"));
        assert!(app.display().is_none());
    }

    #[test]
    fn test_sensors_preserve_declaration_order() {
        let app = sample();
        let names: Vec<&str> = app.sensors().map(|b| b.name()).collect();
        assert_eq!(names, vec!["button", "panic"]);
    }

    #[test]
    fn test_serializes_with_tagged_variants() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["name"], "sample");
        assert_eq!(json["bricks"][0]["kind"], "sensor");
        assert_eq!(json["bricks"][1]["kind"], "actuator");
        assert_eq!(json["states"][0]["type"], "plain");
        assert_eq!(json["initial"], "idle");
    }
}
