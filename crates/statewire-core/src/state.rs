//! States and the actions applied while a state is active.

use serde::{Deserialize, Serialize};

use crate::brick::BrickRef;
use crate::signal::Signal;
use crate::transition::Transition;

/// An actuator write applied on every cycle the owning state is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The actuator being written, resolved at construction time.
    pub actuator: BrickRef,
    /// The level to write.
    pub value: Signal,
}

/// A state of the machine.
///
/// Both variants carry ordered actions (applied unconditionally each cycle)
/// and ordered transitions (evaluated in declaration order, first match
/// wins). The `Error` variant additionally blinks a numeric code on a bound
/// actuator; the blink sequence is a terminal sink for the cycle, so the
/// state's transitions are only reachable before it runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum State {
    /// An ordinary state.
    Plain {
        /// State name, unique within the app.
        name: String,
        /// Actuator writes applied on entry/revisit, in order.
        actions: Vec<Action>,
        /// Outgoing transitions in declaration order.
        transitions: Vec<Transition>,
    },
    /// A terminal sink that blinks a numeric error code.
    Error {
        /// State name, unique within the app.
        name: String,
        /// Actuator writes applied on entry/revisit, in order.
        actions: Vec<Action>,
        /// Outgoing transitions in declaration order.
        transitions: Vec<Transition>,
        /// Blink repeat count, positive.
        error_code: u8,
        /// The actuator that emits the blink pattern.
        actuator: BrickRef,
    },
}

impl State {
    /// The state's name.
    pub fn name(&self) -> &str {
        match self {
            Self::Plain { name, .. } | Self::Error { name, .. } => name,
        }
    }

    /// The state's actions in declaration order.
    pub fn actions(&self) -> &[Action] {
        match self {
            Self::Plain { actions, .. } | Self::Error { actions, .. } => actions,
        }
    }

    /// The state's transitions in declaration order.
    pub fn transitions(&self) -> &[Transition] {
        match self {
            Self::Plain { transitions, .. } | Self::Error { transitions, .. } => transitions,
        }
    }

    pub(crate) fn transitions_mut(&mut self) -> &mut Vec<Transition> {
        match self {
            Self::Plain { transitions, .. } | Self::Error { transitions, .. } => transitions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actuator(name: &str, pin: u8) -> BrickRef {
        BrickRef {
            name: name.to_string(),
            pin,
        }
    }

    #[test]
    fn test_plain_state_accessors() {
        let state = State::Plain {
            name: "idle".to_string(),
            actions: vec![Action {
                actuator: actuator("led", 10),
                value: Signal::Low,
            }],
            transitions: Vec::new(),
        };

        assert_eq!(state.name(), "idle");
        assert_eq!(state.actions().len(), 1);
        assert!(state.transitions().is_empty());
    }

    #[test]
    fn test_error_state_accessors() {
        let state = State::Error {
            name: "errButtons".to_string(),
            actions: Vec::new(),
            transitions: Vec::new(),
            error_code: 4,
            actuator: actuator("error_led", 11),
        };

        assert_eq!(state.name(), "errButtons");
        match state {
            State::Error {
                error_code,
                ref actuator,
                ..
            } => {
                assert_eq!(error_code, 4);
                assert_eq!(actuator.pin, 11);
            }
            State::Plain { .. } => panic!("expected error state"),
        }
    }
}
