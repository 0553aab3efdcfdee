//! Transitions: guarded or timed state switches.

use serde::{Deserialize, Serialize};

use crate::expression::Expression;

/// An outgoing transition of a state.
///
/// Transitions are evaluated in declaration order, first match wins; the
/// remaining transitions of the state are skipped for that cycle. A `Time`
/// transition is unconditional, so one declared before other transitions
/// masks them; that is source-ordering semantics, preserved as-is by the
/// generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Transition {
    /// Fires when the guard expression evaluates true.
    Signal {
        /// Guard over sensor readings.
        guard: Expression,
        /// Name of the target state, resolved at construction time.
        target: String,
    },
    /// Fires unconditionally after waiting the given delay.
    Time {
        /// Delay in milliseconds.
        delay_ms: u32,
        /// Name of the target state, resolved at construction time.
        target: String,
    },
}

impl Transition {
    /// Name of the state this transition switches to.
    pub fn target(&self) -> &str {
        match self {
            Self::Signal { target, .. } | Self::Time { target, .. } => target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brick::BrickRef;
    use crate::signal::Signal;

    #[test]
    fn test_target_across_variants() {
        let signal = Transition::Signal {
            guard: Expression::condition(
                BrickRef {
                    name: "button".to_string(),
                    pin: 9,
                },
                Signal::High,
            ),
            target: "alarming".to_string(),
        };
        let time = Transition::Time {
            delay_ms: 3000,
            target: "idle".to_string(),
        };

        assert_eq!(signal.target(), "alarming");
        assert_eq!(time.target(), "idle");
    }
}
