//! Error types for statewire-core.

use thiserror::Error;

use crate::brick::{PIN_MAX, PIN_MIN};
use crate::display::Bus;

/// Result type alias for statewire-core operations.
pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// Errors raised while constructing or validating a model.
///
/// All of these are synchronous and non-retryable: construction errors are
/// surfaced by the builder before an [`App`](crate::App) exists, and pin
/// conflicts by the validator before any code is generated. Code generation
/// itself has no error path.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Two bricks claim the same physical pin.
    #[error("pin {pin} already in use (brick '{brick}')")]
    PinConflict {
        /// The brick whose pin collided.
        brick: String,
        /// The contested pin.
        pin: u8,
    },

    /// A display bus slot claims a pin a brick (or earlier slot) already uses.
    #[error("pin {pin} already in use (display on '{brick}', {bus} slot {slot})")]
    DisplayPinConflict {
        /// Host brick of the display.
        brick: String,
        /// The bus being expanded.
        bus: Bus,
        /// The slot label that collided.
        slot: String,
        /// The contested physical pin.
        pin: u8,
    },

    /// A brick name is empty or does not start with a lowercase letter.
    #[error("invalid brick name '{name}': must be non-empty and start with a lowercase letter")]
    InvalidBrickName {
        /// The rejected name.
        name: String,
    },

    /// A brick pin is outside the device range.
    #[error("pin {pin} out of range for brick '{name}': expected {}..={}", PIN_MIN, PIN_MAX)]
    PinOutOfRange {
        /// The brick being declared.
        name: String,
        /// The rejected pin.
        pin: u8,
    },

    /// A brick name is declared twice.
    #[error("duplicate brick name '{name}'")]
    DuplicateBrick {
        /// The repeated name.
        name: String,
    },

    /// A state name is declared twice.
    #[error("duplicate state name '{name}'")]
    DuplicateState {
        /// The repeated name.
        name: String,
    },

    /// A condition references a sensor that was never declared.
    #[error("unknown sensor '{name}'")]
    UnknownSensor {
        /// The unresolved name.
        name: String,
    },

    /// An action or error state references an actuator that was never declared.
    #[error("unknown actuator '{name}'")]
    UnknownActuator {
        /// The unresolved name.
        name: String,
    },

    /// A transition references a state that was never declared.
    #[error("unknown state '{name}'")]
    UnknownState {
        /// The unresolved name.
        name: String,
    },

    /// A display references a host brick that was never declared.
    #[error("unknown brick '{name}'")]
    UnknownBrick {
        /// The unresolved name.
        name: String,
    },

    /// A second condition was appended without a preceding and/or.
    #[error("condition on '{sensor}' must be chained with and/or")]
    UnchainedCondition {
        /// Sensor of the offending condition.
        sensor: String,
    },

    /// An and/or was used before any condition existed to combine with.
    #[error("and/or used before any condition in transition from '{from}'")]
    DanglingOperator {
        /// Source state of the transition.
        from: String,
    },

    /// A transition mixes a guard expression with a time delay.
    #[error("transition from '{from}' mixes a guard with a time delay")]
    MixedTransition {
        /// Source state of the transition.
        from: String,
    },

    /// A transition declares two delays.
    #[error("transition from '{from}' already has a delay")]
    DuplicateDelay {
        /// Source state of the transition.
        from: String,
    },

    /// A transition was finished with neither a guard nor a delay.
    #[error("transition from '{from}' to '{to}' has no guard and no delay")]
    EmptyGuard {
        /// Source state of the transition.
        from: String,
        /// Target state of the transition.
        to: String,
    },

    /// A bus number outside 1..=3.
    #[error("invalid bus number {number}: expected 1..=3")]
    InvalidBus {
        /// The rejected number.
        number: u8,
    },

    /// An error state's blink count must be positive.
    #[error("error code {code} for state '{state}' must be positive")]
    InvalidErrorCode {
        /// The error state being declared.
        state: String,
        /// The rejected code.
        code: u8,
    },

    /// `build()` was called without designating an initial state.
    #[error("no initial state designated")]
    MissingInitialState,

    /// Two states were designated as initial.
    #[error("initial state already designated as '{current}'")]
    InitialAlreadySet {
        /// The state designated first.
        current: String,
    },

    /// A second display was attached.
    #[error("display already attached")]
    DuplicateDisplay,
}
