//! Fluent construction of an [`App`].
//!
//! The builder mirrors the declaration order of a source model: bricks
//! first, then states with their actions, then the transition table, then
//! an optional display. Every name is resolved here, against the entities
//! already declared; an unresolved reference is a construction error and
//! can never reach the code generator.
//!
//! The accumulator is mutated locally and frozen into an immutable [`App`]
//! by [`AppBuilder::build`].

use crate::app::App;
use crate::brick::{Brick, BrickRef, PIN_MAX, PIN_MIN};
use crate::display::{Bus, Display};
use crate::error::{ConfigurationError, Result};
use crate::expression::Expression;
use crate::signal::Signal;
use crate::state::{Action, State};
use crate::transition::Transition;

/// Accumulator for a model under construction.
#[derive(Debug)]
pub struct AppBuilder {
    name: String,
    bricks: Vec<Brick>,
    states: Vec<State>,
    initial: Option<String>,
    display: Option<Display>,
}

impl AppBuilder {
    /// Start a new model with the given application name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bricks: Vec::new(),
            states: Vec::new(),
            initial: None,
            display: None,
        }
    }

    /// Declare a readable input brick.
    pub fn sensor(self, name: &str, pin: u8) -> Result<Self> {
        self.add_brick(Brick::Sensor {
            name: name.to_string(),
            pin,
        })
    }

    /// Declare a writable output brick.
    pub fn actuator(self, name: &str, pin: u8) -> Result<Self> {
        self.add_brick(Brick::Actuator {
            name: name.to_string(),
            pin,
        })
    }

    fn add_brick(mut self, brick: Brick) -> Result<Self> {
        let name = brick.name();
        let starts_lowercase = name.chars().next().is_some_and(char::is_lowercase);
        if name.is_empty() || !starts_lowercase {
            return Err(ConfigurationError::InvalidBrickName {
                name: name.to_string(),
            });
        }
        if !(PIN_MIN..=PIN_MAX).contains(&brick.pin()) {
            return Err(ConfigurationError::PinOutOfRange {
                name: name.to_string(),
                pin: brick.pin(),
            });
        }
        if self.bricks.iter().any(|b| b.name() == name) {
            return Err(ConfigurationError::DuplicateBrick {
                name: name.to_string(),
            });
        }
        self.bricks.push(brick);
        Ok(self)
    }

    /// Open an ordinary state.
    pub fn state(self, name: &str) -> StateBuilder {
        StateBuilder {
            app: self,
            name: name.to_string(),
            actions: Vec::new(),
            error: None,
            initial: false,
            failed: None,
        }
    }

    /// Open an error state bound to an actuator and a blink count.
    pub fn error_state(self, name: &str, actuator: &str, code: u8) -> StateBuilder {
        let mut failed = None;
        let binding = match self.find_actuator(actuator) {
            Some(binding) if code > 0 => Some((code, binding)),
            Some(_) => {
                failed = Some(ConfigurationError::InvalidErrorCode {
                    state: name.to_string(),
                    code,
                });
                None
            }
            None => {
                failed = Some(ConfigurationError::UnknownActuator {
                    name: actuator.to_string(),
                });
                None
            }
        };
        StateBuilder {
            app: self,
            name: name.to_string(),
            actions: Vec::new(),
            error: binding,
            initial: false,
            failed,
        }
    }

    /// Open a transition out of the named state.
    pub fn from(self, state: &str) -> TransitionBuilder {
        TransitionBuilder {
            app: self,
            from: state.to_string(),
            guard: None,
            delay_ms: None,
            failed: None,
        }
    }

    /// Attach the optional display.
    pub fn display(mut self, brick: &str, prefix: &str, bus: u8) -> Result<Self> {
        if self.display.is_some() {
            return Err(ConfigurationError::DuplicateDisplay);
        }
        if !self.bricks.iter().any(|b| b.name() == brick) {
            return Err(ConfigurationError::UnknownBrick {
                name: brick.to_string(),
            });
        }
        self.display = Some(Display {
            brick: brick.to_string(),
            prefix: prefix.to_string(),
            bus: Bus::from_number(bus)?,
        });
        Ok(self)
    }

    /// Freeze the accumulator into an immutable [`App`].
    ///
    /// Requires that exactly one state was designated initial.
    pub fn build(self) -> Result<App> {
        if self.initial.is_none() {
            return Err(ConfigurationError::MissingInitialState);
        }
        tracing::debug!(
            "'{}' frozen: {} bricks, {} states",
            self.name,
            self.bricks.len(),
            self.states.len()
        );
        Ok(App::new(
            self.name,
            self.bricks,
            self.states,
            self.initial,
            self.display,
        ))
    }

    fn find_sensor(&self, name: &str) -> Option<BrickRef> {
        self.bricks
            .iter()
            .find(|b| b.is_sensor() && b.name() == name)
            .map(Brick::to_ref)
    }

    fn find_actuator(&self, name: &str) -> Option<BrickRef> {
        self.bricks
            .iter()
            .find(|b| !b.is_sensor() && b.name() == name)
            .map(Brick::to_ref)
    }

    fn has_state(&self, name: &str) -> bool {
        self.states.iter().any(|s| s.name() == name)
    }
}

/// Builder for a single state's actions and flags.
///
/// Reference errors are recorded on the first offending call and surfaced
/// by [`StateBuilder::done`], keeping the fluent chain intact.
#[derive(Debug)]
pub struct StateBuilder {
    app: AppBuilder,
    name: String,
    actions: Vec<Action>,
    error: Option<(u8, BrickRef)>,
    initial: bool,
    failed: Option<ConfigurationError>,
}

impl StateBuilder {
    /// Append an actuator write applied while this state is active.
    pub fn set(mut self, actuator: &str, value: Signal) -> Self {
        if self.failed.is_some() {
            return self;
        }
        match self.app.find_actuator(actuator) {
            Some(binding) => self.actions.push(Action {
                actuator: binding,
                value,
            }),
            None => {
                self.failed = Some(ConfigurationError::UnknownActuator {
                    name: actuator.to_string(),
                });
            }
        }
        self
    }

    /// Designate this state as the initial state.
    pub fn initial(mut self) -> Self {
        self.initial = true;
        self
    }

    /// Close the state and return to the application builder.
    pub fn done(mut self) -> Result<AppBuilder> {
        if let Some(err) = self.failed {
            return Err(err);
        }
        if self.app.has_state(&self.name) {
            return Err(ConfigurationError::DuplicateState { name: self.name });
        }
        if self.initial {
            if let Some(current) = self.app.initial.take() {
                return Err(ConfigurationError::InitialAlreadySet { current });
            }
            self.app.initial = Some(self.name.clone());
        }
        let state = match self.error {
            Some((error_code, actuator)) => State::Error {
                name: self.name,
                actions: self.actions,
                transitions: Vec::new(),
                error_code,
                actuator,
            },
            None => State::Plain {
                name: self.name,
                actions: self.actions,
                transitions: Vec::new(),
            },
        };
        self.app.states.push(state);
        Ok(self.app)
    }
}

/// Builder for a single transition.
///
/// Guard expressions grow left-associatively: `when` starts the tree and
/// each `and`/`or` folds the next condition into it, exactly mirroring the
/// order the source model declares. Errors are recorded on the first
/// offending call and surfaced by [`TransitionBuilder::go_to`].
#[derive(Debug)]
pub struct TransitionBuilder {
    app: AppBuilder,
    from: String,
    guard: Option<Expression>,
    delay_ms: Option<u32>,
    failed: Option<ConfigurationError>,
}

impl TransitionBuilder {
    /// Start the guard with a first condition.
    pub fn when(mut self, sensor: &str, value: Signal) -> Self {
        if self.failed.is_some() {
            return self;
        }
        if self.delay_ms.is_some() {
            self.failed = Some(ConfigurationError::MixedTransition {
                from: self.from.clone(),
            });
        } else if self.guard.is_some() {
            self.failed = Some(ConfigurationError::UnchainedCondition {
                sensor: sensor.to_string(),
            });
        } else {
            match self.condition(sensor, value) {
                Ok(condition) => self.guard = Some(condition),
                Err(err) => self.failed = Some(err),
            }
        }
        self
    }

    /// Conjoin another condition onto the guard.
    pub fn and(self, sensor: &str, value: Signal) -> Self {
        self.combine(sensor, value, Expression::and)
    }

    /// Disjoin another condition onto the guard.
    pub fn or(self, sensor: &str, value: Signal) -> Self {
        self.combine(sensor, value, Expression::or)
    }

    fn combine(
        mut self,
        sensor: &str,
        value: Signal,
        connect: fn(Expression, Expression) -> Expression,
    ) -> Self {
        if self.failed.is_some() {
            return self;
        }
        if self.delay_ms.is_some() {
            self.failed = Some(ConfigurationError::MixedTransition {
                from: self.from.clone(),
            });
            return self;
        }
        let Some(left) = self.guard.take() else {
            self.failed = Some(ConfigurationError::DanglingOperator {
                from: self.from.clone(),
            });
            return self;
        };
        match self.condition(sensor, value) {
            Ok(right) => self.guard = Some(connect(left, right)),
            Err(err) => self.failed = Some(err),
        }
        self
    }

    /// Make this a time transition firing after the given delay.
    pub fn after(mut self, delay_ms: u32) -> Self {
        if self.failed.is_some() {
            return self;
        }
        if self.guard.is_some() {
            self.failed = Some(ConfigurationError::MixedTransition {
                from: self.from.clone(),
            });
        } else if self.delay_ms.is_some() {
            self.failed = Some(ConfigurationError::DuplicateDelay {
                from: self.from.clone(),
            });
        } else {
            self.delay_ms = Some(delay_ms);
        }
        self
    }

    /// Close the transition, appending it to the source state.
    pub fn go_to(self, target: &str) -> Result<AppBuilder> {
        if let Some(err) = self.failed {
            return Err(err);
        }
        if !self.app.has_state(target) {
            return Err(ConfigurationError::UnknownState {
                name: target.to_string(),
            });
        }
        let transition = match (self.guard, self.delay_ms) {
            (Some(guard), None) => Transition::Signal {
                guard,
                target: target.to_string(),
            },
            (None, Some(delay_ms)) => Transition::Time {
                delay_ms,
                target: target.to_string(),
            },
            _ => {
                return Err(ConfigurationError::EmptyGuard {
                    from: self.from,
                    to: target.to_string(),
                });
            }
        };
        let mut app = self.app;
        let Some(source) = app.states.iter_mut().find(|s| s.name() == self.from) else {
            return Err(ConfigurationError::UnknownState { name: self.from });
        };
        source.transitions_mut().push(transition);
        Ok(app)
    }

    fn condition(&self, sensor: &str, value: Signal) -> Result<Expression> {
        let binding =
            self.app
                .find_sensor(sensor)
                .ok_or_else(|| ConfigurationError::UnknownSensor {
                    name: sensor.to_string(),
                })?;
        Ok(Expression::condition(binding, value))
    }
}
