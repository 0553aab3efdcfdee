//! Statewire Core Library
//!
//! This crate provides the core functionality for Statewire:
//! - The entity model (bricks, states, transitions, guard expressions)
//! - The fluent builder that constructs and freezes an [`App`]
//! - Pin-conflict validation
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Builder   │────▶│  Validator  │────▶│   Codegen   │
//! │   (App)     │     │   (pins)    │     │  (Wiring)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use statewire_core::{AppBuilder, Signal, validate};
//!
//! let app = AppBuilder::new("very_simple_alarm")
//!     .sensor("button", 9)?
//!     .actuator("led", 10)?
//!     .state("idle").initial().set("led", Signal::Low).done()?
//!     .state("alarming").set("led", Signal::High).done()?
//!     .from("idle").when("button", Signal::High).go_to("alarming")?
//!     .from("alarming").when("button", Signal::Low).go_to("idle")?
//!     .build()?;
//!
//! validate(&app)?;
//! # Ok::<(), statewire_core::ConfigurationError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod brick;
pub mod builder;
pub mod display;
pub mod error;
pub mod expression;
pub mod signal;
pub mod state;
pub mod transition;
pub mod validator;

pub use app::App;
pub use brick::{Brick, BrickRef};
pub use builder::AppBuilder;
pub use display::{Bus, Display};
pub use error::{ConfigurationError, Result};
pub use expression::Expression;
pub use signal::Signal;
pub use state::{Action, State};
pub use transition::Transition;
pub use validator::validate;
