//! Statewire Code Generation
//!
//! This crate turns a validated [`App`](statewire_core::App) into Wiring
//! source text for a microcontroller's setup/loop execution model.
//!
//! # Pipeline Overview
//!
//! ```text
//! ┌─────────┐     ┌──────────┐     ┌─────────┐
//! │   App   │────▶│ Validate │────▶│ Wiring  │
//! │ (model) │     │  (pins)  │     │ (text)  │
//! └─────────┘     └──────────┘     └─────────┘
//! ```
//!
//! Generation is a pure function of the model: two ordered passes over the
//! same structure, first declarations, then setup and the state dispatch.
//! It has no error path: unresolved references are rejected at
//! construction time, pin conflicts by the validator, so by the time an
//! `App` reaches [`generate`] nothing can fail.
//!
//! # Example
//!
//! ```rust,ignore
//! use statewire_codegen::generate;
//!
//! statewire_core::validate(&app)?;
//! let wiring = generate(&app);
//! std::fs::write("machine.ino", wiring)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod guard;
pub mod wiring;

pub use wiring::generate;
