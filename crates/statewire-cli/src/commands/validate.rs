//! Validate a machine without generating code.

use anyhow::{Context, Result};

use crate::demos;

/// Run the validate command
pub fn run(machine: &str) -> Result<()> {
    tracing::info!("Validating machine: {}", machine);

    let app = demos::build(machine)?;
    statewire_core::validate(&app).context("pin validation failed")?;

    tracing::info!("✓ Machine: {}", app.name());
    tracing::info!("✓ Bricks: {}", app.bricks().len());
    tracing::info!("✓ States: {}", app.states().len());
    tracing::info!("✓ Pin assignments are valid");
    Ok(())
}
