//! Generate Wiring code for a machine.

use anyhow::{Context, Result};

use crate::demos;

/// Run the generate command
pub fn run(machine: &str, output: Option<&str>) -> Result<()> {
    tracing::info!("Generating wiring code for: {}", machine);

    let app = demos::build(machine)?;
    statewire_core::validate(&app).context("pin validation failed")?;

    let wiring = statewire_codegen::generate(&app);

    match output {
        Some(path) => {
            std::fs::write(path, &wiring)
                .with_context(|| format!("failed to write {path}"))?;
            tracing::info!("Wrote {} bytes to {}", wiring.len(), path);
        }
        None => print!("{wiring}"),
    }

    Ok(())
}
