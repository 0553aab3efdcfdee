//! Dump a machine's model as JSON.

use anyhow::Result;

use crate::demos;

/// Run the show command
pub fn run(machine: &str) -> Result<()> {
    let app = demos::build(machine)?;
    println!("{}", serde_json::to_string_pretty(&app)?);
    Ok(())
}
