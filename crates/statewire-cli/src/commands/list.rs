//! List the built-in demo machines.

use anyhow::Result;

use crate::demos;

/// Run the list command
pub fn run() -> Result<()> {
    for name in demos::MACHINES {
        println!("{name}");
    }
    Ok(())
}
