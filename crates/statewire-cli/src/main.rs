//! Statewire CLI
//!
//! Developer tool for generating Wiring code from the built-in demo
//! machines.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod demos;

/// Statewire - state machines compiled to Wiring code
#[derive(Parser)]
#[command(name = "statewire")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in demo machines
    List,

    /// Generate Wiring code for a machine
    Generate {
        /// Machine name (see `list`)
        machine: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a machine's pin assignments without generating
    Validate {
        /// Machine name (see `list`)
        machine: String,
    },

    /// Dump the constructed model as JSON
    Show {
        /// Machine name (see `list`)
        machine: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::List => {
            commands::list::run()?;
        }
        Commands::Generate { machine, output } => {
            commands::generate::run(&machine, output.as_deref())?;
        }
        Commands::Validate { machine } => {
            commands::validate::run(&machine)?;
        }
        Commands::Show { machine } => {
            commands::show::run(&machine)?;
        }
    }

    Ok(())
}
