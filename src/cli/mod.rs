//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod calculate;
pub mod config;
pub mod serve;
pub mod status;

use clap::{Parser, Subcommand};

/// Optimal solar panel orientation planner
#[derive(Parser)]
#[command(name = "solar-orient")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate optimal panel angles for a location
    Calculate(calculate::CalculateArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),

    /// Show configuration and service status
    Status(status::StatusArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Calculate(args) => calculate::run(args).await,
        Commands::Serve(args) => serve::run(args).await,
        Commands::Config(args) => config::run(args),
        Commands::Status(args) => status::run(args).await,
    }
}
