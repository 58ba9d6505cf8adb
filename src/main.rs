//! solar-orient CLI entry point
//!
//! Optimal solar panel orientation planner - CLI + web app

use solar_orient::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
