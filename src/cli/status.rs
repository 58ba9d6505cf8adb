//! Status command handler
//!
//! Shows effective configuration and probes the calculation service and
//! the local server.

use crate::config::Config;
use crate::error::Result;
use clap::Args;
use std::time::Duration;

/// Status command arguments
#[derive(Args)]
pub struct StatusArgs {
    /// Check if the local server is running (tries to connect)
    #[arg(long)]
    pub server: bool,
}

/// Run the status command
pub async fn run(args: StatusArgs) -> Result<()> {
    let config = Config::load()?;

    // Check local server status if requested
    if args.server {
        check_server_status(&config).await;
    }

    println!("solar-orient v{}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("Calculation service: {}", config.service.base_url);
    match config.map_api_key() {
        Some(_) => println!("Map API key: configured"),
        None => println!("Map API key: not configured (map falls back to a notice)"),
    }
    println!();

    // Probe the calculation service; any response at all counts as
    // reachable
    let probe = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build HTTP client");

    match probe.get(&config.service.base_url).send().await {
        Ok(_) => println!("Service: REACHABLE at {}", config.service.base_url),
        Err(_) => println!("Service: UNREACHABLE at {}", config.service.base_url),
    }

    Ok(())
}

/// Check if the local server is running
async fn check_server_status(config: &Config) {
    let url = format!("http://{}/api/status", config.server_addr());

    match reqwest::get(&url).await {
        Ok(response) => {
            if response.status().is_success() {
                println!("Server: RUNNING on {}", config.server_addr());
                if let Ok(body) = response.text().await {
                    if let Ok(status) = serde_json::from_str::<serde_json::Value>(&body) {
                        if let Some(version) = status.get("version").and_then(|v| v.as_str()) {
                            println!("  Version: {}", version);
                        }
                        if let Some(service) = status.get("service_url").and_then(|v| v.as_str()) {
                            println!("  Service: {}", service);
                        }
                    }
                }
            } else {
                println!("Server: ERROR (status {})", response.status());
            }
        }
        Err(_) => {
            println!("Server: NOT RUNNING on {}", config.server_addr());
        }
    }
    println!();
}
