//! Calculate command handler
//!
//! Runs one submission against the external calculation service, exactly
//! as the form does: raw input texts in, validated payload out.

use crate::calc::http::HttpCalculationService;
use crate::calc::CalculationRequest;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter};
use crate::session::{LocationStore, Session};
use clap::Args;

/// Calculate command arguments
#[derive(Args)]
pub struct CalculateArgs {
    /// Latitude input text (config default when omitted)
    #[arg(long)]
    pub lat: Option<String>,

    /// Longitude input text (config default when omitted)
    #[arg(long)]
    pub lng: Option<String>,

    /// Mounting offset angle input text (no offset when omitted)
    #[arg(long)]
    pub offset: Option<String>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the calculate command
pub async fn run(args: CalculateArgs) -> Result<()> {
    // Handle list flags first
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    // Load config
    let config = Config::load()?;

    let latitude = args.lat.unwrap_or_else(|| config.defaults.latitude.clone());
    let longitude = args.lng.unwrap_or_else(|| config.defaults.longitude.clone());
    let offset = args.offset.unwrap_or_default();
    let format = args.format.unwrap_or_else(|| config.defaults.format.clone());

    let service = HttpCalculationService::from_config(&config);

    // Drive one full submission through the session
    let mut session = Session::with_store(LocationStore::with_texts(&latitude, &longitude));
    session.set_offset_text(offset);
    session.submit(&service).await;

    if let Some(message) = session.error() {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }

    let result = match session.result() {
        Some(result) => *result,
        None => {
            eprintln!("Error: {}", Error::RequestFailed);
            std::process::exit(1);
        }
    };

    // Validation already passed inside submit; rebuild the payload for
    // the formatters
    let request = CalculationRequest::from_texts(
        session.store().latitude_text(),
        session.store().longitude_text(),
        session.store().offset_text(),
    )?;

    // Format output
    let formatter = get_formatter(&format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;
    let output = formatter.format(&request, &result, &config)?;

    // Write output
    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}
