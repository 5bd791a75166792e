//! Address Book - Main entry point
//!
//! Runs the demonstration scenario and prints the report to stdout.

use address_book::{demo, Config};
use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging, since it carries the fallback level
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only so the report stays clean on stdout)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");
    info!("Output format: {}", config.output_format);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = demo::write_report(&mut out, config.output_format) {
        error!("Demo failed: {}", e);
        return Err(e.into());
    }

    info!("Demo complete");
    Ok(())
}
