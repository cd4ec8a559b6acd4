//! Contact Directory - Main entry point
//!
//! Reads JSON commands from stdin, one per line, applies them to an
//! in-memory contact directory, and writes one JSON response per line to
//! stdout.

use anyhow::Result;
use contact_directory::{driver, Config, ContactService};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout machine-readable)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(delete_policy = %config.delete_policy, "Configuration loaded");

    let service = ContactService::new().with_delete_policy(config.delete_policy);

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    match driver::run(&service, stdin, stdout).await {
        Ok(processed) => {
            info!(processed, "Contact directory finished");
            info!("{}", service.metrics().summary());
            Ok(())
        }
        Err(e) => {
            error!("Command driver failed: {}", e);
            Err(e)
        }
    }
}
