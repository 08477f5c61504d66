//! Contact Book - Main entry point
//!
//! Runs the interactive menu on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_book::cli::{ctrl_c_interrupts, StdinLines};
use contact_book::{App, Config, Console, ContactStore};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only to keep the prompts readable)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Contacts file: {}", config.contacts_path.display());

    let console = Console::new(StdinLines::spawn()?, tokio::io::stdout())
        .with_interrupts(ctrl_c_interrupts());
    let mut app = App::new(ContactStore::new(), console, config.contacts_path);

    if let Err(e) = app.run().await {
        error!("Session failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
