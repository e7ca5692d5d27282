//! Address Book - Main entry point
//!
//! Loads the saved address book, runs the interactive command loop on
//! stdin/stdout and saves the book again when the user exits.

use address_book::{Config, ContactRepository, ContactServiceImpl, JsonFileRepository, Session};
use anyhow::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only, stdout carries the dialogue)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let repository = JsonFileRepository::new(&config.book_path);
    info!(path = %repository.path().display(), "Starting address book");

    let book = match repository.load() {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    let mut session = Session::new(ContactServiceImpl::new(book), repository);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    if let Err(e) = session.run(&mut input, &mut output) {
        error!("Session ended with an error: {:#}", e);
        return Err(e);
    }

    info!("Address book shutdown complete");
    Ok(())
}
