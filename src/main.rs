//! Biblioteca - console library catalog manager

use std::io;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblioteca::{
    config::AppConfig,
    console::{self, Console},
    services::Services,
    store::Store,
    AppState,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration; this is the only startup failure mode
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing. Diagnostics go to stderr so they never mix with
    // the interactive stdout surface.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("biblioteca={}", config.logging.level).into());

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }

    tracing::info!("Starting biblioteca v{}", env!("CARGO_PKG_VERSION"));

    // Create the in-memory stores and the services over them
    let store = Store::new(&config);
    tracing::info!(
        "Stores ready: {} book slots, {} loan slots",
        store.catalog.capacity(),
        store.loans.capacity()
    );
    let services = Services::new(store);

    let mut state = AppState { config, services };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    console::run(&mut console, &mut state)?;

    tracing::info!(
        "Session finished with {} registered books",
        state.services.catalog.count()
    );

    Ok(())
}
