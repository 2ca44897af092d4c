use anyhow::Result;
use std::io;
use tracing_subscriber::EnvFilter;

use expense_tracker::{Config, Console, JsonFileStorage, Shell, Storage};

fn main() -> Result<()> {
    let config = Config::default();

    // Diagnostics go to stderr; stdout belongs to the menu
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    tracing::debug!(version = expense_tracker::VERSION, "starting");

    // Load once; a missing file is an empty store, a broken one is fatal
    let storage = JsonFileStorage::new(&config);
    let store = storage.load()?;

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut shell = Shell::new(console, store, &storage);
    shell.run()?;

    Ok(())
}
