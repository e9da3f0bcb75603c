use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stockroom_catalog::Inventory;
use stockroom_store::{Config, InventoryRepo};

mod menu;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stockroom_cli=info,stockroom_store=info".into()),
        )
        // Logs go to stderr; stdout belongs to the menu
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::load()?;
    tracing::info!("Using inventory file {}", config.store.inventory_file);

    let mut inventory = Inventory::new();
    let repo = InventoryRepo::new(&config.store.inventory_file);

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(&mut inventory, &repo, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
