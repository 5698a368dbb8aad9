use anyhow::Result;
use tracing_subscriber::EnvFilter;

use travel_search::{Catalog, FavoritesStore, Menu, DEFAULT_FAVORITES_PATH};

fn main() -> Result<()> {
    // Logging goes to stderr and is off unless RUST_LOG says otherwise, so
    // the menu output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let catalog = Catalog::sample();
    let favorites = FavoritesStore::new(DEFAULT_FAVORITES_PATH);

    Menu::new(catalog, favorites).run()?;

    Ok(())
}
