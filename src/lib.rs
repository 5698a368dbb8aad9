// Main library file for the travel search application

// Export modules for each component
pub mod catalog;
pub mod favorites;
pub mod menu;

// Re-export key types for convenience
pub use catalog::{parse_max_cost, Catalog, Destination, SearchCriteria, SearchError};
pub use favorites::{FavoritesError, FavoritesStore, SaveOutcome, DEFAULT_FAVORITES_PATH};
pub use menu::Menu;
