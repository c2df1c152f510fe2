// TripWise - Core Library
// Place catalog, favorites and the filtered visible list, for the TUI and tests

pub mod place;
pub mod catalog;
pub mod query;
pub mod filter;
pub mod browser;
pub mod loader;

// Re-export commonly used types
pub use place::{Category, Place, VisiblePlace};
pub use catalog::{CatalogStore, sample_places};
pub use query::{matches_category, matches_search, visible_places};
pub use filter::FilterState;
pub use browser::PlaceBrowser;
pub use loader::load_catalog;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
