// 🧭 Place Browser - the session the presentation layer talks to
//
// Owns the CatalogStore and the FilterState. Every read of the visible list
// is recomputed from the current inputs; nothing derived is cached.

use crate::catalog::CatalogStore;
use crate::filter::FilterState;
use crate::place::{Category, VisiblePlace};
use crate::query;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct PlaceBrowser {
    catalog: CatalogStore,
    filter: FilterState,
}

impl PlaceBrowser {
    pub fn new(catalog: CatalogStore) -> Self {
        PlaceBrowser {
            catalog,
            filter: FilterState::new(),
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.filter.set_search_text(text);
        debug!(search = %self.filter.search_text, "search text changed");
    }

    /// Chip semantics: selecting the active category clears it
    pub fn set_selected_category(&mut self, category: Category) {
        self.filter.select_category(category);
        debug!(category = ?self.filter.selected_category, "category changed");
    }

    /// Replace the category filter outright
    pub fn set_category_filter(&mut self, category: Option<Category>) {
        self.filter.set_category(category);
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    /// See CatalogStore::toggle_favorite
    pub fn toggle_favorite(&mut self, id: &str) -> Option<bool> {
        self.catalog.toggle_favorite(id)
    }

    pub fn visible_places(&self) -> Vec<VisiblePlace<'_>> {
        query::visible_places(
            self.catalog.places(),
            self.catalog.favorites(),
            &self.filter.search_text,
            self.filter.selected_category,
        )
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn favorite_count(&self) -> usize {
        self.catalog.favorites().len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
