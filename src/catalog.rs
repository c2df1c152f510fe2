// 🗂️ Catalog Store - the place snapshot + the favorite set
//
// Places are fixed at construction. The FavoriteSet is the only mutable
// state and only toggle_favorite writes to it.

use crate::place::{Category, Place};
use anyhow::{bail, Result};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, info};

// ============================================================================
// CATALOG STORE
// ============================================================================

#[derive(Debug, Clone)]
pub struct CatalogStore {
    /// Catalog snapshot in insertion order
    places: Vec<Place>,

    /// Ids currently marked favorite
    favorites: BTreeSet<String>,
}

impl CatalogStore {
    /// Build a store from a catalog snapshot
    ///
    /// Duplicate ids or empty names are a bug in whoever supplied the
    /// catalog, so construction fails instead of each query coping with it.
    pub fn new(places: Vec<Place>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(places.len());

        for place in &places {
            if place.name.trim().is_empty() {
                bail!("Place {:?} has an empty name", place.id);
            }
            if !seen.insert(place.id.as_str()) {
                bail!("Duplicate place id in catalog: {:?}", place.id);
            }
        }

        info!(places = places.len(), "catalog loaded");

        Ok(CatalogStore {
            places,
            favorites: BTreeSet::new(),
        })
    }

    /// Store pre-loaded with the built-in sample places
    pub fn with_samples() -> Result<Self> {
        Self::new(sample_places())
    }

    /// Flip favorite status of `id`
    ///
    /// Returns the new status, or None when `id` is not in the catalog
    /// (nothing changes in that case).
    pub fn toggle_favorite(&mut self, id: &str) -> Option<bool> {
        if self.place(id).is_none() {
            debug!(id, "toggle_favorite on unknown id ignored");
            return None;
        }

        let now_favorite = if self.favorites.remove(id) {
            false
        } else {
            self.favorites.insert(id.to_string());
            true
        };

        debug!(id, favorite = now_favorite, "favorite toggled");
        Some(now_favorite)
    }

    /// Immutable catalog snapshot
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Current FavoriteSet (read-only)
    pub fn favorites(&self) -> &BTreeSet<String> {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    pub fn place(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

// ============================================================================
// SAMPLE DATA
// ============================================================================

/// Built-in catalog used when no catalog file is given
pub fn sample_places() -> Vec<Place> {
    vec![
        Place::new("1", "Riverside Museum", Category::Attraction, 450, 4.6, "12 River St, City"),
        Place::new("2", "Skyline Viewpoint", Category::Attraction, 900, 4.8, "Hilltop Rd, City"),
        Place::new("3", "Blue Harbor Hotel", Category::Hotel, 1200, 4.3, "45 Ocean Ave, City"),
        Place::new("4", "Bella Italia", Category::Restaurant, 300, 4.5, "22 Market Ln, City"),
        Place::new("5", "City Art Gallery", Category::Attraction, 1500, 4.7, "Museum Sq, City"),
        Place::new("6", "Maple Inn", Category::Hotel, 850, 4.1, "78 Park Rd, City"),
    ]
}

// ============================================================================
// TESTS
// ============================================================================
