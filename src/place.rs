// 📍 Place Model - points of interest and their favorite-aware projection
//
// A Place never carries a favorite flag. Favorite status lives only in the
// catalog's FavoriteSet and is merged in per query via VisiblePlace.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

// ============================================================================
// CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(alias = "Attractions", alias = "attraction", alias = "attractions")]
    Attraction,

    #[serde(alias = "Restaurants", alias = "restaurant", alias = "restaurants")]
    Restaurant,

    #[serde(alias = "Hotels", alias = "hotel", alias = "hotels")]
    Hotel,
}

impl Category {
    /// Chip order on the browse screen
    pub const ALL: [Category; 3] = [Category::Attraction, Category::Restaurant, Category::Hotel];

    /// Chip label (plural)
    pub fn label(&self) -> &'static str {
        match self {
            Category::Attraction => "Attractions",
            Category::Restaurant => "Restaurants",
            Category::Hotel => "Hotels",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Attraction => "Attraction",
            Category::Restaurant => "Restaurant",
            Category::Hotel => "Hotel",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    /// Accepts singular or plural, any case ("hotel", "Hotels")
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "attraction" | "attractions" => Ok(Category::Attraction),
            "restaurant" | "restaurants" => Ok(Category::Restaurant),
            "hotel" | "hotels" => Ok(Category::Hotel),
            other => bail!("Unknown category: {:?} (expected attraction, restaurant or hotel)", other),
        }
    }
}

// ============================================================================
// PLACE
// ============================================================================

/// One point of interest in the catalog
///
/// Immutable once it enters a CatalogStore. `distance_meters` is an opaque
/// stored value relative to an implicit reference point; nothing recomputes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Stable identity, unique across the catalog
    pub id: String,

    /// Display name (non-empty)
    pub name: String,

    pub category: Category,

    pub distance_meters: u32,

    /// Usually 0.0 - 5.0, not enforced
    pub rating: f64,

    pub address: String,
}

impl Place {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        distance_meters: u32,
        rating: f64,
        address: impl Into<String>,
    ) -> Self {
        Place {
            id: id.into(),
            name: name.into(),
            category,
            distance_meters,
            rating,
            address: address.into(),
        }
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_meters as f64 / 1000.0
    }

    /// Rating with at least one decimal ("4.0", "4.65")
    pub fn rating_text(&self) -> String {
        format!("{:?}", self.rating)
    }

    /// Distance in km, one decimal, ties rounded up ("1250" → "1.3")
    pub fn distance_text(&self) -> String {
        let tenths = (self.distance_meters as u64 + 50) / 100;
        format!("{}.{}", tenths / 10, tenths % 10)
    }

    /// "4.6 • 0.5 km away"
    pub fn summary_line(&self) -> String {
        format!("{} • {} km away", self.rating_text(), self.distance_text())
    }
}

// ============================================================================
// VISIBLE PLACE (query projection)
// ============================================================================

/// A catalog place plus its favorite status at query time.
///
/// Borrowed from the store and rebuilt on every query, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisiblePlace<'a> {
    pub place: &'a Place,
    pub is_favorite: bool,
}

impl Deref for VisiblePlace<'_> {
    type Target = Place;

    fn deref(&self) -> &Place {
        self.place
    }
}

// ============================================================================
// TESTS
// ============================================================================
