// 📂 Catalog Loader - initial catalog from a JSON or CSV file
//
// Read once at start-up. Nothing is ever written back.

use crate::place::Place;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Load places from `path`, picking the format from the extension
///
/// - `.json`: array of place objects
/// - `.csv`:  header `id,name,category,distance_meters,rating,address`
pub fn load_catalog(path: &Path) -> Result<Vec<Place>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    let places = match extension.as_deref() {
        Some("json") => load_json(path)?,
        Some("csv") => load_csv(path)?,
        _ => bail!("Unsupported catalog format: {:?} (expected .json or .csv)", path),
    };

    info!(path = %path.display(), places = places.len(), "catalog file read");
    Ok(places)
}

pub fn load_json(path: &Path) -> Result<Vec<Place>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {:?}", path))?;

    let places: Vec<Place> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse catalog JSON: {:?}", path))?;

    Ok(places)
}

pub fn load_csv(path: &Path) -> Result<Vec<Place>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open catalog CSV: {:?}", path))?;

    let mut places = Vec::new();

    for (i, result) in rdr.deserialize().enumerate() {
        // +2: header line and 1-based numbering
        let place: Place = result
            .with_context(|| format!("Failed to deserialize place on line {}", i + 2))?;
        places.push(place);
    }

    Ok(places)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::PlaceBrowser;
    use crate::catalog::CatalogStore;
    use crate::place::Category;
    use std::io::Write;
    use tempfile::Builder;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_json_catalog() {
        let file = write_temp(
            ".json",
            r#"[
                {"id": "1", "name": "Riverside Museum", "category": "Attraction",
                 "distance_meters": 450, "rating": 4.6, "address": "12 River St, City"},
                {"id": "3", "name": "Blue Harbor Hotel", "category": "Hotels",
                 "distance_meters": 1200, "rating": 4.3, "address": "45 Ocean Ave, City"}
            ]"#,
        );

        let places = load_catalog(file.path()).unwrap();
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].name, "Riverside Museum");
        assert_eq!(places[1].category, Category::Hotel);
        assert_eq!(places[1].distance_meters, 1200);
    }

    #[test]
    fn test_stored_favorite_flag_is_ignored() {
        let file = write_temp(
            ".json",
            r#"[
                {"id": "3", "name": "Blue Harbor Hotel", "category": "Hotel",
                 "distance_meters": 1200, "rating": 4.3, "address": "45 Ocean Ave, City",
                 "isFavorite": true},
                {"id": "6", "name": "Maple Inn", "category": "Hotel",
                 "distance_meters": 850, "rating": 4.1, "address": "78 Park Rd, City",
                 "is_favorite": true}
            ]"#,
        );

        let places = load_catalog(file.path()).unwrap();
        let browser = PlaceBrowser::new(CatalogStore::new(places).unwrap());

        assert_eq!(browser.favorite_count(), 0);
        let visible = browser.visible_places();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|v| !v.is_favorite));
    }

    #[test]
    fn test_load_csv_catalog() {
        let file = write_temp(
            ".csv",
            "id,name,category,distance_meters,rating,address\n\
             4,Bella Italia,Restaurant,300,4.5,\"22 Market Ln, City\"\n\
             6,Maple Inn,Hotel,850,4.1,\"78 Park Rd, City\"\n",
        );

        let places = load_catalog(file.path()).unwrap();
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].address, "22 Market Ln, City");
        assert_eq!(places[1].category, Category::Hotel);
        assert_eq!(places[1].rating, 4.1);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let file = write_temp(
            ".csv",
            "id,name,category,distance_meters,rating,address\n\
             9,Old Mill,Museum,100,4.0,Mill Rd\n",
        );

        let err = load_catalog(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_temp(".txt", "whatever");
        assert!(load_catalog(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(load_catalog(Path::new("/definitely/not/here.json")).is_err());
    }
}
