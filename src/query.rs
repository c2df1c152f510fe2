// 🔎 Query Engine - (places, favorites, search text, category) → visible list
//
// Pure and stateless. Output keeps catalog order; no sorting by distance,
// rating or name is ever applied.

use crate::place::{Category, Place, VisiblePlace};
use std::collections::BTreeSet;

/// Category predicate: unset filter lets everything through
pub fn matches_category(place: &Place, selected: Option<Category>) -> bool {
    match selected {
        None => true,
        Some(category) => place.category == category,
    }
}

/// Single-char case fold: uppercase, then lowercase, keeping one char per
/// input char so "İ" folds to "i" and "ß" stays "ß"
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    let c = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    };
    c.to_lowercase().next().unwrap_or(c)
}

/// Search predicate: blank text matches all, otherwise a case-insensitive
/// substring test against the name, compared char by char
pub fn matches_search(place: &Place, search_text: &str) -> bool {
    if search_text.trim().is_empty() {
        return true;
    }

    let name: Vec<char> = place.name.chars().map(fold_char).collect();
    let needle: Vec<char> = search_text.chars().map(fold_char).collect();

    name.windows(needle.len()).any(|w| w == needle.as_slice())
}

/// Compute the visible list
///
/// `is_favorite` comes from `favorites` membership only.
pub fn visible_places<'a>(
    places: &'a [Place],
    favorites: &BTreeSet<String>,
    search_text: &str,
    selected: Option<Category>,
) -> Vec<VisiblePlace<'a>> {
    places
        .iter()
        .filter(|p| matches_category(p, selected) && matches_search(p, search_text))
        .map(|p| VisiblePlace {
            place: p,
            is_favorite: favorites.contains(&p.id),
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_places;

    fn three_places() -> Vec<Place> {
        vec![
            Place::new("1", "Riverside Museum", Category::Attraction, 450, 4.6, "12 River St, City"),
            Place::new("3", "Blue Harbor Hotel", Category::Hotel, 1200, 4.3, "45 Ocean Ave, City"),
            Place::new("4", "Bella Italia", Category::Restaurant, 300, 4.5, "22 Market Ln, City"),
        ]
    }

    fn names<'a>(visible: &[VisiblePlace<'a>]) -> Vec<&'a str> {
        visible.iter().map(|v| v.place.name.as_str()).collect()
    }

    #[test]
    fn test_no_filters_returns_all_in_order() {
        let places = three_places();
        let visible = visible_places(&places, &BTreeSet::new(), "", None);

        assert_eq!(names(&visible), vec!["Riverside Museum", "Blue Harbor Hotel", "Bella Italia"]);
        assert!(visible.iter().all(|v| !v.is_favorite));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let places = three_places();
        let visible = visible_places(&places, &BTreeSet::new(), "harbor", None);
        assert_eq!(names(&visible), vec!["Blue Harbor Hotel"]);

        let visible = visible_places(&places, &BTreeSet::new(), "BELLA IT", None);
        assert_eq!(names(&visible), vec!["Bella Italia"]);
    }

    #[test]
    fn test_search_folds_each_char() {
        let istanbul = Place::new("7", "Istanbul Kebab", Category::Restaurant, 200, 4.2, "Bazaar St");
        assert!(matches_search(&istanbul, "İ"));
        assert!(matches_search(&istanbul, "İSTAN"));

        let strasse = Place::new("8", "Hotel Straße", Category::Hotel, 700, 4.0, "Ring 1");
        assert!(!matches_search(&strasse, "STRASSE"));
        assert!(matches_search(&strasse, "straße"));
        assert!(matches_search(&strasse, "STRAßE"));

        let cafe = Place::new("9", "ÉCLAIR Café", Category::Restaurant, 100, 4.4, "Rue 2");
        assert!(matches_search(&cafe, "éclair café"));
    }

    #[test]
    fn test_search_longer_than_name() {
        let place = Place::new("1", "Inn", Category::Hotel, 10, 4.0, "x");
        assert!(!matches_search(&place, "Inn by the sea"));
    }

    #[test]
    fn test_whitespace_search_is_blank() {
        let places = three_places();
        let visible = visible_places(&places, &BTreeSet::new(), "   \t", None);
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn test_search_text_is_not_trimmed_when_non_blank() {
        let places = three_places();
        // "Museum " with trailing space does not occur in any name
        let visible = visible_places(&places, &BTreeSet::new(), "Museum ", None);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_category_filter() {
        let places = three_places();
        let visible = visible_places(&places, &BTreeSet::new(), "", Some(Category::Hotel));
        assert_eq!(names(&visible), vec!["Blue Harbor Hotel"]);
    }

    #[test]
    fn test_category_and_search_combine() {
        let places = sample_places();

        let visible = visible_places(&places, &BTreeSet::new(), "i", Some(Category::Hotel));
        assert_eq!(names(&visible), vec!["Maple Inn"]);

        let visible = visible_places(&places, &BTreeSet::new(), "harbor", Some(Category::Attraction));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_favorite_flag_comes_from_set() {
        let places = three_places();
        let favorites: BTreeSet<String> = ["3".to_string()].into_iter().collect();

        let visible = visible_places(&places, &favorites, "", None);
        let flags: Vec<(&str, bool)> = visible.iter().map(|v| (v.id.as_str(), v.is_favorite)).collect();
        assert_eq!(flags, vec![("1", false), ("3", true), ("4", false)]);
    }

    #[test]
    fn test_stale_favorite_ids_do_not_add_places() {
        let places = three_places();
        let favorites: BTreeSet<String> = ["99".to_string()].into_iter().collect();

        let visible = visible_places(&places, &favorites, "", None);
        assert_eq!(visible.len(), 3);
        assert!(visible.iter().all(|v| !v.is_favorite));
    }

    #[test]
    fn test_empty_catalog() {
        let visible = visible_places(&[], &BTreeSet::new(), "anything", Some(Category::Hotel));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_output_is_exactly_the_matching_subsequence() {
        let places = sample_places();
        let searches = ["", " ", "a", "CITY", "inn", "zzz", "view"];
        let categories = [None, Some(Category::Attraction), Some(Category::Restaurant), Some(Category::Hotel)];

        for search in searches {
            for category in categories {
                let visible = visible_places(&places, &BTreeSet::new(), search, category);

                let expected: Vec<&str> = places
                    .iter()
                    .filter(|p| {
                        (category.is_none() || Some(p.category) == category)
                            && (search.trim().is_empty()
                                || p.name.to_lowercase().contains(&search.to_lowercase()))
                    })
                    .map(|p| p.id.as_str())
                    .collect();
                let actual: Vec<&str> = visible.iter().map(|v| v.id.as_str()).collect();

                assert_eq!(actual, expected, "search={:?} category={:?}", search, category);
            }
        }
    }
}
