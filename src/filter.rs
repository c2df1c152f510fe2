// 🎚️ Filter State - search text + selected category for one browsing session

use crate::place::Category;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_text: String,
    pub selected_category: Option<Category>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Category chip behavior: picking the selected category again clears
    /// the filter, picking another one replaces it
    pub fn select_category(&mut self, category: Category) {
        self.selected_category = if self.selected_category == Some(category) {
            None
        } else {
            Some(category)
        };
    }

    /// One-way set (no toggle)
    pub fn set_category(&mut self, category: Option<Category>) {
        self.selected_category = category;
    }

    pub fn clear(&mut self) {
        self.search_text.clear();
        self.selected_category = None;
    }

    /// True when either input narrows the list
    pub fn is_active(&self) -> bool {
        !self.search_text.trim().is_empty() || self.selected_category.is_some()
    }
}
