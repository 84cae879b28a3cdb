use std::collections::HashSet;

use crate::query::FilterCriteria;

/// Presentation state: the filter criteria plus which songs are expanded.
///
/// The expanded set belongs to the presentation layer and never reaches the
/// filter pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    criteria: FilterCriteria,
    expanded: HashSet<String>,
}

impl ViewState {
    pub fn new(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            expanded: HashSet::new(),
        }
    }

    /// Restore view state from a query string. Expanded items are not part of the query.
    pub fn from_query_str(query: &str) -> Self {
        Self::new(FilterCriteria::from_query_str(query))
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replace the criteria, returning the query string that replaces the previous one
    pub fn set_criteria(&mut self, criteria: FilterCriteria) -> String {
        self.criteria = criteria;
        self.query_string()
    }

    /// Apply a criteria update, e.g. `|c| c.with_search_term("x")`
    pub fn update(&mut self, f: impl FnOnce(FilterCriteria) -> FilterCriteria) -> String {
        let criteria = std::mem::take(&mut self.criteria);
        self.set_criteria(f(criteria))
    }

    pub fn query_string(&self) -> String {
        self.criteria.to_query_string()
    }

    pub fn is_expanded(&self, song_id: &str) -> bool {
        self.expanded.contains(song_id)
    }

    pub fn expand(&mut self, song_id: impl Into<String>) {
        self.expanded.insert(song_id.into());
    }

    pub fn collapse(&mut self, song_id: &str) {
        self.expanded.remove(song_id);
    }

    /// Flip one song's expanded state, returning the new state
    pub fn toggle_expanded(&mut self, song_id: &str) -> bool {
        if self.expanded.remove(song_id) {
            false
        } else {
            self.expanded.insert(song_id.to_string());
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::Badge;

    #[test]
    fn test_toggle_expanded() {
        let mut view = ViewState::default();
        assert!(!view.is_expanded("11"));
        assert!(view.toggle_expanded("11"));
        assert!(view.is_expanded("11"));
        assert!(!view.toggle_expanded("11"));
        assert!(!view.is_expanded("11"));
    }

    #[test]
    fn test_expand_and_collapse() {
        let mut view = ViewState::default();
        view.expand("11");
        view.expand("12");
        view.collapse("11");
        assert!(!view.is_expanded("11"));
        assert!(view.is_expanded("12"));

        // Collapsing an item that is not expanded is a no-op
        view.collapse("99");
        assert!(view.is_expanded("12"));
    }

    #[test]
    fn test_update_resets_page_and_returns_query() {
        let mut view = ViewState::new(FilterCriteria::new().with_page(3));
        view.expand("42");

        let query = view.update(|c| c.with_badge_filter(Badge::Baipu, true));
        assert_eq!(query, "badgeFilters=baipu");
        assert_eq!(view.criteria().page, 1);
        // Expanded items survive criteria changes
        assert!(view.is_expanded("42"));
    }

    #[test]
    fn test_from_query_str() {
        let view = ViewState::from_query_str("?page=2&searchTerm=garakuta");
        assert_eq!(view.criteria().page, 2);
        assert_eq!(view.criteria().search_term, "garakuta");
        assert_eq!(view.query_string(), "page=2&searchTerm=garakuta");
    }
}
