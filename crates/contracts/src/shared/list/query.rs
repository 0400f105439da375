use std::collections::{BTreeMap, HashSet};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Paging, search, filter and selection state of one list view.
///
/// Owned by exactly one orchestrator instance; every mutation goes through
/// the setters so the page resets stay consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQueryState {
    /// 1-based page index.
    pub page: usize,
    pub page_size: usize,
    /// Empty string means "no search".
    pub search_term: String,
    /// Empty values are treated as absent and omitted from the request.
    pub filters: BTreeMap<String, String>,
    /// Row selection for bulk operations.
    pub selected_ids: HashSet<String>,
}

impl Default for ListQueryState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search_term: String::new(),
            filters: BTreeMap::new(),
            selected_ids: HashSet::new(),
        }
    }
}

impl ListQueryState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    /// Replace the search term. A changed term restarts from page 1.
    pub fn set_search(&mut self, term: String) {
        if self.search_term != term {
            self.page = 1;
        }
        self.search_term = term;
    }

    /// Wholesale replacement of the filter set, restarting from page 1.
    pub fn set_filters(&mut self, filters: BTreeMap<String, String>) {
        if self.filters != filters {
            self.page = 1;
        }
        self.filters = filters;
    }

    pub fn set_page(&mut self, page: usize, page_size: usize) {
        self.page = page.max(1);
        self.page_size = page_size.max(1);
    }

    /// Reset search, filters, selection and paging. The caller re-fetches via
    /// its own state-change effect; this does no I/O itself.
    pub fn clear_all(&mut self) {
        self.page = 1;
        self.search_term.clear();
        self.filters.clear();
        self.selected_ids.clear();
    }

    /// Build the outgoing query string: `page` and `limit` always, `search`
    /// only when non-empty, plus every non-empty filter entry.
    pub fn query_string(&self) -> String {
        let mut pairs: Vec<(String, String)> = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.page_size.to_string()),
        ];
        if !self.search_term.is_empty() {
            pairs.push(("search".to_string(), self.search_term.clone()));
        }
        for (key, value) in &self.filters {
            if !value.is_empty() {
                pairs.push((key.clone(), value.clone()));
            }
        }
        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_string_has_paging_only() {
        let state = ListQueryState::new(25);
        assert_eq!(state.query_string(), "page=1&limit=25");
    }

    #[test]
    fn empty_search_is_omitted() {
        let mut state = ListQueryState::default();
        state.set_search("abc".to_string());
        assert!(state.query_string().contains("search=abc"));
        state.set_search(String::new());
        assert!(!state.query_string().contains("search"));
    }

    #[test]
    fn empty_filter_values_are_omitted() {
        let mut state = ListQueryState::default();
        let mut filters = BTreeMap::new();
        filters.insert("status".to_string(), "active".to_string());
        filters.insert("phone".to_string(), String::new());
        state.set_filters(filters);
        let qs = state.query_string();
        assert!(qs.contains("status=active"));
        assert!(!qs.contains("phone"));
    }

    #[test]
    fn values_are_percent_encoded() {
        let mut state = ListQueryState::default();
        state.set_search("a b&c".to_string());
        assert!(state.query_string().contains("search=a%20b%26c"));
    }

    #[test]
    fn search_and_filter_changes_reset_the_page() {
        let mut state = ListQueryState::default();
        state.set_page(4, 10);
        state.set_search("abc".to_string());
        assert_eq!(state.page, 1);

        state.set_page(3, 10);
        let mut filters = BTreeMap::new();
        filters.insert("status".to_string(), "active".to_string());
        state.set_filters(filters.clone());
        assert_eq!(state.page, 1);

        // Re-applying identical filters keeps the page.
        state.set_page(2, 10);
        state.set_filters(filters);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn clear_all_resets_everything() {
        let mut state = ListQueryState::default();
        state.set_search("abc".to_string());
        state.set_page(5, 50);
        state.selected_ids.insert("x".to_string());
        state.clear_all();
        assert_eq!(state.page, 1);
        assert!(state.search_term.is_empty());
        assert!(state.filters.is_empty());
        assert!(state.selected_ids.is_empty());
        // page_size survives a clear
        assert_eq!(state.page_size, 50);
    }

    #[test]
    fn page_and_page_size_are_clamped() {
        let mut state = ListQueryState::default();
        state.set_page(0, 0);
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, 1);
    }
}
