//! Query State
//!
//! URL query parameters (`page`, `size`, `search`) and the rewrites the
//! table requests when the user navigates.

use url::form_urlencoded;

use crate::page::{is_allowed_size, DEFAULT_PAGE_SIZE};

pub const PAGE_PARAM: &str = "page";
pub const SIZE_PARAM: &str = "size";
pub const SEARCH_PARAM: &str = "search";

/// What the caller should fetch next, as read from the URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub page: u32,
    pub size: u32,
    pub search: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
            search: String::new(),
        }
    }
}

impl QueryState {
    /// Parse a raw query string (with or without the leading `?`).
    /// Malformed or out-of-range values fall back to the defaults.
    pub fn from_query(query: &str) -> Self {
        let mut state = Self::default();
        for (key, value) in parse(query) {
            match key.as_str() {
                PAGE_PARAM => {
                    if let Ok(page) = value.trim().parse::<u32>() {
                        if page >= 1 {
                            state.page = page;
                        }
                    }
                }
                SIZE_PARAM => {
                    if let Ok(size) = value.trim().parse::<u32>() {
                        if is_allowed_size(size) {
                            state.size = size;
                        }
                    }
                }
                SEARCH_PARAM => state.search = value,
                _ => {}
            }
        }
        state
    }

    /// Query string for the remote API (`page=..&size=..[&search=..]`)
    pub fn to_api_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair(PAGE_PARAM, &self.page.to_string());
        serializer.append_pair(SIZE_PARAM, &self.size.to_string());
        if !self.search.is_empty() {
            serializer.append_pair(SEARCH_PARAM, &self.search);
        }
        serializer.finish()
    }
}

/// Requested changes to the query; `None` leaves a parameter untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryUpdate {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub search: Option<String>,
}

impl QueryUpdate {
    pub fn page(page: u32) -> Self {
        Self { page: Some(page), ..Default::default() }
    }

    /// A new page size always starts over at page 1
    pub fn size(size: u32) -> Self {
        Self { page: Some(1), size: Some(size), ..Default::default() }
    }

    /// A new search always starts over at page 1
    pub fn search(search: impl Into<String>) -> Self {
        Self { page: Some(1), search: Some(search.into()), ..Default::default() }
    }

    fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = Vec::new();
        if let Some(page) = self.page {
            entries.push((PAGE_PARAM, if page == 0 { String::new() } else { page.to_string() }));
        }
        if let Some(size) = self.size {
            entries.push((SIZE_PARAM, if size == 0 { String::new() } else { size.to_string() }));
        }
        if let Some(search) = &self.search {
            entries.push((SEARCH_PARAM, search.clone()));
        }
        entries
    }
}

/// A request to move the browser to `?{query}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub query: String,
    /// Replace the current history entry instead of pushing a new one
    pub replace: bool,
}

impl Navigation {
    /// Relative href form (`?page=2`)
    pub fn href(&self) -> String {
        format!("?{}", self.query)
    }
}

/// Apply `update` to `current`, keeping every other parameter in place.
///
/// Set values overwrite the first occurrence of their key and drop any
/// duplicates; empty values remove the key entirely.
pub fn apply_updates(current: &str, update: &QueryUpdate) -> String {
    let mut pairs = parse(current);

    for (key, value) in update.entries() {
        if value.is_empty() {
            pairs.retain(|(k, _)| k != key);
            continue;
        }
        match pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                pairs[first].1 = value;
                let mut index = 0;
                pairs.retain(|(k, _)| {
                    let keep = index <= first || k != key;
                    index += 1;
                    keep
                });
            }
            None => pairs.push((key.to_string(), value)),
        }
    }

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter())
        .finish()
}

/// Jump to `page`; page links push a history entry
pub fn page_navigation(current: &str, page: u32) -> Navigation {
    Navigation {
        query: apply_updates(current, &QueryUpdate::page(page)),
        replace: false,
    }
}

/// Switch page size, back to page 1, replacing the history entry
pub fn size_navigation(current: &str, size: u32) -> Navigation {
    Navigation {
        query: apply_updates(current, &QueryUpdate::size(size)),
        replace: true,
    }
}

/// Apply a settled search, back to page 1, replacing the history entry.
/// Nothing to do when the URL already carries this search.
pub fn search_navigation(current: &str, search: &str) -> Option<Navigation> {
    let current_search = query_param(current, SEARCH_PARAM).unwrap_or_default();
    if current_search == search {
        return None;
    }
    Some(Navigation {
        query: apply_updates(current, &QueryUpdate::search(search)),
        replace: true,
    })
}

/// Read a single parameter from a raw query string
pub fn query_param(query: &str, key: &str) -> Option<String> {
    parse(query).into_iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

fn parse(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .into_owned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_query_state() {
        let state = QueryState::from_query("?page=3&size=20&search=ivan+petrov&sort=name");
        assert_eq!(state, QueryState { page: 3, size: 20, search: "ivan petrov".into() });
    }

    #[test]
    fn malformed_values_fall_back() {
        let state = QueryState::from_query("page=0&size=7");
        assert_eq!(state, QueryState::default());
        let state = QueryState::from_query("page=abc&size=-1");
        assert_eq!(state, QueryState::default());
    }

    #[test]
    fn api_query_omits_empty_search() {
        assert_eq!(QueryState::default().to_api_query(), "page=1&size=10");
        let state = QueryState { page: 2, size: 50, search: "a&b".into() };
        assert_eq!(state.to_api_query(), "page=2&size=50&search=a%26b");
    }

    #[test]
    fn page_change_keeps_other_params() {
        let next = apply_updates("size=20&page=2&sort=email", &QueryUpdate::page(3));
        assert_eq!(next, "size=20&page=3&sort=email");
    }

    #[test]
    fn size_change_resets_page() {
        for current in ["", "page=7", "page=7&size=50", "search=x&page=2"] {
            let next = apply_updates(current, &QueryUpdate::size(20));
            let state = QueryState::from_query(&next);
            assert_eq!(state.page, 1, "from {current:?}");
            assert_eq!(state.size, 20);
        }
    }

    #[test]
    fn empty_search_removes_param() {
        let next = apply_updates("page=4&search=old", &QueryUpdate::search(""));
        assert_eq!(next, "page=1");
    }

    #[test]
    fn duplicates_collapse_on_set() {
        let next = apply_updates("page=1&x=y&page=2", &QueryUpdate::page(5));
        assert_eq!(next, "page=5&x=y");
    }

    #[test]
    fn page_links_push_history() {
        let nav = page_navigation("size=20&page=2&search=iv", 3);
        assert_eq!(nav, Navigation { query: "size=20&page=3&search=iv".into(), replace: false });
        assert_eq!(nav.href(), "?size=20&page=3&search=iv");
    }

    #[test]
    fn size_selection_replaces_history_and_resets_page() {
        let nav = size_navigation("page=4&size=10&search=iv", 50);
        assert!(nav.replace);
        let state = QueryState::from_query(&nav.query);
        assert_eq!(state, QueryState { page: 1, size: 50, search: "iv".into() });
    }

    #[test]
    fn unchanged_search_emits_nothing() {
        assert_eq!(search_navigation("page=3&search=ivan", "ivan"), None);
        assert_eq!(search_navigation("page=3", ""), None);
        assert_eq!(search_navigation("search=a+b", "a b"), None);
    }

    #[test]
    fn new_search_replaces_history_and_resets_page() {
        let nav = search_navigation("page=3&size=20&search=old", "a b&c=d+é").unwrap();
        assert!(nav.replace);
        let state = QueryState::from_query(&nav.query);
        assert_eq!(state, QueryState { page: 1, size: 20, search: "a b&c=d+é".into() });
    }

    #[test]
    fn cleared_search_drops_the_param() {
        let nav = search_navigation("page=2&search=old", "").unwrap();
        assert_eq!(nav.query, "page=1");
        assert!(nav.replace);
    }

    #[test]
    fn reads_single_param() {
        assert_eq!(query_param("?search=%D0%B8%D0%B2", SEARCH_PARAM).as_deref(), Some("ив"));
        assert_eq!(query_param("page=1", SEARCH_PARAM), None);
    }
}
