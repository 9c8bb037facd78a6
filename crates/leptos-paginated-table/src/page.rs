//! Page Model
//!
//! One server-returned slice of a larger collection.

use serde::{Deserialize, Serialize};

/// Page sizes offered by the size selector
pub const ITEMS_PER_PAGE: [u32; 4] = [10, 20, 50, 100];

/// Size used when the URL carries none or an unknown one
pub const DEFAULT_PAGE_SIZE: u32 = ITEMS_PER_PAGE[0];

/// Paginated response (matches the API's JSON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub current_page: u32,
    pub total_pages: u32,
    pub size: u32,
    pub total_items: u64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// A first page with nothing on it
    pub fn empty(size: u32) -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            size,
            total_items: 0,
            items: Vec::new(),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Target of the "Previous" link, clamped to the first page
    pub fn previous_page(&self) -> u32 {
        self.current_page.saturating_sub(1).max(1)
    }

    /// Target of the "Next" link, clamped to the last page
    pub fn next_page(&self) -> u32 {
        self.current_page.saturating_add(1).min(self.total_pages.max(1))
    }

    /// Pagination controls are only worth showing with more than one page
    pub fn shows_controls(&self) -> bool {
        self.total_pages > 1
    }
}

/// Whether `size` is one of the selectable page sizes
pub fn is_allowed_size(size: u32) -> bool {
    ITEMS_PER_PAGE.contains(&size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case() {
        let json =
            r#"{"currentPage":2,"totalPages":3,"size":10,"totalItems":25,"items":["a","b"]}"#;
        let page: Page<String> = serde_json::from_str(json).unwrap();
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_items, 25);
        assert_eq!(page.items, vec!["a".to_string(), "b".to_string()]);
        assert!(page.has_previous());
        assert!(page.has_next());
        assert!(page.shows_controls());
    }

    #[test]
    fn boundaries() {
        let page = Page::<u8> {
            current_page: 1,
            total_pages: 1,
            size: 10,
            total_items: 3,
            items: vec![1, 2, 3],
        };
        assert!(!page.has_previous());
        assert!(!page.has_next());
        assert!(!page.shows_controls());
    }

    #[test]
    fn neighbours_stay_in_range() {
        let mut page = Page::<u8>::empty(DEFAULT_PAGE_SIZE);
        page.total_pages = 5;
        assert_eq!((page.previous_page(), page.next_page()), (1, 2));

        page.current_page = 5;
        assert_eq!((page.previous_page(), page.next_page()), (4, 5));

        page.current_page = u32::MAX;
        page.total_pages = u32::MAX;
        assert_eq!(page.next_page(), u32::MAX);

        let empty = Page::<u8>::empty(DEFAULT_PAGE_SIZE);
        assert_eq!((empty.previous_page(), empty.next_page()), (1, 1));
    }

    #[test]
    fn empty_page_has_no_controls() {
        let page = Page::<u8>::empty(DEFAULT_PAGE_SIZE);
        assert_eq!(page.current_page, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_next());
        assert!(!page.shows_controls());
    }

    #[test]
    fn size_allow_list() {
        assert!(is_allowed_size(20));
        assert!(!is_allowed_size(7));
    }
}
