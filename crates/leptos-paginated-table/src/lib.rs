//! Leptos Paginated Table
//!
//! Server-paginated table for Leptos with URL-driven state.
//! The table derives its rows and controls from one server page plus the
//! current URL query, and asks its owner to navigate whenever the user
//! changes page, page size or search.

mod debounce;
mod filter;
mod page;
mod query;
mod table;
mod window;

pub use debounce::{use_debounced, Debouncer, Ticket, SEARCH_DEBOUNCE};
pub use filter::{filter_rows, row_matches, Column, TableRow};
pub use page::{is_allowed_size, Page, DEFAULT_PAGE_SIZE, ITEMS_PER_PAGE};
pub use query::{
    apply_updates, page_navigation, query_param, search_navigation, size_navigation, Navigation,
    QueryState, QueryUpdate, PAGE_PARAM, SEARCH_PARAM, SIZE_PARAM,
};
pub use table::{PaginatedTable, PaginatedTableSkeleton};
pub use window::{page_window, PageLabel};
