//! Paginated Table Component
//!
//! Renders one server page with a debounced search box, a page-size selector
//! and pagination controls. Never fetches anything itself: every change is
//! reported as a [`Navigation`] and the owner reloads the data.

use leptos::prelude::*;

use crate::debounce::{use_debounced, SEARCH_DEBOUNCE};
use crate::filter::{filter_rows, Column, TableRow};
use crate::page::{Page, ITEMS_PER_PAGE};
use crate::query::{
    page_navigation, query_param, search_navigation, size_navigation, Navigation, SEARCH_PARAM,
};
use crate::window::{page_window, PageLabel};

const DEFAULT_PLACEHOLDER: &str = "Search...";

fn render_cell<T: TableRow>(column: &Column<T>, row: &T) -> AnyView {
    match column.cell {
        Some(cell) => cell(row),
        None => column.text(row).into_any(),
    }
}

/// Paginated, client-searchable table
///
/// Props:
/// - page: the current server page
/// - columns: column descriptors, in display order
/// - query: raw URL query string the page was loaded for
/// - on_navigate: receives the query the table wants next
#[component]
pub fn PaginatedTable<T>(
    #[prop(into)] page: Signal<Page<T>>,
    columns: Vec<Column<T>>,
    #[prop(into)] query: Signal<String>,
    #[prop(into)] on_navigate: Callback<Navigation>,
    #[prop(optional, into)] search_placeholder: Option<String>,
) -> impl IntoView
where
    T: TableRow + Clone + Send + Sync + 'static,
{
    let column_count = columns.len();
    let columns = StoredValue::new(columns);
    let placeholder = search_placeholder.unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string());

    // Raw input drives the filter; the debounced copy drives the URL
    let initial_search = query_param(&query.get_untracked(), SEARCH_PARAM).unwrap_or_default();
    let (search_input, set_search_input) = signal(initial_search);
    let debounced_search = use_debounced(Signal::<String>::from(search_input), SEARCH_DEBOUNCE);

    let navigate = move |navigation: Navigation| {
        log::debug!("[TABLE] navigate to {}", navigation.href());
        on_navigate.run(navigation);
    };
    let go_to_page = move |target: u32| navigate(page_navigation(&query.get_untracked(), target));

    Effect::new(move |_| {
        let search = debounced_search.get();
        let navigation = query.with_untracked(|current| search_navigation(current, &search));
        if let Some(navigation) = navigation {
            navigate(navigation);
        }
    });

    let filtered_rows = move || {
        let search = search_input.get();
        page.with(|p| columns.with_value(|cols| filter_rows(&p.items, cols, &search)))
    };

    let page_href = move |target: u32| page_navigation(&query.get(), target).href();

    view! {
        <div class="paginated-table card">
            <div class="paginated-table-header">
                <input
                    type="text"
                    class="paginated-table-search"
                    placeholder=placeholder
                    prop:value=move || search_input.get()
                    on:input=move |ev| set_search_input.set(event_target_value(&ev))
                />
                <label for="items-per-page">"Rows per page:"</label>
                <select
                    id="items-per-page"
                    prop:value=move || page.with(|p| p.size.to_string())
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                            navigate(size_navigation(&query.get_untracked(), size));
                        }
                    }
                >
                    {ITEMS_PER_PAGE.iter().map(|count| view! {
                        <option value=count.to_string()>{*count}</option>
                    }).collect_view()}
                </select>
            </div>

            <table class="paginated-table-body">
                <thead>
                    <tr>
                        {columns.with_value(|cols| cols.iter().map(|column| view! {
                            <th>{column.header.clone()}</th>
                        }).collect_view())}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = filtered_rows();
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td class="no-results" colspan=column_count.to_string()>
                                        "No results found."
                                    </td>
                                </tr>
                            }.into_any()
                        } else {
                            rows.into_iter().map(|row| view! {
                                <tr>
                                    {columns.with_value(|cols| cols.iter().map(|column| view! {
                                        <td>{render_cell(column, &row)}</td>
                                    }).collect_view())}
                                </tr>
                            }).collect_view().into_any()
                        }
                    }}
                </tbody>
            </table>

            <Show when=move || page.with(|p| p.shows_controls())>
                <div class="paginated-table-footer">
                    <span class="total-items">
                        {move || format!("{} results in total", page.with(|p| p.total_items))}
                    </span>
                    <ul class="pagination">
                        <li>
                            <a
                                class=move || {
                                    if page.with(Page::has_previous) {
                                        "page-prev"
                                    } else {
                                        "page-prev disabled"
                                    }
                                }
                                href=move || page_href(page.with(Page::previous_page))
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    if page.with(Page::has_previous) {
                                        go_to_page(page.with(Page::previous_page));
                                    }
                                }
                            >
                                "Previous"
                            </a>
                        </li>
                        {move || {
                            let (current, total) = page.with(|p| (p.current_page, p.total_pages));
                            page_window(current, total).into_iter().map(|label| match label {
                                PageLabel::Page(number) => view! {
                                    <li>
                                        <a
                                            class=if number == current {
                                                "page-link active"
                                            } else {
                                                "page-link"
                                            }
                                            href=page_href(number)
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                go_to_page(number);
                                            }
                                        >
                                            {number}
                                        </a>
                                    </li>
                                }.into_any(),
                                PageLabel::Ellipsis => view! {
                                    <li class="page-ellipsis">"…"</li>
                                }.into_any(),
                            }).collect_view()
                        }}
                        <li>
                            <a
                                class=move || {
                                    if page.with(Page::has_next) {
                                        "page-next"
                                    } else {
                                        "page-next disabled"
                                    }
                                }
                                href=move || page_href(page.with(Page::next_page))
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    if page.with(Page::has_next) {
                                        go_to_page(page.with(Page::next_page));
                                    }
                                }
                            >
                                "Next"
                            </a>
                        </li>
                    </ul>
                </div>
            </Show>
        </div>
    }
}

/// Placeholder shown while the first page is loading
#[component]
pub fn PaginatedTableSkeleton(
    #[prop(default = 5)] columns: usize,
    #[prop(default = 10)] rows: usize,
) -> impl IntoView {
    view! {
        <div class="paginated-table card skeleton">
            <div class="paginated-table-header">
                <div class="skeleton-block search"></div>
                <div class="skeleton-block size"></div>
            </div>
            <table class="paginated-table-body">
                <thead>
                    <tr>
                        {(0..columns)
                            .map(|_| view! { <th><div class="skeleton-block"></div></th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {(0..rows).map(|_| view! {
                        <tr>
                            {(0..columns)
                                .map(|_| view! { <td><div class="skeleton-block"></div></td> })
                                .collect_view()}
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
            <div class="paginated-table-footer">
                <div class="skeleton-block total"></div>
                <div class="skeleton-block pagination"></div>
            </div>
        </div>
    }
}
