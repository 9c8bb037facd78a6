//! Users Page
//!
//! Loads the users page matching the current URL query and hands it to the
//! table. The table only rewrites the URL; this page reacts to the new
//! query and fetches again.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_paginated_table::{Navigation, Page, QueryState, DEFAULT_PAGE_SIZE};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::api;
use crate::components::{UsersIndexTable, UsersIndexTableSkeleton};
use crate::error::ApiError;
use crate::models::UsersIndexResponse;
use crate::store::{store_logout, use_auth_store, AuthStateStoreFields};

#[component]
pub fn UsersPage() -> impl IntoView {
    let store = use_auth_store();
    let navigate = use_navigate();
    let location = use_location();
    let pathname = location.pathname;
    let search = location.search;
    let query = Memo::new(move |_| search.get().trim_start_matches('?').to_string());

    let (page, set_page) = signal(None::<UsersIndexResponse>);
    let (load_error, set_load_error) = signal(None::<String>);
    let (pending_navigation, set_pending_navigation) = signal(None::<Navigation>);
    // Only the most recent request may update the page
    let request_id = StoredValue::new(0u64);

    Effect::new(move |_| {
        let state = QueryState::from_query(&query.get());
        let token = store.token().get_untracked();
        let Some(id) = request_id.try_update_value(|id| {
            *id += 1;
            *id
        }) else {
            return;
        };

        log::debug!(
            "[USERS] Loading page {} (size {}, search {:?})",
            state.page,
            state.size,
            state.search
        );
        spawn_local(async move {
            let result = api::fetch_users(&state, token.as_deref()).await;
            if request_id.try_get_value() != Some(id) {
                log::debug!("[USERS] Dropping stale response #{}", id);
                return;
            }
            match result {
                Ok(data) => {
                    log::info!("[USERS] Loaded {} of {} users", data.items.len(), data.total_items);
                    set_load_error.set(None);
                    set_page.set(Some(data));
                }
                Err(ApiError::Unauthorized) => {
                    // The layout redirects to the login page once the session is gone
                    log::warn!("[USERS] Session expired");
                    store_logout(&store);
                }
                Err(e) => {
                    log::error!("[USERS] Failed to load users: {}", e);
                    set_load_error.set(Some(e.to_string()));
                }
            }
        });
    });

    Effect::new(move |_| {
        if let Some(navigation) = pending_navigation.get() {
            let target = format!("{}{}", pathname.get_untracked(), navigation.href());
            let options = NavigateOptions { replace: navigation.replace, ..Default::default() };
            navigate(&target, options);
        }
    });

    let data = Signal::derive(move || page.get().unwrap_or_else(|| Page::empty(DEFAULT_PAGE_SIZE)));
    let on_navigate = Callback::new(move |navigation: Navigation| {
        set_pending_navigation.set(Some(navigation));
    });

    view! {
        <h1 class="page-title">"Users"</h1>
        {move || load_error.get().map(|message| view! {
            <p class="error-banner">{message}</p>
        })}
        <Show
            when=move || page.with(|p| p.is_some())
            fallback=|| view! { <UsersIndexTableSkeleton /> }
        >
            <UsersIndexTable data=data query=query on_navigate=on_navigate />
        </Show>
    }
}
