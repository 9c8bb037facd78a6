//! Protected Layout
//!
//! Wraps every page that needs a logged-in user. Anonymous visitors are sent
//! to the login page, which brings them back afterwards.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::components::{Header, LoadingOverlay};
use crate::redirect::{login_redirect_path, path_with_query};
use crate::store::{is_authenticated, use_auth_store, AuthStateStoreFields};

#[component]
pub fn ProtectedLayout() -> impl IntoView {
    let store = use_auth_store();
    let navigate = use_navigate();
    let location = use_location();
    let pathname = location.pathname;
    let search = location.search;

    Effect::new(move |_| {
        if store.is_loading().get() || is_authenticated(&store) {
            return;
        }
        let from = path_with_query(&pathname.get_untracked(), &search.get_untracked());
        log::info!("[AUTH] Not authenticated, redirecting from {}", from);
        navigate(
            &login_redirect_path(&from),
            NavigateOptions { replace: true, ..Default::default() },
        );
    });

    let ready = move || !store.is_loading().get() && is_authenticated(&store);

    view! {
        <Show when=ready fallback=|| view! { <LoadingOverlay /> }>
            <Header />
            <main class="container">
                <Outlet />
            </main>
        </Show>
    }
}
