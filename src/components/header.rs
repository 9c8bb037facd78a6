//! Header Component
//!
//! Top bar with role-gated navigation and the logout button.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::store::{store_logout, use_auth_store, AuthStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let store = use_auth_store();
    let navigate = use_navigate();

    let logout = move |_| {
        store_logout(&store);
        log::info!("[AUTH] Logged out");
        navigate("/login", Default::default());
    };

    // Administrators get the users list
    let can_manage_users = move || {
        store.user().with(|user| user.as_ref().is_some_and(|u| u.role.can_manage_users()))
    };

    view! {
        <header class="app-header">
            <div class="header-left">
                <A href="/" attr:class="brand">"User Portal"</A>
                <Show when=can_manage_users>
                    <nav class="header-nav">
                        <A href="/users">"Users"</A>
                    </nav>
                </Show>
            </div>

            <div class="header-right">
                {move || match store.user().get() {
                    Some(user) => view! {
                        <span class="greeting">{format!("Welcome, {}!", user.full_name)}</span>
                        <button class="logout-btn" on:click=logout.clone()>"Log out"</button>
                    }.into_any(),
                    None => view! {
                        <A href="/login" attr:class="login-link">"Log in"</A>
                    }.into_any(),
                }}
            </div>
        </header>
    }
}
