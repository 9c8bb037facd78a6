//! User Portal App
//!
//! Root component: auth store, session restore and routes.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::ProtectedLayout;
use crate::pages::{DashboardPage, LoginPage, RegisterPage, UsersPage};
use crate::store::{store_restore_session, AuthState};

#[component]
pub fn App() -> impl IntoView {
    // Provide the auth store to all children
    let store = Store::new(AuthState::default());
    provide_context(store);

    // Restore the session saved in this tab
    Effect::new(move |_| {
        store_restore_session(&store);
    });

    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
                <ParentRoute path=path!("") view=ProtectedLayout>
                    <Route path=path!("") view=DashboardPage />
                    <Route path=path!("users") view=UsersPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
