//! Dashboard Page
//!
//! Landing page behind the login.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::store::{use_auth_store, AuthStateStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_auth_store();

    view! {
        <h1 class="page-title">"Dashboard"</h1>
        {move || store.user().get().map(|user| {
            let is_admin = user.role.can_manage_users();
            view! {
                <div class="card dashboard-card">
                    <p>{format!("Signed in as {} ({})", user.full_name, user.email)}</p>
                    {is_admin.then(|| view! {
                        <p><A href="/users">"Browse users"</A></p>
                    })}
                </div>
            }
        })}
    }
}
