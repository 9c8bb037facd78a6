//! Loading Spinner

use leptos::prelude::*;

/// Full-screen overlay with a spinner
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    view! {
        <div class="loading-overlay">
            <div class="spinner"></div>
        </div>
    }
}
