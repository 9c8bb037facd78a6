use leptos::prelude::*;

use crate::components::RegisterForm;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="centered-page">
            <RegisterForm />
        </div>
    }
}
