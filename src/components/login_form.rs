//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_paginated_table::query_param;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::api;
use crate::components::FormField;
use crate::error::ApiError;
use crate::models::LoginData;
use crate::redirect::{redirect_target, FROM_PARAM};
use crate::store::{store_login, use_auth_store, AuthStateStoreFields};
use crate::validation::{validate_login, FieldErrors};

/// Leave the login page only once the stored session is known
fn already_signed_in(is_loading: bool, has_token: bool) -> bool {
    !is_loading && has_token
}

fn login_error_message(err: &ApiError) -> String {
    if err.is_unauthorized() {
        "Invalid username or password.".to_string()
    } else {
        err.to_string()
    }
}

/// Username/password form; on success returns to the page that sent us here
#[component]
pub fn LoginForm() -> impl IntoView {
    let store = use_auth_store();
    let navigate = use_navigate();
    let search = use_location().search;

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (request_error, set_request_error) = signal(None::<String>);
    let submitting = RwSignal::new(false);

    // Already logged in: nothing to do here
    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            // Only restore completion re-runs this; a fresh login redirects itself
            let is_loading = store.is_loading().get();
            let has_token = store.token().with_untracked(|token| token.is_some());
            if already_signed_in(is_loading, has_token) {
                navigate("/", NavigateOptions { replace: true, ..Default::default() });
            }
        });
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let data = LoginData {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(field_errors) = validate_login(&data) {
            set_errors.set(field_errors);
            return;
        }
        set_errors.set(FieldErrors::default());
        set_request_error.set(None);
        submitting.set(true);

        let target = redirect_target(query_param(&search.get_untracked(), FROM_PARAM).as_deref());
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&data).await {
                Ok(response) => {
                    log::info!("[AUTH] Logged in as {}", response.user.email);
                    store_login(&store, response);
                    navigate(&target, NavigateOptions { replace: true, ..Default::default() });
                }
                Err(e) => {
                    log::error!("[AUTH] Login error: {}", e);
                    set_request_error.set(Some(login_error_message(&e)));
                }
            }
            submitting.set(false);
        });
    };

    let field_error = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    };

    view! {
        <div class="card login-card">
            <h2 class="card-title">"Sign in"</h2>
            <form id="login-form" on:submit=on_submit>
                <FormField
                    id="username"
                    label="Username"
                    value=username
                    error=field_error("username")
                    placeholder="Username"
                    autocomplete="off"
                />
                <FormField
                    id="password"
                    label="Password"
                    value=password
                    error=field_error("password")
                    input_type="password"
                    placeholder="Password"
                    autocomplete="off"
                />
                {move || request_error.get().map(|message| view! {
                    <p class="form-error">{message}</p>
                })}
                <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                    "Log in"
                </button>
            </form>
            <p class="form-footer">
                "No account yet? " <A href="/register">"Register"</A>
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_for_session_restore_before_leaving() {
        assert!(!already_signed_in(true, true));
        assert!(!already_signed_in(true, false));
        assert!(!already_signed_in(false, false));
        assert!(already_signed_in(false, true));
    }

    #[test]
    fn wrong_credentials_message() {
        let message = login_error_message(&ApiError::Unauthorized);
        assert_eq!(message, "Invalid username or password.");
        let rejected = ApiError::Rejected { status: 400, message: "Account locked".into() };
        assert_eq!(login_error_message(&rejected), "Account locked");
    }
}
