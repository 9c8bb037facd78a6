//! Auth State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{LoginResponse, User};
use crate::session;

/// Authentication state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AuthState {
    /// Logged-in user
    pub user: Option<User>,
    /// Bearer token for API calls
    pub token: Option<String>,
    /// True until the stored session has been restored
    pub is_loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            is_loading: true,
        }
    }
}

/// Type alias for the store
pub type AuthStore = Store<AuthState>;

/// Get the auth store from context
pub fn use_auth_store() -> AuthStore {
    expect_context::<AuthStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Restore the session saved in this tab, then stop loading
pub fn store_restore_session(store: &AuthStore) {
    store_apply_session(store, session::load());
}

/// Adopt an already-loaded session (if any) and finish loading
pub fn store_apply_session(store: &AuthStore, restored: Option<LoginResponse>) {
    if let Some(LoginResponse { user, token }) = restored {
        log::info!("[AUTH] Session restored for {}", user.email);
        store.user().set(Some(user));
        store.token().set(Some(token));
    }
    store.is_loading().set(false);
}

/// Record a successful login and persist it for this tab
pub fn store_login(store: &AuthStore, response: LoginResponse) {
    session::save(&response);
    store.user().set(Some(response.user));
    store.token().set(Some(response.token));
}

/// Forget the current user and clear the stored session
pub fn store_logout(store: &AuthStore) {
    store.user().set(None);
    store.token().set(None);
    session::clear();
}

/// Reactive "is anyone logged in"
pub fn is_authenticated(store: &AuthStore) -> bool {
    store.token().with(|token| token.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    #[test]
    fn starts_loading_and_anonymous() {
        let state = AuthState::default();
        assert!(state.is_loading);
        assert!(state.user.is_none());
        assert!(state.token.is_none());
    }

    fn user() -> User {
        User {
            id: "u1".into(),
            email: "a@b.bg".into(),
            full_name: "Ivan".into(),
            address: "Varna".into(),
            phone: "0888123456".into(),
            role: UserRole::User,
        }
    }

    #[test]
    fn login_then_logout() {
        Owner::new().with(|| {
            let store = Store::new(AuthState::default());
            assert!(!is_authenticated(&store));

            store_login(&store, LoginResponse { user: user(), token: "tok".into() });
            assert!(is_authenticated(&store));
            assert_eq!(store.token().get_untracked().as_deref(), Some("tok"));
            assert_eq!(store.user().get_untracked().map(|u| u.id), Some("u1".to_string()));

            store_logout(&store);
            assert!(!is_authenticated(&store));
            assert!(store.user().get_untracked().is_none());
        });
    }

    #[test]
    fn restoring_a_saved_session_logs_in() {
        Owner::new().with(|| {
            let store = Store::new(AuthState::default());
            let saved = LoginResponse { user: user(), token: "tok".into() };
            store_apply_session(&store, Some(saved));
            assert!(!store.is_loading().get_untracked());
            assert!(is_authenticated(&store));
        });
    }

    #[test]
    fn restoring_nothing_still_finishes_loading() {
        Owner::new().with(|| {
            let store = Store::new(AuthState::default());
            store_restore_session(&store);
            assert!(!store.is_loading().get_untracked());
            assert!(!is_authenticated(&store));
        });
    }
}
