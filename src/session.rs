//! Session Persistence
//!
//! Keeps the bearer token and the logged-in user in `sessionStorage`.

use crate::config::{AUTH_TOKEN_SESSION_KEY, AUTH_USER_SESSION_KEY};
use crate::models::{LoginResponse, User};

#[cfg(target_arch = "wasm32")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

/// No browser, no session: native test runs behave like a blocked storage
#[cfg(not(target_arch = "wasm32"))]
fn session_storage() -> Option<web_sys::Storage> {
    None
}

/// Restore a stored session; both token and user must be present
pub fn load() -> Option<LoginResponse> {
    let storage = session_storage()?;
    let token = storage.get_item(AUTH_TOKEN_SESSION_KEY).ok().flatten();
    let user = storage.get_item(AUTH_USER_SESSION_KEY).ok().flatten();
    decode(token, user)
}

fn decode(token: Option<String>, user: Option<String>) -> Option<LoginResponse> {
    let token = token.filter(|t| !t.is_empty())?;
    let user = user.filter(|u| !u.is_empty())?;
    match serde_json::from_str::<User>(&user) {
        Ok(user) => Some(LoginResponse { user, token }),
        Err(e) => {
            log::error!("[SESSION] Error loading auth from session: {}", e);
            None
        }
    }
}

pub fn save(session: &LoginResponse) {
    let Some(storage) = session_storage() else {
        log::warn!("[SESSION] sessionStorage unavailable, login will not persist");
        return;
    };
    match serde_json::to_string(&session.user) {
        Ok(user) => {
            let stored = storage
                .set_item(AUTH_USER_SESSION_KEY, &user)
                .and_then(|_| storage.set_item(AUTH_TOKEN_SESSION_KEY, &session.token));
            if let Err(e) = stored {
                log::error!("[SESSION] Failed to store session: {:?}", e);
            }
        }
        Err(e) => log::error!("[SESSION] Failed to serialize user: {}", e),
    }
}

pub fn clear() {
    let Some(storage) = session_storage() else {
        return;
    };
    for key in [AUTH_TOKEN_SESSION_KEY, AUTH_USER_SESSION_KEY] {
        if let Err(e) = storage.remove_item(key) {
            log::warn!("[SESSION] Failed to remove {}: {:?}", key, e);
        }
    }
}
