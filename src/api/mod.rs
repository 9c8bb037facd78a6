//! Remote API Bindings
//!
//! Frontend bindings to the HTTP API, organized by domain.

mod auth;
mod users;

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

// Re-export all public items
pub use auth::*;
pub use users::*;

/// Send a JSON request and decode the JSON response.
///
/// Adds the bearer token when one is given. 401 becomes
/// [`ApiError::Unauthorized`]; any other failure status becomes
/// [`ApiError::Rejected`].
async fn request_json<T, B>(
    method: Method,
    url: &str,
    token: Option<&str>,
    body: Option<&B>,
) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let mut request = reqwest::Client::new()
        .request(method.clone(), url)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }
    if let Some(body) = body {
        request = request.json(body);
    }

    let response = request.send().await?;
    let status = response.status();
    log::debug!("[API] {} {} -> {}", method, url, status);

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), &body);
        log::warn!("[API] {} {} failed: {}", method, url, err);
        return Err(err);
    }

    let text = response.text().await?;
    let text = if text.trim().is_empty() { "null" } else { text.as_str() };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}
