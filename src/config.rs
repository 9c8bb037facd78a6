//! Build-time Configuration
//!
//! Values baked in when the bundle is built (`API_BASE_URL=... trunk build`).

use crate::error::ApiError;

/// Base URL of the remote API, e.g. `https://api.example.com`
pub const API_BASE_URL: Option<&str> = option_env!("API_BASE_URL");

/// Console log level (`error`, `warn`, `info`, `debug`, `trace`)
pub const LOG_LEVEL: Option<&str> = option_env!("LOG_LEVEL");

/// Session storage key holding the bearer token
pub const AUTH_TOKEN_SESSION_KEY: &str = "auth_token";

/// Session storage key holding the logged-in user as JSON
pub const AUTH_USER_SESSION_KEY: &str = "auth_user";

/// Absolute API URL for `path`
pub fn api_url(path: &str) -> Result<String, ApiError> {
    join_api_url(API_BASE_URL, path)
}

fn join_api_url(base: Option<&str>, path: &str) -> Result<String, ApiError> {
    match base.map(str::trim).filter(|b| !b.is_empty()) {
        Some(base) => Ok(format!("{}{}", base, path)),
        None => Err(ApiError::Config("API_BASE_URL is not defined".to_string())),
    }
}

/// Configured log level, `Info` when unset or unrecognised
pub fn log_level() -> log::LevelFilter {
    LOG_LEVEL
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::LevelFilter::Info)
}
