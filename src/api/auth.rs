//! Auth Endpoints

use reqwest::Method;

use super::request_json;
use crate::config::api_url;
use crate::error::ApiError;
use crate::models::{LoginData, LoginResponse, RegisterData};

pub async fn login(data: &LoginData) -> Result<LoginResponse, ApiError> {
    let url = api_url("/users/login")?;
    request_json(Method::POST, &url, None, Some(data)).await
}

/// Register a new account; the response body is not needed
pub async fn register(data: &RegisterData) -> Result<(), ApiError> {
    let url = api_url("/users/registration")?;
    let _: serde_json::Value = request_json(Method::POST, &url, None, Some(data)).await?;
    Ok(())
}
