//! Users Endpoints

use leptos_paginated_table::QueryState;
use reqwest::Method;

use super::request_json;
use crate::config::api_url;
use crate::error::ApiError;
use crate::models::UsersIndexResponse;

/// API path for one users page
pub fn users_path(query: &QueryState) -> String {
    format!("/users?{}", query.to_api_query())
}

pub async fn fetch_users(
    query: &QueryState,
    token: Option<&str>,
) -> Result<UsersIndexResponse, ApiError> {
    let url = api_url(&users_path(query))?;
    request_json::<_, ()>(Method::GET, &url, token, None).await
}
