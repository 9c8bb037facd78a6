//! Frontend Models
//!
//! Data structures matching the API's JSON.

use leptos_paginated_table::{Page, TableRow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    /// Only administrators may browse the users list
    pub fn can_manage_users(self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

/// Logged-in user (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub address: String,
    pub phone: String,
    pub role: UserRole,
}

/// Row of the users index (a user without the role)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub address: String,
    pub phone: String,
}

impl TableRow for UserSummary {
    fn field(&self, key: &str) -> Option<String> {
        let value = match key {
            "id" => &self.id,
            "email" => &self.email,
            "fullName" => &self.full_name,
            "address" => &self.address,
            "phone" => &self.phone,
            _ => return None,
        };
        Some(value.clone())
    }
}

pub type UsersIndexResponse = Page<UserSummary>;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginData {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

/// Registration payload; `purchase_date` is an ISO `YYYY-MM-DD` date
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterData {
    pub full_name: String,
    pub password: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub purchase_date: String,
    pub device_serial_number: String,
}
