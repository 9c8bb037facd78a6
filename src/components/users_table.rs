//! Users Index Table
//!
//! Column layout of the users list on top of the generic paginated table.

use leptos::prelude::*;
use leptos_paginated_table::{Column, Navigation, PaginatedTable, PaginatedTableSkeleton};

use crate::models::{UserSummary, UsersIndexResponse};

fn email_cell(user: &UserSummary) -> AnyView {
    let href = format!("mailto:{}", user.email);
    view! { <a href=href>{user.email.clone()}</a> }.into_any()
}

pub fn user_columns() -> Vec<Column<UserSummary>> {
    vec![
        Column::new("fullName", "Full name"),
        Column::new("email", "Email").with_cell(email_cell),
        Column::new("phone", "Phone"),
        Column::new("address", "Address"),
    ]
}

#[component]
pub fn UsersIndexTable(
    #[prop(into)] data: Signal<UsersIndexResponse>,
    #[prop(into)] query: Signal<String>,
    #[prop(into)] on_navigate: Callback<Navigation>,
) -> impl IntoView {
    view! {
        <PaginatedTable
            page=data
            columns=user_columns()
            query=query
            on_navigate=on_navigate
            search_placeholder="Search users..."
        />
    }
}

#[component]
pub fn UsersIndexTableSkeleton() -> impl IntoView {
    view! { <PaginatedTableSkeleton columns=user_columns().len() rows=10 /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_paginated_table::TableRow;

    #[test]
    fn every_column_maps_to_a_field() {
        let user = UserSummary {
            id: "u1".into(),
            email: "a@b.bg".into(),
            full_name: "Ivan".into(),
            address: "Varna".into(),
            phone: "0888123456".into(),
        };
        for column in user_columns() {
            assert!(user.field(column.key).is_some(), "column {}", column.key);
            assert!(column.searchable);
        }
    }
}
