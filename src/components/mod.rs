//! UI Components
//!
//! Reusable Leptos components.

mod form_field;
mod header;
mod login_form;
mod protected_layout;
mod register_form;
mod spinner;
mod users_table;

pub use form_field::FormField;
pub use header::Header;
pub use login_form::LoginForm;
pub use protected_layout::ProtectedLayout;
pub use register_form::RegisterForm;
pub use spinner::LoadingOverlay;
pub use users_table::{UsersIndexTable, UsersIndexTableSkeleton};
