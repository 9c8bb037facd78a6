//! Routed Pages

mod dashboard;
mod login;
mod register;
mod users;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use users::UsersPage;
