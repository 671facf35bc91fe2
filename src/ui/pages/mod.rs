//! Application pages module
//!
//! - Auth page (login, signup, password reset, wallet connect)
//! - Dashboard
//! - Not found

mod auth;
mod dashboard;
mod not_found;

pub use auth::{AuthPage, AuthView};
pub use dashboard::DashboardPage;
pub use not_found::NotFoundPage;
