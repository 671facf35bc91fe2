pub mod auth;
pub mod browser;
pub mod common;
pub mod dashboard;
pub mod icon;
pub mod pages;

pub use auth::{AuthContext, AuthState, LoginForm, SignupForm, provide_auth_context};
pub use dashboard::{Dashboard, WalletDashboard};
pub use icon::{Icon, icons};
