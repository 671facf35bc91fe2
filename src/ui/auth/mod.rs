//! Authentication UI module
//!
//! Forms for the sign-in flow and the simulated session they feed.

mod context;
mod forgot_password_form;
mod login_form;
mod signup_form;
mod wallet_connect;

pub use context::{AuthContext, AuthState, provide_auth_context, use_auth_context};
pub use forgot_password_form::ForgotPasswordForm;
pub use login_form::LoginForm;
pub use signup_form::SignupForm;
pub use wallet_connect::WalletConnect;
