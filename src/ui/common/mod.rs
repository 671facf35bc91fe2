//! Common reusable UI components
//!
//! Building blocks shared by the auth forms and the dashboard.

pub mod button;
pub mod card;
pub mod form;
pub mod social;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::GlassCard;
pub use form::{CheckboxField, IconInput, PasswordInput};
pub use social::SocialLogin;
