//! Auth context for the simulated session
//!
//! There is no backend: signing in simply builds a [`UserProfile`] from what
//! the forms collected and keeps it in memory for the lifetime of the page.

use leptos::prelude::*;

use crate::core::UserProfile;

/// Authentication state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    /// No user signed in
    #[default]
    SignedOut,
    /// A password or wallet user is signed in
    SignedIn(UserProfile),
}

/// Auth context providing the session state and actions
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current authentication state
    pub state: RwSignal<AuthState>,
}

impl AuthContext {
    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state.get(), AuthState::SignedIn(_))
    }

    /// Get current user (if authenticated)
    pub fn user(&self) -> Option<UserProfile> {
        match self.state.get() {
            AuthState::SignedIn(user) => Some(user),
            AuthState::SignedOut => None,
        }
    }

    /// Sign in a password user. The password is not checked.
    pub fn sign_in_with_password(&self, email: &str, _password: &str) {
        leptos::logging::log!("Signed in with password: {}", email);
        self.state
            .set(AuthState::SignedIn(UserProfile::from_credentials(email, "")));
    }

    /// Create and sign in a password user
    pub fn sign_up(&self, email: &str, _password: &str, name: &str) {
        leptos::logging::log!("Signed up: {}", email);
        self.state
            .set(AuthState::SignedIn(UserProfile::from_credentials(email, name)));
    }

    /// Sign in a wallet user
    pub fn connect_wallet(&self, address: &str, balance: &str, chain_id: &str) {
        leptos::logging::log!("Wallet connected: {} on {}", address, chain_id);
        self.state.set(AuthState::SignedIn(UserProfile::from_wallet(
            address, balance, chain_id,
        )));
    }

    /// Drop the session
    pub fn logout(&self) {
        leptos::logging::log!("Signed out");
        self.state.set(AuthState::SignedOut);
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    let ctx = AuthContext {
        state: RwSignal::new(AuthState::SignedOut),
    };
    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}
