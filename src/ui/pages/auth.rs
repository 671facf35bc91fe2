//! Auth page component
//!
//! Hosts the four auth views and wires their callbacks into the session.
//! Redirects to the dashboard as soon as someone is signed in.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::{ForgotPasswordForm, LoginForm, SignupForm, WalletConnect, use_auth_context};

/// Which form the auth page is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthView {
    #[default]
    Login,
    Signup,
    ForgotPassword,
    Web3,
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = use_auth_context();
    let current = RwSignal::new(AuthView::default());

    // Redirect if already authenticated
    Effect::new(move |_| {
        if auth.is_authenticated() {
            let navigate = use_navigate();
            navigate("/dashboard", Default::default());
        }
    });

    let on_login = Callback::new(move |(email, password): (String, String)| {
        auth.sign_in_with_password(&email, &password);
    });
    let on_signup = Callback::new(move |(email, password, name): (String, String, String)| {
        auth.sign_up(&email, &password, &name);
    });
    let on_connect = Callback::new(move |(address, balance, chain_id): (String, String, String)| {
        auth.connect_wallet(&address, &balance, &chain_id);
    });

    let to_login = Callback::new(move |_: ()| current.set(AuthView::Login));
    let to_signup = Callback::new(move |_: ()| current.set(AuthView::Signup));
    let to_forgot = Callback::new(move |_: ()| current.set(AuthView::ForgotPassword));
    let to_web3 = Callback::new(move |_: ()| current.set(AuthView::Web3));

    view! {
        <div class="min-h-screen auth-backdrop flex items-center justify-center p-4">
            <div class="w-full max-w-md">
                {move || match current.get() {
                    AuthView::Login => view! {
                        <LoginForm
                            on_login=on_login
                            on_switch_to_signup=to_signup
                            on_switch_to_forgot=to_forgot
                            on_switch_to_web3=to_web3
                        />
                    }.into_any(),
                    AuthView::Signup => view! {
                        <SignupForm
                            on_signup=on_signup
                            on_switch_to_login=to_login
                            on_switch_to_web3=to_web3
                        />
                    }.into_any(),
                    AuthView::ForgotPassword => view! {
                        <ForgotPasswordForm on_switch_to_login=to_login/>
                    }.into_any(),
                    AuthView::Web3 => view! {
                        <WalletConnect on_connect=on_connect on_switch_to_login=to_login/>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
