//! Signup form component
//!
//! Checks the password confirmation and terms acceptance before handing
//! `(email, password, name)` to the parent after a simulated delay.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::SignupSubmission;
use crate::ui::browser::{alert, simulate_latency};
use crate::ui::common::{Button, CheckboxField, GlassCard, IconInput, PasswordInput, SocialLogin};
use crate::ui::icon::{Icon, icons};

/// Signup form component
#[component]
pub fn SignupForm(
    /// Called with `(email, password, name)` once the simulated request finishes
    on_signup: Callback<(String, String, String)>,
    /// Switch back to the login form
    on_switch_to_login: Callback<()>,
    /// Switch to wallet connect
    on_switch_to_web3: Callback<()>,
) -> impl IntoView {
    // Form state
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let agreed_to_terms = RwSignal::new(false);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let submission = SignupSubmission {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            agreed_to_terms: agreed_to_terms.get_untracked(),
        };

        let args = match submission.into_signup_args() {
            Ok(args) => args,
            Err(err) => {
                alert(&err.to_string());
                return;
            }
        };

        loading.set(true);
        spawn_local(async move {
            simulate_latency().await;
            on_signup.run(args);
            loading.set(false);
        });
    };

    view! {
        <GlassCard>
            <div class="text-center mb-8">
                <div class="flex items-center justify-center mb-4">
                    <div class="p-3 rounded-full bg-gradient-to-r from-green-500/20 to-blue-500/20 backdrop-blur-sm border border-white/20">
                        <Icon name=icons::WAVES class="w-8 h-8 text-green-600"/>
                    </div>
                </div>
                <h1 class="text-3xl font-bold text-gray-800 mb-2">"Create Account"</h1>
                <p class="text-gray-600">"Join Wawee today"</p>
            </div>

            <form on:submit=on_submit class="space-y-6">
                <IconInput placeholder="Full name" icon=icons::USER value=name autocomplete="name"/>

                <IconInput
                    input_type="email"
                    placeholder="Email address"
                    icon=icons::MAIL
                    value=email
                    autocomplete="email"
                />

                <PasswordInput placeholder="Password" value=password autocomplete="new-password"/>

                <PasswordInput
                    placeholder="Confirm password"
                    value=confirm_password
                    autocomplete="new-password"
                />

                <CheckboxField id="terms" checked=agreed_to_terms>
                    "I agree to the "
                    <a href="#" class="link-accent">"Terms of Service"</a>
                    " and "
                    <a href="#" class="link-accent">"Privacy Policy"</a>
                </CheckboxField>

                <Button button_type="submit" loading=loading icon=icons::USER_PLUS class="w-full">
                    "Create Account"
                </Button>
            </form>

            <div class="mt-8 text-center">
                <p class="text-gray-600">
                    "Already have an account? "
                    <button
                        type="button"
                        class="link-accent"
                        on:click=move |_| on_switch_to_login.run(())
                    >
                        "Sign in"
                    </button>
                </p>
            </div>

            <SocialLogin on_wallet=on_switch_to_web3/>
        </GlassCard>
    }
}
