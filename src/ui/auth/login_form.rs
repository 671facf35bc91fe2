//! Login form component
//!
//! Collects email and password and hands them to the parent after a
//! simulated network delay.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::ui::browser::simulate_latency;
use crate::ui::common::{Button, GlassCard, IconInput, PasswordInput, SocialLogin};
use crate::ui::icon::{Icon, icons};

/// Login form component
#[component]
pub fn LoginForm(
    /// Called with `(email, password)` once the simulated request finishes
    on_login: Callback<(String, String)>,
    /// Switch to the signup form
    on_switch_to_signup: Callback<()>,
    /// Switch to the forgot password form
    on_switch_to_forgot: Callback<()>,
    /// Switch to wallet connect
    on_switch_to_web3: Callback<()>,
) -> impl IntoView {
    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        loading.set(true);

        spawn_local(async move {
            simulate_latency().await;
            on_login.run((email_val, password_val));
            loading.set(false);
        });
    };

    view! {
        <GlassCard>
            <div class="text-center mb-8">
                <div class="flex items-center justify-center mb-4">
                    <div class="p-3 rounded-full bg-gradient-to-r from-blue-500/20 to-purple-500/20 backdrop-blur-sm border border-white/20">
                        <Icon name=icons::WAVES class="w-8 h-8 text-blue-600"/>
                    </div>
                </div>
                <h1 class="text-3xl font-bold text-gray-800 mb-2">"Welcome Back"</h1>
                <p class="text-gray-600">"Sign in to your Wawee account"</p>
            </div>

            <form on:submit=on_submit class="space-y-6">
                <IconInput
                    input_type="email"
                    placeholder="Enter your email"
                    icon=icons::MAIL
                    value=email
                    autocomplete="email"
                />

                <PasswordInput placeholder="Enter your password" value=password/>

                <div class="flex items-center justify-between text-sm">
                    <label class="flex items-center gap-2 cursor-pointer">
                        <input
                            type="checkbox"
                            class="w-4 h-4 rounded border-gray-300 text-blue-600 focus:ring-2 focus:ring-blue-500"
                            prop:checked=move || remember_me.get()
                            on:change=move |ev| remember_me.set(event_target_checked(&ev))
                        />
                        <span class="text-gray-600">"Remember me"</span>
                    </label>
                    <button
                        type="button"
                        class="link-accent"
                        on:click=move |_| on_switch_to_forgot.run(())
                    >
                        "Forgot password?"
                    </button>
                </div>

                <Button button_type="submit" loading=loading icon=icons::LOG_IN class="w-full">
                    "Sign In"
                </Button>
            </form>

            <div class="mt-8 text-center">
                <p class="text-gray-600">
                    "Don't have an account? "
                    <button
                        type="button"
                        class="link-accent"
                        on:click=move |_| on_switch_to_signup.run(())
                    >
                        "Sign up"
                    </button>
                </p>
            </div>

            <SocialLogin on_wallet=on_switch_to_web3/>
        </GlassCard>
    }
}
