//! Forgot password form
//!
//! Pretends to send a reset link; nothing leaves the browser.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::ui::browser::simulate_latency;
use crate::ui::common::{Button, GlassCard, IconInput};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn ForgotPasswordForm(
    /// Return to the login form
    on_switch_to_login: Callback<()>,
) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let sent_to = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let email_val = email.get_untracked();
        loading.set(true);
        spawn_local(async move {
            simulate_latency().await;
            leptos::logging::log!("Password reset requested for {}", email_val);
            sent_to.set(Some(email_val));
            loading.set(false);
        });
    };

    view! {
        <GlassCard>
            <div class="text-center mb-8">
                <div class="flex items-center justify-center mb-4">
                    <div class="p-3 rounded-full bg-gradient-to-r from-orange-500/20 to-red-500/20 backdrop-blur-sm border border-white/20">
                        <Icon name=icons::MAIL class="w-8 h-8 text-orange-600"/>
                    </div>
                </div>
                <h1 class="text-3xl font-bold text-gray-800 mb-2">"Reset Password"</h1>
                <p class="text-gray-600">"We'll email you a link to choose a new one"</p>
            </div>

            {move || match sent_to.get() {
                Some(address) => view! {
                    <div class="flex items-start gap-3 p-4 rounded-lg bg-green-500/10 border border-green-500/20">
                        <Icon name=icons::CHECK class="w-5 h-5 mt-0.5"/>
                        <p class="text-sm text-gray-700">
                            "If an account exists for " <strong>{address}</strong>
                            ", a reset link is on its way."
                        </p>
                    </div>
                }.into_any(),
                None => view! {
                    <form on:submit=on_submit class="space-y-6">
                        <IconInput
                            input_type="email"
                            placeholder="Enter your email"
                            icon=icons::MAIL
                            value=email
                            autocomplete="email"
                        />
                        <Button button_type="submit" loading=loading icon=icons::SEND class="w-full">
                            "Send Reset Link"
                        </Button>
                    </form>
                }.into_any(),
            }}

            <div class="mt-8 text-center">
                <button
                    type="button"
                    class="link-accent inline-flex items-center gap-2"
                    on:click=move |_| on_switch_to_login.run(())
                >
                    <Icon name=icons::ARROW_LEFT class="w-4 h-4"/>
                    "Back to sign in"
                </button>
            </div>
        </GlassCard>
    }
}
