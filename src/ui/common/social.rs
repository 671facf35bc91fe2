use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// "Or continue with" divider and provider buttons.
///
/// Only the wallet button is wired; Google and Twitter are placeholders.
#[component]
pub fn SocialLogin(
    /// Switch to the wallet connect view
    on_wallet: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="mt-6 relative">
            <div class="absolute inset-0 flex items-center">
                <div class="w-full border-t border-gray-200/50"></div>
            </div>
            <div class="relative flex justify-center text-sm">
                <span class="px-4 bg-white/50 text-gray-500">"Or continue with"</span>
            </div>
        </div>

        <div class="mt-6 grid grid-cols-3 gap-3">
            <button
                type="button"
                class="social-btn"
                title="Connect wallet"
                on:click=move |_| on_wallet.run(())
            >
                <Icon name=icons::WALLET class="w-5 h-5 text-purple-600"/>
            </button>
            <button type="button" class="social-btn" title="Google">
                <Icon name=icons::GOOGLE class="w-5 h-5"/>
            </button>
            <button type="button" class="social-btn" title="Twitter">
                <Icon name=icons::TWITTER class="w-5 h-5"/>
            </button>
        </div>
    }
}
