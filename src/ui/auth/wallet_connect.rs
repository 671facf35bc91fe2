//! Wallet connect view
//!
//! Simulates a MetaMask connection: after the usual delay a fixed demo
//! account is handed to the parent.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::wallet::{DEMO_WALLET_ADDRESS, DEMO_WALLET_BALANCE, DEMO_WALLET_CHAIN_ID};
use crate::ui::browser::simulate_latency;
use crate::ui::common::{Button, GlassCard};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn WalletConnect(
    /// Called with `(address, balance, chain_id)` once connected
    on_connect: Callback<(String, String, String)>,
    /// Return to the login form
    on_switch_to_login: Callback<()>,
) -> impl IntoView {
    let loading = RwSignal::new(false);

    let connect = move |_: ()| {
        loading.set(true);
        spawn_local(async move {
            simulate_latency().await;
            on_connect.run((
                DEMO_WALLET_ADDRESS.to_string(),
                DEMO_WALLET_BALANCE.to_string(),
                DEMO_WALLET_CHAIN_ID.to_string(),
            ));
            loading.set(false);
        });
    };

    view! {
        <GlassCard>
            <div class="text-center mb-8">
                <div class="flex items-center justify-center mb-4">
                    <div class="p-3 rounded-full bg-gradient-to-r from-purple-500/20 to-pink-500/20 backdrop-blur-sm border border-white/20">
                        <Icon name=icons::WALLET class="w-8 h-8 text-purple-600"/>
                    </div>
                </div>
                <h1 class="text-3xl font-bold text-gray-800 mb-2">"Connect Wallet"</h1>
                <p class="text-gray-600">"Sign in securely with your Web3 wallet"</p>
            </div>

            <Button
                on_click=Callback::new(connect)
                loading=loading
                icon=icons::WALLET
                class="w-full"
            >
                "Connect MetaMask"
            </Button>

            <p class="mt-4 text-xs text-center text-gray-500">
                "Wawee never asks for your seed phrase or private keys."
            </p>

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
