//! Wallet sub-view for Web3 users
//!
//! Shows the connected account and a send form. Transfers are simulated:
//! they appear as pending, then confirm after the usual delay.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::user::format_balance;
use crate::core::{TransferHistory, WalletAccount, validate_transfer};
use crate::ui::browser::simulate_latency;
use crate::ui::common::{Button, GlassCard, IconInput};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn WalletDashboard(
    /// Connected account
    account: WalletAccount,
    /// Address shortener
    format_address: Callback<String, String>,
    /// Chain ID resolver
    get_chain_name: Callback<String, String>,
) -> impl IntoView {
    let recipient = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let sending = RwSignal::new(false);
    let history = RwSignal::new(TransferHistory::new());

    let short_address = format_address.run(account.address.clone());
    let network = get_chain_name.run(account.chain_id.clone());
    let balance = account.balance.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }

        let to = recipient.get_untracked();
        let value = match validate_transfer(&to, &amount.get_untracked(), &balance) {
            Ok(value) => value,
            Err(err) => {
                leptos::logging::warn!("Transfer rejected: {}", err);
                error.set(Some(err.to_string()));
                return;
            }
        };

        error.set(None);
        sending.set(true);
        let mut id = 0;
        history.update(|h| id = h.push_pending(&to, value));

        spawn_local(async move {
            simulate_latency().await;
            history.update(|h| {
                h.confirm(id);
            });
            recipient.set(String::new());
            amount.set(String::new());
            sending.set(false);
        });
    };

    view! {
        <div class="space-y-6">
            <GlassCard>
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-4">
                        <div class="p-3 rounded-full bg-gradient-to-r from-purple-500/20 to-pink-500/20 backdrop-blur-sm border border-white/20">
                            <Icon name=icons::WALLET class="w-8 h-8 text-purple-600"/>
                        </div>
                        <div>
                            <h1 class="text-2xl font-bold text-gray-800">{account.name.clone()}</h1>
                            <p class="text-gray-600 font-mono text-sm" title=account.address.clone()>
                                {short_address}
                            </p>
                        </div>
                    </div>
                    <div class="text-right">
                        <p class="text-3xl font-bold text-gray-800">
                            {format_balance(account.balance_value())}
                        </p>
                        <p class="text-sm text-gray-500">{network}</p>
                    </div>
                </div>
            </GlassCard>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <GlassCard>
                    <h2 class="text-xl font-semibold text-gray-800 mb-6">"Send"</h2>
                    <form on:submit=on_submit class="space-y-4">
                        <IconInput placeholder="Recipient address (0x...)" icon=icons::WALLET value=recipient/>
                        <IconInput placeholder="Amount (ETH)" icon=icons::SEND value=amount/>
                        {move || error.get().map(|message| view! {
                            <div class="flex items-center gap-2 text-sm text-red-600">
                                <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                                <span>{message}</span>
                            </div>
                        })}
                        <Button button_type="submit" loading=sending icon=icons::SEND class="w-full">
                            "Send Transaction"
                        </Button>
                    </form>
                </GlassCard>

                <GlassCard>
                    <h2 class="text-xl font-semibold text-gray-800 mb-6">"Transaction History"</h2>
                    {move || {
                        let history = history.get();
                        if history.is_empty() {
                            view! {
                                <p class="text-sm text-gray-500">"No transactions in this session yet."</p>
                            }.into_any()
                        } else {
                            view! {
                                <div class="space-y-3">
                                    {history.transfers().iter().cloned().map(|transfer| view! {
                                        <div class="flex items-center justify-between p-3 rounded-lg bg-white/5 border border-white/10">
                                            <div>
                                                <p class="text-sm font-medium text-gray-800">
                                                    {format_balance(transfer.amount)}
                                                </p>
                                                <p class="text-xs text-gray-600 font-mono">
                                                    {format_address.run(transfer.recipient.clone())}
                                                </p>
                                            </div>
                                            <span class="text-xs text-gray-500">{transfer.status.label()}</span>
                                        </div>
                                    }).collect_view()}
                                </div>
                            }.into_any()
                        }
                    }}
                </GlassCard>
            </div>
        </div>
    }
}
