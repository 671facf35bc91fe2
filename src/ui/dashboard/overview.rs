//! Dashboard component
//!
//! Generic overview for every user plus the wallet tab for Web3 users.

use leptos::prelude::*;

use crate::core::chain::chain_label_with;
use crate::core::dashboard::{
    Activity, DashboardTab, DashboardView, RECENT_ACTIVITY, STATS, Stat, feature_action,
    welcome_message,
};
use crate::core::{UserProfile, chain_name};
use crate::ui::common::{Button, ButtonSize, ButtonVariant, GlassCard};
use crate::ui::icon::{Icon, icons};

use super::WalletDashboard;

/// Dashboard for a signed-in user
#[component]
pub fn Dashboard(
    /// The signed-in user
    user: UserProfile,
    /// Called when the user logs out
    on_logout: Callback<()>,
    /// Address shortener, defaults to `0x1234...abcd`
    #[prop(optional, into)]
    format_address: Option<Callback<String, String>>,
    /// Chain ID resolver, defaults to the built-in network table
    #[prop(optional, into)]
    get_chain_name: Option<Callback<String, String>>,
) -> impl IntoView {
    let active_tab = RwSignal::new(DashboardTab::Overview);

    let format_address = format_address
        .unwrap_or_else(|| Callback::new(|address: String| crate::core::format_address(&address)));
    let get_chain_name =
        get_chain_name.unwrap_or_else(|| Callback::new(|chain_id: String| chain_name(&chain_id)));

    move || match DashboardView::resolve(active_tab.get(), &user) {
        DashboardView::Wallet(account) => view! {
            <div class="w-full max-w-6xl mx-auto space-y-6">
                <WalletNav active_tab=active_tab on_logout=on_logout/>
                <WalletDashboard
                    account=account
                    format_address=format_address
                    get_chain_name=get_chain_name
                />
            </div>
        }
        .into_any(),
        DashboardView::Overview => view! {
            <Overview
                user=user.clone()
                active_tab=active_tab
                on_logout=on_logout
                get_chain_name=get_chain_name
            />
        }
        .into_any(),
    }
}

/// Tab header shown above the wallet view
#[component]
fn WalletNav(active_tab: RwSignal<DashboardTab>, on_logout: Callback<()>) -> impl IntoView {
    view! {
        <GlassCard>
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-4">
                    <button
                        type="button"
                        class="nav-tab"
                        on:click=move |_| active_tab.set(DashboardTab::Overview)
                    >
                        <Icon name=icons::ACTIVITY class="w-4 h-4 text-gray-600"/>
                        <span class="text-sm font-medium text-gray-800">"Dashboard"</span>
                    </button>
                    <button
                        type="button"
                        class="nav-tab nav-tab-active"
                        on:click=move |_| active_tab.set(DashboardTab::Wallet)
                    >
                        <Icon name=icons::WALLET class="w-4 h-4 text-purple-600"/>
                        <span class="text-sm font-medium text-gray-800">"Wallet"</span>
                    </button>
                </div>
                <LogoutButton on_logout=on_logout/>
            </div>
        </GlassCard>
    }
}

#[component]
fn LogoutButton(on_logout: Callback<()>) -> impl IntoView {
    view! {
        <Button
            on_click=on_logout
            icon=icons::LOG_OUT
            variant=ButtonVariant::Secondary
            size=ButtonSize::Small
        >
            "Logout"
        </Button>
    }
}

#[component]
fn Overview(
    user: UserProfile,
    active_tab: RwSignal<DashboardTab>,
    on_logout: Callback<()>,
    get_chain_name: Callback<String, String>,
) -> impl IntoView {
    let is_web3 = user.is_web3_user();
    let (feature_title, feature_subtitle) = feature_action(&user);
    let (badge_icon, badge_class, badge_gradient) = if is_web3 {
        (icons::WALLET, "w-8 h-8 text-purple-600", "from-purple-500/20 to-pink-500/20")
    } else {
        (icons::WAVES, "w-8 h-8 text-blue-600", "from-blue-500/20 to-purple-500/20")
    };
    let feature_icon = if is_web3 { icons::WALLET } else { icons::BELL };
    let greeting = format!("Welcome back, {}!", user.name);
    let welcome = welcome_message(&user);
    let open_wallet = move |_| {
        if is_web3 {
            active_tab.set(DashboardTab::Wallet);
        }
    };

    let identity = if is_web3 {
        let address = user.address.clone().unwrap_or_default();
        let balance = user.balance_label();
        let chain = chain_label_with(user.chain_id(), |id| {
            get_chain_name.run(id.to_string())
        });
        view! {
            <div class="space-y-1">
                <p class="text-gray-600 font-mono text-sm">{address}</p>
                <div class="flex items-center gap-4 text-xs text-gray-500">
                    <span>{balance}</span>
                    <span>{chain}</span>
                </div>
            </div>
        }
        .into_any()
    } else {
        let email = user.email.clone().unwrap_or_default();
        view! { <p class="text-gray-600">{email}</p> }.into_any()
    };

    view! {
        <div class="w-full max-w-6xl mx-auto space-y-6">
            // Header
            <GlassCard>
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-4">
                        <div class=format!(
                            "p-3 rounded-full bg-gradient-to-r {} backdrop-blur-sm border border-white/20",
                            badge_gradient,
                        )>
                            <Icon name=badge_icon class=badge_class/>
                        </div>
                        <div>
                            <h1 class="text-2xl font-bold text-gray-800">{greeting}</h1>
                            {identity}
                        </div>
                    </div>
                    <div class="flex items-center gap-3">
                        {is_web3.then(|| view! {
                            <button type="button" class="nav-tab" on:click=open_wallet>
                                <Icon name=icons::ARROW_LEFT_RIGHT class="w-4 h-4 text-purple-600"/>
                                <span class="text-sm font-medium text-gray-800">"Wallet"</span>
                            </button>
                        })}
                        <button type="button" class="icon-btn" title="Notifications">
                            <Icon name=icons::BELL class="w-5 h-5 text-gray-600"/>
                        </button>
                        <button type="button" class="icon-btn" title="Settings">
                            <Icon name=icons::SETTINGS class="w-5 h-5 text-gray-600"/>
                        </button>
                        <LogoutButton on_logout=on_logout/>
                    </div>
                </div>
            </GlassCard>

            // Web3 status
            {is_web3.then(|| view! {
                <GlassCard>
                    <div class="flex items-center justify-between">
                        <div class="flex items-center gap-3">
                            <div class="w-3 h-3 bg-green-500 rounded-full animate-pulse"></div>
                            <span class="text-sm font-medium text-gray-800">"Web3 Connected"</span>
                        </div>
                        <div class="flex items-center gap-4 text-sm text-gray-600">
                            <span>"Secure wallet authentication"</span>
                            <div class="flex items-center gap-1">
                                <Icon name=icons::WALLET class="w-4 h-4"/>
                                <span>"MetaMask"</span>
                            </div>
                        </div>
                    </div>
                </GlassCard>
            })}

            // Stats
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {STATS.into_iter().map(|stat| view! { <StatCard stat=stat/> }).collect_view()}
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <GlassCard>
                    <div class="flex items-center justify-between mb-6">
                        <h2 class="text-xl font-semibold text-gray-800">"Recent Activity"</h2>
                        <button type="button" class="link-accent text-sm">"View All"</button>
                    </div>
                    <div class="space-y-4">
                        {RECENT_ACTIVITY
                            .into_iter()
                            .map(|activity| view! { <ActivityRow activity=activity/> })
                            .collect_view()}
                    </div>
                </GlassCard>

                <GlassCard>
                    <h2 class="text-xl font-semibold text-gray-800 mb-6">"Quick Actions"</h2>
                    <div class="grid grid-cols-2 gap-4">
                        <QuickAction
                            icon=icons::USER
                            icon_class="w-6 h-6 mb-2 text-blue-600"
                            title="Manage Users"
                            subtitle="View and edit user accounts"
                        />
                        <QuickAction
                            icon=icons::SETTINGS
                            icon_class="w-6 h-6 mb-2 text-green-600"
                            title="System Settings"
                            subtitle="Configure application settings"
                        />
                        <QuickAction
                            icon=icons::ACTIVITY
                            icon_class="w-6 h-6 mb-2 text-orange-600"
                            title="Analytics"
                            subtitle="View detailed reports"
                        />
                        <button type="button" class="quick-action" on:click=open_wallet>
                            <Icon name=feature_icon class="w-6 h-6 mb-2 text-purple-600"/>
                            <p class="text-sm font-medium text-gray-800">{feature_title}</p>
                            <p class="text-xs text-gray-600">{feature_subtitle}</p>
                        </button>
                    </div>
                </GlassCard>
            </div>

            // Welcome
            <GlassCard>
                <div class="text-center py-8">
                    <div class="flex items-center justify-center mb-4">
                        <img
                            src="https://images.unsplash.com/photo-1559526324-4b87b5e36e44?w=400&h=300&fit=crop"
                            alt="Welcome"
                            class="w-32 h-24 object-cover rounded-lg opacity-80"
                        />
                    </div>
                    <h3 class="text-xl font-semibold text-gray-800 mb-2">"You're all set!"</h3>
                    <p class="text-gray-600 max-w-md mx-auto">
                        "Your Wawee account is ready to use. " {welcome}
                    </p>
                </div>
            </GlassCard>
        </div>
    }
}

#[component]
fn StatCard(stat: Stat) -> impl IntoView {
    view! {
        <GlassCard>
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm text-gray-600 mb-1">{stat.label}</p>
                    <p class="text-2xl font-bold text-gray-800">{stat.value}</p>
                </div>
                <div class=format!(
                    "p-3 rounded-full bg-gradient-to-r {} {} backdrop-blur-sm border border-white/20",
                    stat.accent.gradient(),
                    stat.accent.text(),
                )>
                    <Icon name=stat.icon class="w-6 h-6"/>
                </div>
            </div>
        </GlassCard>
    }
}

#[component]
fn ActivityRow(activity: Activity) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between p-3 rounded-lg bg-white/5 border border-white/10">
            <div class="flex items-center gap-3">
                <div class="w-2 h-2 bg-blue-500 rounded-full"></div>
                <div>
                    <p class="text-sm font-medium text-gray-800">{activity.action}</p>
                    <p class="text-xs text-gray-600">{activity.user}</p>
                </div>
            </div>
            <span class="text-xs text-gray-500">{activity.time}</span>
        </div>
    }
}

#[component]
fn QuickAction(
    icon: &'static str,
    icon_class: &'static str,
    title: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <button type="button" class="quick-action">
            <Icon name=icon class=icon_class/>
            <p class="text-sm font-medium text-gray-800">{title}</p>
            <p class="text-xs text-gray-600">{subtitle}</p>
        </button>
    }
}
