//! Dashboard content and view selection
//!
//! The figures shown on the dashboard are static placeholders; they live
//! here as data so the component only has to lay them out.

use super::user::{UserProfile, WalletAccount};

/// Which dashboard tab the user picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Overview,
    Wallet,
}

/// What the dashboard actually renders
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Overview,
    Wallet(WalletAccount),
}

impl DashboardView {
    /// Resolve the rendered view from the selected tab.
    ///
    /// The wallet view needs a Web3 user with address, balance and chain
    /// ID; otherwise the overview is shown whatever tab is selected.
    pub fn resolve(tab: DashboardTab, user: &UserProfile) -> Self {
        match (tab, user.wallet_account()) {
            (DashboardTab::Wallet, Some(account)) => DashboardView::Wallet(account),
            _ => DashboardView::Overview,
        }
    }
}

/// Accent used for a stat card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Orange,
    Purple,
}

impl Accent {
    /// Gradient classes for the icon badge
    pub fn gradient(&self) -> &'static str {
        match self {
            Accent::Blue => "from-blue-500/20 to-purple-500/20",
            Accent::Green => "from-green-500/20 to-blue-500/20",
            Accent::Orange => "from-orange-500/20 to-red-500/20",
            Accent::Purple => "from-purple-500/20 to-pink-500/20",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Accent::Blue => "text-blue-600",
            Accent::Green => "text-green-600",
            Accent::Orange => "text-orange-600",
            Accent::Purple => "text-purple-600",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub action: &'static str,
    pub user: &'static str,
    pub time: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        label: "Total Users",
        value: "12,345",
        icon: "users",
        accent: Accent::Blue,
    },
    Stat {
        label: "Active Sessions",
        value: "1,234",
        icon: "activity",
        accent: Accent::Green,
    },
    Stat {
        label: "Growth Rate",
        value: "+23%",
        icon: "trending-up",
        accent: Accent::Orange,
    },
    Stat {
        label: "Events Today",
        value: "45",
        icon: "calendar",
        accent: Accent::Purple,
    },
];

pub const RECENT_ACTIVITY: [Activity; 4] = [
    Activity {
        action: "User registration",
        user: "john.doe@example.com",
        time: "2 minutes ago",
    },
    Activity {
        action: "Password reset",
        user: "jane.smith@example.com",
        time: "5 minutes ago",
    },
    Activity {
        action: "Profile updated",
        user: "mike.wilson@example.com",
        time: "10 minutes ago",
    },
    Activity {
        action: "New login",
        user: "sarah.johnson@example.com",
        time: "15 minutes ago",
    },
];

/// Title and subtitle of the fourth quick action, which depends on user kind
pub fn feature_action(user: &UserProfile) -> (&'static str, &'static str) {
    if user.is_web3_user() {
        ("Web3 Wallet", "Send transactions & view history")
    } else {
        ("Notifications", "Manage alerts and messages")
    }
}

/// Closing line of the welcome card
pub fn welcome_message(user: &UserProfile) -> &'static str {
    if user.is_web3_user() {
        "Enjoy the power of Web3 authentication and explore decentralized features including sending transactions."
    } else {
        "Explore the dashboard and discover all the features available to you."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";

    fn password_user() -> UserProfile {
        UserProfile::from_credentials("jane@example.com", "Jane")
    }

    fn wallet_user() -> UserProfile {
        UserProfile::from_wallet(ADDRESS, "1.2345", "0x89")
    }

    #[test]
    fn test_overview_by_default() {
        assert_eq!(
            DashboardView::resolve(DashboardTab::default(), &wallet_user()),
            DashboardView::Overview
        );
    }

    #[test]
    fn test_wallet_tab_for_web3_user() {
        match DashboardView::resolve(DashboardTab::Wallet, &wallet_user()) {
            DashboardView::Wallet(account) => {
                assert_eq!(account.address, ADDRESS);
                assert_eq!(account.chain_id, "0x89");
            }
            other => panic!("expected wallet view, got {:?}", other),
        }
    }

    #[test]
    fn test_wallet_tab_ignored_for_password_user() {
        assert_eq!(
            DashboardView::resolve(DashboardTab::Wallet, &password_user()),
            DashboardView::Overview
        );
    }

    #[test]
    fn test_wallet_tab_needs_complete_wallet() {
        let mut user = wallet_user();
        user.balance = None;
        assert_eq!(
            DashboardView::resolve(DashboardTab::Wallet, &user),
            DashboardView::Overview
        );
    }

    #[test]
    fn test_wallet_tab_ignores_empty_wallet_fields() {
        let user = UserProfile {
            address: Some(String::new()),
            balance: Some(String::new()),
            chain_id: Some(String::new()),
            ..password_user()
        };
        assert_eq!(
            DashboardView::resolve(DashboardTab::Wallet, &user),
            DashboardView::Overview
        );
        assert_eq!(feature_action(&user).0, "Notifications");
    }

    #[test]
    fn test_feature_action_by_user_kind() {
        assert_eq!(feature_action(&wallet_user()).0, "Web3 Wallet");
        assert_eq!(feature_action(&password_user()).0, "Notifications");
    }

    #[test]
    fn test_welcome_message_by_user_kind() {
        assert!(welcome_message(&wallet_user()).contains("Web3"));
        assert!(!welcome_message(&password_user()).contains("Web3"));
    }

    #[test]
    fn test_static_content() {
        assert_eq!(STATS.len(), 4);
        assert_eq!(STATS[2].value, "+23%");
        assert_eq!(RECENT_ACTIVITY[0].action, "User registration");
    }
}
