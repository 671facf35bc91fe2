//! Authenticated user view-model
//!
//! A [`UserProfile`] is built by the session layer and handed to the
//! dashboard as-is. Presence of a wallet address is the only thing that
//! distinguishes a Web3 user from a password user.

use serde::{Deserialize, Serialize};

use super::address::format_address;

/// Native currency symbol shown next to balances
pub const NATIVE_CURRENCY: &str = "ETH";

/// The user shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<String>,
}

/// Wallet details of a fully connected Web3 user
#[derive(Debug, Clone, PartialEq)]
pub struct WalletAccount {
    pub name: String,
    pub address: String,
    pub balance: String,
    pub chain_id: String,
}

impl WalletAccount {
    /// Balance as a number, `0.0` when it does not parse
    pub fn balance_value(&self) -> f64 {
        parse_balance(&self.balance).unwrap_or(0.0)
    }
}

impl UserProfile {
    /// Build a password-based user.
    ///
    /// An empty `name` is replaced by one derived from the email.
    pub fn from_credentials(email: &str, name: &str) -> Self {
        let name = name.trim();
        let name = if name.is_empty() {
            display_name_from_email(email)
        } else {
            name.to_string()
        };

        Self {
            name,
            email: Some(email.trim().to_string()),
            address: None,
            balance: None,
            chain_id: None,
        }
    }

    /// Build a wallet-based user named after its shortened address
    pub fn from_wallet(address: &str, balance: &str, chain_id: &str) -> Self {
        Self {
            name: format!("Wallet {}", format_address(address)),
            email: None,
            address: Some(address.to_string()),
            balance: Some(balance.to_string()),
            chain_id: Some(chain_id.to_string()),
        }
    }

    /// A user authenticated with a wallet rather than email/password
    pub fn is_web3_user(&self) -> bool {
        present(&self.address).is_some()
    }

    /// Wallet details, only when address, balance and chain ID are all known
    pub fn wallet_account(&self) -> Option<WalletAccount> {
        Some(WalletAccount {
            name: self.name.clone(),
            address: present(&self.address)?.to_string(),
            balance: present(&self.balance)?.to_string(),
            chain_id: present(&self.chain_id)?.to_string(),
        })
    }

    /// Chain ID, if one is set
    pub fn chain_id(&self) -> Option<&str> {
        present(&self.chain_id)
    }

    /// Balance with four decimals, or `0 ETH` when unknown
    pub fn balance_label(&self) -> String {
        match present(&self.balance).and_then(parse_balance) {
            Some(value) => format_balance(value),
            None => format!("0 {}", NATIVE_CURRENCY),
        }
    }
}

/// Empty strings count as absent
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Format an amount of native currency with four decimals
pub fn format_balance(value: f64) -> String {
    format!("{:.4} {}", value, NATIVE_CURRENCY)
}

/// Parse a balance string, rejecting non-finite values
pub fn parse_balance(balance: &str) -> Option<f64> {
    balance
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Derive a display name from the local part of an email address.
///
/// `jane.smith@example.com` becomes `Jane Smith`.
pub fn display_name_from_email(email: &str) -> String {
    let local = email.trim().split('@').next().unwrap_or_default();

    let words: Vec<String> = local
        .split(['.', '_', '-', '+'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect();

    if words.is_empty() {
        "User".to_string()
    } else {
        words.join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";

    fn web3_user() -> UserProfile {
        UserProfile::from_wallet(ADDRESS, "1.23456789", "0x1")
    }

    // ========================================================================
    // Classification
    // ========================================================================

    #[test]
    fn test_password_user_is_not_web3() {
        let user = UserProfile::from_credentials("jane@example.com", "Jane");
        assert!(!user.is_web3_user());
        assert!(user.wallet_account().is_none());
        assert_eq!(user.email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_address_alone_makes_web3_user() {
        let user = UserProfile {
            name: "Anon".to_string(),
            email: None,
            address: Some(ADDRESS.to_string()),
            balance: None,
            chain_id: None,
        };
        assert!(user.is_web3_user());
        // Wallet view needs balance and chain too
        assert!(user.wallet_account().is_none());
    }

    #[test]
    fn test_empty_fields_count_as_absent() {
        let user = UserProfile {
            name: "Jane".to_string(),
            email: Some("jane@example.com".to_string()),
            address: Some(String::new()),
            balance: Some(String::new()),
            chain_id: Some(String::new()),
        };
        assert!(!user.is_web3_user());
        assert!(user.wallet_account().is_none());
        assert!(user.chain_id().is_none());
        assert_eq!(user.balance_label(), "0 ETH");
    }

    #[test]
    fn test_empty_chain_blocks_wallet_account() {
        let mut user = web3_user();
        user.chain_id = Some(String::new());
        assert!(user.is_web3_user());
        assert!(user.wallet_account().is_none());
    }

    #[test]
    fn test_wallet_account_requires_all_fields() {
        let mut user = web3_user();
        assert!(user.wallet_account().is_some());

        user.chain_id = None;
        assert!(user.wallet_account().is_none());

        let mut user = web3_user();
        user.balance = None;
        assert!(user.wallet_account().is_none());
    }

    #[test]
    fn test_wallet_account_fields() {
        let account = web3_user().wallet_account().unwrap();
        assert_eq!(account.address, ADDRESS);
        assert_eq!(account.chain_id, "0x1");
        assert_eq!(account.name, "Wallet 0x71C7...976F");
        assert!((account.balance_value() - 1.23456789).abs() < f64::EPSILON);
    }

    // ========================================================================
    // Balance formatting
    // ========================================================================

    #[test]
    fn test_balance_label_four_decimals() {
        assert_eq!(web3_user().balance_label(), "1.2346 ETH");
    }

    #[test]
    fn test_balance_label_missing_or_invalid() {
        let mut user = web3_user();
        user.balance = None;
        assert_eq!(user.balance_label(), "0 ETH");

        user.balance = Some("not-a-number".to_string());
        assert_eq!(user.balance_label(), "0 ETH");

        user.balance = Some("NaN".to_string());
        assert_eq!(user.balance_label(), "0 ETH");
    }

    #[test]
    fn test_balance_label_integer() {
        let mut user = web3_user();
        user.balance = Some("2".to_string());
        assert_eq!(user.balance_label(), "2.0000 ETH");
    }

    // ========================================================================
    // Names
    // ========================================================================

    #[test]
    fn test_display_name_from_email() {
        assert_eq!(display_name_from_email("jane.smith@example.com"), "Jane Smith");
        assert_eq!(display_name_from_email("mike_wilson@example.com"), "Mike Wilson");
        assert_eq!(display_name_from_email("bob@example.com"), "Bob");
        assert_eq!(display_name_from_email("@example.com"), "User");
    }

    #[test]
    fn test_from_credentials_prefers_given_name() {
        let user = UserProfile::from_credentials("jane.smith@example.com", "  J. Smith ");
        assert_eq!(user.name, "J. Smith");

        let user = UserProfile::from_credentials("jane.smith@example.com", "");
        assert_eq!(user.name, "Jane Smith");
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"name":"Anon","address":"0xabc","balance":"0.5","chainId":"0x89"}"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.chain_id.as_deref(), Some("0x89"));
        assert!(user.email.is_none());
        assert!(user.is_web3_user());
    }
}
