//! Core view-models and client-side rules for the Wawee auth flow

pub mod address;
pub mod chain;
#[cfg(feature = "ssr")]
pub mod config;
pub mod dashboard;
pub mod user;
pub mod validation;
pub mod wallet;

pub use address::{format_address, is_valid_address};
pub use chain::{chain_name, default_chain_label};
pub use dashboard::{DashboardTab, DashboardView};
pub use user::{UserProfile, WalletAccount};
pub use validation::{SignupError, SignupSubmission};
pub use wallet::{TransferError, TransferHistory, validate_transfer};

/// Fixed delay standing in for a network round trip, in milliseconds
pub const SIMULATED_LATENCY_MS: u32 = 1500;
