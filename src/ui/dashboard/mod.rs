//! Dashboard components
//!
//! [`Dashboard`] renders the landing view for a signed-in user and, for
//! Web3 users, switches to [`WalletDashboard`].

mod overview;
mod wallet;

pub use overview::Dashboard;
pub use wallet::WalletDashboard;
