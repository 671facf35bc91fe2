//! Wallet send form rules and the simulated transaction history

use super::address::is_valid_address;
use super::user::parse_balance;

/// Account handed out by the simulated wallet connection
pub const DEMO_WALLET_ADDRESS: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
pub const DEMO_WALLET_BALANCE: &str = "1.2345";
pub const DEMO_WALLET_CHAIN_ID: &str = "0x1";

/// Reasons a transfer cannot be submitted
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransferError {
    #[error("Enter a valid recipient address")]
    InvalidRecipient,

    #[error("Enter an amount greater than zero")]
    InvalidAmount,

    #[error("Insufficient balance: {available:.4} ETH available")]
    InsufficientBalance { available: f64 },
}

/// Validate a transfer and return the parsed amount.
///
/// An unparseable balance counts as zero.
pub fn validate_transfer(recipient: &str, amount: &str, balance: &str) -> Result<f64, TransferError> {
    if !is_valid_address(recipient.trim()) {
        return Err(TransferError::InvalidRecipient);
    }

    let amount = parse_balance(amount)
        .filter(|value| *value > 0.0)
        .ok_or(TransferError::InvalidAmount)?;

    let available = parse_balance(balance).unwrap_or(0.0);
    if amount > available {
        return Err(TransferError::InsufficientBalance { available });
    }

    Ok(amount)
}

/// Lifecycle of a simulated transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferStatus {
    Pending,
    Confirmed,
}

impl TransferStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransferStatus::Pending => "Pending",
            TransferStatus::Confirmed => "Confirmed",
        }
    }
}

/// An entry in the wallet's session-local history
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub id: u32,
    pub recipient: String,
    pub amount: f64,
    pub status: TransferStatus,
}

/// Session-local list of transfers, newest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferHistory {
    next_id: u32,
    transfers: Vec<Transfer>,
}

impl TransferHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new pending transfer and return its ID
    pub fn push_pending(&mut self, recipient: &str, amount: f64) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.transfers.insert(
            0,
            Transfer {
                id,
                recipient: recipient.trim().to_string(),
                amount,
                status: TransferStatus::Pending,
            },
        );
        id
    }

    /// Mark a transfer as confirmed. Returns false for unknown IDs.
    pub fn confirm(&mut self, id: u32) -> bool {
        match self.transfers.iter_mut().find(|t| t.id == id) {
            Some(transfer) => {
                transfer.status = TransferStatus::Confirmed;
                true
            }
            None => false,
        }
    }

    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECIPIENT: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";

    #[test]
    fn test_valid_transfer() {
        assert_eq!(validate_transfer(RECIPIENT, "0.5", "1.2345"), Ok(0.5));
    }

    #[test]
    fn test_full_balance_allowed() {
        assert_eq!(validate_transfer(RECIPIENT, "1.2345", "1.2345"), Ok(1.2345));
    }

    #[test]
    fn test_invalid_recipient() {
        assert_eq!(
            validate_transfer("0x1234", "0.5", "1"),
            Err(TransferError::InvalidRecipient)
        );
    }

    #[test]
    fn test_invalid_amounts() {
        for amount in ["", "abc", "0", "-1", "inf"] {
            assert_eq!(
                validate_transfer(RECIPIENT, amount, "1"),
                Err(TransferError::InvalidAmount),
                "amount {:?}",
                amount
            );
        }
    }

    #[test]
    fn test_insufficient_balance() {
        let err = validate_transfer(RECIPIENT, "2", "1.5").unwrap_err();
        assert_eq!(err, TransferError::InsufficientBalance { available: 1.5 });
        assert_eq!(err.to_string(), "Insufficient balance: 1.5000 ETH available");
    }

    #[test]
    fn test_history_newest_first() {
        let mut history = TransferHistory::new();
        assert!(history.is_empty());

        let first = history.push_pending(RECIPIENT, 0.1);
        let second = history.push_pending(RECIPIENT, 0.2);

        assert_ne!(first, second);
        assert_eq!(history.transfers()[0].id, second);
        assert_eq!(history.transfers()[1].id, first);
        assert_eq!(history.transfers()[0].status, TransferStatus::Pending);
    }

    #[test]
    fn test_confirm_transfer() {
        let mut history = TransferHistory::new();
        let id = history.push_pending(RECIPIENT, 0.1);

        assert!(history.confirm(id));
        assert_eq!(history.transfers()[0].status, TransferStatus::Confirmed);
        assert!(!history.confirm(id + 100));
    }
}
