//! Chain ID to network name resolution
//!
//! Wallets report the active network as a hex chain ID (`0x1`, `0x89`, ...).
//! Known networks are resolved through a static table; anything else is
//! rendered as `Chain <id>`.

/// Label used when a Web3 user has no chain ID at all
pub const UNKNOWN_CHAIN_LABEL: &str = "Unknown Chain";

/// Known networks, keyed by lowercase hex chain ID
const KNOWN_CHAINS: &[(&str, &str)] = &[
    ("0x1", "Ethereum Mainnet"),
    ("0x5", "Goerli Testnet"),
    ("0x89", "Polygon Mainnet"),
    ("0x13881", "Polygon Mumbai"),
    ("0xa", "Optimism"),
    ("0xa4b1", "Arbitrum One"),
];

/// Look up the network name for a known chain ID.
///
/// Matching ignores ASCII case, so `0xA4B1` and `0xa4b1` resolve the same.
pub fn known_chain_name(chain_id: &str) -> Option<&'static str> {
    let chain_id = chain_id.trim();
    KNOWN_CHAINS
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(chain_id))
        .map(|(_, name)| *name)
}

/// Resolve a chain ID to a display name, falling back to `Chain <id>`
pub fn chain_name(chain_id: &str) -> String {
    match known_chain_name(chain_id) {
        Some(name) => name.to_string(),
        None => format!("Chain {}", chain_id),
    }
}

/// Display label for an optional chain ID using the built-in table.
///
/// A missing or empty chain ID renders as `Unknown Chain`.
pub fn default_chain_label(chain_id: Option<&str>) -> String {
    chain_label_with(chain_id, chain_name)
}

/// Display label for an optional chain ID using a custom resolver
pub fn chain_label_with(chain_id: Option<&str>, resolve: impl Fn(&str) -> String) -> String {
    match chain_id.filter(|id| !id.is_empty()) {
        Some(id) => resolve(id),
        None => UNKNOWN_CHAIN_LABEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_chains_resolve() {
        assert_eq!(chain_name("0x1"), "Ethereum Mainnet");
        assert_eq!(chain_name("0x5"), "Goerli Testnet");
        assert_eq!(chain_name("0x89"), "Polygon Mainnet");
        assert_eq!(chain_name("0x13881"), "Polygon Mumbai");
        assert_eq!(chain_name("0xa"), "Optimism");
        assert_eq!(chain_name("0xa4b1"), "Arbitrum One");
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(known_chain_name("0xA4B1"), Some("Arbitrum One"));
        assert_eq!(known_chain_name("0XA"), Some("Optimism"));
    }

    #[test]
    fn test_unknown_chain_falls_back_to_id() {
        assert_eq!(chain_name("0x38"), "Chain 0x38");
        assert_eq!(known_chain_name("0x38"), None);
    }

    #[test]
    fn test_missing_chain_label() {
        assert_eq!(default_chain_label(None), "Unknown Chain");
        assert_eq!(default_chain_label(Some("0x89")), "Polygon Mainnet");
    }

    #[test]
    fn test_empty_chain_label() {
        assert_eq!(default_chain_label(Some("")), "Unknown Chain");
        assert_eq!(chain_label_with(Some(""), |id| format!("net:{}", id)), "Unknown Chain");
    }

    #[test]
    fn test_chain_label_uses_custom_resolver() {
        let label = chain_label_with(Some("0x1"), |id| format!("net:{}", id));
        assert_eq!(label, "net:0x1");
    }
}
