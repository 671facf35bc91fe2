//! Wallet address helpers

/// Number of leading characters kept when shortening an address (`0x` + 4)
const PREFIX_LEN: usize = 6;

/// Number of trailing characters kept when shortening an address
const SUFFIX_LEN: usize = 4;

/// Number of hex digits in an EVM address (after the `0x` prefix)
pub const ADDRESS_HEX_LEN: usize = 40;

/// Shorten an address to `0x1234...abcd`.
///
/// Addresses too short to lose anything are returned unchanged.
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= PREFIX_LEN + SUFFIX_LEN {
        return address.to_string();
    }

    let prefix: String = chars[..PREFIX_LEN].iter().collect();
    let suffix: String = chars[chars.len() - SUFFIX_LEN..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

/// Check that a string is a `0x`-prefixed, 40 hex digit address
pub fn is_valid_address(address: &str) -> bool {
    let Some(hex) = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
    else {
        return false;
    };

    hex.len() == ADDRESS_HEX_LEN && hex.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";

    #[test]
    fn test_format_full_address() {
        assert_eq!(format_address(ADDRESS), "0x71C7...976F");
    }

    #[test]
    fn test_format_short_address_unchanged() {
        assert_eq!(format_address("0x1234"), "0x1234");
        assert_eq!(format_address("0x12345678"), "0x12345678");
        assert_eq!(format_address(""), "");
    }

    #[test]
    fn test_format_just_over_threshold() {
        assert_eq!(format_address("0x123456789"), "0x1234...6789");
    }

    #[test]
    fn test_valid_address() {
        assert!(is_valid_address(ADDRESS));
        assert!(is_valid_address(&ADDRESS.to_lowercase()));
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("0x"));
        assert!(!is_valid_address(&ADDRESS[2..]));
        assert!(!is_valid_address(&ADDRESS[..41]));
        assert!(!is_valid_address("0xZZC7656EC7ab88b098defB751B7401B5f6d8976F"));
        assert!(!is_valid_address(&format!("{}0", ADDRESS)));
    }
}
