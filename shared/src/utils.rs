//! # Shared Utility Functions
//!
//! Display helpers for base58 strings (wallet addresses, mints, signatures).
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
//! assert_eq!(format_address(address, 4, 4), "8W6Q...JKAL");
//! ```

/// Show the first `prefix_len` and last `suffix_len` characters of `value`.
///
/// Values too short to shorten are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
/// assert_eq!(format_address(addr, 6, 6), "8W6Qgi...KuJKAL");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(value: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= prefix_len + suffix_len {
        return value.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[chars.len() - suffix_len..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

/// Address shortened the way the wallet button shows it (4 + 4 characters).
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

/// Signature shortened for a vote receipt (8 + 8 characters).
pub fn truncate_signature(signature: &str) -> String {
    format_address(signature, 8, 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(ADDR, 4, 4), "8W6Q...JKAL");
        assert_eq!(format_address(ADDR, 2, 2), "8W...AL");
        assert_eq!(format_address(ADDR, 0, 4), "...JKAL");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 4, 4), "short");
        assert_eq!(format_address("abcdefgh", 4, 4), "abcdefgh");
    }

    #[test]
    fn test_truncate_helpers() {
        assert_eq!(truncate_address(ADDR), "8W6Q...JKAL");
        assert_eq!(truncate_signature(ADDR), "8W6Qgink...fSKuJKAL");
    }
}
