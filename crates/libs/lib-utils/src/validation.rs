//! # Validation Utilities
//!
//! Input validation helpers.

/// Length in bytes of a decoded Solana public key.
pub const PUBKEY_LEN: usize = 32;

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate a base58 public key (wallet address or token mint).
///
/// The value must decode to exactly [`PUBKEY_LEN`] bytes.
pub fn validate_pubkey(value: &str, field_name: &str) -> Result<(), String> {
    validate_not_empty(value, field_name)?;

    let bytes = bs58::decode(value)
        .into_vec()
        .map_err(|e| format!("{} is not valid base58: {}", field_name, e))?;

    if bytes.len() != PUBKEY_LEN {
        return Err(format!(
            "{} must decode to {} bytes, got {}",
            field_name,
            PUBKEY_LEN,
            bytes.len()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("abc", "name").is_ok());
        assert_eq!(
            validate_not_empty("   ", "name").unwrap_err(),
            "name cannot be empty"
        );
    }

    #[test]
    fn test_validate_pubkey() {
        assert!(validate_pubkey("So11111111111111111111111111111111111111112", "mint").is_ok());
        assert!(validate_pubkey("8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL", "wallet").is_ok());
    }

    #[test]
    fn test_validate_pubkey_rejects_bad_input() {
        // '0' and 'l' are outside the base58 alphabet
        assert!(validate_pubkey("0l0l0l", "mint").is_err());
        // valid base58, wrong length
        assert!(validate_pubkey("abc", "mint").unwrap_err().contains("32 bytes"));
        assert!(validate_pubkey("", "mint").is_err());
    }
}
