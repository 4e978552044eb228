//! Vote ballot DTOs.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// First line of every signing message, so a signature can never be replayed
/// as something other than a vote.
pub const BALLOT_HEADER: &str = "Antitoken vote";

/// A vote before it is signed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteBallot {
    /// Base58 address of the voting wallet
    pub wallet: String,
    /// Option tag, `"A"` or `"B"`
    pub option: String,
    /// Base58 mint the vote is cast against
    pub mint: String,
    /// Solana cluster name, e.g. `"mainnet-beta"`
    pub cluster: String,
    pub nonce: Uuid,
    pub issued_at: DateTime<Utc>,
}

impl VoteBallot {
    pub fn new(
        wallet: impl Into<String>,
        option: impl Into<String>,
        mint: impl Into<String>,
        cluster: impl Into<String>,
        nonce: Uuid,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            wallet: wallet.into(),
            option: option.into(),
            mint: mint.into(),
            cluster: cluster.into(),
            nonce,
            issued_at,
        }
    }

    /// Canonical text the wallet is asked to sign.
    pub fn signing_message(&self) -> String {
        format!(
            "{}\n\nOption: {}\nMint: {}\nCluster: {}\nWallet: {}\nNonce: {}\nIssued At: {}",
            BALLOT_HEADER,
            self.option,
            self.mint,
            self.cluster,
            self.wallet,
            self.nonce,
            self.issued_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        )
    }
}

/// A ballot together with the wallet's signature over [`VoteBallot::signing_message`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteReceipt {
    pub ballot: VoteBallot,
    /// Base58-encoded ed25519 signature
    pub signature: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ballot() -> VoteBallot {
        VoteBallot::new(
            "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL",
            "A",
            "ehsT5tCvRyzYC1fTfHKv87kawGuTmEgXhSpytUgARPw",
            "devnet",
            Uuid::nil(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_signing_message() {
        let message = ballot().signing_message();
        assert_eq!(
            message,
            "Antitoken vote\n\n\
             Option: A\n\
             Mint: ehsT5tCvRyzYC1fTfHKv87kawGuTmEgXhSpytUgARPw\n\
             Cluster: devnet\n\
             Wallet: 8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL\n\
             Nonce: 00000000-0000-0000-0000-000000000000\n\
             Issued At: 2024-01-01T00:00:00Z"
        );
    }

    #[test]
    fn test_receipt_json_shape() {
        let receipt = VoteReceipt {
            ballot: ballot(),
            signature: "5VERv8NMvzbJMEkV8xnrLkEaWRtSz9CosKDYjCJjBRnbJLgp8uirBgmQpjKhoR4tjF3ZpRzrFmBV6UjKdiSZkQUW".to_string(),
        };
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["ballot"]["option"], "A");
        assert_eq!(json["ballot"]["cluster"], "devnet");
        assert_eq!(json["ballot"]["issued_at"], "2024-01-01T00:00:00Z");
        assert_eq!(json["ballot"]["nonce"], "00000000-0000-0000-0000-000000000000");
    }
}
