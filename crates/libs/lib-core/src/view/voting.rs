//! Wallet-gated voting section.

use crate::model::{PublicKey, TokenMints, VoteChoice, WalletSnapshot};

pub const VOTING_HEADING: &str = "Vote with Your Solana Wallet";

/// One vote button, bound to a wallet, an option and a mint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteControl {
    pub wallet: PublicKey,
    pub choice: VoteChoice,
    pub mint: PublicKey,
    pub symbol: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VotingSectionView {
    pub heading: &'static str,
    /// `Connected Wallet: ...` line, only with a known identity.
    pub identity: Option<String>,
    /// Connected, but the provider has not reported a key yet.
    pub awaiting_identity: bool,
    pub controls: Vec<VoteControl>,
}

/// Render the voting section for the current wallet state.
///
/// Vote controls need an identity; a connected flag alone renders nothing.
pub fn voting_section(wallet: &WalletSnapshot, mints: &TokenMints) -> VotingSectionView {
    let Some(identity) = wallet.identity() else {
        return VotingSectionView {
            heading: VOTING_HEADING,
            identity: None,
            awaiting_identity: wallet.is_awaiting_identity(),
            controls: Vec::new(),
        };
    };

    let controls = VoteChoice::ALL
        .iter()
        .map(|&choice| {
            let mint = mints.for_choice(choice);
            VoteControl {
                wallet: identity.clone(),
                choice,
                mint: mint.address.clone(),
                symbol: mint.symbol,
            }
        })
        .collect();

    VotingSectionView {
        heading: VOTING_HEADING,
        identity: Some(identity.to_string()),
        awaiting_identity: false,
        controls,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    const ADDR: &str = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";

    fn mints() -> TokenMints {
        SiteConfig::from_lookup(|_| None).unwrap().mints
    }

    #[test]
    fn test_disconnected_renders_nothing() {
        let view = voting_section(&WalletSnapshot::disconnected(), &mints());
        assert_eq!(view.heading, VOTING_HEADING);
        assert!(view.identity.is_none());
        assert!(view.controls.is_empty());
        assert!(!view.awaiting_identity);
    }

    #[test]
    fn test_connected_renders_identity_and_two_controls() {
        let mints = mints();
        let wallet = WalletSnapshot::connected(PublicKey::parse(ADDR).unwrap());
        let view = voting_section(&wallet, &mints);

        assert_eq!(view.identity.as_deref(), Some(ADDR));
        assert_eq!(view.controls.len(), 2);

        assert_eq!(view.controls[0].choice, VoteChoice::A);
        assert_eq!(view.controls[0].mint, mints.anti.address);
        assert_eq!(view.controls[1].choice, VoteChoice::B);
        assert_eq!(view.controls[1].mint, mints.pro.address);
        assert!(view.controls.iter().all(|c| c.wallet.as_str() == ADDR));
        assert_ne!(view.controls[0].mint, view.controls[1].mint);
    }

    #[test]
    fn test_connected_without_identity_is_guarded() {
        let wallet = WalletSnapshot {
            connected: true,
            public_key: None,
        };
        let view = voting_section(&wallet, &mints());
        assert!(view.identity.is_none());
        assert!(view.controls.is_empty());
        assert!(view.awaiting_identity);
    }
}
