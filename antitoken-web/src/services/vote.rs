//! Vote signing
//!
//! A vote is a [`VoteBallot`] signed by the connected wallet. The signature is
//! base58-encoded like every other Solana signature.

use chrono::Utc;
use lib_core::{view::VoteControl, Cluster, Result};
use shared::dto::{VoteBallot, VoteReceipt};
use uuid::Uuid;

use super::wallet::{sign_message_provider, WalletProvider};

/// Fresh ballot for `control` on `cluster`, stamped with a new nonce and the
/// current time.
pub fn ballot_for(control: &VoteControl, cluster: Cluster) -> VoteBallot {
    VoteBallot::new(
        control.wallet.as_str(),
        control.choice.tag(),
        control.mint.as_str(),
        cluster.name(),
        Uuid::new_v4(),
        Utc::now(),
    )
}

/// Ask `provider` to sign `ballot` and return the receipt.
pub async fn cast_vote(provider: WalletProvider, ballot: VoteBallot) -> Result<VoteReceipt> {
    log::info!(
        "requesting {} signature for option {} on mint {} ({})",
        provider.name(),
        ballot.option,
        ballot.mint,
        ballot.cluster
    );

    let message = ballot.signing_message();
    let signature = sign_message_provider(provider, message.as_bytes()).await?;
    let signature = bs58::encode(signature).into_string();

    log::info!("vote {} signed", ballot.nonce);
    Ok(VoteReceipt { ballot, signature })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_core::{PublicKey, VoteChoice};

    #[test]
    fn test_ballot_names_its_cluster() {
        let control = VoteControl {
            wallet: PublicKey::parse("8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL").unwrap(),
            choice: VoteChoice::B,
            mint: PublicKey::parse("H1o72AGosc1vC6seaRtSjVqQfiVCh7R1xUPpJc9Re2Hv").unwrap(),
            symbol: "$PRO",
        };

        let ballot = ballot_for(&control, Cluster::Devnet);
        assert_eq!(ballot.cluster, "devnet");
        assert_eq!(ballot.option, "B");
        assert!(ballot.signing_message().contains("\nCluster: devnet\n"));

        let mainnet = ballot_for(&control, Cluster::default());
        assert_eq!(mainnet.cluster, "mainnet-beta");
        assert_ne!(mainnet.nonce, ballot.nonce);
    }
}
