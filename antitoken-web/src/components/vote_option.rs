//! Vote Option Component
//!
//! One vote button. Clicking it builds a ballot for the bound wallet, option
//! and mint, asks the wallet to sign it and shows the receipt.

use leptos::prelude::*;
use lib_core::view::VoteControl;
use lib_core::Cluster;
use shared::dto::VoteReceipt;
use shared::utils::truncate_signature;

use crate::services::vote::{ballot_for, cast_vote};
use crate::state::wallet::WalletContext;

#[derive(Clone, Debug, PartialEq)]
enum VoteStatus {
    Idle,
    Signing,
    Signed(VoteReceipt),
    Failed(String),
}

#[component]
pub fn VoteOption(control: VoteControl, cluster: Cluster, wallet: WalletContext) -> impl IntoView {
    let status = RwSignal::new(VoteStatus::Idle);
    let label = format!("Vote {} with {}", control.choice, control.symbol);

    let on_vote = move |_| {
        let Some(provider) = wallet.current_provider() else {
            status.set(VoteStatus::Failed("Connect a wallet to vote".to_string()));
            return;
        };
        let ballot = ballot_for(&control, cluster);
        status.set(VoteStatus::Signing);

        leptos::task::spawn_local(async move {
            match cast_vote(provider, ballot).await {
                Ok(receipt) => status.set(VoteStatus::Signed(receipt)),
                Err(e) => {
                    log::warn!("vote failed: {}", e);
                    status.set(VoteStatus::Failed(e.user_message()));
                }
            }
        });
    };

    view! {
        <div class="vote-option">
            <button
                class="vote-button"
                disabled=move || status.with(|s| *s == VoteStatus::Signing)
                on:click=on_vote
            >
                {label}
            </button>
            {move || match status.get() {
                VoteStatus::Idle => ().into_any(),
                VoteStatus::Signing => {
                    view! { <p class="vote-status">"Approve the vote in your wallet..."</p> }.into_any()
                }
                VoteStatus::Signed(receipt) => {
                    view! {
                        <p class="vote-status vote-signed" title=receipt.signature.clone()>
                            {format!(
                                "Vote {} signed: {}",
                                receipt.ballot.option,
                                truncate_signature(&receipt.signature),
                            )}
                        </p>
                    }
                        .into_any()
                }
                VoteStatus::Failed(message) => {
                    view! { <p class="vote-status vote-failed">{message}</p> }.into_any()
                }
            }}
        </div>
    }
}
