//! Voting Section - wallet-gated vote controls

use leptos::prelude::*;
use lib_core::view::voting::{voting_section, VOTING_HEADING};
use lib_core::{Cluster, TokenMints};

use super::{VoteOption, WalletButton};
use crate::state::wallet::WalletContext;

#[component]
pub fn VotingSection(mints: TokenMints, cluster: Cluster, wallet: WalletContext) -> impl IntoView {
    view! {
        <section class="py-20">
            <h2 class="font-grotesk text-3xl font-bold text-center mb-8">{VOTING_HEADING}</h2>
            <div class="text-center">
                <WalletButton wallet=wallet/>
                {move || {
                    let section = voting_section(&wallet.snapshot(), &mints);
                    match section.identity {
                        Some(identity) => {
                            view! {
                                <div class="mt-6 space-y-4">
                                    <p>{format!("Connected Wallet: {}", identity)}</p>
                                    {section
                                        .controls
                                        .into_iter()
                                        .map(|control| view! { <VoteOption control=control cluster=cluster wallet=wallet/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any()
                        }
                        None if section.awaiting_identity => {
                            view! {
                                <p class="mt-6 text-gray-400">
                                    "Waiting for your wallet to share its address..."
                                </p>
                            }
                                .into_any()
                        }
                        None => ().into_any(),
                    }
                }}
            </div>
        </section>
    }
}
