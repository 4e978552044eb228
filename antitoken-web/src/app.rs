//! Antitoken Landing Page - Leptos Frontend
//!
//! Composes the page sections from `lib_core::view` and wires the wallet
//! widget. Everything a section needs is passed in as a prop.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use lib_core::view as page;
use lib_core::SiteConfig;

use crate::components::{Features, Hero, Starfield, VotingSection};
use crate::services::wallet::{connect_wallet_provider, current_wallet_state, is_wallet_installed};
use crate::state::wallet::{remembered_provider, WalletContext};

/// Give wallet extensions time to inject themselves before reconnecting.
const AUTO_CONNECT_DELAY_MS: u32 = 300;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let wallet = WalletContext::new();

    if config.auto_connect {
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(AUTO_CONNECT_DELAY_MS).await;
            restore_session(wallet).await;
        });
    }

    view! {
        <div class="bg-dark text-gray-100 min-h-screen relative overflow-x-hidden font-grotesk">
            <Starfield/>
            <Hero hero=page::hero(&config)/>
            <Features cards=page::features()/>
            <VotingSection mints=config.mints.clone() cluster=config.cluster wallet=wallet/>
        </div>
    }
}

/// Reconnect the wallet used last visit, without prompting.
async fn restore_session(wallet: WalletContext) {
    let Some(provider) = remembered_provider() else {
        return;
    };
    if !is_wallet_installed(provider) {
        log::debug!("{} no longer installed, skipping reconnect", provider.name());
        return;
    }

    let state = current_wallet_state(provider);
    if state.connected {
        wallet.apply(provider, state);
        wallet.watch(provider);
        return;
    }

    match connect_wallet_provider(provider, true).await {
        Ok(state) => {
            wallet.apply(provider, state);
            wallet.watch(provider);
        }
        Err(e) => log::debug!("silent reconnect to {} declined: {}", provider.name(), e),
    }
}
