//! Wallet connect button with a provider menu

use leptos::prelude::*;
use shared::utils::truncate_address;

use crate::services::wallet::{
    connect_wallet_provider, disconnect_wallet_provider, get_available_wallets, WalletProvider,
};
use crate::state::wallet::{WalletContext, WalletState};

#[component]
pub fn WalletButton(wallet: WalletContext) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (installed, set_installed) = signal(Vec::<WalletProvider>::new());

    let toggle_menu = move |_| {
        // extensions inject late, so detect on open rather than on mount
        set_installed.set(get_available_wallets());
        set_menu_open.update(|open| *open = !*open);
    };

    let connect = move |provider: WalletProvider| {
        set_menu_open.set(false);
        wallet.set_connecting(provider);
        leptos::task::spawn_local(async move {
            match connect_wallet_provider(provider, false).await {
                Ok(state) => {
                    wallet.apply(provider, state);
                    wallet.watch(provider);
                }
                Err(e) => wallet.set_error(e.user_message()),
            }
        });
    };

    let disconnect = move |_| {
        let Some(provider) = wallet.current_provider() else {
            wallet.disconnect();
            return;
        };
        leptos::task::spawn_local(async move {
            if let Err(e) = disconnect_wallet_provider(provider).await {
                log::warn!("{} disconnect failed: {}", provider.name(), e);
            }
            wallet.disconnect();
        });
    };

    view! {
        <div class="wallet-widget inline-block relative">
            {move || match wallet.wallet.get() {
                WalletState::Connected { address, provider } => {
                    let label = address
                        .map(|key| truncate_address(key.as_str()))
                        .unwrap_or_else(|| format!("{} connected", provider.name()));
                    view! {
                        <div class="flex gap-2 justify-center">
                            <span class="wallet-button">{label}</span>
                            <button class="wallet-button" on:click=disconnect>"Disconnect"</button>
                        </div>
                    }
                        .into_any()
                }
                WalletState::Connecting(provider) => {
                    view! {
                        <button class="wallet-button" disabled=true>
                            {format!("Connecting to {}...", provider.name())}
                        </button>
                    }
                        .into_any()
                }
                WalletState::Disconnected | WalletState::Error(_) => {
                    view! {
                        <button class="wallet-button" on:click=toggle_menu>"Select Wallet"</button>
                    }
                        .into_any()
                }
            }}

            {move || {
                menu_open
                    .get()
                    .then(|| {
                        let detected = installed.get();
                        view! {
                            <ul class="wallet-menu">
                                {WalletProvider::ALL
                                    .into_iter()
                                    .map(|provider| {
                                        let hint = if detected.contains(&provider) {
                                            "Detected"
                                        } else {
                                            "Not installed"
                                        };
                                        view! {
                                            <li>
                                                <button
                                                    class="wallet-menu-item"
                                                    on:click=move |_| connect(provider)
                                                >
                                                    <span>{provider.name()}</span>
                                                    <span class="wallet-menu-hint">{hint}</span>
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                    })
            }}

            {move || match wallet.wallet.get() {
                WalletState::Error(message) => Some(view! { <p class="wallet-error">{message}</p> }),
                _ => None,
            }}
        </div>
    }
}
