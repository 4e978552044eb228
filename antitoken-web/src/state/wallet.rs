//! Wallet state management

use leptos::prelude::*;
use lib_core::{PublicKey, WalletSnapshot};

use crate::services::wallet::{on_wallet_event, AdapterState, WalletProvider};

/// Local storage key remembering the last wallet the visitor connected.
const LAST_PROVIDER_KEY: &str = "antitoken.wallet";

/// Wallet connection state with provider information
#[derive(Clone, Debug, PartialEq)]
pub enum WalletState {
    Disconnected,
    Connecting(WalletProvider),
    /// The adapter may report a connection before it exposes a key.
    Connected {
        address: Option<PublicKey>,
        provider: WalletProvider,
    },
    Error(String),
}

impl WalletState {
    pub fn provider(&self) -> Option<WalletProvider> {
        match self {
            WalletState::Connected { provider, .. } | WalletState::Connecting(provider) => {
                Some(*provider)
            }
            _ => None,
        }
    }

    pub fn snapshot(&self) -> WalletSnapshot {
        match self {
            WalletState::Connected { address, .. } => WalletSnapshot {
                connected: true,
                public_key: address.clone(),
            },
            _ => WalletSnapshot::disconnected(),
        }
    }
}

/// Page-wide wallet handle, passed to the components that need it.
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
    /// Providers whose adapter events are already forwarded here.
    watched: RwSignal<Vec<WalletProvider>>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(WalletState::Disconnected),
            watched: RwSignal::new(Vec::new()),
        }
    }

    /// Reactive view of the connection, as the voting section consumes it.
    pub fn snapshot(&self) -> WalletSnapshot {
        self.wallet.with(|state| state.snapshot())
    }

    /// Provider in use, read outside any reactive scope (event handlers).
    pub fn current_provider(&self) -> Option<WalletProvider> {
        self.wallet.with_untracked(|state| state.provider())
    }

    pub fn set_connecting(&self, provider: WalletProvider) {
        self.wallet.set(WalletState::Connecting(provider));
    }

    /// Apply what the adapter reported after a connect call or event.
    pub fn apply(&self, provider: WalletProvider, state: AdapterState) {
        if state.connected {
            log::info!(
                "{} connected ({})",
                provider.name(),
                state
                    .public_key
                    .as_ref()
                    .map(|key| key.as_str())
                    .unwrap_or("no public key yet")
            );
            remember_provider(Some(provider));
            self.wallet.set(WalletState::Connected {
                address: state.public_key,
                provider,
            });
        } else {
            self.disconnect();
        }
    }

    /// The adapter switched accounts; `None` means it no longer exposes one.
    pub fn set_address(&self, address: Option<PublicKey>) {
        self.wallet.update(|state| {
            if let WalletState::Connected { address: current, .. } = state {
                *current = address;
            }
        });
    }

    /// Follow account switches and disconnects made inside the wallet itself.
    pub fn watch(&self, provider: WalletProvider) {
        if self.watched.with_untracked(|watched| watched.contains(&provider)) {
            return;
        }
        self.watched.update(|watched| watched.push(provider));

        let ctx = *self;
        on_wallet_event(provider, "disconnect", move |_| {
            if ctx.current_provider() == Some(provider) {
                log::info!("{} disconnected from the wallet", provider.name());
                ctx.disconnect();
            }
        });
        on_wallet_event(provider, "accountChanged", move |payload| {
            if ctx.current_provider() != Some(provider) {
                return;
            }
            let address = payload.and_then(|raw| PublicKey::parse(&raw).ok());
            log::info!("{} switched account", provider.name());
            ctx.set_address(address);
        });
    }

    pub fn set_error(&self, error: String) {
        log::warn!("wallet error: {}", error);
        self.wallet.set(WalletState::Error(error));
    }

    pub fn disconnect(&self) {
        remember_provider(None);
        self.wallet.set(WalletState::Disconnected);
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Wallet the visitor connected last time, if any.
pub fn remembered_provider() -> Option<WalletProvider> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let id = storage.get_item(LAST_PROVIDER_KEY).ok()??;
    WalletProvider::from_id(&id)
}

fn remember_provider(provider: Option<WalletProvider>) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    let result = match provider {
        Some(provider) => storage.set_item(LAST_PROVIDER_KEY, provider.id()),
        None => storage.remove_item(LAST_PROVIDER_KEY),
    };
    if let Err(e) = result {
        log::debug!("could not persist wallet choice: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_follows_state() {
        let key = PublicKey::parse("8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL").unwrap();

        let connected = WalletState::Connected {
            address: Some(key.clone()),
            provider: WalletProvider::Phantom,
        };
        assert_eq!(connected.snapshot(), WalletSnapshot::connected(key));

        let keyless = WalletState::Connected {
            address: None,
            provider: WalletProvider::Solflare,
        };
        assert!(keyless.snapshot().is_awaiting_identity());

        for state in [
            WalletState::Disconnected,
            WalletState::Connecting(WalletProvider::Backpack),
            WalletState::Error("User rejected the request".to_string()),
        ] {
            assert_eq!(state.snapshot(), WalletSnapshot::disconnected());
        }
    }

    #[test]
    fn test_provider_of_state() {
        assert_eq!(
            WalletState::Connecting(WalletProvider::Phantom).provider(),
            Some(WalletProvider::Phantom)
        );
        assert_eq!(WalletState::Disconnected.provider(), None);
    }
}
