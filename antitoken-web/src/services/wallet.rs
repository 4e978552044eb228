//! Injected Wallet Integration via wasm-bindgen
//!
//! JavaScript interop for browser-injected Solana wallets (Phantom, Solflare,
//! Backpack). Every call goes through `getWalletAdapter`, so provider quirks
//! stay on the JS side and Rust only sees plain values.

use js_sys::{Reflect, Uint8Array};
use lib_core::{AppError, PublicKey, Result};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Supported wallet provider types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletProvider {
    Phantom,
    Solflare,
    Backpack,
}

impl WalletProvider {
    pub const ALL: [WalletProvider; 3] = [
        WalletProvider::Phantom,
        WalletProvider::Solflare,
        WalletProvider::Backpack,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WalletProvider::Phantom => "Phantom",
            WalletProvider::Solflare => "Solflare",
            WalletProvider::Backpack => "Backpack",
        }
    }

    /// Identifier used on the JS side and in local storage.
    pub fn id(&self) -> &'static str {
        match self {
            WalletProvider::Phantom => "phantom",
            WalletProvider::Solflare => "solflare",
            WalletProvider::Backpack => "backpack",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|provider| provider.id() == id)
    }
}

// ============================================================================
// WALLET DETECTION AND CONNECTION (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function detectWallets() {
    const wallets = [];
    if (window.solana && window.solana.isPhantom) {
        wallets.push({ name: 'Phantom', provider: 'phantom', installed: true });
    }
    if (window.solflare || (window.solana && window.solana.isSolflare === true)) {
        wallets.push({ name: 'Solflare', provider: 'solflare', installed: true });
    }
    if (window.backpack || (window.solana && window.solana.isBackpack)) {
        wallets.push({ name: 'Backpack', provider: 'backpack', installed: true });
    }
    return wallets;
}

export function getWalletAdapter(provider) {
    switch (provider) {
        case 'phantom':
            return window.solana && window.solana.isPhantom ? window.solana : null;
        case 'solflare':
            if (window.solflare) {
                return window.solflare;
            }
            return window.solana && window.solana.isSolflare === true ? window.solana : null;
        case 'backpack':
            if (window.backpack) {
                return window.backpack;
            }
            return window.solana && window.solana.isBackpack ? window.solana : null;
        default:
            return null;
    }
}

function keyToString(key) {
    if (!key) {
        return null;
    }
    return key.toString ? key.toString() : String(key);
}

export async function connectWallet(provider, onlyIfTrusted) {
    const adapter = getWalletAdapter(provider);
    if (!adapter) {
        throw new Error(provider + ' wallet not found');
    }
    try {
        const response = onlyIfTrusted
            ? await adapter.connect({ onlyIfTrusted: true })
            : await adapter.connect();
        const key = (response && response.publicKey) || adapter.publicKey;
        return { connected: true, publicKey: keyToString(key) };
    } catch (error) {
        const errorMsg = error && error.message ? error.message : String(error);
        throw new Error('Failed to connect to ' + provider + ': ' + errorMsg);
    }
}

export async function disconnectWallet(provider) {
    const adapter = getWalletAdapter(provider);
    if (adapter && typeof adapter.disconnect === 'function') {
        await adapter.disconnect();
    }
}

export function getWalletState(provider) {
    const adapter = getWalletAdapter(provider);
    if (!adapter) {
        return { connected: false, publicKey: null };
    }
    const connected = adapter.isConnected === true || adapter.connected === true;
    return { connected: connected, publicKey: keyToString(adapter.publicKey) };
}

export function subscribeWalletEvent(provider, event, callback) {
    const adapter = getWalletAdapter(provider);
    if (!adapter || typeof adapter.on !== 'function') {
        return false;
    }
    adapter.on(event, (payload) => callback(keyToString(payload)));
    return true;
}

export async function signMessageWithWallet(provider, messageBytes) {
    const adapter = getWalletAdapter(provider);
    if (!adapter) {
        throw new Error(provider + ' wallet not found');
    }
    if (typeof adapter.signMessage !== 'function') {
        throw new Error('Wallet does not support message signing');
    }
    try {
        const result = await adapter.signMessage(new Uint8Array(messageBytes), 'utf8');
        return result && result.signature ? result.signature : result;
    } catch (error) {
        const errorMsg = error && error.message ? error.message : String(error);
        throw new Error('Failed to sign message: ' + errorMsg);
    }
}
")]
extern "C" {
    /// Detect all installed wallets
    fn detectWallets() -> JsValue;

    /// Get wallet adapter for a specific provider
    fn getWalletAdapter(provider: &str) -> Option<JsValue>;

    #[wasm_bindgen(catch)]
    async fn connectWallet(provider: &str, only_if_trusted: bool) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn disconnectWallet(provider: &str) -> std::result::Result<JsValue, JsValue>;

    fn getWalletState(provider: &str) -> JsValue;

    /// Returns false when the adapter has no event emitter
    fn subscribeWalletEvent(provider: &str, event: &str, callback: &js_sys::Function) -> bool;

    #[wasm_bindgen(catch)]
    async fn signMessageWithWallet(provider: &str, message_bytes: &[u8]) -> std::result::Result<JsValue, JsValue>;
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// Detected wallet information
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetectedWallet {
    pub name: String,
    pub provider: String,
    pub installed: bool,
}

/// Connection result as reported by the adapter.
///
/// `public_key` is `None` when the adapter reports a connection without a key,
/// or hands back something that is not a valid public key.
#[derive(Clone, Debug, PartialEq)]
pub struct AdapterState {
    pub connected: bool,
    pub public_key: Option<PublicKey>,
}

/// Installed wallets, in detection order.
pub fn get_available_wallets() -> Vec<WalletProvider> {
    let wallets: Vec<DetectedWallet> =
        serde_wasm_bindgen::from_value(detectWallets()).unwrap_or_else(|e| {
            log::warn!("wallet detection returned unexpected data: {:?}", e);
            vec![]
        });

    log::debug!(
        "detected wallets: {:?}",
        wallets.iter().map(|w| w.name.as_str()).collect::<Vec<_>>()
    );

    wallets
        .iter()
        .filter(|w| w.installed)
        .filter_map(|w| WalletProvider::from_id(&w.provider))
        .collect()
}

/// Check if a specific wallet is installed
pub fn is_wallet_installed(provider: WalletProvider) -> bool {
    getWalletAdapter(provider.id()).is_some()
}

/// Connect to a wallet provider.
///
/// With `only_if_trusted` the wallet connects silently or fails; it never
/// prompts the visitor.
pub async fn connect_wallet_provider(
    provider: WalletProvider,
    only_if_trusted: bool,
) -> Result<AdapterState> {
    let result = connectWallet(provider.id(), only_if_trusted)
        .await
        .map_err(|e| AppError::Wallet(js_error_message(&e, "Connection error")))?;
    Ok(read_adapter_state(&result))
}

pub async fn disconnect_wallet_provider(provider: WalletProvider) -> Result<()> {
    disconnectWallet(provider.id())
        .await
        .map(|_| ())
        .map_err(|e| AppError::Wallet(js_error_message(&e, "Disconnect error")))
}

/// Current adapter state without prompting.
pub fn current_wallet_state(provider: WalletProvider) -> AdapterState {
    read_adapter_state(&getWalletState(provider.id()))
}

/// Call `handler` whenever the adapter emits `event`.
///
/// The handler receives the event payload as a string when it is a key
/// (`accountChanged`), `None` otherwise. The listener lives for the page.
pub fn on_wallet_event<F>(provider: WalletProvider, event: &str, handler: F) -> bool
where
    F: FnMut(Option<String>) + 'static,
{
    let mut handler = handler;
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
        handler(payload.as_string());
    });
    let subscribed = subscribeWalletEvent(provider.id(), event, callback.as_ref().unchecked_ref());
    callback.forget();
    subscribed
}

/// Sign `message` with the connected wallet and return the raw signature bytes.
pub async fn sign_message_provider(provider: WalletProvider, message: &[u8]) -> Result<Vec<u8>> {
    let value = signMessageWithWallet(provider.id(), message)
        .await
        .map_err(|e| AppError::Wallet(js_error_message(&e, "Sign error")))?;

    if !value.is_instance_of::<Uint8Array>() {
        return Err(AppError::Encoding(
            "wallet returned a signature that is not a byte array".to_string(),
        ));
    }
    Ok(Uint8Array::new(&value).to_vec())
}

fn read_adapter_state(value: &JsValue) -> AdapterState {
    let connected = Reflect::get(value, &JsValue::from_str("connected"))
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false);

    let public_key = Reflect::get(value, &JsValue::from_str("publicKey"))
        .ok()
        .and_then(|v| v.as_string())
        .and_then(|raw| match PublicKey::parse(&raw) {
            Ok(key) => Some(key),
            Err(e) => {
                log::warn!("ignoring wallet public key: {}", e);
                None
            }
        });

    AdapterState {
        connected,
        public_key,
    }
}

fn js_error_message(error: &JsValue, fallback: &str) -> String {
    if let Some(message) = error.as_string() {
        return message;
    }
    if let Some(message) = error
        .dyn_ref::<js_sys::Error>()
        .and_then(|e| e.message().as_string())
    {
        return message;
    }
    format!("{}: {:?}", fallback, error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_ids_round_trip() {
        for provider in WalletProvider::ALL {
            assert_eq!(WalletProvider::from_id(provider.id()), Some(provider));
        }
        assert_eq!(WalletProvider::from_id("torus"), None);
    }
}
