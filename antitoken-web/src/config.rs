//! Build-time configuration
//!
//! The browser has no process environment, so settings are baked in when the
//! wasm bundle is compiled (`ANTITOKEN_BASE_URL=https://... trunk build`).

use lib_core::config::{
    SiteConfig, ANTI_MINT_VAR, AUTO_CONNECT_VAR, BASE_URL_VAR, CLUSTER_VAR, PRO_MINT_VAR,
};

/// Value of a configuration variable captured at compile time.
fn build_env(name: &'static str) -> Option<String> {
    let value = match name {
        BASE_URL_VAR => option_env!("ANTITOKEN_BASE_URL"),
        ANTI_MINT_VAR => option_env!("ANTITOKEN_ANTI_MINT"),
        PRO_MINT_VAR => option_env!("ANTITOKEN_PRO_MINT"),
        CLUSTER_VAR => option_env!("ANTITOKEN_CLUSTER"),
        AUTO_CONNECT_VAR => option_env!("ANTITOKEN_AUTO_CONNECT"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Resolve the site configuration once, at startup.
pub fn load() -> lib_core::Result<SiteConfig> {
    SiteConfig::from_lookup(build_env)
}
