//! # Site Configuration
//!
//! Settings resolved once at startup and passed down to the page as a value.
//!
//! The web front end resolves them from compile-time environment
//! (`option_env!`), tests from a map. Both go through
//! [`SiteConfig::from_lookup`]:
//!
//! ```rust
//! use lib_core::config::{SiteConfig, DEFAULT_BASE_URL};
//!
//! let config = SiteConfig::from_lookup(|_| None).unwrap();
//! assert_eq!(config.base_url, DEFAULT_BASE_URL);
//! assert_eq!(config.asset_url("favicon/favicon.ico"), "../../assets/favicon/favicon.ico");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, Result};
use crate::model::{PublicKey, TokenMint, TokenMints};

/// Base URL for absolute asset links.
pub const BASE_URL_VAR: &str = "ANTITOKEN_BASE_URL";
/// Override for the $ANTI mint.
pub const ANTI_MINT_VAR: &str = "ANTITOKEN_ANTI_MINT";
/// Override for the $PRO mint.
pub const PRO_MINT_VAR: &str = "ANTITOKEN_PRO_MINT";
/// Solana cluster the wallet targets.
pub const CLUSTER_VAR: &str = "ANTITOKEN_CLUSTER";
/// Whether to reconnect a previously trusted wallet on load.
pub const AUTO_CONNECT_VAR: &str = "ANTITOKEN_AUTO_CONNECT";

/// Relative fallback used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "../..";

pub const DEFAULT_ANTI_MINT: &str = "ehsT5tCvRyzYC1fTfHKv87kawGuTmEgXhSpytUgARPw";
pub const DEFAULT_PRO_MINT: &str = "H1o72AGosc1vC6seaRtSjVqQfiVCh7R1xUPpJc9Re2Hv";

/// Public Solana clusters. Ballots name the cluster they were signed for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cluster {
    #[default]
    MainnetBeta,
    Devnet,
    Testnet,
}

impl Cluster {
    pub fn name(&self) -> &'static str {
        match self {
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cluster {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "mainnet-beta" | "mainnet" => Ok(Cluster::MainnetBeta),
            "devnet" => Ok(Cluster::Devnet),
            "testnet" => Ok(Cluster::Testnet),
            other => Err(AppError::Config(format!(
                "{} must be one of mainnet-beta, devnet, testnet (got '{}')",
                CLUSTER_VAR, other
            ))),
        }
    }
}

/// Settings for one render of the landing page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Prefix for every asset link, used verbatim when configured.
    pub base_url: String,

    /// The $ANTI / $PRO mints votes are cast against.
    pub mints: TokenMints,

    pub cluster: Cluster,

    /// Reconnect a wallet the visitor already trusted this site with.
    pub auto_connect: bool,
}

impl SiteConfig {
    /// Resolve configuration through `lookup`.
    ///
    /// Blank values count as unset. Unset values fall back to their defaults;
    /// malformed values fail with [`AppError::Config`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let get = |name: &'static str| lookup(name).filter(|val| !val.trim().is_empty());

        let base_url = match get(BASE_URL_VAR) {
            Some(url) => url,
            None => {
                tracing::debug!("{} unset, using relative base {}", BASE_URL_VAR, DEFAULT_BASE_URL);
                DEFAULT_BASE_URL.to_string()
            }
        };

        let anti = parse_mint(ANTI_MINT_VAR, get(ANTI_MINT_VAR), DEFAULT_ANTI_MINT)?;
        let pro = parse_mint(PRO_MINT_VAR, get(PRO_MINT_VAR), DEFAULT_PRO_MINT)?;

        let cluster = match get(CLUSTER_VAR) {
            Some(name) => name.parse()?,
            None => Cluster::default(),
        };

        let auto_connect = match get(AUTO_CONNECT_VAR) {
            Some(flag) => parse_flag(AUTO_CONNECT_VAR, &flag)?,
            None => true,
        };

        let config = Self {
            base_url,
            mints: TokenMints {
                anti: TokenMint {
                    symbol: "$ANTI",
                    address: anti,
                },
                pro: TokenMint {
                    symbol: "$PRO",
                    address: pro,
                },
            },
            cluster,
            auto_connect,
        };
        config.validate()?;

        tracing::debug!(
            "site config resolved: base_url={}, cluster={}, auto_connect={}",
            config.base_url,
            config.cluster,
            config.auto_connect
        );
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.mints.anti.address == self.mints.pro.address {
            return Err(AppError::Config(format!(
                "{} and {} must name different mints",
                ANTI_MINT_VAR, PRO_MINT_VAR
            )));
        }
        Ok(())
    }

    /// Absolute link to a file under `assets/`.
    pub fn asset_url(&self, path: &str) -> String {
        format!("{}/assets/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn parse_mint(var: &'static str, value: Option<String>, default: &str) -> Result<PublicKey> {
    let raw = value.as_deref().unwrap_or(default);
    PublicKey::parse(raw).map_err(|e| {
        tracing::warn!("rejected {}: {}", var, e);
        AppError::Config(format!("{} is not a valid mint: {}", var, e))
    })
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!(
            "{} must be true or false (got '{}')",
            var, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&'static str, &str)]) -> Result<SiteConfig> {
        let vars: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        SiteConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.base_url, "../..");
        assert_eq!(config.cluster, Cluster::MainnetBeta);
        assert!(config.auto_connect);
        assert_eq!(config.mints.anti.address.as_str(), DEFAULT_ANTI_MINT);
        assert_eq!(config.mints.pro.address.as_str(), DEFAULT_PRO_MINT);
    }

    #[test]
    fn test_unset_base_url_falls_back_to_relative_default() {
        let config = config_from(&[]).unwrap();
        assert_eq!(
            config.asset_url("antitoken_logo.jpeg"),
            "../../assets/antitoken_logo.jpeg"
        );

        let blank = config_from(&[(BASE_URL_VAR, "  ")]).unwrap();
        assert_eq!(blank.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_set_base_url_used_verbatim() {
        let config = config_from(&[(BASE_URL_VAR, "https://antitoken.pro")]).unwrap();
        assert_eq!(config.base_url, "https://antitoken.pro");
        assert_eq!(
            config.asset_url("favicon/site.webmanifest"),
            "https://antitoken.pro/assets/favicon/site.webmanifest"
        );
    }

    #[test]
    fn test_cluster_and_auto_connect() {
        let config = config_from(&[(CLUSTER_VAR, "devnet"), (AUTO_CONNECT_VAR, "false")]).unwrap();
        assert_eq!(config.cluster, Cluster::Devnet);
        assert_eq!(config.cluster.to_string(), "devnet");
        assert!(!config.auto_connect);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        assert!(matches!(
            config_from(&[(CLUSTER_VAR, "localnet")]),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            config_from(&[(AUTO_CONNECT_VAR, "maybe")]),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            config_from(&[(ANTI_MINT_VAR, "not-a-mint")]),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_identical_mints_rejected() {
        let err = config_from(&[(PRO_MINT_VAR, DEFAULT_ANTI_MINT)]).unwrap_err();
        assert!(err.to_string().contains("different mints"));
    }

    #[test]
    fn test_mint_override() {
        let sol = "So11111111111111111111111111111111111111112";
        let config = config_from(&[(ANTI_MINT_VAR, sol)]).unwrap();
        assert_eq!(config.mints.anti.address.as_str(), sol);
        assert_eq!(config.mints.anti.symbol, "$ANTI");
    }
}
