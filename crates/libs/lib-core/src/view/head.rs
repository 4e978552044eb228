//! Document head: title, social preview tags and icons.

use crate::config::SiteConfig;

pub const PAGE_TITLE: &str = "Antitoken - Quantum-inspired Token Pair";
pub const PAGE_DESCRIPTION: &str =
    "Experience the future of entangled token pair market making with $ANTI and $PRO tokens.";
pub const SITE_NAME: &str = "Antitoken";
pub const TWITTER_HANDLE: &str = "@antitokens";

/// One element to place in `<head>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeadTag {
    Title(String),
    /// `<meta name=.. content=..>`
    MetaName { name: &'static str, content: String },
    /// `<meta property=.. content=..>` (Open Graph)
    MetaProperty { property: &'static str, content: String },
    Link {
        rel: &'static str,
        href: String,
        mime: Option<&'static str>,
        sizes: Option<&'static str>,
    },
}

impl HeadTag {
    fn name(name: &'static str, content: impl Into<String>) -> Self {
        HeadTag::MetaName {
            name,
            content: content.into(),
        }
    }

    fn property(property: &'static str, content: impl Into<String>) -> Self {
        HeadTag::MetaProperty {
            property,
            content: content.into(),
        }
    }

    fn link(rel: &'static str, href: String) -> Self {
        HeadTag::Link {
            rel,
            href,
            mime: None,
            sizes: None,
        }
    }

    /// The link target, for tags that have one.
    pub fn href(&self) -> Option<&str> {
        match self {
            HeadTag::Link { href, .. } => Some(href),
            _ => None,
        }
    }
}

/// Head tags for the landing page. Only the asset links depend on `config`.
pub fn head_tags(config: &SiteConfig) -> Vec<HeadTag> {
    vec![
        HeadTag::Title(PAGE_TITLE.to_string()),
        HeadTag::name("description", PAGE_DESCRIPTION),
        // Open Graph
        HeadTag::property("og:title", PAGE_TITLE),
        HeadTag::property("og:description", PAGE_DESCRIPTION),
        HeadTag::property("og:image", config.asset_url("antitoken_logo.jpeg")),
        HeadTag::property("og:url", config.base_url.clone()),
        HeadTag::property("og:site_name", SITE_NAME),
        // Twitter
        HeadTag::name("twitter:card", "summary_large_image"),
        HeadTag::name("twitter:title", PAGE_TITLE),
        HeadTag::name("twitter:description", PAGE_DESCRIPTION),
        HeadTag::name("twitter:image", config.asset_url("antitoken_logo_large.webp")),
        HeadTag::name("twitter:site", TWITTER_HANDLE),
        // Icons
        HeadTag::Link {
            rel: "icon",
            href: config.asset_url("favicon/favicon-96x96.png"),
            mime: Some("image/png"),
            sizes: Some("96x96"),
        },
        HeadTag::link("shortcut icon", config.asset_url("favicon/favicon.ico")),
        HeadTag::Link {
            rel: "apple-touch-icon",
            href: config.asset_url("favicon/apple-touch-icon.png"),
            mime: None,
            sizes: Some("180x180"),
        },
        HeadTag::link("manifest", config.asset_url("favicon/site.webmanifest")),
    ]
}
