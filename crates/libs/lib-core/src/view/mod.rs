//! # Page Component Tree
//!
//! Each section of the landing page is a plain function from explicit input
//! (usually [`SiteConfig`](crate::config::SiteConfig)) to a view model. The web
//! front end turns these into markup; nothing here touches the DOM, so every
//! section can be tested on the host.

pub mod head;
pub mod sections;
pub mod voting;

pub use head::{head_tags, HeadTag, PAGE_DESCRIPTION, PAGE_TITLE};
pub use sections::{features, hero, FeatureCard, HeroView};
pub use voting::{voting_section, VoteControl, VotingSectionView};
