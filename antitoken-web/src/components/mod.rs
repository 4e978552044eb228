//! UI Components

pub mod features;
pub mod hero;
pub mod starfield;
pub mod vote_option;
pub mod voting_section;
pub mod wallet_button;

pub use features::Features;
pub use hero::Hero;
pub use starfield::Starfield;
pub use vote_option::VoteOption;
pub use voting_section::VotingSection;
pub use wallet_button::WalletButton;
