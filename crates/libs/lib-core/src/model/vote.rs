//! Vote options and the token mints they map to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::wallet::PublicKey;
use crate::error::AppError;

/// The two sides a visitor can vote for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteChoice {
    A,
    B,
}

impl VoteChoice {
    pub const ALL: [VoteChoice; 2] = [VoteChoice::A, VoteChoice::B];

    pub fn tag(&self) -> &'static str {
        match self {
            VoteChoice::A => "A",
            VoteChoice::B => "B",
        }
    }
}

impl fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for VoteChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(VoteChoice::A),
            "B" | "b" => Ok(VoteChoice::B),
            other => Err(AppError::InvalidInput(format!("unknown vote option '{}'", other))),
        }
    }
}

/// A token type, identified by its on-chain mint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenMint {
    pub symbol: &'static str,
    pub address: PublicKey,
}

/// The $ANTI / $PRO pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenMints {
    pub anti: TokenMint,
    pub pro: TokenMint,
}

impl TokenMints {
    /// Mint a vote for `choice` is cast against.
    pub fn for_choice(&self, choice: VoteChoice) -> &TokenMint {
        match choice {
            VoteChoice::A => &self.anti,
            VoteChoice::B => &self.pro,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mints() -> TokenMints {
        TokenMints {
            anti: TokenMint {
                symbol: "$ANTI",
                address: PublicKey::parse("ehsT5tCvRyzYC1fTfHKv87kawGuTmEgXhSpytUgARPw").unwrap(),
            },
            pro: TokenMint {
                symbol: "$PRO",
                address: PublicKey::parse("H1o72AGosc1vC6seaRtSjVqQfiVCh7R1xUPpJc9Re2Hv").unwrap(),
            },
        }
    }

    #[test]
    fn test_choice_maps_to_mint() {
        let mints = mints();
        assert_eq!(mints.for_choice(VoteChoice::A).symbol, "$ANTI");
        assert_eq!(mints.for_choice(VoteChoice::B).symbol, "$PRO");
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!("A".parse::<VoteChoice>().unwrap(), VoteChoice::A);
        assert_eq!(" b ".parse::<VoteChoice>().unwrap(), VoteChoice::B);
        assert!("C".parse::<VoteChoice>().is_err());
        assert_eq!(VoteChoice::B.to_string(), "B");
    }
}
