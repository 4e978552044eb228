//! Static marketing sections: the hero and the feature cards.

use crate::config::SiteConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroView {
    pub title: &'static str,
    pub lead: &'static str,
    pub anti_symbol: &'static str,
    pub pro_symbol: &'static str,
    pub logo_src: String,
    pub logo_alt: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
}

static FEATURES: [FeatureCard; 3] = [
    FeatureCard {
        title: "Quantum-inspired Design",
        description: "Unique entangled token pair system based on quantum mechanical principles.",
    },
    FeatureCard {
        title: "Advanced Market Making",
        description: "Discretised AMM model with paired interaction mechanics.",
    },
    FeatureCard {
        title: "DeSci Integration",
        description: "Perfect for decentralised science funding and prediction markets.",
    },
];

pub fn hero(config: &SiteConfig) -> HeroView {
    HeroView {
        title: "Quantum-inspired Token Pair for DeSci & Prediction Markets",
        lead: "Experience the future of entangled token pair market making with",
        anti_symbol: config.mints.anti.symbol,
        pro_symbol: config.mints.pro.symbol,
        logo_src: config.asset_url("antitoken_logo_large.webp"),
        logo_alt: "Antitoken Logo",
    }
}

pub fn features() -> &'static [FeatureCard] {
    &FEATURES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BASE_URL_VAR;

    #[test]
    fn test_hero_logo_follows_base_url() {
        let default = SiteConfig::from_lookup(|_| None).unwrap();
        assert_eq!(hero(&default).logo_src, "../../assets/antitoken_logo_large.webp");

        let hosted = SiteConfig::from_lookup(|name| {
            (name == BASE_URL_VAR).then(|| "https://antitoken.pro".to_string())
        })
        .unwrap();
        let view = hero(&hosted);
        assert_eq!(view.logo_src, "https://antitoken.pro/assets/antitoken_logo_large.webp");
        assert_eq!((view.anti_symbol, view.pro_symbol), ("$ANTI", "$PRO"));
    }

    #[test]
    fn test_feature_cards() {
        let titles: Vec<&str> = features().iter().map(|card| card.title).collect();
        assert_eq!(
            titles,
            vec!["Quantum-inspired Design", "Advanced Market Making", "DeSci Integration"]
        );
    }
}
