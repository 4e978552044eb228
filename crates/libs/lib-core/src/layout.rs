//! # Decorative Layout
//!
//! Deterministic positions for the background starfield.
//!
//! Stars are placed with a cheap sine hash instead of a real RNG so that the
//! layout is identical on every render and every reload. This is a visual
//! jitter function only, not a statistically sound generator.

/// Seed shared by every starfield render.
pub const STAR_SEED: f64 = 42.0;

/// Number of stars drawn behind the page.
pub const STAR_COUNT: usize = 16;

/// Amplifies small changes in `sin(x)` before the fraction is taken.
const HASH_SCALE: f64 = 10_000.0;

/// Map `x` to a reproducible value in `[0, 1)`.
///
/// Computes `frac(sin(x) * 10000)`. The same `x` always yields the same value.
pub fn seeded_random(x: f64) -> f64 {
    let scaled = x.sin() * HASH_SCALE;
    let fraction = scaled - scaled.floor();
    // tiny negative inputs round up to exactly 1.0
    if fraction >= 1.0 {
        0.0
    } else {
        fraction
    }
}

/// Colour variant of a star.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarTone {
    Red,
    Green,
}

impl StarTone {
    pub fn class_name(&self) -> &'static str {
        match self {
            StarTone::Red => "star-red",
            StarTone::Green => "star-green",
        }
    }
}

/// One decorative star, derived from its index.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub index: usize,
    /// Vertical position in percent, `[0, 100)`.
    pub top: f64,
    /// Horizontal position in percent, `[0, 100)`.
    pub left: f64,
    pub tone: StarTone,
    /// Length of the float animation cycle in seconds.
    pub float_secs: u32,
}

impl Star {
    /// Derive the star at `index` for `seed`.
    ///
    /// `top` hashes `seed + index` and `left` hashes `seed * index`, so the
    /// star at index 0 always sits on the left edge whatever the seed.
    pub fn at(seed: f64, index: usize) -> Self {
        let i = index as f64;
        let tone = if index % 2 == 0 {
            StarTone::Red
        } else {
            StarTone::Green
        };

        Self {
            index,
            top: seeded_random(seed + i) * 100.0,
            left: seeded_random(seed * i) * 100.0,
            tone,
            float_secs: 8 + (index % 6) as u32,
        }
    }

    pub fn class_name(&self) -> String {
        format!(
            "star {} animate-[float_{}s_ease-in-out_infinite]",
            self.tone.class_name(),
            self.float_secs
        )
    }

    pub fn style(&self) -> String {
        format!("top: {}%; left: {}%;", self.top, self.left)
    }
}

/// Build the full starfield for `seed`.
pub fn star_field(seed: f64, count: usize) -> Vec<Star> {
    (0..count).map(|index| Star::at(seed, index)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_random_known_values() {
        assert!((seeded_random(42.0) - 0.784_520_843_662_903_6).abs() < 1e-6);
        assert!((seeded_random(43.0) - 0.252_573_714_016_762_1).abs() < 1e-6);
        assert_eq!(seeded_random(0.0), 0.0);
    }

    #[test]
    fn test_fraction_of_one_folds_to_zero() {
        let scaled = (-1e-21_f64).sin() * HASH_SCALE;
        assert_eq!(scaled - scaled.floor(), 1.0);
        assert_eq!(seeded_random(-1e-21), 0.0);
    }

    #[test]
    fn test_star_field_is_deterministic() {
        let first = star_field(STAR_SEED, STAR_COUNT);
        let second = star_field(STAR_SEED, STAR_COUNT);
        assert_eq!(first.len(), 16);
        assert_eq!(first, second);

        for index in 0..16 {
            let a = Star::at(STAR_SEED, index);
            let b = Star::at(STAR_SEED, index);
            assert_eq!((a.top, a.left), (b.top, b.left));
        }
    }

    #[test]
    fn test_coordinates_in_percent_range() {
        for seed in [STAR_SEED, 1.0, 7.5, 1234.0, -3.0] {
            for star in star_field(seed, 64) {
                assert!((0.0..100.0).contains(&star.top), "top {} out of range", star.top);
                assert!((0.0..100.0).contains(&star.left), "left {} out of range", star.left);
            }
        }
    }

    #[test]
    fn test_first_star_sits_on_left_edge_for_any_seed() {
        for seed in [STAR_SEED, 0.0, 1.0, 99.0, 31337.0] {
            assert_eq!(Star::at(seed, 0).left, 0.0);
        }
    }

    #[test]
    fn test_tone_and_animation_cycle() {
        let stars = star_field(STAR_SEED, STAR_COUNT);
        assert_eq!(stars[0].tone, StarTone::Red);
        assert_eq!(stars[1].tone, StarTone::Green);
        assert_eq!(stars[0].float_secs, 8);
        assert_eq!(stars[5].float_secs, 13);
        assert_eq!(stars[6].float_secs, 8);
        assert_eq!(
            stars[1].class_name(),
            "star star-green animate-[float_9s_ease-in-out_infinite]"
        );
        assert!(stars[0].style().starts_with("top: "));
        assert!(stars[0].style().ends_with("left: 0%;"));
    }
}
