//! Game configuration.
//!
//! Every tunable constant of the simulation lives in [`GameConfig`]. The
//! defaults reproduce the classic layout: ten planets on a 1000x700 field,
//! production every five seconds and one AI decision per second at 60 Hz.
//!
//! Configs are plain serde data so a front end can load them from JSON;
//! missing fields fall back to their defaults.
//!
//! # Example
//!
//! ```
//! use planetwar_core::config::GameConfig;
//!
//! let config = GameConfig::from_json_str(r#"{ "planet_count": 6, "seed": 7 }"#).unwrap();
//! assert_eq!(config.planet_count, 6);
//! assert_eq!(config.seed, 7);
//! assert_eq!(config.tick_rate, 60);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// =============================================================================
// UintRange
// =============================================================================

/// Inclusive integer range sampled uniformly during setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UintRange {
    /// Smallest value (inclusive)
    pub min: u32,
    /// Largest value (inclusive)
    pub max: u32,
}

impl UintRange {
    /// Creates a new inclusive range.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Returns true if `value` lies within the range.
    #[must_use]
    pub const fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Draws a value uniformly from the range.
    ///
    /// The range must be valid (`min <= max`); [`GameConfig::validate`]
    /// guarantees this for every range in a config.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.min..=self.max)
    }

    fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvertedRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

// =============================================================================
// GameConfig
// =============================================================================

/// All tunable parameters of a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield width in pixels.
    pub width: u32,
    /// Playfield height in pixels.
    pub height: u32,
    /// Border kept free of planet centres.
    pub margin: u32,
    /// Number of planets generated at setup.
    pub planet_count: usize,
    /// Minimum distance between any two planet centres.
    pub min_separation: u32,
    /// Rejection-sampling attempts allowed per planet before setup fails.
    pub max_placement_attempts: u32,
    /// Planet radius range.
    pub planet_radius: UintRange,
    /// Starting garrison of the two home planets.
    pub owned_ships: UintRange,
    /// Starting garrison of neutral planets.
    pub neutral_ships: UintRange,
    /// Ships produced per production cycle.
    pub production_rate: UintRange,
    /// Simulation ticks per second.
    pub tick_rate: u32,
    /// Ticks between production cycles.
    pub production_interval: u64,
    /// Ticks between AI decisions.
    pub ai_interval: u64,
    /// Chance that an AI turn attacks instead of reinforcing.
    pub ai_attack_probability: f64,
    /// Seed for the game's random number generator.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 700,
            margin: 50,
            planet_count: 10,
            min_separation: 100,
            max_placement_attempts: 10_000,
            planet_radius: UintRange::new(20, 40),
            owned_ships: UintRange::new(10, 50),
            neutral_ships: UintRange::new(5, 20),
            production_rate: UintRange::new(1, 5),
            tick_rate: 60,
            production_interval: 300,
            ai_interval: 60,
            ai_attack_probability: 0.5,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Returns the default config with the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parses a JSON document and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and any validation
    /// error from [`GameConfig::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the config can produce a playable game.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.planet_count < 2 {
            return Err(ConfigError::TooFewPlanets(self.planet_count));
        }
        if self.width <= self.margin.saturating_mul(2) || self.height <= self.margin.saturating_mul(2)
        {
            return Err(ConfigError::PlayfieldTooSmall {
                width: self.width,
                height: self.height,
                margin: self.margin,
            });
        }

        self.planet_radius.check("planet_radius")?;
        self.owned_ships.check("owned_ships")?;
        self.neutral_ships.check("neutral_ships")?;
        self.production_rate.check("production_rate")?;

        let positive = [
            ("planet_radius.min", u64::from(self.planet_radius.min)),
            ("production_rate.min", u64::from(self.production_rate.min)),
            ("max_placement_attempts", u64::from(self.max_placement_attempts)),
            ("tick_rate", u64::from(self.tick_rate)),
            ("production_interval", self.production_interval),
            ("ai_interval", self.ai_interval),
        ];
        if let Some(&(field, _)) = positive.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::Zero { field });
        }

        if !(0.0..=1.0).contains(&self.ai_attack_probability) {
            return Err(ConfigError::Probability {
                field: "ai_attack_probability",
                value: self.ai_attack_probability,
            });
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    mod default_tests {
        use super::*;

        #[test]
        fn default_is_valid() {
            assert!(GameConfig::default().validate().is_ok());
        }

        #[test]
        fn default_matches_classic_layout() {
            let config = GameConfig::default();
            assert_eq!(config.planet_count, 10);
            assert_eq!(config.min_separation, 100);
            assert_eq!(config.production_interval, 300);
            assert_eq!(config.ai_interval, 60);
            assert_eq!(config.owned_ships, UintRange::new(10, 50));
            assert_eq!(config.neutral_ships, UintRange::new(5, 20));
        }

        #[test]
        fn with_seed_only_changes_seed() {
            let config = GameConfig::with_seed(99);
            assert_eq!(config.seed, 99);
            assert_eq!(
                GameConfig { seed: 0, ..config },
                GameConfig::default()
            );
        }
    }

    mod validation_tests {
        use super::*;

        #[test]
        fn rejects_single_planet() {
            let config = GameConfig {
                planet_count: 1,
                ..GameConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::TooFewPlanets(1))
            ));
        }

        #[test]
        fn rejects_inverted_range() {
            let config = GameConfig {
                neutral_ships: UintRange::new(20, 5),
                ..GameConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvertedRange {
                    field: "neutral_ships",
                    ..
                })
            ));
        }

        #[test]
        fn rejects_zero_production() {
            let config = GameConfig {
                production_rate: UintRange::new(0, 3),
                ..GameConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::Zero {
                    field: "production_rate.min"
                })
            ));
        }

        #[test]
        fn rejects_zero_ai_interval() {
            let config = GameConfig {
                ai_interval: 0,
                ..GameConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::Zero {
                    field: "ai_interval"
                })
            ));
        }

        #[test]
        fn rejects_margin_eating_playfield() {
            let config = GameConfig {
                width: 100,
                margin: 50,
                ..GameConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::PlayfieldTooSmall { .. })
            ));
        }

        #[test]
        fn rejects_bad_probability() {
            let config = GameConfig {
                ai_attack_probability: 1.5,
                ..GameConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::Probability { .. })
            ));
        }
    }

    mod json_tests {
        use super::*;

        #[test]
        fn empty_object_yields_defaults() {
            let config = GameConfig::from_json_str("{}").unwrap();
            assert_eq!(config, GameConfig::default());
        }

        #[test]
        fn serialized_config_parses_back() {
            let config = GameConfig::with_seed(1234);
            let json = serde_json::to_string(&config).unwrap();
            assert_eq!(GameConfig::from_json_str(&json).unwrap(), config);
        }

        #[test]
        fn malformed_json_is_parse_error() {
            assert!(matches!(
                GameConfig::from_json_str("{ planet_count: }"),
                Err(ConfigError::Parse(_))
            ));
        }

        #[test]
        fn invalid_values_fail_validation() {
            assert!(GameConfig::from_json_str(r#"{ "planet_count": 0 }"#).is_err());
        }
    }

    #[test]
    fn sample_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let range = UintRange::new(5, 20);
        for _ in 0..500 {
            assert!(range.contains(range.sample(&mut rng)));
        }
    }
}
