//! Match configuration.
//!
//! All rule constants that are numbers rather than logic live here. The
//! defaults reproduce the canonical rule set; `with_*` methods adjust
//! individual values.
//!
//! ```
//! use rune_cycle::core::{MatchConfig, SpentCardPolicy};
//!
//! let config = MatchConfig::default()
//!     .with_deck_size(20)
//!     .with_spent_cards(SpentCardPolicy::Discard);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.starting_hand_size, 5);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Where a played deck card goes after the round resolves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpentCardPolicy {
    /// Slide under the owner's deck; the deck never runs dry while cards exist.
    #[default]
    Recycle,
    /// Go to the owner's discard, reshuffled into the deck once it is empty.
    Discard,
}

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Cards per deck.
    pub deck_size: u32,

    /// Cards dealt to each hand before the first round.
    pub starting_hand_size: u32,

    /// Energy each competitor starts with, before arena bonuses.
    pub starting_energy: u32,

    /// Energy ceiling.
    pub max_energy: u32,

    /// Energy every competitor recovers after a round.
    pub energy_recovery: u32,

    /// Fixed energy cost of the coin token.
    pub coin_cost: u32,

    /// Fixed power of the coin (and fatigue) token.
    pub coin_power: i32,

    /// Sentinel power of a skip. Must be negative.
    pub skip_power: i32,

    /// Number of decks offered to the human before combat.
    pub draft_options: u32,

    /// Where spent deck cards go.
    pub spent_cards: SpentCardPolicy,

    /// Display name of the human competitor.
    pub player_name: String,

    /// Display name of the AI competitor.
    pub rival_name: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            deck_size: 15,
            starting_hand_size: 5,
            starting_energy: 6,
            max_energy: 10,
            energy_recovery: 2,
            coin_cost: 1,
            coin_power: 2,
            skip_power: -1,
            draft_options: 3,
            spent_cards: SpentCardPolicy::Recycle,
            player_name: "Hero".to_string(),
            rival_name: "Rival".to_string(),
        }
    }
}

impl MatchConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values are internally consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, min, value) in [
            ("deck_size", 1, self.deck_size),
            ("max_energy", 1, self.max_energy),
            ("coin_cost", 1, self.coin_cost),
            ("draft_options", 1, self.draft_options),
        ] {
            if value < min {
                return Err(ConfigError::TooSmall { field, min, value });
            }
        }
        if self.starting_hand_size > self.deck_size {
            return Err(ConfigError::HandLargerThanDeck {
                hand: self.starting_hand_size,
                deck: self.deck_size,
            });
        }
        if self.starting_energy > self.max_energy {
            return Err(ConfigError::StartingEnergyAboveMax {
                starting: self.starting_energy,
                max: self.max_energy,
            });
        }
        if self.skip_power >= 0 {
            return Err(ConfigError::NonNegativeSkipPower(self.skip_power));
        }
        Ok(())
    }

    pub fn with_deck_size(mut self, size: u32) -> Self {
        self.deck_size = size;
        self
    }

    pub fn with_starting_hand_size(mut self, size: u32) -> Self {
        self.starting_hand_size = size;
        self
    }

    pub fn with_starting_energy(mut self, energy: u32) -> Self {
        self.starting_energy = energy;
        self
    }

    pub fn with_spent_cards(mut self, policy: SpentCardPolicy) -> Self {
        self.spent_cards = policy;
        self
    }

    pub fn with_draft_options(mut self, count: u32) -> Self {
        self.draft_options = count;
        self
    }

    pub fn with_names(mut self, player: impl Into<String>, rival: impl Into<String>) -> Self {
        self.player_name = player.into();
        self.rival_name = rival.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.deck_size, 15);
        assert_eq!(config.starting_hand_size, 5);
        assert_eq!(config.starting_energy, 6);
        assert_eq!(config.max_energy, 10);
        assert_eq!(config.energy_recovery, 2);
        assert_eq!(config.spent_cards, SpentCardPolicy::Recycle);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MatchConfig::default()
            .with_deck_size(8)
            .with_starting_hand_size(3)
            .with_names("Ana", "Bot");

        assert_eq!(config.deck_size, 8);
        assert_eq!(config.starting_hand_size, 3);
        assert_eq!(config.player_name, "Ana");
        assert_eq!(config.rival_name, "Bot");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = MatchConfig::default().with_deck_size(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooSmall { field: "deck_size", .. })
        ));

        let config = MatchConfig::default().with_starting_energy(11);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StartingEnergyAboveMax { starting: 11, max: 10 })
        ));

        let config = MatchConfig {
            skip_power: 0,
            ..MatchConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NonNegativeSkipPower(0))));
    }

    #[test]
    fn test_from_json_partial() {
        let config = MatchConfig::from_json(r#"{ "deck_size": 20, "spent_cards": "discard" }"#).unwrap();
        assert_eq!(config.deck_size, 20);
        assert_eq!(config.spent_cards, SpentCardPolicy::Discard);
        assert_eq!(config.max_energy, 10);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(MatchConfig::from_json("{"), Err(ConfigError::Json(_))));
        assert!(matches!(
            MatchConfig::from_json(r#"{ "coin_cost": 0 }"#),
            Err(ConfigError::TooSmall { field: "coin_cost", .. })
        ));
    }

    #[test]
    fn test_serialization() {
        let config = MatchConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
