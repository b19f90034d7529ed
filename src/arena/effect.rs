//! Arena effect identities and their rules.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Element};
use crate::core::GameRng;

/// A match-wide rule modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArenaEffect {
    /// Cards with base cost 5+ get +1 power.
    FireTier,
    /// Cards with base cost 2 or less get +1 power.
    EarthTier,
    /// Both competitors start with +2 energy.
    LightningStart,
    /// Cards with base cost 3 or less cost 1 less, never below 1.
    AirDiscount,
    /// The round loser recovers 1 extra energy.
    WaterComeback,
}

impl ArenaEffect {
    /// Every effect, in roulette order.
    pub const ALL: [ArenaEffect; 5] = [
        ArenaEffect::FireTier,
        ArenaEffect::EarthTier,
        ArenaEffect::LightningStart,
        ArenaEffect::AirDiscount,
        ArenaEffect::WaterComeback,
    ];

    /// Roll one effect uniformly at random.
    pub fn random(rng: &mut GameRng) -> Self {
        Self::ALL[rng.gen_range_usize(0..Self::ALL.len())]
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            ArenaEffect::FireTier => "fire-tier",
            ArenaEffect::EarthTier => "earth-tier",
            ArenaEffect::LightningStart => "lightning-start",
            ArenaEffect::AirDiscount => "air-discount",
            ArenaEffect::WaterComeback => "water-comeback",
        }
    }

    /// Look up an effect by identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.id() == id)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ArenaEffect::FireTier => "Burning Ground",
            ArenaEffect::EarthTier => "Fortified Soil",
            ArenaEffect::LightningStart => "Opening Discharge",
            ArenaEffect::AirDiscount => "Open Sky",
            ArenaEffect::WaterComeback => "Favorable Tide",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            ArenaEffect::FireTier => "Cards costing 5+ get +1 power.",
            ArenaEffect::EarthTier => "Cards costing 2 or less get +1 power.",
            ArenaEffect::LightningStart => "Both sides start with +2 energy.",
            ArenaEffect::AirDiscount => "Cards costing 3 or less cost 1 less (min 1).",
            ArenaEffect::WaterComeback => "The round loser recovers +1 extra energy.",
        }
    }

    /// Cosmetic element of the arena.
    #[must_use]
    pub const fn element(self) -> Element {
        match self {
            ArenaEffect::FireTier => Element::Fire,
            ArenaEffect::EarthTier => Element::Earth,
            ArenaEffect::LightningStart => Element::Lightning,
            ArenaEffect::AirDiscount => Element::Air,
            ArenaEffect::WaterComeback => Element::Water,
        }
    }

    /// Energy cost of a card under this arena. Skips always cost their base.
    #[must_use]
    pub fn modified_cost(self, card: &Card) -> u32 {
        if card.is_skip() {
            return card.cost;
        }
        match self {
            ArenaEffect::AirDiscount if card.cost <= 3 => card.cost.saturating_sub(1).max(1),
            _ => card.cost,
        }
    }

    /// Power of a card under this arena. Skips keep their sentinel power.
    #[must_use]
    pub fn modified_power(self, card: &Card) -> i32 {
        if card.is_skip() {
            return card.power;
        }
        match self {
            ArenaEffect::FireTier if card.cost >= 5 => card.power + 1,
            ArenaEffect::EarthTier if card.cost <= 2 => card.power + 1,
            _ => card.power,
        }
    }

    /// One-time energy added to both competitors at match start.
    #[must_use]
    pub const fn starting_energy_bonus(self) -> u32 {
        match self {
            ArenaEffect::LightningStart => 2,
            _ => 0,
        }
    }

    /// Extra energy the loser of a round recovers.
    #[must_use]
    pub const fn loser_recovery_bonus(self) -> u32 {
        match self {
            ArenaEffect::WaterComeback => 1,
            _ => 0,
        }
    }
}

impl std::fmt::Display for ArenaEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::catalog::{template, SKIP};
    use crate::cards::CardKind;
    use crate::core::CardUid;

    fn card(id: &str) -> Card {
        Card::from_template(CardUid(0), template(id).unwrap())
    }

    fn skip() -> Card {
        Card::token(CardUid(1), CardKind::Skip, &SKIP, Element::Fire, -1, 0)
    }

    #[test]
    fn test_ids_round_trip() {
        for effect in ArenaEffect::ALL {
            assert_eq!(ArenaEffect::from_id(effect.id()), Some(effect));
            let json = serde_json::to_string(&effect).unwrap();
            assert_eq!(json, format!("\"{}\"", effect.id()));
        }
        assert_eq!(ArenaEffect::from_id("mud"), None);
    }

    #[test]
    fn test_fire_tier() {
        let arena = ArenaEffect::FireTier;
        assert_eq!(arena.modified_power(&card("f5")), 11); // cost 8
        assert_eq!(arena.modified_power(&card("l4")), 9); // cost 6
        assert_eq!(arena.modified_power(&card("f4")), 6); // cost 4
        assert_eq!(arena.modified_cost(&card("f5")), 8);
    }

    #[test]
    fn test_earth_tier() {
        let arena = ArenaEffect::EarthTier;
        assert_eq!(arena.modified_power(&card("e1")), 2);
        assert_eq!(arena.modified_power(&card("w2")), 4);
        assert_eq!(arena.modified_power(&card("a3")), 5);
    }

    #[test]
    fn test_air_discount() {
        let arena = ArenaEffect::AirDiscount;
        assert_eq!(arena.modified_cost(&card("f1")), 1); // floored
        assert_eq!(arena.modified_cost(&card("f2")), 1);
        assert_eq!(arena.modified_cost(&card("f3")), 2);
        assert_eq!(arena.modified_cost(&card("f4")), 4);
        assert_eq!(arena.modified_power(&card("f3")), 5);
    }

    #[test]
    fn test_energy_rules() {
        assert_eq!(ArenaEffect::LightningStart.starting_energy_bonus(), 2);
        assert_eq!(ArenaEffect::FireTier.starting_energy_bonus(), 0);
        assert_eq!(ArenaEffect::WaterComeback.loser_recovery_bonus(), 1);
        assert_eq!(ArenaEffect::AirDiscount.loser_recovery_bonus(), 0);
    }

    #[test]
    fn test_skip_is_never_modified() {
        for arena in ArenaEffect::ALL {
            assert_eq!(arena.modified_power(&skip()), -1);
            assert_eq!(arena.modified_cost(&skip()), 0);
        }
    }

    #[test]
    fn test_random_covers_all() {
        let mut rng = GameRng::new(3);
        let mut seen = Vec::new();
        for _ in 0..200 {
            let e = ArenaEffect::random(&mut rng);
            if !seen.contains(&e) {
                seen.push(e);
            }
        }
        assert_eq!(seen.len(), 5);
    }
}
