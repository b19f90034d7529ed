//! The card catalog.
//!
//! Five cards per element on the same cost curve, except Lightning, which
//! trades its cost-4 slot for a riskier cost-6 card. The coin is not part
//! of the pool; it is only ever created as a token.

use super::definition::CardTemplate;
use super::element::Element;
use crate::core::GameRng;

/// Every template a deck can contain.
pub const CARD_POOL: [CardTemplate; 25] = [
    // Fire
    CardTemplate::new("f1", "Searing Cannon", Element::Fire, 1, 1),
    CardTemplate::new("f2", "Incendiary Squad", Element::Fire, 3, 2),
    CardTemplate::new("f3", "Burning Field", Element::Fire, 5, 3),
    CardTemplate::new("f4", "Igneous Catapult", Element::Fire, 6, 4),
    CardTemplate::new("f5", "Avatar of the Furnace", Element::Fire, 10, 8),
    // Earth
    CardTemplate::new("e1", "Stone Sentinel", Element::Earth, 1, 1),
    CardTemplate::new("e2", "Rock Patrol", Element::Earth, 3, 2),
    CardTemplate::new("e3", "Line of Defense", Element::Earth, 5, 3),
    CardTemplate::new("e4", "Armored Colossus", Element::Earth, 6, 4),
    CardTemplate::new("e5", "Avatar of the Monolith", Element::Earth, 10, 8),
    // Lightning
    CardTemplate::new("l1", "Unstable Spark", Element::Lightning, 1, 1),
    CardTemplate::new("l2", "Energized Troops", Element::Lightning, 3, 2),
    CardTemplate::new("l3", "Total Overload", Element::Lightning, 5, 3),
    CardTemplate::new("l4", "Lightning Unit", Element::Lightning, 8, 6),
    CardTemplate::new("l5", "Avatar of the Storm", Element::Lightning, 10, 8),
    // Air
    CardTemplate::new("a1", "Wind Scouts", Element::Air, 1, 1),
    CardTemplate::new("a2", "Aerial Troops", Element::Air, 3, 2),
    CardTemplate::new("a3", "Tactical Whirlwind", Element::Air, 5, 3),
    CardTemplate::new("a4", "Coordinated Gale", Element::Air, 6, 4),
    CardTemplate::new("a5", "Avatar of the Skies", Element::Air, 10, 8),
    // Water
    CardTemplate::new("w1", "Stranded Ship", Element::Water, 1, 1),
    CardTemplate::new("w2", "Advancing Tide", Element::Water, 3, 2),
    CardTemplate::new("w3", "Violent Current", Element::Water, 5, 3),
    CardTemplate::new("w4", "Submerged Fleet", Element::Water, 6, 4),
    CardTemplate::new("w5", "Avatar of the Abyss", Element::Water, 10, 8),
];

/// Template of the coin token. Its element is rolled when it is created,
/// and its cost and power come from `MatchConfig`.
pub const COIN: CardTemplate = CardTemplate::new("coin", "Lucky Coin", Element::Fire, 2, 1);

/// Template of the fatigue token drawn from an exhausted deck.
pub const FATIGUE: CardTemplate = CardTemplate::new("fatigue", "Fatigue", Element::Fire, 2, 1);

/// Template of the skip placeholder.
pub const SKIP: CardTemplate = CardTemplate::new("skip", "Skip", Element::Fire, -1, 0);

/// Look up a pool template by catalog id.
#[must_use]
pub fn template(id: &str) -> Option<&'static CardTemplate> {
    CARD_POOL.iter().find(|t| t.id == id)
}

/// Pick a pool template uniformly at random.
pub fn random_template(rng: &mut GameRng) -> &'static CardTemplate {
    &CARD_POOL[rng.gen_range_usize(0..CARD_POOL.len())]
}

/// Pick an element uniformly at random.
pub fn random_element(rng: &mut GameRng) -> Element {
    Element::ALL[rng.gen_range_usize(0..Element::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_pool_ids_unique() {
        let ids: FxHashSet<_> = CARD_POOL.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), CARD_POOL.len());
    }

    #[test]
    fn test_pool_is_balanced_by_element() {
        for element in Element::ALL {
            assert_eq!(CARD_POOL.iter().filter(|t| t.element == element).count(), 5);
        }
    }

    #[test]
    fn test_pool_stats_are_playable() {
        for t in &CARD_POOL {
            assert!(t.power > 0, "{} has no power", t.id);
            assert!(t.cost >= 1, "{} is free", t.id);
        }
    }

    #[test]
    fn test_lookup() {
        let card = template("l4").unwrap();
        assert_eq!(card.power, 8);
        assert_eq!(card.cost, 6);
        assert!(template("coin").is_none());
        assert!(template("zz").is_none());
    }

    #[test]
    fn test_random_template_covers_pool() {
        let mut rng = GameRng::new(9);
        let seen: FxHashSet<_> = (0..2000).map(|_| random_template(&mut rng).id).collect();
        assert_eq!(seen.len(), CARD_POOL.len());
    }
}
