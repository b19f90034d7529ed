//! Card instances - cards as they exist in a match.
//!
//! A `Card` is a value: it lives in exactly one deck, hand, discard or
//! committed slot at a time and moves between them by ownership transfer.
//!
//! ## Tokens
//!
//! Coins, fatigue draws and skips are synthetic. They are created on
//! demand, played once and never stored in a deck or discard.

use serde::{Deserialize, Serialize};

use super::definition::{Ability, CardTemplate};
use super::element::Element;
use crate::core::CardUid;

/// Where a card came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// Built into a deck from the catalog.
    Deck,
    /// Coin token bought with energy.
    Coin,
    /// Fallback token drawn from an exhausted deck.
    Fatigue,
    /// Placeholder for committing nothing.
    Skip,
}

/// A card instance in a match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique identity for this instance.
    pub uid: CardUid,

    /// Catalog id of the template this instance was made from.
    pub template: String,

    pub name: String,

    pub element: Element,

    /// Base power. Negative marks a skip.
    pub power: i32,

    /// Base energy cost.
    pub cost: u32,

    pub ability: Option<Ability>,

    pub kind: CardKind,
}

impl Card {
    /// Instantiate a deck card from a template.
    #[must_use]
    pub fn from_template(uid: CardUid, template: &CardTemplate) -> Self {
        Self {
            uid,
            template: template.id.to_string(),
            name: template.name.to_string(),
            element: template.element,
            power: template.power,
            cost: template.cost,
            ability: template.ability,
            kind: CardKind::Deck,
        }
    }

    /// Instantiate a token with explicit element and stats.
    #[must_use]
    pub fn token(
        uid: CardUid,
        kind: CardKind,
        template: &CardTemplate,
        element: Element,
        power: i32,
        cost: u32,
    ) -> Self {
        debug_assert!(kind != CardKind::Deck, "tokens cannot be deck cards");
        Self {
            element,
            power,
            cost,
            kind,
            ..Self::from_template(uid, template)
        }
    }

    /// True for coins, fatigue draws and skips.
    #[must_use]
    pub fn is_token(&self) -> bool {
        self.kind != CardKind::Deck
    }

    /// True for the skip placeholder (sentinel negative power).
    #[must_use]
    pub fn is_skip(&self) -> bool {
        self.kind == CardKind::Skip || self.power < 0
    }

    /// Whether winning with this card credits a rune.
    #[must_use]
    pub fn earns_rune(&self) -> bool {
        self.power >= 0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{} {}/{}] ({})",
            self.name, self.element, self.power, self.cost, self.uid
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::catalog::{CARD_POOL, COIN, SKIP};

    #[test]
    fn test_from_template() {
        let card = Card::from_template(CardUid(4), &CARD_POOL[2]);

        assert_eq!(card.uid, CardUid(4));
        assert_eq!(card.template, "f3");
        assert_eq!(card.element, Element::Fire);
        assert_eq!(card.power, 5);
        assert_eq!(card.cost, 3);
        assert_eq!(card.kind, CardKind::Deck);
        assert!(!card.is_token());
        assert!(card.earns_rune());
    }

    #[test]
    fn test_coin_token() {
        let coin = Card::token(CardUid(9), CardKind::Coin, &COIN, Element::Water, 2, 1);

        assert!(coin.is_token());
        assert!(!coin.is_skip());
        assert_eq!(coin.element, Element::Water);
        assert_eq!(coin.template, "coin");
        assert!(coin.earns_rune());
    }

    #[test]
    fn test_skip_token() {
        let skip = Card::token(CardUid(1), CardKind::Skip, &SKIP, Element::Air, -1, 0);

        assert!(skip.is_token());
        assert!(skip.is_skip());
        assert!(!skip.earns_rune());
    }

    #[test]
    fn test_serialization() {
        let card = Card::from_template(CardUid(3), &CARD_POOL[10]);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
