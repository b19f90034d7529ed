//! Deck building.
//!
//! ```
//! use rune_cycle::cards::DeckBuilder;
//! use rune_cycle::core::GameRng;
//!
//! let mut builder = DeckBuilder::new(GameRng::new(7));
//! let deck = builder.build_deck(15);
//! assert_eq!(deck.len(), 15);
//! ```

use rustc_hash::FxHashMap;
use tracing::debug;

use super::catalog;
use super::definition::CardTemplate;
use super::element::Element;
use super::instance::{Card, CardKind};
use crate::core::{GameRng, UidAllocator};

/// Samples decks from the catalog and mints card identities.
///
/// All uids of a match come from one builder, so draft decks, the AI deck
/// and every token are distinct.
#[derive(Clone, Debug)]
pub struct DeckBuilder {
    rng: GameRng,
    uids: UidAllocator,
}

impl DeckBuilder {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            rng,
            uids: UidAllocator::new(),
        }
    }

    /// Draw `size` templates uniformly with replacement, instantiate each
    /// with a fresh uid, and return them in uniformly random order.
    pub fn build_deck(&mut self, size: usize) -> Vec<Card> {
        let mut deck: Vec<Card> = (0..size)
            .map(|_| {
                let template = catalog::random_template(&mut self.rng);
                Card::from_template(self.uids.next_uid(), template)
            })
            .collect();
        self.rng.shuffle(&mut deck);
        debug!(size, "built deck");
        deck
    }

    /// Instantiate one deck card from a template.
    pub fn instantiate(&mut self, template: &CardTemplate) -> Card {
        Card::from_template(self.uids.next_uid(), template)
    }

    /// Instantiate a deck of the given templates, in the given order
    /// (last element is the top of the deck).
    pub fn deck_of(&mut self, templates: &[&CardTemplate]) -> Vec<Card> {
        templates.iter().map(|t| self.instantiate(t)).collect()
    }

    /// Mint a token card.
    pub fn token(
        &mut self,
        kind: CardKind,
        template: &CardTemplate,
        element: Element,
        power: i32,
        cost: u32,
    ) -> Card {
        Card::token(self.uids.next_uid(), kind, template, element, power, cost)
    }

    /// Shuffle an existing pile.
    pub fn shuffle(&mut self, cards: &mut [Card]) {
        self.rng.shuffle(cards);
    }
}

/// The most common element in a deck and how many cards carry it.
///
/// Ties go to the element earliest in cycle order. An empty deck reports
/// Fire with a count of 0.
#[must_use]
pub fn dominant_element(deck: &[Card]) -> (Element, usize) {
    let mut counts: FxHashMap<Element, usize> = FxHashMap::default();
    for card in deck {
        *counts.entry(card.element).or_default() += 1;
    }

    let mut best = (Element::Fire, 0);
    for element in Element::ALL {
        let count = counts.get(&element).copied().unwrap_or(0);
        if count > best.1 {
            best = (element, count);
        }
    }
    best
}
