//! Match state: phases, competitor state and the renderer snapshot.
//!
//! ## CompetitorState
//!
//! Everything one side owns:
//! - Energy (bounded by `max_energy`)
//! - Deck (top = end of vec), hand, discard
//! - Runes collected from round wins (append-only)
//!
//! ## MatchSnapshot
//!
//! A read-only copy of the whole match for presentation.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::ActionRecord;
use super::side::{Side, Sides};
use super::uid::CardUid;
use crate::arena::ArenaEffect;
use crate::cards::{Card, Element};
use crate::rules::RoundOutcome;

/// Starting value of the reserved health field.
pub const RESERVED_HEALTH: u32 = 100;

/// Match progression phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Arena rolled, draft decks offered, waiting for the human to pick.
    DeckSelection,
    /// Each side draws one card.
    Draw,
    /// Waiting for commitments.
    Planning,
    /// Both committed; the round is resolved and applied.
    Resolution,
    /// Victory check and slot clearing.
    Cleanup,
    /// Terminal.
    MatchOver,
}

/// Runes are few per match; eight fit inline.
pub type Runes = SmallVec<[Element; 8]>;

/// One competitor's state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorState {
    pub side: Side,

    pub name: String,

    /// Reserved. Not consulted by any rule.
    pub health: u32,

    pub energy: u32,

    pub max_energy: u32,

    /// Draw pile, top = end of vec.
    pub deck: Vec<Card>,

    pub hand: Vec<Card>,

    pub discard: Vec<Card>,

    /// Elements credited for round wins, in order.
    pub runes: Runes,
}

impl CompetitorState {
    /// Create a competitor with a fresh deck and empty hand.
    ///
    /// Energy is clamped to `max_energy`.
    #[must_use]
    pub fn new(side: Side, name: impl Into<String>, deck: Vec<Card>, energy: u32, max_energy: u32) -> Self {
        Self {
            side,
            name: name.into(),
            health: RESERVED_HEALTH,
            energy: energy.min(max_energy),
            max_energy,
            deck,
            hand: Vec::new(),
            discard: Vec::new(),
            runes: Runes::new(),
        }
    }

    // === Cards ===

    /// Move the top card of the deck into hand.
    ///
    /// Returns the drawn card's uid, or None if the deck is empty.
    pub fn draw(&mut self) -> Option<CardUid> {
        let card = self.deck.pop()?;
        let uid = card.uid;
        self.hand.push(card);
        Some(uid)
    }

    /// Draw up to `count` cards, stopping early if the deck runs out.
    ///
    /// Returns how many were drawn.
    pub fn deal(&mut self, count: usize) -> usize {
        (0..count).take_while(|_| self.draw().is_some()).count()
    }

    /// Find a card in hand.
    #[must_use]
    pub fn hand_card(&self, uid: CardUid) -> Option<&Card> {
        self.hand.iter().find(|c| c.uid == uid)
    }

    /// Take a card out of hand.
    pub fn remove_from_hand(&mut self, uid: CardUid) -> Option<Card> {
        let pos = self.hand.iter().position(|c| c.uid == uid)?;
        Some(self.hand.remove(pos))
    }

    /// Slide a card under the deck.
    pub fn recycle(&mut self, card: Card) {
        self.deck.insert(0, card);
    }

    /// Move the discard pile into the (empty) deck. The caller shuffles.
    ///
    /// Returns how many cards moved.
    pub fn refill_from_discard(&mut self) -> usize {
        let moved = self.discard.len();
        self.deck.append(&mut self.discard);
        moved
    }

    /// Cards held across deck, hand and discard.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }

    // === Energy ===

    /// Add energy, capped at `max_energy`.
    pub fn recover(&mut self, amount: u32) {
        self.energy = self.energy.saturating_add(amount).min(self.max_energy);
    }

    /// Spend energy. Callers check affordability first.
    pub fn spend(&mut self, amount: u32) {
        debug_assert!(amount <= self.energy, "spending {amount} with {} energy", self.energy);
        self.energy = self.energy.saturating_sub(amount);
    }

    // === Runes ===

    pub fn add_rune(&mut self, element: Element) {
        self.runes.push(element);
    }
}

/// Read-only view of a match for the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchSnapshot {
    pub phase: Phase,
    pub round: u32,
    pub arena: ArenaEffect,
    /// During deck selection the human deck is still empty.
    pub competitors: Sides<CompetitorState>,
    pub committed: Sides<Option<Card>>,
    pub last_outcome: Option<RoundOutcome>,
    pub winner: Option<Side>,
    pub history: Vector<ActionRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::catalog::template;
    use crate::cards::DeckBuilder;
    use crate::core::GameRng;

    fn deck(n: usize) -> Vec<Card> {
        DeckBuilder::new(GameRng::new(42)).build_deck(n)
    }

    #[test]
    fn test_new_clamps_energy() {
        let state = CompetitorState::new(Side::Human, "Hero", deck(3), 12, 10);
        assert_eq!(state.energy, 10);
        assert_eq!(state.health, RESERVED_HEALTH);
        assert!(state.hand.is_empty());
        assert!(state.runes.is_empty());
    }

    #[test]
    fn test_draw_from_top() {
        let cards = deck(3);
        let top = cards[2].uid;
        let mut state = CompetitorState::new(Side::Human, "Hero", cards, 6, 10);

        assert_eq!(state.draw(), Some(top));
        assert_eq!(state.hand.len(), 1);
        assert_eq!(state.deck.len(), 2);
    }

    #[test]
    fn test_deal_stops_early() {
        let mut state = CompetitorState::new(Side::Ai, "Rival", deck(3), 6, 10);
        assert_eq!(state.deal(5), 3);
        assert_eq!(state.hand.len(), 3);
        assert!(state.deck.is_empty());
        assert_eq!(state.draw(), None);
    }

    #[test]
    fn test_remove_and_recycle() {
        let mut state = CompetitorState::new(Side::Human, "Hero", deck(6), 6, 10);
        state.deal(2);
        let uid = state.hand[0].uid;

        let card = state.remove_from_hand(uid).unwrap();
        assert!(state.hand_card(uid).is_none());
        assert!(state.remove_from_hand(uid).is_none());

        state.recycle(card);
        assert_eq!(state.deck[0].uid, uid);
        assert_eq!(state.card_count(), 6);
    }

    #[test]
    fn test_refill_from_discard() {
        let mut state = CompetitorState::new(Side::Human, "Hero", Vec::new(), 6, 10);
        let mut builder = DeckBuilder::new(GameRng::new(1));
        state.discard.push(builder.instantiate(template("f1").unwrap()));
        state.discard.push(builder.instantiate(template("f2").unwrap()));

        assert_eq!(state.refill_from_discard(), 2);
        assert_eq!(state.deck.len(), 2);
        assert!(state.discard.is_empty());
    }

    #[test]
    fn test_energy_bounds() {
        let mut state = CompetitorState::new(Side::Human, "Hero", Vec::new(), 9, 10);
        state.recover(2);
        assert_eq!(state.energy, 10);
        state.spend(10);
        assert_eq!(state.energy, 0);
        state.recover(u32::MAX);
        assert_eq!(state.energy, 10);
    }

    #[test]
    fn test_runes() {
        let mut state = CompetitorState::new(Side::Human, "Hero", Vec::new(), 6, 10);
        state.add_rune(Element::Fire);
        state.add_rune(Element::Water);
        state.add_rune(Element::Fire);

        assert_eq!(state.runes.as_slice(), &[Element::Fire, Element::Water, Element::Fire]);
    }

    #[test]
    fn test_serialization() {
        let mut state = CompetitorState::new(Side::Ai, "Rival", deck(4), 6, 10);
        state.deal(2);
        state.add_rune(Element::Earth);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CompetitorState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
