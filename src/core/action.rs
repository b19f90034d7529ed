//! Player actions and the action history.
//!
//! During planning each competitor commits exactly one action:
//! - "Play card X" names a card in hand by its uid
//! - "Coin" spends a fixed amount of energy for a token card
//! - "Skip" commits nothing of value, allowed only when broke

use serde::{Deserialize, Serialize};

use super::side::Side;
use super::uid::CardUid;

/// A planning-phase commitment.
///
/// ```
/// use rune_cycle::core::{CardUid, PlayerAction};
///
/// let play = PlayerAction::PlayCard(CardUid(5));
/// assert_eq!(play.card(), Some(CardUid(5)));
/// assert_eq!(PlayerAction::Coin.card(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Play a card from hand.
    PlayCard(CardUid),
    /// Commit a coin token.
    Coin,
    /// Commit a skip placeholder.
    Skip,
}

impl PlayerAction {
    /// The hand card this action plays, if any.
    #[must_use]
    pub fn card(self) -> Option<CardUid> {
        match self {
            PlayerAction::PlayCard(uid) => Some(uid),
            PlayerAction::Coin | PlayerAction::Skip => None,
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Who committed.
    pub side: Side,

    /// What was committed.
    pub action: PlayerAction,

    /// Round number when the action was taken.
    pub round: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(side: Side, action: PlayerAction, round: u32) -> Self {
        Self { side, action, round }
    }
}
