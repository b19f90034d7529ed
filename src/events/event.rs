//! Match event types.
//!
//! Events are notifications, not state. A match queues them as things
//! happen; the presentation layer drains the queue and reacts (sounds,
//! animations). Round and match results are phrased from the human's
//! point of view, the way a player hears them.

use serde::{Deserialize, Serialize};

use crate::arena::ArenaEffect;
use crate::core::{CardUid, Side};

/// Something that happened in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MatchEvent {
    /// Arena rolled and draft decks offered.
    MatchStarted { arena: ArenaEffect },

    /// The human picked a deck and opening hands were dealt.
    DeckSelected { option: usize },

    /// A competitor committed its action for the round.
    CardCommitted { side: Side },

    /// A competitor drew a card. `fatigue` marks a synthetic draw.
    CardDrawn { side: Side, card: CardUid, fatigue: bool },

    /// Both committed cards revealed against each other.
    CardsClash,

    RoundWon,
    RoundLost,
    RoundTied,

    MatchWon,
    MatchLost,
}

impl MatchEvent {
    /// The event announcing a round result for `winner`.
    #[must_use]
    pub fn round_result(winner: Option<Side>) -> Self {
        match winner {
            Some(Side::Human) => MatchEvent::RoundWon,
            Some(Side::Ai) => MatchEvent::RoundLost,
            None => MatchEvent::RoundTied,
        }
    }

    /// The event announcing the end of the match.
    #[must_use]
    pub fn match_result(winner: Side) -> Self {
        match winner {
            Side::Human => MatchEvent::MatchWon,
            Side::Ai => MatchEvent::MatchLost,
        }
    }
}
