//! Round resolution.
//!
//! ## Outcome policy
//!
//! 1. Each card's power is adjusted by the arena.
//! 2. If one card's element beats the other's, that card wins, unless the
//!    other card's power is at least double (an upset).
//! 3. Otherwise the higher power wins and equal power is a tie.
//!
//! ```
//! use rune_cycle::arena::ArenaEffect;
//! use rune_cycle::cards::{catalog, Card};
//! use rune_cycle::core::CardUid;
//! use rune_cycle::rules::{resolve, RoundWinner};
//!
//! let fire = Card::from_template(CardUid(0), catalog::template("f3").unwrap());
//! let earth = Card::from_template(CardUid(1), catalog::template("e3").unwrap());
//!
//! let outcome = resolve(&fire, &earth, ArenaEffect::LightningStart);
//! assert_eq!(outcome.winner, RoundWinner::First);
//! ```

use serde::{Deserialize, Serialize};

use crate::arena::ArenaEffect;
use crate::cards::Card;
use crate::core::Side;

/// Which committed card took the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundWinner {
    First,
    Second,
    Tie,
}

impl RoundWinner {
    /// Map onto match sides. In a match the first card is always the human's.
    #[must_use]
    pub fn side(self) -> Option<Side> {
        match self {
            RoundWinner::First => Some(Side::Human),
            RoundWinner::Second => Some(Side::Ai),
            RoundWinner::Tie => None,
        }
    }
}

/// Result of resolving two committed cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub winner: RoundWinner,

    /// Arena-modified power of the first card.
    pub power_first: i32,

    /// Arena-modified power of the second card.
    pub power_second: i32,

    /// The winner overpowered an elemental disadvantage.
    pub upset: bool,
}

/// Resolve a round between two cards. Pure.
#[must_use]
pub fn resolve(first: &Card, second: &Card, arena: ArenaEffect) -> RoundOutcome {
    let power_first = arena.modified_power(first);
    let power_second = arena.modified_power(second);

    let first_adv = first.element.has_advantage_over(second.element);
    let second_adv = second.element.has_advantage_over(first.element);

    let (winner, upset) = if first_adv {
        if power_second >= power_first * 2 {
            (RoundWinner::Second, true)
        } else {
            (RoundWinner::First, false)
        }
    } else if second_adv {
        if power_first >= power_second * 2 {
            (RoundWinner::First, true)
        } else {
            (RoundWinner::Second, false)
        }
    } else {
        let winner = match power_first.cmp(&power_second) {
            std::cmp::Ordering::Greater => RoundWinner::First,
            std::cmp::Ordering::Less => RoundWinner::Second,
            std::cmp::Ordering::Equal => RoundWinner::Tie,
        };
        (winner, false)
    };

    RoundOutcome {
        winner,
        power_first,
        power_second,
        upset,
    }
}
