//! # rune-cycle
//!
//! Engine for a two-player elemental card duel: a human against an AI
//! opponent, one card each per round, first to a rune set wins.
//!
//! ## Rules in Brief
//!
//! 1. **Elements** form a cycle: Fire → Earth → Lightning → Air → Water →
//!    Fire. The advantaged card wins unless the other has at least double
//!    its power.
//!
//! 2. **Energy** pays for cards. Both sides recover energy every round;
//!    a coin is always available when a card isn't, and skipping is only
//!    allowed when even the coin is unaffordable.
//!
//! 3. **Runes** are earned by winning a round with a real card. Three of
//!    one element or one of each of the five wins the match.
//!
//! 4. **Arena**: one effect, rolled at match start, bends costs, power or
//!    energy for the whole match.
//!
//! ## Architecture
//!
//! - **Explicit phases**: `game::Match` is a state machine; every call is
//!   phase-gated and rejected calls leave the match unchanged.
//!
//! - **Seeded streams**: all randomness derives from one seed through named
//!   `GameRng` streams, so a seed replays the same match.
//!
//! - **Events, not callbacks**: the match queues `MatchEvent`s for audio and
//!   animation; `pacing` turns a resolved round into timed reveal cues.
//!
//! ## Modules
//!
//! - `core`: Sides, card uids, state, actions, RNG, configuration, errors
//! - `cards`: Elements, the catalog, card instances, deck building
//! - `arena`: The arena effects
//! - `rules`: Round resolution and the victory check
//! - `ai`: Opponent policies
//! - `events`: Match events and sinks
//! - `pacing`: Reveal timeline
//! - `game`: The match state machine
//!
//! ## Example
//!
//! ```
//! use rune_cycle::{MatchBuilder, Phase};
//!
//! let mut game = MatchBuilder::new().seed(1).start().unwrap();
//! game.select_deck(0).unwrap();
//!
//! while game.phase() != Phase::MatchOver && game.round() <= 50 {
//!     let action = game.legal_actions()[0];
//!     game.play_round(action).unwrap();
//! }
//! ```

pub mod ai;
pub mod arena;
pub mod cards;
pub mod core;
pub mod events;
pub mod game;
pub mod pacing;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, ActionRejected, CardUid, CompetitorState, ConfigError, GameRng, MatchConfig,
    MatchSnapshot, Phase, PlayerAction, Side, Sides, SpentCardPolicy,
};

pub use crate::cards::{Card, CardKind, CardTemplate, Element, CARD_POOL};

pub use crate::arena::ArenaEffect;

pub use crate::rules::{resolve, RoundOutcome, RoundWinner};

pub use crate::ai::{OpponentPolicy, RandomAffordable};

pub use crate::events::{EventSink, MatchEvent};

pub use crate::pacing::{RevealCue, RevealTimeline};

pub use crate::game::{Match, MatchBuilder, RoundLabel, RoundReport};
