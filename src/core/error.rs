//! Error types.
//!
//! Rejected player actions never change match state; callers may treat
//! any `ActionRejected` as "the action had no effect".

use thiserror::Error;

use super::state::Phase;
use super::uid::CardUid;

/// Why an action was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionRejected {
    #[error("action not allowed during {0:?}")]
    WrongPhase(Phase),

    #[error("{0} is not in hand")]
    UnknownCard(CardUid),

    #[error("{card} costs {cost} but only {energy} energy is available")]
    Unaffordable { card: CardUid, cost: u32, energy: u32 },

    #[error("coin needs {cost} energy, {energy} available")]
    CoinUnavailable { cost: u32, energy: u32 },

    #[error("skip is only allowed when a coin is unaffordable ({energy} energy available)")]
    SkipUnavailable { energy: u32 },

    #[error("draft option {index} does not exist ({available} offered)")]
    NoSuchDraftOption { index: usize, available: usize },
}

/// Invalid match configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be at least {min}, got {value}")]
    TooSmall {
        field: &'static str,
        min: u32,
        value: u32,
    },

    #[error("starting hand of {hand} cards does not fit a deck of {deck}")]
    HandLargerThanDeck { hand: u32, deck: u32 },

    #[error("starting energy {starting} exceeds max energy {max}")]
    StartingEnergyAboveMax { starting: u32, max: u32 },

    #[error("skip power must be negative, got {0}")]
    NonNegativeSkipPower(i32),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
