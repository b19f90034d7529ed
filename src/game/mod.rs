//! The match: phase state machine tying the rules together.
//!
//! ```text
//! DeckSelection → Planning → Resolution → Cleanup → Draw → Planning → …
//!                                            ↓
//!                                        MatchOver
//! ```
//!
//! - Deck selection and planning wait for the human (`select_deck`,
//!   `commit`).
//! - Resolution, cleanup and draw run through `advance`, one phase per
//!   call, so a presentation layer can pace them.
//! - `play_round` runs a whole round synchronously.
//!
//! The AI commits inside `commit`, right after the human, through the
//! same validation path.

mod builder;
mod match_state;

pub use builder::MatchBuilder;
pub use match_state::{Match, RoundLabel, RoundReport};
