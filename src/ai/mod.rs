//! AI decision making.
//!
//! Policies are trait-based so a match can be driven by a scripted or
//! alternative opponent in tests:
//! - `OpponentPolicy`: Chooses the AI's commitment for a round
//! - `RandomAffordable`: The stock heuristic

mod policy;

pub use policy::{OpponentPolicy, RandomAffordable};
