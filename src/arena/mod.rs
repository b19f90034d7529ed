//! Arena effects: one global rule modifier per match.
//!
//! The set of effects is closed. Each identity maps to a typed rule that
//! the resolver, the affordability check and match setup query directly:
//!
//! | id | rule |
//! |---|---|
//! | `fire-tier` | base cost ≥ 5 → +1 power |
//! | `earth-tier` | base cost ≤ 2 → +1 power |
//! | `lightning-start` | +2 starting energy for both sides |
//! | `air-discount` | base cost ≤ 3 → cost −1, min 1 |
//! | `water-comeback` | round loser recovers +1 energy |

mod effect;

pub use effect::ArenaEffect;
