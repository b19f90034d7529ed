//! Core engine types: sides, card uids, state, actions, RNG, configuration.
//!
//! These are the building blocks every other module shares.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod side;
pub mod state;
pub mod uid;

pub use action::{ActionRecord, PlayerAction};
pub use config::{MatchConfig, SpentCardPolicy};
pub use error::{ActionRejected, ConfigError};
pub use rng::GameRng;
pub use side::{Side, Sides};
pub use state::{CompetitorState, MatchSnapshot, Phase, Runes, RESERVED_HEALTH};
pub use uid::{CardUid, UidAllocator};
