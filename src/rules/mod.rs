//! Game rules: round resolution and the victory condition.
//!
//! Both are pure functions over cards and competitor state. The phase
//! state machine in `game` calls into them; nothing here mutates a match.

pub mod resolver;
pub mod victory;

pub use resolver::{resolve, RoundOutcome, RoundWinner};
pub use victory::{check_victory, has_won};
