//! Presentation events.
//!
//! The engine announces what happened (cards drawn, cards clashing, round
//! and match results); audio and animation collaborators listen through
//! an `EventSink`. Events carry no state the engine depends on.

mod event;
mod sink;

pub use event::MatchEvent;
pub use sink::{dispatch, EventLog, EventSink, MuteSwitch, NullSink};
