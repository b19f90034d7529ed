//! Reveal pacing for presentation.
//!
//! A round is resolved and applied in one synchronous step. How quickly
//! the result is shown is a presentation choice; `RevealTimeline` turns
//! elapsed time into discrete cues and can be abandoned at any point
//! (for example when the player leaves to the menu mid-reveal).

mod timeline;

pub use timeline::{RevealCue, RevealOffsets, RevealTimeline};
