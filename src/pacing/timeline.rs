//! Cancellable reveal schedule.

use serde::{Deserialize, Serialize};

/// A visual stage of revealing a resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevealCue {
    /// Both cards flip face up.
    Reveal,
    /// Cards collide.
    Clash,
    /// The winner is shown.
    Impact,
    /// Result text and updated counters are shown.
    Settle,
    /// The table clears for the next round.
    Cleanup,
}

/// Offsets of each cue, in milliseconds after the round resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealOffsets {
    pub reveal: u64,
    pub clash: u64,
    pub impact: u64,
    pub settle: u64,
    pub cleanup: u64,
}

impl Default for RevealOffsets {
    fn default() -> Self {
        Self {
            reveal: 0,
            clash: 800,
            impact: 1600,
            settle: 3500,
            cleanup: 5000,
        }
    }
}

/// Staged exposure of one round's outcome.
///
/// The outcome is already computed and applied when a timeline starts;
/// the timeline only decides when each stage becomes visible. Each cue
/// fires at most once, and a cancelled timeline fires nothing more.
///
/// ```
/// use rune_cycle::pacing::{RevealCue, RevealTimeline};
///
/// let mut timeline = RevealTimeline::standard();
/// assert_eq!(timeline.poll(0), vec![RevealCue::Reveal]);
/// assert_eq!(timeline.poll(2000), vec![RevealCue::Clash, RevealCue::Impact]);
/// timeline.cancel();
/// assert!(timeline.poll(10_000).is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct RevealTimeline {
    cues: [(u64, RevealCue); 5],
    next: usize,
    cancelled: bool,
}

impl RevealTimeline {
    /// Timeline with the default offsets.
    #[must_use]
    pub fn standard() -> Self {
        Self::with_offsets(RevealOffsets::default())
    }

    /// Timeline with custom offsets. Cues fire in stage order regardless
    /// of the offsets given.
    #[must_use]
    pub fn with_offsets(offsets: RevealOffsets) -> Self {
        Self {
            cues: [
                (offsets.reveal, RevealCue::Reveal),
                (offsets.clash, RevealCue::Clash),
                (offsets.impact, RevealCue::Impact),
                (offsets.settle, RevealCue::Settle),
                (offsets.cleanup, RevealCue::Cleanup),
            ],
            next: 0,
            cancelled: false,
        }
    }

    /// Cues due at `elapsed_ms` that have not fired yet.
    pub fn poll(&mut self, elapsed_ms: u64) -> Vec<RevealCue> {
        let mut due = Vec::new();
        if self.cancelled {
            return due;
        }
        while let Some(&(at, cue)) = self.cues.get(self.next) {
            if at > elapsed_ms {
                break;
            }
            due.push(cue);
            self.next += 1;
        }
        due
    }

    /// Stop the timeline. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// True once every cue has fired or the timeline was cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cancelled || self.next >= self.cues.len()
    }
}
