//! Event sinks: the seam to the audio and presentation collaborators.

use tracing::trace;

use super::event::MatchEvent;

/// Receives match events.
pub trait EventSink {
    fn notify(&mut self, event: &MatchEvent);
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&mut self, _event: &MatchEvent) {}
}

/// Records events in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<MatchEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for EventLog {
    fn notify(&mut self, event: &MatchEvent) {
        self.events.push(event.clone());
    }
}

/// Mute switch in front of another sink.
///
/// The mute flag belongs to whoever owns the switch. The match never sees
/// it: a muted sink simply stops forwarding.
///
/// ```
/// use rune_cycle::events::{EventLog, EventSink, MatchEvent, MuteSwitch};
///
/// let mut audio = MuteSwitch::new(EventLog::new());
/// audio.notify(&MatchEvent::CardsClash);
/// assert!(audio.toggle()); // now muted
/// audio.notify(&MatchEvent::RoundWon);
///
/// assert_eq!(audio.inner().events(), &[MatchEvent::CardsClash]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MuteSwitch<S> {
    inner: S,
    muted: bool,
}

impl<S: EventSink> MuteSwitch<S> {
    pub fn new(inner: S) -> Self {
        Self { inner, muted: false }
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Flip the mute flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: EventSink> EventSink for MuteSwitch<S> {
    fn notify(&mut self, event: &MatchEvent) {
        if self.muted {
            trace!(?event, "muted");
            return;
        }
        self.inner.notify(event);
    }
}

/// Forward a batch of events to a sink, in order.
pub fn dispatch<S: EventSink + ?Sized>(events: &[MatchEvent], sink: &mut S) {
    for event in events {
        sink.notify(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        dispatch(&[MatchEvent::CardsClash, MatchEvent::RoundTied], &mut log);

        assert_eq!(log.events(), &[MatchEvent::CardsClash, MatchEvent::RoundTied]);
        log.clear();
        assert!(log.events().is_empty());
    }

    #[test]
    fn test_mute_switch() {
        let mut audio = MuteSwitch::new(EventLog::new());
        assert!(!audio.is_muted());

        audio.set_muted(true);
        audio.notify(&MatchEvent::MatchWon);
        assert!(audio.inner().events().is_empty());

        assert!(!audio.toggle());
        audio.notify(&MatchEvent::MatchLost);
        assert_eq!(audio.into_inner().events(), &[MatchEvent::MatchLost]);
    }

    #[test]
    fn test_dispatch_through_trait_object() {
        let mut log = EventLog::new();
        {
            let sink: &mut dyn EventSink = &mut log;
            dispatch(&[MatchEvent::RoundWon], sink);
        }
        let mut null = NullSink;
        dispatch(&[MatchEvent::RoundWon], &mut null);
        assert_eq!(log.events(), &[MatchEvent::RoundWon]);
    }
}
