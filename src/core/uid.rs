//! Card instance identification.
//!
//! Decks sample templates with replacement, so two cards in the same deck
//! can share a template. Every instance therefore gets its own `CardUid`,
//! handed out by a `UidAllocator` that lives as long as the match.
//!
//! ```
//! use rune_cycle::core::UidAllocator;
//!
//! let mut uids = UidAllocator::new();
//! let a = uids.next_uid();
//! let b = uids.next_uid();
//! assert_ne!(a, b);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identity of a card instance within a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardUid(pub u32);

impl CardUid {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardUid {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}

/// Monotonic `CardUid` source.
#[derive(Clone, Debug, Default)]
pub struct UidAllocator {
    next: u32,
}

impl UidAllocator {
    /// Create an allocator starting at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh uid.
    pub fn next_uid(&mut self) -> CardUid {
        let uid = CardUid(self.next);
        self.next += 1;
        uid
    }

    /// Number of uids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}
