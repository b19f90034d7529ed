//! Competitor identification and per-side data storage.
//!
//! ## Side
//!
//! A match always has exactly two competitors: the human and the AI.
//!
//! ## Sides
//!
//! Fixed two-slot storage indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two competitors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human-controlled competitor.
    Human,
    /// The AI-controlled competitor.
    Ai,
}

impl Side {
    /// Both sides, human first.
    ///
    /// This is also the evaluation order for simultaneous checks.
    pub const ALL: [Side; 2] = [Side::Human, Side::Ai];

    /// The other competitor.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Ai,
            Side::Ai => Side::Human,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Human => write!(f, "Human"),
            Side::Ai => write!(f, "AI"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use rune_cycle::core::{Side, Sides};
///
/// let mut energy: Sides<u32> = Sides::new(6, 6);
/// energy[Side::Ai] += 2;
///
/// assert_eq!(energy[Side::Human], 6);
/// assert_eq!(energy[Side::Ai], 8);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sides<T> {
    /// Human-side value.
    pub human: T,
    /// AI-side value.
    pub ai: T,
}

impl<T> Sides<T> {
    /// Create from explicit values.
    pub const fn new(human: T, ai: T) -> Self {
        Self { human, ai }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Human => &self.human,
            Side::Ai => &self.ai,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Human => &mut self.human,
            Side::Ai => &mut self.ai,
        }
    }

    /// Iterate over (Side, &T) pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Human, &self.human), (Side::Ai, &self.ai)].into_iter()
    }
}

impl<T> Index<Side> for Sides<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for Sides<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Side::Human.opponent(), Side::Ai);
        assert_eq!(Side::Ai.opponent(), Side::Human);
        assert_eq!(format!("{}", Side::Ai), "AI");
    }

    #[test]
    fn test_all_is_human_first() {
        assert_eq!(Side::ALL, [Side::Human, Side::Ai]);
    }

    #[test]
    fn test_sides_mutation() {
        let mut sides: Sides<i32> = Sides::default();
        sides[Side::Human] = 10;
        sides[Side::Ai] = 20;

        let pairs: Vec<_> = sides.iter().collect();
        assert_eq!(pairs, vec![(Side::Human, &10), (Side::Ai, &20)]);
    }

    #[test]
    fn test_sides_serialization() {
        let sides = Sides::new(Some(1), None);
        let json = serde_json::to_string(&sides).unwrap();
        let deserialized: Sides<Option<i32>> = serde_json::from_str(&json).unwrap();
        assert_eq!(sides, deserialized);
    }
}
