//! Victory condition.
//!
//! A competitor wins by holding three runes of one element, or one rune of
//! every element.

use rustc_hash::FxHashMap;

use crate::cards::Element;
use crate::core::{CompetitorState, Side, Sides};

/// Runes of a single element needed to win.
pub const MATCHING_RUNES_TO_WIN: usize = 3;

/// Distinct elements needed to win.
pub const DISTINCT_RUNES_TO_WIN: usize = Element::ALL.len();

/// True if the rune collection satisfies the victory condition.
#[must_use]
pub fn has_won(runes: &[Element]) -> bool {
    let mut counts: FxHashMap<Element, usize> = FxHashMap::default();
    for &rune in runes {
        let count = counts.entry(rune).or_default();
        *count += 1;
        if *count >= MATCHING_RUNES_TO_WIN {
            return true;
        }
    }
    counts.len() >= DISTINCT_RUNES_TO_WIN
}

/// Check both competitors, human first. If both qualify the human wins.
#[must_use]
pub fn check_victory(competitors: &Sides<CompetitorState>) -> Option<Side> {
    competitors
        .iter()
        .find(|(_, state)| has_won(&state.runes))
        .map(|(side, _)| side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Element::*;

    #[test]
    fn test_three_of_a_kind() {
        assert!(has_won(&[Fire, Fire, Fire]));
        assert!(has_won(&[Water, Fire, Water, Earth, Water]));
    }

    #[test]
    fn test_all_five() {
        assert!(has_won(&[Fire, Earth, Lightning, Air, Water]));
        assert!(has_won(&[Water, Air, Air, Lightning, Earth, Fire]));
    }

    #[test]
    fn test_not_yet() {
        assert!(!has_won(&[]));
        assert!(!has_won(&[Fire, Fire, Earth, Water]));
        assert!(!has_won(&[Fire, Fire, Earth, Earth, Air, Air, Water, Water]));
        assert!(!has_won(&[Fire, Earth, Lightning, Air]));
    }

    fn competitor(side: Side, runes: &[Element]) -> CompetitorState {
        let mut state = CompetitorState::new(side, side.to_string(), Vec::new(), 6, 10);
        for &r in runes {
            state.add_rune(r);
        }
        state
    }

    #[test]
    fn test_check_victory() {
        let sides = Sides::new(competitor(Side::Human, &[Fire]), competitor(Side::Ai, &[Air, Air, Air]));
        assert_eq!(check_victory(&sides), Some(Side::Ai));

        let sides = Sides::new(competitor(Side::Human, &[Fire]), competitor(Side::Ai, &[Air]));
        assert_eq!(check_victory(&sides), None);
    }

    #[test]
    fn test_simultaneous_victory_goes_to_human() {
        let sides = Sides::new(
            competitor(Side::Human, &[Earth, Earth, Earth]),
            competitor(Side::Ai, &[Fire, Earth, Lightning, Air, Water]),
        );
        assert_eq!(check_victory(&sides), Some(Side::Human));
    }
}
