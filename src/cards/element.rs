//! Elements and the advantage cycle.
//!
//! Fire → Earth → Lightning → Air → Water → Fire: each element beats the
//! next one in the cycle. Advantage is one-directional, so two cards can
//! never both hold it.

use serde::{Deserialize, Serialize};

/// One of the five elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Element {
    Fire,
    Earth,
    Lightning,
    Air,
    Water,
}

impl Element {
    /// All elements in cycle order.
    pub const ALL: [Element; 5] = [
        Element::Fire,
        Element::Earth,
        Element::Lightning,
        Element::Air,
        Element::Water,
    ];

    /// The element this one defeats.
    #[must_use]
    pub const fn beats(self) -> Element {
        match self {
            Element::Fire => Element::Earth,
            Element::Earth => Element::Lightning,
            Element::Lightning => Element::Air,
            Element::Air => Element::Water,
            Element::Water => Element::Fire,
        }
    }

    /// True if `self` holds elemental advantage over `other`.
    #[must_use]
    pub fn has_advantage_over(self, other: Element) -> bool {
        self.beats() == other
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Lightning => "Lightning",
            Element::Air => "Air",
            Element::Water => "Water",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle() {
        use Element::*;
        assert_eq!(Fire.beats(), Earth);
        assert_eq!(Earth.beats(), Lightning);
        assert_eq!(Lightning.beats(), Air);
        assert_eq!(Air.beats(), Water);
        assert_eq!(Water.beats(), Fire);
    }

    #[test]
    fn test_all_25_pairs() {
        for a in Element::ALL {
            for b in Element::ALL {
                let forward = a.has_advantage_over(b);
                let backward = b.has_advantage_over(a);
                // Never mutual
                assert!(!(forward && backward), "{a} and {b} both advantaged");
                if a == b {
                    assert!(!forward);
                }
            }
            // Each element beats exactly one other
            let wins = Element::ALL.iter().filter(|&&b| a.has_advantage_over(b)).count();
            assert_eq!(wins, 1);
        }
    }

    #[test]
    fn test_non_adjacent_is_neutral() {
        assert!(!Element::Fire.has_advantage_over(Element::Lightning));
        assert!(!Element::Lightning.has_advantage_over(Element::Fire));
        assert!(!Element::Earth.has_advantage_over(Element::Water));
    }

    #[test]
    fn test_serde_uppercase() {
        assert_eq!(serde_json::to_string(&Element::Lightning).unwrap(), "\"LIGHTNING\"");
        let parsed: Element = serde_json::from_str("\"WATER\"").unwrap();
        assert_eq!(parsed, Element::Water);
    }
}
