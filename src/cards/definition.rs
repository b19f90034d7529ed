//! Card templates - static card data.
//!
//! `CardTemplate` holds the immutable stats of a catalog entry. The same
//! template can appear many times in a deck; each appearance becomes a
//! separate `Card` instance with its own uid.

use serde::{Deserialize, Serialize};

use super::element::Element;

/// Cosmetic ability tag. Carries no rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Ability {
    /// Swirling vortex flourish.
    Draw,
    /// Crackling energy flourish.
    Charge,
}

/// Static card definition.
///
/// ```
/// use rune_cycle::cards::{CardTemplate, Element};
///
/// const SPARK: CardTemplate = CardTemplate::new("l1", "Unstable Spark", Element::Lightning, 1, 1);
/// assert_eq!(SPARK.power, 1);
/// assert!(SPARK.ability.is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CardTemplate {
    /// Catalog identifier.
    pub id: &'static str,

    /// Display name.
    pub name: &'static str,

    pub element: Element,

    /// Base power. Negative only for skip placeholders.
    pub power: i32,

    /// Base energy cost.
    pub cost: u32,

    pub ability: Option<Ability>,
}

impl CardTemplate {
    #[must_use]
    pub const fn new(
        id: &'static str,
        name: &'static str,
        element: Element,
        power: i32,
        cost: u32,
    ) -> Self {
        Self {
            id,
            name,
            element,
            power,
            cost,
            ability: None,
        }
    }

    /// Attach an ability tag (builder pattern).
    #[must_use]
    pub const fn with_ability(mut self, ability: Ability) -> Self {
        self.ability = Some(ability);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_builder() {
        let card = CardTemplate::new("x1", "Test", Element::Air, 3, 2).with_ability(Ability::Charge);

        assert_eq!(card.name, "Test");
        assert_eq!(card.element, Element::Air);
        assert_eq!(card.power, 3);
        assert_eq!(card.cost, 2);
        assert_eq!(card.ability, Some(Ability::Charge));
    }
}
