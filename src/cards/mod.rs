//! Card system: elements, templates, the catalog, instances and decks.
//!
//! ## Key Types
//!
//! - `Element`: The five elements and the advantage cycle
//! - `CardTemplate`: Static catalog entry
//! - `Card`: A card instance with a unique uid
//! - `DeckBuilder`: Random deck sampling and uid minting

pub mod catalog;
pub mod deck;
pub mod definition;
pub mod element;
pub mod instance;

pub use catalog::{CARD_POOL, COIN, FATIGUE, SKIP};
pub use deck::{dominant_element, DeckBuilder};
pub use definition::{Ability, CardTemplate};
pub use element::Element;
pub use instance::{Card, CardKind};
