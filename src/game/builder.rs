//! Match setup.

use im::Vector;
use tracing::info;

use super::match_state::Match;
use crate::ai::{OpponentPolicy, RandomAffordable};
use crate::arena::ArenaEffect;
use crate::cards::{CardTemplate, DeckBuilder};
use crate::core::{CompetitorState, ConfigError, GameRng, MatchConfig, Phase, Side, Sides};
use crate::events::MatchEvent;

/// Builder for creating a [`Match`].
///
/// By default the arena is rolled from the seed, the human drafts one of
/// several random decks, and the AI plays a random deck with
/// [`RandomAffordable`].
///
/// ```
/// use rune_cycle::game::MatchBuilder;
/// use rune_cycle::core::Phase;
///
/// let mut game = MatchBuilder::new().seed(7).start().unwrap();
/// assert_eq!(game.phase(), Phase::DeckSelection);
/// assert_eq!(game.draft_options().len(), 3);
///
/// game.select_deck(0).unwrap();
/// assert_eq!(game.phase(), Phase::Planning);
/// ```
pub struct MatchBuilder {
    seed: u64,
    config: MatchConfig,
    arena: Option<ArenaEffect>,
    human_deck: Option<Vec<&'static CardTemplate>>,
    ai_deck: Option<Vec<&'static CardTemplate>>,
    policy: Box<dyn OpponentPolicy>,
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self {
            seed: 0,
            config: MatchConfig::default(),
            arena: None,
            human_deck: None,
            ai_deck: None,
            policy: Box::new(RandomAffordable),
        }
    }
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed for every random stream in the match.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Use this arena instead of rolling one.
    pub fn arena(mut self, arena: ArenaEffect) -> Self {
        self.arena = Some(arena);
        self
    }

    /// Give the human a fixed deck and skip deck selection.
    ///
    /// The last template is the top of the deck.
    pub fn human_deck(mut self, templates: Vec<&'static CardTemplate>) -> Self {
        self.human_deck = Some(templates);
        self
    }

    /// Give the AI a fixed deck. The last template is the top of the deck.
    pub fn ai_deck(mut self, templates: Vec<&'static CardTemplate>) -> Self {
        self.ai_deck = Some(templates);
        self
    }

    pub fn opponent_policy(mut self, policy: impl OpponentPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Validate the configuration and set up the match.
    pub fn start(self) -> Result<Match, ConfigError> {
        self.config.validate()?;

        let rng = GameRng::new(self.seed);
        let arena = match self.arena {
            Some(arena) => arena,
            None => ArenaEffect::random(&mut rng.for_context("arena")),
        };
        let mut decks = DeckBuilder::new(rng.for_context("deck"));
        let deck_size = self.config.deck_size as usize;

        let draft = if self.human_deck.is_none() {
            (0..self.config.draft_options)
                .map(|_| decks.build_deck(deck_size))
                .collect()
        } else {
            Vec::new()
        };
        let ai_deck = match &self.ai_deck {
            Some(templates) => decks.deck_of(templates),
            None => decks.build_deck(deck_size),
        };

        let energy = self.config.starting_energy + arena.starting_energy_bonus();
        let max_energy = self.config.max_energy;
        let competitors = Sides::new(
            CompetitorState::new(Side::Human, self.config.player_name.as_str(), Vec::new(), energy, max_energy),
            CompetitorState::new(Side::Ai, self.config.rival_name.as_str(), ai_deck, energy, max_energy),
        );

        info!(seed = self.seed, arena = %arena, energy, "match created");

        let mut game = Match {
            config: self.config,
            arena,
            phase: Phase::DeckSelection,
            round: 1,
            competitors,
            draft,
            committed: Sides::default(),
            last_outcome: None,
            winner: None,
            history: Vector::new(),
            events: vec![MatchEvent::MatchStarted { arena }],
            decks,
            ai_rng: rng.for_context("ai"),
            token_rng: rng.for_context("tokens"),
            policy: self.policy,
        };

        if let Some(templates) = &self.human_deck {
            let deck = game.decks.deck_of(templates);
            game.begin_combat(deck);
        }
        Ok(game)
    }
}
