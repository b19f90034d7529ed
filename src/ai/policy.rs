//! Opponent policies.

use crate::arena::ArenaEffect;
use crate::core::{CompetitorState, GameRng, MatchConfig, PlayerAction};

/// Policy for choosing the AI's commitment each round.
///
/// The returned action is executed through the same validated path as a
/// human action. Returning an illegal action is a contract violation.
pub trait OpponentPolicy: Send + Sync {
    /// Choose a commitment for `me`.
    fn choose_action(
        &self,
        me: &CompetitorState,
        arena: ArenaEffect,
        config: &MatchConfig,
        rng: &mut GameRng,
    ) -> PlayerAction;
}

/// Random affordable card, else coin, else skip.
#[derive(Clone, Debug, Default)]
pub struct RandomAffordable;

impl OpponentPolicy for RandomAffordable {
    fn choose_action(
        &self,
        me: &CompetitorState,
        arena: ArenaEffect,
        config: &MatchConfig,
        rng: &mut GameRng,
    ) -> PlayerAction {
        let affordable: Vec<_> = me
            .hand
            .iter()
            .filter(|c| arena.modified_cost(c) <= me.energy)
            .map(|c| c.uid)
            .collect();

        if let Some(&uid) = rng.choose(&affordable) {
            PlayerAction::PlayCard(uid)
        } else if me.energy >= config.coin_cost {
            PlayerAction::Coin
        } else {
            PlayerAction::Skip
        }
    }
}
