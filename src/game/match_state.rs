//! The match state machine.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::ai::OpponentPolicy;
use crate::arena::ArenaEffect;
use crate::cards::catalog::{self, COIN, FATIGUE, SKIP};
use crate::cards::{dominant_element, Card, CardKind, DeckBuilder, Element};
use crate::core::{
    ActionRecord, ActionRejected, CardUid, CompetitorState, GameRng, MatchConfig, MatchSnapshot, Phase,
    PlayerAction, Side, Sides, SpentCardPolicy,
};
use crate::events::MatchEvent;
use crate::rules::{check_victory, resolve, RoundOutcome};

/// Round result as announced to the human.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundLabel {
    Victory,
    Defeat,
    Draw,
}

impl RoundLabel {
    #[must_use]
    pub fn for_winner(winner: Option<Side>) -> Self {
        match winner {
            Some(Side::Human) => RoundLabel::Victory,
            Some(Side::Ai) => RoundLabel::Defeat,
            None => RoundLabel::Draw,
        }
    }
}

/// Everything that happened in one round played through `Match::play_round`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    pub round: u32,
    pub committed: Sides<Card>,
    pub outcome: RoundOutcome,
    pub label: RoundLabel,
    /// Set if this round ended the match.
    pub match_winner: Option<Side>,
}

/// One match between the human and the AI.
///
/// Created by [`MatchBuilder`](super::MatchBuilder). Every mutation goes
/// through a phase-gated method; rejected calls leave the match untouched.
pub struct Match {
    pub(super) config: MatchConfig,
    pub(super) arena: ArenaEffect,
    pub(super) phase: Phase,
    pub(super) round: u32,
    pub(super) competitors: Sides<CompetitorState>,
    pub(super) draft: Vec<Vec<Card>>,
    pub(super) committed: Sides<Option<Card>>,
    pub(super) last_outcome: Option<RoundOutcome>,
    pub(super) winner: Option<Side>,
    pub(super) history: Vector<ActionRecord>,
    pub(super) events: Vec<MatchEvent>,
    pub(super) decks: DeckBuilder,
    pub(super) ai_rng: GameRng,
    pub(super) token_rng: GameRng,
    pub(super) policy: Box<dyn OpponentPolicy>,
}

impl Match {
    // === Read access ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn arena(&self) -> ArenaEffect {
        self.arena
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current round number (starts at 1).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn competitor(&self, side: Side) -> &CompetitorState {
        &self.competitors[side]
    }

    #[must_use]
    pub fn committed(&self) -> &Sides<Option<Card>> {
        &self.committed
    }

    #[must_use]
    pub fn last_outcome(&self) -> Option<RoundOutcome> {
        self.last_outcome
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Decks offered during deck selection.
    #[must_use]
    pub fn draft_options(&self) -> &[Vec<Card>] {
        &self.draft
    }

    /// Dominant element and its count for each offered deck.
    #[must_use]
    pub fn draft_summary(&self) -> Vec<(Element, usize)> {
        self.draft.iter().map(|deck| dominant_element(deck)).collect()
    }

    /// Read-only copy for the renderer.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            phase: self.phase,
            round: self.round,
            arena: self.arena,
            competitors: self.competitors.clone(),
            committed: self.committed.clone(),
            last_outcome: self.last_outcome,
            winner: self.winner,
            history: self.history.clone(),
        }
    }

    /// Take all events queued since the last call.
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    /// Energy a card costs to commit in this match.
    #[must_use]
    pub fn modified_cost(&self, card: &Card) -> u32 {
        self.arena.modified_cost(card)
    }

    /// Power a card resolves with in this match.
    #[must_use]
    pub fn modified_power(&self, card: &Card) -> i32 {
        self.arena.modified_power(card)
    }

    /// Actions the human may commit right now.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<PlayerAction> {
        if self.phase != Phase::Planning {
            return Vec::new();
        }
        let me = &self.competitors[Side::Human];
        let mut actions: Vec<_> = me
            .hand
            .iter()
            .filter(|c| self.arena.modified_cost(c) <= me.energy)
            .map(|c| PlayerAction::PlayCard(c.uid))
            .collect();
        if me.energy >= self.config.coin_cost {
            actions.push(PlayerAction::Coin);
        } else {
            actions.push(PlayerAction::Skip);
        }
        actions
    }

    // === Deck selection ===

    /// Pick one of the offered decks and deal opening hands.
    pub fn select_deck(&mut self, option: usize) -> Result<(), ActionRejected> {
        if self.phase != Phase::DeckSelection {
            warn!(phase = ?self.phase, "deck selection outside of DeckSelection");
            return Err(ActionRejected::WrongPhase(self.phase));
        }
        if option >= self.draft.len() {
            return Err(ActionRejected::NoSuchDraftOption {
                index: option,
                available: self.draft.len(),
            });
        }
        let deck = self.draft.swap_remove(option);
        self.draft.clear();
        self.begin_combat(deck);
        self.events.push(MatchEvent::DeckSelected { option });
        Ok(())
    }

    /// Install the human deck, deal both hands and open round 1.
    ///
    /// The opening hand stands in for the first draw, so round 1 starts in
    /// planning.
    pub(super) fn begin_combat(&mut self, human_deck: Vec<Card>) {
        self.competitors[Side::Human].deck = human_deck;
        let hand_size = self.config.starting_hand_size as usize;
        for side in Side::ALL {
            let dealt = self.competitors[side].deal(hand_size);
            debug!(%side, dealt, "dealt opening hand");
        }
        self.round = 1;
        self.phase = Phase::Planning;
        info!(arena = %self.arena, "combat started");
    }

    // === Planning ===

    /// Commit the human action, then the AI's, and move to resolution.
    pub fn commit(&mut self, action: PlayerAction) -> Result<(), ActionRejected> {
        if self.phase != Phase::Planning {
            warn!(phase = ?self.phase, ?action, "commit outside of Planning");
            return Err(ActionRejected::WrongPhase(self.phase));
        }
        let card = self.take_commitment(Side::Human, action).map_err(|err| {
            warn!(%err, ?action, "commit rejected");
            err
        })?;
        self.place(Side::Human, action, card);

        let ai_action = self.policy.choose_action(
            &self.competitors[Side::Ai],
            self.arena,
            &self.config,
            &mut self.ai_rng,
        );
        let ai_card = match self.take_commitment(Side::Ai, ai_action) {
            Ok(card) => card,
            Err(err) => panic!("opponent policy chose an illegal action {ai_action:?}: {err}"),
        };
        self.place(Side::Ai, ai_action, ai_card);

        self.phase = Phase::Resolution;
        Ok(())
    }

    /// Validate an action and, only if legal, pay for it and produce the card.
    fn take_commitment(&mut self, side: Side, action: PlayerAction) -> Result<Card, ActionRejected> {
        let arena = self.arena;
        let coin_cost = self.config.coin_cost;
        let me = &mut self.competitors[side];

        match action {
            PlayerAction::PlayCard(uid) => {
                let card = me.hand_card(uid).ok_or(ActionRejected::UnknownCard(uid))?;
                let cost = arena.modified_cost(card);
                if cost > me.energy {
                    return Err(ActionRejected::Unaffordable {
                        card: uid,
                        cost,
                        energy: me.energy,
                    });
                }
                me.spend(cost);
                me.remove_from_hand(uid).ok_or(ActionRejected::UnknownCard(uid))
            }
            PlayerAction::Coin => {
                if me.energy < coin_cost {
                    return Err(ActionRejected::CoinUnavailable {
                        cost: coin_cost,
                        energy: me.energy,
                    });
                }
                me.spend(coin_cost);
                let element = catalog::random_element(&mut self.token_rng);
                Ok(self
                    .decks
                    .token(CardKind::Coin, &COIN, element, self.config.coin_power, coin_cost))
            }
            PlayerAction::Skip => {
                if me.energy >= coin_cost {
                    return Err(ActionRejected::SkipUnavailable { energy: me.energy });
                }
                let element = catalog::random_element(&mut self.token_rng);
                Ok(self
                    .decks
                    .token(CardKind::Skip, &SKIP, element, self.config.skip_power, 0))
            }
        }
    }

    fn place(&mut self, side: Side, action: PlayerAction, card: Card) {
        debug_assert!(self.committed[side].is_none(), "{side} already committed");
        debug!(%side, %card, energy = self.competitors[side].energy, "committed");
        self.history.push_back(ActionRecord::new(side, action, self.round));
        self.committed[side] = Some(card);
        self.events.push(MatchEvent::CardCommitted { side });
    }

    // === Progression ===

    /// Run the current automatic phase and return the phase entered.
    ///
    /// Resolution, Cleanup and Draw advance on their own; DeckSelection and
    /// Planning wait for input and MatchOver is terminal.
    pub fn advance(&mut self) -> Result<Phase, ActionRejected> {
        match self.phase {
            Phase::Resolution => self.resolve_round(),
            Phase::Cleanup => self.cleanup(),
            Phase::Draw => self.draw_phase(),
            other => return Err(ActionRejected::WrongPhase(other)),
        }
        Ok(self.phase)
    }

    /// Commit `action` and play the round through to the next planning
    /// phase or the end of the match.
    pub fn play_round(&mut self, action: PlayerAction) -> Result<RoundReport, ActionRejected> {
        let round = self.round;
        self.commit(action)?;
        let committed = self.committed_cards();

        while !matches!(self.phase, Phase::Planning | Phase::MatchOver) {
            self.advance()?;
        }

        let outcome = self
            .last_outcome
            .unwrap_or_else(|| unreachable!("a resolved round always records its outcome"));
        Ok(RoundReport {
            round,
            committed,
            outcome,
            label: RoundLabel::for_winner(outcome.winner.side()),
            match_winner: self.winner,
        })
    }

    fn committed_cards(&self) -> Sides<Card> {
        match (&self.committed.human, &self.committed.ai) {
            (Some(human), Some(ai)) => Sides::new(human.clone(), ai.clone()),
            _ => panic!("both sides must be committed"),
        }
    }

    /// Resolve the committed cards and apply energy and runes.
    fn resolve_round(&mut self) {
        let cards = self.committed_cards();
        let outcome = resolve(&cards.human, &cards.ai, self.arena);
        let recovery = self.config.energy_recovery;

        match outcome.winner.side() {
            Some(winner) => {
                let card = &cards[winner];
                let victor = &mut self.competitors[winner];
                victor.recover(recovery);
                if card.earns_rune() {
                    victor.add_rune(card.element);
                }
                self.competitors[winner.opponent()].recover(recovery + self.arena.loser_recovery_bonus());
            }
            None => {
                for side in Side::ALL {
                    self.competitors[side].recover(recovery);
                }
            }
        }

        debug!(
            round = self.round,
            winner = ?outcome.winner,
            power_human = outcome.power_first,
            power_ai = outcome.power_second,
            upset = outcome.upset,
            "round resolved"
        );
        self.last_outcome = Some(outcome);
        self.events.push(MatchEvent::CardsClash);
        self.events.push(MatchEvent::round_result(outcome.winner.side()));
        self.phase = Phase::Cleanup;
    }

    /// Check for a winner, else return spent cards and move to draw.
    fn cleanup(&mut self) {
        if let Some(winner) = check_victory(&self.competitors) {
            info!(%winner, round = self.round, runes = ?self.competitors[winner].runes, "match over");
            self.winner = Some(winner);
            self.phase = Phase::MatchOver;
            self.events.push(MatchEvent::match_result(winner));
            return;
        }

        for side in Side::ALL {
            if let Some(card) = self.committed[side].take() {
                self.dispose(side, card);
            }
        }
        self.phase = Phase::Draw;
    }

    fn dispose(&mut self, side: Side, card: Card) {
        if card.is_token() {
            return;
        }
        let owner = &mut self.competitors[side];
        match self.config.spent_cards {
            SpentCardPolicy::Recycle => owner.recycle(card),
            SpentCardPolicy::Discard => owner.discard.push(card),
        }
    }

    /// Each side draws one card, then the next round opens.
    fn draw_phase(&mut self) {
        for side in Side::ALL {
            let (card, fatigue) = self.draw_for(side);
            self.events.push(MatchEvent::CardDrawn { side, card, fatigue });
        }
        self.round += 1;
        self.phase = Phase::Planning;
    }

    /// Draw from the deck, refilling from discard if needed; with both
    /// empty, hand out a fatigue token instead.
    fn draw_for(&mut self, side: Side) -> (CardUid, bool) {
        let me = &mut self.competitors[side];
        if me.deck.is_empty() && !me.discard.is_empty() {
            let moved = me.refill_from_discard();
            self.decks.shuffle(&mut me.deck);
            debug!(%side, moved, "reshuffled discard into deck");
        }
        if let Some(uid) = me.draw() {
            return (uid, false);
        }

        let element: Element = catalog::random_element(&mut self.token_rng);
        let token = self.decks.token(
            CardKind::Fatigue,
            &FATIGUE,
            element,
            self.config.coin_power,
            self.config.coin_cost,
        );
        let uid = token.uid;
        debug!(%side, %token, "fatigue draw");
        me.hand.push(token);
        (uid, true)
    }
}

impl std::fmt::Debug for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("arena", &self.arena)
            .field("phase", &self.phase)
            .field("round", &self.round)
            .field("winner", &self.winner)
            .finish_non_exhaustive()
    }
}
