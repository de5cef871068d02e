//! SortingSession aggregate.
//!
//! The session owns the whole mutable state of one sorting exercise: the
//! shuffled deck, the cursor, both decision maps, the pending vote and the
//! active press. It is mutated only through its operations; timers live
//! outside and call back in with the generation they were scheduled under.
//!
//! # Walk
//!
//! ```text
//! Round1 ──(last item)──> Round2 ──(last item)──> Summary
//!
//! restart()          : any stage ──> Round1 (new generation)
//! ingest_snapshot()  : any stage ──> Summary | Error (new generation)
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::{
    AdvanceOutcome, Choice, Decision, DecisionMap, Deck, IgnoreReason, IntensityGauge, Press,
    PressOutcome, Round, Stage, VoteOutcome,
};
use crate::domain::catalog::{Catalog, Skill};
use crate::domain::foundation::{Generation, Intensity, SessionId, StateMachine, Timestamp};
use crate::domain::quadrant::{classify, QuadrantSummary};
use crate::domain::snapshot;

/// One sorting exercise over a catalog.
///
/// # Invariants
///
/// - `deck` is a permutation of `catalog` (unless built with `with_deck`)
/// - `0 <= index <= deck.len()`
/// - a decision is never overwritten within one generation
/// - at most one of `override_summary` / `walk_summary` is set
#[derive(Debug)]
pub struct SortingSession {
    id: SessionId,
    catalog: Arc<Catalog>,
    rng: StdRng,
    gauge: IntensityGauge,

    stage: Stage,
    generation: Generation,
    deck: Deck,
    index: usize,
    enjoy: DecisionMap,
    good: DecisionMap,

    pending: Option<Choice>,
    press: Option<Press>,

    walk_summary: Option<QuadrantSummary>,
    override_summary: Option<QuadrantSummary>,
    dropped_names: Vec<String>,
    snapshot_error: Option<String>,

    started_at: Timestamp,
}

impl SortingSession {
    /// Starts a fresh walk over a shuffled deck.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// Same as `new`, with a reproducible shuffle.
    pub fn with_seed(catalog: Arc<Catalog>, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    /// Starts a walk over a fixed deck. Restart still reshuffles the catalog.
    pub fn with_deck(catalog: Arc<Catalog>, deck: Deck) -> Self {
        Self::assemble(catalog, StdRng::from_entropy(), deck)
    }

    /// Builds a session straight from a snapshot token.
    ///
    /// Ends in `Summary` when the token is valid, `Error` otherwise.
    pub fn from_snapshot(catalog: Arc<Catalog>, token: &str) -> Self {
        let mut session = Self::new(catalog);
        session.ingest_snapshot(token);
        session
    }

    /// Replaces the gauge (press maximum duration).
    pub fn with_gauge(mut self, gauge: IntensityGauge) -> Self {
        self.gauge = gauge;
        self
    }

    fn with_rng(catalog: Arc<Catalog>, mut rng: StdRng) -> Self {
        let deck = Deck::shuffled(&catalog, &mut rng);
        Self::assemble(catalog, rng, deck)
    }

    fn assemble(catalog: Arc<Catalog>, rng: StdRng, deck: Deck) -> Self {
        let session = Self {
            id: SessionId::new(),
            catalog,
            rng,
            gauge: IntensityGauge::default(),
            stage: Stage::Round1,
            generation: Generation::INITIAL,
            deck,
            index: 0,
            enjoy: DecisionMap::new(),
            good: DecisionMap::new(),
            pending: None,
            press: None,
            walk_summary: None,
            override_summary: None,
            dropped_names: Vec::new(),
            snapshot_error: None,
            started_at: Timestamp::now(),
        };
        info!(
            session_id = %session.id,
            deck_len = session.deck.len(),
            "Sorting session started"
        );
        session
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn gauge(&self) -> &IntensityGauge {
        &self.gauge
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// When the current walk began.
    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// The item being voted on, if the cursor is inside the deck.
    pub fn current_item(&self) -> Option<&Skill> {
        self.deck.get(self.index)
    }

    /// Items left after the current one. Never negative.
    pub fn remaining_count(&self) -> usize {
        self.deck.len().saturating_sub(self.index + 1)
    }

    /// Fraction of the deck decided in a round, 0.0 to 1.0.
    pub fn progress(&self, round: Round) -> f64 {
        if self.deck.is_empty() {
            return 0.0;
        }
        self.decisions(round).len() as f64 / self.deck.len() as f64
    }

    pub fn decisions(&self, round: Round) -> &DecisionMap {
        match round {
            Round::Enjoy => &self.enjoy,
            Round::Good => &self.good,
        }
    }

    pub fn pending_decision(&self) -> Option<Choice> {
        self.pending
    }

    pub fn is_pressing(&self) -> bool {
        self.press.is_some()
    }

    /// Latest sampled level of the active press, zero when idle.
    pub fn live_power(&self) -> Intensity {
        self.press.map(|p| p.level()).unwrap_or(Intensity::ZERO)
    }

    pub fn press_direction(&self) -> Option<Choice> {
        self.press.map(|p| p.choice())
    }

    /// The snapshot override if one was ingested, else the classified walk.
    pub fn summary(&self) -> Option<&QuadrantSummary> {
        self.override_summary.as_ref().or(self.walk_summary.as_ref())
    }

    /// True when the summary came from a snapshot token.
    pub fn is_snapshot(&self) -> bool {
        self.override_summary.is_some()
    }

    /// Snapshot entries that did not match the catalog.
    pub fn dropped_names(&self) -> &[String] {
        &self.dropped_names
    }

    /// Why the last snapshot was rejected, while in `Error`.
    pub fn snapshot_error(&self) -> Option<&str> {
        self.snapshot_error.as_deref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Voting
    // ─────────────────────────────────────────────────────────────────────────

    /// Records a vote for the current item in the active round.
    ///
    /// Ignored, without touching either map, outside a round, past the end
    /// of the deck, or while a previous vote awaits its advance.
    pub fn vote(&mut self, choice: Choice, intensity: Intensity) -> VoteOutcome {
        if let Err(reason) = self.ensure_can_vote() {
            debug!(
                session_id = %self.id,
                generation = self.generation.value(),
                %reason,
                "Vote ignored"
            );
            return VoteOutcome::Ignored(reason);
        }
        let (Some(round), Some(item)) = (self.stage.round(), self.deck.get(self.index)) else {
            return VoteOutcome::Ignored(IgnoreReason::NoCurrentItem);
        };
        let name = item.name().to_string();

        let map = match round {
            Round::Enjoy => &mut self.enjoy,
            Round::Good => &mut self.good,
        };
        if !map.record(name.clone(), Decision::new(choice, intensity)) {
            return VoteOutcome::Ignored(IgnoreReason::DecisionPending);
        }
        self.pending = Some(choice);
        self.press = None;

        debug!(
            session_id = %self.id,
            generation = self.generation.value(),
            %round,
            name = %name,
            %choice,
            intensity = intensity.value(),
            "Vote recorded"
        );
        VoteOutcome::Recorded {
            round,
            name,
            choice,
            intensity,
            generation: self.generation,
        }
    }

    /// A discrete click: a zero-length press committing "yes".
    pub fn tap(&mut self) -> VoteOutcome {
        self.vote(Choice::Yes, Intensity::ZERO)
    }

    /// Moves past the pending vote.
    ///
    /// Clears the pending vote and any press, then steps to the next item,
    /// the next round, or the summary.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if !self.stage.is_voting() {
            return AdvanceOutcome::Ignored(IgnoreReason::NotVoting);
        }
        if self.pending.take().is_none() {
            debug!(session_id = %self.id, "Advance ignored, nothing pending");
            return AdvanceOutcome::Ignored(IgnoreReason::NothingPending);
        }
        self.press = None;

        if self.index + 1 < self.deck.len() {
            self.index += 1;
            return AdvanceOutcome::NextItem { index: self.index };
        }

        let target = match self.stage {
            Stage::Round1 => Stage::Round2,
            _ => Stage::Summary,
        };
        match self.stage.transition_to(target) {
            Ok(next) => self.stage = next,
            Err(err) => {
                warn!(session_id = %self.id, error = %err, "Walk transition rejected");
                return AdvanceOutcome::Ignored(IgnoreReason::NotVoting);
            }
        }
        info!(
            session_id = %self.id,
            generation = self.generation.value(),
            stage = %self.stage,
            "Stage changed"
        );

        match self.stage {
            Stage::Round2 => {
                self.index = 0;
                AdvanceOutcome::NextRound { round: Round::Good }
            }
            _ => {
                self.walk_summary = Some(classify(&self.deck, &self.enjoy, &self.good));
                AdvanceOutcome::Completed
            }
        }
    }

    /// Advances only if `ticket` is the current generation.
    pub fn advance_for(&mut self, ticket: Generation) -> AdvanceOutcome {
        if ticket != self.generation {
            debug!(
                session_id = %self.id,
                ticket = ticket.value(),
                generation = self.generation.value(),
                "Stale advance ignored"
            );
            return AdvanceOutcome::Ignored(IgnoreReason::StaleGeneration);
        }
        self.advance()
    }

    fn ensure_can_vote(&self) -> Result<(), IgnoreReason> {
        if !self.stage.is_voting() {
            return Err(IgnoreReason::NotVoting);
        }
        if self.pending.is_some() {
            return Err(IgnoreReason::DecisionPending);
        }
        if self.current_item().is_none() {
            return Err(IgnoreReason::NoCurrentItem);
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Press and hold
    // ─────────────────────────────────────────────────────────────────────────

    /// Starts a hold in one direction.
    ///
    /// First direction wins: while a press is held, another begin is ignored.
    pub fn begin_press(&mut self, choice: Choice, now: Instant) -> PressOutcome {
        if self.press.is_some() {
            return PressOutcome::Ignored(IgnoreReason::AlreadyPressing);
        }
        if let Err(reason) = self.ensure_can_vote() {
            return PressOutcome::Ignored(reason);
        }
        self.press = Some(Press::begin(choice, now, self.stage, self.generation));
        debug!(session_id = %self.id, %choice, "Press started");
        PressOutcome::Started {
            choice,
            generation: self.generation,
        }
    }

    /// Updates the live level of the active press.
    ///
    /// Abandons the press if the stage or generation changed, or a vote
    /// became pending, since it began.
    pub fn sample_press(&mut self, now: Instant) -> PressOutcome {
        let Some(mut press) = self.press else {
            return PressOutcome::Ignored(IgnoreReason::NotPressing);
        };
        if !self.press_is_live(&press) {
            return self.cancel_press();
        }
        let level = press.sample(&self.gauge, now);
        self.press = Some(press);
        PressOutcome::Sampled(level)
    }

    /// Ends the hold and commits a vote at the level reached by `now`.
    ///
    /// Releasing the direction that is not held is ignored.
    pub fn release_press(&mut self, choice: Choice, now: Instant) -> PressOutcome {
        let Some(mut press) = self.press else {
            return PressOutcome::Ignored(IgnoreReason::NotPressing);
        };
        if press.choice() != choice {
            return PressOutcome::Ignored(IgnoreReason::DirectionMismatch);
        }
        if !self.press_is_live(&press) {
            return self.cancel_press();
        }
        let level = press.sample(&self.gauge, now);
        self.press = None;
        PressOutcome::Released(self.vote(choice, level))
    }

    /// Drops the active press without voting.
    pub fn cancel_press(&mut self) -> PressOutcome {
        match self.press.take() {
            Some(press) => {
                debug!(session_id = %self.id, choice = %press.choice(), "Press cancelled");
                PressOutcome::Cancelled
            }
            None => PressOutcome::Ignored(IgnoreReason::NotPressing),
        }
    }

    fn press_is_live(&self, press: &Press) -> bool {
        press.stage() == self.stage && press.generation() == self.generation && self.pending.is_none()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Walk replacement
    // ─────────────────────────────────────────────────────────────────────────

    /// Reshuffles and starts over at round 1.
    ///
    /// Clears both maps, any snapshot override and all transient state, and
    /// bumps the generation so outstanding tickets go stale.
    pub fn restart(&mut self) -> Generation {
        self.deck = Deck::shuffled(&self.catalog, &mut self.rng);
        self.reset_walk(Stage::Round1);
        info!(
            session_id = %self.id,
            generation = self.generation.value(),
            "Session restarted"
        );
        self.generation
    }

    /// Replaces the walk with a decoded snapshot.
    ///
    /// A valid token lands in `Summary` with the decoded override; anything
    /// else lands in `Error`. Nothing is half-applied: the token is fully
    /// decoded before the session changes.
    pub fn ingest_snapshot(&mut self, token: &str) -> Stage {
        let decoded = snapshot::decode(token, &self.catalog);

        match decoded {
            Ok(decoded) => {
                self.reset_walk(Stage::Summary);
                if !decoded.dropped.is_empty() {
                    warn!(
                        session_id = %self.id,
                        dropped = ?decoded.dropped,
                        "Snapshot names not in catalog were dropped"
                    );
                }
                info!(
                    session_id = %self.id,
                    generation = self.generation.value(),
                    skills = decoded.summary.len(),
                    "Snapshot ingested"
                );
                self.override_summary = Some(decoded.summary);
                self.dropped_names = decoded.dropped;
            }
            Err(err) => {
                self.reset_walk(Stage::Error);
                warn!(
                    session_id = %self.id,
                    generation = self.generation.value(),
                    error = %err,
                    "Snapshot rejected"
                );
                self.snapshot_error = Some(err.to_string());
            }
        }
        self.stage
    }

    fn reset_walk(&mut self, stage: Stage) {
        self.generation = self.generation.next();
        self.stage = stage;
        self.index = 0;
        self.enjoy.clear();
        self.good.clear();
        self.pending = None;
        self.press = None;
        self.walk_summary = None;
        self.override_summary = None;
        self.dropped_names.clear();
        self.snapshot_error = None;
        self.started_at = Timestamp::now();
    }
}
