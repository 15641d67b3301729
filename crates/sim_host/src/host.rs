use sim_core::{ActionEnvelope, Game, Micros, PlayerId, TerminalOutcome, Tick};
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct RunResult<G: Game> {
    pub outcome: Option<TerminalOutcome>,
    pub final_tick: Tick,
    pub events: Vec<G::Event>,
}

/// Single-writer driver for one match.
///
/// Owns the game instance, the tick counter, and the pending-action queue;
/// every state mutation funnels through [`MatchHost::step_one_tick`]. The
/// caller supplies the clock: either push elapsed real time through
/// [`MatchHost::advance`] or step ticks directly. Once the game reports a
/// terminal outcome, or [`MatchHost::shutdown`] has been called, stepping
/// becomes a no-op and queued actions are discarded.
pub struct MatchHost<G: Game> {
    game: G,
    current_tick: Tick,
    tick_hz: u32,
    next_player_id: PlayerId,
    pending_actions: BTreeMap<Tick, Vec<ActionEnvelope<G::Action>>>,
    // elapsed real time not yet converted into whole ticks
    accumulated: Micros,
    shutdown: bool,
}

impl<G: Game> MatchHost<G> {
    pub fn new(config: G::Config, seed: u64, tick_hz: u32) -> Self {
        Self {
            game: G::new(config, seed),
            current_tick: 0,
            tick_hz,
            next_player_id: 0,
            pending_actions: BTreeMap::new(),
            accumulated: Micros::default(),
            shutdown: false,
        }
    }

    pub fn join_player(&mut self) -> PlayerId {
        let id = self.next_player_id;
        self.next_player_id += 1;
        id
    }

    /// Submit an action to be executed at its intended tick.
    ///
    /// An intended tick in the past (or the current tick) is moved to the
    /// next tick. Returns the tick the action was actually scheduled for.
    /// Actions submitted after shutdown or a terminal outcome are dropped.
    pub fn submit(&mut self, mut action: ActionEnvelope<G::Action>) -> Tick {
        let scheduled_tick = if action.intended_tick <= self.current_tick {
            self.current_tick + 1
        } else {
            action.intended_tick
        };

        if self.is_stopped() {
            return scheduled_tick;
        }

        action.intended_tick = scheduled_tick;
        self.pending_actions
            .entry(scheduled_tick)
            .or_default()
            .push(action);

        scheduled_tick
    }

    /// Feed elapsed real time into the match.
    ///
    /// Whole ticks worth of time are consumed immediately; the remainder is
    /// carried until the next call, so an irregular caller clock still
    /// produces an exact tick cadence. Returns the events from all ticks
    /// that ran.
    pub fn advance(&mut self, elapsed: Micros) -> Vec<G::Event> {
        let tick_duration = Micros::from_secs(1) / self.tick_hz;
        let mut events = Vec::new();

        self.accumulated = self.accumulated + elapsed;
        while self.accumulated >= tick_duration {
            self.accumulated = self.accumulated - tick_duration;
            match self.step_one_tick() {
                Some(tick_events) => events.extend(tick_events),
                None => break,
            }
        }

        events
    }

    /// Advance by one tick. Returns `None` without stepping if the match is
    /// already over.
    pub fn step_one_tick(&mut self) -> Option<Vec<G::Event>> {
        if self.is_stopped() {
            return None;
        }

        self.current_tick += 1;

        let mut actions = self
            .pending_actions
            .remove(&self.current_tick)
            .unwrap_or_default();

        // deterministic order for same-tick actions
        actions.sort_by_key(|a| (a.player_id, a.action_id));

        let mut tick_events = Vec::new();
        self.game
            .step(self.current_tick, &actions, &mut tick_events);

        Some(tick_events)
    }

    /// Run up to `max_ticks` ticks, stopping early on a terminal outcome.
    pub fn run_for_ticks(&mut self, max_ticks: Tick) -> RunResult<G> {
        let mut all_events = Vec::new();

        for _ in 0..max_ticks {
            match self.step_one_tick() {
                Some(tick_events) => all_events.extend(tick_events),
                None => break,
            }
        }

        RunResult {
            outcome: self.game.is_terminal(),
            final_tick: self.current_tick,
            events: all_events,
        }
    }

    /// Stop the match. All queued actions are dropped and every further
    /// `advance`/`step` call is a no-op.
    pub fn shutdown(&mut self) {
        self.shutdown = true;
        self.pending_actions.clear();
    }

    pub fn observe(&self, player: PlayerId) -> G::Observation {
        self.game.observe(self.current_tick, player)
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    pub fn tick_hz(&self) -> u32 {
        self.tick_hz
    }

    pub fn is_terminal(&self) -> Option<TerminalOutcome> {
        self.game.is_terminal()
    }

    fn is_stopped(&self) -> bool {
        self.shutdown || self.game.is_terminal().is_some()
    }
}
