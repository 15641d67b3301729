use crate::actions::TdAction;
use crate::config::TdConfig;
use crate::events::TdEvent;
use crate::systems;
use crate::world::TdState;
use sim_core::{ActionEnvelope, Game, PlayerId, TerminalOutcome, Tick};

pub struct TdGame {
    state: TdState,
}

impl TdGame {
    pub fn state(&self) -> &TdState {
        &self.state
    }
}

impl Game for TdGame {
    type Config = TdConfig;
    type Action = TdAction;
    type Observation = td_types::TdObservation;
    type Event = TdEvent;

    fn new(config: Self::Config, seed: u64) -> Self {
        Self {
            state: TdState::new(config, seed),
        }
    }

    fn step(
        &mut self,
        tick: Tick,
        actions: &[ActionEnvelope<Self::Action>],
        out_events: &mut Vec<Self::Event>,
    ) {
        if self.state.game_over {
            return;
        }
        self.state.tick = tick;

        // 1. Player commands. Rejections mutate nothing and surface as events.
        for action in actions {
            match &action.payload {
                TdAction::PlaceTower { x, y, kind } => {
                    match systems::try_place_tower(&mut self.state, *x, *y, *kind, tick) {
                        Ok(id) => out_events.push(TdEvent::TowerPlaced {
                            id,
                            x: *x,
                            y: *y,
                            kind: *kind,
                        }),
                        Err(reason) => out_events.push(TdEvent::PlacementRejected {
                            x: *x,
                            y: *y,
                            kind: *kind,
                            reason,
                        }),
                    }
                }
                TdAction::SellTower { x, y } => {
                    match systems::try_sell_tower(&mut self.state, *x, *y) {
                        Ok(id) => out_events.push(TdEvent::TowerSold {
                            id,
                            x: *x,
                            y: *y,
                            refund: self.state.config.sell_refund,
                        }),
                        Err(reason) => out_events.push(TdEvent::SellRejected {
                            x: *x,
                            y: *y,
                            reason,
                        }),
                    }
                }
                TdAction::UpgradeTower { x, y, to } => {
                    match systems::try_upgrade_tower(&mut self.state, *x, *y, *to, tick) {
                        Ok(id) => out_events.push(TdEvent::TowerUpgraded {
                            id,
                            x: *x,
                            y: *y,
                            to: *to,
                        }),
                        Err(reason) => out_events.push(TdEvent::UpgradeRejected {
                            x: *x,
                            y: *y,
                            to: *to,
                            reason,
                        }),
                    }
                }
                TdAction::SetMode { mode } => {
                    self.state.mode = *mode;
                    out_events.push(TdEvent::ModeChanged { mode: *mode });
                }
            }
        }

        // 2. Enemies: exits, leftover DoT deaths, effects, movement.
        systems::update_enemies(&mut self.state, tick, out_events);
        if self.state.game_over {
            // terminal: the rest of the tick never runs
            return;
        }

        // 3. Towers fire in placement order.
        systems::tower_attacks(&mut self.state, tick, out_events);

        // 4. Expired attack visuals.
        systems::prune_visuals(&mut self.state, tick);

        // 5. Wave progression and metered spawning.
        systems::update_spawner(&mut self.state, tick, out_events);

        // 6. Passive income on its own 1s clock.
        systems::passive_income(&mut self.state, tick, out_events);
    }

    fn observe(&self, tick: Tick, _player: PlayerId) -> Self::Observation {
        crate::observe::build_observation(&self.state, tick)
    }

    fn is_terminal(&self) -> Option<TerminalOutcome> {
        if self.state.game_over {
            Some(TerminalOutcome::Lose)
        } else {
            None
        }
    }
}
