use crate::config::{EnemyKind, TowerKind};
use crate::effects::{self, EffectKind, EffectMap};
use crate::errors::{PlacementError, SellError, UpgradeError};
use crate::events::TdEvent;
use crate::world::{AttackVisual, CellState, Enemy, EnemyId, SpawnPhase, TdState, Tower, TowerId};
use sim_core::Tick;

pub fn try_place_tower(
    state: &mut TdState,
    x: u16,
    y: u16,
    kind: TowerKind,
    tick: Tick,
) -> Result<TowerId, PlacementError> {
    if !state.world.grid.in_bounds(x, y) {
        return Err(PlacementError::OutOfBounds);
    }
    if !state.world.grid.is_placable(x, y) {
        return Err(PlacementError::OnPath);
    }
    if let CellState::Tower(_) = state.world.grid.get(x, y) {
        return Err(PlacementError::Occupied);
    }

    let cost = state.config.spec(kind).cost;
    if state.gold < cost {
        return Err(PlacementError::InsufficientGold);
    }
    state.gold -= cost;

    let id = state.world.towers.insert(Tower {
        x,
        y,
        kind,
        next_fire_tick: tick,
    });
    state.world.placement_order.push(id);
    state.world.grid.set(x, y, CellState::Tower(id));
    Ok(id)
}

/// Selling refunds the flat configured amount, never the tower's own cost.
pub fn try_sell_tower(state: &mut TdState, x: u16, y: u16) -> Result<TowerId, SellError> {
    if !state.world.grid.in_bounds(x, y) {
        return Err(SellError::NoTower);
    }
    let id = match state.world.grid.get(x, y) {
        CellState::Tower(id) => id,
        _ => return Err(SellError::NoTower),
    };

    state.world.towers.remove(id);
    state.world.placement_order.retain(|&t| t != id);
    state.world.grid.set(x, y, CellState::Buildable);
    state.gold += state.config.sell_refund;
    Ok(id)
}

/// Replace the tower in place with a direct upgrade of its archetype.
/// The position and placement order stay; the cooldown gate resets.
pub fn try_upgrade_tower(
    state: &mut TdState,
    x: u16,
    y: u16,
    to: TowerKind,
    tick: Tick,
) -> Result<TowerId, UpgradeError> {
    if !state.world.grid.in_bounds(x, y) {
        return Err(UpgradeError::NoTower);
    }
    let id = match state.world.grid.get(x, y) {
        CellState::Tower(id) => id,
        _ => return Err(UpgradeError::NoTower),
    };

    let current = state.world.towers[id].kind;
    if current.upgrades().is_empty() {
        return Err(UpgradeError::TerminalTier);
    }
    if !current.upgrades().contains(&to) {
        return Err(UpgradeError::NotAnUpgrade);
    }

    let cost = state.config.spec(to).cost;
    if state.gold < cost {
        return Err(UpgradeError::InsufficientGold);
    }
    state.gold -= cost;

    let tower = &mut state.world.towers[id];
    tower.kind = to;
    tower.next_fire_tick = tick;
    Ok(id)
}

/// Walk every enemy through one tick: exits first, then deaths left over
/// from effect damage, then effects and movement.
///
/// Losing the last life flips the terminal flag and aborts the pass; the
/// caller must not run any further phase of the tick.
pub fn update_enemies(state: &mut TdState, tick: Tick, events: &mut Vec<TdEvent>) {
    let interval_ticks = state.config.duration_to_ticks(state.config.effect_interval);

    let order: Vec<EnemyId> = state.world.spawn_order.clone();
    for id in order {
        if state.world.enemies[id].is_at_end(&state.world.path) {
            remove_enemy(state, id);
            state.lives = state.lives.saturating_sub(1);
            events.push(TdEvent::EnemyReachedExit { id });
            if state.lives == 0 {
                state.game_over = true;
                events.push(TdEvent::GameOver { wave: state.wave });
                tracing::info!(wave = state.wave, "out of lives, game over");
                return;
            }
            continue;
        }

        // an attached DoT may have dropped it below zero since the last pass
        if state.world.enemies[id].hp <= 0 {
            let gold = state.world.enemies[id].gold;
            remove_enemy(state, id);
            state.gold += gold;
            events.push(TdEvent::EnemyKilled { id, gold });
            continue;
        }

        let enemy = &mut state.world.enemies[id];
        effects::run_effects(&mut enemy.effects, &mut enemy.hp, tick, interval_ticks);

        enemy.progress += enemy.speed / 100.0;
        if enemy.progress >= 1.0 {
            // overshoot is discarded on waypoint advance
            enemy.path_index += 1;
            enemy.progress = 0.0;
        }
    }
}

/// Run every tower's attack in placement order.
///
/// A ready tower targets the oldest enemy within Euclidean range; spawn
/// order beats distance when several qualify. Any hit re-arms the cooldown
/// gate and emits a visual from the tower cell to the target cell.
pub fn tower_attacks(state: &mut TdState, tick: Tick, events: &mut Vec<TdEvent>) {
    let visual_ticks = state.config.duration_to_ticks(state.config.visual_lifetime);
    let interval_ticks = state.config.duration_to_ticks(state.config.effect_interval);
    let duration_ticks = state.config.duration_to_ticks(state.config.effect_duration);

    let order: Vec<TowerId> = state.world.placement_order.clone();
    for tower_id in order {
        let tower = &state.world.towers[tower_id];
        if tick < tower.next_fire_tick {
            continue;
        }
        let (tx, ty, kind) = (tower.x, tower.y, tower.kind);
        let spec = *state.config.spec(kind);

        let Some(target) = first_in_range(state, tx, ty, spec.range) else {
            continue;
        };
        let target_cell = state.world.enemies[target].cell(&state.world.path);

        match kind {
            TowerKind::Basic | TowerKind::Sniper | TowerKind::Auto => {
                damage_enemy(state, target, spec.damage, events);
            }
            TowerKind::Dot => {
                damage_enemy(state, target, spec.damage, events);
                if let Some(enemy) = state.world.enemies.get_mut(target) {
                    effects::apply_finite(
                        &mut enemy.effects,
                        EffectKind::Dot,
                        spec.damage / 5,
                        tick,
                        interval_ticks,
                        duration_ticks,
                    );
                }
            }
            TowerKind::PermanentDot => {
                damage_enemy(state, target, spec.damage, events);
                if let Some(enemy) = state.world.enemies.get_mut(target) {
                    effects::apply_permanent(
                        &mut enemy.effects,
                        spec.damage / 5,
                        tick,
                        interval_ticks,
                    );
                }
            }
            TowerKind::SpreadDot => {
                // no instant damage: the target gets the full-rate DoT and
                // every other enemy on its row gets the half-rate one
                let row = target_cell.1;
                let row_mates: Vec<EnemyId> = state
                    .world
                    .spawn_order
                    .iter()
                    .copied()
                    .filter(|&id| {
                        id != target && state.world.enemies[id].cell(&state.world.path).1 == row
                    })
                    .collect();

                let enemy = &mut state.world.enemies[target];
                effects::apply_finite(
                    &mut enemy.effects,
                    EffectKind::Dot,
                    spec.damage,
                    tick,
                    interval_ticks,
                    duration_ticks,
                );
                for id in row_mates {
                    let enemy = &mut state.world.enemies[id];
                    effects::apply_finite(
                        &mut enemy.effects,
                        EffectKind::SpreadDot,
                        spec.damage / 2,
                        tick,
                        interval_ticks,
                        duration_ticks,
                    );
                }
            }
        }

        let cooldown_ticks = state.config.duration_to_ticks(spec.cooldown);
        state.world.towers[tower_id].next_fire_tick = tick + cooldown_ticks;
        state.world.visuals.push(AttackVisual {
            from: (tx, ty),
            to: target_cell,
            expires_tick: tick + visual_ticks,
        });
    }
}

pub fn prune_visuals(state: &mut TdState, tick: Tick) {
    state.world.visuals.retain(|v| tick < v.expires_tick);
}

/// Wave progression and metered spawning.
///
/// The next wave starts only when the field is clear and the scheduler is
/// idle; while spawning, at most one enemy is released per spawn interval.
pub fn update_spawner(state: &mut TdState, tick: Tick, events: &mut Vec<TdEvent>) {
    let spawn_ticks = state.config.duration_to_ticks(state.config.spawn_interval);

    if matches!(state.phase, SpawnPhase::Draining) && state.world.enemies.is_empty() {
        events.push(TdEvent::WaveCleared { wave: state.wave });
        state.phase = SpawnPhase::Idle;
    }

    if matches!(state.phase, SpawnPhase::Idle) && state.world.enemies.is_empty() {
        state.wave += 1;
        let lineup = state.waves.compose(state.wave);
        tracing::debug!(wave = state.wave, size = lineup.len(), "wave starting");
        events.push(TdEvent::WaveStarted {
            wave: state.wave,
            size: lineup.len() as u16,
        });
        state.phase = SpawnPhase::Spawning {
            queue: lineup.into(),
            next_release_tick: tick,
        };
    }

    let mut release = None;
    let mut drained = false;
    if let SpawnPhase::Spawning {
        queue,
        next_release_tick,
    } = &mut state.phase
    {
        if tick >= *next_release_tick {
            release = queue.pop_front();
            *next_release_tick = tick + spawn_ticks;
            drained = queue.is_empty();
        }
    }
    if let Some(kind) = release {
        spawn_enemy(state, kind, events);
    }
    if drained {
        state.phase = SpawnPhase::Draining;
    }
}

/// Fixed-interval gold trickle, independent of the tick cadence.
pub fn passive_income(state: &mut TdState, tick: Tick, events: &mut Vec<TdEvent>) {
    if tick >= state.next_income_tick {
        state.gold += state.config.passive_income;
        state.next_income_tick =
            tick + state.config.duration_to_ticks(state.config.income_interval);
        events.push(TdEvent::IncomeGranted {
            amount: state.config.passive_income,
        });
    }
}

/// Oldest enemy whose interpolated position lies within `range` of the
/// tower cell.
fn first_in_range(state: &TdState, tx: u16, ty: u16, range: f32) -> Option<EnemyId> {
    state.world.spawn_order.iter().copied().find(|&id| {
        let enemy = &state.world.enemies[id];
        let (ex, ey) = enemy.position(&state.world.path);
        let dx = ex - tx as f32;
        let dy = ey - ty as f32;
        (dx * dx + dy * dy).sqrt() <= range
    })
}

/// Direct hit. An enemy driven to zero or below is credited and removed on
/// the spot, exactly once.
fn damage_enemy(state: &mut TdState, id: EnemyId, amount: i32, events: &mut Vec<TdEvent>) {
    let enemy = &mut state.world.enemies[id];
    enemy.hp -= amount;
    if enemy.hp <= 0 {
        let gold = enemy.gold;
        remove_enemy(state, id);
        state.gold += gold;
        events.push(TdEvent::EnemyKilled { id, gold });
    }
}

fn remove_enemy(state: &mut TdState, id: EnemyId) {
    state.world.enemies.remove(id);
    state.world.spawn_order.retain(|&e| e != id);
}

fn spawn_enemy(state: &mut TdState, kind: EnemyKind, events: &mut Vec<TdEvent>) {
    let spec = *state.config.enemy_spec(kind);
    let id = state.world.enemies.insert(Enemy {
        kind,
        hp: spec.hp,
        speed: spec.speed,
        gold: spec.gold,
        path_index: 0,
        progress: 0.0,
        effects: EffectMap::new(),
    });
    state.world.spawn_order.push(id);
    events.push(TdEvent::EnemySpawned { id, kind });
}
