use sim_core::Tick;
use std::collections::BTreeMap;

/// Status-effect slots on an enemy. One effect of each kind can be attached
/// at a time; re-application folds into the existing slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EffectKind {
    /// Finite DoT from a dot tower hit (also the spread tower's own target).
    Dot,
    /// Never-expiring DoT that escalates with every re-application.
    PermanentDot,
    /// Finite DoT splashed onto enemies sharing the target's row.
    SpreadDot,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Effect {
    /// Damage dealt each time the effect fires.
    pub damage: i32,
    pub next_fire_tick: Tick,
    /// `None` marks a permanent effect.
    pub expires_tick: Option<Tick>,
}

/// BTreeMap so evaluation order is stable across runs.
pub type EffectMap = BTreeMap<EffectKind, Effect>;

/// Attach or stack a finite DoT: an existing slot of the same kind gains the
/// new per-fire damage and has its expiry pushed out to `now + duration`.
pub fn apply_finite(
    effects: &mut EffectMap,
    kind: EffectKind,
    damage: i32,
    now: Tick,
    interval_ticks: u64,
    duration_ticks: u64,
) {
    match effects.get_mut(&kind) {
        Some(effect) => {
            effect.damage += damage;
            effect.expires_tick = Some(now + duration_ticks);
        }
        None => {
            effects.insert(
                kind,
                Effect {
                    damage,
                    next_fire_tick: now + interval_ticks,
                    expires_tick: Some(now + duration_ticks),
                },
            );
        }
    }
}

/// Attach the permanent DoT, or escalate it by one damage per re-application.
pub fn apply_permanent(effects: &mut EffectMap, damage: i32, now: Tick, interval_ticks: u64) {
    match effects.get_mut(&EffectKind::PermanentDot) {
        Some(effect) => {
            effect.damage += 1;
        }
        None => {
            effects.insert(
                EffectKind::PermanentDot,
                Effect {
                    damage,
                    next_fire_tick: now + interval_ticks,
                    expires_tick: None,
                },
            );
        }
    }
}

/// Evaluate every attached effect at simulation time `now`.
///
/// A due effect deals its damage once and re-arms at `now + interval`, so it
/// fires at most once per interval no matter the tick cadence. Expired slots
/// are dropped after evaluation; an effect whose expiry lands exactly on its
/// fire tick still gets that last fire.
pub fn run_effects(effects: &mut EffectMap, hp: &mut i32, now: Tick, interval_ticks: u64) {
    for effect in effects.values_mut() {
        if now >= effect.next_fire_tick {
            *hp -= effect.damage;
            effect.next_fire_tick = now + interval_ticks;
        }
    }
    effects.retain(|_, effect| effect.expires_tick.map_or(true, |expiry| now < expiry));
}
