use sim_core::Micros;

/// Tower archetypes. `Basic` upgrades into `Sniper` or `Auto`; `Dot`
/// upgrades into `PermanentDot` or `SpreadDot`. Upgrade tiers are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TowerKind {
    Basic,
    Sniper,
    Auto,
    Dot,
    PermanentDot,
    SpreadDot,
}

impl TowerKind {
    /// Archetypes this kind may be upgraded into. Empty for terminal tiers.
    pub fn upgrades(self) -> &'static [TowerKind] {
        match self {
            TowerKind::Basic => &[TowerKind::Sniper, TowerKind::Auto],
            TowerKind::Dot => &[TowerKind::PermanentDot, TowerKind::SpreadDot],
            _ => &[],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TowerKind::Basic => "Basic",
            TowerKind::Sniper => "Sniper",
            TowerKind::Auto => "Auto",
            TowerKind::Dot => "Dot",
            TowerKind::PermanentDot => "PermanentDot",
            TowerKind::SpreadDot => "SpreadDot",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TowerSpec {
    pub cost: u32,
    pub range: f32,
    pub damage: i32,
    pub cooldown: Micros,
}

/// Enemy archetypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Runt,
    Knight,
    Brute,
}

impl EnemyKind {
    pub fn name(self) -> &'static str {
        match self {
            EnemyKind::Runt => "Runt",
            EnemyKind::Knight => "Knight",
            EnemyKind::Brute => "Brute",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct EnemySpec {
    pub hp: i32,
    /// Path progress gained per tick is `speed / 100`.
    pub speed: f32,
    /// Gold credited when the enemy dies.
    pub gold: u32,
}

#[derive(Clone, Debug)]
pub struct TdConfig {
    pub rows: u16,
    pub cols: u16,
    pub tick_hz: u32,

    pub lives: u32,
    pub gold_start: u32,

    /// Gold granted by the passive-income timer each interval.
    pub passive_income: u32,
    pub income_interval: Micros,

    /// Delay between enemy releases within a wave.
    pub spawn_interval: Micros,

    /// Cadence at which an attached DoT deals its damage.
    pub effect_interval: Micros,
    /// Lifetime of a finite DoT, measured from its latest application.
    pub effect_duration: Micros,

    pub visual_lifetime: Micros,

    /// Flat refund for selling any tower, regardless of its cost.
    pub sell_refund: u32,

    // Tower specs
    pub basic: TowerSpec,
    pub sniper: TowerSpec,
    pub auto: TowerSpec,
    pub dot: TowerSpec,
    pub permanent_dot: TowerSpec,
    pub spread_dot: TowerSpec,

    // Enemy specs
    pub runt: EnemySpec,
    pub knight: EnemySpec,
    pub brute: EnemySpec,
}

impl TdConfig {
    pub fn spec(&self, kind: TowerKind) -> &TowerSpec {
        match kind {
            TowerKind::Basic => &self.basic,
            TowerKind::Sniper => &self.sniper,
            TowerKind::Auto => &self.auto,
            TowerKind::Dot => &self.dot,
            TowerKind::PermanentDot => &self.permanent_dot,
            TowerKind::SpreadDot => &self.spread_dot,
        }
    }

    pub fn enemy_spec(&self, kind: EnemyKind) -> &EnemySpec {
        match kind {
            EnemyKind::Runt => &self.runt,
            EnemyKind::Knight => &self.knight,
            EnemyKind::Brute => &self.brute,
        }
    }

    pub fn duration_to_ticks(&self, d: Micros) -> u64 {
        d.to_ticks(self.tick_hz)
    }
}

impl Default for TdConfig {
    fn default() -> Self {
        Self {
            rows: 15,
            cols: 20,
            tick_hz: 10,

            lives: 10,
            gold_start: 100,

            passive_income: 5,
            income_interval: Micros::from_secs(1),

            spawn_interval: Micros::from_secs(1),

            effect_interval: Micros::from_secs(1),
            effect_duration: Micros::from_secs(10),

            visual_lifetime: Micros::from_millis(100),

            sell_refund: 15,

            basic: TowerSpec {
                cost: 25,
                range: 2.0,
                damage: 10,
                cooldown: Micros::from_millis(500),
            },
            sniper: TowerSpec {
                cost: 200,
                range: 6.0,
                damage: 5000,
                cooldown: Micros::from_millis(8000),
            },
            auto: TowerSpec {
                cost: 200,
                range: 2.0,
                damage: 10,
                cooldown: Micros::from_millis(50),
            },
            dot: TowerSpec {
                cost: 50,
                range: 2.0,
                damage: 5,
                cooldown: Micros::from_millis(500),
            },
            permanent_dot: TowerSpec {
                cost: 300,
                range: 2.0,
                damage: 5,
                cooldown: Micros::from_millis(500),
            },
            spread_dot: TowerSpec {
                cost: 300,
                range: 2.0,
                damage: 10,
                cooldown: Micros::from_millis(500),
            },

            runt: EnemySpec {
                hp: 50,
                speed: 11.0,
                gold: 5,
            },
            knight: EnemySpec {
                hp: 200,
                speed: 6.0,
                gold: 10,
            },
            brute: EnemySpec {
                hp: 600,
                speed: 3.0,
                gold: 15,
            },
        }
    }
}
