/// Simulation tick counter. Tick 0 is the state before the first step.
pub type Tick = u64;

/// Player slot within a match.
pub type PlayerId = u8;

/// Client-chosen sequence number, used to order actions deterministically
/// when several arrive for the same tick.
pub type ActionId = u64;
