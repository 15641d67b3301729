use crate::types::{ActionId, PlayerId, Tick};

/// An action wrapped with the metadata the host needs to schedule it.
///
/// Actions for the same tick are executed in `(player_id, action_id)` order,
/// so two hosts fed the same envelopes produce identical runs.
#[derive(Clone, Debug)]
pub struct ActionEnvelope<A> {
    pub player_id: PlayerId,
    pub action_id: ActionId,
    pub intended_tick: Tick,
    pub payload: A,
}
