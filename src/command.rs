//! Command-based control for cycle engines.
//!
//! Useful when the engine lives in its own task and receives instructions
//! over a channel, for example when an app shows several stoplights and
//! routes commands by id.

use crate::sequence::Sequence;
use crate::time::TimeDuration;

/// Actions for controlling an engine.
#[derive(Debug, Clone)]
pub enum EngineAction<L, D: TimeDuration, const N: usize> {
    /// Swap in a new sequence, keeping the wrapped position.
    Reconfigure(Sequence<L, D, N>),
    /// Tear the engine down.
    Dispose,
}

/// Command targeting a specific stoplight.
#[derive(Debug, Clone)]
pub struct EngineCommand<Id, L, D: TimeDuration, const N: usize> {
    pub light_id: Id,
    pub action: EngineAction<L, D, N>,
}

impl<Id, L, D: TimeDuration, const N: usize> EngineCommand<Id, L, D, N> {
    /// Creates command.
    pub fn new(light_id: Id, action: EngineAction<L, D, N>) -> Self {
        Self { light_id, action }
    }
}
