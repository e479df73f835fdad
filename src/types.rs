//! Core types for sequence construction.

use crate::time::TimeDuration;

/// A single phase of a light cycle.
///
/// The `label` identifies what is shown (usually a [`LightColor`](crate::LightColor)),
/// `duration` is how long the step stays active, and `rank` is an optional
/// display position used by presentation code, independent of where the step
/// sits in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<L, D: TimeDuration> {
    /// What this step shows.
    pub label: L,

    /// How long this step stays active.
    pub duration: D,

    /// Display position, if the presentation maps steps by rank.
    pub rank: Option<u8>,
}

impl<L, D: TimeDuration> Step<L, D> {
    /// Creates a step without a display rank.
    #[inline]
    pub fn new(label: L, duration: D) -> Self {
        Self {
            label,
            duration,
            rank: None,
        }
    }

    /// Creates a step shown at a fixed display position.
    #[inline]
    pub fn ranked(label: L, duration: D, rank: u8) -> Self {
        Self {
            label,
            duration,
            rank: Some(rank),
        }
    }
}

/// Sequence validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceError {
    /// No steps provided.
    EmptySequence,

    /// A step has zero duration.
    ZeroDuration {
        /// Position of the offending step.
        index: usize,
    },

    /// Sequence capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SequenceError::EmptySequence => {
                write!(f, "sequence must have at least one step")
            }
            SequenceError::ZeroDuration { index } => {
                write!(f, "step {} has zero duration", index)
            }
            SequenceError::CapacityExceeded => {
                write!(f, "sequence capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SequenceError {}
