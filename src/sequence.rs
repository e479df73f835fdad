use crate::time::TimeDuration;
use crate::types::{SequenceError, Step};
use heapless::Vec;

/// An ordered, looping list of steps.
///
/// Order defines how the cycle progresses, not where each light is drawn.
/// A sequence always holds at least one step and every step has a non-zero
/// duration; both are checked when the sequence is built and never change
/// afterwards.
///
/// # Type Parameters
/// * `L` - The step label type (e.g., [`LightColor`](crate::LightColor))
/// * `D` - The duration type (e.g., `embassy_time::Duration`)
/// * `N` - Maximum number of steps this sequence can hold
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence<L, D: TimeDuration, const N: usize> {
    steps: Vec<Step<L, D>, N>,
}

impl<L: Copy, D: TimeDuration, const N: usize> Sequence<L, D, N> {
    /// Creates a new sequence builder.
    pub fn builder() -> SequenceBuilder<L, D, N> {
        SequenceBuilder::new()
    }

    /// Builds a sequence from a slice of steps.
    ///
    /// # Errors
    /// * `EmptySequence` - The slice is empty
    /// * `ZeroDuration` - A step has zero duration
    /// * `CapacityExceeded` - The slice holds more than `N` steps
    pub fn from_steps(steps: &[Step<L, D>]) -> Result<Self, SequenceError> {
        let steps = Vec::from_slice(steps).map_err(|_| SequenceError::CapacityExceeded)?;
        SequenceBuilder { steps }.build()
    }

    /// Returns the number of steps in this sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns a reference to the step at the given index.
    pub fn get(&self, index: usize) -> Option<&Step<L, D>> {
        self.steps.get(index)
    }

    /// Returns the step at `index` wrapped around the sequence length.
    #[inline]
    pub fn step_wrapping(&self, index: usize) -> &Step<L, D> {
        // Non-empty by construction.
        &self.steps[index % self.steps.len()]
    }

    /// Returns the steps as a slice.
    pub fn steps(&self) -> &[Step<L, D>] {
        &self.steps
    }

    /// Iterates over the steps in cycle order.
    pub fn iter(&self) -> core::slice::Iter<'_, Step<L, D>> {
        self.steps.iter()
    }

    /// Calculates the total duration of one complete loop through all steps.
    pub fn cycle_duration(&self) -> D {
        let total_millis: u64 = self
            .steps
            .iter()
            .map(|s| s.duration.as_millis())
            .fold(0u64, u64::saturating_add);
        D::from_millis(total_millis)
    }

    /// Finds which step an ideal, drift-free cycle shows after `elapsed`.
    ///
    /// Returns the step index and the time left until that step ends. Useful
    /// for previews and for checking a live engine against its schedule.
    pub fn position_at(&self, elapsed: D) -> (usize, D) {
        // Millisecond resolution: a loop shorter than 1 ms counts as 1 ms.
        let loop_millis = self.cycle_duration().as_millis().max(1);
        let time_in_loop = elapsed.as_millis() % loop_millis;

        let mut step_start = 0u64;
        for (index, step) in self.steps.iter().enumerate() {
            let step_end = step_start.saturating_add(step.duration.as_millis());
            if time_in_loop < step_end {
                return (index, D::from_millis(step_end - time_in_loop));
            }
            step_start = step_end;
        }

        // Only reached when every step is shorter than 1 ms.
        let last = self.steps.len() - 1;
        (last, self.steps[last].duration)
    }
}

impl<'a, L, D: TimeDuration, const N: usize> IntoIterator for &'a Sequence<L, D, N> {
    type Item = &'a Step<L, D>;
    type IntoIter = core::slice::Iter<'a, Step<L, D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Builder for constructing validated sequences.
#[derive(Debug)]
pub struct SequenceBuilder<L, D: TimeDuration, const N: usize> {
    steps: Vec<Step<L, D>, N>,
}

impl<L: Copy, D: TimeDuration, const N: usize> SequenceBuilder<L, D, N> {
    /// Creates a new empty sequence builder.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Adds an unranked step to the sequence.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if the sequence already holds `N` steps.
    pub fn step(self, label: L, duration: D) -> Result<Self, SequenceError> {
        self.push(Step::new(label, duration))
    }

    /// Adds a step with a display rank.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if the sequence already holds `N` steps.
    pub fn ranked_step(self, label: L, duration: D, rank: u8) -> Result<Self, SequenceError> {
        self.push(Step::ranked(label, duration, rank))
    }

    /// Adds a prebuilt step.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if the sequence already holds `N` steps.
    pub fn push(mut self, step: Step<L, D>) -> Result<Self, SequenceError> {
        self.steps
            .push(step)
            .map_err(|_| SequenceError::CapacityExceeded)?;
        Ok(self)
    }

    /// Builds and validates the sequence.
    ///
    /// # Errors
    /// * `EmptySequence` - No steps were added
    /// * `ZeroDuration` - A step has zero duration
    pub fn build(self) -> Result<Sequence<L, D, N>, SequenceError> {
        if self.steps.is_empty() {
            return Err(SequenceError::EmptySequence);
        }

        if let Some(index) = self
            .steps
            .iter()
            .position(|step| step.duration == D::ZERO)
        {
            return Err(SequenceError::ZeroDuration { index });
        }

        Ok(Sequence { steps: self.steps })
    }
}

impl<L: Copy, D: TimeDuration, const N: usize> Default for SequenceBuilder<L, D, N> {
    fn default() -> Self {
        Self::new()
    }
}
