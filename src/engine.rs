//! Cycle engine: the active-step pointer and its single timer.
//!
//! Provides [`CycleEngine`], which walks a [`Sequence`] forever, holding each
//! step for its own duration, and the [`StepObserver`] trait through which a
//! presentation layer learns about step changes.
//!
//! The engine does not sleep or spawn anything. A driver calls
//! [`CycleEngine::service`] and waits for the returned delay before calling it
//! again, whether that wait is an embedded timer, an async `Timer::after`, or
//! `std::thread::sleep`.

use crate::command::EngineAction;
use crate::sequence::Sequence;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::timer::OneShot;
use crate::types::{SequenceError, Step};

/// Receives step changes from a [`CycleEngine`].
///
/// Implement this for whatever draws the lights. The engine owns its
/// observer, the same way a hardware driver owns its output pins.
pub trait StepObserver<L, D: TimeDuration> {
    /// Called with the newly active step.
    fn on_step(&mut self, step: &Step<L, D>, change: StepChange);
}

/// An observer that ignores every notification, for engines that are only
/// polled through [`CycleEngine::current_step`].
impl<L, D: TimeDuration> StepObserver<L, D> for () {
    fn on_step(&mut self, _step: &Step<L, D>, _change: StepChange) {}
}

/// Why an observer is being notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepChange {
    /// The engine was just created and shows its first step.
    Initial,
    /// The previous step's duration elapsed.
    Advanced,
    /// A new sequence replaced the old one.
    Reconfigured,
}

/// Lifecycle of a cycle engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineState {
    /// Cycling; exactly one timer is pending.
    Running,
    /// Torn down; no timer is pending and none will be armed again.
    Disposed,
}

/// Errors that can occur during engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineError {
    /// The engine has been disposed.
    Disposed,
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::Disposed => write!(f, "cycle engine has been disposed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}

/// Cycles through a sequence of steps, one timer at a time.
///
/// Each step arms a one-shot timer for its own duration; when that timer is
/// observed to have fired the engine moves to the next step (wrapping after
/// the last) and arms a fresh timer for it. A late service call delays the
/// next transition rather than skipping steps to catch up.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `L` - Step label type
/// * `I` - Time instant type
/// * `O` - Observer notified on every step change
/// * `T` - Time source implementation type
/// * `N` - Maximum number of steps in sequences
pub struct CycleEngine<'t, L, I, O, T, const N: usize>
where
    I: TimeInstant,
    O: StepObserver<L, I::Duration>,
    T: TimeSource<I>,
{
    observer: O,
    time_source: &'t T,
    sequence: Sequence<L, I::Duration, N>,
    active_index: usize,
    timer: OneShot<I>,
    state: EngineState,
    advances: u64,
}

impl<'t, L, I, O, T, const N: usize> CycleEngine<'t, L, I, O, T, N>
where
    L: Copy,
    I: TimeInstant,
    O: StepObserver<L, I::Duration>,
    T: TimeSource<I>,
{
    /// Creates a running engine showing the first step of `sequence`.
    ///
    /// The observer is notified once with [`StepChange::Initial`] and the
    /// timer is armed for the first step's duration.
    pub fn new(sequence: Sequence<L, I::Duration, N>, observer: O, time_source: &'t T) -> Self {
        let mut engine = Self {
            observer,
            time_source,
            sequence,
            active_index: 0,
            timer: OneShot::new(),
            state: EngineState::Running,
            advances: 0,
        };

        engine.arm(time_source.now());
        debug!(
            "cycle engine started with {=usize} steps",
            engine.sequence.len()
        );
        engine.notify(StepChange::Initial);
        engine
    }

    /// Validates `steps` and creates a running engine from them.
    ///
    /// # Errors
    /// Fails with the same errors as [`Sequence::from_steps`]; an empty slice
    /// is rejected with `EmptySequence`.
    pub fn from_steps(
        steps: &[Step<L, I::Duration>],
        observer: O,
        time_source: &'t T,
    ) -> Result<Self, SequenceError> {
        let sequence = Sequence::from_steps(steps)?;
        Ok(Self::new(sequence, observer, time_source))
    }

    /// Handles an engine action by dispatching to the appropriate method.
    pub fn handle_action(
        &mut self,
        action: EngineAction<L, I::Duration, N>,
    ) -> Result<(), EngineError> {
        match action {
            EngineAction::Reconfigure(sequence) => self.reconfigure(sequence),
            EngineAction::Dispose => {
                self.dispose();
                Ok(())
            }
        }
    }

    /// Services the engine, advancing at most one step.
    ///
    /// # Returns
    /// * `Ok(delay)` - Time to wait before servicing again
    /// * `Err(Disposed)` - The engine was torn down
    pub fn service(&mut self) -> Result<I::Duration, EngineError> {
        self.ensure_running()?;

        let now = self.time_source.now();
        if self.timer.poll(now) {
            self.advance(now);
        }

        Ok(self.timer.remaining(now).unwrap_or(I::Duration::ZERO))
    }

    /// Replaces the sequence while running.
    ///
    /// The pending timer is cancelled before anything else changes, the
    /// active index is wrapped into the new sequence's range, and a fresh
    /// timer is armed for the step found there. The observer is notified with
    /// [`StepChange::Reconfigured`].
    pub fn reconfigure(&mut self, sequence: Sequence<L, I::Duration, N>) -> Result<(), EngineError> {
        self.ensure_running()?;

        self.timer.cancel();
        self.sequence = sequence;
        self.active_index %= self.sequence.len();
        let now = self.time_source.now();
        self.arm(now);

        debug!(
            "cycle engine reconfigured: {=usize} steps, resuming at {=usize}",
            self.sequence.len(),
            self.active_index
        );
        self.notify(StepChange::Reconfigured);
        Ok(())
    }

    /// Tears the engine down, cancelling its pending timer.
    ///
    /// Safe to call more than once. After disposal no advance ever happens
    /// and [`service`](Self::service) returns `Err(Disposed)`.
    pub fn dispose(&mut self) {
        if self.state == EngineState::Disposed {
            return;
        }

        self.timer.cancel();
        self.state = EngineState::Disposed;
        debug!("cycle engine disposed after {=u64} advances", self.advances);
    }

    /// Returns the active step.
    #[inline]
    pub fn current_step(&self) -> &Step<L, I::Duration> {
        self.sequence.step_wrapping(self.active_index)
    }

    /// Returns the label of the active step.
    #[inline]
    pub fn current_label(&self) -> L {
        self.current_step().label
    }

    /// Returns the display rank of the active step, if it has one.
    #[inline]
    pub fn current_rank(&self) -> Option<u8> {
        self.current_step().rank
    }

    /// Returns the index of the active step within the sequence.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Returns the sequence being cycled.
    pub fn sequence(&self) -> &Sequence<L, I::Duration, N> {
        &self.sequence
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Returns true once the engine has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.state == EngineState::Disposed
    }

    /// Number of advances since creation. Reconfiguration does not count.
    pub fn advance_count(&self) -> u64 {
        self.advances
    }

    /// Time left on the pending timer, without servicing the engine.
    ///
    /// `None` after disposal.
    pub fn next_deadline_in(&self) -> Option<I::Duration> {
        self.timer.remaining(self.time_source.now())
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    fn ensure_running(&self) -> Result<(), EngineError> {
        match self.state {
            EngineState::Running => Ok(()),
            EngineState::Disposed => Err(EngineError::Disposed),
        }
    }

    fn advance(&mut self, now: I) {
        self.active_index = (self.active_index + 1) % self.sequence.len();
        self.advances += 1;
        self.arm(now);

        trace!(
            "advanced to step {=usize}, holding {=u64} ms",
            self.active_index,
            self.current_step().duration.as_millis()
        );
        self.notify(StepChange::Advanced);
    }

    fn arm(&mut self, now: I) {
        let duration = self.current_step().duration;
        self.timer.arm(now, duration);
    }

    fn notify(&mut self, change: StepChange) {
        let step = *self.sequence.step_wrapping(self.active_index);
        self.observer.on_step(&step, change);
    }
}
