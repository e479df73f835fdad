//! Shared test infrastructure for stoplight-cycle integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use stoplight_cycle::{
    CycleEngine, LightColor, Sequence, Step, StepChange, StepObserver, TimeDuration, TimeInstant,
    TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, millis: u64) {
        self.current_time.set(TestInstant(millis));
    }

    pub fn millis(&self) -> u64 {
        self.current_time.get().0
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Recording Observer
// ============================================================================

/// Observer that records every notification for testing
pub struct RecordingObserver {
    history: heapless::Vec<(LightColor, StepChange), 64>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self {
            history: heapless::Vec::new(),
        }
    }

    pub fn history(&self) -> &[(LightColor, StepChange)] {
        &self.history
    }

    pub fn labels(&self) -> heapless::Vec<LightColor, 64> {
        self.history.iter().map(|(label, _)| *label).collect()
    }

    pub fn count(&self, change: StepChange) -> usize {
        self.history.iter().filter(|(_, c)| *c == change).count()
    }
}

impl StepObserver<LightColor, TestDuration> for RecordingObserver {
    fn on_step(&mut self, step: &Step<LightColor, TestDuration>, change: StepChange) {
        let _ = self.history.push((step.label, change));
    }
}

// ============================================================================
// Test Helper Types and Functions
// ============================================================================

pub type TestSequence = Sequence<LightColor, TestDuration, 8>;

pub type TestEngine<'t> =
    CycleEngine<'t, LightColor, TestInstant, RecordingObserver, MockTimeSource, 8>;

/// Builds a sequence from `(label, millis)` pairs
pub fn sequence(steps: &[(LightColor, u64)]) -> TestSequence {
    let mut builder = TestSequence::builder();
    for &(label, millis) in steps {
        builder = builder.step(label, TestDuration(millis)).unwrap();
    }
    builder.build().unwrap()
}

/// Creates an engine recording its notifications
pub fn engine<'t>(steps: &[(LightColor, u64)], timer: &'t MockTimeSource) -> TestEngine<'t> {
    TestEngine::new(sequence(steps), RecordingObserver::new(), timer)
}

/// Moves the clock forward and services the engine once
pub fn tick(engine: &mut TestEngine<'_>, timer: &MockTimeSource, millis: u64) -> TestDuration {
    timer.advance(millis);
    engine.service().unwrap()
}

/// Services the engine exactly at each deadline until `until` milliseconds
///
/// Mirrors a driver that sleeps for the delay returned by `service()`.
pub fn run_until(engine: &mut TestEngine<'_>, timer: &MockTimeSource, until: u64) {
    loop {
        let delay = engine.service().unwrap().0;
        let next = timer.millis() + delay;
        if next > until {
            timer.set_time(until);
            engine.service().unwrap();
            return;
        }
        timer.set_time(next);
    }
}
