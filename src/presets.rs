//! Stock stoplight sequences.
//!
//! Every preset is generic over the duration type, so the same sequences run
//! on `embassy_time::Duration`, `core::time::Duration` or a test duration.

use crate::colors::LightColor::{self, Green, Off, Purple, Red, Yellow};
use crate::sequence::Sequence;
use crate::time::TimeDuration;
use crate::types::{SequenceError, Step};

/// Capacity used by the presets.
pub const PRESET_CAPACITY: usize = 4;

/// A stoplight sequence sized for the presets.
pub type StoplightSequence<D> = Sequence<LightColor, D, PRESET_CAPACITY>;

/// Visual positions of a four-light stoplight, top to bottom.
pub const DEFAULT_DISPLAY_ORDER: [LightColor; 4] = [Red, Yellow, Green, Purple];

fn ms<D: TimeDuration>(millis: u64) -> D {
    D::from_millis(millis)
}

/// Green for 5 s, yellow for 1 s, red for 2 s.
pub fn classic<D: TimeDuration>() -> Result<StoplightSequence<D>, SequenceError> {
    Sequence::from_steps(&[
        Step::new(Green, ms(5000)),
        Step::new(Yellow, ms(1000)),
        Step::new(Red, ms(2000)),
    ])
}

/// Green, yellow, red, purple, one second each, ranked for
/// [`DEFAULT_DISPLAY_ORDER`].
pub fn four_way<D: TimeDuration>() -> Result<StoplightSequence<D>, SequenceError> {
    Sequence::from_steps(&[
        Step::ranked(Green, ms(1000), 2),
        Step::ranked(Yellow, ms(1000), 1),
        Step::ranked(Red, ms(1000), 0),
        Step::ranked(Purple, ms(1000), 3),
    ])
}

/// Purple, yellow, green, red, one second each, ranked top to bottom in
/// cycle order.
pub fn cascade<D: TimeDuration>() -> Result<StoplightSequence<D>, SequenceError> {
    Sequence::from_steps(&[
        Step::ranked(Purple, ms(1000), 0),
        Step::ranked(Yellow, ms(1000), 1),
        Step::ranked(Green, ms(1000), 2),
        Step::ranked(Red, ms(1000), 3),
    ])
}

/// Red on for one second, then off for one second. The off step has no rank,
/// so no light is lit while it is active.
pub fn blink<D: TimeDuration>() -> Result<StoplightSequence<D>, SequenceError> {
    Sequence::from_steps(&[Step::ranked(Red, ms(1000), 0), Step::new(Off, ms(1000))])
}

/// Four red steps ranked 0 to 3: a single red light running down a column of
/// red lights.
pub fn red_chase<D: TimeDuration>() -> Result<StoplightSequence<D>, SequenceError> {
    Sequence::from_steps(&[
        Step::ranked(Red, ms(1000), 0),
        Step::ranked(Red, ms(1000), 1),
        Step::ranked(Red, ms(1000), 2),
        Step::ranked(Red, ms(1000), 3),
    ])
}
