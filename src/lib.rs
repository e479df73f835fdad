#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Step`**: A label, a duration, and an optional display rank
//! - **`Sequence`**: The ordered, looping list of steps driving a cycle
//! - **`CycleEngine`**: Tracks the active step and advances it on a single one-shot timer
//! - **`StepObserver`**: Trait to implement for whatever draws the lights
//! - **`OneShot`**: The cancellable deferred wake-up the engine re-arms for every step
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`DisplayOrder`**: Maps the active step onto visual light positions
//! - **`EngineAction`**: Commands that can be sent to control engines
//!
//! The engine never blocks. Call `service()` and wait for the returned delay
//! before calling it again; call `dispose()` when the view goes away.

// Must stay first so the logging macros are visible to every module.
mod fmt;

pub mod colors;
pub mod command;
pub mod display;
pub mod engine;
pub mod presets;
pub mod sequence;
pub mod time;
pub mod timer;
pub mod types;

pub use colors::{COLOR_OFF, LightColor};
pub use command::{EngineAction, EngineCommand};
pub use display::{DisplayError, DisplayOrder, Light, MatchMode};
pub use engine::{CycleEngine, EngineError, EngineState, StepChange, StepObserver};
pub use sequence::{Sequence, SequenceBuilder};
#[cfg(feature = "std")]
pub use time::StdClock;
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use timer::OneShot;
pub use types::{SequenceError, Step};

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;
