//! Integration tests for routing EngineCommands to several stoplights

mod common;
use common::*;

use stoplight_cycle::LightColor::{Green, Off, Purple, Red, Yellow};
use stoplight_cycle::{EngineAction, EngineCommand, EngineError, EngineState, StepChange};

type TestCommand = EngineCommand<usize, stoplight_cycle::LightColor, TestDuration, 8>;

/// Five stoplights on one clock, each with its own sequence
fn street(timer: &MockTimeSource) -> [TestEngine<'_>; 5] {
    [
        engine(&[(Green, 5000), (Yellow, 1000), (Red, 2000)], timer),
        engine(&[(Red, 500), (Off, 500)], timer),
        engine(&[(Green, 3000), (Yellow, 1000), (Red, 3000), (Purple, 1000)], timer),
        engine(&[(Red, 1000)], timer),
        engine(&[(Yellow, 250), (Off, 250)], timer),
    ]
}

fn route(engines: &mut [TestEngine<'_>], command: TestCommand) -> Result<(), EngineError> {
    engines[command.light_id].handle_action(command.action)
}

/// Moves the clock forward and services every engine still running
fn tick_all(engines: &mut [TestEngine<'_>], timer: &MockTimeSource, millis: u64) {
    timer.advance(millis);
    for engine in engines.iter_mut().filter(|e| !e.is_disposed()) {
        engine.service().unwrap();
    }
}

#[test]
fn reconfigure_reaches_only_the_addressed_light() {
    let timer = MockTimeSource::new();
    let mut engines = street(&timer);

    let command = EngineCommand::new(
        2,
        EngineAction::Reconfigure(sequence(&[(Purple, 100), (Off, 100)])),
    );
    route(&mut engines, command).unwrap();

    assert_eq!(engines[2].sequence().len(), 2);
    assert_eq!(engines[2].current_label(), Purple);
    assert_eq!(
        engines[2].observer().history().last(),
        Some(&(Purple, StepChange::Reconfigured))
    );
    for (id, engine) in engines.iter().enumerate().filter(|(id, _)| *id != 2) {
        assert_eq!(engine.observer().history().len(), 1, "light {id}");
    }

    tick_all(&mut engines, &timer, 100);
    assert_eq!(engines[2].current_label(), Off);
    assert_eq!(engines[0].current_label(), Green);
    assert_eq!(engines[3].current_label(), Red);
}

#[test]
fn dispose_stops_one_light_while_the_rest_keep_cycling() {
    let timer = MockTimeSource::new();
    let mut engines = street(&timer);

    route(&mut engines, EngineCommand::new(1, EngineAction::Dispose)).unwrap();
    route(&mut engines, EngineCommand::new(4, EngineAction::Dispose)).unwrap();

    for _ in 0..10 {
        tick_all(&mut engines, &timer, 500);
    }

    assert_eq!(engines[1].state(), EngineState::Disposed);
    assert_eq!(engines[1].advance_count(), 0);
    assert_eq!(engines[1].service(), Err(EngineError::Disposed));
    assert_eq!(engines[4].advance_count(), 0);

    // 5000 ms in: light 0 just turned yellow, light 3 re-armed five times.
    assert_eq!(engines[0].current_label(), Yellow);
    assert_eq!(engines[2].current_label(), Red);
    assert_eq!(engines[3].advance_count(), 5);
}

#[test]
fn commands_to_a_disposed_light_report_the_error() {
    let timer = MockTimeSource::new();
    let mut engines = street(&timer);

    route(&mut engines, EngineCommand::new(0, EngineAction::Dispose)).unwrap();
    // Disposing twice is harmless.
    route(&mut engines, EngineCommand::new(0, EngineAction::Dispose)).unwrap();

    let result = route(
        &mut engines,
        EngineCommand::new(0, EngineAction::Reconfigure(sequence(&[(Red, 10)]))),
    );
    assert_eq!(result, Err(EngineError::Disposed));
    assert_eq!(engines[0].sequence().len(), 3);
    assert_eq!(engines[1].state(), EngineState::Running);
}

#[test]
fn command_carries_id_and_action() {
    let command: TestCommand = EngineCommand::new(3, EngineAction::Dispose);
    assert_eq!(command.light_id, 3);
    assert!(matches!(command.action, EngineAction::Dispose));
}
