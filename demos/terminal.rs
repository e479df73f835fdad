//! Draws a stoplight in the terminal and cycles it for a few rounds.
//!
//! Run with `cargo run --example terminal --features std`.

use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use stoplight_cycle::presets::{self, DEFAULT_DISPLAY_ORDER};
use stoplight_cycle::{
    CycleEngine, DisplayOrder, LightColor, Srgb, StdClock, Step, StepChange, StepObserver,
};

const ROUNDS: u64 = 2;

/// Redraws the whole stoplight on every step change.
struct TerminalStoplight {
    display: DisplayOrder<LightColor, 4>,
}

impl TerminalStoplight {
    fn draw(&self, step: &Step<LightColor, Duration>) {
        let mut out = std::io::stdout().lock();
        let _ = write!(out, "\r");
        for light in self.display.lights(step) {
            let (r, g, b) = to_rgb8(light.color());
            let _ = write!(out, "\x1b[38;2;{r};{g};{b}m\u{25cf}\x1b[0m ");
        }
        let _ = write!(out, " {:<8}", step.label);
        let _ = out.flush();
    }
}

impl StepObserver<LightColor, Duration> for TerminalStoplight {
    fn on_step(&mut self, step: &Step<LightColor, Duration>, _change: StepChange) {
        self.draw(step);
    }
}

fn to_rgb8(color: Srgb) -> (u8, u8, u8) {
    let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    (to_u8(color.red), to_u8(color.green), to_u8(color.blue))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let clock = StdClock::new();
    let sequence = presets::classic::<Duration>()?;
    let cycle = sequence.cycle_duration();
    let observer = TerminalStoplight {
        display: DisplayOrder::new(&DEFAULT_DISPLAY_ORDER)?,
    };

    let mut engine = CycleEngine::<_, Instant, _, _, { presets::PRESET_CAPACITY }>::new(
        sequence, observer, &clock,
    );

    let started = Instant::now();
    while started.elapsed() < cycle * ROUNDS as u32 {
        let delay = engine.service()?;
        thread::sleep(delay);
    }

    engine.dispose();
    println!();
    println!("{} transitions", engine.advance_count());
    Ok(())
}
