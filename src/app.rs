//! Application context and the fixed-rate control loop
//!
//! `AppContext` is built once at startup and owns everything a tick touches:
//! the simulation, the run state, the button table and the settings.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::platform::Frontend;
use crate::renderer::SceneOptions;
use crate::settings::Settings;
use crate::sim::{Command, Flow, Simulation, Snapshot, TickInput, TickReport};
use crate::ui::{ButtonLayout, InputEvent, translate_all};

/// State shared by every tick of one session
#[derive(Debug, Clone)]
pub struct AppContext {
    pub sim: Simulation,
    pub buttons: ButtonLayout,
    pub settings: Settings,
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl AppContext {
    pub fn new(settings: Settings) -> Self {
        Self {
            sim: settings.build_simulation(),
            buttons: ButtonLayout::standard(),
            settings,
        }
    }

    /// Apply a single command outside of a tick
    pub fn apply(&mut self, command: Command) -> Flow {
        self.sim.apply(command)
    }

    /// Translate this tick's events, apply them, then step if running
    pub fn tick(&mut self, events: &[InputEvent]) -> TickReport {
        let commands = translate_all(events, &self.buttons);
        self.sim.tick(&TickInput::new(commands))
    }

    pub fn snapshot(&self) -> Snapshot {
        self.sim.snapshot()
    }

    pub fn scene_options(&self) -> SceneOptions {
        SceneOptions::from(&self.settings)
    }
}

/// Totals for a finished session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Ticks processed, including the one that quit
    pub ticks: u64,
    /// Ticks that advanced the physics
    pub steps: u64,
    pub final_snapshot: Snapshot,
}

/// Run the control loop until a quit command
///
/// Per tick: poll events, apply them, step if running, render, wait.
pub fn run<F: Frontend>(ctx: &mut AppContext, frontend: &mut F) -> Result<RunSummary> {
    log::info!(
        "Control loop starting (mass {} kg, angle {}°, friction {:.2})",
        ctx.sim.state.params.mass(),
        ctx.sim.state.params.angle(),
        ctx.sim.state.params.friction()
    );

    let mut steps = 0;
    loop {
        let events = frontend.poll_events();
        let report = ctx.tick(&events);
        if report.flow == Flow::Quit {
            log::info!("Quit at tick {}", ctx.sim.tick_count);
            break;
        }
        if report.stepped {
            steps += 1;
        }

        frontend.render(&ctx.snapshot(), &ctx.buttons)?;
        frontend.wait_for_next_tick();
    }

    Ok(RunSummary {
        ticks: ctx.sim.tick_count,
        steps,
        final_snapshot: ctx.snapshot(),
    })
}
