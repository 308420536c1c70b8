//! Fixed timestep simulation tick
//!
//! One tick applies every pending command in arrival order, then (if running)
//! advances the physics by exactly one `SIM_DT` step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::command::{Command, RunState};
use super::forces::Forces;
use super::geometry::InclineGeometry;
use super::state::{MotionState, SimulationParameters, SimulationState};
use crate::consts::*;

/// Commands gathered for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }
}

/// Whether the control loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub flow: Flow,
    /// Physics advanced this tick
    pub stepped: bool,
    /// Block reached the bottom this tick
    pub arrived: bool,
}

/// Per-button adjustment sizes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepSizes {
    pub mass: f32,
    pub angle: f32,
    pub friction: f32,
}

impl Default for StepSizes {
    fn default() -> Self {
        Self {
            mass: MASS_STEP,
            angle: ANGLE_STEP,
            friction: FRICTION_STEP,
        }
    }
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    /// Simulated seconds since the last reset
    pub elapsed: f32,
    pub run_state: RunState,
    pub params: SimulationParameters,
    pub motion: MotionState,
    /// Block center in canvas pixels
    pub position: Vec2,
    pub forces: Forces,
    pub geometry: InclineGeometry,
}

/// Simulation state plus run state and counters
#[derive(Debug, Clone)]
pub struct Simulation {
    pub state: SimulationState,
    pub run_state: RunState,
    pub steps: StepSizes,
    /// Ticks processed (paused or not)
    pub tick_count: u64,
    /// Physics steps taken since the last reset
    pub steps_since_reset: u64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationState::default(), StepSizes::default())
    }
}

impl Simulation {
    pub fn new(state: SimulationState, steps: StepSizes) -> Self {
        Self {
            state,
            run_state: RunState::Running,
            steps,
            tick_count: 0,
            steps_since_reset: 0,
        }
    }

    /// Simulated seconds since the last reset
    pub fn elapsed(&self) -> f32 {
        self.steps_since_reset as f32 * SIM_DT
    }

    /// Capture the current state for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick_count,
            elapsed: self.elapsed(),
            run_state: self.run_state,
            params: self.state.params,
            motion: self.state.motion,
            position: self.state.position(),
            forces: self.state.forces(),
            geometry: self.state.geometry,
        }
    }

    /// Apply one command. Valid in both run states; only `TogglePause` changes run state.
    pub fn apply(&mut self, command: Command) -> Flow {
        log::debug!("command: {}", command.as_str());
        let steps = self.steps;
        match command {
            Command::AdjustMass(step) => self.state.params.adjust_mass(steps.mass * step.sign()),
            Command::AdjustAngle(step) => self.state.params.adjust_angle(steps.angle * step.sign()),
            Command::AdjustFriction(step) => {
                self.state.params.adjust_friction(steps.friction * step.sign())
            }
            Command::Reset => {
                self.state.reset();
                self.steps_since_reset = 0;
                log::info!("Simulation reset");
            }
            Command::TogglePause => {
                self.run_state = self.run_state.toggled();
                log::info!("Run state: {:?}", self.run_state);
            }
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Advance by one tick
    pub fn tick(&mut self, input: &TickInput) -> TickReport {
        self.tick_count += 1;

        for &command in &input.commands {
            if self.apply(command) == Flow::Quit {
                return TickReport {
                    flow: Flow::Quit,
                    stepped: false,
                    arrived: false,
                };
            }
        }

        if !self.run_state.is_running() {
            return TickReport {
                flow: Flow::Continue,
                stepped: false,
                arrived: false,
            };
        }

        let arrived = self.state.step(SIM_DT);
        if !self.state.motion.at_bottom() || arrived {
            self.steps_since_reset += 1;
        }
        if arrived {
            log::info!("Block reached the bottom after {:.2}s", self.elapsed());
        }

        TickReport {
            flow: Flow::Continue,
            stepped: true,
            arrived,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::command::Step;

    #[test]
    fn test_tick_running_advances() {
        let mut sim = Simulation::default();
        let report = sim.tick(&TickInput::default());
        assert_eq!(report.flow, Flow::Continue);
        assert!(report.stepped);
        assert!(sim.state.motion.velocity > 0.0);
        assert_eq!(sim.tick_count, 1);
    }

    #[test]
    fn test_tick_pause() {
        let mut sim = Simulation::default();
        sim.tick(&TickInput::default());

        let pause = TickInput::new(vec![Command::TogglePause]);
        let report = sim.tick(&pause);
        assert!(!report.stepped);
        assert_eq!(sim.run_state, RunState::Paused);

        let frozen = sim.state.motion;
        for _ in 0..10 {
            sim.tick(&TickInput::default());
        }
        assert_eq!(sim.state.motion, frozen);

        // Unpause and step in the same tick
        let report = sim.tick(&pause);
        assert!(report.stepped);
        assert_eq!(sim.run_state, RunState::Running);
        assert!(sim.state.motion.progress > frozen.progress);
    }

    #[test]
    fn test_commands_valid_while_paused() {
        let mut sim = Simulation::default();
        sim.tick(&TickInput::new(vec![Command::TogglePause]));
        sim.tick(&TickInput::new(vec![
            Command::AdjustMass(Step::Up),
            Command::AdjustAngle(Step::Down),
            Command::AdjustFriction(Step::Up),
        ]));
        let params = sim.state.params;
        assert_eq!(params.mass(), 11.0);
        assert_eq!(params.angle(), 29.0);
        assert_eq!(params.friction(), 0.25);
        assert_eq!(sim.run_state, RunState::Paused);
    }

    #[test]
    fn test_commands_apply_before_step() {
        // Angle drops to zero in the same tick: the step must see the new angle
        let mut sim = Simulation::new(
            SimulationState::new(
                SimulationParameters::new(10.0, 1.0, 0.0),
                Default::default(),
            ),
            StepSizes::default(),
        );
        let report = sim.tick(&TickInput::new(vec![Command::AdjustAngle(Step::Down)]));
        assert!(report.stepped);
        assert_eq!(sim.state.motion, MotionState::default());
    }

    #[test]
    fn test_reset_keeps_parameters_and_run_state() {
        let mut sim = Simulation::default();
        for _ in 0..100 {
            sim.tick(&TickInput::default());
        }
        sim.tick(&TickInput::new(vec![
            Command::AdjustMass(Step::Up),
            Command::TogglePause,
            Command::Reset,
        ]));
        assert_eq!(sim.state.motion, MotionState::default());
        assert_eq!(sim.state.params.mass(), 11.0);
        assert_eq!(sim.run_state, RunState::Paused);
        assert_eq!(sim.steps_since_reset, 0);
    }

    #[test]
    fn test_quit_stops_processing() {
        let mut sim = Simulation::default();
        let report = sim.tick(&TickInput::new(vec![
            Command::Quit,
            Command::AdjustMass(Step::Up),
        ]));
        assert_eq!(report.flow, Flow::Quit);
        assert!(!report.stepped);
        assert_eq!(sim.state.params.mass(), 10.0);
        assert_eq!(sim.state.motion, MotionState::default());
    }

    #[test]
    fn test_arrival_reported_once() {
        let mut sim = Simulation::new(
            SimulationState::new(
                SimulationParameters::new(10.0, 80.0, 0.0),
                Default::default(),
            ),
            StepSizes::default(),
        );
        let mut arrivals = 0;
        for _ in 0..60 * 30 {
            if sim.tick(&TickInput::default()).arrived {
                arrivals += 1;
            }
        }
        assert_eq!(arrivals, 1);
        assert!(sim.state.motion.at_bottom());
        let steps = sim.steps_since_reset;
        sim.tick(&TickInput::default());
        assert_eq!(sim.steps_since_reset, steps);
    }

    #[test]
    fn test_custom_step_sizes() {
        let mut sim = Simulation::new(
            SimulationState::default(),
            StepSizes {
                mass: 5.0,
                angle: 10.0,
                friction: 0.1,
            },
        );
        sim.apply(Command::AdjustMass(Step::Up));
        sim.apply(Command::AdjustAngle(Step::Up));
        sim.apply(Command::AdjustFriction(Step::Down));
        assert_eq!(sim.state.params.mass(), 15.0);
        assert_eq!(sim.state.params.angle(), 40.0);
        assert_eq!(sim.state.params.friction(), 0.1);
    }

    #[test]
    fn test_fine_friction_step_moves_value() {
        let mut sim = Simulation::new(
            SimulationState::default(),
            StepSizes {
                friction: 0.001,
                ..Default::default()
            },
        );
        let before = sim.state.params.friction();
        for _ in 0..10 {
            sim.apply(Command::AdjustFriction(Step::Up));
        }
        assert!(sim.state.params.friction() > before);
        assert_eq!(sim.state.params.friction(), 0.21);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut sim = Simulation::default();
        for _ in 0..60 {
            sim.tick(&TickInput::default());
        }
        let snap = sim.snapshot();
        assert_eq!(snap.tick, 60);
        assert!((snap.elapsed - 1.0).abs() < 1e-4);
        assert_eq!(snap.run_state, RunState::Running);
        assert_eq!(snap.motion, sim.state.motion);
        assert_eq!(snap.position, sim.state.geometry.point_at(snap.motion.progress));
        assert_eq!(snap.forces, sim.state.params.forces());
    }
}
