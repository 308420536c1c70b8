//! Simulation module
//!
//! All physics and command handling lives here. This module must stay pure:
//! - Fixed timestep only
//! - Positions derived from progress, never stored
//! - No rendering or platform dependencies

pub mod command;
pub mod forces;
pub mod geometry;
pub mod state;
pub mod tick;

pub use command::{Command, RunState, Step};
pub use forces::{Forces, compute_forces};
pub use geometry::InclineGeometry;
pub use state::{MotionState, SimulationParameters, SimulationState};
pub use tick::{Flow, Simulation, Snapshot, StepSizes, TickInput, TickReport};
