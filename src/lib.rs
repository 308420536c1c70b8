//! Incline Sim - a block sliding down a frictioned incline
//!
//! Core modules:
//! - `sim`: Pure simulation (forces, motion along the incline, per-tick commands)
//! - `ui`: Fixed button hit-rectangles and key bindings
//! - `renderer`: Scene description, tessellation and the WebGPU pipeline
//! - `platform`: Frontend abstraction, frame pacing, headless driver
//! - `app`: Application context and the fixed-rate control loop

pub mod app;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use app::{AppContext, RunSummary, run};
pub use error::{AppError, Result};
pub use settings::Settings;

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one step per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Default control loop rate
    pub const TICK_RATE_HZ: u32 = 60;

    /// Gravitational acceleration (m/s²)
    pub const GRAVITY: f32 = 9.8;

    /// Canvas dimensions (pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Incline endpoints: top-right to bottom-left
    pub const INCLINE_TOP: (f32, f32) = (CANVAS_WIDTH - 100.0, 100.0);
    pub const INCLINE_BOTTOM: (f32, f32) = (200.0, CANVAS_HEIGHT - 100.0);

    /// Mass range (kg)
    pub const MASS_MIN: f32 = 1.0;
    pub const MASS_MAX: f32 = 100.0;
    /// Angle range (degrees). Upper bound stays below 85 with whole-degree steps.
    pub const ANGLE_MIN: f32 = 0.0;
    pub const ANGLE_MAX: f32 = 84.0;
    /// Friction coefficient range
    pub const FRICTION_MIN: f32 = 0.0;
    pub const FRICTION_MAX: f32 = 1.0;

    /// Button step sizes
    pub const MASS_STEP: f32 = 1.0;
    pub const ANGLE_STEP: f32 = 1.0;
    pub const FRICTION_STEP: f32 = 0.05;

    /// Side length of the sliding block (pixels)
    pub const BLOCK_SIZE: f32 = 20.0;
}

/// Linear interpolation between two points
#[inline]
pub fn lerp_point(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// Snap `value` onto the multiples of `step` when it sits within float error
/// of one. Off-grid values, and steps that do not divide 1, pass through.
pub fn snap_to_step(value: f32, step: f32) -> f32 {
    if !(step.is_finite() && step > 0.0) {
        return value;
    }
    let per_unit = (1.0 / step).round();
    if per_unit < 1.0 || (step * per_unit - 1.0).abs() > 1e-4 {
        return value;
    }
    let units = value * per_unit;
    if (units - units.round()).abs() < 1e-3 {
        units.round() / per_unit
    } else {
        value
    }
}
