//! Simulator settings
//!
//! Loaded from JSON on native builds; the web build uses defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::Result;
use crate::sim::{InclineGeometry, Simulation, SimulationParameters, SimulationState, StepSizes};

/// Startup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Initial parameters ===
    /// Mass at startup (kg)
    pub initial_mass: f32,
    /// Incline angle at startup (degrees)
    pub initial_angle: f32,
    /// Friction coefficient at startup
    pub initial_friction: f32,

    // === Button steps ===
    pub mass_step: f32,
    pub angle_step: f32,
    pub friction_step: f32,

    // === Loop ===
    /// Control loop pacing rate (the physics dt stays fixed)
    pub tick_rate_hz: u32,

    // === Display ===
    /// Pixels per newton for force arrows
    pub force_arrow_scale: f32,
    pub show_force_vectors: bool,
    pub show_readouts: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_mass: 10.0,
            initial_angle: 30.0,
            initial_friction: 0.2,

            mass_step: MASS_STEP,
            angle_step: ANGLE_STEP,
            friction_step: FRICTION_STEP,

            tick_rate_hz: TICK_RATE_HZ,

            force_arrow_scale: 0.5,
            show_force_vectors: true,
            show_readouts: true,
        }
    }
}

impl Settings {
    /// Parse a (possibly partial) JSON document; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.validated())
    }

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Clamp initial values into range and replace unusable steps with defaults
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        let params = self.initial_parameters();
        if params.mass() != self.initial_mass {
            log::warn!("initial_mass {} clamped to {}", self.initial_mass, params.mass());
            self.initial_mass = params.mass();
        }
        if params.angle() != self.initial_angle {
            log::warn!("initial_angle {} clamped to {}", self.initial_angle, params.angle());
            self.initial_angle = params.angle();
        }
        if params.friction() != self.initial_friction {
            log::warn!(
                "initial_friction {} clamped to {}",
                self.initial_friction,
                params.friction()
            );
            self.initial_friction = params.friction();
        }

        for (name, value, default) in [
            ("mass_step", &mut self.mass_step, defaults.mass_step),
            ("angle_step", &mut self.angle_step, defaults.angle_step),
            ("friction_step", &mut self.friction_step, defaults.friction_step),
            ("force_arrow_scale", &mut self.force_arrow_scale, defaults.force_arrow_scale),
        ] {
            if !(value.is_finite() && *value > 0.0) {
                log::warn!("{} {} is not positive, using {}", name, value, default);
                *value = default;
            }
        }

        if self.tick_rate_hz == 0 {
            log::warn!("tick_rate_hz 0 is invalid, using {}", defaults.tick_rate_hz);
            self.tick_rate_hz = defaults.tick_rate_hz;
        }

        self
    }

    /// Starting parameters (clamped)
    pub fn initial_parameters(&self) -> SimulationParameters {
        SimulationParameters::new(self.initial_mass, self.initial_angle, self.initial_friction)
    }

    pub fn step_sizes(&self) -> StepSizes {
        StepSizes {
            mass: self.mass_step,
            angle: self.angle_step,
            friction: self.friction_step,
        }
    }

    /// Fresh simulation at the top of the default incline
    pub fn build_simulation(&self) -> Simulation {
        Simulation::new(
            SimulationState::new(self.initial_parameters(), InclineGeometry::default()),
            self.step_sizes(),
        )
    }
}
