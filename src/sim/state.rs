//! Simulation state and parameter mutators
//!
//! `progress` is the only stored position; pixel positions are derived from
//! the incline geometry on demand.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::forces::Forces;
use super::geometry::InclineGeometry;
use crate::consts::*;
use crate::snap_to_step;

/// User-adjustable physical parameters (always within their valid ranges)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    mass: f32,
    angle: f32,
    friction: f32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::new(10.0, 30.0, 0.2)
    }
}

impl SimulationParameters {
    /// Create parameters, clamping each into its range
    pub fn new(mass: f32, angle: f32, friction: f32) -> Self {
        let mut params = Self {
            mass: MASS_MIN,
            angle: ANGLE_MIN,
            friction: FRICTION_MIN,
        };
        params.set_mass(mass);
        params.set_angle(angle);
        params.set_friction(friction);
        params
    }

    /// Mass (kg)
    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Incline angle (degrees)
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Friction coefficient
    #[inline]
    pub fn friction(&self) -> f32 {
        self.friction
    }

    pub fn set_mass(&mut self, mass: f32) {
        self.mass = clamp_or(mass, MASS_MIN, MASS_MAX, self.mass);
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = clamp_or(angle, ANGLE_MIN, ANGLE_MAX, self.angle);
    }

    pub fn set_friction(&mut self, friction: f32) {
        self.friction = clamp_or(friction, FRICTION_MIN, FRICTION_MAX, self.friction);
    }

    /// Apply a signed mass delta, clamped to range
    pub fn adjust_mass(&mut self, delta: f32) {
        self.set_mass(self.mass + delta);
    }

    /// Apply a signed angle delta, clamped to range
    pub fn adjust_angle(&mut self, delta: f32) {
        self.set_angle(self.angle + delta);
    }

    /// Apply a signed friction delta, clamped to range
    ///
    /// Results that land on the delta's grid are snapped to it, so repeated
    /// steps reach 0 and 1 exactly.
    pub fn adjust_friction(&mut self, delta: f32) {
        self.set_friction(snap_to_step(self.friction + delta, delta.abs()));
    }

    pub fn increase_mass(&mut self) {
        self.adjust_mass(MASS_STEP);
    }

    pub fn decrease_mass(&mut self) {
        self.adjust_mass(-MASS_STEP);
    }

    pub fn increase_angle(&mut self) {
        self.adjust_angle(ANGLE_STEP);
    }

    pub fn decrease_angle(&mut self) {
        self.adjust_angle(-ANGLE_STEP);
    }

    pub fn increase_friction(&mut self) {
        self.adjust_friction(FRICTION_STEP);
    }

    pub fn decrease_friction(&mut self) {
        self.adjust_friction(-FRICTION_STEP);
    }
}

/// Clamp into `[min, max]`; NaN keeps the previous value
fn clamp_or(value: f32, min: f32, max: f32, previous: f32) -> f32 {
    if value.is_nan() {
        previous
    } else {
        value.clamp(min, max)
    }
}

/// Motion of the block along the incline
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MotionState {
    /// Signed speed along the incline (m/s)
    pub velocity: f32,
    /// Normalized position, 0 = top, 1 = bottom
    pub progress: f32,
}

impl MotionState {
    /// True once the block has reached the bottom
    #[inline]
    pub fn at_bottom(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Parameters, geometry and motion advanced together at a fixed timestep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    pub params: SimulationParameters,
    pub geometry: InclineGeometry,
    pub motion: MotionState,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(SimulationParameters::default(), InclineGeometry::default())
    }
}

impl SimulationState {
    pub fn new(params: SimulationParameters, geometry: InclineGeometry) -> Self {
        Self {
            params,
            geometry,
            motion: MotionState::default(),
        }
    }

    /// Return the block to the top, at rest. Parameters are kept.
    pub fn reset(&mut self) {
        self.motion = MotionState::default();
    }

    /// Current force balance
    pub fn forces(&self) -> Forces {
        self.params.forces()
    }

    /// Screen position of the block center, derived from progress
    pub fn position(&self) -> Vec2 {
        self.geometry.point_at(self.motion.progress)
    }

    /// Advance one semi-implicit Euler step of `dt` seconds
    ///
    /// Returns true if this step brought the block to the bottom.
    pub fn step(&mut self, dt: f32) -> bool {
        if self.motion.at_bottom() {
            self.motion.velocity = 0.0;
            return false;
        }

        let acceleration = self.forces().acceleration;
        self.motion.velocity += acceleration * dt;
        let displacement = self.motion.velocity * dt;

        let length = self.geometry.length();
        let increment = if length > f32::EPSILON {
            displacement / length
        } else {
            // Zero-length ramp: there is nowhere to slide
            1.0
        };
        self.motion.progress = (self.motion.progress + increment).min(1.0);

        if self.motion.at_bottom() {
            self.motion.progress = 1.0;
            self.motion.velocity = 0.0;
            return true;
        }
        false
    }
}
