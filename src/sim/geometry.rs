//! Incline geometry in screen space
//!
//! The incline is a fixed segment from `start` (top, progress 0) to `end`
//! (bottom, progress 1). Positions along it are always derived from progress.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{INCLINE_BOTTOM, INCLINE_TOP};
use crate::lerp_point;

/// A straight ramp between two screen-space points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InclineGeometry {
    start: Vec2,
    end: Vec2,
    length: f32,
    direction: Vec2,
}

impl Default for InclineGeometry {
    fn default() -> Self {
        Self::new(
            Vec2::new(INCLINE_TOP.0, INCLINE_TOP.1),
            Vec2::new(INCLINE_BOTTOM.0, INCLINE_BOTTOM.1),
        )
    }
}

impl InclineGeometry {
    /// Build from the top and bottom endpoints
    pub fn new(start: Vec2, end: Vec2) -> Self {
        let delta = end - start;
        Self {
            start,
            end,
            length: delta.length(),
            direction: delta.normalize_or_zero(),
        }
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Vec2 {
        self.end
    }

    /// Length of the ramp (pixels)
    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Unit vector pointing downhill
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Unit normal pointing away from the ramp surface (screen up-side)
    pub fn surface_normal(&self) -> Vec2 {
        // Screen y grows downward; pick the perpendicular with negative y.
        let n = self.direction.perp();
        if n.y > 0.0 { -n } else { n }
    }

    /// Screen position for a progress value in [0, 1]
    pub fn point_at(&self, progress: f32) -> Vec2 {
        lerp_point(self.start, self.end, progress.clamp(0.0, 1.0))
    }
}
