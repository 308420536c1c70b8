//! Force balance for a block resting on a frictioned incline
//!
//! ```text
//!   weight   = m * g
//!   normal   = weight * cos(θ)
//!   parallel = weight * sin(θ)
//!   friction = μ * normal
//!   net      = parallel - friction
//!   accel    = net / m   (0 when net <= 0: no sliding back uphill)
//! ```

use serde::{Deserialize, Serialize};

use super::state::SimulationParameters;
use crate::consts::GRAVITY;

/// Forces acting on the block for one set of parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Forces {
    /// Weight (N)
    pub weight: f32,
    /// Normal force from the incline surface (N)
    pub normal: f32,
    /// Friction force opposing the slide (N)
    pub friction: f32,
    /// Gravity component along the incline (N)
    pub parallel: f32,
    /// Parallel minus friction (N), may be negative
    pub net: f32,
    /// Acceleration along the incline (m/s², never negative)
    pub acceleration: f32,
}

impl Forces {
    /// True when gravity overcomes friction and the block slides
    pub fn is_sliding(&self) -> bool {
        self.net > 0.0
    }
}

/// Compute the force balance for `(mass, angle_degrees, friction)`
///
/// Pure; callable while paused for display.
pub fn compute_forces(mass: f32, angle_degrees: f32, friction: f32) -> Forces {
    let angle_rad = angle_degrees.to_radians();
    let weight = mass * GRAVITY;
    let normal = weight * angle_rad.cos();
    let parallel = weight * angle_rad.sin();
    let friction_force = friction * normal;
    let net = parallel - friction_force;

    let acceleration = if net > 0.0 { net / mass } else { 0.0 };

    Forces {
        weight,
        normal,
        friction: friction_force,
        parallel,
        net,
        acceleration,
    }
}

impl SimulationParameters {
    /// Force balance for the current parameters
    pub fn forces(&self) -> Forces {
        compute_forces(self.mass(), self.angle(), self.friction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    fn close(a: f32, b: f32, tol: f32) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_reference_scenario() {
        let f = compute_forces(10.0, 30.0, 0.2);
        assert!(close(f.normal, 84.87, 0.01), "normal {}", f.normal);
        assert!(close(f.parallel, 49.0, 0.01), "parallel {}", f.parallel);
        assert!(close(f.friction, 16.97, 0.01), "friction {}", f.friction);
        assert!(close(f.acceleration, 3.203, 0.001), "accel {}", f.acceleration);
        assert!(f.is_sliding());
    }

    #[test]
    fn test_flat_incline_never_moves() {
        for &mu in &[0.0, 0.2, 1.0] {
            let f = compute_forces(25.0, 0.0, mu);
            assert_eq!(f.parallel, 0.0);
            assert_eq!(f.acceleration, 0.0);
            assert!(!f.is_sliding());
        }
    }

    #[test]
    fn test_static_friction_holds_block() {
        // tan(20°) ≈ 0.364 < 0.5, so friction wins
        let f = compute_forces(5.0, 20.0, 0.5);
        assert!(f.parallel <= f.friction);
        assert!(f.net < 0.0);
        assert_eq!(f.acceleration, 0.0);
    }

    #[test]
    fn test_parameters_forces_matches_free_function() {
        let params = SimulationParameters::new(10.0, 30.0, 0.2);
        assert_eq!(params.forces(), compute_forces(10.0, 30.0, 0.2));
    }

    proptest! {
        #[test]
        fn prop_forces_non_negative(
            mass in MASS_MIN..=MASS_MAX,
            angle in ANGLE_MIN..=ANGLE_MAX,
            mu in FRICTION_MIN..=FRICTION_MAX,
        ) {
            let f = compute_forces(mass, angle, mu);
            prop_assert!(f.normal >= 0.0);
            prop_assert!(f.friction >= 0.0);
            prop_assert!(f.acceleration >= 0.0);
        }

        #[test]
        fn prop_frictionless_acceleration(
            mass in MASS_MIN..=MASS_MAX,
            angle in ANGLE_MIN..=ANGLE_MAX,
        ) {
            let f = compute_forces(mass, angle, 0.0);
            let expected = GRAVITY * angle.to_radians().sin();
            prop_assert!((f.acceleration - expected).abs() < 1e-4);
        }

        #[test]
        fn prop_no_motion_when_friction_dominates(
            mass in MASS_MIN..=MASS_MAX,
            angle in ANGLE_MIN..=ANGLE_MAX,
            mu in FRICTION_MIN..=FRICTION_MAX,
        ) {
            let f = compute_forces(mass, angle, mu);
            if f.parallel <= f.friction {
                prop_assert_eq!(f.acceleration, 0.0);
            }
        }
    }
}
