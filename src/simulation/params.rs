//! Immutable per-run simulation constants
//!
//! `SimulationConstants` holds everything the integrator and the fabric
//! sampler need:
//! - rescaled gravitational constant and fixed step size (`g`, `dt`),
//! - optional integrator softening (`eps2`),
//! - fabric field parameters (`min_dist`, `distance_cutoff`,
//!   `deformation_scale`),
//! - lattice geometry (`grid_step`, `grid_squares`, `y_value`)
//!
//! Built once at scenario construction and never mutated afterwards.

#[derive(Debug, Clone)]
pub struct SimulationConstants {
    pub g: f64, // gravitational constant, already unit-rescaled
    pub dt: f64, // fixed step size
    pub eps2: f64, // integrator softening (squared); 0 disables it
    pub min_dist: f64, // fabric softening clamp
    pub distance_cutoff: f64, // fabric contribution range
    pub deformation_scale: f64, // field strength -> vertical displacement
    pub grid_step: f64, // lattice spacing
    pub grid_squares: i32, // lattice half-extent, always even
    pub y_value: f64, // lattice base height
}

impl SimulationConstants {
    /// The lattice half-extent must be even; odd values are bumped up by one.
    pub fn force_even(grid_squares: i32) -> i32 {
        if grid_squares % 2 == 0 {
            grid_squares
        } else {
            grid_squares + 1
        }
    }
}
