//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes the JSON-facing config layer and produces the runtime bundle
//! (`Scenario`) containing:
//! - immutable constants (`SimulationConstants`, with `G` rescaled and the
//!   lattice half-extent forced even)
//! - system state (`BodySet` with bodies at t = 0, stars before planets)
//! - active force set (`AccelSet`)
//! - the fixed-step clock
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! integration and visualization systems

use bevy::prelude::Resource;
use log::{info, warn};

use crate::configuration::config::{CatalogConfig, SimulationConfig};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::StepClock;
use crate::simulation::params::SimulationConstants;
use crate::simulation::states::{Body, BodySet, NVec3};

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main runtime bundle constructed from the two config files:
/// it contains the constants, the current system state, the set of active
/// force laws, and the frame-pacing clock
#[derive(Resource)]
pub struct Scenario {
    pub constants: SimulationConstants,
    pub system: BodySet,
    pub forces: AccelSet,
    pub clock: StepClock,
}

impl Scenario {
    pub fn build(sim: SimulationConfig, catalog: CatalogConfig) -> Self {
        // Constants (runtime) from SimulationConfig. G comes in as the SI
        // value and is rescaled into the catalog's length/mass units:
        // lengths are E_val_km kilometers, masses E_val_kg kilograms, so
        // G' = G * E_val_kg / ((E_val_km * 1e3 m)^3) = G * E_val_kg / (E_val_km^3 * 1e9)
        let constants = SimulationConstants {
            g: sim.g_const * sim.e_val_kg / (sim.e_val_km.powi(3) * 1e9),
            dt: sim.time_step,
            eps2: sim.eps2,
            min_dist: sim.min_dist,
            distance_cutoff: sim.distance_cutoff,
            deformation_scale: sim.deformation_scale,
            grid_step: sim.grid_step,
            grid_squares: SimulationConstants::force_even(sim.grid_squares),
            y_value: sim.y_grid,
        };

        // Bodies: stars first, then planets, preserving catalog order.
        // All lengths are divided by E_val_km, masses by E_val_kg. Each
        // body starts with its center half a diameter above the plane so
        // it rests on the lattice.
        let mut bodies: Vec<Body> = Vec::with_capacity(catalog.stars.len() + catalog.planets.len());

        for sc in &catalog.stars {
            let diameter = sc.diameter_km / sim.e_val_km;
            bodies.push(Body {
                id: 0, // assigned by BodySet::new
                name: sc.name.clone(),
                x: NVec3::new(
                    sc.center[0] / sim.e_val_km,
                    diameter / 2.0,
                    sc.center[1] / sim.e_val_km,
                ),
                v: NVec3::new(
                    sc.init_velocity[0] / sim.e_val_km,
                    sc.init_velocity[1] / sim.e_val_km,
                    sc.init_velocity[2] / sim.e_val_km,
                ),
                m: sc.mass_kg / sim.e_val_kg,
                diameter,
                color: sc.color,
            });
        }

        for pc in &catalog.planets {
            let diameter = pc.diameter_km / sim.e_val_km;

            // Planets orbit a named star when one resolves; the star's x/z
            // become an offset for the planet's initial position. A missing
            // or unknown name is not an error, just a zero offset.
            let offset = match &pc.system {
                Some(star_name) => match bodies.iter().find(|b| &b.name == star_name) {
                    Some(star) => (star.x.x, star.x.z),
                    None => {
                        warn!("planet {} references unknown star {}", pc.name, star_name);
                        (0.0, 0.0)
                    }
                },
                None => (0.0, 0.0),
            };

            bodies.push(Body {
                id: 0, // assigned by BodySet::new
                name: pc.name.clone(),
                x: NVec3::new(
                    pc.init_distance_km / sim.e_val_km + offset.0,
                    diameter / 2.0,
                    offset.1,
                ),
                v: NVec3::new(
                    pc.init_velocity[0] / sim.e_val_km,
                    pc.init_velocity[1] / sim.e_val_km,
                    pc.init_velocity[2] / sim.e_val_km,
                ),
                m: pc.mass_kg / sim.e_val_kg,
                diameter,
                color: pc.color,
            });
        }

        let system = BodySet::new(bodies);

        info!(
            "scenario: {} bodies, G = {:.6e}, dt = {}, grid = {}x{} step {}",
            system.len(),
            constants.g,
            constants.dt,
            2 * constants.grid_squares + 1,
            2 * constants.grid_squares + 1,
            constants.grid_step,
        );

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            g: constants.g,
            eps2: constants.eps2,
        });

        Self {
            constants,
            system,
            forces,
            clock: StepClock::new(),
        }
    }
}
