pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodySet, NVec3};
pub use simulation::params::SimulationConstants;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::{taylor_step, StepClock};
pub use simulation::fabric::{field_at, fabric_point_count, sample_fabric};
pub use simulation::scenario::Scenario;

pub use configuration::config::{CatalogConfig, PlanetConfig, SimulationConfig, StarConfig};

pub use visualization::fabric_vis3d::run_3d;

pub use benchmark::benchmark::{bench_gravity, bench_fabric, bench_step_curve};
