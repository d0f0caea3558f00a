use std::time::Instant;
use crate::simulation::fabric::sample_fabric;
use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
use crate::simulation::integrator::taylor_step;
use crate::simulation::params::SimulationConstants;
use crate::simulation::states::{Body, BodySet, NVec3};

/// Helper to build a manual BodySet of size `n`
fn make_system(n: usize) -> BodySet {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        );

        bodies.push(Body {
            id: 0,
            name: format!("b{i}"),
            x,
            v: NVec3::zeros(),
            m: 1.0,
            diameter: 0.02,
            color: [1.0, 1.0, 1.0, 1.0],
        });
    }

    BodySet::new(bodies)
}

/// Default constants for benches
fn make_constants() -> SimulationConstants {
    SimulationConstants {
        g: 0.1,
        dt: 0.001,
        eps2: 1e-4,
        min_dist: 0.5,
        distance_cutoff: 60.0,
        deformation_scale: 0.01,
        grid_step: 1.0,
        grid_squares: 26,
        y_value: -2.0,
    }
}

/// Time a single direct-gravity accumulation pass for a range of N
pub fn bench_gravity() {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let sys = make_system(n);
        let constants = make_constants();

        let mut out = vec![NVec3::zeros(); n];

        let gravity = NewtonianGravity {
            g: constants.g,
            eps2: constants.eps2,
        };

        // Warm up
        gravity.acceleration(0.0, &sys, &mut out);

        let t0 = Instant::now();
        gravity.acceleration(0.0, &sys, &mut out);
        let dt_direct = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct = {dt_direct:8.6} s");
    }
}

/// Time a full fabric resample for a range of grid half-extents
pub fn bench_fabric() {
    let sizes = [10, 20, 30, 40, 60, 80];
    let sys = make_system(16);

    for n in sizes {
        let mut constants = make_constants();
        constants.grid_squares = SimulationConstants::force_even(n);

        // Warm up
        let _ = sample_fabric(&sys, &constants);

        let t0 = Instant::now();
        let vertices = sample_fabric(&sys, &constants);
        let dt_fabric = t0.elapsed().as_secs_f64();

        println!(
            "grid = {:3}, points = {:7}, fabric = {:8.6} s",
            n,
            vertices.len(),
            dt_fabric
        );
    }
}

/// Benchmark the full integration step for a range of N
/// Paste output directly into excel to graph
pub fn bench_step_curve() {
    println!("N,step_ms");

    // Steps of 200 to give a smoother graph
    for n in (200..=6400).step_by(200) {
        // Small n: average over a few steps to smooth noise
        // Large n: only 1 step to avoid minutes of runtime
        let steps = if n <= 800 { 5 } else { 1 };

        let mut sys = make_system(n);
        let constants = make_constants();

        let forces = AccelSet::new().with(NewtonianGravity {
            g: constants.g,
            eps2: constants.eps2,
        });

        // Warm-up
        taylor_step(&mut sys, &forces, &constants);

        let t0 = Instant::now();
        for _ in 0..steps {
            taylor_step(&mut sys, &forces, &constants);
        }
        let elapsed = t0.elapsed().as_secs_f64() * 1000.0; // ms total
        let ms_step = elapsed / steps as f64;

        println!("{},{:.6}", n, ms_step);
    }
}
