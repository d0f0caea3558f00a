//! Fixed-step time integration for the N-body system
//!
//! Provides the single-force-eval Taylor step driven by `AccelSet` and
//! `SimulationConstants`, plus the `StepClock` accumulator that decouples
//! the fixed physics step from the render frame rate

use super::forces::AccelSet;
use super::params::SimulationConstants;
use super::states::{BodySet, NVec3};

/// Advance the system by one step of `constants.dt`.
///
/// One force evaluation per step. Each body's velocity and position are
/// updated from the same acceleration sample:
///
/// ```text
/// v_n+1 = v_n + a_n * dt
/// x_n+1 = x_n + v_n * dt + 1/2 * a_n * dt^2
/// ```
///
/// This is not velocity-Verlet: the acceleration is computed once at the
/// start of the step and reused for both updates. All accelerations are
/// accumulated into a scratch buffer before any body is mutated, so every
/// force term reads one consistent position snapshot.
pub fn taylor_step(sys: &mut BodySet, forces: &AccelSet, constants: &SimulationConstants) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = constants.dt; // time step dt

    // a_n for all bodies at the current time t = sys.t
    let mut accel = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut accel);

    // Kick + drift from the old velocity:
    // v_n+1 = v_n + a_n dt
    // x_n+1 = x_n + v_n dt + (1/2) a_n dt^2
    for (b, a) in sys.bodies.iter_mut().zip(accel.iter()) {
        let v_prev = b.v;
        b.v += *a * dt;
        b.x += v_prev * dt + 0.5 * *a * (dt * dt);
    }

    // Increment the system time by one full step
    sys.t += dt;
}

/// Accumulates render-frame wall-clock time and releases it in whole
/// multiples of the fixed physics step.
///
/// The simulation advances by `dt` exactly, never by a partial step, so the
/// trajectory is independent of the display frame rate. Catch-up after a
/// slow frame is capped at `MAX_CATCHUP_STEPS`; time beyond the cap is
/// dropped rather than replayed.
#[derive(Debug, Clone, Default)]
pub struct StepClock {
    accumulator: f64,
}

/// Upper bound on physics steps released per rendered frame.
pub const MAX_CATCHUP_STEPS: u32 = 8;

impl StepClock {
    pub fn new() -> Self {
        Self { accumulator: 0.0 }
    }

    /// Add a frame's elapsed wall-clock time and return how many fixed
    /// steps of `dt` the caller should integrate.
    pub fn advance(&mut self, frame_dt: f64, dt: f64) -> u32 {
        if dt <= 0.0 {
            return 0;
        }

        self.accumulator += frame_dt;

        let mut steps = 0;
        while self.accumulator >= dt && steps < MAX_CATCHUP_STEPS {
            self.accumulator -= dt;
            steps += 1;
        }

        // Time past the cap is dropped, not replayed on later frames
        if self.accumulator >= dt {
            self.accumulator %= dt;
        }

        steps
    }
}
