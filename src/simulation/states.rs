//! Core state types for the gravity simulation.
//!
//! Defines the `Body` struct and the `BodySet` collection:
//! - `Body` holds one celestial object's physical state plus its
//!   rendering-only attributes (diameter, color)
//! - `BodySet` holds the ordered list of bodies and the current simulation
//!   time `t`
//!
//! The set is built once from the catalog and mutated in place every step;
//! bodies are never added or removed afterwards.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub id: usize, // stable index in the BodySet, assigned at construction
    pub name: String, // catalog label, display only
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass
    pub diameter: f64, // rendering size, not used by the dynamics
    pub color: [f32; 4], // RGBA, rendering only
}

#[derive(Debug, Clone)]
pub struct BodySet {
    pub bodies: Vec<Body>, // insertion order fixed at load time
    pub t: f64, // time
}

impl BodySet {
    /// Wrap a body list at t = 0, stamping each body with its index.
    /// The index is the body's identity for the rest of the run.
    pub fn new(mut bodies: Vec<Body>) -> Self {
        for (i, b) in bodies.iter_mut().enumerate() {
            b.id = i;
        }
        Self { bodies, t: 0.0 }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Total linear momentum: sum_i m_i * v_i
    pub fn total_momentum(&self) -> NVec3 {
        let mut p = NVec3::zeros();
        for b in &self.bodies {
            p += b.m * b.v;
        }
        p
    }

    /// Kinetic energy: sum_i 1/2 m_i |v_i|^2
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| 0.5 * b.m * b.v.norm_squared()).sum()
    }

    /// Gravitational potential energy over unordered pairs:
    /// -G * sum_{i<j} m_i m_j / |x_i - x_j|
    pub fn potential_energy(&self, g: f64) -> f64 {
        let n = self.bodies.len();
        let mut u = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                let r = (self.bodies[i].x - self.bodies[j].x).norm();
                u -= g * self.bodies[i].m * self.bodies[j].m / r;
            }
        }
        u
    }

    /// Total mechanical energy, used to watch integration drift.
    pub fn total_energy(&self, g: f64) -> f64 {
        self.kinetic_energy() + self.potential_energy(g)
    }
}
