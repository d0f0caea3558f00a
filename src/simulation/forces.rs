//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait and the direct pairwise Newtonian
//! gravity term that drives the simulation

use crate::simulation::states::{BodySet, NVec3};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    ///
    /// Only `out` is written; positions are read from a single consistent
    /// snapshot of `sys`, so the caller may integrate afterwards without
    /// corrupting the force pass.
    pub fn accumulate_accels(&self, t: f64, sys: &BodySet, out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

/// Trait for acceleration sources operating on [`BodySet`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &BodySet, out: &mut [NVec3]);
}

/// Direct N^2 Newtonian gravity
///
/// `eps2` is an optional squared softening floor. At 0 the sum is the bare
/// inverse-square law and two coincident bodies produce a divergent term.
/// The fabric sampler clamps independently with `min_dist`.
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub eps2: f64, // softening, 0 disables
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &BodySet, out: &mut [NVec3]) {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j. Iterating pairs
        // by index keeps self-interaction out structurally: a body never
        // appears on both sides of a term.
        for i in 0..n {
            // bi: body i (left side of the pair)
            let bi = &sys.bodies[i];
            let xi = bi.x;      // position of body i
            let mi = bi.m;      // mass of body i

            for j in (i + 1)..n {
                // bj: body j (right side of the pair)
                let bj = &sys.bodies[j];
                let xj = bj.x;  // position of body j
                let mj = bj.m;  // mass of body j

                // r is the displacement vector from i to j
                // If r points from i to j, then i feels a pull along +r,
                // j feels a pull along -r
                let r = xj - xi;

                // Squared separation distance |r|^2 plus the softening floor
                let d2 = r.dot(&r) + self.eps2;

                // 1 / |r_soft|
                let inv_r = d2.sqrt().recip();

                // 1 / |r_soft|^3
                // (this is what appears in the Newtonian acceleration formula:
                //   a = r / |r|^3
                //   => a = r * (1 / |r|^3) )
                let inv_r3 = inv_r * inv_r * inv_r;

                // coef = G / |r_soft|^3
                let coef = self.g * inv_r3;

                // Apply Newton's law:
                // a_i +=  G * m_j * r / |r_soft|^3
                // a_j += -G * m_i * r / |r_soft|^3
                // (equal and opposite)
                out[i] += coef * mj * r;
                out[j] -= coef * mi * r;
            }
        }
    }
}
