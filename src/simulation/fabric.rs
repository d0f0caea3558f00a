//! Spacetime fabric sampler
//!
//! Converts the current body masses and positions into a displaced line
//! lattice: a square grid of line segments in the xz-plane whose vertex
//! heights dip toward nearby masses. The output is a flat list of points,
//! two per segment, consumed directly as a line-list vertex buffer.
//!
//! The sampler is a pure function of the body set and the constants. It
//! holds no state and recomputes every vertex on every call.

use crate::simulation::params::SimulationConstants;
use crate::simulation::states::BodySet;

/// Accumulated field strength at lattice point `(x, z)`.
///
/// For each body the distance is taken from the sample point on the y = 0
/// plane to the body's full 3D position, so a body's own height above the
/// lattice weakens its imprint. Distances are clamped below by `min_dist`
/// and bodies beyond `distance_cutoff` contribute nothing.
///
/// Bodies are summed in `BodySet` order; float addition is not associative,
/// so the iteration order is part of the determinism contract.
pub fn field_at(x: f64, z: f64, sys: &BodySet, constants: &SimulationConstants) -> f64 {
    let mut field = 0.0;

    for b in &sys.bodies {
        let dx = x - b.x.x;
        let dz = z - b.x.z;
        let dy = 0.0 - b.x.y;

        let mut distance = (dx * dx + dz * dz + dy * dy).sqrt();

        if distance <= constants.min_dist {
            distance = constants.min_dist;
        }

        if distance <= constants.distance_cutoff {
            field += (constants.g * b.m) / (distance * distance);
        }
    }

    field
}

/// Displaced height of the lattice at `(x, z)`.
fn sample_height(x: f64, z: f64, sys: &BodySet, constants: &SimulationConstants) -> f64 {
    constants.y_value - field_at(x, z, sys, constants) * constants.deformation_scale
}

/// Number of points emitted by [`sample_fabric`] for half-extent `n`:
/// two segment families, each (2n + 1) lines of 2n segments, 2 points per
/// segment.
pub fn fabric_point_count(grid_squares: i32) -> usize {
    let n = grid_squares as usize;
    2 * ((2 * n + 1) * (2 * n) * 2)
}

/// Sample the full lattice and emit line-list vertices.
///
/// Builds two interleaved segment families over a square grid of
/// half-extent `grid_squares` (even) and spacing `grid_step`, centered on
/// the origin at base height `y_value`:
/// - segments along z for every grid column, then
/// - segments along x for every grid row.
///
/// Each segment contributes its two endpoints in order, so the result can
/// be uploaded unchanged as a line-list position attribute. Shared lattice
/// points are recomputed per segment rather than cached.
pub fn sample_fabric(sys: &BodySet, constants: &SimulationConstants) -> Vec<[f32; 3]> {
    let n = constants.grid_squares;
    let step = constants.grid_step;

    let mut vertices = Vec::with_capacity(fabric_point_count(n));

    // Segments running in the z direction, one column per idx
    for idx in -n..=n {
        for idz in -n..n {
            let x = idx as f64 * step;
            let z_1 = idz as f64 * step;
            let z_2 = (idz + 1) as f64 * step;

            let y_1 = sample_height(x, z_1, sys, constants);
            vertices.push([x as f32, y_1 as f32, z_1 as f32]);

            let y_2 = sample_height(x, z_2, sys, constants);
            vertices.push([x as f32, y_2 as f32, z_2 as f32]);
        }
    }

    // Segments running in the x direction, one row per idz
    for idz in -n..=n {
        for idx in -n..n {
            let x_1 = idx as f64 * step;
            let x_2 = (idx + 1) as f64 * step;
            let z = idz as f64 * step;

            let y_1 = sample_height(x_1, z, sys, constants);
            vertices.push([x_1 as f32, y_1 as f32, z as f32]);

            let y_2 = sample_height(x_2, z, sys, constants);
            vertices.push([x_2 as f32, y_2 as f32, z as f32]);
        }
    }

    vertices
}
