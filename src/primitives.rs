//! Primitive fields: signed distance functions and Gaussian blobs.
//!
//! Every function takes coordinate arrays `x, y, z` of broadcast-compatible shape
//! and returns a new field array of the broadcast shape. Signed distance fields
//! are negative inside the shape, zero on its surface and positive outside.

use ndarray::{Array, ArrayBase, Data, Dimension};

use crate::{
    broadcast::zip3,
    error::Result,
    interp::{maximum, minimum, outside_length},
    types::{Point, Value, Vector},
};

/// Signed distance to a sphere: `|p - center| - radius`.
///
/// The conventional parameters are [`default_center`](crate::types::default_center)
/// and [`SPHERE_RADIUS`](crate::constants::SPHERE_RADIUS).
pub fn sdf_sphere<A, S1, S2, S3, D>(
    x: &ArrayBase<S1, D>,
    y: &ArrayBase<S2, D>,
    z: &ArrayBase<S3, D>,
    center: Point<A>,
    radius: A,
) -> Result<Array<A, D>>
where
    A: Value,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    S3: Data<Elem = A>,
    D: Dimension,
{
    zip3(x.view(), y.view(), z.view(), move |x, y, z| {
        let dx = x - center.x;
        let dy = y - center.y;
        let dz = z - center.z;
        (dx * dx + dy * dy + dz * dz).sqrt() - radius
    })
}

/// Signed distance to an axis-aligned cube of half-extent `size`.
///
/// ```text
/// d_i     = |p_i - center_i| - size
/// outside = max(dx, dy, dz, 0)
/// inside  = min(max(dx, max(dy, dz)), 0)
/// result  = outside + inside
/// ```
///
/// Exactly one of the two terms is nonzero. At the center this is `-size`;
/// outside the cube it is the largest per-axis distance to a face plane.
pub fn sdf_cube<A, S1, S2, S3, D>(
    x: &ArrayBase<S1, D>,
    y: &ArrayBase<S2, D>,
    z: &ArrayBase<S3, D>,
    center: Point<A>,
    size: A,
) -> Result<Array<A, D>>
where
    A: Value,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    S3: Data<Elem = A>,
    D: Dimension,
{
    zip3(x.view(), y.view(), z.view(), move |x, y, z| {
        let dx = (x - center.x).abs() - size;
        let dy = (y - center.y).abs() - size;
        let dz = (z - center.z).abs() - size;
        let outside = maximum(maximum(maximum(dx, dy), dz), A::zero());
        let inside = minimum(maximum(dx, maximum(dy, dz)), A::zero());
        outside + inside
    })
}

/// Gaussian density blob: `exp(-strength * |p - center|²)`.
///
/// Peaks at `1` on the center and decays towards `0`; not a distance field.
pub fn gaussian_sphere<A, S1, S2, S3, D>(
    x: &ArrayBase<S1, D>,
    y: &ArrayBase<S2, D>,
    z: &ArrayBase<S3, D>,
    center: Point<A>,
    strength: A,
) -> Result<Array<A, D>>
where
    A: Value,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    S3: Data<Elem = A>,
    D: Dimension,
{
    zip3(x.view(), y.view(), z.view(), move |x, y, z| {
        let dx = x - center.x;
        let dy = y - center.y;
        let dz = z - center.z;
        let r2 = dx * dx + dy * dy + dz * dz;
        (-strength * r2).exp()
    })
}

/// Gaussian blob summed from per-axis squared offsets: `exp(-scale * (dx² + dy² + dz²))`.
///
/// Despite the name the falloff is radially symmetric, the same shape as
/// [`gaussian_sphere`] with `strength = scale`.
pub fn gaussian_cube<A, S1, S2, S3, D>(
    x: &ArrayBase<S1, D>,
    y: &ArrayBase<S2, D>,
    z: &ArrayBase<S3, D>,
    center: Point<A>,
    scale: A,
) -> Result<Array<A, D>>
where
    A: Value,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    S3: Data<Elem = A>,
    D: Dimension,
{
    zip3(x.view(), y.view(), z.view(), move |x, y, z| {
        let dx = (x - center.x) * (x - center.x);
        let dy = (y - center.y) * (y - center.y);
        let dz = (z - center.z) * (z - center.z);
        (-scale * (dx + dy + dz)).exp()
    })
}

/// Exact Euclidean signed distance to a box with per-axis half-extents `bounds`.
///
/// ```text
/// q      = |p - center| - bounds
/// result = |max(q, 0)| + min(max(qx, qy, qz), 0)
/// ```
pub fn sdf_box<A, S1, S2, S3, D>(
    x: &ArrayBase<S1, D>,
    y: &ArrayBase<S2, D>,
    z: &ArrayBase<S3, D>,
    center: Point<A>,
    bounds: Vector<A>,
) -> Result<Array<A, D>>
where
    A: Value,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    S3: Data<Elem = A>,
    D: Dimension,
{
    zip3(x.view(), y.view(), z.view(), move |x, y, z| {
        let qx = (x - center.x).abs() - bounds.x;
        let qy = (y - center.y).abs() - bounds.y;
        let qz = (z - center.z).abs() - bounds.z;
        box_distance(qx, qy, qz)
    })
}

/// Box with rounded edges and corners of radius `radius`.
///
/// The outer extent stays at `bounds`; the rounding eats into the corners.
pub fn sdf_rounded_box<A, S1, S2, S3, D>(
    x: &ArrayBase<S1, D>,
    y: &ArrayBase<S2, D>,
    z: &ArrayBase<S3, D>,
    center: Point<A>,
    bounds: Vector<A>,
    radius: A,
) -> Result<Array<A, D>>
where
    A: Value,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    S3: Data<Elem = A>,
    D: Dimension,
{
    zip3(x.view(), y.view(), z.view(), move |x, y, z| {
        let qx = (x - center.x).abs() - bounds.x + radius;
        let qy = (y - center.y).abs() - bounds.y + radius;
        let qz = (z - center.z).abs() - bounds.z + radius;
        box_distance(qx, qy, qz) - radius
    })
}

/// Wireframe of a box: the twelve edges of a `bounds` box, each `edge` thick.
pub fn sdf_box_frame<A, S1, S2, S3, D>(
    x: &ArrayBase<S1, D>,
    y: &ArrayBase<S2, D>,
    z: &ArrayBase<S3, D>,
    center: Point<A>,
    bounds: Vector<A>,
    edge: A,
) -> Result<Array<A, D>>
where
    A: Value,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    S3: Data<Elem = A>,
    D: Dimension,
{
    zip3(x.view(), y.view(), z.view(), move |x, y, z| {
        let px = (x - center.x).abs() - bounds.x;
        let py = (y - center.y).abs() - bounds.y;
        let pz = (z - center.z).abs() - bounds.z;
        let qx = (px + edge).abs() - edge;
        let qy = (py + edge).abs() - edge;
        let qz = (pz + edge).abs() - edge;

        let d1 = box_distance(px, qy, qz);
        let d2 = box_distance(qx, py, qz);
        let d3 = box_distance(qx, qy, pz);
        minimum(minimum(d1, d2), d3)
    })
}

// Distance from per-axis face offsets q: outer Euclidean part plus inner Chebyshev part
#[inline]
fn box_distance<A: Value>(qx: A, qy: A, qz: A) -> A {
    let inside = minimum(maximum(maximum(qx, qy), qz), A::zero());
    outside_length(qx, qy, qz) + inside
}
