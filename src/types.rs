use nalgebra::{Matrix4, Point3, Vector3};
use ndarray::{Array, ArrayView, NdFloat};

use crate::error::Result;

/// Element type of coordinate and field arrays.
///
/// Implemented for `f32` and `f64`. Every function in this crate returns arrays
/// of the same element type it was given.
pub trait Value: NdFloat {
    /// Converts a literal into this element type.
    fn constant(v: f64) -> Self;
}

impl Value for f32 {
    #[inline]
    fn constant(v: f64) -> Self {
        v as f32
    }
}

impl Value for f64 {
    #[inline]
    fn constant(v: f64) -> Self {
        v
    }
}

/// A 3D point with [`Value`] components, used for field centers.
pub type Point<A> = Point3<A>;

/// A 3D vector with [`Value`] components, used for per-axis extents.
pub type Vector<A> = Vector3<A>;

/// A 4x4 homogeneous transform.
pub type Matrix<A> = Matrix4<A>;

/// A lazily evaluated scalar field: maps coordinate views `(x, y, z)` to a field array.
pub type FieldFn<A, D> = dyn for<'v> Fn(
        ArrayView<'v, A, D>,
        ArrayView<'v, A, D>,
        ArrayView<'v, A, D>,
    ) -> Result<Array<A, D>>
    + Send
    + Sync;

/// The default center `(0.5, 0.5, 0.5)`, the middle of the unit cube.
pub fn default_center<A: Value>() -> Point<A> {
    let half = A::constant(crate::constants::CENTER);
    Point::new(half, half, half)
}
