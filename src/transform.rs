//! 4x4 homogeneous matrices for placing fields in space.
//!
//! Rotations and scales act about an `origin` point:
//!
//! ```text
//! M = T(origin) · R · T(-origin)
//! ```
//!
//! Pass the result to [`Sdf::transform`](crate::field::Sdf::transform).

use nalgebra::{RealField, Rotation3, Vector3};

use crate::types::{Matrix, Point, Vector};

/// Translation by `offset`.
pub fn translate_matrix<A: RealField>(offset: Vector<A>) -> Matrix<A> {
    Matrix::new_translation(&offset)
}

/// Right-handed rotation by `theta` radians about the X axis through `origin`.
pub fn rotate_x_matrix<A: RealField>(theta: A, origin: Point<A>) -> Matrix<A> {
    let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), theta);
    about(origin, rotation.to_homogeneous())
}

/// Right-handed rotation by `theta` radians about the Y axis through `origin`.
pub fn rotate_y_matrix<A: RealField>(theta: A, origin: Point<A>) -> Matrix<A> {
    let rotation = Rotation3::from_axis_angle(&Vector3::y_axis(), theta);
    about(origin, rotation.to_homogeneous())
}

/// Right-handed rotation by `theta` radians about the Z axis through `origin`.
pub fn rotate_z_matrix<A: RealField>(theta: A, origin: Point<A>) -> Matrix<A> {
    let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), theta);
    about(origin, rotation.to_homogeneous())
}

/// Per-axis scaling by `factors`, keeping `origin` fixed.
pub fn scale_matrix<A: RealField>(factors: Vector<A>, origin: Point<A>) -> Matrix<A> {
    about(origin, Matrix::new_nonuniform_scaling(&factors))
}

/// Chains transforms so that `matrices[0]` is applied first.
///
/// ```text
/// combine(&[m0, m1, m2]) = m2 · m1 · m0
/// ```
pub fn combine<A: RealField>(matrices: &[Matrix<A>]) -> Matrix<A> {
    matrices
        .iter()
        .rev()
        .fold(Matrix::identity(), |acc, m| acc * m)
}

// Conjugate `m` by a translation so it acts about `origin`
fn about<A: RealField>(origin: Point<A>, m: Matrix<A>) -> Matrix<A> {
    let to = Matrix::new_translation(&origin.coords);
    let back = Matrix::new_translation(&(-origin.coords.clone()));
    to * m * back
}
