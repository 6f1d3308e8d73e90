use std::{
    ops::{Add, Div, Mul, Neg, Sub},
    sync::Arc,
};

use nalgebra::{RealField, Vector4};
use ndarray::{Array, ArrayBase, ArrayView, Data, Dimension};
use tracing::warn;

use crate::{
    blend::{self, Weight},
    broadcast::{map1, zip2, zip3},
    compose,
    error::{FieldError, Result},
    patterns, primitives,
    transform::{rotate_x_matrix, rotate_y_matrix, rotate_z_matrix, scale_matrix, translate_matrix},
    types::{FieldFn, Matrix, Point, Value, Vector},
    utils,
};

/// A scalar field that has not been sampled yet.
///
/// `Sdf` wraps a function of the coordinate arrays so that shapes can be built
/// up first and evaluated once over a grid:
///
/// ```rust,ignore
/// let shape = (Sdf::sphere(default_center(), 0.3) - Sdf::cube(default_center(), 0.2))
///     .smooth_union(&Sdf::gyroid(5.0), 0.1)
///     .rotate_z(0.3, default_center())?;
///
/// let values = shape.eval(&x, &y, &z)?;
/// ```
///
/// The function is held in an [`Arc`], so cloning an `Sdf` is a pointer bump and
/// composite fields share their operands.
pub struct Sdf<A, D> {
    function: Arc<FieldFn<A, D>>,
}

impl<A, D> Clone for Sdf<A, D> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
        }
    }
}

impl<A, D> Sdf<A, D>
where
    A: Value,
    D: Dimension + 'static,
{
    /// Wraps an arbitrary field function.
    pub fn new<F>(function: F) -> Self
    where
        F: for<'v> Fn(
                ArrayView<'v, A, D>,
                ArrayView<'v, A, D>,
                ArrayView<'v, A, D>,
            ) -> Result<Array<A, D>>
            + Send
            + Sync
            + 'static,
    {
        Self {
            function: Arc::new(function),
        }
    }

    /// Samples the field at every point of the coordinate arrays.
    ///
    /// The three arrays may differ in storage (owned, view, shared) and shape,
    /// as long as their shapes broadcast together.
    pub fn eval<S1, S2, S3>(
        &self,
        x: &ArrayBase<S1, D>,
        y: &ArrayBase<S2, D>,
        z: &ArrayBase<S3, D>,
    ) -> Result<Array<A, D>>
    where
        S1: Data<Elem = A>,
        S2: Data<Elem = A>,
        S3: Data<Elem = A>,
    {
        (self.function)(x.view(), y.view(), z.view())
    }

    /// The same value everywhere, shaped like the coordinates.
    pub fn constant(value: A) -> Self {
        Self::new(move |x, y, z| zip3(x, y, z, move |_, _, _| value))
    }

    /// See [`primitives::sdf_sphere`].
    pub fn sphere(center: Point<A>, radius: A) -> Self {
        Self::new(move |x, y, z| primitives::sdf_sphere(&x, &y, &z, center, radius))
    }

    /// See [`primitives::sdf_cube`].
    pub fn cube(center: Point<A>, size: A) -> Self {
        Self::new(move |x, y, z| primitives::sdf_cube(&x, &y, &z, center, size))
    }

    /// See [`primitives::sdf_box`].
    pub fn sdf_box(center: Point<A>, bounds: Vector<A>) -> Self {
        Self::new(move |x, y, z| primitives::sdf_box(&x, &y, &z, center, bounds))
    }

    /// See [`primitives::sdf_rounded_box`].
    pub fn rounded_box(center: Point<A>, bounds: Vector<A>, radius: A) -> Self {
        Self::new(move |x, y, z| primitives::sdf_rounded_box(&x, &y, &z, center, bounds, radius))
    }

    /// See [`primitives::sdf_box_frame`].
    pub fn box_frame(center: Point<A>, bounds: Vector<A>, edge: A) -> Self {
        Self::new(move |x, y, z| primitives::sdf_box_frame(&x, &y, &z, center, bounds, edge))
    }

    /// See [`primitives::gaussian_sphere`].
    pub fn gaussian_sphere(center: Point<A>, strength: A) -> Self {
        Self::new(move |x, y, z| primitives::gaussian_sphere(&x, &y, &z, center, strength))
    }

    /// See [`primitives::gaussian_cube`].
    pub fn gaussian_cube(center: Point<A>, scale: A) -> Self {
        Self::new(move |x, y, z| primitives::gaussian_cube(&x, &y, &z, center, scale))
    }

    /// See [`patterns::gyroid`].
    pub fn gyroid(freq: A) -> Self {
        Self::new(move |x, y, z| patterns::gyroid(&x, &y, &z, freq))
    }

    /// See [`patterns::wave_pattern`].
    pub fn wave(freq: A) -> Self {
        Self::new(move |x, y, z| patterns::wave_pattern(&x, &y, &z, freq))
    }

    // Evaluates both operands on the same coordinates and merges them with `op`
    fn combine<F>(&self, other: &Self, op: F) -> Self
    where
        F: Fn(Array<A, D>, Array<A, D>) -> Result<Array<A, D>> + Send + Sync + 'static,
    {
        let (a, b) = (self.clone(), other.clone());
        Self::new(move |x, y, z| op(a.eval(&x, &y, &z)?, b.eval(&x, &y, &z)?))
    }

    // Post-processes this field's values with `op`
    fn map<F>(&self, op: F) -> Self
    where
        F: Fn(Array<A, D>) -> Result<Array<A, D>> + Send + Sync + 'static,
    {
        let inner = self.clone();
        Self::new(move |x, y, z| op(inner.eval(&x, &y, &z)?))
    }

    /// See [`compose::union`]. Also available as `a + b`.
    pub fn union(&self, other: &Self) -> Self {
        self.combine(other, |a, b| compose::union(&a, &b))
    }

    /// See [`compose::intersection`]. Also available as `a * b`.
    pub fn intersection(&self, other: &Self) -> Self {
        self.combine(other, |a, b| compose::intersection(&a, &b))
    }

    /// See [`compose::subtraction`]. Also available as `a - b`.
    pub fn difference(&self, other: &Self) -> Self {
        self.combine(other, |a, b| compose::subtraction(&a, &b))
    }

    /// See [`compose::xor`].
    pub fn xor(&self, other: &Self) -> Self {
        self.combine(other, |a, b| compose::xor(&a, &b))
    }

    /// See [`compose::smooth_union`].
    pub fn smooth_union(&self, other: &Self, k: A) -> Self {
        self.combine(other, move |a, b| compose::smooth_union(&a, &b, k))
    }

    /// See [`compose::smooth_intersection`].
    pub fn smooth_intersection(&self, other: &Self, k: A) -> Self {
        self.combine(other, move |a, b| compose::smooth_intersection(&a, &b, k))
    }

    /// See [`compose::smooth_subtraction`].
    pub fn smooth_difference(&self, other: &Self, k: A) -> Self {
        self.combine(other, move |a, b| compose::smooth_subtraction(&a, &b, k))
    }

    /// See [`blend::lerp`].
    pub fn lerp(&self, other: &Self, t: A) -> Self {
        self.combine(other, move |a, b| blend::lerp(&a, &b, Weight::Scalar(t)))
    }

    /// See [`blend::blend`]; the mask is itself a field.
    pub fn blend(&self, other: &Self, mask: &Self) -> Self {
        let (a, b, mask) = (self.clone(), other.clone(), mask.clone());
        Self::new(move |x, y, z| {
            let m = mask.eval(&x, &y, &z)?;
            blend::blend(&a.eval(&x, &y, &z)?, &b.eval(&x, &y, &z)?, &m)
        })
    }

    /// See [`utils::normalize_to_sdf_range`]. The range is taken per evaluation.
    pub fn normalized(&self) -> Self {
        self.map(|f| utils::normalize_to_sdf_range(&f))
    }
}

impl<A, D> Sdf<A, D>
where
    A: Value + RealField,
    D: Dimension + 'static,
{
    /// Places the field with a homogeneous `matrix` acting about `origin`.
    ///
    /// Sampling the result at `p` samples this field at `M⁻¹ · p`, where
    /// `M = T(origin) · matrix · T(-origin)`.
    ///
    /// Returns [`FieldError::SingularTransform`] if `M` has no inverse.
    pub fn transform(&self, matrix: &Matrix<A>, origin: Point<A>) -> Result<Self> {
        let full = translate_matrix(origin.coords) * matrix * translate_matrix(-origin.coords);
        let Some(inverse) = full.try_inverse() else {
            warn!(?matrix, "transform matrix is not invertible");
            return Err(FieldError::SingularTransform);
        };

        let inner = self.clone();
        Ok(Self::new(move |x, y, z| {
            let homogeneous = |x: A, y: A, z: A| inverse * Vector4::new(x, y, z, A::one());
            let moved = zip3(x, y, z, homogeneous)?;
            let xt = map1(moved.view(), |p| p.x);
            let yt = map1(moved.view(), |p| p.y);
            let zt = map1(moved.view(), |p| p.z);
            inner.eval(&xt, &yt, &zt)
        }))
    }

    /// Moves the field by `offset`.
    pub fn translate(&self, offset: Vector<A>) -> Result<Self> {
        self.transform(&translate_matrix(offset), Point::origin())
    }

    /// Rotates the field by `theta` radians about the X axis through `origin`.
    pub fn rotate_x(&self, theta: A, origin: Point<A>) -> Result<Self> {
        self.transform(&rotate_x_matrix(theta, origin), Point::origin())
    }

    /// Rotates the field by `theta` radians about the Y axis through `origin`.
    pub fn rotate_y(&self, theta: A, origin: Point<A>) -> Result<Self> {
        self.transform(&rotate_y_matrix(theta, origin), Point::origin())
    }

    /// Rotates the field by `theta` radians about the Z axis through `origin`.
    pub fn rotate_z(&self, theta: A, origin: Point<A>) -> Result<Self> {
        self.transform(&rotate_z_matrix(theta, origin), Point::origin())
    }

    /// Scales the field per axis, keeping `origin` fixed.
    pub fn scale(&self, factors: Vector<A>, origin: Point<A>) -> Result<Self> {
        self.transform(&scale_matrix(factors, origin), Point::origin())
    }
}

impl<A: Value, D: Dimension + 'static> Add for Sdf<A, D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.union(&rhs)
    }
}

impl<A: Value, D: Dimension + 'static> Sub for Sdf<A, D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.difference(&rhs)
    }
}

impl<A: Value, D: Dimension + 'static> Mul for Sdf<A, D> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.intersection(&rhs)
    }
}

impl<A: Value, D: Dimension + 'static> Neg for Sdf<A, D> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|f| Ok(-f))
    }
}

/// Elementwise quotient; `0` wherever the divisor is `0`.
impl<A: Value, D: Dimension + 'static> Div for Sdf<A, D> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.combine(&rhs, |n, d| zip2(n.view(), d.view(), guarded_div))
    }
}

#[inline]
fn guarded_div<A: Value>(n: A, d: A) -> A {
    if d != A::zero() { n / d } else { A::zero() }
}

macro_rules! impl_scalar_div {
    ($($t:ty),*) => {$(
        /// Divides every value by `rhs`; all zeros if `rhs` is `0`.
        impl<D: Dimension + 'static> Div<$t> for Sdf<$t, D> {
            type Output = Self;

            fn div(self, rhs: $t) -> Self {
                self.map(move |f| Ok(f.mapv(|v| guarded_div(v, rhs))))
            }
        }

        /// Divides `self` by every value; `0` where the field is `0`.
        impl<D: Dimension + 'static> Div<Sdf<$t, D>> for $t {
            type Output = Sdf<$t, D>;

            fn div(self, rhs: Sdf<$t, D>) -> Sdf<$t, D> {
                rhs.map(move |f| Ok(f.mapv(|v| guarded_div(self, v))))
            }
        }
    )*};
}

impl_scalar_div!(f32, f64);
