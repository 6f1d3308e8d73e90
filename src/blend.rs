use ndarray::{Array, ArrayBase, ArrayView, Data, Dimension};

use crate::{
    broadcast::{zip2, zip3},
    error::Result,
    types::Value,
};

/// Interpolation weight for [`lerp`]: one scalar for the whole field, or a
/// per-element array broadcastable with the operands.
pub enum Weight<'a, A, D> {
    Scalar(A),
    Array(ArrayView<'a, A, D>),
}

impl<D> From<f32> for Weight<'_, f32, D> {
    fn from(t: f32) -> Self {
        Weight::Scalar(t)
    }
}

impl<D> From<f64> for Weight<'_, f64, D> {
    fn from(t: f64) -> Self {
        Weight::Scalar(t)
    }
}

impl<'a, A, D> From<ArrayView<'a, A, D>> for Weight<'a, A, D> {
    fn from(t: ArrayView<'a, A, D>) -> Self {
        Weight::Array(t)
    }
}

impl<'a, A, S, D> From<&'a ArrayBase<S, D>> for Weight<'a, A, D>
where
    S: Data<Elem = A>,
    D: Dimension,
{
    fn from(t: &'a ArrayBase<S, D>) -> Self {
        Weight::Array(t.view())
    }
}

#[inline]
fn weighted<A: Value>(a: A, b: A, t: A) -> A {
    (A::one() - t) * a + t * b
}

/// Linear interpolation `(1 - t)·a + t·b`.
///
/// `t` may be a scalar or an array; it is not clamped, so values outside
/// `[0, 1]` extrapolate. `t = 0` returns `a` and `t = 1` returns `b` exactly.
///
/// ```rust,ignore
/// let halfway = lerp(&a, &b, 0.5)?;
/// let graded = lerp(&a, &b, &ramp)?;
/// ```
pub fn lerp<'a, A, S1, S2, D>(
    a: &ArrayBase<S1, D>,
    b: &ArrayBase<S2, D>,
    t: impl Into<Weight<'a, A, D>>,
) -> Result<Array<A, D>>
where
    A: Value,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D: Dimension,
{
    match t.into() {
        Weight::Scalar(t) => zip2(a.view(), b.view(), move |a, b| weighted(a, b, t)),
        Weight::Array(t) => zip3(a.view(), b.view(), t, weighted),
    }
}

/// Per-element mix of two fields, `(1 - mask)·a + mask·b`.
///
/// The same arithmetic as [`lerp`] with an array weight, named for call sites
/// that combine two fields through a third one. `mask` is not clamped.
pub fn blend<A, S1, S2, S3, D>(
    a: &ArrayBase<S1, D>,
    b: &ArrayBase<S2, D>,
    mask: &ArrayBase<S3, D>,
) -> Result<Array<A, D>>
where
    A: Value,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    S3: Data<Elem = A>,
    D: Dimension,
{
    zip3(a.view(), b.view(), mask.view(), weighted)
}

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};

    use super::*;

    fn operands() -> (Array2<f64>, Array2<f64>) {
        (
            array![[0.1, -3.7], [1e9, 0.0]],
            array![[2.9, 4.25], [-1e-9, 17.0]],
        )
    }

    #[test]
    fn test_lerp_endpoints_exact() {
        let (a, b) = operands();
        assert_eq!(lerp(&a, &b, 0.0).unwrap(), a);
        assert_eq!(lerp(&a, &b, 1.0).unwrap(), b);
    }

    #[test]
    fn test_lerp_midpoint() {
        let a = array![0.0_f64, 2.0];
        let b = array![1.0_f64, 4.0];
        assert_eq!(lerp(&a, &b, 0.5).unwrap(), array![0.5, 3.0]);
    }

    #[test]
    fn test_lerp_array_weight() {
        let a = array![0.0_f64, 0.0, 0.0];
        let b = array![10.0_f64, 10.0, 10.0];
        let t = array![0.0_f64, 0.25, 2.0];
        assert_eq!(lerp(&a, &b, &t).unwrap(), array![0.0, 2.5, 20.0]);
        assert_eq!(lerp(&a, &b, t.view()).unwrap(), array![0.0, 2.5, 20.0]);
    }

    #[test]
    fn test_lerp_broadcast_weight() {
        let a = Array2::<f64>::zeros((2, 3));
        let b = Array2::<f64>::ones((2, 3));
        let t: Array2<f64> = array![[0.0], [1.0]];
        let out = lerp(&a, &b, &t).unwrap();
        assert_eq!(out, array![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]);
    }

    #[test]
    fn test_blend_matches_lerp() {
        let (a, b) = operands();
        let mask = array![[0.0, 0.3], [1.0, -0.5]];
        assert_eq!(blend(&a, &b, &mask).unwrap(), lerp(&a, &b, &mask).unwrap());
    }

    #[test]
    fn test_blend_f32() {
        let a = array![1.0_f32, 1.0];
        let b = array![3.0_f32, 3.0];
        let mask = array![0.5_f32, 0.0];
        assert_eq!(blend(&a, &b, &mask).unwrap(), array![2.0_f32, 1.0]);
    }
}
