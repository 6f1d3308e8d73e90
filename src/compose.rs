//! CSG-style compositing of two fields.
//!
//! Operands follow the signed-distance convention: negative values are inside.
//! Inputs must be broadcast-compatible; the result has the broadcast shape.
//!
//! The smooth variants blend across a band of width `k` around the seam. They
//! divide by `k`, so `k = 0` produces inf / NaN rather than an error.

use ndarray::{Array, ArrayBase, Data, Dimension};

use crate::{
    broadcast::zip2,
    error::Result,
    interp::{clip, maximum, minimum, mix},
    types::Value,
};

/// Inside either shape: `min(a, b)`.
pub fn union<A, S1, S2, D>(a: &ArrayBase<S1, D>, b: &ArrayBase<S2, D>) -> Result<Array<A, D>>
where
    A: Value,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D: Dimension,
{
    zip2(a.view(), b.view(), minimum)
}

/// Inside both shapes: `max(a, b)`.
pub fn intersection<A, S1, S2, D>(a: &ArrayBase<S1, D>, b: &ArrayBase<S2, D>) -> Result<Array<A, D>>
where
    A: Value,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D: Dimension,
{
    zip2(a.view(), b.view(), maximum)
}

/// `a` with `b` carved out: `max(a, -b)`.
pub fn subtraction<A, S1, S2, D>(a: &ArrayBase<S1, D>, b: &ArrayBase<S2, D>) -> Result<Array<A, D>>
where
    A: Value,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D: Dimension,
{
    zip2(a.view(), b.view(), |a, b| maximum(a, -b))
}

/// Inside exactly one of the shapes: `max(min(a, b), -max(a, b))`.
pub fn xor<A, S1, S2, D>(a: &ArrayBase<S1, D>, b: &ArrayBase<S2, D>) -> Result<Array<A, D>>
where
    A: Value,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D: Dimension,
{
    zip2(a.view(), b.view(), |a, b| maximum(minimum(a, b), -maximum(a, b)))
}

/// Union with a rounded seam.
///
/// ```text
/// h      = clip(0.5 + 0.5·(b - a)/k, 0, 1)
/// result = mix(b, a, h) - k·h·(1 - h)
/// ```
///
/// Converges to [`union`] as `k → 0⁺`.
pub fn smooth_union<A, S1, S2, D>(
    a: &ArrayBase<S1, D>,
    b: &ArrayBase<S2, D>,
    k: A,
) -> Result<Array<A, D>>
where
    A: Value,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D: Dimension,
{
    let half = A::constant(0.5);
    zip2(a.view(), b.view(), move |a, b| {
        let h = clip(half + half * (b - a) / k, A::zero(), A::one());
        mix(b, a, h) - k * h * (A::one() - h)
    })
}

/// Intersection with a rounded seam.
///
/// ```text
/// h      = clip(0.5 - 0.5·(b - a)/k, 0, 1)
/// result = mix(b, a, h) + k·h·(1 - h)
/// ```
pub fn smooth_intersection<A, S1, S2, D>(
    a: &ArrayBase<S1, D>,
    b: &ArrayBase<S2, D>,
    k: A,
) -> Result<Array<A, D>>
where
    A: Value,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D: Dimension,
{
    let half = A::constant(0.5);
    zip2(a.view(), b.view(), move |a, b| {
        let h = clip(half - half * (b - a) / k, A::zero(), A::one());
        mix(b, a, h) + k * h * (A::one() - h)
    })
}

/// Subtraction of `b` from `a` with a rounded seam.
///
/// ```text
/// h      = clip(0.5 - 0.5·(b + a)/k, 0, 1)
/// result = mix(a, -b, h) + k·h·(1 - h)
/// ```
pub fn smooth_subtraction<A, S1, S2, D>(
    a: &ArrayBase<S1, D>,
    b: &ArrayBase<S2, D>,
    k: A,
) -> Result<Array<A, D>>
where
    A: Value,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D: Dimension,
{
    let half = A::constant(0.5);
    zip2(a.view(), b.view(), move |a, b| {
        let h = clip(half - half * (b + a) / k, A::zero(), A::one());
        mix(a, -b, h) + k * h * (A::one() - h)
    })
}

#[cfg(test)]
mod tests {
    use ndarray::{Array1, Array2, array};

    use super::*;
    use crate::error::FieldError;

    fn sample() -> (Array1<f64>, Array1<f64>) {
        (
            array![-1.0, -0.2, 0.0, 0.3, 2.0, 0.5, -0.7],
            array![0.5, -0.4, 0.0, 0.3, -3.0, 0.45, 1.2],
        )
    }

    #[test]
    fn test_union_is_min() {
        let (a, b) = sample();
        let u = union(&a, &b).unwrap();
        for i in 0..a.len() {
            assert_eq!(u[i], a[i].min(b[i]));
        }
    }

    #[test]
    fn test_intersection_is_max() {
        let (a, b) = sample();
        let n = intersection(&a, &b).unwrap();
        for i in 0..a.len() {
            assert_eq!(n[i], a[i].max(b[i]));
        }
    }

    #[test]
    fn test_subtraction() {
        let (a, b) = sample();
        let s = subtraction(&a, &b).unwrap();
        for i in 0..a.len() {
            assert_eq!(s[i], a[i].max(-b[i]));
        }
    }

    #[test]
    fn test_xor() {
        let a = array![-1.0_f64, -1.0, 1.0];
        let b = array![-0.5_f64, 2.0, 3.0];
        let x = xor(&a, &b).unwrap();
        // Inside both: pushed outside
        assert_eq!(x[0], 0.5);
        // Inside only a: stays inside
        assert_eq!(x[1], -1.0);
        // Inside neither
        assert_eq!(x[2], 1.0);
    }

    #[test]
    fn test_smooth_union_converges_to_union() {
        let (a, b) = sample();
        let s = smooth_union(&a, &b, 1e-4).unwrap();
        let u = union(&a, &b).unwrap();
        for (s, u) in s.iter().zip(u.iter()) {
            assert!((s - u).abs() < 1e-3, "smooth {s} vs hard {u}");
        }
    }

    #[test]
    fn test_smooth_union_seam() {
        // Equal operands: h = 0.5, result = a - k/4
        let a = array![0.2_f64];
        let s = smooth_union(&a, &a, 0.4).unwrap();
        assert!((s[0] - (0.2 - 0.1)).abs() < 1e-12);
        assert!(s[0] < union(&a, &a).unwrap()[0]);
    }

    #[test]
    fn test_smooth_union_far_from_seam_is_exact() {
        let a = array![-1.0_f64];
        let b = array![1.0_f64];
        assert_eq!(smooth_union(&a, &b, 0.1).unwrap()[0], -1.0);
        assert_eq!(smooth_union(&b, &a, 0.1).unwrap()[0], -1.0);
    }

    #[test]
    fn test_smooth_intersection() {
        let (a, b) = sample();
        let s = smooth_intersection(&a, &b, 1e-4).unwrap();
        let n = intersection(&a, &b).unwrap();
        for (s, n) in s.iter().zip(n.iter()) {
            assert!((s - n).abs() < 1e-3);
        }

        let a = array![0.2_f64];
        let s = smooth_intersection(&a, &a, 0.4).unwrap();
        assert!((s[0] - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_smooth_subtraction() {
        let (a, b) = sample();
        let s = smooth_subtraction(&a, &b, 1e-4).unwrap();
        let hard = subtraction(&a, &b).unwrap();
        for (s, hard) in s.iter().zip(hard.iter()) {
            assert!((s - hard).abs() < 1e-3);
        }

        // a = -b: h = 0.5, mix(a, -b) = a, plus k/4
        let a = array![-0.3_f64];
        let b = array![0.3_f64];
        let s = smooth_subtraction(&a, &b, 0.2).unwrap();
        assert!((s[0] - (-0.3 + 0.05)).abs() < 1e-12);
    }

    #[test]
    fn test_smooth_zero_k_is_not_guarded() {
        let a = array![0.25_f64, 0.0];
        let b = array![0.25_f64, 1.0];
        let s = smooth_union(&a, &b, 0.0).unwrap();
        // 0 / 0 on the seam
        assert!(s[0].is_nan());
        // inf elsewhere, which the clip turns back into a hard union
        assert_eq!(s[1], 0.0);
    }

    #[test]
    fn test_broadcast_operands() {
        let a: Array2<f64> = array![[0.0], [1.0], [2.0]];
        let b: Array2<f64> = array![[0.5, 1.5]];
        let u = union(&a, &b).unwrap();
        assert_eq!(u, array![[0.0, 0.0], [0.5, 1.0], [0.5, 1.5]]);
    }

    #[test]
    fn test_mismatched_shapes() {
        let a = Array1::<f64>::zeros(3);
        let b = Array1::<f64>::zeros(4);
        assert!(matches!(union(&a, &b), Err(FieldError::Shape(_))));
        assert!(matches!(
            smooth_union(&a, &b, 0.1),
            Err(FieldError::Shape(_))
        ));
    }
}
