//! Periodic patterns, typically used as infill or modulation of other fields.

use std::f64::consts::PI;

use ndarray::{Array, ArrayBase, Data, Dimension};

use crate::{broadcast::zip3, error::Result, types::Value};

/// Gyroid lattice, a triply-periodic minimal-surface approximation.
///
/// With `f = freq·π`:
/// ```text
/// (sin(f·x)·cos(f·y) + sin(f·y)·cos(f·z) + sin(f·z)·cos(f·x)) / 3
/// ```
/// Values lie in roughly `[-1, 1]`; the surface is the zero set.
pub fn gyroid<A, S1, S2, S3, D>(
    x: &ArrayBase<S1, D>,
    y: &ArrayBase<S2, D>,
    z: &ArrayBase<S3, D>,
    freq: A,
) -> Result<Array<A, D>>
where
    A: Value,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    S3: Data<Elem = A>,
    D: Dimension,
{
    let f = freq * A::constant(PI);
    let three = A::constant(3.0);
    zip3(x.view(), y.view(), z.view(), move |x, y, z| {
        let (fx, fy, fz) = (f * x, f * y, f * z);
        (fx.sin() * fy.cos() + fy.sin() * fz.cos() + fz.sin() * fx.cos()) / three
    })
}

/// Sum of one sine wave per axis: `sin(freq·x) + sin(freq·y) + sin(freq·z)`, in `[-3, 3]`.
pub fn wave_pattern<A, S1, S2, S3, D>(
    x: &ArrayBase<S1, D>,
    y: &ArrayBase<S2, D>,
    z: &ArrayBase<S3, D>,
    freq: A,
) -> Result<Array<A, D>>
where
    A: Value,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    S3: Data<Elem = A>,
    D: Dimension,
{
    zip3(x.view(), y.view(), z.view(), move |x, y, z| {
        (freq * x).sin() + (freq * y).sin() + (freq * z).sin()
    })
}
