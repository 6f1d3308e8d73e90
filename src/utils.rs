use ndarray::{Array, ArrayBase, ArrayView, Data, Dimension};
use tracing::debug;

#[cfg(feature = "parallel")]
use crate::constants::PARALLEL_MIN_LEN;
use crate::{
    broadcast::map1,
    constants::NORMALIZE_EPSILON,
    error::{FieldError, Result},
    interp::{clip, hermite, maximum, minimum},
    types::Value,
};

/// Classic smoothstep: `0` below `edge0`, `1` above `edge1`, a cubic ramp between.
///
/// ```text
/// t      = clip((x - edge0) / (edge1 - edge0), 0, 1)
/// result = t² · (3 - 2t)
/// ```
///
/// `edge0 == edge1` is not guarded: the division yields inf or NaN and the
/// result follows IEEE-754 arithmetic.
pub fn smooth_step<A, S, D>(edge0: A, edge1: A, x: &ArrayBase<S, D>) -> Array<A, D>
where
    A: Value,
    S: Data<Elem = A>,
    D: Dimension,
{
    let width = edge1 - edge0;
    map1(x.view(), move |x| {
        hermite(clip((x - edge0) / width, A::zero(), A::one()))
    })
}

/// Limits every element of `x` to `[min_val, max_val]`.
///
/// The conventional bounds are [`CLAMP_MIN`](crate::constants::CLAMP_MIN) and
/// [`CLAMP_MAX`](crate::constants::CLAMP_MAX). NaN elements stay NaN.
pub fn clamp<A, S, D>(x: &ArrayBase<S, D>, min_val: A, max_val: A) -> Array<A, D>
where
    A: Value,
    S: Data<Elem = A>,
    D: Dimension,
{
    map1(x.view(), move |x| clip(x, min_val, max_val))
}

/// Rescales a field so that its own minimum maps to `-1` and its maximum to `1`.
///
/// The minimum and maximum are taken once over the whole array, then:
/// ```text
/// f' = (f - min) / (max - min + 1e-8)
/// result = f' · 2 - 1
/// ```
/// The epsilon keeps a constant field finite; it maps to `-1` everywhere.
///
/// Returns [`FieldError::EmptyField`] if `f` has no elements.
pub fn normalize_to_sdf_range<A, S, D>(f: &ArrayBase<S, D>) -> Result<Array<A, D>>
where
    A: Value,
    S: Data<Elem = A>,
    D: Dimension,
{
    let (lo, hi) = min_max(f.view()).ok_or(FieldError::EmptyField)?;
    let epsilon = A::constant(NORMALIZE_EPSILON);
    if hi - lo <= epsilon {
        debug!(min = ?lo, max = ?hi, "normalizing a (near-)constant field");
    }

    let range = hi - lo + epsilon;
    let two = A::constant(2.0);
    Ok(map1(f.view(), move |v| (v - lo) / range * two - A::one()))
}

/// Minimum and maximum of `f`, or `None` if it is empty. NaN anywhere gives NaN for both.
fn min_max<A, D>(f: ArrayView<'_, A, D>) -> Option<(A, A)>
where
    A: Value,
    D: Dimension,
{
    let merge = |(lo, hi): (A, A), (l, h): (A, A)| (minimum(lo, l), maximum(hi, h));

    #[cfg(feature = "parallel")]
    if f.len() >= PARALLEL_MIN_LEN
        && let Some(values) = f.as_slice_memory_order()
    {
        use rayon::prelude::*;

        tracing::trace!(len = values.len(), "min/max reduction on rayon pool");
        return values.par_iter().map(|&v| (v, v)).reduce_with(merge);
    }

    f.iter().map(|&v| (v, v)).reduce(merge)
}
