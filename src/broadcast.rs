use ndarray::{Array, ArrayView, Dimension, ErrorKind, ShapeError, Zip};
use tracing::debug;

#[cfg(feature = "parallel")]
use crate::constants::PARALLEL_MIN_LEN;
use crate::error::{FieldError, Result};

fn incompatible() -> FieldError {
    ShapeError::from_kind(ErrorKind::IncompatibleShape).into()
}

/// Computes the shape that all of `shapes` broadcast to.
///
/// Shapes are aligned on their trailing axes. Along each axis the lengths must
/// either agree or be `1`; a length-`1` axis is stretched to match. Missing
/// leading axes behave as length `1`.
///
/// ```text
///        (3, 1)
///     (2, 1, 4)
///  →  (2, 3, 4)
/// ```
///
/// Returns [`ErrorKind::IncompatibleShape`] wrapped in [`FieldError::Shape`]
/// when two lengths disagree and neither is `1`.
pub fn broadcast_shape(shapes: &[&[usize]]) -> Result<Vec<usize>> {
    let ndim = shapes.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut out = vec![1; ndim];

    for shape in shapes {
        let offset = ndim - shape.len();
        for (axis, &len) in shape.iter().enumerate() {
            let slot = &mut out[offset + axis];
            if *slot == len || len == 1 {
                continue;
            }
            if *slot != 1 {
                debug!(?shapes, axis = offset + axis, "shapes cannot be broadcast together");
                return Err(incompatible());
            }
            *slot = len;
        }
    }

    Ok(out)
}

/// Applies `f` to every element of `a`, producing a new array of the same shape.
pub(crate) fn map1<A, R, D, F>(a: ArrayView<'_, A, D>, f: F) -> Array<R, D>
where
    A: Copy + Sync,
    R: Send,
    D: Dimension,
    F: Fn(A) -> R + Send + Sync,
{
    let zip = Zip::from(a);

    #[cfg(feature = "parallel")]
    if zip.size() >= PARALLEL_MIN_LEN {
        tracing::trace!(len = zip.size(), "map1 on rayon pool");
        return zip.par_map_collect(|&a| f(a));
    }

    zip.map_collect(|&a| f(a))
}

/// Broadcasts `a` and `b` together and applies `f` pairwise.
pub(crate) fn zip2<A, R, D, F>(
    a: ArrayView<'_, A, D>,
    b: ArrayView<'_, A, D>,
    f: F,
) -> Result<Array<R, D>>
where
    A: Copy + Sync,
    R: Send,
    D: Dimension,
    F: Fn(A, A) -> R + Send + Sync,
{
    let shape = broadcast_shape(&[a.shape(), b.shape()])?;
    let (a, b) = (a.into_dyn(), b.into_dyn());
    let a = a.broadcast(shape.as_slice()).ok_or_else(incompatible)?;
    let b = b.broadcast(shape.as_slice()).ok_or_else(incompatible)?;
    let zip = Zip::from(a).and(b);

    #[cfg(feature = "parallel")]
    if zip.size() >= PARALLEL_MIN_LEN {
        tracing::trace!(?shape, "zip2 on rayon pool");
        let out = zip.par_map_collect(|&a, &b| f(a, b));
        return Ok(out.into_dimensionality::<D>()?);
    }

    let out = zip.map_collect(|&a, &b| f(a, b));
    Ok(out.into_dimensionality::<D>()?)
}

/// Broadcasts `a`, `b` and `c` together and applies `f` to each triple.
///
/// Coordinate fields use this with `(x, y, z)`; blends use it with `(a, b, weight)`.
pub(crate) fn zip3<A, R, D, F>(
    a: ArrayView<'_, A, D>,
    b: ArrayView<'_, A, D>,
    c: ArrayView<'_, A, D>,
    f: F,
) -> Result<Array<R, D>>
where
    A: Copy + Sync,
    R: Send,
    D: Dimension,
    F: Fn(A, A, A) -> R + Send + Sync,
{
    let shape = broadcast_shape(&[a.shape(), b.shape(), c.shape()])?;
    let (a, b, c) = (a.into_dyn(), b.into_dyn(), c.into_dyn());
    let a = a.broadcast(shape.as_slice()).ok_or_else(incompatible)?;
    let b = b.broadcast(shape.as_slice()).ok_or_else(incompatible)?;
    let c = c.broadcast(shape.as_slice()).ok_or_else(incompatible)?;
    let zip = Zip::from(a).and(b).and(c);

    #[cfg(feature = "parallel")]
    if zip.size() >= PARALLEL_MIN_LEN {
        tracing::trace!(?shape, "zip3 on rayon pool");
        let out = zip.par_map_collect(|&a, &b, &c| f(a, b, c));
        return Ok(out.into_dimensionality::<D>()?);
    }

    let out = zip.map_collect(|&a, &b, &c| f(a, b, c));
    Ok(out.into_dimensionality::<D>()?)
}

#[cfg(test)]
mod tests {
    use ndarray::{Array2, Array3, ArrayD, IxDyn, array};

    use super::*;

    #[test]
    fn test_broadcast_shape_equal() {
        assert_eq!(broadcast_shape(&[&[2, 3], &[2, 3]]).unwrap(), vec![2, 3]);
    }

    #[test]
    fn test_broadcast_shape_stretches_unit_axes() {
        assert_eq!(broadcast_shape(&[&[3, 1], &[1, 4]]).unwrap(), vec![3, 4]);
        let stacked = broadcast_shape(&[&[3, 1], &[2, 1, 4]]).unwrap();
        assert_eq!(stacked, vec![2, 3, 4]);
        assert_eq!(broadcast_shape(&[&[], &[5]]).unwrap(), vec![5]);
    }

    #[test]
    fn test_broadcast_shape_zero_length() {
        assert_eq!(broadcast_shape(&[&[0], &[1]]).unwrap(), vec![0]);
    }

    #[test]
    fn test_broadcast_shape_mismatch() {
        let Err(FieldError::Shape(e)) = broadcast_shape(&[&[3], &[4]]) else {
            panic!("expected shape error");
        };
        assert!(matches!(e.kind(), ErrorKind::IncompatibleShape));
    }

    #[test]
    fn test_zip2_broadcasts_rows_and_columns() {
        let col: Array2<f64> = array![[1.0], [2.0], [3.0]];
        let row: Array2<f64> = array![[10.0, 20.0]];
        let sum = zip2(col.view(), row.view(), |a, b| a + b).unwrap();
        assert_eq!(sum, array![[11.0, 21.0], [12.0, 22.0], [13.0, 23.0]]);
    }

    #[test]
    fn test_zip2_mixed_rank_dyn() {
        let a = ArrayD::<f32>::from_elem(IxDyn(&[2, 3]), 1.0);
        let b = ArrayD::<f32>::from_elem(IxDyn(&[3]), 2.0);
        let out = zip2(a.view(), b.view(), |a, b| a * b).unwrap();
        assert_eq!(out.shape(), &[2, 3]);
        assert!(out.iter().all(|&v| v == 2.0));
    }

    #[test]
    fn test_zip3_preserves_shape() {
        let x = Array3::<f64>::from_elem((2, 3, 4), 1.0);
        let y = Array3::<f64>::from_elem((2, 3, 4), 2.0);
        let z = Array3::<f64>::from_elem((2, 3, 4), 3.0);
        let out = zip3(x.view(), y.view(), z.view(), |x, y, z| x + y + z).unwrap();
        assert_eq!(out.dim(), (2, 3, 4));
        assert!(out.iter().all(|&v| v == 6.0));
    }

    #[test]
    fn test_zip3_mismatch_is_error() {
        let x = Array2::<f64>::zeros((2, 3));
        let y = Array2::<f64>::zeros((2, 3));
        let z = Array2::<f64>::zeros((3, 2));
        assert!(matches!(
            zip3(x.view(), y.view(), z.view(), |x, y, z| x + y + z),
            Err(FieldError::Shape(_))
        ));
    }

    #[test]
    fn test_map1_large_array() {
        let n = crate::constants::PARALLEL_MIN_LEN + 7;
        let a = ndarray::Array1::<f64>::from_shape_fn(n, |i| i as f64);
        let out = map1(a.view(), |v| v * 2.0);
        for (i, v) in out.iter().enumerate() {
            assert_eq!(*v, 2.0 * i as f64);
        }
    }
}
