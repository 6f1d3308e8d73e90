//! Shared helpers for the integration tests.

#![allow(dead_code)]

use ndarray::{Array1, Array3};

/// Dense coordinate grid over the unit cube, `n` samples per axis, endpoints included.
pub fn unit_grid(n: usize) -> (Array3<f64>, Array3<f64>, Array3<f64>) {
    let step = 1.0 / (n - 1) as f64;
    (
        Array3::from_shape_fn((n, n, n), |(i, _, _)| i as f64 * step),
        Array3::from_shape_fn((n, n, n), |(_, j, _)| j as f64 * step),
        Array3::from_shape_fn((n, n, n), |(_, _, k)| k as f64 * step),
    )
}

/// Sparse grid over the unit cube: axes shaped `(n,1,1)`, `(1,n,1)` and `(1,1,n)`,
/// which broadcast against each other to `(n,n,n)`.
pub fn open_grid(n: usize) -> (Array3<f64>, Array3<f64>, Array3<f64>) {
    let step = 1.0 / (n - 1) as f64;
    (
        Array3::from_shape_fn((n, 1, 1), |(i, _, _)| i as f64 * step),
        Array3::from_shape_fn((1, n, 1), |(_, j, _)| j as f64 * step),
        Array3::from_shape_fn((1, 1, n), |(_, _, k)| k as f64 * step),
    )
}

/// Canonical sample points around the default center, as three parallel coordinate arrays.
pub fn sample_points() -> (Array1<f64>, Array1<f64>, Array1<f64>) {
    let points = [
        [0.5, 0.5, 0.5], // center
        [0.5, 0.5, 0.8], // sphere surface
        [0.8, 0.5, 0.5], // sphere surface, X
        [0.6, 0.6, 0.6], // inside
        [0.0, 0.0, 0.0], // corner
        [1.0, 0.2, 0.7], // outside
        [0.9, 0.5, 0.5], // cube face
    ];
    (
        points.iter().map(|p| p[0]).collect(),
        points.iter().map(|p| p[1]).collect(),
        points.iter().map(|p| p[2]).collect(),
    )
}

/// Assert two values are close within tolerance
pub fn assert_close(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{msg}: {a} vs {b} (diff={}, tol={tol})",
        (a - b).abs()
    );
}
