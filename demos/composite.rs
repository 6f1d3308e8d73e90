use std::f64::consts::FRAC_PI_4;

use ndarray::Array3;
use scalar_fields::{
    Sdf, Vector,
    constants::{GYROID_FREQ, SPHERE_RADIUS},
    types::default_center,
};

fn main() -> scalar_fields::Result<()> {
    const RESOLUTION: usize = 48;

    let step = 1.0 / (RESOLUTION - 1) as f64;
    let shape = (RESOLUTION, RESOLUTION, RESOLUTION);
    let x = Array3::from_shape_fn(shape, |(i, _, _)| i as f64 * step);
    let y = Array3::from_shape_fn(shape, |(_, j, _)| j as f64 * step);
    let z = Array3::from_shape_fn(shape, |(_, _, k)| k as f64 * step);

    let center = default_center();

    // Hollow sphere with a gyroid infill, cut by a tilted box
    let shell = Sdf::sphere(center, SPHERE_RADIUS) - Sdf::sphere(center, SPHERE_RADIUS - 0.05);
    let infill = Sdf::sphere(center, SPHERE_RADIUS - 0.05) * (Sdf::gyroid(GYROID_FREQ) / 10.0);
    let cut = Sdf::sdf_box(center, Vector::new(0.5, 0.1, 0.5))
        .rotate_z(FRAC_PI_4, center)?;

    let field = shell
        .smooth_union(&infill, 0.02)
        .smooth_difference(&cut, 0.02);
    let values = field.eval(&x, &y, &z)?;
    let normalized = field.normalized().eval(&x, &y, &z)?;

    let inside = values.iter().filter(|v| **v < 0.0).count();
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let share = 100.0 * inside as f64 / values.len() as f64;
    let mid = RESOLUTION / 2;

    println!("grid: {RESOLUTION}³ = {} samples", values.len());
    println!("inside: {inside} ({share:.1}%)");
    println!("range: [{lo:.4}, {hi:.4}]");
    println!("normalized center: {:.4}", normalized[[mid, mid, mid]]);

    Ok(())
}
