//! Default parameters and tuning constants.
//!
//! Rust has no default arguments, so the conventional parameter values of each
//! field live here and are converted with [`Value::constant`](crate::types::Value::constant).

/// Per-axis coordinate of the default center, see [`default_center`](crate::types::default_center).
pub const CENTER: f64 = 0.5;

/// Default radius of [`sdf_sphere`](crate::primitives::sdf_sphere).
pub const SPHERE_RADIUS: f64 = 0.3;

/// Default half-extent of [`sdf_cube`](crate::primitives::sdf_cube).
pub const CUBE_SIZE: f64 = 0.4;

/// Default per-axis half-extent of [`sdf_box`](crate::primitives::sdf_box) and friends.
pub const BOX_BOUNDS: f64 = 0.5;

/// Default corner radius of [`sdf_rounded_box`](crate::primitives::sdf_rounded_box).
pub const BOX_ROUNDING: f64 = 0.1;

/// Default edge thickness of [`sdf_box_frame`](crate::primitives::sdf_box_frame).
pub const BOX_FRAME_EDGE: f64 = 0.05;

/// Default falloff of [`gaussian_sphere`](crate::primitives::gaussian_sphere).
pub const GAUSSIAN_STRENGTH: f64 = 30.0;

/// Default falloff of [`gaussian_cube`](crate::primitives::gaussian_cube).
pub const GAUSSIAN_SCALE: f64 = 30.0;

/// Default frequency of [`gyroid`](crate::patterns::gyroid), in half-periods per unit.
pub const GYROID_FREQ: f64 = 5.0;

/// Default angular frequency of [`wave_pattern`](crate::patterns::wave_pattern).
pub const WAVE_FREQ: f64 = 8.0;

/// Default lower bound of [`clamp`](crate::utils::clamp).
pub const CLAMP_MIN: f64 = 0.0;

/// Default upper bound of [`clamp`](crate::utils::clamp).
pub const CLAMP_MAX: f64 = 1.0;

/// Added to the range in [`normalize_to_sdf_range`](crate::utils::normalize_to_sdf_range)
/// so a constant field does not divide by zero.
pub const NORMALIZE_EPSILON: f64 = 1e-8;

/// Arrays with at least this many elements are processed on the rayon pool
/// when the `parallel` feature is enabled.
pub const PARALLEL_MIN_LEN: usize = 1 << 15;
