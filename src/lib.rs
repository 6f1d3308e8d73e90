//! Scalar fields sampled over coordinate arrays.
//!
//! Every function takes `x`, `y`, `z` arrays of matching (or broadcastable)
//! shape and returns a field array of the broadcast shape. Grid construction is
//! left to the caller.

pub mod blend;
pub mod broadcast;
pub mod compose;
pub mod constants;
pub mod error;
pub mod field;
pub mod interp;
pub mod patterns;
pub mod primitives;
pub mod transform;
pub mod types;
pub mod utils;

pub use error::{FieldError, Result};
pub use field::Sdf;
pub use types::{Matrix, Point, Value, Vector};
