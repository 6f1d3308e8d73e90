use crate::types::Value;

// Linear interpolation from `p` at h = 0 to `q` at h = 1
#[inline]
pub fn mix<A: Value>(p: A, q: A, h: A) -> A {
    p + h * (q - p)
}

// Smaller of two values; NaN if either is NaN
#[inline]
pub fn minimum<A: Value>(a: A, b: A) -> A {
    if a.is_nan() || b.is_nan() {
        A::nan()
    } else {
        a.min(b)
    }
}

// Larger of two values; NaN if either is NaN
#[inline]
pub fn maximum<A: Value>(a: A, b: A) -> A {
    if a.is_nan() || b.is_nan() {
        A::nan()
    } else {
        a.max(b)
    }
}

// Limit `v` to [lo, hi], letting NaN through
#[inline]
pub fn clip<A: Value>(v: A, lo: A, hi: A) -> A {
    minimum(maximum(v, lo), hi)
}

// Cubic Hermite ramp of an already clipped t in [0, 1]
#[inline]
pub fn hermite<A: Value>(t: A) -> A {
    t * t * (A::constant(3.0) - A::constant(2.0) * t)
}

// Euclidean length of the positive part of (x, y, z)
#[inline]
pub fn outside_length<A: Value>(x: A, y: A, z: A) -> A {
    let (x, y, z) = (
        maximum(x, A::zero()),
        maximum(y, A::zero()),
        maximum(z, A::zero()),
    );
    (x * x + y * y + z * z).sqrt()
}
