//! Endpoint-exact linear interpolation and easing curves
//!
//! The interpolation form (1 - t) * a + t * b returns `a` exactly at t = 0 and
//! `b` exactly at t = 1, which the renderer relies on to reproduce the sampled
//! grids at the animation boundaries.

use num_traits::Float;

/// Linear interpolation between `a` and `b` at parameter `t`
///
/// Exact at both endpoints: t = 0 yields `a`, t = 1 yields `b`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    (T::one() - t) * a + t * b
}

/// Clamp a time value into [0, 1]
pub fn clamp_unit(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Smoothstep easing: t² (3 - 2t)
///
/// Fixes 0 and 1, so eased clocks keep the boundary frames exact.
pub fn smoothstep(t: f64) -> f64 {
    let t = clamp_unit(t);
    t * t * 2.0f64.mul_add(-t, 3.0)
}
