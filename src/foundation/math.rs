//! Scalar helpers shared by the smoother, drift and carousel mappers.

/// Replace NaN and infinities with `fallback`.
#[inline]
pub fn finite_or(x: f64, fallback: f64) -> f64 {
    if x.is_finite() { x } else { fallback }
}

/// Unclamped linear interpolation; `t` outside `[0, 1]` extrapolates.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamp scalar value to normalized range `[0, 1]`.
#[inline]
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Position of `x` between `a` and `b`, unclamped. Degenerate spans map to 0.
#[inline]
pub fn inverse_lerp(a: f64, b: f64, x: f64) -> f64 {
    let span = b - a;
    if span == 0.0 { 0.0 } else { (x - a) / span }
}

/// Hermite smoothstep of `x` across `[edge0, edge1]`, clamped to `[0, 1]`.
#[inline]
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = clamp01(inverse_lerp(edge0, edge1, x));
    t * t * (3.0 - 2.0 * t)
}

/// Map an unbounded value into `[lower, upper)`.
///
/// The remainder is Euclidean, so negative inputs wrap the same way positive ones do and the
/// result never equals `upper`. A non-positive span collapses to `lower`.
pub fn wrap_euclid(x: f64, lower: f64, upper: f64) -> f64 {
    let width = upper - lower;
    if !(width > 0.0) || !width.is_finite() {
        return lower;
    }
    let x = finite_or(x, lower);
    let mut r = (x - lower).rem_euclid(width);
    // rem_euclid rounds up to `width` for tiny negative offsets.
    if r >= width {
        r = 0.0;
    }
    let out = lower + r;
    if out >= upper { lower } else { out }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
