//! Keyed scalar curves over a signed distance axis.
//!
//! A [`Curve`] maps a panel's distance from the active step to a property value. Between keys
//! the value follows the left key's [`Ease`]; past either end it continues along the secant of
//! the outermost segment, so out-of-range inputs extrapolate linearly instead of clamping.

use crate::{
    animation::ease::Ease,
    foundation::error::{KineticError, KineticResult},
    foundation::math::{finite_or, inverse_lerp, lerp},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurveKey {
    pub at: f64,
    pub value: f64,
    #[serde(default)]
    pub ease: Ease, // applied toward the next key
}

impl CurveKey {
    pub fn new(at: f64, value: f64, ease: Ease) -> Self {
        Self { at, value, ease }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Curve {
    pub keys: Vec<CurveKey>, // strictly ascending by `at`
}

impl Curve {
    /// Build a curve and validate its keys.
    pub fn new(keys: Vec<CurveKey>) -> KineticResult<Self> {
        let curve = Self { keys };
        curve.validate()?;
        Ok(curve)
    }

    /// Curve that is zero everywhere.
    pub fn flat() -> Self {
        Self { keys: Vec::new() }
    }

    /// Point-symmetric curve through the origin: `f(-d) = -f(d)`.
    ///
    /// `points` are `(distance, value)` pairs with ascending positive distances.
    pub fn odd(points: &[(f64, f64)], ease: Ease) -> Self {
        Self::mirrored(points, ease, -1.0)
    }

    /// Mirror-symmetric curve with `f(0) = 0`: `f(-d) = f(d)`.
    pub fn even(points: &[(f64, f64)], ease: Ease) -> Self {
        Self::mirrored(points, ease, 1.0)
    }

    fn mirrored(points: &[(f64, f64)], ease: Ease, mirror: f64) -> Self {
        let mut keys = Vec::with_capacity(points.len() * 2 + 1);
        for &(at, value) in points.iter().rev() {
            keys.push(CurveKey::new(-at, value * mirror, ease));
        }
        keys.push(CurveKey::new(0.0, 0.0, ease));
        for &(at, value) in points {
            keys.push(CurveKey::new(at, value, ease));
        }
        Self { keys }
    }

    pub fn validate(&self) -> KineticResult<()> {
        if self
            .keys
            .iter()
            .any(|k| !k.at.is_finite() || !k.value.is_finite())
        {
            return Err(KineticError::validation("curve keys must be finite"));
        }
        if !self.keys.windows(2).all(|w| w[0].at < w[1].at) {
            return Err(KineticError::validation(
                "curve keys must be strictly ascending by distance",
            ));
        }
        Ok(())
    }

    /// True when the curve evaluates to zero at distance 0.
    pub fn is_neutral_at_origin(&self) -> bool {
        self.sample(0.0).abs() <= 1e-9
    }

    /// Evaluate the curve at signed distance `d`. Non-finite `d` is treated as 0.
    pub fn sample(&self, d: f64) -> f64 {
        let d = finite_or(d, 0.0);
        let keys = self.keys.as_slice();
        match keys {
            [] => 0.0,
            [only] => only.value,
            [first, second, ..] if d <= first.at => {
                first.value + segment_slope(first, second) * (d - first.at)
            }
            [.., before_last, last] if d >= last.at => {
                last.value + segment_slope(before_last, last) * (d - last.at)
            }
            _ => {
                let idx = keys.partition_point(|k| k.at <= d);
                let a = &keys[idx - 1];
                let b = &keys[idx];
                let t = inverse_lerp(a.at, b.at, d);
                lerp(a.value, b.value, a.ease.apply(t))
            }
        }
    }
}

fn segment_slope(a: &CurveKey, b: &CurveKey) -> f64 {
    let span = b.at - a.at;
    if span > 0.0 {
        (b.value - a.value) / span
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
