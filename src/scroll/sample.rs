use crate::{
    foundation::error::{KineticError, KineticResult},
    foundation::math::{finite_or, inverse_lerp},
};

/// One scroll observation delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollSample {
    pub time_secs: f64,
    /// Cumulative scroll distance; grows downward.
    pub scroll_px: f64,
}

impl ScrollSample {
    pub fn new(time_secs: f64, scroll_px: f64) -> Self {
        Self {
            time_secs,
            scroll_px,
        }
    }
}

/// The span of page scroll a scrubbed effect is pinned to.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScrollRegion {
    pub start_px: f64,
    pub end_px: f64,
}

impl Default for ScrollRegion {
    fn default() -> Self {
        Self {
            start_px: 0.0,
            end_px: 3000.0,
        }
    }
}

impl ScrollRegion {
    pub fn validate(&self) -> KineticResult<()> {
        if !self.start_px.is_finite() || !self.end_px.is_finite() {
            return Err(KineticError::config("scroll region bounds must be finite"));
        }
        if self.end_px <= self.start_px {
            return Err(KineticError::config("scroll region end must be past its start"));
        }
        Ok(())
    }

    /// Fraction of the region scrolled. Not clamped: overscroll yields values outside `[0, 1]`.
    pub fn progress(&self, scroll_px: f64) -> f64 {
        finite_or(inverse_lerp(self.start_px, self.end_px, scroll_px), 0.0)
    }

    /// Inverse of [`ScrollRegion::progress`].
    pub fn scroll_at(&self, progress: f64) -> f64 {
        self.start_px + (self.end_px - self.start_px) * progress
    }
}

/// Finite-difference velocity from successive scroll positions.
#[derive(Clone, Debug, Default)]
pub struct VelocityEstimator {
    last_px: Option<f64>,
    last_velocity: f64,
}

impl VelocityEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Velocity in px/s since the previous sample.
    ///
    /// The first sample and a non-finite position report 0; a non-finite position is not
    /// remembered. A sample with no elapsed time (repeated or backwards timestamp) repeats the
    /// previous estimate and keeps the earlier position, so its displacement is measured over
    /// the next real interval.
    pub fn observe(&mut self, scroll_px: f64, elapsed: f64) -> f64 {
        if !scroll_px.is_finite() {
            return 0.0;
        }
        let Some(prev) = self.last_px else {
            self.last_px = Some(scroll_px);
            return 0.0;
        };
        if !(elapsed.is_finite() && elapsed > 0.0) {
            return self.last_velocity;
        }
        self.last_px = Some(scroll_px);
        self.last_velocity = (scroll_px - prev) / elapsed;
        self.last_velocity
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/sample.rs"]
mod tests;
