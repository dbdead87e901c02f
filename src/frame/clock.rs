use crate::{
    foundation::error::{KineticError, KineticResult},
    foundation::math::finite_or,
};

/// Bounds applied to every frame delta before it reaches the mappers.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub min_dt: f64,
    pub max_dt: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            min_dt: 0.001,
            max_dt: 0.1,
        }
    }
}

impl ClockConfig {
    pub fn validate(&self) -> KineticResult<()> {
        if !self.min_dt.is_finite() || self.min_dt <= 0.0 {
            return Err(KineticError::config("clock min_dt must be finite and > 0"));
        }
        if !self.max_dt.is_finite() || self.max_dt < self.min_dt {
            return Err(KineticError::config("clock max_dt must be finite and >= min_dt"));
        }
        Ok(())
    }

    /// Clamp `dt` into `[min_dt, max_dt]`; non-finite deltas become `min_dt`.
    pub fn clamp_dt(&self, dt: f64) -> f64 {
        finite_or(dt, self.min_dt).clamp(self.min_dt, self.max_dt.max(self.min_dt))
    }
}

/// One delivered frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameTick {
    /// Host timestamp in seconds.
    pub time_secs: f64,
    /// Clamped delta fed to the smoother and drift.
    pub dt: f64,
    /// Unclamped time since the previous frame (0 on the first frame).
    pub elapsed: f64,
}

/// Turns host timestamps into clamped frame deltas.
///
/// The first frame after mount, and any frame whose timestamp goes backwards, yields
/// `min_dt`. A resumed background tab yields `max_dt` rather than the whole pause.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    config: ClockConfig,
    last: Option<f64>,
}

impl FrameClock {
    pub fn new(config: ClockConfig) -> Self {
        Self { config, last: None }
    }

    pub fn tick(&mut self, now_secs: f64) -> FrameTick {
        let elapsed = match (self.last, now_secs.is_finite()) {
            (Some(prev), true) => (now_secs - prev).max(0.0),
            _ => 0.0,
        };
        if now_secs.is_finite() {
            self.last = Some(now_secs);
        }

        let raw = if elapsed > 0.0 { elapsed } else { self.config.min_dt };
        let dt = self.config.clamp_dt(raw);
        if dt != raw {
            tracing::trace!(raw, dt, "frame dt clamped");
        }
        FrameTick {
            time_secs: now_secs,
            dt,
            elapsed,
        }
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/clock.rs"]
mod tests;
