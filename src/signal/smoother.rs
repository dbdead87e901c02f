//! Critically-damped spring filter for noisy scalar streams.
//!
//! The filter is integrated in closed form, so a frame of `dt = 1/30` lands on the same
//! state as two frames of `dt = 1/60`. Damping below the critical value is raised to critical;
//! the filter never rings.

use crate::{
    foundation::error::{KineticError, KineticResult},
    foundation::math::finite_or,
};

const MIN_STIFFNESS: f64 = 1e-6;
const REST_EPSILON: f64 = 1e-6;
const CRITICAL_TOLERANCE: f64 = 1e-6;

/// Spring constants for [`SpringConfig::smooth`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Spring constant `k` (1/s^2). The natural frequency is `sqrt(k)`.
    pub stiffness: f64,
    /// Velocity damping `c` (1/s). Critical damping is `2 * sqrt(k)`.
    pub damping: f64,
    /// Largest step integrated at once, in seconds.
    pub max_dt: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::critical(120.0)
    }
}

impl SpringConfig {
    /// Critically damped spring with the given stiffness.
    pub fn critical(stiffness: f64) -> Self {
        Self {
            stiffness,
            damping: 2.0 * stiffness.max(0.0).sqrt(),
            max_dt: 0.1,
        }
    }

    pub fn validate(&self) -> KineticResult<()> {
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(KineticError::config("spring stiffness must be finite and > 0"));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(KineticError::config("spring damping must be finite and >= 0"));
        }
        if !self.max_dt.is_finite() || self.max_dt <= 0.0 {
            return Err(KineticError::config("spring max_dt must be finite and > 0"));
        }
        Ok(())
    }

    /// Natural angular frequency `sqrt(k)`.
    pub fn omega(&self) -> f64 {
        finite_or(self.stiffness, MIN_STIFFNESS)
            .max(MIN_STIFFNESS)
            .sqrt()
    }

    /// Damping ratio actually used, never below 1.
    pub fn damping_ratio(&self) -> f64 {
        let zeta = finite_or(self.damping, 0.0) / (2.0 * self.omega());
        zeta.max(1.0)
    }

    /// Advance `state` toward `raw` by `dt` seconds.
    ///
    /// Returns the new smoothed value together with the state to carry into the next tick.
    /// A non-positive or non-finite `dt` returns `state` untouched; a non-finite `raw` is
    /// treated as 0.
    pub fn smooth(&self, raw: f64, dt: f64, state: SmootherState) -> (f64, SmootherState) {
        if !dt.is_finite() || dt <= 0.0 {
            return (state.value, state);
        }
        let state = state.sanitized();
        let target = finite_or(raw, 0.0);
        let dt = if self.max_dt > 0.0 {
            dt.min(self.max_dt)
        } else {
            dt
        };

        let omega = self.omega();
        let zeta = self.damping_ratio();
        let x0 = state.value - target;
        let v0 = state.rate;

        let (x, v) = if zeta - 1.0 <= CRITICAL_TOLERANCE {
            let e = (-omega * dt).exp();
            let b = v0 + omega * x0;
            ((x0 + b * dt) * e, (v0 - omega * b * dt) * e)
        } else {
            let s = omega * (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * zeta + s;
            let r2 = -omega * zeta - s;
            let c1 = (v0 - r2 * x0) / (r1 - r2);
            let c2 = x0 - c1;
            let e1 = (r1 * dt).exp();
            let e2 = (r2 * dt).exp();
            (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
        };

        let next = if x.abs() < REST_EPSILON && v.abs() < REST_EPSILON {
            SmootherState {
                value: target,
                rate: 0.0,
            }
        } else {
            SmootherState {
                value: target + x,
                rate: v,
            }
        };
        (next.value, next)
    }
}

/// Value and rate of change carried between ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SmootherState {
    pub value: f64,
    pub rate: f64,
}

impl SmootherState {
    fn sanitized(self) -> Self {
        Self {
            value: finite_or(self.value, 0.0),
            rate: finite_or(self.rate, 0.0),
        }
    }
}

/// A [`SpringConfig`] bundled with the state it owns.
#[derive(Clone, Debug, Default)]
pub struct Smoother {
    config: SpringConfig,
    state: SmootherState,
}

impl Smoother {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            state: SmootherState::default(),
        }
    }

    /// Feed one raw sample and return the smoothed value.
    pub fn update(&mut self, raw: f64, dt: f64) -> f64 {
        let (value, state) = self.config.smooth(raw, dt, self.state);
        self.state = state;
        value
    }

    pub fn value(&self) -> f64 {
        self.state.value
    }

    pub fn state(&self) -> SmootherState {
        self.state
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    pub fn reset(&mut self) {
        self.state = SmootherState::default();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/signal/smoother.rs"]
mod tests;
