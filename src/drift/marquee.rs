//! Velocity-reactive drift for infinitely looping marquees.
//!
//! The accumulator in [`DriftState::position`] is unbounded and only ever moves in the current
//! direction. Wrapping into the visible band happens in [`WrapBounds::wrap`] at render time and
//! never writes back, so a marquee that runs for hours does not pick up error at the seam.

use crate::{
    foundation::core::Direction,
    foundation::error::{KineticError, KineticResult},
    foundation::math::{finite_or, wrap_euclid},
    signal::smoother::SpringConfig,
};

/// Half-open display band `[lower, upper)`, in percent of content width.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WrapBounds {
    pub lower: f64,
    pub upper: f64,
}

impl Default for WrapBounds {
    fn default() -> Self {
        Self {
            lower: -45.0,
            upper: -20.0,
        }
    }
}

impl WrapBounds {
    pub fn new(lower: f64, upper: f64) -> KineticResult<Self> {
        let b = Self { lower, upper };
        b.validate()?;
        Ok(b)
    }

    pub fn validate(&self) -> KineticResult<()> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(KineticError::validation("wrap bounds must be finite"));
        }
        if self.lower >= self.upper {
            return Err(KineticError::validation(
                "wrap lower bound must be < upper bound",
            ));
        }
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// `lower + ((position - lower) mod width)` with a non-negative modulo.
    pub fn wrap(&self, position: f64) -> f64 {
        wrap_euclid(position, self.lower, self.upper)
    }
}

/// How scroll velocity bends the drift rate.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VelocityResponse {
    /// Multiplier slope near rest, per px/s of smoothed velocity.
    pub gain: f64,
    /// Ceiling for the speed multiplier; approached asymptotically.
    pub max_multiplier: f64,
    /// Velocities inside `(-dead_band, dead_band)` never change direction.
    pub dead_band: f64,
    /// Largest step applied at once, in seconds.
    pub max_dt: f64,
}

impl Default for VelocityResponse {
    fn default() -> Self {
        Self {
            gain: 0.004,
            max_multiplier: 5.0,
            dead_band: 1.0,
            max_dt: 0.1,
        }
    }
}

impl VelocityResponse {
    pub fn validate(&self) -> KineticResult<()> {
        if !self.gain.is_finite() || self.gain < 0.0 {
            return Err(KineticError::config("velocity gain must be finite and >= 0"));
        }
        if !self.max_multiplier.is_finite() || self.max_multiplier < 1.0 {
            return Err(KineticError::config(
                "velocity max_multiplier must be finite and >= 1",
            ));
        }
        if !self.dead_band.is_finite() || self.dead_band < 0.0 {
            return Err(KineticError::config("velocity dead_band must be finite and >= 0"));
        }
        if !self.max_dt.is_finite() || self.max_dt <= 0.0 {
            return Err(KineticError::config("velocity max_dt must be finite and > 0"));
        }
        Ok(())
    }

    /// `1 + influence`, where influence saturates at `max_multiplier - 1`.
    pub fn multiplier(&self, smoothed_velocity: f64) -> f64 {
        let headroom = self.max_multiplier - 1.0;
        if !(headroom > 0.0) {
            return 1.0;
        }
        let speed = finite_or(smoothed_velocity, 0.0).abs();
        let influence = headroom * (self.gain * speed / headroom).tanh();
        1.0 + influence.clamp(0.0, headroom)
    }

    /// Direction after observing `smoothed_velocity`. A paused drift stays paused.
    pub fn next_direction(&self, smoothed_velocity: f64, current: Direction) -> Direction {
        let v = finite_or(smoothed_velocity, 0.0);
        match current {
            Direction::Idle => Direction::Idle,
            _ if v > self.dead_band => Direction::Forward,
            _ if v < -self.dead_band => Direction::Reverse,
            d => d,
        }
    }
}

/// Accumulated marquee offset and the direction it is currently moving in.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DriftState {
    pub position: f64,
    pub direction: Direction,
}

impl DriftState {
    /// State at mount: position 0, moving along the base direction.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paused() -> Self {
        Self {
            position: 0.0,
            direction: Direction::Idle,
        }
    }

    /// Wrapped offset for rendering. Does not modify the accumulator.
    pub fn display(&self, bounds: &WrapBounds) -> f64 {
        bounds.wrap(self.position)
    }
}

/// Advance a drift by one tick.
///
/// `position` moves by `direction * base_speed * dt * multiplier(|smoothed_velocity|)`. The
/// direction follows the sign of `smoothed_velocity` once it leaves the dead band and keeps its
/// last value while the velocity decays toward zero.
pub fn advance_drift(
    smoothed_velocity: f64,
    base_speed: f64,
    dt: f64,
    state: DriftState,
    response: &VelocityResponse,
) -> DriftState {
    if !dt.is_finite() || dt <= 0.0 {
        return state;
    }
    let dt = dt.min(response.max_dt);
    let velocity = finite_or(smoothed_velocity, 0.0);
    let base_speed = finite_or(base_speed, 0.0);

    let direction = response.next_direction(velocity, state.direction);
    if direction != state.direction {
        tracing::debug!(
            from = ?state.direction,
            to = ?direction,
            velocity,
            "drift direction flipped"
        );
    }

    let step = direction.sign() * base_speed * dt * response.multiplier(velocity);
    DriftState {
        position: finite_or(state.position, 0.0) + step,
        direction,
    }
}

/// Complete per-marquee configuration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MarqueeConfig {
    /// Idle drift speed in percent of content width per second; the sign picks the direction.
    pub base_speed: f64,
    pub spring: SpringConfig,
    pub wrap: WrapBounds,
    pub response: VelocityResponse,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            base_speed: 4.0,
            spring: SpringConfig::default(),
            wrap: WrapBounds::default(),
            response: VelocityResponse::default(),
        }
    }
}

impl MarqueeConfig {
    pub fn validate(&self) -> KineticResult<()> {
        if !self.base_speed.is_finite() {
            return Err(KineticError::config("marquee base_speed must be finite"));
        }
        self.spring.validate()?;
        self.wrap.validate()?;
        self.response.validate()
    }

    /// [`advance_drift`] with this config's base speed and response.
    pub fn advance(&self, smoothed_velocity: f64, dt: f64, state: DriftState) -> DriftState {
        advance_drift(smoothed_velocity, self.base_speed, dt, state, &self.response)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/drift/marquee.rs"]
mod tests;
