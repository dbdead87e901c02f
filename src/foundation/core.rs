use crate::foundation::error::{KineticError, KineticResult};

pub use kurbo::{Affine, Vec2};

/// Signed travel direction of a drifting element.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(into = "i8", try_from = "i8")]
pub enum Direction {
    /// Against the configured base direction.
    Reverse,
    /// Paused; the accumulator does not move.
    Idle,
    /// Along the configured base direction.
    #[default]
    Forward,
}

impl Direction {
    /// `-1.0`, `0.0` or `1.0`.
    pub fn sign(self) -> f64 {
        match self {
            Self::Reverse => -1.0,
            Self::Idle => 0.0,
            Self::Forward => 1.0,
        }
    }
}

impl From<Direction> for i8 {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Reverse => -1,
            Direction::Idle => 0,
            Direction::Forward => 1,
        }
    }
}

impl TryFrom<i8> for Direction {
    type Error = KineticError;

    fn try_from(v: i8) -> KineticResult<Self> {
        match v {
            -1 => Ok(Self::Reverse),
            0 => Ok(Self::Idle),
            1 => Ok(Self::Forward),
            other => Err(KineticError::validation(format!(
                "direction must be -1, 0 or 1, got {other}"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
