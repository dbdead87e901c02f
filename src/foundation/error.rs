/// Convenience result type used across Kinetic.
pub type KineticResult<T> = Result<T, KineticError>;

/// Error taxonomy for construction-time checks.
///
/// Nothing on the per-tick path returns an error; these only surface while building
/// configuration, breakpoints and curves.
#[derive(thiserror::Error, Debug)]
pub enum KineticError {
    /// Invalid host-provided data (breakpoints, curve keys, bounds).
    #[error("validation error: {0}")]
    Validation(String),

    /// A configuration object failed its consistency checks.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KineticError {
    /// Build a [`KineticError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KineticError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`KineticError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for KineticError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
