//! Threshold mapping from scroll progress to a highlighted category.

use crate::foundation::error::{KineticError, KineticResult};

/// Index of the interval containing `progress`.
///
/// `breakpoints` are sorted interior cut points; interval `i` is
/// `[breakpoints[i - 1], breakpoints[i])` with implicit bounds 0 and 1. Values below the first
/// cut (including negative progress and NaN) map to 0, values at or past the last cut map to
/// `breakpoints.len()`.
pub fn active_index(progress: f64, breakpoints: &[f64]) -> usize {
    if progress.is_nan() {
        return 0;
    }
    breakpoints.partition_point(|&cut| cut <= progress)
}

/// Validated interior cut points partitioning `[0, 1]` into `len() + 1` categories.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Breakpoints(Vec<f64>);

impl Breakpoints {
    /// Cut points must be finite, strictly ascending and inside `(0, 1)`.
    pub fn new(cuts: Vec<f64>) -> KineticResult<Self> {
        if cuts.iter().any(|c| !c.is_finite() || *c <= 0.0 || *c >= 1.0) {
            return Err(KineticError::validation(
                "breakpoints must be finite and inside (0, 1)",
            ));
        }
        if !cuts.windows(2).all(|w| w[0] < w[1]) {
            return Err(KineticError::validation(
                "breakpoints must be strictly ascending",
            ));
        }
        Ok(Self(cuts))
    }

    /// `category_count` equally sized categories.
    pub fn even(category_count: usize) -> KineticResult<Self> {
        if category_count == 0 {
            return Err(KineticError::validation("category_count must be > 0"));
        }
        let n = category_count as f64;
        Self::new((1..category_count).map(|i| i as f64 / n).collect())
    }

    pub fn category_count(&self) -> usize {
        self.0.len() + 1
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Active category for `progress`; always `< category_count()`.
    pub fn active_index(&self, progress: f64) -> usize {
        active_index(progress, &self.0)
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self(vec![1.0 / 3.0, 2.0 / 3.0])
    }
}

impl TryFrom<Vec<f64>> for Breakpoints {
    type Error = KineticError;

    fn try_from(cuts: Vec<f64>) -> KineticResult<Self> {
        Self::new(cuts)
    }
}

impl From<Breakpoints> for Vec<f64> {
    fn from(b: Breakpoints) -> Self {
        b.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    pub breakpoints: Breakpoints,
}

#[cfg(test)]
#[path = "../../tests/unit/tabs/threshold.rs"]
mod tests;
