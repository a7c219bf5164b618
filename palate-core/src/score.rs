use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{CATALOG_SCORE_CEILING, SCORE_FLOOR};

/// Per-dish confidence score, clamped to [0.01, 10.0].
/// Updated multiplicatively as answers are processed; the generic scoring
/// path uses a lower ceiling (5.0) passed explicitly to [`Score::scaled`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Score(f32);

impl Score {
    /// Every dish starts here after `initialize_scores`.
    pub const INITIAL: Score = Score(1.0);

    /// Create a new Score, clamping to [0.01, 10.0].
    pub fn new(value: f32) -> Self {
        Self(value.clamp(SCORE_FLOOR, CATALOG_SCORE_CEILING))
    }

    /// Get the raw f32 value.
    pub fn value(self) -> f32 {
        self.0
    }

    /// Multiply by `factor` and clamp to [0.01, `ceiling`].
    ///
    /// The ceiling is a parameter because the two scoring paths clamp
    /// differently (10.0 catalog, 5.0 generic).
    pub fn scaled(self, factor: f32, ceiling: f32) -> Self {
        Self((self.0 * factor).clamp(SCORE_FLOOR, ceiling))
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<Score> for f32 {
    fn from(s: Score) -> Self {
        s.0
    }
}
