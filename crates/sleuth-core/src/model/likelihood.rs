use serde::{Deserialize, Serialize};

/// Combined likelihood value, clamped to [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Likelihood(f64);

impl Likelihood {
    /// Clamping constructor.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// True if the value strictly exceeds `threshold`.
    pub fn exceeds(self, threshold: f64) -> bool {
        self.0 > threshold
    }
}
