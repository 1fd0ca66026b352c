use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{SleuthError, SleuthResult};

/// Whether an anchor's influence recurs every calendar year or applies
/// exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum WrapMode {
    /// Recurs on a fixed 365-day cycle. Leap-day drift is accepted, not
    /// corrected.
    CyclicAnnual,
    /// Occurs once.
    Absolute,
}

/// One piece of temporal evidence: a date-centered probability lobe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Anchor {
    /// Peak of the lobe.
    pub center: NaiveDate,
    /// Spread in days. Must be positive and finite.
    pub sigma_days: f64,
    pub wrap: WrapMode,
}

impl Anchor {
    /// Build a validated anchor.
    pub fn new(center: NaiveDate, sigma_days: f64, wrap: WrapMode) -> SleuthResult<Self> {
        let anchor = Self {
            center,
            sigma_days,
            wrap,
        };
        anchor.validate()?;
        Ok(anchor)
    }

    /// Re-check invariants on values that bypassed [`Anchor::new`], e.g.
    /// deserialized request payloads.
    pub fn validate(&self) -> SleuthResult<()> {
        if !self.sigma_days.is_finite() || self.sigma_days <= 0.0 {
            return Err(SleuthError::NonPositiveSigma {
                sigma: self.sigma_days,
            });
        }
        Ok(())
    }
}
