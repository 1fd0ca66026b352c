//! Gaussian scoring kernel.
//!
//! Unnormalized Gaussian over day offsets: the peak value is exactly 1.0
//! at the anchor center, not a true probability density.

use chrono::NaiveDate;

use sleuth_core::config::defaults::WRAP_PERIOD_DAYS;
use sleuth_core::model::{Anchor, WrapMode};

/// Score a candidate day against one anchor. Pure; range (0.0, 1.0].
///
/// Callers guarantee `anchor.sigma_days > 0`; anchors are validated at
/// construction and re-validated by the distribution builder.
pub fn score(candidate: NaiveDate, anchor: &Anchor) -> f64 {
    let d = (candidate - anchor.center).num_days() as f64;
    let offset = match anchor.wrap {
        WrapMode::Absolute => d,
        WrapMode::CyclicAnnual => wrapped_offset(d),
    };
    (-0.5 * (offset / anchor.sigma_days).powi(2)).exp()
}

/// Nearest-occurrence day offset under the fixed 365-day annual wrap.
/// Only the adjacent year's occurrence in either direction is reachable;
/// leap drift is not corrected.
fn wrapped_offset(d: f64) -> f64 {
    d.abs()
        .min((d + WRAP_PERIOD_DAYS).abs())
        .min((d - WRAP_PERIOD_DAYS).abs())
}
