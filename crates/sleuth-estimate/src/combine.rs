//! Multiplicative combination of anchor evidence.

use chrono::NaiveDate;

use sleuth_core::model::Anchor;

use crate::kernel;

/// Combined likelihood of a candidate day under every anchor at once.
///
/// Anchors are independent evidence and the product is an AND over soft
/// evidence: a day implausible under any single anchor scores near zero.
/// An empty set returns 0.0 — no evidence, no confidence.
pub fn combined_likelihood(candidate: NaiveDate, anchors: &[Anchor]) -> f64 {
    if anchors.is_empty() {
        return 0.0;
    }
    anchors.iter().map(|a| kernel::score(candidate, a)).product()
}
