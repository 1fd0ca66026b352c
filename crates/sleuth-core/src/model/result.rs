use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::likelihood::Likelihood;

/// A candidate day with its combined likelihood.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredDate {
    pub date: NaiveDate,
    #[ts(type = "number")]
    pub likelihood: Likelihood,
}

/// Outcome of a distribution build over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EstimationResult {
    /// Maximum-likelihood day. Absent only when every evaluated day
    /// scored exactly zero: "no confident estimate", not an error.
    pub best: Option<ScoredDate>,
    /// Days whose combined likelihood strictly exceeded the significance
    /// threshold, ascending by date. Retention does not affect `best`.
    pub retained: Vec<ScoredDate>,
}
