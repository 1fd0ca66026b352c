//! JSON-boundary request and response types.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use sleuth_core::model::{Anchor, DateRange, ScoredDate};

/// Narrowing hint for an age-based request. The four seasons narrow the
/// anchor to a season midpoint; `Christmas` pins it near the nearest
/// Dec 25; `Birthday` pins it near the anniversary itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SeasonHint {
    Spring,
    Summer,
    Fall,
    Winter,
    Christmas,
    Birthday,
}

/// An estimation request: explicit anchors over a range, or a person/age
/// lookup that the age resolver turns into a single anchor. A missing
/// range falls back to the broad 2000–2025 default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EstimateRequest {
    Anchors {
        anchors: Vec<Anchor>,
        range: Option<DateRange>,
    },
    Age {
        person: String,
        age: i32,
        season: Option<SeasonHint>,
        range: Option<DateRange>,
    },
}

/// Engine output for the metadata write-back and visualization
/// collaborators: an ISO-8601 point estimate — absent when no day in
/// range cleared zero likelihood — plus the retained distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EstimateResponse {
    pub estimated_date: Option<String>,
    pub distribution: Vec<ScoredDate>,
}
