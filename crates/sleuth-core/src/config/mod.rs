pub mod defaults;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::DateRange;

/// Tunable estimator parameters. `Default` mirrors the constants in
/// [`defaults`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Minimum combined likelihood for a day to be retained in the
    /// displayable distribution. Max tracking ignores this.
    pub significance_threshold: f64,
    /// Spread for "sometime in that year of life" age anchors.
    pub year_sigma_days: f64,
    /// Spread for season-narrowed age anchors.
    pub season_sigma_days: f64,
    /// Spread for holiday-narrowed age anchors.
    pub holiday_sigma_days: f64,
    /// Spread for birthday-pinned age anchors.
    pub birthday_sigma_days: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            significance_threshold: defaults::DEFAULT_SIGNIFICANCE_THRESHOLD,
            year_sigma_days: defaults::YEAR_SIGMA_DAYS,
            season_sigma_days: defaults::SEASON_SIGMA_DAYS,
            holiday_sigma_days: defaults::HOLIDAY_SIGMA_DAYS,
            birthday_sigma_days: defaults::BIRTHDAY_SIGMA_DAYS,
        }
    }
}

impl EstimatorConfig {
    /// Broad fallback range used when a request supplies none.
    pub fn default_range() -> DateRange {
        let (sy, sm, sd) = defaults::DEFAULT_RANGE_START;
        let (ey, em, ed) = defaults::DEFAULT_RANGE_END;
        DateRange {
            start: NaiveDate::from_ymd_opt(sy, sm, sd).expect("default range start is valid"),
            end: NaiveDate::from_ymd_opt(ey, em, ed).expect("default range end is valid"),
        }
    }
}
