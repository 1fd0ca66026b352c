//! Daily distribution build over a date range.

use chrono::NaiveDate;

use sleuth_core::config::defaults::MAX_RANGE_DAYS;
use sleuth_core::errors::{SleuthError, SleuthResult};
use sleuth_core::model::{Anchor, DateRange, EstimationResult, Likelihood, ScoredDate};

use crate::combine::combined_likelihood;

/// Evaluate every day in `range` and assemble the estimation result.
///
/// Retention and max tracking are independent policies: a day is retained
/// only when its likelihood strictly exceeds `threshold`, while the
/// maximum is tracked across all evaluated days; ties keep the first date
/// in ascending order. `best` is absent only when every day scored
/// exactly zero.
pub fn build_distribution(
    range: &DateRange,
    anchors: &[Anchor],
    threshold: f64,
) -> SleuthResult<EstimationResult> {
    range.validate()?;
    if anchors.is_empty() {
        return Err(SleuthError::EmptyAnchorSet);
    }
    for anchor in anchors {
        anchor.validate()?;
    }

    if range.num_days() > MAX_RANGE_DAYS {
        tracing::warn!(
            num_days = range.num_days(),
            limit = MAX_RANGE_DAYS,
            start = %range.start,
            end = %range.end,
            "date range exceeds {} daily steps; estimation will still complete",
            MAX_RANGE_DAYS,
        );
    }

    let mut best: Option<(NaiveDate, f64)> = None;
    let mut retained = Vec::new();

    for day in range.days() {
        let likelihood = combined_likelihood(day, anchors);

        if likelihood > threshold {
            retained.push(ScoredDate {
                date: day,
                likelihood: Likelihood::new(likelihood),
            });
        }

        let improves = match best {
            None => likelihood > 0.0,
            Some((_, current)) => likelihood > current,
        };
        if improves {
            best = Some((day, likelihood));
        }
    }

    Ok(EstimationResult {
        best: best.map(|(date, likelihood)| ScoredDate {
            date,
            likelihood: Likelihood::new(likelihood),
        }),
        retained,
    })
}
