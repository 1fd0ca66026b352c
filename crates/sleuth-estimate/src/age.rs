//! Age-constraint resolution: birth reference, target age, optional
//! season.

use chrono::{Datelike, NaiveDate};

use sleuth_core::config::EstimatorConfig;
use sleuth_core::errors::{SleuthError, SleuthResult};
use sleuth_core::model::{Anchor, BirthReference, Season, WrapMode};

/// Resolve "this person was about age N" into a single absolute anchor.
///
/// Without a season the anchor spans the whole year of life: wide sigma,
/// centered on the anniversary. A season narrows the anchor to the
/// nearest occurrence of that season's midpoint with a one-season spread.
/// Age anchors never recur — a person is age N exactly once.
pub fn resolve_age_anchor(
    birth: &BirthReference,
    age: i32,
    season: Option<Season>,
    config: &EstimatorConfig,
) -> SleuthResult<Anchor> {
    let anniversary = anniversary(birth, age)?;

    match season {
        None => Anchor::new(anniversary, config.year_sigma_days, WrapMode::Absolute),
        Some(season) => {
            let (month, day) = season.midpoint();
            let center = nearest_annual_date(anniversary, month, day)?;
            Anchor::new(center, config.season_sigma_days, WrapMode::Absolute)
        }
    }
}

/// Calendar anniversary of `birth` advanced by `age` years. Feb 29
/// anniversaries fall back to Feb 28 in common years.
pub fn anniversary(birth: &BirthReference, age: i32) -> SleuthResult<NaiveDate> {
    if age < 0 {
        return Err(SleuthError::NegativeAge { age });
    }
    let birth_date = birth.as_date()?;
    let year = birth_date.year() + age;

    NaiveDate::from_ymd_opt(year, birth_date.month(), birth_date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .ok_or_else(|| SleuthError::UnparseableDate {
            input: format!("{year}-{:02}-{:02}", birth_date.month(), birth_date.day()),
        })
}

/// Occurrence of `month`/`day` nearest to `target`, searched across the
/// surrounding years in either direction.
pub fn nearest_annual_date(target: NaiveDate, month: u32, day: u32) -> SleuthResult<NaiveDate> {
    let mut nearest: Option<(i64, NaiveDate)> = None;
    for year in [target.year() - 1, target.year(), target.year() + 1] {
        let Some(candidate) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        let distance = (candidate - target).num_days().abs();
        let closer = match nearest {
            None => true,
            Some((best, _)) => distance < best,
        };
        if closer {
            nearest = Some((distance, candidate));
        }
    }

    nearest
        .map(|(_, date)| date)
        .ok_or(SleuthError::InvalidDayOfMonth { month, day })
}
