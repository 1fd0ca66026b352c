//! Estimation orchestration.

use sleuth_core::config::{defaults, EstimatorConfig};
use sleuth_core::errors::{SleuthError, SleuthResult};
use sleuth_core::model::{
    Anchor, BirthReference, DateRange, EstimationResult, Season, WrapMode,
};
use sleuth_core::roster::Roster;

use crate::age::{anniversary, nearest_annual_date, resolve_age_anchor};
use crate::distribution;
use crate::request::{EstimateRequest, EstimateResponse, SeasonHint};
use crate::select::select_best;

/// Stateless date-likelihood estimator.
///
/// Cheap to construct; every call is an independent synchronous
/// computation with no shared mutable state, so concurrent callers need
/// no coordination.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    config: EstimatorConfig,
}

impl Estimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Evaluate `anchors` over `range` with the configured threshold.
    pub fn build_distribution(
        &self,
        range: &DateRange,
        anchors: &[Anchor],
    ) -> SleuthResult<EstimationResult> {
        distribution::build_distribution(range, anchors, self.config.significance_threshold)
    }

    /// Handle one estimation request against a roster of known people.
    pub fn estimate(
        &self,
        request: &EstimateRequest,
        roster: &Roster,
    ) -> SleuthResult<EstimateResponse> {
        let (anchors, range) = match request {
            EstimateRequest::Anchors { anchors, range } => (anchors.clone(), *range),
            EstimateRequest::Age {
                person,
                age,
                season,
                range,
            } => {
                let birth = roster
                    .birth_of(person)
                    .ok_or_else(|| SleuthError::UnknownPerson {
                        name: person.clone(),
                    })?;
                let anchor = self.resolve_age_request(&birth, *age, *season)?;
                (vec![anchor], *range)
            }
        };
        let range = range.unwrap_or_else(EstimatorConfig::default_range);

        let result = self.build_distribution(&range, &anchors)?;
        let estimated_date = select_best(&result).map(|d| d.format("%Y-%m-%d").to_string());

        tracing::debug!(
            anchors = anchors.len(),
            num_days = range.num_days(),
            retained = result.retained.len(),
            estimate = estimated_date.as_deref().unwrap_or("none"),
            "estimation complete",
        );

        Ok(EstimateResponse {
            estimated_date,
            distribution: result.retained,
        })
    }

    /// Turn an age request's optional hint into the single age anchor.
    fn resolve_age_request(
        &self,
        birth: &BirthReference,
        age: i32,
        hint: Option<SeasonHint>,
    ) -> SleuthResult<Anchor> {
        match hint {
            None => resolve_age_anchor(birth, age, None, &self.config),
            Some(SeasonHint::Spring) => {
                resolve_age_anchor(birth, age, Some(Season::Spring), &self.config)
            }
            Some(SeasonHint::Summer) => {
                resolve_age_anchor(birth, age, Some(Season::Summer), &self.config)
            }
            Some(SeasonHint::Fall) => {
                resolve_age_anchor(birth, age, Some(Season::Fall), &self.config)
            }
            Some(SeasonHint::Winter) => {
                resolve_age_anchor(birth, age, Some(Season::Winter), &self.config)
            }
            Some(SeasonHint::Christmas) => {
                let (month, day) = defaults::CHRISTMAS_MONTH_DAY;
                let center = nearest_annual_date(anniversary(birth, age)?, month, day)?;
                Anchor::new(center, self.config.holiday_sigma_days, WrapMode::Absolute)
            }
            Some(SeasonHint::Birthday) => Anchor::new(
                anniversary(birth, age)?,
                self.config.birthday_sigma_days,
                WrapMode::Absolute,
            ),
        }
    }
}
