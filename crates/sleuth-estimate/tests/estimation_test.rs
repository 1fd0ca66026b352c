use chrono::NaiveDate;
use sleuth_core::model::{Anchor, DateRange, WrapMode};
use sleuth_core::roster::Roster;
use sleuth_core::SleuthError;
use sleuth_estimate::{
    build_distribution, select_best, EstimateRequest, Estimator, SeasonHint,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn christmas_2001_cyclic() -> Anchor {
    Anchor::new(date(2001, 12, 25), 14.0, WrapMode::CyclicAnnual).unwrap()
}

fn october_2001_wide() -> Anchor {
    Anchor::new(date(2001, 10, 15), 200.0, WrapMode::Absolute).unwrap()
}

#[test]
fn recurring_christmas_peaks_in_both_years_of_the_range() {
    let range = DateRange::new(date(2000, 1, 1), date(2001, 12, 31)).unwrap();
    let result = build_distribution(&range, &[christmas_2001_cyclic()], 0.01).unwrap();

    let retained_dates: Vec<NaiveDate> = result.retained.iter().map(|s| s.date).collect();
    assert!(retained_dates.contains(&date(2000, 12, 25)));
    assert!(retained_dates.contains(&date(2001, 12, 25)));
    assert!(!retained_dates.contains(&date(2000, 1, 1)));

    // Christmas 2000 is the first day to hit the 1.0 peak, so it wins.
    let best = result.best.unwrap();
    assert_eq!(best.date, date(2000, 12, 25));
    assert_eq!(best.likelihood.value(), 1.0);
}

#[test]
fn two_anchor_compromise_stays_between_the_anchor_centers() {
    let anchors = [christmas_2001_cyclic(), october_2001_wide()];
    let range = DateRange::new(date(2000, 1, 1), date(2025, 12, 31)).unwrap();

    let result = build_distribution(&range, &anchors, 0.01).unwrap();
    let best = result.best.unwrap();

    assert!(best.date >= date(2001, 10, 15) && best.date <= date(2001, 12, 25));
    // The October anchor penalizes Christmas; the combined peak is below
    // the Christmas-only peak of 1.0.
    assert!(best.likelihood.value() < 1.0);
    // Narrow Christmas sigma dominates the compromise.
    assert_eq!(best.date, date(2001, 12, 25));
}

#[test]
fn build_is_idempotent() {
    let anchors = [christmas_2001_cyclic(), october_2001_wide()];
    let range = DateRange::new(date(2000, 1, 1), date(2003, 12, 31)).unwrap();

    let first = build_distribution(&range, &anchors, 0.01).unwrap();
    let second = build_distribution(&range, &anchors, 0.01).unwrap();
    assert_eq!(first, second);
}

#[test]
fn single_day_range_returns_that_day() {
    let anchor = Anchor::new(date(2001, 12, 25), 14.0, WrapMode::Absolute).unwrap();
    let range = DateRange::new(date(2001, 12, 20), date(2001, 12, 20)).unwrap();

    let result = build_distribution(&range, &[anchor], 0.01).unwrap();
    assert_eq!(result.best.unwrap().date, date(2001, 12, 20));
    assert_eq!(result.retained.len(), 1);
}

#[test]
fn select_best_projects_the_max_likelihood_date() {
    let range = DateRange::new(date(2001, 12, 1), date(2001, 12, 31)).unwrap();
    let result =
        build_distribution(&range, &[christmas_2001_cyclic()], 0.01).unwrap();
    assert_eq!(select_best(&result), Some(date(2001, 12, 25)));
}

#[test]
fn age_request_with_summer_hint_lands_in_summer_2015() {
    let roster = Roster::parse("Alice\t2010-06-01\n").unwrap();
    let estimator = Estimator::default();

    let request = EstimateRequest::Age {
        person: "Alice".to_string(),
        age: 5,
        season: Some(SeasonHint::Summer),
        range: None,
    };
    let response = estimator.estimate(&request, &roster).unwrap();

    let estimate: NaiveDate = response.estimated_date.unwrap().parse().unwrap();
    assert!(estimate >= date(2015, 6, 1) && estimate <= date(2015, 8, 31));
    assert!(!response.distribution.is_empty());
}

#[test]
fn age_request_without_hint_peaks_on_the_anniversary() {
    let roster = Roster::parse("Alice\t2010-06-01\n").unwrap();
    let estimator = Estimator::default();

    let request = EstimateRequest::Age {
        person: "Alice".to_string(),
        age: 5,
        season: None,
        range: None,
    };
    let response = estimator.estimate(&request, &roster).unwrap();
    assert_eq!(response.estimated_date.as_deref(), Some("2015-06-01"));
}

#[test]
fn christmas_hint_pins_the_nearest_december_25() {
    let roster = Roster::parse("Alice\t2010-06-01\n").unwrap();
    let estimator = Estimator::default();

    let request = EstimateRequest::Age {
        person: "Alice".to_string(),
        age: 5,
        season: Some(SeasonHint::Christmas),
        range: None,
    };
    let response = estimator.estimate(&request, &roster).unwrap();
    // June 2015 anniversary: Christmas 2014 is closer than Christmas 2015.
    assert_eq!(response.estimated_date.as_deref(), Some("2014-12-25"));
}

#[test]
fn birthday_hint_pins_the_anniversary() {
    let roster = Roster::parse("Alice\t2010-06-01\n").unwrap();
    let estimator = Estimator::default();

    let request = EstimateRequest::Age {
        person: "Alice".to_string(),
        age: 5,
        season: Some(SeasonHint::Birthday),
        range: None,
    };
    let response = estimator.estimate(&request, &roster).unwrap();
    assert_eq!(response.estimated_date.as_deref(), Some("2015-06-01"));
}

#[test]
fn unknown_person_is_rejected() {
    let roster = Roster::default();
    let estimator = Estimator::default();

    let request = EstimateRequest::Age {
        person: "Nobody".to_string(),
        age: 5,
        season: None,
        range: None,
    };
    let err = estimator.estimate(&request, &roster).unwrap_err();
    assert!(matches!(err, SleuthError::UnknownPerson { .. }));
}

#[test]
fn negative_age_is_rejected_at_the_request_level() {
    let roster = Roster::parse("Alice\t2010-06-01\n").unwrap();
    let estimator = Estimator::default();

    let request = EstimateRequest::Age {
        person: "Alice".to_string(),
        age: -3,
        season: None,
        range: None,
    };
    let err = estimator.estimate(&request, &roster).unwrap_err();
    assert!(matches!(err, SleuthError::NegativeAge { age: -3 }));
}

#[test]
fn empty_anchor_request_is_rejected() {
    let estimator = Estimator::default();
    let request = EstimateRequest::Anchors {
        anchors: vec![],
        range: None,
    };
    let err = estimator.estimate(&request, &Roster::default()).unwrap_err();
    assert!(matches!(err, SleuthError::EmptyAnchorSet));
}

#[test]
fn no_confident_estimate_is_reported_as_absent_not_as_an_error() {
    let estimator = Estimator::default();
    // Anchor a century before the range with a half-day sigma: every day
    // underflows to zero likelihood.
    let request = EstimateRequest::Anchors {
        anchors: vec![Anchor::new(date(1900, 1, 1), 0.5, WrapMode::Absolute).unwrap()],
        range: Some(DateRange::new(date(2000, 1, 1), date(2000, 1, 10)).unwrap()),
    };
    let response = estimator.estimate(&request, &Roster::default()).unwrap();
    assert_eq!(response.estimated_date, None);
    assert!(response.distribution.is_empty());
}

#[test]
fn request_json_end_to_end() {
    let roster = Roster::parse("# comment\nAlice\t2010-06-01\n").unwrap();
    let estimator = Estimator::default();

    let json = r#"{"kind":"age","person":"Alice","age":5,"season":"summer","range":null}"#;
    let request: EstimateRequest = serde_json::from_str(json).unwrap();
    let response = estimator.estimate(&request, &roster).unwrap();

    let body = serde_json::to_string(&response).unwrap();
    assert!(body.contains("\"estimated_date\":\"2015-07-15\""));
}
