use chrono::NaiveDate;

/// Estimation parameter errors.
///
/// Every variant is recoverable by the caller supplying corrected input.
/// A no-confident-estimate outcome is not an error: it surfaces as an
/// absent best date on the result, never through this enum.
#[derive(Debug, thiserror::Error)]
pub enum SleuthError {
    #[error("sigma must be positive and finite, got {sigma}")]
    NonPositiveSigma { sigma: f64 },

    #[error("range start {start} is after end {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },

    #[error("anchor set is empty")]
    EmptyAnchorSet,

    #[error("age must be non-negative, got {age}")]
    NegativeAge { age: i32 },

    #[error("unparseable date: {input}")]
    UnparseableDate { input: String },

    #[error("malformed roster line: {line}")]
    MalformedRosterLine { line: String },

    #[error("unknown person: {name}")]
    UnknownPerson { name: String },

    #[error("no calendar date for month {month} day {day}")]
    InvalidDayOfMonth { month: u32, day: u32 },
}

/// Convenience alias used across the workspace.
pub type SleuthResult<T> = Result<T, SleuthError>;
