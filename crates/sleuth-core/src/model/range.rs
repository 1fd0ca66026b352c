use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{SleuthError, SleuthResult};

/// Inclusive calendar date range, iterated at daily resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a validated range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> SleuthResult<Self> {
        let range = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    /// Re-check `start <= end` on values that bypassed [`DateRange::new`].
    pub fn validate(&self) -> SleuthResult<()> {
        if self.start > self.end {
            return Err(SleuthError::InvertedRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Every day in the range, ascending, both endpoints included. Leap
    /// days are visited like any other day.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// Inclusive length in days.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}
