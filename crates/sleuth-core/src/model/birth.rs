use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{SleuthError, SleuthResult};

/// Birth reference: a full date, or a bare year when the month and day
/// are unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum BirthReference {
    Date(NaiveDate),
    Year(i32),
}

impl BirthReference {
    /// Concrete date used for anniversary arithmetic. A bare year
    /// resolves to July 1, the middle of that year.
    pub fn as_date(&self) -> SleuthResult<NaiveDate> {
        match *self {
            Self::Date(date) => Ok(date),
            Self::Year(year) => {
                NaiveDate::from_ymd_opt(year, 7, 1).ok_or(SleuthError::UnparseableDate {
                    input: year.to_string(),
                })
            }
        }
    }
}

impl FromStr for BirthReference {
    type Err = SleuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self::Date(date));
        }
        if let Ok(year) = s.parse::<i32>() {
            if (1000..=9999).contains(&year) {
                return Ok(Self::Year(year));
            }
        }
        Err(SleuthError::UnparseableDate {
            input: s.to_string(),
        })
    }
}
