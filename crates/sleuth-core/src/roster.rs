//! People and birthdays known to the estimator.
//!
//! Parses the tab-separated roster format used by the photo browser: one
//! `Name<TAB>birth` entry per line, `#` comments and blank lines skipped.
//! Reading the text off disk is the host's concern.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{SleuthError, SleuthResult};
use crate::model::BirthReference;

/// A named person with a birth reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Person {
    pub name: String,
    pub birth: BirthReference,
}

/// In-memory roster of people, looked up by exact name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Roster {
    pub people: Vec<Person>,
}

impl Roster {
    /// Parse the roster text format.
    pub fn parse(input: &str) -> SleuthResult<Self> {
        let mut people = Vec::new();
        for line in input.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (name, birth) = line
                .split_once('\t')
                .ok_or_else(|| SleuthError::MalformedRosterLine {
                    line: line.to_string(),
                })?;
            people.push(Person {
                name: name.trim().to_string(),
                birth: birth.parse()?,
            });
        }
        Ok(Self { people })
    }

    /// Birth reference for `name`, if the roster knows them.
    pub fn birth_of(&self, name: &str) -> Option<BirthReference> {
        self.people
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.birth)
    }
}
