use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::defaults;

/// Calendar season used to narrow an age anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// All variants for iteration.
    pub const ALL: [Season; 4] = [Self::Spring, Self::Summer, Self::Fall, Self::Winter];

    /// Representative midpoint (month, day) of the season.
    pub fn midpoint(self) -> (u32, u32) {
        match self {
            Self::Spring => defaults::SPRING_MIDPOINT,
            Self::Summer => defaults::SUMMER_MIDPOINT,
            Self::Fall => defaults::FALL_MIDPOINT,
            Self::Winter => defaults::WINTER_MIDPOINT,
        }
    }
}
