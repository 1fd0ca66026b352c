//! # sleuth-core
//!
//! Core types, errors, config, and constants for the timesleuth date
//! estimation engine: anchors, date ranges, likelihoods, seasons, the
//! people roster, and the shared error surface.

pub mod config;
pub mod errors;
pub mod model;
pub mod roster;

pub use config::EstimatorConfig;
pub use errors::{SleuthError, SleuthResult};
pub use model::{
    Anchor, BirthReference, DateRange, EstimationResult, Likelihood, ScoredDate, Season, WrapMode,
};
pub use roster::{Person, Roster};
