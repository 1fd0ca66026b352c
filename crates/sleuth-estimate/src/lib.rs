//! # sleuth-estimate
//!
//! Gaussian anchor-likelihood engine: scores candidate days against
//! temporal anchors, multiplies the evidence, and extracts the
//! maximum-likelihood capture date over a calendar range.

pub mod age;
pub mod combine;
pub mod distribution;
pub mod engine;
pub mod kernel;
pub mod request;
pub mod select;

pub use distribution::build_distribution;
pub use engine::Estimator;
pub use request::{EstimateRequest, EstimateResponse, SeasonHint};
pub use select::select_best;
