mod anchor;
mod birth;
mod likelihood;
mod range;
mod result;
mod season;

pub use anchor::{Anchor, WrapMode};
pub use birth::BirthReference;
pub use likelihood::Likelihood;
pub use range::DateRange;
pub use result::{EstimationResult, ScoredDate};
pub use season::Season;
