mod estimate_error;

pub use estimate_error::{SleuthError, SleuthResult};
