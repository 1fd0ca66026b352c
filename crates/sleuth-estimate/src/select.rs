//! Point-estimate projection.

use chrono::NaiveDate;

use sleuth_core::model::EstimationResult;

/// Best-estimate date, if any day in range scored above zero.
///
/// Callers needing the retained distribution read it off the result
/// directly; this keeps point-estimate callers decoupled from it.
pub fn select_best(result: &EstimationResult) -> Option<NaiveDate> {
    result.best.map(|scored| scored.date)
}
