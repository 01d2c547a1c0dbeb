//! Pure view-model derivation.
//!
//! Raw payload in, display-ready records out. One direction, no callbacks
//! into earlier stages, no state shared across invocations.

pub mod compose;
pub mod history;
pub mod normalize;
pub mod snapshot;
pub mod sparkline;
pub mod yield_curve;

use crate::ValidationError;

/// Pull a required finite number out of a sanitized payload field.
pub(crate) fn require_finite(
    field: &'static str,
    value: Option<f64>,
) -> Result<f64, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField { field })?;
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(value)
}

/// Optional passthrough: keep a finite value, drop anything else.
pub(crate) fn optional_finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
