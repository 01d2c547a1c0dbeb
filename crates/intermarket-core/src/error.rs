use thiserror::Error;

/// Malformed-field errors raised while deriving display entities.
///
/// The backend nulls out NaN/inf before responding, so these surface as
/// missing values just as often as out-of-range ones.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field '{field}' must be a finite number")]
    NonFiniteValue { field: &'static str },

    #[error("field '{field}' is missing")]
    MissingField { field: &'static str },

    #[error("unknown direction label '{value}', expected one of up, down, flat")]
    UnknownDirection { value: String },

    #[error("sparkline sample {index} is missing or not finite")]
    BadSparklineSample { index: usize },
}
