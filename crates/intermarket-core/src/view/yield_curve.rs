use crate::schema::RawYieldPanel;
use crate::view::require_finite;
use crate::{ValidationError, YieldSummary};

/// Bundle the yield panel fields into one record.
///
/// The slope label is upstream's call and passes through untouched when
/// present; only a payload that omits it gets the local fallback.
pub fn summarize(raw: &RawYieldPanel) -> Result<YieldSummary, ValidationError> {
    let ten_year = require_finite("ten_year", raw.ten_year)?;
    let slope_bps = require_finite("two_ten_slope_bps", raw.two_ten_slope_bps)?;

    let slope_label = match &raw.slope_label {
        Some(label) => label.clone(),
        None => derive_slope_label(slope_bps).to_owned(),
    };

    Ok(YieldSummary {
        ten_year,
        slope_bps,
        slope_label,
    })
}

fn derive_slope_label(slope_bps: f64) -> &'static str {
    if slope_bps > 0.0 {
        "normal"
    } else if slope_bps < 0.0 {
        "inverted"
    } else {
        "flat"
    }
}
