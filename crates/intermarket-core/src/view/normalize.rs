use crate::schema::RawMarketCard;
use crate::view::sparkline::{project, SparklineGeometry};
use crate::view::{optional_finite, require_finite};
use crate::{format_grouped_price, DataState, DisplayCard, TrendDirection, ValidationError};

/// Normalize one raw market record into a display card.
///
/// The required fields (`name`, `price`, `change_1d`, every sparkline
/// sample) must be present and finite; anything else is a malformed-field
/// error for the caller to degrade. The longer-horizon changes are
/// optional passthroughs and never fail the card.
pub fn normalize(
    raw: &RawMarketCard,
    geometry: SparklineGeometry,
) -> Result<DisplayCard, ValidationError> {
    let name = raw
        .name
        .clone()
        .ok_or(ValidationError::MissingField { field: "name" })?;
    let price = require_finite("price", raw.price)?;
    let change_pct = require_finite("change_1d", raw.change_1d)?;
    let samples = collect_samples(&raw.sparkline)?;

    Ok(DisplayCard {
        symbol: raw.symbol.clone().unwrap_or_default(),
        name,
        price,
        formatted_price: format_grouped_price(price),
        change_pct,
        direction: TrendDirection::classify(change_pct),
        sparkline_points: project(&samples, geometry),
        change_1w: optional_finite(raw.change_1w),
        change_1m: optional_finite(raw.change_1m),
        change_1y: optional_finite(raw.change_1y),
        state: DataState::Live,
    })
}

fn collect_samples(raw: &[Option<f64>]) -> Result<Vec<f64>, ValidationError> {
    raw.iter()
        .enumerate()
        .map(|(index, sample)| match sample {
            Some(value) if value.is_finite() => Ok(*value),
            _ => Err(ValidationError::BadSparklineSample { index }),
        })
        .collect()
}
