use crate::schema::{
    OverviewResponse, RawMacroReading, RawMacroSection, RawSentiment,
};
use crate::view::normalize::normalize;
use crate::view::sparkline::SparklineGeometry;
use crate::view::yield_curve::summarize;
use crate::view::{optional_finite, require_finite};
use crate::{
    ChangeTile, DataState, DisplayCard, MacroDirection, MacroIndicator, MacroSnapshot,
    OverviewViewModel, SectionState, SentimentBlock, TrendDirection,
};

/// Assemble the full overview page model from a decoded payload.
///
/// Composition is total: a malformed card, tile, or chip degrades to its
/// placeholder and a missing section to `NoData`, never disturbing a
/// sibling. Every call re-derives from scratch; nothing is memoized.
pub fn compose(payload: &OverviewResponse) -> OverviewViewModel {
    compose_with_geometry(payload, SparklineGeometry::default())
}

pub fn compose_with_geometry(
    payload: &OverviewResponse,
    geometry: SparklineGeometry,
) -> OverviewViewModel {
    OverviewViewModel {
        sentiment: payload
            .sentiment
            .as_ref()
            .map(sentiment_section)
            .unwrap_or(SectionState::NoData),
        narrative: narrative_section(payload.narrative.as_deref()),
        cards: payload
            .market_cards
            .iter()
            .map(|raw| {
                normalize(raw, geometry).unwrap_or_else(|_| {
                    DisplayCard::placeholder(
                        raw.symbol.clone().unwrap_or_default(),
                        raw.name.clone().unwrap_or_default(),
                    )
                })
            })
            .collect(),
        regions: payload
            .regions
            .iter()
            .map(|raw| change_tile(raw.region.as_deref(), raw.symbol.as_deref(), raw.change_1m))
            .collect(),
        sectors: payload
            .sectors
            .iter()
            .map(|raw| change_tile(raw.sector.as_deref(), raw.symbol.as_deref(), raw.change_1m))
            .collect(),
        macro_chips: payload
            .macro_section
            .as_ref()
            .map(|raw| SectionState::Ready(macro_snapshot(raw)))
            .unwrap_or(SectionState::NoData),
        yield_curve: payload
            .yield_panel
            .as_ref()
            .map(|raw| match summarize(raw) {
                Ok(summary) => SectionState::Ready(summary),
                Err(_) => SectionState::NoData,
            })
            .unwrap_or(SectionState::NoData),
        last_updated: payload.last_updated.clone(),
    }
}

fn sentiment_section(raw: &RawSentiment) -> SectionState<SentimentBlock> {
    let label = match &raw.label {
        Some(label) if !label.trim().is_empty() => label.clone(),
        _ => return SectionState::NoData,
    };
    let Ok(score) = require_finite("score", raw.score) else {
        return SectionState::NoData;
    };

    SectionState::Ready(SentimentBlock {
        label,
        score,
        equity_trend: raw
            .equity_trend
            .clone()
            .unwrap_or_else(|| String::from("Neutral")),
        drivers: raw.drivers.clone(),
    })
}

fn narrative_section(narrative: Option<&str>) -> SectionState<String> {
    match narrative {
        Some(text) if !text.trim().is_empty() => SectionState::Ready(text.to_owned()),
        _ => SectionState::NoData,
    }
}

fn change_tile(label: Option<&str>, symbol: Option<&str>, change: Option<f64>) -> ChangeTile {
    let label = label.unwrap_or_default();
    let symbol = symbol.unwrap_or_default();

    match require_finite("change_1m", change) {
        Ok(change_1m) => ChangeTile {
            label: label.to_owned(),
            symbol: symbol.to_owned(),
            change_1m,
            direction: TrendDirection::classify(change_1m),
            state: DataState::Live,
        },
        Err(_) => ChangeTile::placeholder(label, symbol),
    }
}

fn macro_snapshot(raw: &RawMacroSection) -> MacroSnapshot {
    MacroSnapshot {
        cpi: macro_chip("CPI", raw.cpi.as_ref()),
        unemployment: macro_chip("Unemployment", raw.unemployment.as_ref()),
        policy_rate: macro_chip("Policy Rate", raw.policy_rate.as_ref()),
    }
}

fn macro_chip(label: &str, raw: Option<&RawMacroReading>) -> MacroIndicator {
    let Some(raw) = raw else {
        return MacroIndicator::placeholder(label);
    };
    let Ok(value) = require_finite("value", raw.value) else {
        return MacroIndicator::placeholder(label);
    };
    // Direction comes labeled from upstream; it is never inferred from
    // the value delta here.
    let Some(Ok(direction)) = raw
        .direction
        .as_deref()
        .map(|value| value.parse::<MacroDirection>())
    else {
        return MacroIndicator::placeholder(label);
    };

    MacroIndicator {
        label: label.to_owned(),
        value,
        previous: optional_finite(raw.prev),
        direction,
        state: DataState::Live,
    }
}
