//! Property-level tests for the derivation functions.
//!
//! These pin the exact numeric contracts the display depends on: the
//! exact-sign trend policy, the `i / n` sparkline projection, and the
//! formatting split between grouped card prices and plain grid prices.

use intermarket_core::{
    compose, compose_snapshot, format_grouped_price, normalize, project,
    schema::{MarketDataResponse, OverviewResponse, RawMarketCard},
    SparklineGeometry, Tone, TrendDirection,
};

// =============================================================================
// Trend Classifier: exact sign, paired presentation
// =============================================================================

#[test]
fn classify_is_exact_sign_with_no_tolerance() {
    for delta in [0.0001, 0.01, 1.0, 2.5, 1e9] {
        assert_eq!(TrendDirection::classify(delta), TrendDirection::Up);
        assert_eq!(TrendDirection::classify(-delta), TrendDirection::Down);
    }
    assert_eq!(TrendDirection::classify(0.0), TrendDirection::Flat);
}

#[test]
fn classify_scenarios_carry_glyph_and_color() {
    // Given the three representative deltas
    let up = TrendDirection::classify(2.5);
    let down = TrendDirection::classify(-0.01);
    let flat = TrendDirection::classify(0.0);

    // Then glyph and color come straight off the classification
    assert_eq!((up.glyph(), up.tone()), ("▲", Tone::Green));
    assert_eq!((down.glyph(), down.tone()), ("▼", Tone::Red));
    assert_eq!((flat.glyph(), flat.tone()), ("→", Tone::Neutral));
    assert_eq!(up.tone().as_str(), "green");
}

// =============================================================================
// Sparkline Projector: i/n mapping, length preservation
// =============================================================================

#[test]
fn projection_x_uses_sample_count_divisor_exactly() {
    let geometry = SparklineGeometry::default();

    for n in [1_usize, 2, 3, 10, 30] {
        let samples = vec![0.5; n];
        let points = project(&samples, geometry);

        assert_eq!(points.len(), n, "output length must equal input length");
        for (i, point) in points.iter().enumerate() {
            let expected = i as f64 / n as f64 * geometry.width;
            assert_eq!(point.x, expected, "x must be i/n*width, not i/(n-1)*width");
        }
    }
}

#[test]
fn projection_of_empty_samples_is_empty() {
    assert!(project(&[], SparklineGeometry::default()).is_empty());
}

#[test]
fn projection_worked_scenario() {
    // project([0, 1, 0.5], 100, 38) with scale 30
    let points = project(&[0.0, 1.0, 0.5], SparklineGeometry::default());

    assert_eq!(points[0].y, 38.0);
    assert_eq!(points[1].y, 8.0);
    assert_eq!(points[2].y, 23.0);
    assert!((points[1].x - 33.33).abs() < 0.01);
    assert!((points[2].x - 66.67).abs() < 0.01);
}

// =============================================================================
// Normalizer: formatting split
// =============================================================================

#[test]
fn card_prices_are_grouped_and_unrounded_values_kept() {
    let raw: RawMarketCard = serde_json::from_str(
        r#"{"symbol":"sp500","name":"S&P 500","price":4500.5,"change_1d":0.4219,"sparkline":[]}"#,
    )
    .expect("must decode");

    let card = normalize(&raw, SparklineGeometry::default()).expect("must normalize");

    assert_eq!(card.formatted_price, "4,500.50");
    assert_eq!(card.price, 4500.5);
    // change stays unrounded; percent formatting is the renderer's job
    assert_eq!(card.change_pct, 0.4219);
}

#[test]
fn grouping_handles_magnitudes() {
    assert_eq!(format_grouped_price(82.4), "82.40");
    assert_eq!(format_grouped_price(14100.25), "14,100.25");
    assert_eq!(format_grouped_price(1234567.8), "1,234,567.80");
}

// =============================================================================
// Snapshot scenario
// =============================================================================

#[test]
fn bearish_snapshot_scenario() {
    // Given: payload {sentiment:"bearish", score:-1.2, latest:{SP500:4500.5}}
    let payload: MarketDataResponse =
        serde_json::from_str(r#"{"sentiment":"bearish","score":-1.2,"latest":{"SP500":4500.5}}"#)
            .expect("must decode");

    // When: the snapshot view is composed
    let view = compose_snapshot(&payload);

    // Then: one entity, a down-colored header, and a plain "4500.50"
    assert_eq!(view.entries.len(), 1);
    assert_eq!(view.sentiment_tone, Tone::Red);
    assert_eq!(view.entries[0].formatted_price, "4500.50");
}

// =============================================================================
// Purity / determinism
// =============================================================================

#[test]
fn composing_twice_yields_identical_models() {
    let payload: OverviewResponse =
        serde_json::from_str(intermarket_tests::OVERVIEW_BODY).expect("must decode");

    let first = compose(&payload);
    let second = compose(&payload);

    assert_eq!(first, second);
}
