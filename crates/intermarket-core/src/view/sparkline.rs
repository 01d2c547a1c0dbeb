use serde::{Deserialize, Serialize};

use crate::PlotPoint;

/// Canvas geometry for the raw linear sparkline map.
///
/// Defaults mirror the source chart: a 100x38 viewBox with 30 pixel units
/// per raw sample unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SparklineGeometry {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

impl Default for SparklineGeometry {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 38.0,
            scale: 30.0,
        }
    }
}

/// Project ordered samples onto plot coordinates, one point per sample.
///
/// `x = i / n * width` — the divisor is the sample count, not `n - 1`,
/// so the final point stops short of the right edge; visual parity with
/// the source chart depends on keeping that. `y = height - value * scale`
/// with no clamping: out-of-range samples map off-canvas rather than
/// being fitted.
pub fn project(samples: &[f64], geometry: SparklineGeometry) -> Vec<PlotPoint> {
    let n = samples.len() as f64;
    samples
        .iter()
        .enumerate()
        .map(|(i, value)| PlotPoint {
            x: i as f64 / n * geometry.width,
            y: geometry.height - value * geometry.scale,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-2,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn projects_worked_scenario() {
        let points = project(&[0.0, 1.0, 0.5], SparklineGeometry::default());

        assert_eq!(points.len(), 3);
        assert_close(points[0].x, 0.0);
        assert_close(points[0].y, 38.0);
        assert_close(points[1].x, 33.33);
        assert_close(points[1].y, 8.0);
        assert_close(points[2].x, 66.67);
        assert_close(points[2].y, 23.0);
    }

    #[test]
    fn x_divisor_is_sample_count() {
        let points = project(&[1.0; 4], SparklineGeometry::default());
        // i/(n-1) would put the last point at the right edge; i/n must not.
        assert_close(points[3].x, 75.0);
    }

    #[test]
    fn output_length_matches_input_length() {
        for n in [1_usize, 2, 7, 30] {
            let samples = vec![0.5; n];
            assert_eq!(project(&samples, SparklineGeometry::default()).len(), n);
        }
    }

    #[test]
    fn empty_samples_project_to_nothing() {
        assert!(project(&[], SparklineGeometry::default()).is_empty());
    }

    #[test]
    fn out_of_range_samples_are_not_clamped() {
        let points = project(&[10.0, -3.0], SparklineGeometry::default());
        assert_close(points[0].y, 38.0 - 300.0);
        assert_close(points[1].y, 38.0 + 90.0);
    }
}
