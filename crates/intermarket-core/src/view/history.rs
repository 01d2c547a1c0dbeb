use serde::Serialize;

use crate::schema::HistoryRow;

/// One plotted series of the historical chart, carrying its own payload
/// key and stroke color so the renderer never invents either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HistorySeries {
    Sp500,
    Nasdaq,
    Gold,
    Oil,
    UsdIndex,
    TenYearYield,
}

impl HistorySeries {
    pub const ALL: [Self; 6] = [
        Self::Sp500,
        Self::Nasdaq,
        Self::Gold,
        Self::Oil,
        Self::UsdIndex,
        Self::TenYearYield,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Sp500 => "sp500",
            Self::Nasdaq => "nasdaq",
            Self::Gold => "gold",
            Self::Oil => "oil",
            Self::UsdIndex => "usd_index",
            Self::TenYearYield => "ten_year_yield",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Sp500 => "#00b4d8",
            Self::Nasdaq => "#90e0ef",
            Self::Gold => "#ffd60a",
            Self::Oil => "#ff6b6b",
            Self::UsdIndex => "#6a4c93",
            Self::TenYearYield => "#4cc9f0",
        }
    }
}

/// Dated value in one history series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: String,
    pub value: f64,
}

/// Derived history chart model. Zero points is the valid "no data yet"
/// state, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct HistoryView {
    pub points: Vec<HistoryRow>,
}

impl HistoryView {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Values for one series in row order; rows with no finite value for
    /// that series are skipped in that series only.
    pub fn series(&self, series: HistorySeries) -> Vec<SeriesPoint> {
        self.points
            .iter()
            .filter_map(|row| {
                series_value(row, series)
                    .filter(|value| value.is_finite())
                    .map(|value| SeriesPoint {
                        date: row.date.clone(),
                        value,
                    })
            })
            .collect()
    }
}

/// Wrap the decoded rows; order is preserved exactly as received.
pub fn compose_history(rows: Vec<HistoryRow>) -> HistoryView {
    HistoryView { points: rows }
}

fn series_value(row: &HistoryRow, series: HistorySeries) -> Option<f64> {
    match series {
        HistorySeries::Sp500 => row.sp500,
        HistorySeries::Nasdaq => row.nasdaq,
        HistorySeries::Gold => row.gold,
        HistorySeries::Oil => row.oil,
        HistorySeries::UsdIndex => row.usd_index,
        HistorySeries::TenYearYield => row.ten_year_yield,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<HistoryRow> {
        serde_json::from_str(
            r#"[
              {"date":"2024-01-02","sp500":4742.8,"nasdaq":14850.0,"gold":2063.0,
               "oil":70.4,"usd_index":101.3,"ten_year_yield":3.95},
              {"date":"2024-01-03","sp500":4704.8,"nasdaq":null,"gold":2041.5,
               "oil":72.7,"usd_index":102.1,"10yr_yield":3.91}
            ]"#,
        )
        .expect("fixture must decode")
    }

    #[test]
    fn keeps_rows_in_order() {
        let view = compose_history(rows());

        assert_eq!(view.len(), 2);
        assert_eq!(view.points[0].date, "2024-01-02");
        assert_eq!(view.points[1].date, "2024-01-03");
    }

    #[test]
    fn series_skips_rows_missing_that_series_only() {
        let view = compose_history(rows());

        assert_eq!(view.series(HistorySeries::Nasdaq).len(), 1);
        assert_eq!(view.series(HistorySeries::Sp500).len(), 2);
        assert_eq!(view.series(HistorySeries::TenYearYield).len(), 2);
    }

    #[test]
    fn empty_history_is_a_valid_state() {
        let view = compose_history(Vec::new());

        assert!(view.is_empty());
        assert!(view.series(HistorySeries::Gold).is_empty());
    }

    #[test]
    fn every_series_has_a_key_and_color() {
        for series in HistorySeries::ALL {
            assert!(!series.key().is_empty());
            assert!(series.color().starts_with('#'));
        }
    }
}
