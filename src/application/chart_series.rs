use serde::Serialize;

use crate::domain::market_data::{
    CandleGenerator, CandlePoint, ChartRange, RandomSource, Snapshot,
};

/// Where the points of a chart came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartSource {
    Server,
    Synthetic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub points: Vec<CandlePoint>,
    pub source: ChartSource,
}

impl ChartSeries {
    pub fn synthetic<R: RandomSource>(base_price: Option<f64>, range: ChartRange, random: R) -> Self {
        Self {
            points: CandleGenerator::new(random).generate(base_price, range.point_count()),
            source: ChartSource::Synthetic,
        }
    }

    /// The snapshot's leader series when it belongs to `symbol` and has usable
    /// points, otherwise a default-range synthetic series seeded from `base_price`
    pub fn for_symbol<R: RandomSource>(
        snapshot: &Snapshot,
        symbol: &str,
        base_price: Option<f64>,
        random: R,
    ) -> Self {
        let server_points = snapshot
            .leader_chart
            .as_ref()
            .filter(|chart| chart.belongs_to(symbol))
            .map(|chart| chart.points())
            .filter(|points| !points.is_empty());

        match server_points {
            Some(points) => Self { points, source: ChartSource::Server },
            None => Self::synthetic(base_price, ChartRange::default(), random),
        }
    }
}

/// Chart state of the details page, kept so the range switch can regenerate it
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailsChartState {
    base_price: Option<f64>,
    range: ChartRange,
    series: Option<ChartSeries>,
}

impl DetailsChartState {
    pub fn loaded(base_price: Option<f64>, series: ChartSeries) -> Self {
        Self { base_price, range: ChartRange::default(), series: Some(series) }
    }

    pub fn is_loaded(&self) -> bool {
        self.series.is_some()
    }

    pub fn range(&self) -> ChartRange {
        self.range
    }

    pub fn points(&self) -> &[CandlePoint] {
        self.series.as_ref().map(|s| s.points.as_slice()).unwrap_or_default()
    }

    /// Regenerate a synthetic series sized for `range`.
    /// Returns `false` and leaves the state alone before the first successful load
    /// or when the loaded stock has no usable price.
    pub fn switch_range<R: RandomSource>(&mut self, range: ChartRange, random: R) -> bool {
        let priced = self.base_price.is_some_and(|p| p != 0.0 && !p.is_nan());
        if !self.is_loaded() || !priced {
            return false;
        }
        self.range = range;
        self.series = Some(ChartSeries::synthetic(self.base_price, range, random));
        true
    }
}
