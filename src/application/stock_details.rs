use super::chart_series::{ChartSeries, DetailsChartState};
use crate::domain::{
    errors::DetailsError,
    logging::{LogComponent, get_logger},
    market_data::{
        PriceRange, RandomSource, Snapshot, SnapshotRepository, StockViewModel,
        services::{description, map_summary, today_range, yearly_range},
    },
};

/// Everything the details page draws for one symbol
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsModel {
    pub stock: StockViewModel,
    pub today_range: Option<PriceRange>,
    pub yearly_range: Option<PriceRange>,
    pub description: String,
    pub chart: ChartSeries,
}

impl DetailsModel {
    /// Chart state the range switch operates on
    pub fn chart_state(&self) -> DetailsChartState {
        DetailsChartState::loaded(self.stock.price, self.chart.clone())
    }
}

/// Resolve `symbol` in the snapshot's main list, skipping errored records
pub fn assemble_details<R: RandomSource>(
    snapshot: &Snapshot,
    symbol: &str,
    random: R,
) -> Result<DetailsModel, DetailsError> {
    let all_stocks = snapshot.all_stocks.as_deref().ok_or(DetailsError::LoadFailed(None))?;

    let raw = all_stocks
        .iter()
        .find(|s| !s.has_error() && s.symbol == symbol)
        .ok_or_else(|| DetailsError::StockNotFound(symbol.to_string()))?;

    let stock = map_summary(raw);
    let chart = ChartSeries::for_symbol(snapshot, stock.symbol.value(), stock.price, random);

    Ok(DetailsModel {
        today_range: today_range(raw),
        yearly_range: yearly_range(&stock),
        description: description(&stock),
        chart,
        stock,
    })
}

/// Load the details page for the symbol from the query string, if any
pub async fn load_details<S, R>(
    source: &S,
    symbol: Option<&str>,
    random: R,
) -> Result<DetailsModel, DetailsError>
where
    S: SnapshotRepository,
    R: RandomSource,
{
    let Some(symbol) = symbol else {
        get_logger().warn(LogComponent::Application("Details"), "No symbol in query string");
        return Err(DetailsError::NoSymbolSelected);
    };

    let result = match source.fetch_snapshot().await {
        Ok(snapshot) => assemble_details(&snapshot, symbol, random),
        Err(e) => Err(DetailsError::LoadFailed(Some(e))),
    };

    match &result {
        Ok(model) => get_logger().info(
            LogComponent::Application("Details"),
            &format!("🔎 Loaded {} ({:?} chart)", model.stock.symbol, model.chart.source),
        ),
        Err(e) => get_logger().error(LogComponent::Application("Details"), &format!("{e:?}")),
    }

    result
}
