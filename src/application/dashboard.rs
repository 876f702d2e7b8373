use serde::Serialize;

use super::chart_series::ChartSeries;
use crate::domain::{
    errors::DashboardError,
    logging::{LogComponent, get_logger},
    market_data::{
        ChangeDirection, RandomSource, Snapshot, SnapshotRepository, StockViewModel,
        services::displayable_stocks,
    },
};

/// Everything the dashboard page draws from one snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    pub all_stocks: Vec<StockViewModel>,
    pub top_5: Vec<StockViewModel>,
    pub bottom_5: Vec<StockViewModel>,
    pub leader: StockViewModel,
    pub chart: ChartSeries,
}

/// Text of the leading-stock banner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Headline {
    pub title: String,
    pub price: String,
    pub change: String,
    pub direction: Option<ChangeDirection>,
    pub action: String,
}

impl DashboardModel {
    pub fn headline(&self) -> Headline {
        let leader = &self.leader;
        Headline {
            title: format!("{} ({})", leader.name, leader.symbol),
            price: leader.price_text(),
            change: leader.change_text(),
            direction: leader.direction(),
            action: leader.action.to_string(),
        }
    }
}

/// Build the dashboard from a decoded snapshot.
///
/// Records with an error flag or a non-numeric change are dropped from every list.
/// The leader is the first top-5 entry, or the first stock when top-5 is empty.
pub fn assemble_dashboard<R: RandomSource>(
    snapshot: &Snapshot,
    random: R,
) -> Result<DashboardModel, DashboardError> {
    let all_raw = snapshot.all_stocks.as_deref().ok_or(DashboardError::MissingStockList)?;

    let all_stocks = displayable_stocks(all_raw);
    let top_5 = displayable_stocks(snapshot.top_5.as_deref().unwrap_or_default());
    let bottom_5 = displayable_stocks(snapshot.bottom_5.as_deref().unwrap_or_default());

    let dropped = all_raw.len() - all_stocks.len();
    if dropped > 0 {
        crate::log_debug!(
            LogComponent::Application("Dashboard"),
            "Skipped {dropped} records with errors or missing change"
        );
    }

    let leader = top_5
        .first()
        .or_else(|| all_stocks.first())
        .cloned()
        .ok_or(DashboardError::NoValidStocks)?;

    let chart = ChartSeries::for_symbol(snapshot, leader.symbol.value(), leader.price, random);

    Ok(DashboardModel { all_stocks, top_5, bottom_5, leader, chart })
}

/// Fetch once and assemble; every failure is logged and returned for display
pub async fn load_dashboard<S, R>(source: &S, random: R) -> Result<DashboardModel, DashboardError>
where
    S: SnapshotRepository,
    R: RandomSource,
{
    let result = match source.fetch_snapshot().await {
        Ok(snapshot) => assemble_dashboard(&snapshot, random),
        Err(e) => Err(DashboardError::LoadFailed(e)),
    };

    match &result {
        Ok(model) => get_logger().info(
            LogComponent::Application("Dashboard"),
            &format!(
                "📊 Dashboard ready: {} stocks, leader {} ({:?} chart)",
                model.all_stocks.len(),
                model.leader.symbol,
                model.chart.source
            ),
        ),
        Err(e) => get_logger().error(LogComponent::Application("Dashboard"), &format!("{e:?}")),
    }

    result
}
