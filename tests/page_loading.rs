use futures::executor::block_on;
use serde_json::json;
use stock_dashboard_wasm::application::{ChartSource, load_dashboard, load_details};
use stock_dashboard_wasm::domain::{
    errors::{DashboardError, DetailsError, FetchError, FetchResult},
    market_data::{Snapshot, SnapshotRepository},
};

/// Canned endpoint answer
struct Canned(FetchResult<Snapshot>);

impl SnapshotRepository for Canned {
    async fn fetch_snapshot(&self) -> FetchResult<Snapshot> {
        self.0.clone()
    }
}

fn midpoint() -> f64 {
    0.5
}

fn healthy() -> Canned {
    Canned(Ok(serde_json::from_value(json!({
        "all_stocks": [
            {"symbol": "TCS", "name": "Tata Consultancy", "price": 3500.5, "change_pct": 2.1},
            {"symbol": "INFY", "name": "Infosys", "price": 1500.0, "change_pct": -0.3}
        ],
        "top_5": [{"symbol": "TCS", "name": "Tata Consultancy", "price": 3500.5, "change_pct": 2.1}],
        "bottom_5": [{"symbol": "INFY", "name": "Infosys", "price": 1500.0, "change_pct": -0.3}]
    }))
    .unwrap()))
}

fn unavailable() -> Canned {
    Canned(Err(FetchError::HttpStatus { status: 503, status_text: "Service Unavailable".into() }))
}

#[test]
fn dashboard_loads_from_the_repository() {
    let model = block_on(load_dashboard(&healthy(), midpoint)).unwrap();
    assert_eq!(model.headline().title, "Tata Consultancy (TCS)");
    assert_eq!(model.all_stocks.len(), 2);
    assert_eq!(model.chart.source, ChartSource::Synthetic);
}

#[test]
fn dashboard_fetch_failure_is_shown() {
    let err = block_on(load_dashboard(&unavailable(), midpoint)).unwrap_err();
    assert!(matches!(err, DashboardError::LoadFailed(FetchError::HttpStatus { status: 503, .. })));
    assert_eq!(err.to_string(), "Error loading stocks");
}

#[test]
fn details_without_symbol_skips_the_fetch() {
    let err = block_on(load_details(&unavailable(), None, midpoint)).unwrap_err();
    assert_eq!(err, DetailsError::NoSymbolSelected);
    assert_eq!(err.to_string(), "No stock selected");
}

#[test]
fn details_fetch_failure_is_shown() {
    let err = block_on(load_details(&unavailable(), Some("TCS"), midpoint)).unwrap_err();
    assert!(matches!(err, DetailsError::LoadFailed(Some(FetchError::HttpStatus { .. }))));
    assert_eq!(err.to_string(), "Error loading stock");
}

#[test]
fn details_load_the_requested_symbol() {
    let model = block_on(load_details(&healthy(), Some("INFY"), midpoint)).unwrap();
    assert_eq!(model.stock.name, "Infosys");
    assert_eq!(model.description, "Infosys is slightly negative.");

    let err = block_on(load_details(&healthy(), Some("WIPRO"), midpoint)).unwrap_err();
    assert_eq!(err.to_string(), "Stock not found");
}
