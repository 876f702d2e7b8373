use leptos::*;
use strum::IntoEnumIterator;

use super::components::{CandleChart, PageHeader};
use crate::application::{DetailsChartState, DetailsModel, load_details};
use crate::config::config;
use crate::domain::{
    errors::DetailsError,
    logging::{LogComponent, get_logger},
    market_data::{ChartRange, services::range_text},
};
use crate::infrastructure::{browser::current_symbol, http::StockApiClient, services::JsRandom};

/// Page-level chart state; the range buttons act on it
#[derive(Debug, Clone, Copy)]
pub struct DetailsContext {
    pub chart: RwSignal<DetailsChartState>,
}

impl DetailsContext {
    pub fn new() -> Self {
        Self { chart: create_rw_signal(DetailsChartState::default()) }
    }

    /// Swap in a fresh synthetic series for `range`; ignored until the page has loaded
    pub fn load_range(&self, range: ChartRange) {
        let mut switched = false;
        self.chart.update(|state| switched = state.switch_range(range, JsRandom));
        if !switched {
            get_logger().debug(
                LogComponent::Presentation("Details"),
                &format!("Range {range} requested before load, ignoring"),
            );
        }
    }
}

impl Default for DetailsContext {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn DetailsPage() -> impl IntoView {
    let ctx = DetailsContext::new();
    provide_context(ctx);

    let state = create_rw_signal::<Option<Result<DetailsModel, DetailsError>>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        let symbol = current_symbol();
        let result = load_details(&StockApiClient::default(), symbol.as_deref(), JsRandom).await;
        if let Ok(model) = &result {
            ctx.chart.set(model.chart_state());
        }
        state.set(Some(result));
    });

    let loading = move || state.with(Option::is_none);
    let title = move || match state.get() {
        None => "Loading...".to_string(),
        Some(Ok(model)) => model.stock.name,
        Some(Err(e)) => e.to_string(),
    };

    view! {
        <div class="details">
            <PageHeader title="Stock Details" />
            <h2 id="detailsName">{title}</h2>
            <Show when=loading>
                <div id="loadingSkeleton" class="loading-skeleton">"Loading stock..."</div>
            </Show>
            <div id="detailsGrid" class="details-grid" style:opacity=move || if loading() { "0" } else { "1" }>
                {move || state.get().and_then(Result::ok).map(|model| view! { <DetailsView model=model /> })}
            </div>
        </div>
    }
}

#[component]
fn DetailsView(model: DetailsModel) -> impl IntoView {
    let ctx = expect_context::<DetailsContext>();
    let stock = model.stock;
    let badge = stock.direction().map(|d| d.badge_class()).unwrap_or_default();
    let points = Signal::derive(move || ctx.chart.with(|state| state.points().to_vec()));

    view! {
        <div class="details-summary">
            <div id="detailsSymbol" class="stock-symbol">{stock.symbol.to_string()}</div>
            <div id="detailsPrice" class="leader-price">{stock.price_text()}</div>
            <div id="detailsChange" class=format!("badge {badge}")>{stock.change_text()}</div>
        </div>
        <dl class="details-stats">
            <dt>"Today's range"</dt>
            <dd id="detailsTodayRange">{range_text(model.today_range)}</dd>
            <dt>"52-week range"</dt>
            <dd id="details52Range">{range_text(model.yearly_range)}</dd>
            <dt>"Action"</dt>
            <dd id="detailsAction">{stock.action.to_string()}</dd>
        </dl>
        <p id="detailsDescription" class="details-description">{model.description}</p>
        <div class="range-switch">
            {ChartRange::iter()
                .map(|range| {
                    let active = move || ctx.chart.with(|state| state.range() == range);
                    view! {
                        <button
                            class="range-btn"
                            class:active=active
                            on:click=move |_| ctx.load_range(range)
                        >
                            {range.to_string()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
        <div class="chart-box">
            <CandleChart id="detailsChart" points=points height=config().chart.details_height />
        </div>
    }
}
