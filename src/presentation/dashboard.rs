use leptos::*;

use super::components::{CandleChart, MiniRow, PageHeader, StatusMessage, StockRow};
use crate::application::{DashboardModel, load_dashboard};
use crate::config::config;
use crate::domain::{
    errors::DashboardError,
    market_data::{StockViewModel, services::search_stocks},
};
use crate::infrastructure::{http::StockApiClient, services::JsRandom};

/// Page-level state shared by the list and the search box
#[derive(Debug, Clone, Copy)]
pub struct DashboardContext {
    pub all_stocks: RwSignal<Vec<StockViewModel>>,
    pub query: RwSignal<String>,
}

impl DashboardContext {
    pub fn new() -> Self {
        Self { all_stocks: create_rw_signal(Vec::new()), query: create_rw_signal(String::new()) }
    }

    /// Stocks matching the current query, in list order
    pub fn visible_stocks(&self) -> Vec<StockViewModel> {
        self.all_stocks.with(|stocks| self.query.with(|query| search_stocks(stocks, query)))
    }
}

impl Default for DashboardContext {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = DashboardContext::new();
    provide_context(ctx);

    let state = create_rw_signal::<Option<Result<DashboardModel, DashboardError>>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        let result = load_dashboard(&StockApiClient::default(), JsRandom).await;
        if let Ok(model) = &result {
            ctx.all_stocks.set(model.all_stocks.clone());
        }
        state.set(Some(result));
    });

    view! {
        <div class="dashboard">
            <PageHeader title="Market Dashboard" />
            {move || match state.get() {
                None => view! { <div class="loading-skeleton">"Loading stocks..."</div> }.into_view(),
                Some(Err(e)) => view! { <StatusMessage message=e.to_string() /> }.into_view(),
                Some(Ok(model)) => view! { <DashboardView model=model /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn DashboardView(model: DashboardModel) -> impl IntoView {
    let headline = model.headline();
    let badge = headline.direction.map(|d| d.badge_class()).unwrap_or_default();

    view! {
        <section class="leader-card">
            <div id="topStockName" class="leader-name">{headline.title}</div>
            <div id="topStockPrice" class="leader-price">{headline.price}</div>
            <div id="topStockChange" class=format!("badge {badge}")>{headline.change}</div>
            <div class="leader-action">{headline.action}</div>
            <div class="chart-box">
                <CandleChart
                    id="mainChart"
                    points=model.chart.points
                    height=config().chart.dashboard_height
                />
            </div>
        </section>
        <section class="movers">
            <MoverList title="Top 5" id="top5List" stocks=model.top_5 />
            <MoverList title="Bottom 5" id="bottom5List" stocks=model.bottom_5 />
        </section>
        <StockListPanel />
    }
}

#[component]
fn MoverList(title: &'static str, id: &'static str, stocks: Vec<StockViewModel>) -> impl IntoView {
    view! {
        <div class="mini-list">
            <h3>{title}</h3>
            <div id=id>
                {stocks.into_iter().map(|stock| view! { <MiniRow stock=stock /> }).collect_view()}
            </div>
        </div>
    }
}

/// Searchable list of every displayable stock
#[component]
fn StockListPanel() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();
    let visible = create_memo(move |_| ctx.visible_stocks());

    view! {
        <section class="all-stocks">
            <div class="list-header">
                <h3>"All Stocks " <span id="stockCount">{move || visible.with(Vec::len)}</span></h3>
                <input
                    id="searchInput"
                    type="text"
                    placeholder="Search by name or symbol"
                    prop:value=move || ctx.query.get()
                    on:input=move |ev| ctx.query.set(event_target_value(&ev))
                />
            </div>
            <div id="allStocksList">
                {move || visible.get().into_iter().map(|stock| view! { <StockRow stock=stock /> }).collect_view()}
            </div>
        </section>
    }
}
