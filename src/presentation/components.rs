use leptos::html::Canvas;
use leptos::*;

use crate::config::config;
use crate::domain::{
    logging::{LogComponent, get_logger},
    market_data::{CandlePoint, Logo, StockViewModel},
};
use crate::infrastructure::{
    browser::{details_url, end_session, navigate_to},
    rendering::CanvasRenderer,
};

/// Title bar shared by both pages
#[component]
pub fn PageHeader(title: &'static str) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1>{title}</h1>
            <button class="logout-btn" on:click=move |_| end_session()>"Logout"</button>
        </header>
    }
}

/// Full-width placeholder for error and empty states
#[component]
pub fn StatusMessage(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="status-message">{message}</div> }
}

/// Candlestick canvas that redraws whenever `points` changes
#[component]
pub fn CandleChart(
    #[prop(into)] points: MaybeSignal<Vec<CandlePoint>>,
    height: u32,
    id: &'static str,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();

    create_effect(move |_| {
        let points = points.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };

        let width = canvas
            .parent_element()
            .map(|parent| parent.client_width())
            .filter(|w| *w > 0)
            .map(|w| w as u32)
            .unwrap_or(config().chart.fallback_width);

        let rendered = CanvasRenderer::new(&canvas, width, height).and_then(|r| r.render(&points));
        if let Err(e) = rendered {
            get_logger().error(
                LogComponent::Presentation("CandleChart"),
                &format!("❌ Chart render failed: {e:?}"),
            );
        }
    });

    view! { <canvas id=id class="chart-canvas" node_ref=canvas_ref /> }
}

fn change_color(stock: &StockViewModel) -> &'static str {
    stock.direction().map(|d| d.color()).unwrap_or("inherit")
}

/// Logo image with the symbol glyph as fallback when the image fails to load
#[component]
fn StockLogo(logo: Logo, glyph: String) -> impl IntoView {
    let broken = create_rw_signal(false);
    match logo {
        Logo::Image(url) => view! {
            <Show
                when=move || !broken.get()
                fallback={
                    let glyph = glyph.clone();
                    move || view! { <div class="stock-logo">{glyph.clone()}</div> }
                }
            >
                <img src=url.clone() class="stock-logo-img" on:error=move |_| broken.set(true) />
            </Show>
        }
        .into_view(),
        Logo::Glyph(glyph) => view! { <div class="stock-logo">{glyph}</div> }.into_view(),
    }
}

/// Row of the full stock list; clicking opens the details page
#[component]
pub fn StockRow(stock: StockViewModel) -> impl IntoView {
    let url = details_url(stock.symbol.value());
    let color = change_color(&stock);

    view! {
        <div class="stock-row" on:click=move |_| navigate_to(&url)>
            <div class="stock-left">
                <StockLogo logo=stock.logo.clone() glyph=stock.symbol.glyph() />
                <div class="stock-name-symbol">
                    <div class="stock-name">{stock.name.clone()}</div>
                    <div class="stock-symbol">{stock.symbol.to_string()}</div>
                </div>
            </div>
            <div class="stock-right">
                <div class="stock-price">{stock.price_text()}</div>
                <div class="stock-change" style:color=color>{stock.change_text()}</div>
            </div>
        </div>
    }
}

/// Compact row for the top/bottom five lists
#[component]
pub fn MiniRow(stock: StockViewModel) -> impl IntoView {
    let url = details_url(stock.symbol.value());
    let color = change_color(&stock);

    view! {
        <div class="mini-row" on:click=move |_| navigate_to(&url)>
            <div>{format!("{} ({})", stock.name, stock.symbol)}</div>
            <div style:color=color>{stock.change_text()}</div>
        </div>
    }
}
