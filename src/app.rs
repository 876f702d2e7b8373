use leptos::*;

use crate::infrastructure::browser::Page;
use crate::presentation::{DashboardPage, DetailsPage};

const STYLES: &str = r#"
body {
    margin: 0;
    background: #020617;
    color: #e2e8f0;
    font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
}

.stock-app {
    max-width: 1100px;
    margin: 0 auto;
    padding: 20px;
}

.page-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 20px;
}

.logout-btn, .range-btn {
    background: #1e293b;
    color: #e2e8f0;
    border: 1px solid #334155;
    padding: 6px 12px;
    border-radius: 6px;
    cursor: pointer;
}

.range-btn.active {
    background: #4ade80;
    color: #020617;
}

.leader-card, .mini-list, .all-stocks, .details-grid {
    background: rgba(15, 23, 42, 0.8);
    border: 1px solid #1e293b;
    border-radius: 12px;
    padding: 16px;
    margin-bottom: 16px;
}

.leader-price {
    font-size: 28px;
    font-weight: 700;
}

.badge {
    display: inline-block;
    padding: 2px 8px;
    border-radius: 6px;
    font-weight: 600;
}

.badge-up { background: rgba(74, 222, 128, 0.15); color: #4ade80; }
.badge-down { background: rgba(251, 113, 133, 0.15); color: #fb7185; }

.movers {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 16px;
}

.stock-row, .mini-row {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 8px 4px;
    border-bottom: 1px solid #1e293b;
    cursor: pointer;
}

.stock-row:hover, .mini-row:hover {
    background: rgba(255, 255, 255, 0.04);
}

.stock-left {
    display: flex;
    gap: 10px;
    align-items: center;
}

.stock-logo, .stock-logo-img {
    width: 32px;
    height: 32px;
    border-radius: 50%;
}

.stock-logo {
    display: flex;
    align-items: center;
    justify-content: center;
    background: #1e293b;
    font-weight: 700;
}

.stock-symbol {
    color: #94a3b8;
    font-size: 12px;
}

.list-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.chart-box {
    width: 100%;
    margin-top: 12px;
}

.chart-canvas {
    display: block;
    border-radius: 8px;
}

.status-message, .loading-skeleton {
    text-align: center;
    padding: 40px;
    color: #94a3b8;
}

.details-grid {
    transition: opacity 0.2s;
}

.details-stats {
    display: grid;
    grid-template-columns: max-content 1fr;
    gap: 6px 16px;
}
"#;

/// Root component; renders the page selected by the router
#[component]
pub fn App(page: Page) -> impl IntoView {
    view! {
        <style>{STYLES}</style>
        <div class="stock-app">
            {match page {
                Page::Dashboard => view! { <DashboardPage /> }.into_view(),
                Page::Details => view! { <DetailsPage /> }.into_view(),
            }}
        </div>
    }
}
