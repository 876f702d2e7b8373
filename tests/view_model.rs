use quickcheck_macros::quickcheck;
use stock_dashboard_wasm::domain::market_data::{
    Action, Logo, StockSummary, services::map_summary,
};

fn summary(symbol: &str) -> StockSummary {
    StockSummary::new(symbol)
}

#[quickcheck]
fn action_is_hold_unless_buy_or_sell(signal: Option<String>) -> bool {
    let raw = StockSummary { signal: signal.clone(), ..summary("ACME") };
    let action = map_summary(&raw).action;
    match signal.as_deref() {
        Some("BUY") => action == Action::Buy,
        Some("SELL") => action == Action::Sell,
        _ => action == Action::Hold,
    }
}

#[quickcheck]
fn name_falls_back_to_symbol(symbol: String, name: Option<String>) -> bool {
    let raw = StockSummary { name: name.clone(), ..summary(&symbol) };
    let vm = map_summary(&raw);
    match name.filter(|n| !n.is_empty()) {
        Some(n) => vm.name == n,
        None => vm.name == symbol,
    }
}

#[quickcheck]
fn glyph_is_first_symbol_char_without_logo(symbol: String) -> bool {
    let vm = map_summary(&summary(&symbol));
    let expected = symbol.chars().next().map(String::from).unwrap_or_else(|| "?".into());
    vm.logo == Logo::Glyph(expected)
}

#[test]
fn logo_url_wins_over_glyph() {
    let raw = StockSummary {
        logo_url: Some("https://logo.example/acme.png".into()),
        ..summary("ACME")
    };
    assert_eq!(map_summary(&raw).logo, Logo::Image("https://logo.example/acme.png".into()));

    let blank = StockSummary { logo_url: Some(String::new()), ..summary("acme") };
    assert_eq!(map_summary(&blank).logo, Logo::Glyph("a".into()));
}

#[test]
fn mapping_leaves_input_untouched() {
    let raw = StockSummary {
        name: Some("Acme Corp".into()),
        price: Some(12.5),
        change_pct: Some(-0.4),
        signal: Some("SELL".into()),
        trend_text: Some("Likely to go DOWN".into()),
        ..summary("ACME")
    };
    let before = raw.clone();
    let first = map_summary(&raw);
    let second = map_summary(&raw);

    assert_eq!(raw, before);
    assert_eq!(first, second);
    assert_eq!(first.action, Action::Sell);
    assert_eq!(first.trend_text.as_deref(), Some("Likely to go DOWN"));
    assert_eq!(first.price_text(), "₹12.50");
    assert_eq!(first.change_text(), "-0.4%");
}

#[test]
fn lowercase_signals_are_not_recognized() {
    let raw = StockSummary { signal: Some("buy".into()), ..summary("ACME") };
    assert_eq!(map_summary(&raw).action, Action::Hold);
}
