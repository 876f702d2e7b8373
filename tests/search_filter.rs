use quickcheck_macros::quickcheck;
use stock_dashboard_wasm::domain::market_data::{
    StockSummary, StockViewModel,
    services::{map_summary, search_stocks},
};

fn stock(symbol: &str, name: &str) -> StockViewModel {
    map_summary(&StockSummary {
        name: Some(name.to_string()),
        change_pct: Some(0.5),
        ..StockSummary::new(symbol)
    })
}

fn universe() -> Vec<StockViewModel> {
    vec![
        stock("TCS", "Tata Consultancy"),
        stock("INFY", "Infosys"),
        stock("AAPL", "Apple Inc."),
        stock("MSFT", "Microsoft Corporation"),
    ]
}

#[test]
fn empty_or_blank_query_returns_everything_in_order() {
    let all = universe();
    assert_eq!(search_stocks(&all, ""), all);
    assert_eq!(search_stocks(&all, "   "), all);
}

#[test]
fn matches_name_or_symbol_case_insensitively() {
    let all = universe();
    let by_symbol: Vec<_> = search_stocks(&all, "infy").into_iter().map(|s| s.name).collect();
    assert_eq!(by_symbol, vec!["Infosys"]);

    let by_name: Vec<_> =
        search_stocks(&all, "CONS").into_iter().map(|s| s.symbol.to_string()).collect();
    assert_eq!(by_name, vec!["TCS"]);

    let shared: Vec<_> =
        search_stocks(&all, "o").into_iter().map(|s| s.symbol.to_string()).collect();
    assert_eq!(shared, vec!["TCS", "INFY", "MSFT"]);
}

#[test]
fn absent_characters_match_nothing() {
    assert!(search_stocks(&universe(), "zzz#").is_empty());
}

#[quickcheck]
fn filtering_is_idempotent(query: String) -> bool {
    let once = search_stocks(&universe(), &query);
    let twice = search_stocks(&once, &query);
    once == twice
}

#[quickcheck]
fn results_are_an_ordered_subsequence(query: String) -> bool {
    let all = universe();
    let found = search_stocks(&all, &query);
    let mut remaining = all.iter();
    found.iter().all(|f| remaining.any(|s| s == f))
}
