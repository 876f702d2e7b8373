use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use serde_json::json;
use stock_dashboard_wasm::domain::market_data::{
    StockSummary,
    services::{displayable_stocks, is_displayable},
};

fn record(symbol: &str, change: Option<f64>, error: Option<serde_json::Value>) -> StockSummary {
    StockSummary { change_pct: change, error, ..StockSummary::new(symbol) }
}

#[quickcheck]
fn drops_exactly_the_bad_records(flags: Vec<(bool, bool)>) -> TestResult {
    if flags.len() > 200 {
        return TestResult::discard();
    }
    let input: Vec<StockSummary> = flags
        .iter()
        .enumerate()
        .map(|(i, (has_error, numeric))| {
            record(
                &format!("S{i}"),
                numeric.then_some(i as f64 - 50.0),
                has_error.then(|| json!("upstream timeout")),
            )
        })
        .collect();
    let bad = flags.iter().filter(|(has_error, numeric)| *has_error || !*numeric).count();

    let output = displayable_stocks(&input);
    let order_kept = output
        .iter()
        .map(|s| s.symbol.value().to_string())
        .eq(input.iter().filter(|s| is_displayable(s)).map(|s| s.symbol.clone()));

    TestResult::from_bool(output.len() == input.len() - bad && order_kept)
}

#[test]
fn non_numeric_change_is_rejected() {
    let input: Vec<StockSummary> = serde_json::from_value(json!([
        {"symbol": "OK", "change_pct": 1.0},
        {"symbol": "STR", "change_pct": "1.0"},
        {"symbol": "NUL", "change_pct": null},
        {"symbol": "MISSING"}
    ]))
    .unwrap();

    let output = displayable_stocks(&input);
    assert_eq!(output.len(), 1);
    assert_eq!(output[0].symbol.value(), "OK");
}

#[test]
fn falsy_error_values_do_not_flag() {
    for falsy in [json!(null), json!(false), json!(""), json!(0)] {
        assert!(is_displayable(&record("A", Some(0.0), Some(falsy))));
    }
    for truthy in [json!(true), json!("boom"), json!(1), json!({"code": 500})] {
        assert!(!is_displayable(&record("A", Some(0.0), Some(truthy))));
    }
}
