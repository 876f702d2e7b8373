use super::entities::{StockSummary, StockViewModel};
use super::value_objects::{Action, Logo, Price, PriceRange, Symbol};

/// Convert a raw summary into its display-ready form without touching the input
pub fn map_summary(summary: &StockSummary) -> StockViewModel {
    let symbol = Symbol::from(summary.symbol.as_str());
    let logo = match summary.logo_url() {
        Some(url) => Logo::Image(url.to_string()),
        None => Logo::Glyph(symbol.glyph()),
    };

    StockViewModel {
        name: summary.display_name().to_string(),
        price: summary.price,
        change_pct: summary.change_pct,
        action: Action::from_signal(summary.signal.as_deref()),
        logo,
        trend_text: summary.trend_text().map(str::to_string),
        short_ma: summary.short_ma,
        long_ma: summary.long_ma,
        symbol,
    }
}

/// Only error-free records with a numeric change make it onto the dashboard
pub fn is_displayable(summary: &StockSummary) -> bool {
    !summary.has_error() && summary.change_pct.is_some()
}

pub fn displayable_stocks(summaries: &[StockSummary]) -> Vec<StockViewModel> {
    summaries.iter().filter(|s| is_displayable(s)).map(map_summary).collect()
}

/// Case-insensitive substring match on name or symbol; a blank query keeps everything
pub fn search_stocks(stocks: &[StockViewModel], query: &str) -> Vec<StockViewModel> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return stocks.to_vec();
    }

    stocks
        .iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&query)
                || s.symbol.value().to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Zero or missing prices cannot seed an approximation
fn usable_price(price: Option<f64>) -> Option<f64> {
    price.filter(|p| *p != 0.0 && !p.is_nan())
}

/// Server low/high when both are present, otherwise a -3%/+2% band around the price
pub fn today_range(summary: &StockSummary) -> Option<PriceRange> {
    if let (Some(low), Some(high)) = (summary.low, summary.high) {
        return Some(PriceRange::new(Price::from(low), Price::from(high)));
    }

    usable_price(summary.price).map(|p| PriceRange::new(Price::from(p * 0.97), Price::from(p * 1.02)))
}

/// Moving-average span when both averages are known, else 0.8x..1.3x of the price
pub fn yearly_range(stock: &StockViewModel) -> Option<PriceRange> {
    match (usable_price(stock.short_ma), usable_price(stock.long_ma)) {
        (Some(short), Some(long)) => Some(PriceRange::new(
            Price::from(short.min(long)),
            Price::from(short.max(long)),
        )),
        _ => usable_price(stock.price)
            .map(|p| PriceRange::new(Price::from(p * 0.8), Price::from(p * 1.3))),
    }
}

/// One-sentence summary of today's move, keyed off the change percentage
pub fn describe_momentum(stock: &StockViewModel) -> String {
    let name = &stock.name;
    match stock.change_pct {
        Some(c) if c > 1.5 => format!("{name} is showing strong positive momentum today."),
        Some(c) if c < -1.5 => format!("{name} is under selling pressure."),
        Some(c) if c > 0.0 => format!("{name} is mildly positive."),
        Some(c) if c < 0.0 => format!("{name} is slightly negative."),
        _ => format!("{name} is relatively stable today."),
    }
}

/// Server trend text wins over the synthesized sentence
pub fn description(stock: &StockViewModel) -> String {
    stock.trend_text.clone().unwrap_or_else(|| describe_momentum(stock))
}

pub fn range_text(range: Option<PriceRange>) -> String {
    range.map(|r| r.to_string()).unwrap_or_else(|| "--".to_string())
}
