use derive_more::{Constructor, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use crate::config::config;

/// Value Object - price in the snapshot's quote currency
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// `₹3500.50` style text with two decimals
    pub fn formatted(&self) -> String {
        format!("{}{}", config().currency_glyph, two_decimals(self.0))
    }
}

/// Two-decimal text where exact halfway values round away from zero.
///
/// Only multiples of 1/8 can sit exactly on a third-decimal 5, so those are
/// nudged one ulp outward before formatting.
fn two_decimals(value: f64) -> String {
    let eighths = value * 8.0;
    let halfway = value.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0;
    let value = if halfway { f64::from_bits(value.to_bits() + 1) } else { value };
    format!("{value:.2}")
}

/// Value Object - ticker symbol exactly as the server sent it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct Symbol(String);

impl Symbol {
    pub fn value(&self) -> &str {
        &self.0
    }

    /// First character of the symbol, case preserved; `?` for an empty symbol
    pub fn glyph(&self) -> String {
        self.0.chars().next().map(String::from).unwrap_or_else(|| "?".to_string())
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Discrete recommendation shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, AsRefStr, Serialize)]
pub enum Action {
    Buy,
    Sell,
    #[default]
    Hold,
}

impl Action {
    /// `BUY` and `SELL` map through; anything else, including no signal, is a hold
    pub fn from_signal(signal: Option<&str>) -> Self {
        match signal {
            Some("BUY") => Action::Buy,
            Some("SELL") => Action::Sell,
            _ => Action::Hold,
        }
    }
}

/// Sign of a percentage change; zero counts as up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Up,
    Down,
}

impl ChangeDirection {
    pub fn from_change(change_pct: f64) -> Self {
        if change_pct >= 0.0 { ChangeDirection::Up } else { ChangeDirection::Down }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ChangeDirection::Up => "badge-up",
            ChangeDirection::Down => "badge-down",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ChangeDirection::Up => "#4ade80",
            ChangeDirection::Down => "#fb7185",
        }
    }
}

/// What to show in the logo slot of a stock row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Logo {
    Image(String),
    Glyph(String),
}

/// Low/high pair rendered as `₹low - ₹high`
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize)]
pub struct PriceRange {
    pub low: Price,
    pub high: Price,
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.low.formatted(), self.high.formatted())
    }
}

/// Period selector of the details chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumIter, EnumString, AsRefStr)]
pub enum ChartRange {
    #[strum(serialize = "1D")]
    OneDay,
    #[strum(serialize = "1W")]
    OneWeek,
    #[default]
    #[strum(serialize = "1M")]
    OneMonth,
    #[strum(serialize = "3M")]
    ThreeMonths,
}

impl ChartRange {
    /// Unknown selectors fall through to the longest period
    pub fn from_selector(selector: &str) -> Self {
        selector.parse().unwrap_or(ChartRange::ThreeMonths)
    }

    pub fn point_count(&self) -> usize {
        match self {
            ChartRange::OneDay => 16,
            ChartRange::OneWeek => 7,
            ChartRange::OneMonth => 30,
            ChartRange::ThreeMonths => 60,
        }
    }
}
