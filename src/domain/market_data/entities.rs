pub use super::value_objects::{Action, ChangeDirection, Logo, Price, Symbol};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Numbers decode as values; strings, booleans and nulls decode as absent
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_f64))
}

/// Strings decode as values; any other JSON type decodes as absent
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Ok(Some(text)),
        _ => Ok(None),
    }
}

fn lenient_symbol<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

/// Array elements of an optional JSON array; a non-array counts as empty
fn lenient_array<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(values)) => Ok(values),
        _ => Ok(Vec::new()),
    }
}

fn lenient_series<'de, D>(deserializer: D) -> Result<Vec<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_array(deserializer)?.iter().map(Value::as_f64).collect())
}

fn lenient_labels<'de, D>(deserializer: D) -> Result<Vec<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_array(deserializer)?
        .into_iter()
        .map(|v| match v {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

/// Empty strings count as missing, like the rest of the payload's optional text
fn non_empty(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|s| !s.is_empty())
}

/// One stock's raw record inside a snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockSummary {
    #[serde(default, deserialize_with = "lenient_symbol")]
    pub symbol: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub change_pct: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub signal: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub short_ma: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub long_ma: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub logo_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub trend_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub low: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub high: Option<f64>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl StockSummary {
    pub fn new(symbol: &str) -> Self {
        Self { symbol: symbol.to_string(), ..Self::default() }
    }

    /// The error field is set when it holds anything truthy
    pub fn has_error(&self) -> bool {
        match &self.error {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    pub fn display_name(&self) -> &str {
        non_empty(&self.name).unwrap_or(&self.symbol)
    }

    pub fn logo_url(&self) -> Option<&str> {
        non_empty(&self.logo_url)
    }

    pub fn trend_text(&self) -> Option<&str> {
        non_empty(&self.trend_text)
    }
}

/// Optional OHLC series for one symbol, column-oriented as the server sends it
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LeaderChart {
    #[serde(default, deserialize_with = "lenient_text")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient_labels")]
    pub timestamps: Vec<Option<String>>,
    #[serde(default, deserialize_with = "lenient_series")]
    pub open: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "lenient_series")]
    pub high: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "lenient_series")]
    pub low: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "lenient_series")]
    pub close: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "lenient_series")]
    pub volume: Vec<Option<f64>>,
}

impl LeaderChart {
    /// Whether the series may be drawn for `symbol`; an untagged series belongs to anyone
    pub fn belongs_to(&self, symbol: &str) -> bool {
        match non_empty(&self.symbol) {
            Some(tagged) => tagged == symbol,
            None => true,
        }
    }

    /// Row-oriented points up to the shortest column, skipping rows with gaps
    pub fn points(&self) -> Vec<CandlePoint> {
        let len = self
            .timestamps
            .len()
            .min(self.open.len())
            .min(self.high.len())
            .min(self.low.len())
            .min(self.close.len());

        (0..len)
            .filter_map(|i| {
                let label = self.timestamps[i].as_deref()?;
                Some(CandlePoint {
                    time: CandleTime::Label(crate::time_utils::date_label(label)),
                    open: self.open[i]?,
                    high: self.high[i]?,
                    low: self.low[i]?,
                    close: self.close[i]?,
                })
            })
            .collect()
    }
}

/// Full payload of one request to the snapshot endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub all_stocks: Option<Vec<StockSummary>>,
    #[serde(default)]
    pub top_5: Option<Vec<StockSummary>>,
    #[serde(default)]
    pub bottom_5: Option<Vec<StockSummary>>,
    #[serde(default)]
    pub leader_chart: Option<LeaderChart>,
}

/// X position of a chart point
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CandleTime {
    Label(String),
    Index(usize),
}

impl std::fmt::Display for CandleTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CandleTime::Label(label) => f.write_str(label),
            CandleTime::Index(i) => write!(f, "{}", i),
        }
    }
}

/// Domain entity - one candle of a chart series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandlePoint {
    pub time: CandleTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl CandlePoint {
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }
}

/// Display-ready form of a [`StockSummary`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockViewModel {
    pub name: String,
    pub symbol: Symbol,
    pub price: Option<f64>,
    pub change_pct: Option<f64>,
    pub action: Action,
    pub logo: Logo,
    pub trend_text: Option<String>,
    pub short_ma: Option<f64>,
    pub long_ma: Option<f64>,
}

impl StockViewModel {
    pub fn direction(&self) -> Option<ChangeDirection> {
        self.change_pct.map(ChangeDirection::from_change)
    }

    pub fn price_text(&self) -> String {
        match self.price {
            Some(p) => Price::from(p).formatted(),
            None => "--".to_string(),
        }
    }

    /// Change rendered the way the server number reads, e.g. `2.1%`
    pub fn change_text(&self) -> String {
        match self.change_pct {
            // avoid printing "-0%"
            Some(c) if c == 0.0 => "0%".to_string(),
            Some(c) => format!("{}%", c),
            None => "--".to_string(),
        }
    }
}
