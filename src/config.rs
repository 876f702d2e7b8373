//! Build-time configuration.
//!
//! Defaults match the deployed dashboard; `STOCK_API_URL` and `STOCK_LOG_LEVEL`
//! override them when set in the environment of `cargo build`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::logging::LogLevel;

const DEFAULT_API_URL: &str = "https://c6e3ke1ckj.execute-api.ap-south-1.amazonaws.com/prod/stock";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_dashboard_page")]
    pub dashboard: String,
    #[serde(default = "default_details_page")]
    pub details: String,
    #[serde(default = "default_landing_page")]
    pub landing: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_key")]
    pub key: String,
    /// Placeholder credential; nothing validates it
    #[serde(default = "default_session_token")]
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_dashboard_height")]
    pub dashboard_height: u32,
    #[serde(default = "default_details_height")]
    pub details_height: u32,
    #[serde(default = "default_chart_width")]
    pub fallback_width: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub pages: PageConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default = "default_currency_glyph")]
    pub currency_glyph: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_url() -> String { DEFAULT_API_URL.to_string() }
fn default_dashboard_page() -> String { "dashboard.html".to_string() }
fn default_details_page() -> String { "stock.html".to_string() }
fn default_landing_page() -> String { "index.html".to_string() }
fn default_session_key() -> String { "access_token".to_string() }
fn default_session_token() -> String { "demo-token-123".to_string() }
fn default_dashboard_height() -> u32 { 230 }
fn default_details_height() -> u32 { 260 }
fn default_chart_width() -> u32 { 800 }
fn default_currency_glyph() -> String { "₹".to_string() }
fn default_log_level() -> String { "debug".to_string() }

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            dashboard: default_dashboard_page(),
            details: default_details_page(),
            landing: default_landing_page(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { key: default_session_key(), token: default_session_token() }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            dashboard_height: default_dashboard_height(),
            details_height: default_details_height(),
            fallback_width: default_chart_width(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            pages: PageConfig::default(),
            session: SessionConfig::default(),
            chart: ChartConfig::default(),
            currency_glyph: default_currency_glyph(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Defaults with build-time environment overrides applied
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("STOCK_API_URL").filter(|s| !s.is_empty()) {
            config.api_url = url.to_string();
        }
        if let Some(level) = option_env!("STOCK_LOG_LEVEL").filter(|s| !s.is_empty()) {
            config.log_level = level.to_string();
        }
        config
    }

    /// Unparseable levels fall back to debug
    pub fn min_log_level(&self) -> LogLevel {
        self.log_level.parse().unwrap_or(LogLevel::Debug)
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_build_env);

pub fn config() -> &'static AppConfig {
    &CONFIG
}
