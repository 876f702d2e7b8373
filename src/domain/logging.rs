use std::sync::OnceLock;

use derive_more::Display;
use strum::EnumString;

/// Severity of a log line, padded so console columns line up
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum LogLevel {
    #[display(fmt = "DEBUG")]
    Debug,
    #[display(fmt = " INFO")]
    Info,
    #[display(fmt = " WARN")]
    Warn,
    #[display(fmt = "ERROR")]
    Error,
}

/// Layer that emitted a line, plus the unit inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LogComponent {
    #[display(fmt = "DOM:{}", _0)]
    Domain(&'static str),
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
    pub metadata: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: impl Into<String>) -> Self {
        Self {
            timestamp: get_clock().now(),
            level,
            component,
            message: message.into(),
            metadata: None,
        }
    }

    pub fn with_metadata(self, metadata: impl Into<String>) -> Self {
        Self { metadata: Some(metadata.into()), ..self }
    }

    /// `[clock] LEVEL LAYER:unit | message [| metadata]`
    pub fn line(&self, clock: &str) -> String {
        let head = format!("[{clock}] {} {} | {}", self.level, self.component, self.message);
        match &self.metadata {
            Some(metadata) => format!("{head} | {metadata}"),
            None => head,
        }
    }
}

/// Source of entry timestamps in milliseconds
pub trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);

    fn debug(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Debug, component, message));
    }

    fn info(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Info, component, message));
    }

    fn warn(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Warn, component, message));
    }

    fn error(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Error, component, message));
    }

    fn log_with_metadata(&self, level: LogLevel, component: LogComponent, message: &str, metadata: &str) {
        self.log(LogEntry::new(level, component, message).with_metadata(metadata));
    }
}

static LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();
static CLOCK: OnceLock<Box<dyn Clock>> = OnceLock::new();

/// First call wins
pub fn init_logger(logger: Box<dyn Logger>) {
    if LOGGER.set(logger).is_err() {
        get_logger().debug(LogComponent::Domain("Logging"), "Logger already installed");
    }
}

pub fn init_clock(clock: Box<dyn Clock>) {
    let _ = CLOCK.set(clock);
}

/// Silent until `init_logger` runs, so native tests can log freely
pub fn get_logger() -> &'static dyn Logger {
    match LOGGER.get() {
        Some(logger) => logger.as_ref(),
        None => &Silent,
    }
}

fn get_clock() -> &'static dyn Clock {
    match CLOCK.get() {
        Some(clock) => clock.as_ref(),
        None => &Silent,
    }
}

struct Silent;

impl Logger for Silent {
    fn log(&self, _entry: LogEntry) {}
}

impl Clock for Silent {
    fn now(&self) -> u64 {
        0
    }
}

/// Compiled out of release builds
#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::domain::logging::get_logger().debug($component, &format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().info($component, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn level_parses_case_insensitively() {
        assert_eq!(LogLevel::from_str("warn").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert!(LogLevel::from_str("loud").is_err());
        assert!(LogLevel::Debug < LogLevel::Error);
    }

    #[test]
    fn component_display_carries_layer_prefix() {
        assert_eq!(LogComponent::Infrastructure("Http").to_string(), "INF:Http");
        assert_eq!(LogComponent::Presentation("Dashboard").to_string(), "PRE:Dashboard");
    }

    #[test]
    fn line_layout() {
        let entry = LogEntry::new(LogLevel::Info, LogComponent::Application("Details"), "loaded");
        assert_eq!(entry.line("10:00:00.000"), "[10:00:00.000]  INFO APP:Details | loaded");

        let entry = entry.with_metadata("TCS");
        assert_eq!(entry.line("t"), "[t]  INFO APP:Details | loaded | TCS");
    }
}
