use wasm_bindgen::JsValue;

use crate::domain::{
    logging::{Clock, LogEntry, LogLevel, Logger},
    market_data::RandomSource,
};
use crate::time_utils::{format_clock, now_millis};

/// Browser console sink; entries below `min_level` are dropped
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }

        let line = JsValue::from(entry.line(&format_clock(entry.timestamp)));
        match entry.level {
            LogLevel::Debug => web_sys::console::debug_1(&line),
            LogLevel::Info => web_sys::console::info_1(&line),
            LogLevel::Warn => web_sys::console::warn_1(&line),
            LogLevel::Error => web_sys::console::error_1(&line),
        }
    }
}

/// `Date.now()`
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> u64 {
        now_millis()
    }
}

/// Unseeded randomness from `Math.random()`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}
