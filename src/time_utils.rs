/// Date-only part of an ISO-8601 timestamp (`2024-05-01T00:00:00` -> `2024-05-01`).
///
/// Shorter inputs come back unchanged.
pub fn date_label(timestamp: &str) -> String {
    timestamp.chars().take(10).collect()
}

/// Current wall-clock time in milliseconds, via the browser clock
pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

/// `HH:MM:SS.mmm` in local time, used for log prefixes
pub fn format_clock(timestamp: u64) -> String {
    let date = js_sys::Date::new(&(timestamp as f64).into());
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        date.get_hours(),
        date.get_minutes(),
        date.get_seconds(),
        date.get_milliseconds()
    )
}
