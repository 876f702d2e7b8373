//! Page identity, navigation and the session stub.

use url::form_urlencoded;

use crate::config::{PageConfig, config};
use crate::domain::logging::{LogComponent, get_logger};

/// Which page the script was loaded into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Details,
}

impl Page {
    /// Match the trailing path segment against the configured page names
    pub fn from_path(path: &str, pages: &PageConfig) -> Option<Self> {
        let last = path.rsplit('/').next().unwrap_or_default();
        if last == pages.dashboard {
            Some(Page::Dashboard)
        } else if last == pages.details {
            Some(Page::Details)
        } else {
            None
        }
    }

    pub fn current() -> Option<Self> {
        let path = gloo::utils::window().location().pathname().ok()?;
        Self::from_path(&path, &config().pages)
    }
}

/// `symbol` parameter of a `?a=b&c=d` query string; empty values count as absent
pub fn symbol_from_query(search: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "symbol")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Details page link for `symbol`, percent-encoded
pub fn details_url(symbol: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(symbol.as_bytes()).collect();
    format!("{}?symbol={}", config().pages.details, encoded)
}

pub fn current_symbol() -> Option<String> {
    let search = gloo::utils::window().location().search().ok()?;
    symbol_from_query(&search)
}

pub fn navigate_to(url: &str) {
    if let Err(e) = gloo::utils::window().location().set_href(url) {
        get_logger().error(
            LogComponent::Infrastructure("Navigation"),
            &format!("Failed to navigate to {url}: {e:?}"),
        );
    }
}

fn session_storage() -> Option<web_sys::Storage> {
    gloo::utils::window().session_storage().ok().flatten()
}

/// Mark the tab as signed in with the placeholder credential
pub fn start_session() {
    let session = &config().session;
    match session_storage() {
        Some(storage) => {
            if storage.set_item(&session.key, &session.token).is_err() {
                get_logger().warn(LogComponent::Infrastructure("Session"), "sessionStorage write rejected");
            }
        }
        None => get_logger().warn(LogComponent::Infrastructure("Session"), "sessionStorage unavailable"),
    }
    get_logger().warn(
        LogComponent::Infrastructure("Session"),
        "🚨 Authentication bypassed, using placeholder session",
    );
}

/// Drop everything in session storage and go back to the landing page
pub fn end_session() {
    if let Some(storage) = session_storage() {
        let _ = storage.clear();
    }
    navigate_to(&config().pages.landing);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_from_trailing_segment() {
        let pages = PageConfig::default();
        assert_eq!(Page::from_path("/app/dashboard.html", &pages), Some(Page::Dashboard));
        assert_eq!(Page::from_path("stock.html", &pages), Some(Page::Details));
        assert_eq!(Page::from_path("/app/", &pages), None);
        assert_eq!(Page::from_path("/stock.html/other", &pages), None);
    }

    #[test]
    fn symbol_query_round_trip() {
        let url = details_url("M&M");
        assert_eq!(url, "stock.html?symbol=M%26M");
        let query = url.split_once('?').map(|(_, q)| q).unwrap();
        assert_eq!(symbol_from_query(query).as_deref(), Some("M&M"));
    }

    #[test]
    fn missing_or_blank_symbol() {
        assert_eq!(symbol_from_query(""), None);
        assert_eq!(symbol_from_query("?symbol="), None);
        assert_eq!(symbol_from_query("?other=1"), None);
        assert_eq!(symbol_from_query("?other=1&symbol=TCS").as_deref(), Some("TCS"));
    }
}
