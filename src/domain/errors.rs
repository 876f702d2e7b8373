use derive_more::Display;

/// Why a request to the snapshot endpoint produced no data
#[derive(Debug, Clone, PartialEq, Display)]
pub enum FetchError {
    #[display(fmt = "Network error: {}", _0)]
    Network(String),
    #[display(fmt = "HTTP error: {} {}", status, status_text)]
    HttpStatus { status: u16, status_text: String },
    #[display(fmt = "Malformed JSON body: {}", _0)]
    Decode(String),
}

impl std::error::Error for FetchError {}

/// Terminal states of the dashboard load pass, rendered as visible messages
#[derive(Debug, Clone, PartialEq, Display)]
pub enum DashboardError {
    #[display(fmt = "Error loading stocks")]
    LoadFailed(FetchError),
    #[display(fmt = "No stock data available")]
    MissingStockList,
    #[display(fmt = "No valid stocks to display")]
    NoValidStocks,
}

impl std::error::Error for DashboardError {}

/// Terminal states of the details load pass
#[derive(Debug, Clone, PartialEq, Display)]
pub enum DetailsError {
    #[display(fmt = "No stock selected")]
    NoSymbolSelected,
    #[display(fmt = "Error loading stock")]
    LoadFailed(Option<FetchError>),
    #[display(fmt = "Stock not found")]
    StockNotFound(String),
}

impl std::error::Error for DetailsError {}

pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_messages() {
        assert_eq!(DetailsError::NoSymbolSelected.to_string(), "No stock selected");
        assert_eq!(DetailsError::LoadFailed(None).to_string(), "Error loading stock");
        assert_eq!(DetailsError::StockNotFound("X".into()).to_string(), "Stock not found");
        assert_eq!(
            DashboardError::LoadFailed(FetchError::Network("offline".into())).to_string(),
            "Error loading stocks"
        );
    }

    #[test]
    fn http_status_message() {
        let err = FetchError::HttpStatus { status: 502, status_text: "Bad Gateway".into() };
        assert_eq!(err.to_string(), "HTTP error: 502 Bad Gateway");
    }
}
