use thiserror::Error;

/// Why a request to the marketplace API produced no usable data.
///
/// An empty `items` list is not an error; it is a successful response.
/// Messages are kept as strings so the error stays `Clone` and can live in
/// reactive state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Could not reach the marketplace: {0}")]
    Network(String),

    #[error("The marketplace answered {status} for {url}")]
    Status { status: u16, url: String },

    #[error("The marketplace sent an unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Short heading for the error panel.
    pub fn title(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "Connection problem",
            ApiError::Status { .. } => "Marketplace unavailable",
            ApiError::Decode(_) => "Unexpected response",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = ApiError::Status {
            status: 503,
            url: "http://localhost:8000/api/vendors".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "The marketplace answered 503 for http://localhost:8000/api/vendors"
        );
        assert_eq!(err.title(), "Marketplace unavailable");
    }

    #[test]
    fn test_titles_are_distinct() {
        let errors = [
            ApiError::Network("refused".into()),
            ApiError::Status { status: 500, url: String::new() },
            ApiError::Decode("expected value".into()),
        ];
        let titles: Vec<_> = errors.iter().map(ApiError::title).collect();
        assert_eq!(titles.len(), 3);
        assert_ne!(titles[0], titles[1]);
        assert_ne!(titles[1], titles[2]);
    }
}
