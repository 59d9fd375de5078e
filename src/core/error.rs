use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum MarketError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not valid JSON for the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// NewsAPI answered with a status other than `ok`.
    #[error("NewsAPI error ({code}): {message}")]
    NewsApi {
        /// The `code` field of the error envelope, or the raw status when absent.
        code: String,
        /// The `message` field of the error envelope.
        message: String,
    },

    /// An invalid date range was provided for a historical data request (start must be before end).
    #[error("invalid date range: start must be before end")]
    InvalidDates,

    /// The request parameters were invalid.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// A price series had no closing prices, so no gain can be computed.
    #[error("no closing prices returned for {symbol}")]
    EmptySeries {
        /// The ticker whose series was empty.
        symbol: String,
    },

    /// The chart could not be drawn or encoded.
    #[error("chart rendering failed: {0}")]
    Chart(String),

    /// A filesystem operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
