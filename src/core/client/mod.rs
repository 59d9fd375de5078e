//! Public client surface + builder.
//! Default endpoints and the UA live in `constants`.

mod constants;

use crate::core::MarketError;
use constants::{DEFAULT_BASE_CHART, DEFAULT_BASE_NEWS, USER_AGENT};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Holds a configured HTTP client, the service base URLs and the NewsAPI key.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted.
#[derive(Clone)]
pub struct MarketClient {
    http: Client,
    base_chart: Url,
    base_news: Url,
    news_api_key: String,
}

impl fmt::Debug for MarketClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarketClient")
            .field("base_chart", &self.base_chart.as_str())
            .field("base_news", &self.base_news.as_str())
            .field("news_api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl MarketClient {
    /// Create a new builder.
    pub fn builder() -> MarketClientBuilder {
        MarketClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_chart(&self) -> &Url {
        &self.base_chart
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn news_api_key(&self) -> &str {
        &self.news_api_key
    }
}

/* ----------------------- Builder ----------------------- */

/// Configures a [`MarketClient`]. Unset options fall back to the public endpoints,
/// a desktop browser User-Agent and reqwest's default timeouts.
#[derive(Default)]
pub struct MarketClientBuilder {
    user_agent: Option<String>,
    base_chart: Option<Url>,
    base_news: Option<Url>,
    news_api_key: Option<String>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl MarketClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the chart API base (e.g., `https://query1.finance.yahoo.com/v8/finance/chart/`).
    #[must_use]
    pub fn base_chart(mut self, url: Url) -> Self {
        self.base_chart = Some(url);
        self
    }

    /// Override the NewsAPI base (e.g., `https://newsapi.org/`).
    #[must_use]
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Set the NewsAPI key sent as `apiKey`. An empty key is passed through unchanged.
    #[must_use]
    pub fn news_api_key(mut self, key: impl Into<String>) -> Self {
        self.news_api_key = Some(key.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default base URL fails to parse or the HTTP client cannot be built.
    pub fn build(self) -> Result<MarketClient, MarketError> {
        let base_chart = match self.base_chart {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_CHART)?,
        };
        let base_news = match self.base_news {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_NEWS)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(MarketClient {
            http,
            base_chart,
            base_news,
            news_api_key: self.news_api_key.unwrap_or_default(),
        })
    }
}
