mod api;
mod model;
mod report;
mod wire;

use std::str::FromStr;

use chrono::NaiveDate;

pub use model::Article;
pub use report::{FAILURE_MESSAGE, NO_RESULTS_MESSAGE, NewsReport};

use crate::{MarketClient, MarketError};

/// Keyword searched when none is given.
pub const DEFAULT_QUERY: &str = "Nvidia";
/// Start of the default search window (inclusive, `YYYY-MM-DD`).
pub const DEFAULT_FROM: &str = "2025-05-24";
/// End of the default search window (inclusive, `YYYY-MM-DD`).
pub const DEFAULT_TO: &str = "2025-06-23";

/// Ordering applied by the service. The client never reorders results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Newest first.
    #[default]
    PublishedAt,
    /// Closest match to the query first.
    Relevancy,
    /// Most popular sources and publishers first.
    Popularity,
}

impl SortBy {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::PublishedAt => "publishedAt",
            Self::Relevancy => "relevancy",
            Self::Popularity => "popularity",
        }
    }
}

impl FromStr for SortBy {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publishedAt" | "published-at" => Ok(Self::PublishedAt),
            "relevancy" => Ok(Self::Relevancy),
            "popularity" => Ok(Self::Popularity),
            other => Err(MarketError::InvalidParams(format!(
                "unknown sort order '{other}' (expected publishedAt, relevancy or popularity)"
            ))),
        }
    }
}

/// A builder for one search against the NewsAPI `everything` endpoint.
pub struct EverythingBuilder {
    client: MarketClient,
    query: String,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    sort_by: SortBy,
}

impl EverythingBuilder {
    /// Creates a new builder searching for `query`, with no date window and newest-first ordering.
    pub fn new(client: &MarketClient, query: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            query: query.into(),
            from: None,
            to: None,
            sort_by: SortBy::default(),
        }
    }

    /// Oldest publication date to include.
    #[must_use]
    pub const fn from(mut self, date: NaiveDate) -> Self {
        self.from = Some(date);
        self
    }

    /// Newest publication date to include.
    #[must_use]
    pub const fn to(mut self, date: NaiveDate) -> Self {
        self.to = Some(date);
        self
    }

    /// Sets the ordering requested from the service.
    #[must_use]
    pub const fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Executes the request and returns the articles in service order.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::NewsApi`] when the service answers with a status other than `ok`,
    /// and a transport or decoding error when the request itself fails.
    #[tracing::instrument(skip(self), err(level = "debug"), fields(query = %self.query))]
    pub async fn fetch(self) -> Result<Vec<Article>, MarketError> {
        api::fetch_everything(
            &self.client,
            &self.query,
            self.from,
            self.to,
            self.sort_by,
        )
        .await
    }

    /// Executes the request and reduces every outcome to a printable [`NewsReport`].
    /// Never fails; errors become [`NewsReport::Failed`].
    pub async fn report(self) -> NewsReport {
        NewsReport::from_result(self.fetch().await)
    }
}
