use std::fmt;

use crate::core::MarketError;
use crate::news::Article;

/// Printed when the search succeeds but returns no articles.
pub const NO_RESULTS_MESSAGE: &str = "No news articles found for the specified date range.";

/// Printed for every failure: transport, decoding, or a non-`ok` status.
pub const FAILURE_MESSAGE: &str =
    "Failed to fetch news articles. Please check the API key or network connection.";

/// The outcome of one news search, reduced to what gets printed.
///
/// `Display` renders the exact stdout text, trailing newlines included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsReport {
    /// At least one article, in the order the service returned them.
    Articles(Vec<Article>),
    /// The service answered `ok` with an empty article list.
    Empty,
    /// Anything else. The cause is logged, not shown.
    Failed,
}

impl NewsReport {
    /// Collapses a fetch result into a report, logging the cause of a failure.
    pub fn from_result(result: Result<Vec<Article>, MarketError>) -> Self {
        match result {
            Ok(articles) if articles.is_empty() => Self::Empty,
            Ok(articles) => Self::Articles(articles),
            Err(e) => {
                tracing::warn!(error = %e, "news fetch failed");
                Self::Failed
            }
        }
    }
}

fn or_none(field: Option<&String>) -> &str {
    field.map_or("None", String::as_str)
}

impl fmt::Display for NewsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Articles(articles) => {
                for a in articles {
                    writeln!(f, "Title: {}", or_none(a.title.as_ref()))?;
                    writeln!(f, "Published At: {}", or_none(a.published_at.as_ref()))?;
                    writeln!(f, "Source: {}", or_none(a.source_name.as_ref()))?;
                    writeln!(f, "Description: {}", or_none(a.description.as_ref()))?;
                    writeln!(f)?;
                }
                Ok(())
            }
            Self::Empty => writeln!(f, "{NO_RESULTS_MESSAGE}"),
            Self::Failed => writeln!(f, "{FAILURE_MESSAGE}"),
        }
    }
}
