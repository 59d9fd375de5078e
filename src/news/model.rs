use serde::Serialize;

/// A single article returned by the `everything` search.
///
/// Every field is optional because NewsAPI nulls or omits fields freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// The headline of the article.
    pub title: Option<String>,
    /// Publication timestamp exactly as sent by the service (ISO 8601, UTC).
    pub published_at: Option<String>,
    /// Display name of the publishing source (e.g., "Reuters").
    pub source_name: Option<String>,
    /// Short description or snippet.
    pub description: Option<String>,
    /// Byline, when present.
    pub author: Option<String>,
    /// A direct link to the article.
    pub url: Option<String>,
}
