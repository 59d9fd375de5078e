use serde::Deserialize;

/// Envelope of `/v2/everything`. Success and error responses share it:
/// errors carry `code` + `message` instead of `articles`.
#[derive(Deserialize)]
pub(crate) struct EverythingEnvelope {
    pub(crate) status: Option<String>,
    #[serde(default, rename = "totalResults")]
    pub(crate) total_results: Option<u64>,
    #[serde(default)]
    pub(crate) articles: Option<Vec<RawArticle>>,
    #[serde(default)]
    pub(crate) code: Option<String>,
    #[serde(default)]
    pub(crate) message: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct RawArticle {
    #[serde(default)]
    pub(crate) source: Option<RawSource>,
    #[serde(default)]
    pub(crate) author: Option<String>,
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) url: Option<String>,
    #[serde(default, rename = "publishedAt")]
    pub(crate) published_at: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct RawSource {
    #[serde(default)]
    pub(crate) name: Option<String>,
}
