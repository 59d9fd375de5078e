use std::path::PathBuf;

/// Environment variable holding the NewsAPI credential.
pub const NEWSAPI_KEY_VAR: &str = "NEWSAPI_KEY";

/// Loads a `.env` file from the working directory or one of its parents, if one exists.
///
/// Values already present in the process environment win. A missing file is not an error;
/// a malformed one is logged and ignored.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded .env");
            Some(path)
        }
        Err(e) if e.not_found() => None,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable .env file");
            None
        }
    }
}

/// Credentials for the news fetcher.
#[derive(Clone, Default)]
pub struct NewsConfig {
    /// The NewsAPI key. Empty when the variable is unset.
    pub api_key: String,
}

impl std::fmt::Debug for NewsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsConfig")
            .field("api_key_set", &!self.api_key.is_empty())
            .finish()
    }
}

impl NewsConfig {
    /// Uses `api_key` as given.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Reads `NEWSAPI_KEY` from the process environment.
    ///
    /// The key is not validated: an unset or empty variable yields an empty key, which the
    /// remote service will reject. A warning is logged in that case.
    pub fn from_env() -> Self {
        let api_key = std::env::var(NEWSAPI_KEY_VAR).unwrap_or_default();
        if api_key.trim().is_empty() {
            tracing::warn!("{NEWSAPI_KEY_VAR} is not set; the request will likely be rejected");
        }
        Self { api_key }
    }
}
