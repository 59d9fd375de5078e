#[cfg(feature = "test-mode")]
use std::env;

/// Read the response body as text.
/// In `test-mode`, if `MARKETBRIEF_RECORD=1`, the body is saved as a fixture.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    endpoint: &str,
    key: &str,
    ext: &str,
) -> Result<String, reqwest::Error> {
    let status = resp.status();
    let text = resp.text().await?;
    tracing::debug!(endpoint, key, %status, bytes = text.len(), "response body read");

    #[cfg(feature = "test-mode")]
    {
        if env::var("MARKETBRIEF_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(endpoint, key, ext, &text)
        {
            tracing::warn!(endpoint, key, error = %e, "failed to write fixture");
        }
    }
    #[cfg(not(feature = "test-mode"))]
    let _ = ext;

    Ok(text)
}
