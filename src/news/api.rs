use chrono::NaiveDate;

use crate::{
    core::{MarketClient, MarketError, net},
    news::{SortBy, model::Article, wire},
};

pub(super) async fn fetch_everything(
    client: &MarketClient,
    query: &str,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    sort_by: SortBy,
) -> Result<Vec<Article>, MarketError> {
    let mut url = client.base_news().join("v2/everything")?;
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("q", query);
        if let Some(d) = from {
            qp.append_pair("from", &d.format("%Y-%m-%d").to_string());
        }
        if let Some(d) = to {
            qp.append_pair("to", &d.format("%Y-%m-%d").to_string());
        }
        qp.append_pair("sortBy", sort_by.as_str());
        qp.append_pair("apiKey", client.news_api_key());
    }

    tracing::debug!(path = url.path(), query, ?from, ?to, "requesting news");

    // NewsAPI sends its JSON error envelope with 4xx codes, so the body is decoded
    // before the HTTP status is considered.
    // `without_url` keeps the api key out of error messages.
    let resp = client
        .http()
        .get(url.clone())
        .send()
        .await
        .map_err(|e| MarketError::Http(e.without_url()))?;
    let status = resp.status();
    let body = net::get_text(resp, "news_everything", query, "json")
        .await
        .map_err(|e| MarketError::Http(e.without_url()))?;

    let envelope: wire::EverythingEnvelope = match serde_json::from_str(&body) {
        Ok(env) => env,
        Err(_) if !status.is_success() => {
            return Err(MarketError::Status {
                status: status.as_u16(),
                url: format!("{}{}", url.origin().ascii_serialization(), url.path()),
            });
        }
        Err(e) => return Err(MarketError::Json(e)),
    };

    let api_status = envelope.status.unwrap_or_default();
    if api_status != "ok" {
        return Err(MarketError::NewsApi {
            code: envelope.code.unwrap_or(api_status),
            message: envelope.message.unwrap_or_default(),
        });
    }

    let articles = envelope.articles.unwrap_or_default();
    tracing::debug!(
        returned = articles.len(),
        total = envelope.total_results,
        "news decoded"
    );

    Ok(articles
        .into_iter()
        .map(|raw| Article {
            title: raw.title,
            published_at: raw.published_at,
            source_name: raw.source.and_then(|s| s.name),
            description: raw.description,
            author: raw.author,
            url: raw.url,
        })
        .collect())
}
