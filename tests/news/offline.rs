use chrono::NaiveDate;
use httpmock::{Method::GET, MockServer};
use marketbrief::news::{
    DEFAULT_FROM, DEFAULT_QUERY, DEFAULT_TO, FAILURE_MESSAGE, NO_RESULTS_MESSAGE,
};
use marketbrief::{EverythingBuilder, MarketClient, MarketError, NewsReport, SortBy};
use url::Url;

use crate::common;

fn window() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2025, 5, 24).unwrap(),
        NaiveDate::from_ymd_opt(2025, 6, 23).unwrap(),
    )
}

fn nvidia_search(client: &MarketClient) -> EverythingBuilder {
    let (from, to) = window();
    EverythingBuilder::new(client, "Nvidia")
        .from(from)
        .to(to)
        .sort_by(SortBy::PublishedAt)
}

#[tokio::test]
async fn offline_news_sends_query_and_prints_articles_in_order() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("q", "Nvidia")
            .query_param("from", "2025-05-24")
            .query_param("to", "2025-06-23")
            .query_param("sortBy", "publishedAt")
            .query_param("apiKey", common::API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("news_everything", "Nvidia", "json"));
    });

    let client = common::client_for(&server);
    let report = nvidia_search(&client).report().await;
    mock.assert();

    let expected = "\
Title: Nvidia unveils new AI chips at Computex
Published At: 2025-06-23T14:05:11Z
Source: Reuters
Description: Nvidia showed its next generation of data-center processors on Monday.

Title: Nvidia driver update fixes black screen bug
Published At: 2025-06-22T09:41:00Z
Source: The Verge
Description: None

Title: Nvidia shares hit record as AI spending climbs
Published At: 2025-06-20T20:15:33Z
Source: Bloomberg
Description: Shares of the chipmaker rose for a fourth day.

";
    assert_eq!(report.to_string(), expected);
}

#[tokio::test]
async fn offline_news_fetch_maps_articles() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("news_everything", "Nvidia", "json"));
    });

    let client = common::client_for(&server);
    let articles = nvidia_search(&client).fetch().await.unwrap();
    mock.assert();

    assert_eq!(articles.len(), 3);
    assert_eq!(articles[0].source_name.as_deref(), Some("Reuters"));
    assert_eq!(articles[0].author.as_deref(), Some("Stephen Nellis"));
    assert_eq!(articles[1].description, None);
    assert_eq!(articles[1].author, None);
    assert_eq!(
        articles[2].url.as_deref(),
        Some("https://www.bloomberg.com/news/nvidia-record")
    );
}

#[tokio::test]
async fn offline_news_empty_list_prints_no_results() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("news_everything", "empty", "json"));
    });

    let client = common::client_for(&server);
    let report = nvidia_search(&client).report().await;
    mock.assert();

    assert_eq!(report, NewsReport::Empty);
    assert_eq!(report.to_string(), format!("{NO_RESULTS_MESSAGE}\n"));
}

#[tokio::test]
async fn offline_news_ok_without_articles_field_prints_no_results() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"status":"ok","totalResults":0}"#);
    });

    let client = common::client_for(&server);
    let report = nvidia_search(&client).report().await;
    mock.assert();

    assert_eq!(report, NewsReport::Empty);
}

#[tokio::test]
async fn offline_news_invalid_key_prints_failure() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(401)
            .header("content-type", "application/json")
            .body(common::fixture("news_everything", "apiKeyInvalid", "json"));
    });

    let client = common::client_for(&server);

    let err = nvidia_search(&client).fetch().await.unwrap_err();
    match err {
        MarketError::NewsApi { code, message } => {
            assert_eq!(code, "apiKeyInvalid");
            assert!(message.contains("API key is invalid"));
        }
        other => panic!("expected NewsApi error, got {other:?}"),
    }

    let report = nvidia_search(&client).report().await;
    mock.assert_hits(2);
    assert_eq!(report.to_string(), format!("{FAILURE_MESSAGE}\n"));
}

#[tokio::test]
async fn offline_news_non_ok_status_ignores_payload() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"status":"maintenance","articles":[{"title":"should not print","source":{"name":"x"}}]}"#,
            );
    });

    let client = common::client_for(&server);
    let report = nvidia_search(&client).report().await;
    mock.assert();

    assert_eq!(report, NewsReport::Failed);
    assert_eq!(report.to_string(), format!("{FAILURE_MESSAGE}\n"));
}

#[tokio::test]
async fn offline_news_malformed_body_prints_failure() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200)
            .header("content-type", "application/json")
            .body("{\"status\": \"ok\", \"articles\": [");
    });

    let client = common::client_for(&server);
    let err = nvidia_search(&client).fetch().await.unwrap_err();
    assert!(matches!(err, MarketError::Json(_)), "got {err:?}");

    let report = nvidia_search(&client).report().await;
    mock.assert_hits(2);
    assert_eq!(report, NewsReport::Failed);
}

#[tokio::test]
async fn offline_news_server_error_without_json_is_status_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(502).body("<html>bad gateway</html>");
    });

    let client = common::client_for(&server);
    let err = nvidia_search(&client).fetch().await.unwrap_err();
    mock.assert();

    match err {
        MarketError::Status { status, url } => {
            assert_eq!(status, 502);
            assert!(url.ends_with("/v2/everything"));
            assert!(!url.contains(common::API_KEY));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn offline_news_unreachable_host_prints_failure_without_leaking_key() {
    let client = MarketClient::builder()
        .base_news(Url::parse("http://127.0.0.1:9/").unwrap())
        .news_api_key(common::API_KEY)
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .unwrap();

    let err = nvidia_search(&client).fetch().await.unwrap_err();
    assert!(matches!(err, MarketError::Http(_)), "got {err:?}");
    assert!(!err.to_string().contains(common::API_KEY));

    let report = nvidia_search(&client).report().await;
    assert_eq!(report.to_string(), format!("{FAILURE_MESSAGE}\n"));
}

#[tokio::test]
async fn offline_news_empty_key_is_passed_through() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("apiKey", "");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"status":"error","code":"apiKeyMissing","message":"Your API key is missing."}"#);
    });

    let client = MarketClient::builder()
        .base_news(Url::parse(&format!("{}/", server.base_url())).unwrap())
        .build()
        .unwrap();

    let report = nvidia_search(&client).report().await;
    mock.assert();
    assert_eq!(report, NewsReport::Failed);
}

#[tokio::test]
async fn offline_news_builder_configures_sort_order() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("q", "Tesla")
            .query_param("sortBy", "popularity");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("news_everything", "empty", "json"));
    });

    let client = common::client_for(&server);
    let _ = EverythingBuilder::new(&client, "Tesla")
        .sort_by(SortBy::Popularity)
        .fetch()
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn offline_news_default_search_parameters() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("q", "Nvidia")
            .query_param("from", "2025-05-24")
            .query_param("to", "2025-06-23")
            .query_param("sortBy", "publishedAt")
            .query_param("apiKey", common::API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("news_everything", "Nvidia", "json"));
    });

    let client = common::client_for(&server);
    let from: NaiveDate = DEFAULT_FROM.parse().unwrap();
    let to: NaiveDate = DEFAULT_TO.parse().unwrap();
    let articles = EverythingBuilder::new(&client, DEFAULT_QUERY)
        .from(from)
        .to(to)
        .sort_by(SortBy::default())
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(articles.len(), 3);
}

#[tokio::test]
async fn offline_news_failure_is_logged_once_at_warn() {
    let logs = common::LogCapture::default();
    let _guard = logs.install();

    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(401)
            .header("content-type", "application/json")
            .body(common::fixture("news_everything", "apiKeyInvalid", "json"));
    });

    let client = common::client_for(&server);
    let report = nvidia_search(&client).report().await;
    mock.assert();
    assert_eq!(report, NewsReport::Failed);

    let out = logs.contents();
    assert_eq!(out.matches("WARN").count(), 1, "logs: {out}");
    assert!(out.contains("news fetch failed"), "logs: {out}");
    assert!(out.contains("apiKeyInvalid"), "logs: {out}");
    assert!(!out.contains("ERROR"), "logs: {out}");
    assert!(!out.contains(common::API_KEY), "logs: {out}");
}
