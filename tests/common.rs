#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use marketbrief::MarketClient;
use marketbrief::core::logging::DEFAULT_FILTER;
use serde_json::json;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::{fs, path::Path};
use tracing_subscriber::EnvFilter;
use url::Url;

pub const API_KEY: &str = "test-key";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{endpoint}_{key}.{ext}");
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// Client with both bases pointed at `server`.
pub fn client_for(server: &MockServer) -> MarketClient {
    MarketClient::builder()
        .base_chart(Url::parse(&format!("{}/v8/finance/chart/", server.base_url())).unwrap())
        .base_news(Url::parse(&format!("{}/", server.base_url())).unwrap())
        .news_api_key(API_KEY)
        .build()
        .unwrap()
}

pub fn mock_history_chart<'a>(server: &'a MockServer, symbol: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(format!("/v8/finance/chart/{symbol}"));
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("history_chart", symbol, "json"));
    })
}

/// Minimal chart payload with one daily bar per close, starting 2025-01-02 14:30 UTC.
pub fn chart_body(closes: &[Option<f64>]) -> String {
    let ts: Vec<i64> = (0..closes.len() as i64)
        .map(|i| 1_735_828_200 + i * 86_400)
        .collect();
    json!({
        "chart": {
            "result": [{
                "meta": {"currency": "USD", "exchangeTimezoneName": "America/New_York", "gmtoffset": -18000},
                "timestamp": ts,
                "indicators": {"quote": [{"close": closes}]}
            }],
            "error": null
        }
    })
    .to_string()
}

/// What the chart endpoint sends for a window without trading days.
pub fn empty_chart_body() -> String {
    json!({
        "chart": {
            "result": [{
                "meta": {"currency": "USD", "exchangeTimezoneName": "America/New_York"},
                "indicators": {"quote": [{}]}
            }],
            "error": null
        }
    })
    .to_string()
}

pub fn mock_chart_body<'a>(server: &'a MockServer, symbol: &'a str, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(format!("/v8/finance/chart/{symbol}"));
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn live_enabled() -> bool {
    std::env::var("MARKETBRIEF_LIVE").ok().as_deref() == Some("1")
}

/// In-memory log sink filtered at the binaries' default level.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl LogCapture {
    /// Routes events on the current thread here until the guard drops.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let sink = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(DEFAULT_FILTER))
            .with_ansi(false)
            .with_writer(move || sink.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}
