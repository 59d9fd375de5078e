//! marketbrief: two small market utilities on a shared async client.
//!
//! - [`news`]: fetch articles from the NewsAPI `everything` endpoint and render a plain-text report.
//! - [`history`] + [`download`]: daily closing prices from the Yahoo Finance chart endpoint.
//! - [`gains`] + [`chart`]: year-to-date percentage gains rendered as a PNG bar chart.
//!
//! ```no_run
//! use marketbrief::{DownloadBuilder, GainTable, MarketClient};
//! use chrono::{TimeZone, Utc};
//!
//! # async fn run() -> Result<(), marketbrief::MarketError> {
//! let client = MarketClient::builder().build()?;
//! let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2025, 6, 27, 0, 0, 0).unwrap();
//!
//! let result = DownloadBuilder::new(&client)
//!     .symbols(["NVDA", "TSLA"])
//!     .between(start, end)
//!     .run()
//!     .await?;
//!
//! let table = GainTable::from_download(&result)?;
//! for (symbol, gain) in table.iter() {
//!     println!("{symbol}: {gain:.2}%");
//! }
//! # Ok(())
//! # }
//! ```

/// Shared client, error type, configuration and networking helpers.
pub mod core;

/// Bar chart rendering for gain tables.
pub mod chart;
/// Fetch several tickers over one date range.
pub mod download;
/// Percentage gain computation.
pub mod gains;
/// Daily price history from the chart endpoint.
pub mod history;
/// NewsAPI article search.
pub mod news;

pub use chart::{ChartSpec, DEFAULT_CHART_FILE};
pub use crate::core::{MarketClient, MarketClientBuilder, MarketError, NewsConfig};
pub use download::{DownloadBuilder, DownloadResult};
pub use gains::{GainTable, percent_gain};
pub use history::{HistoryBuilder, Interval, PricePoint, PriceSeries, Range};
pub use news::{Article, EverythingBuilder, NewsReport, SortBy};
