use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use futures::future::try_join_all;

use crate::history::{HistoryBuilder, Interval, PriceSeries, Range};
use crate::{MarketClient, MarketError};

/// Tickers compared by the gains plotter when none are given.
pub const DEFAULT_SYMBOLS: [&str; 2] = ["NVDA", "TSLA"];
/// First day of the default window (`YYYY-MM-DD`).
pub const DEFAULT_START: &str = "2025-01-01";
/// Day after the last day of the default window (`YYYY-MM-DD`, exclusive).
pub const DEFAULT_END: &str = "2025-06-27";

/// Midnight UTC at the start of `date`, the instant sent as a period bound.
pub fn utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// A builder for downloading daily closes for several symbols over the same window.
///
/// One chart request is issued per symbol; the requests run concurrently and the
/// first failure aborts the whole download.
pub struct DownloadBuilder {
    client: MarketClient,
    symbols: Vec<String>,

    range: Option<Range>,
    period: Option<(i64, i64)>,
    interval: Interval,
    include_prepost: bool,
}

/// Series for every requested symbol, in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadResult {
    pub series: Vec<PriceSeries>,
}

impl DownloadResult {
    /// The series for `symbol`, if it was requested.
    pub fn get(&self, symbol: &str) -> Option<&PriceSeries> {
        self.series.iter().find(|s| s.symbol == symbol)
    }

    /// Symbols in request order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.symbol.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PriceSeries> {
        self.series.iter()
    }
}

impl DownloadBuilder {
    /// Creates a new `DownloadBuilder` with no symbols, a year-to-date range and daily bars.
    #[must_use]
    pub fn new(client: &MarketClient) -> Self {
        Self {
            client: client.clone(),
            symbols: Vec::new(),
            range: Some(Range::Ytd),
            period: None,
            interval: Interval::D1,
            include_prepost: false,
        }
    }

    /// Replaces the current list of symbols with a new list.
    #[must_use]
    pub fn symbols<I, S>(mut self, syms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = syms.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a single symbol to the list of symbols to download.
    #[must_use]
    pub fn add_symbol(mut self, sym: impl Into<String>) -> Self {
        self.symbols.push(sym.into());
        self
    }

    /// Sets a relative time range for the request (e.g., `ytd`, `6mo`).
    #[must_use]
    pub const fn range(mut self, range: Range) -> Self {
        self.period = None;
        self.range = Some(range);
        self
    }

    /// Sets an absolute period. `end` is exclusive.
    #[must_use]
    pub const fn between(
        mut self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        self.range = None;
        self.period = Some((start.timestamp(), end.timestamp()));
        self
    }

    /// Sets the bar size. (Default: daily)
    #[must_use]
    pub const fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Include pre/post-market bars for intraday intervals. (Default: `false`)
    #[must_use]
    pub const fn prepost(mut self, yes: bool) -> Self {
        self.include_prepost = yes;
        self
    }

    fn history_for_symbol(&self, sym: &str) -> Result<HistoryBuilder, MarketError> {
        let hb = HistoryBuilder::new(&self.client, sym)
            .interval(self.interval)
            .prepost(self.include_prepost);

        if let Some((p1, p2)) = self.period {
            use chrono::TimeZone;
            let start = Utc
                .timestamp_opt(p1, 0)
                .single()
                .ok_or_else(|| MarketError::InvalidParams("invalid period1".into()))?;
            let end = Utc
                .timestamp_opt(p2, 0)
                .single()
                .ok_or_else(|| MarketError::InvalidParams("invalid period2".into()))?;
            Ok(hb.between(start, end))
        } else {
            Ok(hb.range(self.range.unwrap_or(Range::Ytd)))
        }
    }

    /// Executes the download by fetching data for all specified symbols concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidParams`] when no symbols are set, otherwise the first
    /// error of any underlying history request.
    #[tracing::instrument(skip(self), err(level = "debug"), fields(symbols = ?self.symbols))]
    pub async fn run(self) -> Result<DownloadResult, MarketError> {
        if self.symbols.is_empty() {
            return Err(MarketError::InvalidParams("no symbols specified".into()));
        }

        let mut unique: Vec<&str> = Vec::with_capacity(self.symbols.len());
        for s in &self.symbols {
            if !unique.contains(&s.as_str()) {
                unique.push(s);
            }
        }

        let builders = unique
            .iter()
            .map(|sym| self.history_for_symbol(sym))
            .collect::<Result<Vec<_>, _>>()?;

        let series = try_join_all(builders.into_iter().map(HistoryBuilder::fetch)).await?;
        tracing::info!(count = series.len(), "download complete");

        Ok(DownloadResult { series })
    }
}
