mod assemble;
mod fetch;
mod model;
mod wire;

pub use model::{PricePoint, PriceSeries};

use chrono::{DateTime, Utc};

use crate::{MarketClient, MarketError};

/// A relative window understood by the chart endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Range {
    /// One month.
    M1,
    /// Three months.
    M3,
    /// Six months.
    M6,
    /// Since January 1st of the current year.
    Ytd,
    /// One year.
    Y1,
    /// Five years.
    Y5,
    /// Full available history.
    Max,
}

impl Range {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::M1 => "1mo",
            Self::M3 => "3mo",
            Self::M6 => "6mo",
            Self::Ytd => "ytd",
            Self::Y1 => "1y",
            Self::Y5 => "5y",
            Self::Max => "max",
        }
    }
}

/// Bar size. Gains are computed from daily bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    /// Daily.
    D1,
    /// Weekly.
    W1,
    /// Monthly.
    M1,
}

impl Interval {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::D1 => "1d",
            Self::W1 => "1wk",
            Self::M1 => "1mo",
        }
    }
}

/// A builder for fetching the closing-price history of one symbol.
pub struct HistoryBuilder {
    client: MarketClient,
    symbol: String,
    range: Option<Range>,
    period: Option<(i64, i64)>,
    interval: Interval,
    include_prepost: bool,
}

impl HistoryBuilder {
    /// Creates a new builder for `symbol`. Defaults: year-to-date range, daily bars.
    pub fn new(client: &MarketClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            range: Some(Range::Ytd),
            period: None,
            interval: Interval::D1,
            include_prepost: false,
        }
    }

    /// Sets a relative time range for the request, replacing any absolute period.
    #[must_use]
    pub const fn range(mut self, range: Range) -> Self {
        self.period = None;
        self.range = Some(range);
        self
    }

    /// Sets an absolute period. `end` is exclusive.
    #[must_use]
    pub const fn between(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.range = None;
        self.period = Some((start.timestamp(), end.timestamp()));
        self
    }

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

    /// Fetches the series. Bars with a null close are dropped; an empty series is not an error here.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidDates`] when the period is empty or reversed,
    /// [`MarketError::Status`] on a non-2xx answer and [`MarketError::Data`] when the
    /// payload is malformed or carries a provider error.
    #[tracing::instrument(skip(self), err(level = "debug"), fields(symbol = %self.symbol))]
    pub async fn fetch(self) -> Result<PriceSeries, MarketError> {
        let fetched = fetch::fetch_chart(
            &self.client,
            &self.symbol,
            self.range,
            self.period,
            self.interval,
            self.include_prepost,
        )
        .await?;

        let points = assemble::assemble_closes(&fetched.ts, &fetched.quote, fetched.meta.as_ref());
        if points.len() < fetched.ts.len() {
            tracing::debug!(
                dropped = fetched.ts.len() - points.len(),
                "bars without a close skipped"
            );
        }

        let (currency, timezone) = fetched
            .meta
            .map(|m| (m.currency, m.exchange_timezone_name))
            .unwrap_or_default();

        Ok(PriceSeries {
            symbol: self.symbol,
            currency,
            timezone,
            points,
        })
    }
}
