use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::Serialize;

/// One trading day's closing price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    /// Unix timestamp (seconds) of the bar as sent by the provider.
    pub ts: i64,
    /// Trading day in the exchange's timezone.
    pub date: NaiveDate,
    /// Unadjusted closing price.
    pub close: f64,
}

impl PricePoint {
    /// The bar timestamp as a UTC datetime, if it is in range.
    pub fn datetime_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.ts, 0).single()
    }
}

/// Ordered daily closes for one ticker, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    /// Ticker as requested.
    pub symbol: String,
    /// Quote currency reported by the provider, if any.
    pub currency: Option<String>,
    /// IANA timezone of the listing exchange, if reported.
    pub timezone: Option<String>,
    /// Bars with a close, oldest first.
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    /// `true` when the provider returned no usable close.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Oldest close.
    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    /// Most recent close.
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }
}
