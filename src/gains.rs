use crate::MarketError;
use crate::download::DownloadResult;
use crate::history::PriceSeries;

/// Percentage change from the first to the last close of `series`:
/// `(last - first) / first * 100`.
///
/// # Errors
///
/// Returns [`MarketError::EmptySeries`] when the series has no closes, and
/// [`MarketError::Data`] when the first close is zero (the ratio is undefined).
pub fn percent_gain(series: &PriceSeries) -> Result<f64, MarketError> {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return Err(MarketError::EmptySeries {
            symbol: series.symbol.clone(),
        });
    };
    if first.close == 0.0 {
        return Err(MarketError::Data(format!(
            "first close of {} is zero; gain undefined",
            series.symbol
        )));
    }
    Ok((last.close - first.close) / first.close * 100.0)
}

/// Gain per ticker, in the order the tickers were requested.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GainTable {
    rows: Vec<(String, f64)>,
}

impl GainTable {
    /// Computes the gain of every downloaded series.
    ///
    /// # Errors
    ///
    /// Fails on the first series for which [`percent_gain`] fails.
    pub fn from_download(result: &DownloadResult) -> Result<Self, MarketError> {
        Self::from_series(result.iter())
    }

    /// Computes the gain of each series, keeping iteration order.
    ///
    /// # Errors
    ///
    /// Fails on the first series for which [`percent_gain`] fails.
    pub fn from_series<'a, I>(series: I) -> Result<Self, MarketError>
    where
        I: IntoIterator<Item = &'a PriceSeries>,
    {
        let rows = series
            .into_iter()
            .map(|s| {
                let gain = percent_gain(s)?;
                tracing::debug!(
                    symbol = %s.symbol,
                    first = ?s.first().map(|p| p.date),
                    last = ?s.last().map(|p| p.date),
                    gain,
                    "gain computed"
                );
                Ok((s.symbol.clone(), gain))
            })
            .collect::<Result<Vec<_>, MarketError>>()?;
        Ok(Self { rows })
    }

    /// Builds a table from precomputed rows.
    pub fn from_rows(rows: Vec<(String, f64)>) -> Self {
        Self { rows }
    }

    /// Gain of `symbol`, if present.
    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.rows
            .iter()
            .find_map(|(s, g)| (s == symbol).then_some(*g))
    }

    /// `(symbol, gain)` rows in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rows.iter().map(|(s, g)| (s.as_str(), *g))
    }

    /// Symbols in order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|(s, _)| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
