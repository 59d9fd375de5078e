use crate::core::{MarketClient, MarketError, net};
use crate::history::wire::{ChartEnvelope, MetaNode, QuoteBlock};
use crate::history::{Interval, Range};

pub(crate) struct Fetched {
    pub ts: Vec<i64>,
    pub quote: QuoteBlock,
    pub meta: Option<MetaNode>,
}

pub(crate) async fn fetch_chart(
    client: &MarketClient,
    symbol: &str,
    range: Option<Range>,
    period: Option<(i64, i64)>,
    interval: Interval,
    include_prepost: bool,
) -> Result<Fetched, MarketError> {
    let mut url = client.base_chart().join(symbol)?;
    {
        let mut qp = url.query_pairs_mut();

        if let Some((p1, p2)) = period {
            if p1 >= p2 {
                return Err(MarketError::InvalidDates);
            }
            qp.append_pair("period1", &p1.to_string());
            qp.append_pair("period2", &p2.to_string());
        } else if let Some(r) = range {
            qp.append_pair("range", r.as_str());
        } else {
            return Err(MarketError::InvalidParams("no range or period set".into()));
        }

        qp.append_pair("interval", interval.as_str());
        qp.append_pair(
            "includePrePost",
            if include_prepost { "true" } else { "false" },
        );
    }

    tracing::debug!(%url, "requesting chart");

    let resp = client.http().get(url.clone()).send().await?;
    if !resp.status().is_success() {
        return Err(MarketError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = net::get_text(resp, "history_chart", symbol, "json").await?;
    decode_chart(&body)
}

fn decode_chart(body: &str) -> Result<Fetched, MarketError> {
    let parsed: ChartEnvelope = serde_json::from_str(body)
        .map_err(|e| MarketError::Data(format!("json parse error: {e}")))?;

    let chart = parsed
        .chart
        .ok_or_else(|| MarketError::Data("missing chart".into()))?;

    if let Some(err) = chart.error {
        return Err(MarketError::Data(format!(
            "yahoo error: {} - {}",
            err.code, err.description
        )));
    }

    let mut results = chart
        .result
        .ok_or_else(|| MarketError::Data("missing result".into()))?;

    let r0 = results
        .pop()
        .ok_or_else(|| MarketError::Data("empty result".into()))?;

    // A range with no trading days comes back without `timestamp` and with an empty quote block.
    let ts = r0.timestamp.unwrap_or_default();
    let quote = r0
        .indicators
        .quote
        .into_iter()
        .next()
        .unwrap_or(QuoteBlock { close: Vec::new() });

    Ok(Fetched {
        ts,
        quote,
        meta: r0.meta,
    })
}
