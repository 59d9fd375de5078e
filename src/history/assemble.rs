use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::history::model::PricePoint;
use crate::history::wire::{MetaNode, QuoteBlock};

/// How bar timestamps map to trading days.
enum DayClock {
    Named(Tz),
    Offset(FixedOffset),
    Utc,
}

impl DayClock {
    fn from_meta(meta: Option<&MetaNode>) -> Self {
        let Some(m) = meta else {
            return Self::Utc;
        };
        if let Some(tz) = m
            .exchange_timezone_name
            .as_deref()
            .and_then(|name| name.parse::<Tz>().ok())
        {
            return Self::Named(tz);
        }
        m.gmtoffset
            .and_then(|secs| i32::try_from(secs).ok())
            .and_then(FixedOffset::east_opt)
            .map_or(Self::Utc, Self::Offset)
    }

    fn date_of(&self, ts: i64) -> Option<NaiveDate> {
        let utc = Utc.timestamp_opt(ts, 0).single()?;
        Some(match self {
            Self::Named(tz) => utc.with_timezone(tz).date_naive(),
            Self::Offset(off) => utc.with_timezone(off).date_naive(),
            Self::Utc => utc.date_naive(),
        })
    }
}

/// Pairs timestamps with closes, dropping bars whose close is null or not finite.
pub(crate) fn assemble_closes(
    ts: &[i64],
    q: &QuoteBlock,
    meta: Option<&MetaNode>,
) -> Vec<PricePoint> {
    let clock = DayClock::from_meta(meta);

    ts.iter()
        .enumerate()
        .filter_map(|(i, &t)| {
            let close = q.close.get(i).copied().flatten()?;
            if !close.is_finite() {
                return None;
            }
            let date = clock.date_of(t)?;
            Some(PricePoint { ts: t, date, close })
        })
        .collect()
}
