use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use thiserror::Error;

use crate::domain::merge_counts::DailyMerges;
use crate::domain::pull_request::{PullRecord, PullState};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AggregationError {
    #[error("the analysis window must cover at least one day")]
    InvalidWindow,
}

/// First calendar date of a window of `days` UTC days ending at `now`'s date.
pub fn window_start(now: DateTime<Utc>, days: i64) -> Result<NaiveDate, AggregationError> {
    if days <= 0 {
        return Err(AggregationError::InvalidWindow);
    }
    Ok(now.date_naive() - Duration::days(days - 1))
}

/// Buckets merged pull requests into one count per UTC calendar day.
///
/// The window covers the `days` consecutive UTC dates ending at `now`'s
/// date. As instants it is half-open: merges from the first date's
/// midnight (inclusive) up to `now` (exclusive) count. The result always
/// has exactly `days` entries in ascending date order; dates without
/// merges stay at zero. Pull requests outside the window, still open, or
/// closed without merging are skipped, never an error.
pub fn count_merges_per_day(
    pulls: &[PullRecord],
    days: i64,
    now: DateTime<Utc>,
) -> Result<Vec<DailyMerges>, AggregationError> {
    let start_date = window_start(now, days)?;
    let mut buckets: Vec<DailyMerges> = (0..days)
        .map(|offset| DailyMerges {
            date: start_date + Duration::days(offset),
            merges: 0,
        })
        .collect();

    let window_opens = start_date.and_time(NaiveTime::MIN).and_utc();

    for pull in pulls {
        if pull.state != PullState::Closed {
            continue;
        }
        let Some(merged_at) = pull.merged_at else {
            continue;
        };
        if merged_at < window_opens || merged_at >= now {
            continue;
        }

        let offset = (merged_at.date_naive() - start_date).num_days();
        if let Some(bucket) = buckets.get_mut(offset as usize) {
            bucket.merges += 1;
        }
    }

    Ok(buckets)
}
