use crate::domain::merge_counts::DailyMerges;
use crate::domain::summary::MergeSummary;

/// Total, per-day average and peak of a day series.
///
/// The aggregator never produces an empty series, but an empty input
/// still yields all zeroes rather than dividing by zero. No rounding is
/// applied here; formatting is up to the presentation layer.
pub fn summarize(counts: &[DailyMerges]) -> MergeSummary {
    let total: usize = counts.iter().map(|day| day.merges).sum();
    let peak = counts.iter().map(|day| day.merges).max().unwrap_or(0);
    let average = if counts.is_empty() {
        0.0
    } else {
        total as f64 / counts.len() as f64
    };

    MergeSummary {
        total,
        average,
        peak,
    }
}
