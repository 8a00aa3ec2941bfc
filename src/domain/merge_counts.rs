use chrono::NaiveDate;

/// Merge count for one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyMerges {
    pub date: NaiveDate,
    pub merges: usize,
}
