/// Aggregate statistics over a day series.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeSummary {
    pub total: usize,
    pub average: f64,
    pub peak: usize,
}
