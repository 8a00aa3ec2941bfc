pub mod aggregation;
pub mod github_api;
pub mod merge_plot;
pub mod statistics;
