pub mod merge_counts;
pub mod pull_request;
pub mod repository;
pub mod summary;
