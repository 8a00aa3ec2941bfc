use chrono::{Duration, Utc};
use thiserror::Error;

use crate::domain::repository::{RepositoryRef, RepositoryRefError};
use crate::services::aggregation::{self, AggregationError};
use crate::services::github_api::{ApiConfig, GithubApiClient, GithubApiError};
use crate::services::merge_plot::{self, MergePlotError};
use crate::services::statistics;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    Repository(#[from] RepositoryRefError),
    #[error(transparent)]
    Api(#[from] GithubApiError),
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
    #[error(transparent)]
    Plot(#[from] MergePlotError),
}

/// Runs the whole pipeline: parse the reference, fetch closed pull
/// requests, bucket merges per day, print the summary and render the
/// chart. Any failure aborts the run before rendering.
pub fn run_analysis(reference: &str, days: i64, output: &str) -> Result<(), AnalysisError> {
    let repo = RepositoryRef::parse(reference)?;
    println!("Analyzing repository: {}", repo.full_name());

    let config = ApiConfig::from_env();
    if config.has_token() {
        println!("Using GitHub token authentication (5000 requests/hour limit)");
    } else {
        println!("No GitHub token found - using unauthenticated requests (60 requests/hour limit)");
    }

    let now = Utc::now();
    let start_date = aggregation::window_start(now, days)?;
    println!(
        "Fetching merge data from {} to present...",
        start_date.format("%Y-%m-%d")
    );

    let client = GithubApiClient::new(repo.clone(), config)?;
    let pulls = client.fetch_closed_pulls(now - Duration::days(days))?;

    let counts = aggregation::count_merges_per_day(&pulls, days, now)?;
    let summary = statistics::summarize(&counts);
    println!(
        "Found {} merged pull requests in the specified period.",
        summary.total
    );
    if summary.total == 0 {
        println!("No merges in the window; rendering an all-zero series.");
    }

    println!();
    for day in &counts {
        println!("{}  {}", day.date.format("%Y-%m-%d"), day.merges);
    }
    println!();
    println!(
        "Total: {} | Avg: {:.1}/day | Peak: {}",
        summary.total, summary.average, summary.peak
    );

    merge_plot::write_merge_plot_png(output, &repo.full_name(), &counts)?;
    println!("Merge chart written to {output}");
    Ok(())
}
