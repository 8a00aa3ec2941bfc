use std::env;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use thiserror::Error;

use crate::domain::pull_request::PullRecord;
use crate::domain::repository::RepositoryRef;

const DEFAULT_API_BASE: &str = "https://api.github.com";
const PAGE_SIZE: usize = 100;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum GithubApiError {
    #[error("repository not found")]
    RepositoryNotFound,
    #[error("GitHub API rate limit exceeded{}", reset_suffix(.reset))]
    RateLimitExceeded { reset: Option<DateTime<Utc>> },
    #[error("unexpected response from GitHub API: HTTP {0}")]
    Status(StatusCode),
    #[error("failed to reach GitHub API: {0}")]
    Transport(#[from] reqwest::Error),
}

fn reset_suffix(reset: &Option<DateTime<Utc>>) -> String {
    match reset {
        Some(at) => format!(", resets at {}", at.format("%Y-%m-%d %H:%M:%S UTC")),
        None => String::new(),
    }
}

/// Environment-derived client settings.
///
/// All environment access happens here; the client itself is handed its
/// configuration explicitly.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub token: Option<String>,
    pub base_url: String,
}

impl ApiConfig {
    /// Reads `GITHUB_TOKEN` (optional bearer credential) and
    /// `GITHUB_API_URL` (base URL override, mainly for tests).
    pub fn from_env() -> Self {
        let token = env::var("GITHUB_TOKEN").ok().filter(|token| !token.is_empty());
        let base_url =
            env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self { token, base_url }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

pub struct GithubApiClient {
    repo: RepositoryRef,
    config: ApiConfig,
    client: Client,
}

impl GithubApiClient {
    pub fn new(repo: RepositoryRef, config: ApiConfig) -> Result<Self, GithubApiError> {
        let client = Client::builder()
            .user_agent(concat!("merge-analytics/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            repo,
            config,
            client,
        })
    }

    /// Fetches closed pull requests, newest-updated first, page by page.
    ///
    /// Pagination stops once a page is short, empty, or only contains
    /// pull requests last updated before `cutoff`. The cutoff bounds how
    /// far back pagination walks; callers still filter every record by
    /// its actual merge timestamp.
    pub fn fetch_closed_pulls(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<PullRecord>, GithubApiError> {
        let url = format!(
            "{}/repos/{}/{}/pulls",
            self.config.base_url, self.repo.owner, self.repo.name
        );

        let mut pulls = Vec::new();
        let mut page = 1u32;

        loop {
            let response = self.get_page(&url, page)?;
            let batch: Vec<PullRecord> = response.json()?;
            if batch.is_empty() {
                break;
            }

            let short_page = batch.len() < PAGE_SIZE;
            // Pages are sorted by update time descending, so once the
            // oldest entry of a page predates the cutoff, later pages do too.
            let past_cutoff = batch
                .last()
                .and_then(|pull| pull.updated_at)
                .is_some_and(|updated| updated < cutoff);
            pulls.extend(batch);

            if short_page || past_cutoff {
                break;
            }
            page += 1;
        }

        Ok(pulls)
    }

    fn get_page(&self, url: &str, page: u32) -> Result<Response, GithubApiError> {
        let per_page = PAGE_SIZE.to_string();
        let page = page.to_string();
        let mut request = self.client.get(url).query(&[
            ("state", "closed"),
            ("sort", "updated"),
            ("direction", "desc"),
            ("per_page", per_page.as_str()),
            ("page", page.as_str()),
        ]);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        check_status(response)
    }
}

fn check_status(response: Response) -> Result<Response, GithubApiError> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(GithubApiError::RepositoryNotFound);
    }
    if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
        if rate_limit_exhausted(&response) {
            return Err(GithubApiError::RateLimitExceeded {
                reset: rate_limit_reset(&response),
            });
        }
        return Err(GithubApiError::Status(status));
    }
    if !status.is_success() {
        return Err(GithubApiError::Status(status));
    }
    Ok(response)
}

fn rate_limit_exhausted(response: &Response) -> bool {
    header_value(response, "x-ratelimit-remaining").as_deref() == Some("0")
}

fn rate_limit_reset(response: &Response) -> Option<DateTime<Utc>> {
    let epoch: i64 = header_value(response, "x-ratelimit-reset")?.parse().ok()?;
    DateTime::from_timestamp(epoch, 0)
}

fn header_value(response: &Response, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)?
        .to_str()
        .ok()
        .map(str::to_string)
}
