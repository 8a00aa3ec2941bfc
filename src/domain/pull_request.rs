use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PullState {
    Open,
    Closed,
}

/// The subset of the GitHub pull request payload this tool reads.
///
/// `merged_at` is absent for closed-but-unmerged pull requests.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRecord {
    pub number: u64,
    pub state: PullState,
    pub merged_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_pull_request_subset() {
        let payload = serde_json::json!({
            "number": 42,
            "state": "closed",
            "title": "Ignored by this tool",
            "merged_at": "2026-08-20T14:30:00Z",
            "updated_at": "2026-08-20T14:31:00Z"
        });

        let pull: PullRecord = serde_json::from_value(payload).unwrap();
        assert_eq!(pull.number, 42);
        assert_eq!(pull.state, PullState::Closed);
        assert_eq!(
            pull.merged_at.unwrap().to_rfc3339(),
            "2026-08-20T14:30:00+00:00"
        );
        assert!(pull.updated_at.is_some());
    }

    #[test]
    fn closed_but_unmerged_pull_has_no_merge_timestamp() {
        let payload = serde_json::json!({
            "number": 7,
            "state": "closed",
            "merged_at": null,
            "updated_at": "2026-08-19T09:00:00Z"
        });

        let pull: PullRecord = serde_json::from_value(payload).unwrap();
        assert!(pull.merged_at.is_none());
    }
}
