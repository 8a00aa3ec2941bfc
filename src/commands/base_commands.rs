use clap::Parser;
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// GitHub repository: https://github.com/owner/repo, git@github.com:owner/repo.git or owner/repo
    #[arg(short, long, required_unless_present = "completions")]
    pub repo: Option<String>,
    /// Number of trailing days to analyze
    #[arg(short, long, default_value_t = 30, value_parser = clap::value_parser!(i64).range(1..))]
    pub days: i64,
    /// Output PNG file for the merge chart
    #[arg(short, long, default_value = "merge_counts.png")]
    pub output: String,
    /// Print a shell completion script and exit
    #[arg(long, value_enum)]
    pub completions: Option<Shell>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_defaults_to_thirty() {
        let args = CliArgs::parse_from(["merge-analytics", "--repo", "a/b"]);
        assert_eq!(args.repo.as_deref(), Some("a/b"));
        assert_eq!(args.days, 30);
        assert_eq!(args.output, "merge_counts.png");
    }

    #[test]
    fn repo_is_required_without_completions() {
        let result = CliArgs::try_parse_from(["merge-analytics"]);
        assert!(result.is_err());
    }

    #[test]
    fn completions_can_be_requested_without_a_repo() {
        let args = CliArgs::parse_from(["merge-analytics", "--completions", "bash"]);
        assert!(args.repo.is_none());
        assert!(args.completions.is_some());
    }

    #[test]
    fn non_positive_days_are_rejected() {
        for days in ["0", "-5"] {
            let result =
                CliArgs::try_parse_from(["merge-analytics", "--repo", "a/b", "--days", days]);
            assert!(result.is_err(), "expected --days {days} to be rejected");
        }
    }
}
