use clap::ValueEnum;
use console::style;
use serde::Serialize;
use starsearch::{RepoListing, SearchOutcome, User};

/// Output format for search results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Display as a formatted table (default)
    #[default]
    Table,
    /// Display as JSON
    Json,
}

/// One repository row.
#[derive(Debug, Clone, Serialize, tabled::Tabled)]
pub(crate) struct RepoRow {
    #[tabled(rename = "Repository")]
    pub name: String,
    #[tabled(rename = "Stars")]
    pub stars: u32,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "URL")]
    pub url: String,
}

impl From<&RepoListing> for RepoRow {
    fn from(repo: &RepoListing) -> Self {
        Self {
            name: repo.name.clone(),
            stars: repo.stars,
            description: repo.description.clone().unwrap_or_default(),
            url: repo.html_url.clone(),
        }
    }
}

/// One organization row.
#[derive(Debug, Clone, Serialize, tabled::Tabled)]
pub(crate) struct OrgRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    #[tabled(rename = "Organization")]
    pub login: String,
    #[tabled(rename = "Profile")]
    pub url: String,
}

impl OrgRow {
    pub(crate) fn from_users(users: &[User]) -> Vec<Self> {
        users
            .iter()
            .enumerate()
            .map(|(i, user)| Self {
                rank: i + 1,
                login: user.login.clone(),
                url: format!("https://github.com/{}", user.login),
            })
            .collect()
    }
}

/// Search outcome for one organization, as emitted in JSON mode.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct OrgReport {
    pub org: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub repositories: Vec<RepoRow>,
}

impl OrgReport {
    pub(crate) fn new(org: &str, outcome: &SearchOutcome<RepoListing>) -> Self {
        Self {
            org: org.to_string(),
            status: status_name(outcome),
            message: outcome.detail(),
            repositories: outcome
                .results()
                .unwrap_or_default()
                .iter()
                .map(RepoRow::from)
                .collect(),
        }
    }
}

/// Stable machine-readable name of an outcome variant.
pub(crate) fn status_name<T>(outcome: &SearchOutcome<T>) -> &'static str {
    match outcome {
        SearchOutcome::Results(_) => "results",
        SearchOutcome::Empty => "empty",
        SearchOutcome::RateLimited => "rate_limited",
        SearchOutcome::TransportFailure(_) => "transport_failure",
        SearchOutcome::DecodeFailure(_) => "decode_failure",
    }
}

/// Render the placeholder shown instead of results, if any.
pub(crate) fn placeholder_line<T>(outcome: &SearchOutcome<T>) -> Option<String> {
    let headline = outcome.headline()?;
    let detail = outcome.detail().unwrap_or_default();
    let headline = if outcome.is_failure() {
        style(headline).red().bold()
    } else {
        style(headline).yellow().bold()
    };
    Some(format!("{headline}: {detail}"))
}

pub(crate) fn print_table<T: tabled::Tabled>(rows: Vec<T>) {
    let mut table = tabled::Table::new(rows);
    table.with(tabled::settings::Style::rounded());
    println!("{table}");
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use starsearch::github::AccountKind;

    fn repo(name: &str, stars: u32) -> RepoListing {
        RepoListing {
            name: name.to_string(),
            description: None,
            stars,
            html_url: format!("https://github.com/acme/{name}"),
            owner: User {
                login: "acme".to_string(),
                kind: AccountKind::Organization,
            },
        }
    }

    #[test]
    fn output_format_default_is_table() {
        assert!(matches!(OutputFormat::default(), OutputFormat::Table));
    }

    #[test]
    fn repo_row_flattens_missing_description() {
        let row = RepoRow::from(&repo("widgets", 42));
        assert_eq!(row.name, "widgets");
        assert_eq!(row.stars, 42);
        assert_eq!(row.description, "");
        assert_eq!(row.url, "https://github.com/acme/widgets");
    }

    #[test]
    fn org_rows_are_ranked_from_one() {
        let users = vec![
            User {
                login: "rust-lang".to_string(),
                kind: AccountKind::Organization,
            },
            User {
                login: "tokio-rs".to_string(),
                kind: AccountKind::Organization,
            },
        ];
        let rows = OrgRow::from_users(&users);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[1].login, "tokio-rs");
        assert_eq!(rows[1].url, "https://github.com/tokio-rs");
    }

    #[test]
    fn org_report_serializes_status_and_rows() {
        let outcome = SearchOutcome::Results(vec![repo("a", 2), repo("b", 1)]);
        let report = OrgReport::new("acme", &outcome);
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["org"], "acme");
        assert_eq!(json["status"], "results");
        assert!(json.get("message").is_none());
        assert_eq!(json["repositories"].as_array().map(Vec::len), Some(2));

        let limited: SearchOutcome<RepoListing> = SearchOutcome::RateLimited;
        let json = serde_json::to_value(OrgReport::new("acme", &limited)).expect("serialize");
        assert_eq!(json["status"], "rate_limited");
        assert!(json["message"].is_string());
    }

    #[test]
    fn placeholder_line_only_for_non_results() {
        let results = SearchOutcome::Results(vec![1]);
        assert!(placeholder_line(&results).is_none());

        let empty: SearchOutcome<u8> = SearchOutcome::Empty;
        let line = placeholder_line(&empty).expect("placeholder");
        assert!(line.contains("No Public Results"));
    }

    #[test]
    fn print_helpers_support_json_and_table() {
        // Smoke tests: these should not panic.
        print_table(vec![RepoRow::from(&repo("a", 1))]);
        print_json(&[RepoRow::from(&repo("a", 1))]).expect("json output");
    }
}
