use starsearch::{GitHubSearchClient, SearchOutcome};

use super::CommandStatus;
use super::output::{OrgRow, OutputFormat, placeholder_line, print_json, print_table, status_name};
use crate::progress::Spinner;

/// Handle `starsearch orgs`.
pub(crate) async fn handle_orgs(
    client: &GitHubSearchClient,
    count: u32,
    output: OutputFormat,
) -> Result<CommandStatus, Box<dyn std::error::Error>> {
    let spinner = Spinner::start("Finding organizations behind popular repositories...");
    let outcome = client.top_organizations(count).await;
    spinner.finish();

    tracing::info!(
        count,
        found = outcome.len(),
        status = status_name(&outcome),
        "Organization search finished"
    );

    match (&outcome, output) {
        (SearchOutcome::Results(users), OutputFormat::Table) => {
            print_table(OrgRow::from_users(users));
        }
        (SearchOutcome::Results(users), OutputFormat::Json) => {
            print_json(&OrgRow::from_users(users))?;
        }
        (_, OutputFormat::Json) => {
            print_json(&serde_json::json!({
                "status": status_name(&outcome),
                "message": outcome.detail(),
                "organizations": [],
            }))?;
        }
        (_, OutputFormat::Table) => {
            if let Some(line) = placeholder_line(&outcome) {
                eprintln!("{line}");
            }
        }
    }

    Ok(CommandStatus::from_outcomes([&outcome]))
}
