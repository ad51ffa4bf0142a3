use starsearch::github::{INVALID_LOGIN_MESSAGE, validate_login};
use starsearch::{GitHubSearchClient, RepoListing, SearchOutcome};
use tokio::task::JoinError;

use super::CommandStatus;
use super::output::{
    OrgReport, OutputFormat, RepoRow, placeholder_line, print_json, print_table, status_name,
};
use crate::progress::Spinner;

/// Split logins into (valid, invalid), preserving order.
pub(crate) fn partition_logins(logins: &[String]) -> (Vec<String>, Vec<String>) {
    logins
        .iter()
        .cloned()
        .partition(|login| validate_login(login))
}

/// Search every login concurrently, one task each. Results keep input order.
pub(crate) async fn search_all(
    client: &GitHubSearchClient,
    logins: Vec<String>,
    count: u32,
) -> Result<Vec<(String, SearchOutcome<RepoListing>)>, JoinError> {
    let handles: Vec<_> = logins
        .into_iter()
        .map(|login| {
            let client = client.clone();
            tokio::spawn(async move {
                let outcome = client.repos_by_stars(&login, count).await;
                (login, outcome)
            })
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await?);
    }
    Ok(results)
}

/// Handle `starsearch repos`.
pub(crate) async fn handle_repos(
    client: &GitHubSearchClient,
    logins: &[String],
    count: u32,
    output: OutputFormat,
) -> Result<CommandStatus, Box<dyn std::error::Error>> {
    let (valid, invalid) = partition_logins(logins);

    for login in &invalid {
        eprintln!(
            "{} '{}': {}",
            console::style("Skipping").yellow().bold(),
            login,
            INVALID_LOGIN_MESSAGE
        );
        tracing::warn!(login = %login, "Rejected invalid login");
    }

    if valid.is_empty() {
        return Err(INVALID_LOGIN_MESSAGE.into());
    }

    let spinner = Spinner::start(format!(
        "Searching {} organization{}...",
        valid.len(),
        if valid.len() == 1 { "" } else { "s" }
    ));
    let results = search_all(client, valid, count).await?;
    spinner.finish();

    for (login, outcome) in &results {
        tracing::info!(
            org = %login,
            found = outcome.len(),
            status = status_name(outcome),
            "Repository search finished"
        );
    }

    match output {
        OutputFormat::Json => {
            let reports: Vec<_> = results
                .iter()
                .map(|(login, outcome)| OrgReport::new(login, outcome))
                .collect();
            print_json(&reports)?;
        }
        OutputFormat::Table => {
            for (login, outcome) in &results {
                println!("{}", console::style(login).cyan().bold());
                match outcome.results() {
                    Some(repos) => print_table(repos.iter().map(RepoRow::from).collect()),
                    None => {
                        if let Some(line) = placeholder_line(outcome) {
                            println!("{line}");
                        }
                    }
                }
            }
        }
    }

    Ok(CommandStatus::from_outcomes(
        results.iter().map(|(_, outcome)| outcome),
    ))
}
