//! starsearch CLI - find popular GitHub organizations and their top repositories.

mod commands;
mod config;
mod progress;

use clap::{Parser, Subcommand};
use console::Term;
use starsearch::GitHubSearchClient;
use starsearch::github::{DEFAULT_ORG_CANDIDATES, DEFAULT_REPO_COUNT};
use tracing_subscriber::EnvFilter;

use crate::commands::CommandStatus;
use crate::commands::output::OutputFormat;

/// Exit code used when a search finished without results because of a failure.
const SEARCH_FAILED_EXIT_CODE: i32 = 2;

#[derive(Parser)]
#[command(name = "starsearch")]
#[command(version)]
#[command(about = "Search GitHub for popular organizations and their most starred repositories")]
#[command(after_long_help = r#"EXAMPLES
    List organizations behind the most starred repositories:
        $ starsearch orgs

    Show the three most starred repositories of an organization:
        $ starsearch repos rust-lang

    Search several organizations at once, as JSON:
        $ starsearch repos tokio-rs serde-rs --count 5 --output json

CONFIGURATION
    starsearch reads configuration from:
      1. ~/.config/starsearch/config.toml (or $XDG_CONFIG_HOME/starsearch/config.toml)
      2. ./starsearch.toml
      3. Environment variables (STARSEARCH_* prefix, e.g., STARSEARCH_SEARCH__HOST)
      4. .env file in current directory

ENVIRONMENT VARIABLES
    STARSEARCH_SEARCH__HOST           API host (default: https://api.github.com)
    STARSEARCH_SEARCH__COOLDOWN_MS    Minimum milliseconds between requests (default: 2000)
    STARSEARCH_SEARCH__TIMEOUT_SECS   Per-request timeout in seconds (default: 30)
    STARSEARCH_SEARCH__USER_AGENT     User-Agent header (default: starsearch)
"#)]
struct Cli {
    /// API host, including scheme (overrides config)
    #[arg(long, global = true)]
    host: Option<String>,

    /// Minimum milliseconds between two requests (overrides config)
    #[arg(long, global = true)]
    cooldown_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List organizations that own the most starred repositories
    Orgs {
        /// Number of popular repositories to scan for owners
        #[arg(short, long, default_value_t = DEFAULT_ORG_CANDIDATES)]
        count: u32,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
    /// Show the most starred repositories of one or more organizations
    Repos {
        /// Organization or user logins to search
        #[arg(required = true)]
        orgs: Vec<String>,

        /// Number of repositories to show per organization
        #[arg(short, long, default_value_t = DEFAULT_REPO_COUNT)]
        count: u32,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Interactive runs only see warnings unless RUST_LOG says otherwise.
    let default_filter = if Term::stdout().is_term() {
        "warn"
    } else {
        "starsearch=info,starsearch_cli=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration (config file -> env vars -> defaults)
    let config = config::Config::load();

    let cli = Cli::parse();

    let search = config.search.with_overrides(cli.host, cli.cooldown_ms);
    tracing::debug!(
        host = %search.host,
        cooldown_ms = search.cooldown_ms,
        timeout_secs = search.timeout_secs,
        "Resolved search configuration"
    );

    let client = GitHubSearchClient::new(&search.host, search.cooldown(), search.timeout())?
        .with_user_agent(search.user_agent.clone());

    let status = match cli.command {
        Commands::Orgs { count, output } => {
            commands::orgs::handle_orgs(&client, count, output).await?
        }
        Commands::Repos {
            orgs,
            count,
            output,
        } => commands::repos::handle_repos(&client, &orgs, count, output).await?,
    };

    if status == CommandStatus::SearchFailed {
        std::process::exit(SEARCH_FAILED_EXIT_CODE);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn orgs_uses_default_count() {
        let cli = Cli::try_parse_from(["starsearch", "orgs"]).expect("parse");
        match cli.command {
            Commands::Orgs { count, output } => {
                assert_eq!(count, 100);
                assert!(matches!(output, OutputFormat::Table));
            }
            Commands::Repos { .. } => panic!("expected orgs"),
        }
        assert!(cli.host.is_none());
        assert!(cli.cooldown_ms.is_none());
    }

    #[test]
    fn repos_accepts_many_logins_and_global_flags() {
        let cli = Cli::try_parse_from([
            "starsearch",
            "repos",
            "rust-lang",
            "tokio-rs",
            "-c",
            "5",
            "-o",
            "json",
            "--cooldown-ms",
            "500",
            "--host",
            "http://127.0.0.1:8080",
        ])
        .expect("parse");

        assert_eq!(cli.cooldown_ms, Some(500));
        assert_eq!(cli.host.as_deref(), Some("http://127.0.0.1:8080"));
        match cli.command {
            Commands::Repos {
                orgs,
                count,
                output,
            } => {
                assert_eq!(orgs, vec!["rust-lang", "tokio-rs"]);
                assert_eq!(count, 5);
                assert!(matches!(output, OutputFormat::Json));
            }
            Commands::Orgs { .. } => panic!("expected repos"),
        }
    }

    #[test]
    fn repos_requires_a_login() {
        assert!(Cli::try_parse_from(["starsearch", "repos"]).is_err());
    }

    #[test]
    fn repos_defaults_to_three_results() {
        let cli = Cli::try_parse_from(["starsearch", "repos", "mccartykim"]).expect("parse");
        match cli.command {
            Commands::Repos { count, .. } => assert_eq!(count, 3),
            Commands::Orgs { .. } => panic!("expected repos"),
        }
    }
}
