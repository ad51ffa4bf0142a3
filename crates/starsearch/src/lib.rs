//! Starsearch - a rate-limited GitHub repository search client.
//!
//! The client finds the organizations behind GitHub's most starred
//! repositories and the top repositories of a given organization, while
//! keeping to the unauthenticated search rate limit: at most one request
//! leaves the process per cooldown window, and concurrent callers never pile
//! up duplicate outbound calls.
//!
//! # Example
//!
//! ```ignore
//! use starsearch::github::{GitHubSearchClient, GITHUB_API_HOST, DEFAULT_TIMEOUT};
//! use starsearch::{DEFAULT_COOLDOWN, SearchOutcome};
//!
//! let client = GitHubSearchClient::new(GITHUB_API_HOST, DEFAULT_COOLDOWN, DEFAULT_TIMEOUT)?;
//!
//! // Suggested organizations
//! let orgs = client.top_organizations(100).await;
//!
//! // Three most starred repositories of one of them
//! if let SearchOutcome::Results(repos) = client.repos_by_stars("rust-lang", 3).await {
//!     for repo in repos {
//!         println!("{} ({} stars)", repo.name, repo.stars);
//!     }
//! }
//! ```

pub mod admission;
pub mod github;
pub mod http;
pub mod outcome;

pub use admission::{CooldownGate, DEFAULT_COOLDOWN};
pub use github::{GitHubSearchClient, RepoListing, SearchError, SearchRequest, User};
pub use outcome::SearchOutcome;
