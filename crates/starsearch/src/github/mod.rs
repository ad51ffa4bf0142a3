//! GitHub repository search.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for search operations
//! - [`types`] - Wire types and decoding of search responses
//! - [`query`] - Search requests and query-path construction
//! - [`client`] - The rate-limited search client and response classification
//! - [`login`] - Login validation for callers
//!
//! ```ignore
//! use starsearch::github::{GitHubSearchClient, GITHUB_API_HOST};
//! use starsearch::SearchOutcome;
//!
//! let client = GitHubSearchClient::new(GITHUB_API_HOST, DEFAULT_COOLDOWN, DEFAULT_TIMEOUT)?;
//! match client.repos_by_stars("rust-lang", 3).await {
//!     SearchOutcome::Results(repos) => { /* ... */ }
//!     SearchOutcome::Empty => { /* nothing public */ }
//!     SearchOutcome::RateLimited => { /* try again shortly */ }
//!     SearchOutcome::TransportFailure(msg) | SearchOutcome::DecodeFailure(msg) => { /* ... */ }
//! }
//! ```

mod client;
mod error;
mod login;
mod query;
mod types;

// Re-export error types
pub use error::SearchError;

// Re-export types
pub use types::{
    AccountKind, RepoListing, SearchEnvelope, User, decode_search_envelope,
    distinct_organizations,
};

pub use query::{MAX_PAGE_SIZE, POPULAR_QUERY, SearchRequest, SortKey, SortOrder};

// Re-export client types and functions
pub use client::{
    DEFAULT_ORG_CANDIDATES, DEFAULT_REPO_COUNT, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT,
    GITHUB_API_HOST, GitHubSearchClient, classify_response,
};

pub use login::{INVALID_LOGIN_MESSAGE, MAX_LOGIN_LEN, validate_login};
