//! GitHub search API data types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Kind of account that owns a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountKind {
    Organization,
    /// A personal account; GitHub calls these "User".
    #[serde(rename = "User")]
    Individual,
}

/// A GitHub account as embedded in a search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Username/login.
    pub login: String,
    /// Whether this is an organization or a personal account.
    #[serde(rename = "type")]
    pub kind: AccountKind,
}

impl User {
    pub fn is_organization(&self) -> bool {
        self.kind == AccountKind::Organization
    }
}

/// A repository returned by the search endpoint - only the fields we use.
///
/// API docs: https://docs.github.com/en/rest/search/search#search-repositories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoListing {
    /// Repository name.
    pub name: String,
    /// Repository description.
    pub description: Option<String>,
    /// Number of stars.
    #[serde(rename = "stargazers_count")]
    pub stars: u32,
    /// HTML URL to the repository.
    pub html_url: String,
    /// Owner information.
    pub owner: User,
}

/// Body of a `/search/repositories` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchEnvelope {
    pub items: Vec<RepoListing>,
}

/// Decode a search response body.
///
/// A body without an `items` array is rejected; unknown fields are ignored.
pub fn decode_search_envelope(bytes: &[u8]) -> Result<SearchEnvelope, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Owners of kind Organization, first occurrence of each login kept, in order.
pub fn distinct_organizations<'a, I>(listings: I) -> Vec<User>
where
    I: IntoIterator<Item = &'a RepoListing>,
{
    let mut seen = HashSet::new();
    let mut orgs = Vec::new();
    for listing in listings {
        let owner = &listing.owner;
        if owner.is_organization() && seen.insert(owner.login.as_str()) {
            orgs.push(owner.clone());
        }
    }
    orgs
}
