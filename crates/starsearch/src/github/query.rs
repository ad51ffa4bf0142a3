//! Search request values and query-path construction.

use std::fmt;

use url::form_urlencoded;

/// Largest page GitHub's search endpoint will return.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Star threshold used when probing for popular repositories.
pub const POPULAR_QUERY: &str = "stars:>1000";

/// Field results are sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Stars,
    Forks,
    Updated,
}

impl SortKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Stars => "stars",
            SortKey::Forks => "forks",
            SortKey::Updated => "updated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

/// One repository search, built once per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
    sort: SortKey,
    order: SortOrder,
    per_page: u32,
}

impl SearchRequest {
    /// `per_page` is clamped to `1..=MAX_PAGE_SIZE`.
    pub fn new(query: impl Into<String>, sort: SortKey, order: SortOrder, per_page: u32) -> Self {
        Self {
            query: query.into(),
            sort,
            order,
            per_page: per_page.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Repositories owned by `login`, most starred first.
    pub fn org_repos(login: &str, count: u32) -> Self {
        Self::new(
            format!("org:{login}"),
            SortKey::Stars,
            SortOrder::Descending,
            count,
        )
    }

    /// Repositories above the popularity threshold, most starred first.
    pub fn popular_repos(count: u32) -> Self {
        Self::new(POPULAR_QUERY, SortKey::Stars, SortOrder::Descending, count)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Path and query string, relative to the API host.
    ///
    /// `/search/repositories?q=org%3Arust-lang&sort=stars&order=desc&per_page=3`
    #[must_use]
    pub fn path(&self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("q", &self.query)
            .append_pair("sort", self.sort.as_str())
            .append_pair("order", self.order.as_str())
            .append_pair("per_page", &self.per_page.to_string())
            .finish();
        format!("/search/repositories?{query}")
    }
}

impl fmt::Display for SearchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (sort={} order={} per_page={})",
            self.query,
            self.sort.as_str(),
            self.order.as_str(),
            self.per_page
        )
    }
}
