//! GitHub search client with cooldown admission.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use super::error::SearchError;
use super::query::SearchRequest;
use super::types::{RepoListing, User, decode_search_envelope, distinct_organizations};
use crate::admission::CooldownGate;
use crate::http::reqwest_transport::ReqwestTransport;
use crate::http::{HttpRequest, HttpResponse, HttpTransport};
use crate::outcome::SearchOutcome;

/// Default GitHub API host.
pub const GITHUB_API_HOST: &str = "https://api.github.com";

/// Default User-Agent; GitHub rejects requests without one.
pub const DEFAULT_USER_AGENT: &str = "starsearch";

/// Default request timeout for the reqwest transport.
pub const DEFAULT_TIMEOUT: StdDuration = StdDuration::from_secs(30);

/// Candidate repositories inspected by [`GitHubSearchClient::top_organizations`].
pub const DEFAULT_ORG_CANDIDATES: u32 = 100;

/// Repositories returned by [`GitHubSearchClient::repos_by_stars`] by default.
pub const DEFAULT_REPO_COUNT: u32 = 3;

/// Rate-limited GitHub repository search client.
///
/// Every search goes through one shared [`CooldownGate`], so at most one
/// request is in flight or queued at a time across all clones of the client.
/// Searches never return errors: every result, including failures, is a
/// [`SearchOutcome`].
#[derive(Clone)]
pub struct GitHubSearchClient {
    transport: Arc<dyn HttpTransport>,
    host: String,
    user_agent: String,
    gate: CooldownGate,
}

impl GitHubSearchClient {
    /// Create a client backed by reqwest.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use starsearch::github::{GitHubSearchClient, GITHUB_API_HOST};
    ///
    /// let client = GitHubSearchClient::new(GITHUB_API_HOST, DEFAULT_COOLDOWN, DEFAULT_TIMEOUT)?;
    /// let outcome = client.repos_by_stars("rust-lang", 3).await;
    /// ```
    pub fn new(
        host: &str,
        cooldown: StdDuration,
        timeout: StdDuration,
    ) -> Result<Self, SearchError> {
        if !(host.starts_with("https://") || host.starts_with("http://")) {
            return Err(SearchError::Config(format!(
                "host must be an http(s) URL, got {host:?}"
            )));
        }
        let transport = ReqwestTransport::with_timeout(timeout)
            .map_err(|e| SearchError::Config(e.to_string()))?;

        Ok(Self::new_with_transport(
            host,
            cooldown,
            Arc::new(transport),
        ))
    }

    pub fn new_with_transport(
        host: &str,
        cooldown: StdDuration,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            transport,
            host: host.trim_end_matches('/').to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            gate: CooldownGate::new(cooldown),
        }
    }

    /// Override the User-Agent header sent with every request.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Get the host URL.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The cooldown enforced between dispatched requests.
    pub fn cooldown(&self) -> StdDuration {
        self.gate.cooldown()
    }

    /// Organizations owning the most starred repositories.
    ///
    /// Looks at the top `count` repositories above the popularity threshold
    /// and returns their distinct organization owners in ranking order.
    /// Personal accounts are skipped. Only the first page is fetched.
    pub async fn top_organizations(&self, count: u32) -> SearchOutcome<User> {
        let request = SearchRequest::popular_repos(count);
        self.search(&request)
            .await
            .map(|repos| distinct_organizations(&repos))
    }

    /// The `count` most starred repositories owned by `login`.
    ///
    /// `login` is expected to be validated by the caller (see
    /// [`validate_login`](super::validate_login)).
    pub async fn repos_by_stars(&self, login: &str, count: u32) -> SearchOutcome<RepoListing> {
        let request = SearchRequest::org_repos(login, count);
        let limit = request.per_page() as usize;
        self.search(&request).await.map(|mut repos| {
            repos.truncate(limit);
            repos
        })
    }

    /// Run one repository search under the admission policy.
    pub async fn search(&self, request: &SearchRequest) -> SearchOutcome<RepoListing> {
        let url = format!("{}{}", self.host, request.path());
        tracing::debug!(%request, %url, "search requested");

        let http_request = HttpRequest::get(url)
            .with_header("Accept", "application/vnd.github+json")
            .with_header("User-Agent", self.user_agent.as_str());

        let dispatched = self
            .gate
            .run(|| self.transport.get(http_request))
            .await;

        let Some(result) = dispatched else {
            tracing::debug!(%request, "search rejected by cooldown gate");
            return SearchOutcome::RateLimited;
        };

        match result {
            Ok(response) => classify_response(response),
            Err(e) => {
                tracing::warn!(%request, error = %e, "search transport failure");
                SearchError::from(e).into()
            }
        }
    }
}

/// Turn a dispatched response into an outcome.
///
/// - 2xx with a body: decode; empty `items` is `Empty`.
/// - 2xx without a body: `TransportFailure`.
/// - non-2xx with a 4xx `Status` header: `Empty`.
/// - any other non-2xx: `TransportFailure` carrying the status text.
pub fn classify_response(response: HttpResponse) -> SearchOutcome<RepoListing> {
    match decode_response(response) {
        Ok(items) => SearchOutcome::from_items(items),
        Err(e) => {
            tracing::warn!(error = %e, "search failed");
            e.into()
        }
    }
}

fn decode_response(response: HttpResponse) -> Result<Vec<RepoListing>, SearchError> {
    if response.is_success() {
        let body = response.body.ok_or(SearchError::MissingBody {
            status: response.status,
        })?;
        return Ok(decode_search_envelope(&body)?.items);
    }

    let status_header = response.header("status");
    let client_error = status_header
        .and_then(status_code_prefix)
        .is_some_and(|code| (400..500).contains(&code));
    if client_error {
        tracing::warn!(
            status = response.status,
            status_header = status_header.unwrap_or_default(),
            "client error status treated as no results"
        );
        return Ok(Vec::new());
    }

    let message = match status_header {
        Some(text) => text.to_string(),
        None => format!("HTTP {} (no status header)", response.status),
    };
    Err(SearchError::Status {
        status: response.status,
        message,
    })
}

/// Leading status code of a `Status` header such as `404 Not Found`.
fn status_code_prefix(value: &str) -> Option<u16> {
    value.split_whitespace().next()?.parse().ok()
}
