//! The value every search resolves to.

use crate::github::SearchError;

/// Result of one search call. Exactly one variant per call.
///
/// `Results` is never empty and keeps the order the upstream service returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<T> {
    /// Matches, in upstream order.
    Results(Vec<T>),
    /// The search succeeded but found nothing (or the resource does not exist).
    Empty,
    /// No admission slot was free; nothing was sent.
    RateLimited,
    /// Network or protocol failure; retrying later may succeed.
    TransportFailure(String),
    /// The response did not match the expected shape.
    DecodeFailure(String),
}

impl<T> SearchOutcome<T> {
    /// `Results` for a non-empty list, `Empty` otherwise.
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            SearchOutcome::Empty
        } else {
            SearchOutcome::Results(items)
        }
    }

    pub fn results(&self) -> Option<&[T]> {
        match self {
            SearchOutcome::Results(items) => Some(items),
            _ => None,
        }
    }

    pub fn into_results(self) -> Option<Vec<T>> {
        match self {
            SearchOutcome::Results(items) => Some(items),
            _ => None,
        }
    }

    /// Number of results; zero for every non-`Results` variant.
    pub fn len(&self) -> usize {
        self.results().map_or(0, <[T]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this outcome should be surfaced as a fault.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            SearchOutcome::TransportFailure(_) | SearchOutcome::DecodeFailure(_)
        )
    }

    /// Whether asking again later could produce a different answer.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SearchOutcome::RateLimited | SearchOutcome::TransportFailure(_)
        )
    }

    /// Transform the results, re-checking emptiness afterwards.
    pub fn map<U>(self, f: impl FnOnce(Vec<T>) -> Vec<U>) -> SearchOutcome<U> {
        match self {
            SearchOutcome::Results(items) => SearchOutcome::from_items(f(items)),
            SearchOutcome::Empty => SearchOutcome::Empty,
            SearchOutcome::RateLimited => SearchOutcome::RateLimited,
            SearchOutcome::TransportFailure(msg) => SearchOutcome::TransportFailure(msg),
            SearchOutcome::DecodeFailure(msg) => SearchOutcome::DecodeFailure(msg),
        }
    }

    /// Short title for a placeholder row shown instead of results.
    pub fn headline(&self) -> Option<&'static str> {
        match self {
            SearchOutcome::Results(_) => None,
            SearchOutcome::Empty => Some("No Public Results"),
            SearchOutcome::RateLimited => Some("Slow Down"),
            SearchOutcome::TransportFailure(_) | SearchOutcome::DecodeFailure(_) => {
                Some("Network Error")
            }
        }
    }

    /// One-line explanation to go with [`headline`](Self::headline).
    pub fn detail(&self) -> Option<String> {
        match self {
            SearchOutcome::Results(_) => None,
            SearchOutcome::Empty => {
                Some("Either the results do not exist or are private".to_string())
            }
            SearchOutcome::RateLimited => {
                Some("Another search is already waiting; try again shortly".to_string())
            }
            SearchOutcome::TransportFailure(msg) => Some(format!("Please try again ({msg})")),
            SearchOutcome::DecodeFailure(msg) => {
                Some(format!("Unexpected response from GitHub ({msg})"))
            }
        }
    }
}

impl<T> From<SearchError> for SearchOutcome<T> {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Json(e) => SearchOutcome::DecodeFailure(e.to_string()),
            other => SearchOutcome::TransportFailure(other.to_string()),
        }
    }
}
