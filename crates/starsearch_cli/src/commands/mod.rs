pub(crate) mod orgs;
pub(crate) mod output;
pub(crate) mod repos;

use starsearch::SearchOutcome;

/// How a command finished once its outcomes were rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommandStatus {
    Success,
    /// At least one search ended in a transport or decode failure.
    SearchFailed,
}

impl CommandStatus {
    pub(crate) fn from_outcomes<'a, T: 'a>(
        outcomes: impl IntoIterator<Item = &'a SearchOutcome<T>>,
    ) -> Self {
        if outcomes.into_iter().any(SearchOutcome::is_failure) {
            CommandStatus::SearchFailed
        } else {
            CommandStatus::Success
        }
    }
}
