//! GitHub login validation for callers.
//!
//! The search client never re-validates; callers check user input here first.

/// Longest login GitHub accepts.
pub const MAX_LOGIN_LEN: usize = 39;

/// Message shown when a login fails [`validate_login`].
pub const INVALID_LOGIN_MESSAGE: &str = "GitHub names must contain only alphanumeric characters and hyphens, and be under 40 characters";

/// Whether `login` is a syntactically valid GitHub user or organization name.
///
/// Logins are 1-39 ASCII letters, digits or hyphens; they cannot start or end
/// with a hyphen or contain two hyphens in a row.
pub fn validate_login(login: &str) -> bool {
    if login.is_empty() || login.len() > MAX_LOGIN_LEN {
        return false;
    }
    if login.starts_with('-') || login.ends_with('-') || login.contains("--") {
        return false;
    }
    login.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}
