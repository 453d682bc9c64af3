//! Auth token type.

use std::fmt;

use crate::error::Error;

/// A GitHub bearer token as supplied by the caller.
///
/// Callers may pass the token with or without a leading `Bearer ` prefix
/// (any case); the prefix is stripped on construction and the transport
/// layer re-attaches a canonical `Bearer ` when calling upstream.
///
/// # Example
///
/// ```
/// use hublens_core::AuthToken;
///
/// let token = AuthToken::new("bearer ghp_abc123").unwrap();
/// assert_eq!(token.as_str(), "ghp_abc123");
/// assert_eq!(token.bearer(), "Bearer ghp_abc123");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AuthToken(String);

impl AuthToken {
    /// Create a new token from a string, normalizing any bearer prefix.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the token is empty after
    /// normalization.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, Error> {
        let token = strip_bearer_prefix(raw.as_ref().trim());

        if token.is_empty() {
            return Err(Error::validation("A token must not be empty"));
        }

        Ok(Self(token.to_string()))
    }

    /// Returns the bare token value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the token as a canonical `Authorization` header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Tokens are credentials; keep them out of debug output.
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

fn strip_bearer_prefix(raw: &str) -> &str {
    const PREFIX: &str = "bearer";

    let prefixed = raw
        .get(..PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(PREFIX));

    if prefixed {
        let rest = &raw[PREFIX.len()..];
        if rest.starts_with(char::is_whitespace) {
            return rest.trim_start();
        }
    }

    raw
}
