//! Page request type.

use crate::error::Error;
use crate::types::AuthToken;

/// Smallest page size a caller may request.
pub const MIN_PAGE_SIZE: i64 = 1;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: i64 = 20;

/// A validated request for one page of repositories.
///
/// The page size is checked against [`MIN_PAGE_SIZE`]..=[`MAX_PAGE_SIZE`]
/// at construction, before any upstream call can happen.
#[derive(Debug, Clone)]
pub struct PageRequest {
    token: AuthToken,
    count: usize,
    cursor: Option<String>,
}

impl PageRequest {
    /// Create a new page request, validating the requested count.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `count` is outside
    /// [`MIN_PAGE_SIZE`]..=[`MAX_PAGE_SIZE`].
    pub fn new(token: AuthToken, count: i64, cursor: Option<String>) -> Result<Self, Error> {
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&count) {
            return Err(Error::validation("Incorrect count has been provided"));
        }

        Ok(Self {
            token,
            count: count as usize,
            cursor,
        })
    }

    /// Returns the normalized auth token.
    pub fn token(&self) -> &AuthToken {
        &self.token
    }

    /// Returns the requested number of repositories.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the pagination cursor to resume from, if any.
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }
}
