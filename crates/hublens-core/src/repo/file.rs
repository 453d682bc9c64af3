//! Repository file content from the REST contents endpoint.

use base64::prelude::{BASE64_STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, Error};

/// A file fetched from a repository's contents endpoint.
///
/// `content` is base64 as delivered by GitHub, wrapped with newlines
/// every 60 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryFile {
    pub content: String,
    pub url: String,
}

impl RepositoryFile {
    /// Decode the base64 content to UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns a decode error if the content is not valid base64 or not
    /// valid UTF-8.
    pub fn decoded_text(&self) -> Result<String, Error> {
        let compact: String = self
            .content
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();

        let bytes = BASE64_STANDARD
            .decode(compact)
            .map_err(|err| DecodeError::new(format!("invalid base64 content: {err}")))?;

        String::from_utf8(bytes)
            .map_err(|err| DecodeError::new(format!("content is not valid UTF-8: {err}")).into())
    }
}
