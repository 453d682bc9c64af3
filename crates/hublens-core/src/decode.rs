//! Upstream response decoding.
//!
//! One chokepoint turns raw JSON into typed records: serde performs the
//! shape validation and drops unknown fields, while targeted
//! `deserialize_with` helpers on the record types coerce numeric strings.
//! Decoding is pure; failures are logged once here before surfacing.

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::{DecodeError, Error};

/// Decode a raw JSON value into a typed record.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the value does not match the expected
/// shape; the message carries the violating field as reported by serde.
pub fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, Error> {
    serde_json::from_value(value).map_err(|err| {
        let err = DecodeError::new(err.to_string());
        warn!(error = %err, "failed to parse schema");
        err.into()
    })
}
