//! Deserialization helpers for lenient numeric fields.
//!
//! GitHub's REST payloads occasionally carry numbers as strings; these
//! helpers perform the coercion the decode step expects.

use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<N> {
    Number(N),
    String(String),
}

/// Deserialize a `u64` from either a number or a numeric string.
pub(crate) fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::<u64>::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.parse().map_err(de::Error::custom),
    }
}

/// Deserialize an optional `i64` from a number, a numeric string or null.
pub(crate) fn lenient_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString<i64>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::String(s)) => s.parse().map(Some).map_err(de::Error::custom),
    }
}
