// src/types/ids.rs
//! Strongly typed Notion identifiers.
//!
//! Remote identifiers are 32 hex digits, optionally hyphenated in UUID
//! form, and frequently arrive embedded in share URLs. All inputs are
//! normalized to the compact form so an ID compares equal regardless of
//! how it was written.

use crate::error::AppError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

static COMPACT_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-f]{32}$").expect("compact id pattern is valid"));

/// A Notion identifier tagged with the kind of object it names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _marker: PhantomData<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseMarker;

/// Identifier of a top-level content record (a database row/page).
pub type RecordId = Id<RecordMarker>;
/// Identifier of one node in a record's content tree.
pub type BlockId = Id<BlockMarker>;
/// Identifier of the parent container whose records are listed.
pub type DatabaseId = Id<DatabaseMarker>;

impl<T> Id<T> {
    /// Parse an identifier in compact, hyphenated, or share-URL form.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let normalized = normalize(input)?;
        Ok(Self {
            value: normalized,
            _marker: PhantomData,
        })
    }

    /// Wrap a value that is already normalized (wire responses echo
    /// identifiers in hyphenated UUID form).
    pub(crate) fn from_wire(value: &str) -> Self {
        Self {
            value: value.replace('-', "").to_lowercase(),
            _marker: PhantomData,
        }
    }

    /// A fresh random identifier, for fixtures and defaults.
    pub fn new_v4() -> Self {
        Self {
            value: Uuid::new_v4().as_simple().to_string(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Hyphenated UUID form, as the path-addressed API endpoints expect.
    pub fn to_hyphenated(&self) -> String {
        if self.value.len() == 32 {
            format!(
                "{}-{}-{}-{}-{}",
                &self.value[0..8],
                &self.value[8..12],
                &self.value[12..16],
                &self.value[16..20],
                &self.value[20..32]
            )
        } else {
            self.value.clone()
        }
    }
}

fn normalize(input: &str) -> Result<String, AppError> {
    let mut candidate = input.trim();

    // Share URLs carry the ID as the last path segment, after the final
    // hyphen of the page slug.
    if candidate.starts_with("http://") || candidate.starts_with("https://") {
        candidate = candidate
            .split(&['?', '#'][..])
            .next()
            .unwrap_or(candidate)
            .rsplit(&['/', '-'][..])
            .next()
            .unwrap_or(candidate);
    }

    let compact = candidate.replace('-', "").to_lowercase();
    if COMPACT_ID.is_match(&compact) {
        Ok(compact)
    } else {
        Err(AppError::InvalidId(input.to_string()))
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&value))
    }
}

/// Bearer credential for the Notion API.
///
/// The token is deliberately opaque: it never appears in `Debug` output
/// or log lines.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Result<Self, AppError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::InvalidApiKey("token is empty".to_string()));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(AppError::InvalidApiKey(
                "token contains whitespace".to_string(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_compact_and_hyphenated_forms() {
        let compact = RecordId::parse("0123456789abcdef0123456789abcdef").unwrap();
        let hyphenated = RecordId::parse("01234567-89ab-cdef-0123-456789abcdef").unwrap();
        assert_eq!(compact, hyphenated);
        assert_eq!(
            compact.to_hyphenated(),
            "01234567-89ab-cdef-0123-456789abcdef"
        );
    }

    #[test]
    fn parses_share_urls() {
        let id = DatabaseId::parse(
            "https://www.notion.so/acme/My-Database-0123456789abcdef0123456789abcdef?v=abc",
        )
        .unwrap();
        assert_eq!(id.as_str(), "0123456789abcdef0123456789abcdef");
    }

    #[test]
    fn rejects_garbage() {
        assert!(RecordId::parse("not-an-id").is_err());
        assert!(RecordId::parse("").is_err());
    }

    #[test]
    fn api_key_rejects_empty_and_hides_value() {
        assert!(ApiKey::new("").is_err());
        assert!(ApiKey::new("has space").is_err());
        let key = ApiKey::new("secret_abc").unwrap();
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
    }
}
