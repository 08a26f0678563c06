//! Request DTOs for the admin API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::cache::directory_prefix;
use crate::error::{CacheError, Result};

/// Request body for PUT /entries
#[derive(Debug, Clone, Deserialize)]
pub struct PutRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
}

impl PutRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        None
    }
}

/// Query string for GET/DELETE /entries
#[derive(Debug, Clone, Deserialize)]
pub struct KeyQuery {
    pub key: String,
}

/// Query string for GET /keys
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrefixQuery {
    /// Prefix to list; absent means every key
    #[serde(default)]
    pub prefix: Option<String>,
}

/// Request body for POST /clear
///
/// Exactly one of `prefix` and `directory` must be set. A `directory` is
/// normalized to cover itself and everything below it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClearRequest {
    /// Literal key prefix
    #[serde(default)]
    pub prefix: Option<String>,
    /// Directory path, turned into `<path without trailing slashes>/`
    #[serde(default)]
    pub directory: Option<String>,
    /// Must be true for an empty prefix, which clears the whole cache
    #[serde(default)]
    pub allow_full_clear: bool,
}

impl ClearRequest {
    /// Resolves the request into the literal prefix to clear.
    pub fn resolve_prefix(&self) -> Result<String> {
        let prefix = match (&self.prefix, &self.directory) {
            (Some(prefix), None) => prefix.clone(),
            (None, Some(directory)) => directory_prefix(directory)?,
            (Some(_), Some(_)) => {
                return Err(CacheError::InvalidRequest(
                    "Specify either 'prefix' or 'directory', not both".to_string(),
                ))
            }
            (None, None) => {
                return Err(CacheError::InvalidRequest(
                    "One of 'prefix' or 'directory' is required".to_string(),
                ))
            }
        };

        if prefix.is_empty() && !self.allow_full_clear {
            return Err(CacheError::InvalidRequest(
                "Empty prefix clears the entire cache; set 'allow_full_clear' to confirm"
                    .to_string(),
            ));
        }

        Ok(prefix)
    }
}
