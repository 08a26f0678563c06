//! Response DTOs for the admin API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for GET /entries
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: String,
    /// When the value was last written
    pub stored_at: DateTime<Utc>,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        stored_at: DateTime<Utc>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            stored_at,
        }
    }
}

/// Response body for PUT /entries
#[derive(Debug, Clone, Serialize)]
pub struct PutResponse {
    /// Success message
    pub message: String,
    /// The key that was stored
    pub key: String,
}

impl PutResponse {
    /// Creates a new PutResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' stored successfully", key),
            key,
        }
    }
}

/// Response body for DELETE /entries
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The key that was deleted
    pub key: String,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' deleted successfully", key),
            key,
        }
    }
}

/// Response body for GET /keys
#[derive(Debug, Clone, Serialize)]
pub struct KeysResponse {
    /// Prefix that was listed
    pub prefix: String,
    /// Number of matching keys
    pub count: usize,
    /// Matching keys, oldest first
    pub keys: Vec<String>,
}

impl KeysResponse {
    pub fn new(prefix: impl Into<String>, keys: Vec<String>) -> Self {
        Self {
            prefix: prefix.into(),
            count: keys.len(),
            keys,
        }
    }
}

/// Response body for POST /clear
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Operator-facing summary
    pub message: String,
    /// The literal prefix that was cleared
    pub prefix: String,
    /// Number of entries removed
    pub removed: usize,
    /// Removed keys, oldest first
    pub keys: Vec<String>,
}

impl ClearResponse {
    /// Creates a new ClearResponse from the keys that were removed
    pub fn new(prefix: impl Into<String>, keys: Vec<String>) -> Self {
        let prefix = prefix.into();
        let message = if keys.is_empty() {
            format!("No cache entries under '{}'", prefix)
        } else {
            format!("Removed {} cache entries under '{}'", keys.len(), prefix)
        };
        Self {
            message,
            prefix,
            removed: keys.len(),
            keys,
        }
    }
}

/// Response body for GET /stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of prefix clears performed
    pub prefix_clears: u64,
    /// Entries removed by prefix clears
    pub invalidated_entries: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            prefix_clears: stats.prefix_clears,
            invalidated_entries: stats.invalidated_entries,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
