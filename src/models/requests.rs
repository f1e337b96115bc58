//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::error::{CacheError, Result};

/// TTL as sent by clients: either a JSON integer or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Expiration {
    Seconds(i64),
    Text(String),
}

impl Expiration {
    /// Parses the TTL in seconds, returning None for non-numeric text.
    pub fn seconds(&self) -> Option<i64> {
        match self {
            Expiration::Seconds(secs) => Some(*secs),
            Expiration::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// Request body for the SET operation (POST /set)
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: The value to store
/// - `expiration`: TTL in seconds; zero or negative stores an already-expired entry
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
    /// TTL in seconds
    pub expiration: Expiration,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        None
    }

    /// Returns the TTL in seconds.
    ///
    /// # Errors
    /// `CacheError::InvalidRequest` if the expiration is not an integer.
    pub fn ttl_seconds(&self) -> Result<i64> {
        self.expiration.seconds().ok_or_else(|| {
            CacheError::InvalidRequest(format!(
                "Expiration must be an integer number of seconds, got {:?}",
                self.expiration
            ))
        })
    }
}
