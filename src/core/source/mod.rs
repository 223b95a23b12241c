//! Secret bundle retrieval.
//!
//! The merge engine only needs "give me the payload for this id". This module
//! defines that seam and its implementations.
//!
//! ## Adding a New Source
//!
//! 1. Implement the `SecretSource` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`, `gcp.rs`)
//! 3. Re-export from this module

#[cfg(feature = "aws")]
mod aws;
mod memory;

#[cfg(feature = "aws")]
pub use aws::AwsSecretsManager;
pub use memory::MapSource;

use crate::error::{DecodeError, Result};

/// Raw payload returned for one bundle id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretPayload {
    /// The secret was stored as a string.
    Text(String),
    /// The secret was stored as bytes.
    Binary(Vec<u8>),
}

impl SecretPayload {
    /// The payload as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::InvalidUtf8` if a binary payload is not UTF-8.
    pub fn into_text(self, id: &str) -> Result<String> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Binary(bytes) => String::from_utf8(bytes)
                .map_err(|_| DecodeError::InvalidUtf8 { id: id.to_string() }.into()),
        }
    }
}

impl From<&str> for SecretPayload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for SecretPayload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// A place secret bundles are fetched from.
///
/// Calls are blocking and made strictly one at a time, in configured order.
pub trait SecretSource {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Fetch the payload for bundle `id`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` for any retrieval failure.
    fn fetch(&self, id: &str) -> Result<SecretPayload>;
}
