//! In-memory secret source.

use std::collections::HashMap;

use super::{SecretPayload, SecretSource};
use crate::error::{FetchError, Result};

/// Secret source backed by a map of id to payload.
///
/// Useful for tests and for callers that already hold the bundles.
#[derive(Debug, Default, Clone)]
pub struct MapSource {
    bundles: HashMap<String, SecretPayload>,
}

impl MapSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bundle, replacing any previous payload for `id`.
    pub fn with(mut self, id: impl Into<String>, payload: impl Into<SecretPayload>) -> Self {
        self.insert(id, payload);
        self
    }

    /// Add a bundle in place.
    pub fn insert(&mut self, id: impl Into<String>, payload: impl Into<SecretPayload>) {
        self.bundles.insert(id.into(), payload.into());
    }
}

impl SecretSource for MapSource {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn fetch(&self, id: &str) -> Result<SecretPayload> {
        self.bundles
            .get(id)
            .cloned()
            .ok_or_else(|| FetchError::NotFound { id: id.to_string() }.into())
    }
}
