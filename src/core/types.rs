//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

use std::collections::BTreeMap;

/// The merged key/value mapping carried between load, overlay and serialize.
///
/// Keys are unique and the last write wins. Iteration is sorted by key, which
/// makes the written file deterministic.
pub type EnvMap = BTreeMap<String, String>;

/// Identifier of one external secret bundle (a Secrets Manager secret id or ARN).
///
/// The configured list of these is ordered; later bundles override earlier ones.
pub type SecretBundleRef = String;
