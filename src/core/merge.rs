//! Overlaying secret bundles onto the env map.
//!
//! Each bundle is a flat JSON object of strings. Bundles are applied in the
//! configured order and always overwrite: secrets beat file values, later
//! bundles beat earlier ones.

use tracing::debug;

use crate::core::source::SecretSource;
use crate::core::types::{EnvMap, SecretBundleRef};
use crate::error::{DecodeError, Result};

/// Decode one bundle payload.
///
/// # Errors
///
/// Returns `DecodeError::MalformedSecretPayload` if `payload` is not valid
/// JSON, is not an object, or has a non-string value.
pub fn decode(id: &str, payload: &str) -> Result<EnvMap> {
    serde_json::from_str(payload).map_err(|source| {
        DecodeError::MalformedSecretPayload {
            id: id.to_string(),
            source,
        }
        .into()
    })
}

/// Overlay one bundle onto `env`.
///
/// The payload is decoded in full before `env` is touched, so a malformed
/// bundle leaves `env` unchanged. Returns the keys the bundle set.
///
/// # Errors
///
/// Returns `DecodeError::MalformedSecretPayload` if the payload is malformed.
pub fn overlay(env: &mut EnvMap, id: &str, payload: &str) -> Result<Vec<String>> {
    let bundle = decode(id, payload)?;
    let keys: Vec<String> = bundle.keys().cloned().collect();

    debug!(bundle = id, keys = keys.len(), "overlaying bundle");
    env.extend(bundle);

    Ok(keys)
}

/// Fetch and overlay every bundle in `refs`, in order.
///
/// Stops at the first failure; bundles after it are not fetched.
/// Returns the number of keys each bundle set, in the same order as `refs`.
///
/// # Errors
///
/// Returns the `FetchError` or `DecodeError` of the first failing bundle.
pub fn run(
    source: &dyn SecretSource,
    refs: &[SecretBundleRef],
    env: &mut EnvMap,
) -> Result<Vec<usize>> {
    let mut applied = Vec::with_capacity(refs.len());

    for id in refs {
        debug!(bundle = %id, source = source.name(), "fetching bundle");
        let payload = source.fetch(id)?.into_text(id)?;
        let keys = overlay(env, id, &payload)?;
        applied.push(keys.len());
    }

    Ok(applied)
}
