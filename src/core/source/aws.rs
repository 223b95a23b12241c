//! AWS Secrets Manager source.
//!
//! Reads the `AWSCURRENT` version of each secret. Enable with `--features aws`
//! (on by default).
//!
//! Credentials come from the default provider chain, optionally pinned to a
//! named profile from `~/.aws/config`.
//!
//! `SecretBinary` is used as the raw bytes the SDK returns. It is not
//! base64-decoded a second time, so a binary secret holding base64 text of a
//! JSON object fails to decode; store such bundles as `SecretString`.

use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;
use aws_sdk_secretsmanager::Client;
use tracing::{debug, trace};

use super::{SecretPayload, SecretSource};
use crate::core::constants::VERSION_STAGE;
use crate::error::{FetchError, Result};

/// Secrets Manager client driven from synchronous code.
///
/// The SDK is async, so the source owns a current-thread runtime and blocks
/// on each call.
pub struct AwsSecretsManager {
    client: Client,
    runtime: tokio::runtime::Runtime,
    profile: Option<String>,
}

impl std::fmt::Debug for AwsSecretsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsSecretsManager")
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}

impl AwsSecretsManager {
    /// Build a client for the given profile and region.
    ///
    /// `None` for either falls back to the SDK's default resolution.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Runtime` if the async runtime cannot be started.
    pub fn new(profile: Option<&str>, region: Option<&str>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| FetchError::Runtime(e.to_string()))?;

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(profile) = profile {
            debug!(profile, "using AWS profile");
            loader = loader.profile_name(profile);
        }
        if let Some(region) = region {
            debug!(region, "using AWS region");
            loader = loader.region(aws_config::Region::new(region.to_string()));
        }
        let sdk_config = runtime.block_on(loader.load());

        Ok(Self {
            client: Client::new(&sdk_config),
            runtime,
            profile: profile.map(str::to_string),
        })
    }
}

impl SecretSource for AwsSecretsManager {
    fn name(&self) -> &'static str {
        "aws-secretsmanager"
    }

    fn fetch(&self, id: &str) -> Result<SecretPayload> {
        trace!(id, stage = VERSION_STAGE, "fetching secret");

        let response = self
            .runtime
            .block_on(
                self.client
                    .get_secret_value()
                    .secret_id(id)
                    .version_stage(VERSION_STAGE)
                    .send(),
            )
            .map_err(|e| map_service_error(id, e.into_service_error()))?;

        if let Some(text) = response.secret_string() {
            return Ok(SecretPayload::Text(text.to_string()));
        }
        if let Some(blob) = response.secret_binary() {
            return Ok(SecretPayload::Binary(blob.as_ref().to_vec()));
        }

        Err(FetchError::EmptySecret { id: id.to_string() }.into())
    }
}

fn map_service_error(id: &str, err: GetSecretValueError) -> FetchError {
    let id = id.to_string();
    let message = DisplayErrorContext(&err).to_string();

    match err {
        GetSecretValueError::DecryptionFailure(_) => FetchError::DecryptionFailure { id, message },
        GetSecretValueError::InternalServiceError(_) => {
            FetchError::InternalService { id, message }
        }
        GetSecretValueError::InvalidParameterException(_) => {
            FetchError::InvalidParameter { id, message }
        }
        GetSecretValueError::InvalidRequestException(_) => {
            FetchError::InvalidRequest { id, message }
        }
        GetSecretValueError::ResourceNotFoundException(_) => FetchError::NotFound { id },
        _ => FetchError::Transport { id, message },
    }
}
