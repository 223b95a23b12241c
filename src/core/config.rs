//! Run configuration.
//!
//! A [`Config`] is resolved once at the entry point from flags, environment
//! variables and an optional `.secretenv.toml`, then handed to the core by
//! value. Nothing below the entry point reads process state.

use serde::Deserialize;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::core::constants::{BUNDLE_SEPARATOR, ENV_FILE};
use crate::core::types::SecretBundleRef;
use crate::error::{ConfigError, Result};

/// Everything a run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The env file to load and rewrite.
    pub target: PathBuf,
    /// Bundle ids in overlay order.
    pub bundles: Vec<SecretBundleRef>,
    /// Credential profile for the secret transport.
    pub profile: Option<String>,
    /// Region for the secret transport.
    pub region: Option<String>,
}

/// Settings file contents (`.secretenv.toml`).
///
/// Every field is optional; flags and environment variables take precedence.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Target file name, relative to `project_dir` when that is set.
    pub file: Option<PathBuf>,
    /// Directory the target file lives in.
    pub project_dir: Option<PathBuf>,
    /// Bundle ids in overlay order.
    #[serde(default)]
    pub secrets: Vec<String>,
    pub profile: Option<String>,
    pub region: Option<String>,
}

impl Settings {
    /// Load settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse`.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading settings");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(settings)
    }

    /// Overlay `other` on top of these settings.
    ///
    /// Set fields of `other` win; an empty `secrets` list does not clear ours.
    pub fn merge(self, other: Settings) -> Settings {
        Settings {
            file: other.file.or(self.file),
            project_dir: other.project_dir.or(self.project_dir),
            secrets: if other.secrets.is_empty() {
                self.secrets
            } else {
                other.secrets
            },
            profile: other.profile.or(self.profile),
            region: other.region.or(self.region),
        }
    }

    /// Resolve into a [`Config`], applying defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoBundles` if no non-empty bundle id remains.
    pub fn resolve(self) -> Result<Config> {
        let file = self.file.unwrap_or_else(|| PathBuf::from(ENV_FILE));
        let target = match self.project_dir {
            Some(dir) => under(&dir, &file),
            None => file,
        };

        let bundles: Vec<SecretBundleRef> = self
            .secrets
            .iter()
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();
        if bundles.is_empty() {
            return Err(ConfigError::NoBundles.into());
        }

        let config = Config {
            target,
            bundles,
            profile: self.profile.filter(|p| !p.is_empty()),
            region: self.region.filter(|r| !r.is_empty()),
        };
        debug!(
            target = %config.target.display(),
            bundles = config.bundles.len(),
            "config resolved"
        );

        Ok(config)
    }
}

/// Place `file` inside `dir`, even when `file` is absolute.
fn under(dir: &Path, file: &Path) -> PathBuf {
    let relative: PathBuf = file
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect();
    dir.join(relative)
}

/// Split a comma separated bundle list.
///
/// Order is preserved; whitespace and empty items are dropped later by
/// [`Settings::resolve`].
pub fn split_bundles(list: &str) -> Vec<String> {
    list.split(BUNDLE_SEPARATOR).map(str::to_string).collect()
}
