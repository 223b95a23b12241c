//! The full load, merge, write pipeline.

use std::path::PathBuf;

use tracing::info;

use crate::core::config::Config;
use crate::core::source::SecretSource;
use crate::core::{env, merge};
use crate::error::Result;

/// Outcome of a run. Holds key names and counts, never values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The target file.
    pub path: PathBuf,
    /// Keys read from the existing file (including an empty key, if any).
    pub file_keys: usize,
    /// Bundle ids with the number of keys each one set, in overlay order.
    pub bundles: Vec<(String, usize)>,
    /// Keys of the final file, sorted.
    pub keys: Vec<String>,
    /// Whether the file was rewritten.
    pub written: bool,
}

/// Merge every configured bundle into the target file and rewrite it.
///
/// The file is only rewritten after every bundle has been fetched and
/// decoded; any failure leaves it as it was.
///
/// # Errors
///
/// Returns the first `StoreError`, `FetchError` or `DecodeError` hit.
pub fn run(config: &Config, source: &dyn SecretSource) -> Result<Report> {
    let (mut report, lines) = merge_all(config, source)?;

    env::write(&config.target, &lines)?;
    report.written = true;

    info!(
        path = %report.path.display(),
        keys = report.keys.len(),
        "env file generated"
    );
    Ok(report)
}

/// Like [`run`] but without rewriting the target file.
///
/// The file is still created if it did not exist.
///
/// # Errors
///
/// Same as [`run`], minus write failures.
pub fn preview(config: &Config, source: &dyn SecretSource) -> Result<Report> {
    let (report, _) = merge_all(config, source)?;
    Ok(report)
}

fn merge_all(config: &Config, source: &dyn SecretSource) -> Result<(Report, Vec<String>)> {
    let mut vars = env::load(&config.target)?;
    let file_keys = vars.len();

    let applied = merge::run(source, &config.bundles, &mut vars)?;
    let lines = env::serialize(&vars);

    let report = Report {
        path: config.target.clone(),
        file_keys,
        bundles: config.bundles.iter().cloned().zip(applied).collect(),
        keys: vars.into_keys().filter(|key| !key.is_empty()).collect(),
        written: false,
    };

    Ok((report, lines))
}
