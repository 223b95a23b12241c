//! Generate command.
//!
//! Resolves the run configuration, fetches every bundle and rewrites the
//! env file.

use std::path::Path;

use tracing::debug;

use crate::cli::output;
use crate::cli::GenerateArgs;
use crate::core::config::{Config, Settings};
use crate::core::constants::CONFIG_FILE;
use crate::core::generate::{self, Report};
use crate::core::source::SecretSource;
use crate::error::Result;

/// Generate the env file, or preview it with `--dry-run`.
pub fn execute(args: GenerateArgs) -> Result<()> {
    let dry_run = args.dry_run;
    let config = resolve(args)?;
    let source = open_source(&config)?;

    if dry_run {
        let report = generate::preview(&config, source.as_ref())?;
        print_preview(&report);
    } else {
        let report = generate::run(&config, source.as_ref())?;
        output::success(&format!(
            "{} generated ({} variables from {} bundles)",
            output::path(&report.path.display().to_string()),
            report.keys.len(),
            report.bundles.len()
        ));
    }

    Ok(())
}

/// Build the run configuration from the settings file and the flags.
pub fn resolve(args: GenerateArgs) -> Result<Config> {
    let file_settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None if Path::new(CONFIG_FILE).exists() => Settings::load(Path::new(CONFIG_FILE))?,
        None => Settings::default(),
    };

    let flag_settings = Settings {
        file: args.file,
        project_dir: args.project_dir,
        secrets: args.secrets,
        profile: args.profile,
        region: args.region,
    };

    file_settings.merge(flag_settings).resolve()
}

#[cfg(feature = "aws")]
fn open_source(config: &Config) -> Result<Box<dyn SecretSource>> {
    use crate::core::source::AwsSecretsManager;

    debug!(profile = ?config.profile, region = ?config.region, "opening secrets manager");
    let source = AwsSecretsManager::new(config.profile.as_deref(), config.region.as_deref())?;
    Ok(Box::new(source))
}

#[cfg(not(feature = "aws"))]
fn open_source(_config: &Config) -> Result<Box<dyn SecretSource>> {
    debug!("no secret source compiled in");
    Err(crate::error::FetchError::Unsupported("aws").into())
}

fn print_preview(report: &Report) {
    output::header(&format!(
        "{} (dry run, not written)",
        output::path(&report.path.display().to_string())
    ));
    output::kv("file", format!("{} keys", report.file_keys));
    for (bundle, keys) in &report.bundles {
        output::kv(bundle, format!("{} keys", keys));
    }

    if report.keys.is_empty() {
        output::dimmed("no variables");
        return;
    }
    println!();
    for key in &report.keys {
        output::list_item(key);
    }
}
