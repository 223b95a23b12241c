//! secretenv - materialize a .env file from AWS Secrets Manager.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use secretenv::cli::output;
use secretenv::cli::{execute, Cli};
use secretenv::core::constants::LOG_ENV;
use secretenv::error::{ConfigError, Error, FetchError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("secretenv=debug")
        } else {
            EnvFilter::new("secretenv=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::NoBundles) => {
                Some("set AWS_SECRET_CONFIGS or pass --secrets")
            }
            Error::Fetch(FetchError::NotFound { .. }) => {
                Some("check the secret id and the AWS profile/region in use")
            }
            Error::Fetch(FetchError::Unsupported(_)) => {
                Some("rebuild with the default features enabled")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
