//! Command-line interface.
//!
//! Every input that is not a flag arrives through the environment variables
//! CI pipelines already set, via clap's `env` support.

pub mod completions;
pub mod generate;
pub mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// secretenv - materialize a .env file from AWS Secrets Manager.
#[derive(Parser, Debug)]
#[command(
    name = "secretenv",
    about = "Merge AWS Secrets Manager bundles into a .env file",
    version,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub generate: GenerateArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options for generating the env file.
#[derive(Args, Debug, Default, Clone)]
pub struct GenerateArgs {
    /// Env file to merge into
    #[arg(short, long, env = "DOTENV_FILE_PATH")]
    pub file: Option<PathBuf>,

    /// Directory the env file lives in
    #[arg(long, env = "CI_PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// Secret ids to merge, in order; later ones win
    #[arg(short, long, env = "AWS_SECRET_CONFIGS", value_delimiter = ',')]
    pub secrets: Vec<String>,

    /// AWS profile used to fetch secrets
    #[arg(short, long, env = "DOTENV_AWS_PROFILE")]
    pub profile: Option<String>,

    /// AWS region used to fetch secrets
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Settings file (defaults to .secretenv.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show which keys would be written without rewriting the file
    #[arg(long)]
    pub dry_run: bool,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Execute the parsed command line.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    match cli.command {
        Some(Command::Completions { shell }) => completions::execute(shell),
        None => generate::execute(cli.generate),
    }
}
