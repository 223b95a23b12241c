//! Constants used throughout secretenv.
//!
//! Centralizes magic strings and configuration values.

/// Default target file name (.env).
pub const ENV_FILE: &str = ".env";

/// Settings file picked up from the working directory when present.
pub const CONFIG_FILE: &str = ".secretenv.toml";

/// Prefix marking a comment line in the env file.
pub const COMMENT_PREFIX: char = '#';

/// Values starting with this are written unquoted.
pub const PATH_PREFIX: char = '/';

/// Separator between bundle ids in `AWS_SECRET_CONFIGS`.
pub const BUNDLE_SEPARATOR: char = ',';

/// Secrets Manager version stage that is always read.
pub const VERSION_STAGE: &str = "AWSCURRENT";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SECRETENV_LOG";
