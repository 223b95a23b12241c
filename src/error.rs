//! Error types.
//!
//! Each stage of a run has its own error enum. They are wrapped by [`Error`],
//! and every one of them is fatal for the run.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for secretenv operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Coarse classification of an [`Error`].
///
/// Lets callers branch on what went wrong without matching message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The target file could not be created, read or written.
    Io,
    /// A secret bundle could not be fetched.
    Transport,
    /// A fetched payload was not a flat JSON object of strings.
    MalformedSecretPayload,
    /// The run was misconfigured.
    Config,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Store(_) => ErrorKind::Io,
            Self::Fetch(_) => ErrorKind::Transport,
            Self::Decode(_) => ErrorKind::MalformedSecretPayload,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

/// Errors touching the target env file.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8 text", path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while retrieving a secret bundle.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("cannot decrypt secret {id}: {message}")]
    DecryptionFailure { id: String, message: String },

    #[error("secret service error for {id}: {message}")]
    InternalService { id: String, message: String },

    #[error("invalid parameter for secret {id}: {message}")]
    InvalidParameter { id: String, message: String },

    #[error("invalid request for secret {id}: {message}")]
    InvalidRequest { id: String, message: String },

    #[error("secret not found: {id}")]
    NotFound { id: String },

    #[error("secret {id} has no string or binary value")]
    EmptySecret { id: String },

    #[error("failed to fetch secret {id}: {message}")]
    Transport { id: String, message: String },

    #[error("failed to start async runtime: {0}")]
    Runtime(String),

    #[error("{0} support not compiled. Rebuild with: cargo install secretenv --features {0}")]
    Unsupported(&'static str),
}

/// Errors raised while decoding a fetched bundle.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("secret {id} is not a flat JSON object of strings: {source}")]
    MalformedSecretPayload {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("secret {id} has a binary value that is not valid UTF-8")]
    InvalidUtf8 { id: String },
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no secret bundles configured")]
    NoBundles,

    #[error("failed to read config file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
