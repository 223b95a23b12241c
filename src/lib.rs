//! secretenv - materialize a `.env` file from AWS Secrets Manager.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── output        # Terminal output helpers
//! │   ├── generate      # Default command: write the env file
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # Run configuration and .secretenv.toml
//!     ├── env           # .env parsing and serialization
//!     ├── merge         # Bundle decoding and overlay
//!     ├── source/       # Secret retrieval backends
//!     │   ├── mod       # SecretSource trait
//!     │   ├── aws       # AWS Secrets Manager
//!     │   └── memory    # In-memory map
//!     └── generate      # load → merge → write pipeline
//! ```
//!
//! # Example
//!
//! ```
//! use secretenv::core::{env, merge};
//!
//! let mut vars = env::parse("FOO=bar\n# comment\nBAZ=/tmp/x\n");
//! merge::overlay(&mut vars, "app", r#"{"FOO":"override"}"#).unwrap();
//!
//! assert_eq!(env::serialize(&vars), vec!["BAZ=/tmp/x", "FOO=\"override\""]);
//! ```

pub mod cli;
pub mod core;
pub mod error;
