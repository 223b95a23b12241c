//! Core library components.
//!
//! The merge-and-serialize engine and the collaborators it talks to. Nothing
//! here reads process environment; everything arrives through [`config::Config`].

pub mod config;
pub mod constants;
pub mod env;
pub mod generate;
pub mod merge;
pub mod source;
pub mod types;
