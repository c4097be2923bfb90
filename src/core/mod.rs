//! Core domain logic for the index builder.
//!
//! Everything in here is independent of the CLI shell.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **discovery**: Recursive document enumeration
//! - **frontmatter**: Metadata block extraction and field resolution
//! - **datefmt**: Display-date normalization and ordering keys
//! - **tokenizer**: CJK-aware n-gram tokenization
//! - **assembler**: Title derivation, body cleanup, record assembly
//! - **output**: Ordering, partitioning, JSON emission
//! - **pipeline**: End-to-end build orchestration

pub mod assembler;
pub mod config;
pub mod datefmt;
pub mod discovery;
pub mod error;
pub mod frontmatter;
pub mod output;
pub mod pipeline;
pub mod tokenizer;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{IndexError, Result};
pub use pipeline::BuildPipeline;
