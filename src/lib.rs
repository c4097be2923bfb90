//! mdindex - Search-index builder for Markdown archives
//!
//! Ingests a tree of Markdown documents with optional frontmatter
//! headers and produces a normalized, search-ready index consumed by
//! a client-side search widget.
//!
//! # Architecture
//!
//! - **core**: the build pipeline (CLI-agnostic)
//!   - config, error, types
//!   - discovery (recursive document enumeration)
//!   - frontmatter (heterogeneous metadata parsing)
//!   - datefmt, tokenizer (date normalization, CJK n-grams)
//!   - assembler, output (record assembly, ordered partitions)
//!   - pipeline (orchestration)
//!
//! - **cli**: the thin command-line shell over the pipeline
//!
//! # Key Features
//!
//! - Frontmatter parsing tolerating several metadata generations
//!   (bracketed, CSV, quoted, and space-separated tag syntaxes)
//! - CJK substring search without a dictionary segmenter (1-4-gram
//!   expansion per word)
//! - Deterministic output: reruns over unchanged input are
//!   byte-identical
//! - Per-document error recovery; a malformed file never aborts a
//!   build

// Core domain logic (CLI-agnostic)
pub mod core;

// Command-line shell
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{IndexError, Result};
pub use core::pipeline::BuildPipeline;
pub use core::types::*;
