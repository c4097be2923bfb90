//! Build pipeline orchestration.
//!
//! Coordinates the end-to-end index build:
//! 1. Walk the content tree
//! 2. Read and parse each document (frontmatter + body)
//! 3. Assemble output records
//! 4. Order, partition, and emit the JSON artifacts
//!
//! Fully synchronous and single-threaded; every file is processed
//! sequentially. Per-document failures are logged and absorbed,
//! output failures abort the run.

use std::fs;
use std::time::Instant;

use crate::core::assembler;
use crate::core::config::Config;
use crate::core::discovery::DocumentWalker;
use crate::core::error::{IndexError, Result};
use crate::core::frontmatter;
use crate::core::output;
use crate::core::types::{BuildStats, ParsedDocument, SourceDocument};

/// Orchestrates one index build run
pub struct BuildPipeline {
    config: Config,
    walker: DocumentWalker,
}

impl BuildPipeline {
    /// Create a new pipeline from a validated configuration
    pub fn new(config: Config) -> Result<Self> {
        let walker = DocumentWalker::new(
            config.content.include_patterns.clone(),
            config.content.exclude_patterns.clone(),
            config.content.max_file_size_mb,
        )?;

        Ok(Self { config, walker })
    }

    /// Run the build and return statistics
    ///
    /// Errors reading or parsing individual documents are logged
    /// with the file's path and do not stop the run; failing to
    /// write an output artifact does.
    pub fn run(&self) -> Result<BuildStats> {
        let start = Instant::now();
        let root = &self.config.content.root_dir;

        tracing::info!("Starting document discovery under {:?}", root);
        let files = self.walker.collect_documents(root)?;
        tracing::info!("Found {} document files", files.len());

        let mut documents = Vec::new();
        let mut skipped = 0;

        for (idx, relative_path) in files.iter().enumerate() {
            if idx % 100 == 0 && idx > 0 {
                tracing::info!("Progress: {}/{} files processed", idx, files.len());
            }

            match self.load_document(relative_path) {
                Ok(source) => {
                    let (fm, body) = frontmatter::parse(&source.raw_text);
                    let parsed = ParsedDocument {
                        frontmatter: fm,
                        body,
                        relative_path: source.relative_path,
                    };
                    tracing::debug!(
                        "Parsed {:?} ({} fields)",
                        parsed.relative_path,
                        parsed.frontmatter.len()
                    );
                    documents.push(assembler::assemble(&parsed));
                }
                Err(e) => {
                    tracing::warn!("Skipping {:?}: {}", relative_path, e);
                    skipped += 1;
                    // Continue processing other documents
                }
            }
        }

        let documents_parsed = documents.len();
        let partitions = output::partition(documents);
        output::write_partitions(
            &partitions,
            &self.config.output.dir,
            &self.config.output.posts_file,
            &self.config.output.replies_file,
        )?;

        let duration_ms = start.elapsed().as_millis() as u64;

        let stats = BuildStats {
            files_discovered: files.len(),
            documents_parsed,
            documents_skipped: skipped,
            posts_written: partitions.posts.len(),
            replies_written: partitions.replies.len(),
            duration_ms,
        };

        tracing::info!(
            "Build complete: {} parsed, {} skipped, {} posts, {} replies in {}ms",
            stats.documents_parsed,
            stats.documents_skipped,
            stats.posts_written,
            stats.replies_written,
            stats.duration_ms
        );

        Ok(stats)
    }

    /// Read one document, keeping its relative path
    fn load_document(&self, relative_path: &std::path::Path) -> Result<SourceDocument> {
        let full_path = self.config.content.root_dir.join(relative_path);

        let raw_text = fs::read_to_string(&full_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                IndexError::ParseFailed(format!("Non-UTF-8 document: {relative_path:?}"))
            } else {
                IndexError::ParseFailed(format!("Failed to read {relative_path:?}: {e}"))
            }
        })?;

        Ok(SourceDocument {
            relative_path: relative_path.to_path_buf(),
            raw_text,
        })
    }
}
