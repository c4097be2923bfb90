//! Output ordering, partitioning, and JSON emission.
//!
//! Dated documents sort ascending by timestamp, undated documents
//! follow in discovery order. Records then split by the reply flag
//! into two partitions, each assigned dense zero-based ids
//! independently, and each written as a pretty-printed JSON array.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::assembler::{self, AssembledDocument};
use crate::core::datefmt;
use crate::core::error::{IndexError, Result};
use crate::core::types::SearchRecord;

/// The two emitted record sets of one build run
#[derive(Debug, Default)]
pub struct Partitions {
    /// Primary (non-reply) records
    pub posts: Vec<SearchRecord>,

    /// Reply records, indexed independently of the posts
    pub replies: Vec<SearchRecord>,
}

/// Order documents and split them into reply/non-reply partitions
///
/// The input is expected in discovery order. Sorting is stable:
/// documents whose dates fail to parse keep their relative order,
/// and undated documents are appended after all dated ones.
pub fn partition(documents: Vec<AssembledDocument>) -> Partitions {
    let (mut dated, undated): (Vec<_>, Vec<_>) = documents
        .into_iter()
        .partition(|d| !d.raw_date.is_empty());

    // Stable sort: parseable dates ascending, unparseable dates
    // after them in discovery order
    dated.sort_by_key(|d| match datefmt::parse_sort_key(&d.raw_date) {
        Some(key) => (false, Some(key)),
        None => (true, None),
    });

    let mut partitions = Partitions::default();

    for doc in dated.into_iter().chain(undated) {
        let target = if doc.reply {
            &mut partitions.replies
        } else {
            &mut partitions.posts
        };
        let id = target.len();
        target.push(into_record(doc, id));
    }

    partitions
}

/// Build the serialized record, assigning its partition id
fn into_record(doc: AssembledDocument, id: usize) -> SearchRecord {
    let search_content = assembler::search_content(&doc.content);
    let search_tags = assembler::search_tags(&doc.tags);

    SearchRecord {
        id,
        title: doc.title,
        date: doc.display_date,
        tags: doc.tags,
        content: doc.content,
        search_content,
        search_tags,
    }
}

/// Write both partitions into the output directory
///
/// The directory is created if absent; existing artifacts are fully
/// rewritten. A write failure here is fatal to the run.
pub fn write_partitions(
    partitions: &Partitions,
    dir: &Path,
    posts_file: &str,
    replies_file: &str,
) -> Result<(PathBuf, PathBuf)> {
    fs::create_dir_all(dir).map_err(|e| {
        IndexError::OutputFailed(format!("Failed to create output dir {dir:?}: {e}"))
    })?;

    let posts_path = dir.join(posts_file);
    let replies_path = dir.join(replies_file);

    write_records(&partitions.posts, &posts_path)?;
    write_records(&partitions.replies, &replies_path)?;

    tracing::info!(
        "Wrote {} posts to {:?}, {} replies to {:?}",
        partitions.posts.len(),
        posts_path,
        partitions.replies.len(),
        replies_path
    );

    Ok((posts_path, replies_path))
}

fn write_records(records: &[SearchRecord], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)
        .map_err(|e| IndexError::OutputFailed(format!("Failed to write {path:?}: {e}")))
}
