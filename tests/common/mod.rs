// Shared fixtures for integration testing

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use mdindex::core::config::Config;
use mdindex::core::types::SearchRecord;

/// A content tree fixture built in a temporary directory
pub struct ContentTree {
    pub dir: TempDir,
}

impl ContentTree {
    /// Build a tree from (relative path, contents) pairs
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        for (path, content) in files {
            let full_path = dir.path().join(path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent).expect("Failed to create parent dir");
            }
            fs::write(&full_path, content).expect("Failed to write fixture file");
        }
        Self { dir }
    }

    /// A small archive resembling the production layout:
    /// dated posts under year/month/day, one reply, one page
    pub fn archive() -> Self {
        Self::with_files(&[
            (
                "2024/01/15/101.md",
                "---\nid: 101\ndate: 2024-01-15T08:30:00.000Z\nreply: false\ntags: [rust, search]\n---\n\nFirst post about search.\n",
            ),
            (
                "2025/09/06/115.md",
                "---\nid: 115\ndate: 2025-09-06T14:39:07.000Z\nreply: false\n---\n\n搜索引擎测试 with mixed text ![screenshot](shot.png)\n",
            ),
            (
                "2025/09/06/116.md",
                "---\nid: 116\ndate: 2025-09-06T15:00:00.000Z\nreply: true\n---\n\nReplying to the post above.\n",
            ),
            ("about.md", "# About\n\nAn undated page.\n"),
        ])
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Configuration pointing a build at a fixture tree
pub fn build_config(content_dir: &Path, output_dir: &Path) -> Config {
    let mut config = Config::default();
    config.content.root_dir = content_dir.to_path_buf();
    config.output.dir = output_dir.to_path_buf();
    config
}

/// Read an emitted record set back from disk
pub fn read_records(path: &PathBuf) -> Vec<SearchRecord> {
    let json = fs::read_to_string(path).expect("Failed to read output artifact");
    serde_json::from_str(&json).expect("Output artifact is not valid JSON")
}

/// Assert ids within a record set are exactly 0..n-1
pub fn assert_dense_ids(records: &[SearchRecord]) {
    for (expected, record) in records.iter().enumerate() {
        assert_eq!(
            record.id, expected,
            "Expected dense zero-based ids, got {} at position {}",
            record.id, expected
        );
    }
}
