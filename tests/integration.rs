// End-to-end build tests: content tree in, JSON artifacts out

mod common;

use std::fs;

use tempfile::TempDir;

use common::{assert_dense_ids, build_config, read_records, ContentTree};
use mdindex::core::pipeline::BuildPipeline;

#[test]
fn test_archive_build_end_to_end() {
    let content = ContentTree::archive();
    let out = TempDir::new().unwrap();

    let pipeline = BuildPipeline::new(build_config(content.path(), out.path())).unwrap();
    let stats = pipeline.run().unwrap();

    assert_eq!(stats.files_discovered, 4);
    assert_eq!(stats.documents_parsed, 4);
    assert_eq!(stats.documents_skipped, 0);
    assert_eq!(stats.posts_written, 3);
    assert_eq!(stats.replies_written, 1);

    let posts = read_records(&out.path().join("search-data.json"));
    let replies = read_records(&out.path().join("search-data-replies.json"));

    assert_dense_ids(&posts);
    assert_dense_ids(&replies);

    // Dated posts ascending, undated page last
    let titles: Vec<&str> = posts.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["101", "115", "about"]);

    // Reply ids are independent of discovery position
    assert_eq!(replies[0].id, 0);
    assert_eq!(replies[0].title, "116");
}

#[test]
fn test_record_contents_and_search_fields() {
    let content = ContentTree::archive();
    let out = TempDir::new().unwrap();

    BuildPipeline::new(build_config(content.path(), out.path()))
        .unwrap()
        .run()
        .unwrap();

    let posts = read_records(&out.path().join("search-data.json"));

    let tagged = &posts[0];
    assert_eq!(tagged.date, "Jan 15, 2024 08:30:00");
    assert_eq!(tagged.tags, vec!["rust", "search"]);
    assert_eq!(tagged.search_tags.as_deref(), Some("rust search"));
    assert!(tagged.search_content.contains("search"));

    let cjk = &posts[1];
    assert_eq!(cjk.date, "Sep 06, 2025 14:39:07");
    // Image markup removed entirely
    assert!(!cjk.content.contains("!["));
    assert!(!cjk.content.contains("shot.png"));
    // CJK n-grams present alongside the full word
    assert!(cjk.search_content.contains("搜索引擎测试"));
    assert!(cjk.search_content.contains("搜索"));
    assert!(cjk.search_content.contains("测试"));
    assert!(cjk.search_content.contains("mixed"));
    // Tag-less record omits both tag fields
    assert!(cjk.tags.is_empty());
    assert!(cjk.search_tags.is_none());
}

#[test]
fn test_omitted_fields_absent_from_json() {
    let content = ContentTree::with_files(&[("untagged.md", "no frontmatter here\n")]);
    let out = TempDir::new().unwrap();

    BuildPipeline::new(build_config(content.path(), out.path()))
        .unwrap()
        .run()
        .unwrap();

    let json = fs::read_to_string(out.path().join("search-data.json")).unwrap();
    assert!(!json.contains("\"tags\""));
    assert!(!json.contains("\"searchTags\""));
    assert!(json.contains("\"searchContent\""));
}

#[test]
fn test_rerun_is_byte_identical() {
    let content = ContentTree::archive();
    let out = TempDir::new().unwrap();

    let pipeline = BuildPipeline::new(build_config(content.path(), out.path())).unwrap();

    pipeline.run().unwrap();
    let first_posts = fs::read(out.path().join("search-data.json")).unwrap();
    let first_replies = fs::read(out.path().join("search-data-replies.json")).unwrap();

    pipeline.run().unwrap();
    let second_posts = fs::read(out.path().join("search-data.json")).unwrap();
    let second_replies = fs::read(out.path().join("search-data-replies.json")).unwrap();

    assert_eq!(first_posts, second_posts);
    assert_eq!(first_replies, second_replies);
}

#[test]
fn test_frontmatter_generations_coexist() {
    let content = ContentTree::with_files(&[
        (
            "bracket.md",
            "---\ntitle: bracket\ndate: 2024-01-01T00:00:00.000Z\ntags: [a, b, c]\n---\nx\n",
        ),
        (
            "csv.md",
            "---\ntitle: csv\ndate: 2024-01-02T00:00:00.000Z\ntags: a, b\n---\nx\n",
        ),
        (
            "quoted.md",
            "---\ntitle: quoted\ndate: 2024-01-03T00:00:00.000Z\ntags: \"a b c\"\n---\nx\n",
        ),
        (
            "spaced.md",
            "---\ntitle: spaced\ndate: 2024-01-04T00:00:00.000Z\ntags: a b c\n---\nx\n",
        ),
    ]);
    let out = TempDir::new().unwrap();

    BuildPipeline::new(build_config(content.path(), out.path()))
        .unwrap()
        .run()
        .unwrap();

    let posts = read_records(&out.path().join("search-data.json"));
    assert_eq!(posts.len(), 4);

    assert_eq!(posts[0].tags, vec!["a", "b", "c"]);
    assert_eq!(posts[1].tags, vec!["a", "b"]);
    assert_eq!(posts[2].tags, vec!["a", "b", "c"]);
    assert_eq!(posts[3].tags, vec!["a", "b", "c"]);
}

#[test]
fn test_malformed_document_skipped_not_fatal() {
    let content = ContentTree::with_files(&[(
        "good.md",
        "---\ndate: 2024-01-01T00:00:00.000Z\n---\nfine\n",
    )]);
    fs::write(content.path().join("binary.md"), [0xff, 0xfe, 0x00, 0x01]).unwrap();
    let out = TempDir::new().unwrap();

    let stats = BuildPipeline::new(build_config(content.path(), out.path()))
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(stats.documents_skipped, 1);
    assert_eq!(stats.posts_written, 1);

    let posts = read_records(&out.path().join("search-data.json"));
    assert_eq!(posts[0].content, "fine");
}

#[test]
fn test_missing_root_yields_empty_artifacts() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("absent");
    let out = temp.path().join("docs");

    let stats = BuildPipeline::new(build_config(&missing, &out))
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(stats.files_discovered, 0);
    assert!(read_records(&out.join("search-data.json")).is_empty());
    assert!(read_records(&out.join("search-data-replies.json")).is_empty());
}

#[test]
fn test_unwritable_output_is_fatal() {
    let content = ContentTree::with_files(&[("a.md", "body\n")]);
    let out = TempDir::new().unwrap();

    // A file where the output directory should be
    let blocked = out.path().join("docs");
    fs::write(&blocked, "not a directory").unwrap();

    let result = BuildPipeline::new(build_config(content.path(), &blocked))
        .unwrap()
        .run();

    assert!(result.is_err());
}
