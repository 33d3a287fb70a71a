//! Pipeline integration tests
//!
//! Runs the full scan, join and publish pipeline against fixture directories.

use miru_repo_scanner::{generate, ExtensionRecord, RepoConfig, ScanError};
use std::fs;
use tempfile::TempDir;

/// Create a fixture with a `repo/` directory and a results file
fn create_test_fixture() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let base = temp_dir.path();

    let repo = base.join("repo");
    fs::create_dir_all(&repo).expect("Failed to create repo directory");

    fs::write(
        repo.join("foo.ext"),
        "// ==MiruExtension==\n// @name Foo\n// @package com.foo\n// @version 1.0\n// ==/MiruExtension==\n",
    )
    .expect("Failed to write foo.ext");

    fs::write(
        repo.join("bar.js"),
        r"// ==MiruExtension==
// @name         Bar
// @version      v0.1.0
// @author       someone
// @lang         en
// @package      com.bar
// @type         manga
// @nsfw         false
// ==/MiruExtension==
",
    )
    .expect("Failed to write bar.js");

    fs::write(
        repo.join("spicy.js"),
        "// ==MiruExtension==\n// @name Spicy\n// @package com.spicy\n// @nsfw true\n// ==/MiruExtension==\n",
    )
    .expect("Failed to write spicy.js");

    fs::write(repo.join("notes.txt"), "no metadata here").expect("Failed to write notes.txt");
    fs::write(repo.join("binary.bin"), [0xff, 0xfe, 0x00]).expect("Failed to write binary.bin");

    let lib = base.join("lib");
    fs::create_dir_all(&lib).expect("Failed to create lib directory");
    fs::write(
        lib.join("test.json"),
        r#"{
            "com.foo": {"status": "pass"},
            "com.bar": {"status": "fail"},
            "com.spicy": {"status": "pass"},
            "com.gone": {"status": "timeout"}
        }"#,
    )
    .expect("Failed to write test.json");

    temp_dir
}

fn fixture_config(base: &std::path::Path) -> RepoConfig {
    RepoConfig {
        repo_dir: base.join("repo"),
        test_results: base.join("lib").join("test.json"),
        output_dir: base.to_path_buf(),
        ..RepoConfig::default()
    }
}

#[test]
fn test_generate_full_fixture() {
    let fixture = create_test_fixture();
    let config = fixture_config(fixture.path());

    let report = generate(&config).expect("generate should succeed");

    let urls: Vec<_> = report.extensions.iter().map(ExtensionRecord::url).collect();
    assert_eq!(urls, vec!["bar.js", "foo.ext", "spicy.js"]);

    assert_eq!(report.summary.total, 4);
    assert_eq!(report.summary.passed, 2);
    assert_eq!(report.summary.failed, 1);
    assert_eq!(report.summary.other(), 1);
    assert_eq!(report.hidden_count(), 1);
}

#[test]
fn test_index_contains_every_extension() {
    let fixture = create_test_fixture();
    let config = fixture_config(fixture.path());
    generate(&config).unwrap();

    let index = fs::read_to_string(config.index_path()).unwrap();
    let records: Vec<ExtensionRecord> = serde_json::from_str(&index).unwrap();
    assert_eq!(records.len(), 3);
    assert!(records.iter().any(|r| r.url() == "spicy.js" && r.is_nsfw()));
}

#[test]
fn test_listing_rows() {
    let fixture = create_test_fixture();
    let config = fixture_config(fixture.path());
    generate(&config).unwrap();

    let readme = fs::read_to_string(config.listing_path()).unwrap();
    assert!(readme.contains(
        "| Foo | com.foo | 1.0 | | | | ✅ | [Source Code](https://github.com/miru-project/repo/blob/main/repo/foo.ext) |"
    ));
    assert!(readme.contains(
        "| Bar | com.bar | v0.1.0 | someone | en | manga | ❌ | [Source Code](https://github.com/miru-project/repo/blob/main/repo/bar.js) |"
    ));
    assert!(!readme.contains("Spicy"));
    assert!(readme.contains("![4](https://img.shields.io/badge/Total-4-blue)"));
    assert!(readme.contains("![2](https://img.shields.io/badge/Passed-2-green)"));
    assert!(readme.contains("![1](https://img.shields.io/badge/Failed-1-red)"));

    let rows = readme.lines().filter(|l| l.contains("[Source Code]")).count();
    assert_eq!(rows, 2);
}

#[test]
fn test_missing_results_file() {
    let fixture = create_test_fixture();
    let mut config = fixture_config(fixture.path());
    config.test_results = fixture.path().join("lib").join("absent.json");

    let report = generate(&config).unwrap();
    assert_eq!(report.summary.total, 0);

    let readme = fs::read_to_string(config.listing_path()).unwrap();
    assert!(readme.contains("| Foo | com.foo | 1.0 | | | | -- |"));
}

#[test]
fn test_empty_repo() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("repo")).unwrap();
    let config = fixture_config(temp_dir.path());

    let report = generate(&config).unwrap();
    assert!(report.extensions.is_empty());

    assert_eq!(fs::read_to_string(config.index_path()).unwrap(), "[]\n");
    let readme = fs::read_to_string(config.listing_path()).unwrap();
    assert!(readme.ends_with("| ---- | ---- | ---- | ---- | ---- | ---- | ---- | ---- |\n"));
}

#[test]
fn test_missing_repo_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let config = fixture_config(temp_dir.path());

    let result = generate(&config);
    assert!(matches!(result, Err(ScanError::InvalidPath(_))));
    assert!(!config.index_path().exists());
    assert!(!config.listing_path().exists());
}

#[test]
fn test_unwritable_output_keeps_previous_pair() {
    let fixture = create_test_fixture();
    let mut config = fixture_config(fixture.path());
    generate(&config).unwrap();
    let index_before = fs::read_to_string(config.index_path()).unwrap();

    fs::write(config.repo_dir.join("new.js"), "MiruExtension\n// @name New\n/MiruExtension").unwrap();
    config.output_dir = fixture.path().join("does-not-exist");

    let result = generate(&config);
    assert!(matches!(result, Err(ScanError::Publish { .. })));
    assert_eq!(
        fs::read_to_string(fixture.path().join("index.json")).unwrap(),
        index_before
    );
}

#[cfg(unix)]
#[test]
fn test_regenerate_keeps_output_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let fixture = create_test_fixture();
    let config = fixture_config(fixture.path());
    fs::write(config.listing_path(), "old").unwrap();
    fs::set_permissions(config.listing_path(), fs::Permissions::from_mode(0o644)).unwrap();

    generate(&config).unwrap();

    let mode = |p: &std::path::Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode(&config.listing_path()), 0o644);
    assert_eq!(mode(&config.index_path()), 0o644);
}

#[test]
fn test_results_with_unreadable_entries_count_toward_total() {
    let fixture = create_test_fixture();
    let config = fixture_config(fixture.path());
    fs::write(
        &config.test_results,
        r#"{"com.foo": {"status": "pass"}, "com.bar": "fail", "com.odd": {"status": 3}, "com.nil": null}"#,
    )
    .unwrap();

    let report = generate(&config).unwrap();
    assert_eq!(report.summary.total, 4);
    assert_eq!(report.summary.passed, 1);
    assert_eq!(report.summary.failed, 0);

    let readme = fs::read_to_string(config.listing_path()).unwrap();
    assert!(readme.contains("| Bar | com.bar | v0.1.0 | someone | en | manga | -- |"));
}
