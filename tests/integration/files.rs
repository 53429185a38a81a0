//! File and directory checking through the I/O boundary.

use std::fs;

use super::common::{sample_checker, write_word_list};
use morf::{Dictionary, SpellError, Spellchecker, WordListDictionary};
use tempfile::TempDir;

#[test]
fn test_check_file_attaches_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("note.txt");
    fs::write(&path, "hello wrold").unwrap();

    let checker = sample_checker();
    let doc = checker.check_file(&path).unwrap();
    assert_eq!(doc.file.as_deref(), Some(path.as_path()));
    assert_eq!(doc.word_count, 2);
    assert_eq!(doc.errors.len(), 1);
}

#[test]
fn test_check_file_missing_target() {
    let checker = sample_checker();
    let err = checker.check_file("/definitely/not/here.txt").unwrap_err();
    assert_eq!(err.to_string(), "file not found: /definitely/not/here.txt");
}

#[test]
fn test_check_directory_filters_and_sorts() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("b.txt"), "hello").unwrap();
    fs::write(dir.path().join("a.txt"), "wrold").unwrap();
    fs::write(dir.path().join("skip.md"), "zzzz").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested").join("c.txt"), "world").unwrap();

    let checker = sample_checker();
    let docs = checker.check_directory(dir.path(), "*.txt").unwrap();
    assert_eq!(docs.len(), 3);

    // Sorted path order: a.txt, b.txt, nested/c.txt.
    let names: Vec<String> = docs
        .iter()
        .map(|d| {
            d.file
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
        .collect();
    assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);

    assert!(!docs[0].success());
    assert!(docs[1].success());
    assert!(docs[2].success());
}

#[test]
fn test_dictionary_loaded_from_stream_then_checked() {
    let (_dir, path) = write_word_list(&["hello", "world"]);
    let dict = WordListDictionary::from_path("en-US", &path, false).unwrap();
    assert_eq!(
        dict.metadata().get("source").map(String::as_str),
        Some(path.display().to_string().as_str())
    );
    let checker = Spellchecker::new(Box::new(dict));
    assert!(checker.check("hello world").success());
}

#[test]
fn test_error_display_matches_cli_contract() {
    let not_found = SpellError::NotFound {
        path: "/tmp/x.dic".into(),
    };
    assert_eq!(not_found.to_string(), "file not found: /tmp/x.dic");

    let parse = SpellError::parse("/tmp/x.aff", 3, "malformed affix header");
    assert_eq!(
        parse.to_string(),
        "parse error at /tmp/x.aff:3: malformed affix header"
    );

    let config = SpellError::Configuration("unknown dictionary backend \"x\"".into());
    assert!(config.to_string().starts_with("configuration error: "));
}
