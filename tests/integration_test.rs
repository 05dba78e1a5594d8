//! Integration tests for mergeproject
//!
//! These tests exercise the file-level read/save entry points.

use mergeproject::project::{
    PathTriple, ProjectDocument, ProjectEntry, ProjectError, Side, WriterConfig,
};
use std::fs;
use tempfile::tempdir;

/// Save a document and read it back from disk
#[test]
fn test_save_read_cycle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("compare.WinMerge");

    let mut first = ProjectEntry::with_paths(PathTriple::two_way("C:\\old", "C:\\new"));
    first.set_read_only(Side::Left, true);
    first.subfolders.set(1);
    first.filter.set("*.rs".to_string());

    let mut second = ProjectEntry::with_paths(PathTriple::three_way("/a", "/base", "/b"));
    second
        .hidden_items
        .set(vec!["target".to_string(), ".git".to_string()]);

    let document = ProjectDocument::from(vec![first, second]);
    document.save_file(&path).unwrap();

    let loaded = ProjectDocument::read_file(&path).unwrap();
    assert_eq!(loaded.len(), 2);

    let entry = &loaded.entries()[0];
    assert_eq!(entry.path(Side::Left), ("C:\\old", true));
    assert_eq!(entry.right(), "C:\\new");
    assert_eq!(entry.filter.get(), "*.rs");
    let mut recurse = false;
    entry.paths_and_recurse(&mut recurse);
    assert!(recurse);

    let entry = &loaded.entries()[1];
    assert_eq!(entry.middle(), "/base");
    assert_eq!(
        entry.hidden_items.get(),
        &vec!["target".to_string(), ".git".to_string()]
    );
}

/// Saving over an existing project replaces it completely
#[test]
fn test_save_replaces_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("replace.WinMerge");

    let big: ProjectDocument = (0..10)
        .map(|i| ProjectEntry::with_paths(PathTriple::two_way(format!("l{i}"), format!("r{i}"))))
        .collect();
    big.save_file(&path).unwrap();

    let small = ProjectDocument::from(vec![ProjectEntry::with_paths(PathTriple::two_way(
        "x", "y",
    ))]);
    small.save_file(&path).unwrap();

    let loaded = ProjectDocument::read_file(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.entries()[0].left(), "x");

    // Only the target is left behind in the directory
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

/// Custom indentation reaches the file
#[test]
fn test_save_with_tab_indent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tabs.WinMerge");

    let config = WriterConfig {
        indent_char: b'\t',
        indent_size: 1,
    };
    ProjectDocument::from(vec![ProjectEntry::with_paths(PathTriple::two_way("a", "b"))])
        .save_file_with(&path, &config)
        .unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\n\t<paths>"));
    assert!(text.contains("\n\t\t<left>a</left>"));
}

/// Reading a file that does not exist is an I/O error
#[test]
fn test_read_missing_file() {
    let dir = tempdir().unwrap();
    let err = ProjectDocument::read_file(dir.path().join("missing.WinMerge")).unwrap_err();
    assert!(matches!(err, ProjectError::Io(_)));
}

/// Saving into a missing directory is an I/O error
#[test]
fn test_save_into_missing_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no").join("such").join("dir.WinMerge");
    let err = ProjectDocument::new().save_file(&path).unwrap_err();
    assert!(matches!(err, ProjectError::Io(_)));
}

/// A truncated file on disk is reported as malformed
#[test]
fn test_read_truncated_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("truncated.WinMerge");
    fs::write(&path, "<?xml version=\"1.0\"?>\n<project>\n  <paths>\n    <left>C:\\a").unwrap();

    let err = ProjectDocument::read_file(&path).unwrap_err();
    assert!(err.is_malformed(), "unexpected error: {err}");
}

/// A project written by hand with extra elements and odd values still loads
#[test]
fn test_read_hand_edited_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("edited.WinMerge");
    fs::write(
        &path,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- edited by hand -->
<project version="9">
  <paths>
    <left>D:\src</left>
    <right>D:\dst</right>
    <window-layout>vertical</window-layout>
    <subfolders>yes</subfolders>
    <white-spaces> 1 </white-spaces>
  </paths>
</project>
"#,
    )
    .unwrap();

    let loaded = ProjectDocument::read_file(&path).unwrap();
    let entry = &loaded.entries()[0];
    assert_eq!(entry.left(), "D:\\src");
    assert_eq!(entry.subfolders.explicit(), Some(&0));
    assert_eq!(entry.ignore_white.explicit(), Some(&1));
}
