use notes_fs::NormalizedPath;
use notes_model::{Backup, Error, Label, Note};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_missing_sections_default_to_empty() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("backup.json");
    fs::write(&file, r#"{"notes": [{"id": "a", "title": "Hi"}]}"#).unwrap();

    let backup = Backup::load(&NormalizedPath::new(&file)).unwrap();

    assert_eq!(backup.notes.len(), 1);
    assert!(backup.labels.is_empty());
}

#[test]
fn test_save_then_load_preserves_unicode() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("backup.json"));
    let mut note = Note::new("n1", "장보기");
    note.labels.push("l1".into());
    let backup = Backup::new(
        vec![note],
        vec![Label {
            id: "l1".into(),
            name: "집".into(),
        }],
    );

    backup.save(&path).unwrap();

    let raw = fs::read_to_string(path.to_native()).unwrap();
    assert!(raw.contains("장보기"), "non-ASCII text must not be escaped");
    assert!(raw.contains("\n  \"notes\""), "two-space indentation expected");
    assert_eq!(Backup::load(&path).unwrap(), backup);
}

#[test]
fn test_load_malformed_document() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("backup.json");
    fs::write(&file, "{ not json").unwrap();

    let err = Backup::load(&NormalizedPath::new(&file)).unwrap_err();
    assert!(matches!(err, Error::Json { .. }));
}

#[test]
fn test_compact_json_is_single_line() {
    let backup = Backup::new(vec![Note::new("a", "t")], Vec::new());
    let compact = backup.to_compact_json().unwrap();
    assert!(!compact.contains('\n'));
    assert!(compact.starts_with("{\"notes\":["));
}
