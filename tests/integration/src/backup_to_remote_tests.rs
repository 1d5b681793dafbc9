//! End-to-end flow: backup document -> sharded layout -> batched push
//!
//! Exercises every crate together against a real working tree and a bare
//! remote.

use std::fs;
use std::time::Duration;

use notes_fs::NormalizedPath;
use notes_git::{EnumerateMode, Enumerator, GitCli, pending_commits};
use notes_model::{Backup, Label, Note, ShardWriter};
use notes_sync::{BatchSynchronizer, SyncConfig};
use notes_test_utils::SyncFixture;
use notes_test_utils::git::{commit_subjects, git};
use pretty_assertions::assert_eq;

fn backup_with(n: usize) -> Backup {
    let notes = (0..n)
        .map(|i| {
            let mut note = Note::new(format!("note-{i:03}"), format!("Note {i}"));
            note.labels.push("work".into());
            note
        })
        .collect();
    Backup::new(
        notes,
        vec![Label {
            id: "work".into(),
            name: "Work".into(),
        }],
    )
}

fn config(batch_size: usize) -> SyncConfig {
    SyncConfig {
        batch_size,
        retry_delay: Duration::ZERO,
        inter_batch_delay: Duration::ZERO,
        commit_prefix: "Upload notes".into(),
        ..SyncConfig::default()
    }
}

fn sync(fixture: &SyncFixture, mode: EnumerateMode, batch_size: usize) -> notes_sync::SyncOutcome {
    let items = Enumerator::new(fixture.work(), "data", mode)
        .enumerate()
        .unwrap();
    let config = config(batch_size);
    let transport = GitCli::new(config.transport_config(fixture.work()));
    BatchSynchronizer::new(transport, config).run(&items).unwrap()
}

#[test]
fn test_backup_is_sharded_and_pushed_in_batches() {
    let fixture = SyncFixture::new();
    let backup_path = NormalizedPath::new(fixture.root().join("keep-backup.json"));
    backup_with(10).save(&backup_path).unwrap();

    let loaded = Backup::load(&backup_path).unwrap();
    let report = ShardWriter::new(fixture.work().join("data"))
        .write(&loaded)
        .unwrap();
    assert_eq!(report.notes_written, 10);

    // 10 notes + labels.json + bundle.json
    let outcome = sync(&fixture, EnumerateMode::All, 5);

    assert!(outcome.is_complete());
    assert_eq!(outcome.total_batches, 3);
    assert_eq!(outcome.pushed_items(), 12);
    assert_eq!(
        commit_subjects(fixture.remote(), "main")[1..],
        [
            "Upload notes batch 1 of 3",
            "Upload notes batch 2 of 3",
            "Upload notes batch 3 of 3"
        ]
    );

    let remote_files = git(fixture.remote(), &["ls-tree", "-r", "--name-only", "main"]);
    assert!(remote_files.contains("data/notes/note-009.json"));
    assert!(remote_files.contains("data/bundle.json"));
    assert!(pending_commits(fixture.work(), "origin", "main").unwrap().is_empty());
}

#[test]
fn test_resharding_after_edit_pushes_only_changed_files() {
    let fixture = SyncFixture::new();
    let out = fixture.work().join("data");
    let mut backup = backup_with(4);
    ShardWriter::new(out.as_path()).write(&backup).unwrap();
    assert!(sync(&fixture, EnumerateMode::Changed, 100).is_complete());

    backup.notes[2].content = "edited".into();
    ShardWriter::new(out.as_path()).write(&backup).unwrap();

    let items = Enumerator::new(fixture.work(), "data", EnumerateMode::Changed)
        .enumerate()
        .unwrap();
    let changed: Vec<&str> = items.iter().map(|i| i.as_str()).collect();
    assert_eq!(changed, vec!["data/bundle.json", "data/notes/note-002.json"]);

    let outcome = sync(&fixture, EnumerateMode::Changed, 100);
    assert!(outcome.is_complete());
    assert_eq!(outcome.pushed_items(), 2);
    assert_eq!(fixture.remote_commit_count(), 3);
}

#[test]
fn test_sharded_note_matches_backup_entry() {
    let fixture = SyncFixture::new();
    let backup = backup_with(1);
    ShardWriter::new(fixture.work().join("data"))
        .write(&backup)
        .unwrap();

    let raw = fs::read_to_string(fixture.work().join("data/notes/note-000.json")).unwrap();
    let note: Note = serde_json::from_str(&raw).unwrap();

    assert_eq!(note, backup.notes[0]);
}
